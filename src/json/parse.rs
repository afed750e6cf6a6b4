//! Purpose: Provide the runtime JSON decode entrypoint and failure diagnostics.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Decode errors are returned unmodified; diagnostics are derived, not substituted.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Truncated,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
        }
    }
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    // Decoding a `Value` from text never yields `Data` or `Io`.
    match err.classify() {
        Category::Eof => ParseFailureCategory::Truncated,
        _ => ParseFailureCategory::Syntax,
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    let advice = match category {
        ParseFailureCategory::Truncated => "The value ends early; check for unclosed quotes, brackets, or braces.",
        ParseFailureCategory::Syntax => "Write the value as JSON text, e.g. a quoted string like \"text\".",
    };
    format!(
        "{advice} (parse category: {}; context: {context})",
        category.label()
    )
}
