//! Purpose: Locate and isolate the JSON expression on the third line.
//! Exports: `PREFIX`, `EXPRESSION_LINE`, `extract_expression`, guard messages.
//! Role: The two validation guards of the pipeline; pure, no I/O.
//! Invariants: Guard messages are user-facing contracts and must not change.
//! Invariants: Only the prefix and at most one trailing `\n` are removed.
use super::error::{Error, ErrorKind};

pub const PREFIX: &str = "expression: ";

/// 1-indexed line that must carry the expression.
pub const EXPRESSION_LINE: usize = 3;

pub const TOO_FEW_LINES: &str = "File has less than 3 lines";
pub const MISSING_PREFIX: &str = "Third line does not start with 'expression: '";

pub fn extract_expression<S: AsRef<str>>(lines: &[S]) -> Result<&str, Error> {
    let line = lines
        .get(EXPRESSION_LINE - 1)
        .map(AsRef::as_ref)
        .ok_or_else(|| Error::new(ErrorKind::Invalid).with_message(TOO_FEW_LINES))?;

    let rest = line.strip_prefix(PREFIX).ok_or_else(|| {
        Error::new(ErrorKind::Invalid)
            .with_message(MISSING_PREFIX)
            .with_line(EXPRESSION_LINE)
    })?;

    Ok(rest.strip_suffix('\n').unwrap_or(rest))
}
