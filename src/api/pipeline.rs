//! Purpose: Run the read → guard → strip → decode pipeline over one file.
//! Exports: `read_lines`, `decode_expression`, `decode_file`.
//! Role: Glue between filesystem access, the expression guards, and the JSON seam.
//! Invariants: The input file is opened once per call and never written.
//! Invariants: Underlying io/serde_json errors stay reachable via `Error::source`.
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::core::error::{Error, ErrorKind};
use crate::core::expression::{self, EXPRESSION_LINE};
use crate::core::lines::split_lines;
use crate::json::parse;

/// Reads `path` as UTF-8 text and splits it into terminator-preserving lines.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| Error::from_io(path, err))?;
    let lines = split_lines(&text);
    debug!(path = %path.display(), bytes = text.len(), lines = lines.len(), "read input");
    Ok(lines)
}

pub fn decode_expression(text: &str) -> Result<Value, Error> {
    parse::from_str::<Value>(text).map_err(|err| {
        let hint = parse::hint_for_error(&err, &format!("line {EXPRESSION_LINE}"));
        Error::new(ErrorKind::Decode)
            .with_message(err.to_string())
            .with_line(EXPRESSION_LINE)
            .with_hint(hint)
            .with_source(err)
    })
}

/// Full pipeline: read `path`, validate the expression line, and decode it.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Value, Error> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let text = expression::extract_expression(&lines).map_err(|err| err.with_path(path))?;
    debug!(expression_len = text.len(), "extracted expression");
    let value = decode_expression(text).map_err(|err| err.with_path(path))?;
    debug!(kind = value_kind(&value), "decoded expression");
    Ok(value)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
