//! Purpose: Define the public Rust API boundary for exprline.
//! Exports: Pipeline entry points, guard constants, and the error types.
//! Role: Public, additive-only surface used by the CLI and tests.
//! Invariants: This module is the only public path to the decode pipeline.
//! Invariants: Internal modules (JSON seam) remain private.

mod pipeline;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::expression::{
    EXPRESSION_LINE, MISSING_PREFIX, PREFIX, TOO_FEW_LINES, extract_expression,
};
pub use pipeline::{decode_expression, decode_file, read_lines};
pub use serde_json::Value;
