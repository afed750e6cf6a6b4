//! Purpose: Internal JSON parsing boundary for expression decoding.
//! Exports: `parse` module with decode and diagnostic helpers.
//! Role: Single seam for the parser so callsites avoid ad hoc decode logic.
//! Invariants: Expression decoding goes through this module only.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
