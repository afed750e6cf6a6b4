//! Purpose: Library crate behind the `exprline` CLI and tests.
//! Exports: `api` (decode pipeline, errors), `render` (stdout formatting), `core`.
//! Role: Keeps the pipeline testable without spawning the binary.
//! Invariants: No global state; every call reads its input afresh.
pub mod api;
pub mod core;
mod json;
pub mod render;
