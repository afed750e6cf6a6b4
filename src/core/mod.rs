// Core modules: line splitting, expression guards, and error modeling.
pub mod error;
pub mod expression;
pub mod lines;
