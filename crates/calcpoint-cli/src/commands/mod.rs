//! CLI command handlers

pub mod calc;
pub mod demo;
pub mod invoke;
pub mod operations;
pub mod repl;

pub use calc::run_calc;
pub use demo::run_demo;
pub use invoke::{PayloadSource, run_invoke};
pub use operations::run_operations;
pub use repl::run_repl;
