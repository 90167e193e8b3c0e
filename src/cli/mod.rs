//! Command Line Interface (CLI) layer for downlevel.
//!
//! This module defines argument parsing (`args`), error reporting (`errors`)
//! and the wiring (`runner`) from parsed flags to `downlevel::compile`.
//!
//! If you are embedding downlevel into another application, prefer the
//! library API in `downlevel::api` instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use errors::report;
pub use runner::run;
