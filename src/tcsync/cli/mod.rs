//! # CLI Layer
//!
//! The only part of tcsync that knows about the terminal: flag parsing, colored
//! output, stdin for the interactive loop, and exit codes.
//!
//! - `setup`: clap definitions and mode selection
//! - `commands`: context setup and per-mode handlers
//! - `print`: message rendering

mod commands;
mod print;
mod setup;

pub use commands::run;
