//! CLI module
//!
//! Command-line interface for the question bank service.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `validate` - Parse and validate a bank definition file
//! - `categories` - List a bank's categories
//! - `questions` - List a bank's questions

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve};
