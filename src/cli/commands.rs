//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quizbank trivia service CLI
#[derive(Parser, Debug)]
#[command(name = "quizbank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bank definition file (YAML); the embedded sample bank when omitted
    #[arg(short, long, global = true)]
    pub bank: Option<PathBuf>,

    /// Service configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for inspection commands
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Parse and validate a bank definition file
    Validate,

    /// List the bank's categories
    Categories,

    /// List the bank's questions
    Questions {
        /// Only questions in this category id
        #[arg(long)]
        category: Option<u64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
