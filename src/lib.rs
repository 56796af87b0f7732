//! # Quizbank
//!
//! A trivia question bank service: paginated listing, category management,
//! substring search, and a quiz-play endpoint that serves one random unseen
//! question per round.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quizbank::bank::{builtin_bank, MemoryBank};
//! use quizbank::config::ServiceConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> quizbank::Result<()> {
//!     let bank = Arc::new(MemoryBank::from_definition(builtin_bank())?);
//!     quizbank::cli::serve(bank, ServiceConfig::default()).await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      HTTP API (axum)                    │
//! │  /questions   /categories   /questions/search   /quizzes│
//! └────────────┬──────────────────────────┬─────────────────┘
//!              │                          │
//!       ┌──────┴──────┐            ┌──────┴──────┐
//!       │    page     │            │    quiz     │
//!       │  paginate   │            │ select_next │
//!       └──────┬──────┘            └──────┬──────┘
//!              │                          │
//!       ┌──────┴──────────────────────────┴──────┐
//!       │          bank (Question, Category)     │
//!       └────────────────────────────────────────┘
//! ```
//!
//! The `page` and `quiz` modules are the decision-making core: both are pure
//! functions over snapshots handed in by the caller, so they can run from any
//! number of request handlers without shared mutable state.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and identifiers
pub mod types;

/// Question bank store and definitions
pub mod bank;

/// Pagination shaping
pub mod page;

/// Quiz round selection
pub mod quiz;

/// Service configuration
pub mod config;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use bank::{load_bank, load_bank_from_str, Bank, Category, MemoryBank, Question};
pub use page::{paginate, Page};
pub use quiz::{select_next, QuizOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
