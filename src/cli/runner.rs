//! CLI runner - executes commands

use crate::bank::{builtin_bank, load_bank, BankDefinition, MemoryBank};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server;
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::types::CategoryFilter;
use serde_json::json;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Serve { port } => self.serve(*port).await,
            Commands::Validate => self.validate(),
            Commands::Categories => self.categories(),
            Commands::Questions { category } => self.questions(*category),
        }
    }

    /// Load the bank definition from the CLI flag, or the embedded sample
    fn load_bank_definition(&self) -> Result<BankDefinition> {
        match &self.cli.bank {
            Some(path) => load_bank(path),
            None => Ok(builtin_bank()),
        }
    }

    /// Load the service config from the CLI flag, or defaults
    fn load_service_config(&self) -> Result<ServiceConfig> {
        match &self.cli.config {
            Some(path) => ServiceConfig::from_file(path),
            None => Ok(ServiceConfig::default()),
        }
    }

    /// Start the HTTP server
    async fn serve(&self, port: Option<u16>) -> Result<()> {
        let def = self.load_bank_definition()?;
        let mut config = self.load_service_config()?;
        if let Some(port) = port {
            config.port = port;
        }

        tracing::info!(
            categories = def.categories.len(),
            questions = def.questions.len(),
            "loaded question bank"
        );

        let bank = Arc::new(MemoryBank::from_definition(def)?);
        server::serve(bank, config).await
    }

    /// Parse and validate the bank definition
    fn validate(&self) -> Result<()> {
        let def = self.load_bank_definition()?;

        match self.cli.format {
            OutputFormat::Json => {
                let summary = json!({
                    "valid": true,
                    "categories": def.categories.len(),
                    "questions": def.questions.len(),
                });
                println!("{summary}");
            }
            OutputFormat::Pretty => {
                println!(
                    "Bank is valid: {} categories, {} questions",
                    def.categories.len(),
                    def.questions.len()
                );
            }
        }
        Ok(())
    }

    /// Print the bank's categories
    fn categories(&self) -> Result<()> {
        let def = self.load_bank_definition()?;

        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&def.categories)?);
            }
            OutputFormat::Pretty => {
                for category in &def.categories {
                    println!("{:>4}  {}", category.id, category.kind);
                }
            }
        }
        Ok(())
    }

    /// Print the bank's questions, optionally scoped to one category
    fn questions(&self, category: Option<u64>) -> Result<()> {
        let def = self.load_bank_definition()?;
        let filter = match category {
            Some(id) => CategoryFilter::from_wire(id),
            None => CategoryFilter::Any,
        };

        let selected: Vec<_> = def
            .questions
            .iter()
            .filter(|q| filter.matches(q.category))
            .collect();

        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            }
            OutputFormat::Pretty => {
                for draft in selected {
                    println!(
                        "[{}] (difficulty {}) {} -- {}",
                        draft.category, draft.difficulty, draft.question, draft.answer
                    );
                }
            }
        }
        Ok(())
    }
}
