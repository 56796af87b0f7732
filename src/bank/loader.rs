//! YAML parser for bank definitions
//!
//! Parses and validates question bank files. A small sample bank is embedded
//! in the binary so the server can start without any file on disk.

use super::types::BankDefinition;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

static SAMPLE_BANK: Lazy<BankDefinition> = Lazy::new(|| {
    load_bank_from_str(include_str!("../../banks/sample.yaml"))
        .expect("embedded sample bank is valid")
});

/// The built-in sample bank definition
pub fn builtin_bank() -> BankDefinition {
    SAMPLE_BANK.clone()
}

/// Load a bank definition from a YAML file
pub fn load_bank(path: impl AsRef<Path>) -> Result<BankDefinition> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::bank_definition(format!(
            "Failed to read bank file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_bank_from_str(&content)
}

/// Load a bank definition from a YAML string
pub fn load_bank_from_str(yaml: &str) -> Result<BankDefinition> {
    let def: BankDefinition = serde_yaml::from_str(yaml)
        .map_err(|e| Error::bank_definition(format!("Failed to parse bank YAML: {e}")))?;

    validate_bank(&def)?;
    Ok(def)
}

/// Validate a bank definition
fn validate_bank(def: &BankDefinition) -> Result<()> {
    if def.categories.is_empty() {
        return Err(Error::bank_definition(
            "Bank must have at least one category",
        ));
    }

    let mut seen = HashSet::new();
    for category in &def.categories {
        if category.kind.trim().is_empty() {
            return Err(Error::bank_definition(format!(
                "Category {} has an empty type label",
                category.id
            )));
        }
        if !seen.insert(category.id) {
            return Err(Error::bank_definition(format!(
                "Duplicate category id {}",
                category.id
            )));
        }
    }

    for draft in &def.questions {
        draft.validate().map_err(|e| {
            Error::bank_definition(format!("Invalid question '{}': {e}", draft.question))
        })?;
        if !seen.contains(&draft.category) {
            return Err(Error::bank_definition(format!(
                "Question '{}' references unknown category {}",
                draft.question, draft.category
            )));
        }
    }

    Ok(())
}
