use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::catalog::DuplicatePolicy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "catalogFiles.filePattern")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSettings {
    pub catalog_files: CatalogFilesConfig,

    /// Preferred catalog language (e.g. "ru", "de_DE").
    ///
    /// Selection of the table to load belongs to the host; when unset,
    /// discovery returns all catalogs and the host decides.
    pub language: Option<String>,

    /// Resolution for duplicate active entries within one context.
    pub duplicate_policy: DuplicatePolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogFilesConfig {
    pub file_pattern: String,
}

impl CatalogSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.catalog_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "catalogFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/*.ts\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.catalog_files.file_pattern) {
            errors.push(ValidationError::new(
                "catalogFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.catalog_files.file_pattern),
            ));
        }

        if let Some(language) = &self.language
            && language.is_empty()
        {
            errors.push(ValidationError::new(
                "language",
                "The language cannot be empty. Please specify a code (e.g., \"ru\"), or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for CatalogFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/*.ts".to_string() }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            catalog_files: CatalogFilesConfig::default(),
            language: None,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}
