//! Template reading errors.

use thiserror::Error;

/// Errors raised while reading or writing a template document.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: usize },
    #[error("line {line}: dangling comma before closing bracket")]
    DanglingComma { line: usize },
    #[error("line {line}: key `{key}` has no value")]
    MissingValue { line: usize, key: String },
    #[error("failed to parse template JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse template YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
