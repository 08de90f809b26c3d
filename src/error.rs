//! Top-level error type for the command line.

use crate::config::ConfigError;
use crate::domain::DomainError;
use crate::template::TemplateError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("county `{0}` not found in template")]
    CountyNotFound(String),
    #[error("age group index must be at least 1")]
    ZeroAgeGroup,
    #[error("template has {0} violation(s)")]
    Invalid(usize),
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}
