//! Template source configuration.

use crate::template::Format;
use serde::Deserialize;

/// Default location of the template document.
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/all_age_brackets_template.jsonc";

/// Template reading and output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Path to the template document.
    #[serde(default = "default_path")]
    pub path: String,
    /// Repair dangling commas and missing values instead of rejecting them.
    #[serde(default)]
    pub lenient: bool,
    /// Format used when printing documents.
    #[serde(default)]
    pub output_format: Format,
}

fn default_path() -> String {
    DEFAULT_TEMPLATE_PATH.to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            lenient: false,
            output_format: Format::default(),
        }
    }
}
