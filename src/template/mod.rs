//! Reading, writing and checking template documents.
//!
//! Two on-disk formats are supported: JSON with comments (the hand-authored
//! form) and YAML. The format is picked from the file extension.

mod error;
mod jsonc;
mod validate;

pub use error::TemplateError;
pub use jsonc::{Repair, clean};
pub use validate::{Violation, validate};

use crate::domain::Template;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// The template document shipped with the crate.
pub const SHIPPED_TEMPLATE: &str = include_str!("../../templates/all_age_brackets_template.jsonc");

/// On-disk document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON, with `//` and `/* */` comments accepted on input.
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Picks YAML for `.yaml`/`.yml` files and JSON for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Parses template text.
///
/// For JSON input, `lenient` decides whether a dangling comma or a key
/// without a value is an error or gets repaired with a warning.
pub fn parse(text: &str, format: Format, lenient: bool) -> Result<Template, TemplateError> {
    match format {
        Format::Json => {
            let cleaned = clean(text, lenient)?;
            for repair in &cleaned.repairs {
                match repair {
                    Repair::DanglingComma { line } => {
                        warn!(line, "Dropped dangling comma");
                    }
                    Repair::MissingValue { line, key } => {
                        warn!(line, key = %key, "Filled missing value with sentinel");
                    }
                }
            }
            Ok(serde_json::from_str(&cleaned.json)?)
        }
        Format::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

/// Loads a template file, choosing the format from its extension.
pub fn load(path: impl AsRef<Path>, lenient: bool) -> Result<Template, TemplateError> {
    let path = path.as_ref();
    let format = Format::from_path(path);
    debug!(path = %path.display(), ?format, lenient, "Loading template");

    let text = fs::read_to_string(path)?;
    let template = parse(&text, format, lenient)?;

    debug!(counties = template.len(), "Template loaded");
    Ok(template)
}

/// The embedded template document, parsed.
pub fn shipped() -> Result<Template, TemplateError> {
    parse(SHIPPED_TEMPLATE, Format::Json, false)
}

/// Renders a template as pretty JSON or YAML.
pub fn render(template: &Template, format: Format) -> Result<String, TemplateError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(template)?),
        Format::Yaml => Ok(serde_yaml::to_string(template)?),
    }
}
