//! Tests for config module.

use super::*;
use crate::template::Format;
use std::io::Write;
use tempfile::NamedTempFile;

/// Parse config from YAML string (for testing).
fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

// ==================== YAML field loading tests ====================

#[test]
fn test_load_app_fields() {
    let yaml = r#"
app:
  name: brackets
  env: production
  log_level: debug
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.name, "brackets");
    assert_eq!(cfg.app.env, "production");
    assert_eq!(cfg.app.log_level, Some("debug".to_string()));
}

#[test]
fn test_load_template_fields() {
    let yaml = r#"
app:
  name: brackets

template:
  path: data/counties.yaml
  lenient: true
  output_format: yaml
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.template.path, "data/counties.yaml");
    assert!(cfg.template.lenient);
    assert_eq!(cfg.template.output_format, Format::Yaml);
}

#[test]
fn test_template_defaults() {
    let cfg = from_yaml("app:\n  name: brackets\n").unwrap();

    assert_eq!(cfg.app.env, "development");
    assert_eq!(cfg.template.path, template::DEFAULT_TEMPLATE_PATH);
    assert!(!cfg.template.lenient);
    assert_eq!(cfg.template.output_format, Format::Json);
}

#[test]
fn test_empty_document_uses_defaults() {
    let cfg = from_yaml("{}").unwrap();
    assert_eq!(cfg.app.name, "age-brackets");
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_unknown_output_format() {
    let yaml = r#"
template:
  output_format: xml
"#;
    assert!(from_yaml(yaml).is_err());
}

// ==================== Validation tests ====================

#[test]
fn test_validate_empty_name() {
    let cfg = from_yaml("app:\n  name: \"\"\n").unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("app.name is required"));
}

#[test]
fn test_validate_empty_template_path() {
    let cfg = from_yaml("template:\n  path: \"  \"\n").unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("template.path is required"));
}

#[test]
fn test_validate_unknown_log_level() {
    let cfg = from_yaml("app:\n  name: x\n  log_level: loud\n").unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("unknown level loud"));
}

// ==================== File loading tests ====================

#[test]
fn test_load_from_file() {
    let yaml = r#"
app:
  name: filebot
template:
  lenient: true
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.app.name, "filebot");
    assert!(cfg.template.lenient);
}

#[test]
fn test_load_file_not_found() {
    let result = Config::load("nonexistent_config.yaml");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("failed to read config file"));
}

#[test]
fn test_load_or_default_missing_file() {
    let cfg = Config::load_or_default("nonexistent_config.yaml").unwrap();
    assert_eq!(cfg.app.name, "age-brackets");
}

#[test]
fn test_load_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"app: [unterminated").unwrap();

    let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn test_apply_env_overrides_template_path() {
    let mut cfg = Config::default();

    unsafe {
        env::set_var(TEMPLATE_PATH_ENV, "override/template.yaml");
    }
    cfg.apply_env();
    unsafe {
        env::remove_var(TEMPLATE_PATH_ENV);
    }

    assert_eq!(cfg.template.path, "override/template.yaml");
}
