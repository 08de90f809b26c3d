mod config;
mod domain;
mod error;
mod template;

use clap::{Parser, Subcommand};
use config::{Config, TemplateConfig};
use domain::{AgeGroupId, CountyBlock, Measure, Template};
use error::AppError;
use std::path::PathBuf;
use std::process::ExitCode;
use template::{Format, Violation};
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Per-county COVID-19 age bracket templates.
#[derive(Debug, Parser)]
#[command(name = "age-brackets", version)]
struct Cli {
    /// Path to the YAML config file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Where a command reads its template from.
#[derive(Debug, clap::Args)]
struct Source {
    /// Template file (defaults to template.path from config, or the shipped
    /// template when that file does not exist).
    file: Option<PathBuf>,
    /// Read the template shipped with the binary.
    #[arg(long, conflicts_with = "file")]
    shipped: bool,
    /// Repair dangling commas and missing values.
    #[arg(long)]
    lenient: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a template and check its structure.
    Validate {
        #[command(flatten)]
        source: Source,
    },
    /// Print a template as clean JSON or YAML.
    Normalize {
        #[command(flatten)]
        source: Source,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print the full blank form for a county.
    Blank {
        county: String,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print a blank form with only the schemes a county reports in.
    Scaffold {
        county: String,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print the populated brackets of one age group as records.
    Records {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        county: String,
        #[arg(long, value_enum, default_value = "cases")]
        measure: Measure,
        /// Age group index, e.g. 2 for age_group_2.
        #[arg(long)]
        group: u32,
    },
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // Documents go to stdout, so logs go to stderr.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load(path),
        None => Config::load_or_default(DEFAULT_CONFIG_PATH),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.app.log_level.as_deref());
    debug!(app = %config.app.name, env = %config.app.env, "Config loaded");

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<(), AppError> {
    let settings = &config.template;

    match command {
        Command::Validate { source } => {
            let template = load_template(source, settings)?;

            let violations = template::validate(&template);
            if !violations.is_empty() {
                report(&violations);
                return Err(AppError::Invalid(violations.len()));
            }

            for (county, block) in template.counties() {
                summarize(county, block);
            }
            info!(counties = template.len(), "Template is valid");
        }
        Command::Normalize { source, format } => {
            let template = load_template(source, settings)?;
            print(&template, format.unwrap_or(settings.output_format))?;
        }
        Command::Blank { county, format } => {
            print(&Template::blank(&county), format.unwrap_or(settings.output_format))?;
        }
        Command::Scaffold { county, format } => {
            let template = Template::for_county(&county)?;
            print(&template, format.unwrap_or(settings.output_format))?;
        }
        Command::Records {
            source,
            county,
            measure,
            group,
        } => {
            let id = AgeGroupId::new(group).ok_or(AppError::ZeroAgeGroup)?;
            let template = load_template(source, settings)?;

            let block = template
                .county(&county)
                .ok_or_else(|| AppError::CountyNotFound(county.clone()))?;
            let records = block.records(&county, measure, id)?;

            debug!(county = %county, %measure, group = %id, count = records.len(), "Records built");
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

/// Loads the template named by `source`. Without an explicit file, a
/// missing `template.path` falls back to the shipped template.
fn load_template(source: Source, settings: &TemplateConfig) -> Result<Template, AppError> {
    let lenient = source.lenient || settings.lenient;

    if source.shipped {
        debug!("Using shipped template");
        return Ok(template::shipped()?);
    }

    let path = match source.file {
        Some(path) => path,
        None => {
            let path = PathBuf::from(&settings.path);
            if !path.exists() {
                info!(path = %path.display(), "Template file not found, using shipped template");
                return Ok(template::shipped()?);
            }
            path
        }
    };

    Ok(template::load(&path, lenient)?)
}

fn report(violations: &[Violation]) {
    for v in violations {
        warn!(path = %v.path, "{}", v.kind);
        println!("{}", v);
    }
}

/// Logs fill progress for every age group of a county.
fn summarize(county: &str, block: &CountyBlock) {
    for measure in [Measure::Cases, Measure::Deaths] {
        let Some(groups) = block.data.groups(measure) else {
            continue;
        };
        for (id, counts) in groups {
            debug!(
                county = %county,
                %measure,
                group = %id,
                labels = ?counts.labels().collect::<Vec<_>>(),
                "Brackets"
            );
            info!(
                county = %county,
                %measure,
                group = %id,
                brackets = counts.len(),
                populated = counts.is_populated(),
                total = ?counts.total(),
                "Age group"
            );
        }
    }
}

fn print(template: &Template, format: Format) -> Result<(), AppError> {
    let text = template::render(template, format)?;
    println!("{}", text.trim_end());
    Ok(())
}
