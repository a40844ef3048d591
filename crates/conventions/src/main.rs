//! ODS conventions - command line entry point

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::{
    ProcessEnv, PropertyStore, PropertyStoreLoader, ResolvedConfig, SettingsResolver,
    SettingsValidator, ValidationReport,
};
use conventions::{AppliedConventions, ConventionsPlugin, InMemoryProject};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use types::{utils::mask_secret, ALL_SETTINGS};

#[derive(Debug, Parser)]
#[command(name = "ods-conventions", version, about = "Apply the OpenDevStack build conventions")]
struct Cli {
    /// YAML file with project properties
    #[arg(long, short = 'p', global = true)]
    properties: Option<PathBuf>,

    /// Project property override
    #[arg(short = 'P', value_name = "KEY=VALUE", global = true)]
    property: Vec<String>,

    /// Ignore ORG_GRADLE_PROJECT_* environment variables
    #[arg(long, global = true)]
    no_project_env: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply the conventions and print the resulting project setup
    Apply,
    /// Show every recognized setting and where its value came from
    Settings,
    /// Validate the settings without applying anything
    Check,
    /// Write an example properties file
    Init {
        #[arg(default_value = "gradle.yaml")]
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Debug, Serialize)]
struct SettingView {
    name: &'static str,
    value: Option<String>,
    source: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let dotenv_result = dotenv::dotenv();

    // Initialize logging
    init_logging()?;

    match dotenv_result {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        Err(e) if !e.not_found() => warn!("Could not load .env file: {}", e),
        Err(_) => {}
    }

    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Apply) {
        Command::Apply => {
            let store = load_store(&cli)?;
            let mut project = InMemoryProject::new(store);
            let applied = ConventionsPlugin::new()
                .apply(&mut project)
                .context("Failed to apply conventions")?;
            print_applied(&applied, cli.format)?;
        }
        Command::Settings => {
            let resolved = resolve(&load_store(&cli)?);
            print_settings(&resolved, cli.format)?;
        }
        Command::Check => {
            let resolved = resolve(&load_store(&cli)?);
            let report = SettingsValidator::validate(&resolved);
            print_report(&report, cli.format)?;
            if report.has_errors() {
                bail!("{}", report.summary());
            }
        }
        Command::Init { path } => {
            PropertyStoreLoader::create_example(path)?;
            info!("Example properties written to {}", path.display());
        }
    }

    Ok(())
}

/// Initialize logging based on environment variables
fn init_logging() -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so stdout stays machine-readable
    match log_format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
    }

    Ok(())
}

fn load_store(cli: &Cli) -> Result<PropertyStore> {
    let mut loader = PropertyStoreLoader::new().project_env(!cli.no_project_env);
    if let Some(path) = &cli.properties {
        loader = loader.file(path);
    }
    loader
        .overrides(&cli.property)?
        .load()
        .context("Failed to load project properties")
}

fn resolve(store: &PropertyStore) -> ResolvedConfig {
    SettingsResolver::new(store, ProcessEnv).resolve_all()
}

fn print_applied(applied: &AppliedConventions, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(applied)?),
        OutputFormat::Pretty => {
            println!("plugins: {}", applied.plugins.join(", "));
            println!("repositories ({:?}):", applied.repositories.mode);
            for entry in &applied.repositories.entries {
                match &entry.credentials {
                    Some(c) => println!("  {} -> {} (user {})", entry.name, entry.url, c.username),
                    None => println!("  {} -> {}", entry.name, entry.url),
                }
            }
            let report = &applied.coverage.finalized_by;
            println!(
                "{} finalized by {} (xml: {})",
                applied.coverage.task, report.name, report.xml_required
            );
        }
    }
    Ok(())
}

fn print_settings(resolved: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    let views: Vec<SettingView> = ALL_SETTINGS
        .iter()
        .map(|setting| SettingView {
            name: setting.name,
            value: resolved.setting(setting).map(|v| {
                if setting.secret {
                    mask_secret(v)
                } else {
                    v.to_string()
                }
            }),
            source: resolved.source(setting).map(|s| s.to_string()),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&views)?),
        OutputFormat::Pretty => {
            for view in &views {
                match (&view.value, &view.source) {
                    (Some(value), Some(source)) => {
                        println!("{:<24} {:<32} ({})", view.name, value, source)
                    }
                    _ => println!("{:<24} <not set>", view.name),
                }
            }
        }
    }
    Ok(())
}

fn print_report(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Pretty => {
            for issue in &report.issues {
                println!("{:<8}{}: {}", issue.severity, issue.setting, issue.message);
            }
            println!("{}", report.summary());
        }
    }
    Ok(())
}
