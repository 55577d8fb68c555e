//! CLI entrypoint for agent-presets
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;
mod output;

use anyhow::{Result, bail};
use clap::Parser;
use commands::{Cli, Command, OutputFormat};
use output::PresetFormatter;
use presets_application::{ResolvePresetsUseCase, ValidatePresetsUseCase};
use presets_domain::ResolvedPreset;
use presets_infrastructure::PresetConfigLoader;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // === Dependency Injection ===
    let loader = PresetConfigLoader::from_env(cli.project_root.as_deref())?;
    info!("Using presets from {}", loader.path().display());
    let source = Arc::new(loader);

    match cli.command {
        Command::List { dispatchable } => {
            let use_case = ResolvePresetsUseCase::new(source);
            let presets = if dispatchable {
                use_case.execute_dispatchable()?
            } else {
                use_case.execute()?
            };
            print_presets(&presets, cli.output)?;
        }
        Command::Show { id } => {
            let preset = ResolvePresetsUseCase::new(source).find(&id)?;
            print_presets(std::slice::from_ref(&preset), cli.output)?;
        }
        Command::Validate => {
            let report = ValidatePresetsUseCase::new(source).execute()?;
            for issue in &report.issues {
                warn!("{}: {}", issue.subject, issue.message);
            }
            print!("{}", PresetFormatter::format_report(&report));
            if report.has_errors() {
                bail!("{} has {} errors", report.location, report.error_count());
            }
        }
        Command::Path => {
            println!("{}", source.path().display());
        }
    }

    Ok(())
}

fn print_presets(presets: &[ResolvedPreset], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", PresetFormatter::format_json(presets)?),
        OutputFormat::Text => print!("{}", PresetFormatter::format_text(presets)),
    }
    Ok(())
}
