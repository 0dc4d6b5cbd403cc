// src/lib.rs

pub mod cli;
pub mod config;
pub mod env;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod summary;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ActionRegistry, load_and_validate};
use crate::summary::ConfigSummary;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - a registry of the action / hook names given on the command line
/// - config loading + validation
/// - printing the validated result
pub fn run(args: CliArgs) -> Result<()> {
    let registry = registry_from_args(&args);
    let config = load_and_validate(&args.project, &registry)?;
    let summary = ConfigSummary::from(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Register a logging stub for every name the host declared.
///
/// This binary only checks configs; it never fires the jobs.
pub fn registry_from_args(args: &CliArgs) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    for name in &args.actions {
        let action = name.clone();
        registry.register_action(name.clone(), move || info!(action = %action, "job fired"));
    }
    for name in &args.hooks {
        let hook = name.clone();
        registry.register_hook(name.clone(), move |_events| info!(hook = %hook, "start hook ran"));
    }
    registry
}

/// Human-readable output: settings, then one line per job.
fn print_summary(summary: &ConfigSummary) {
    println!("dashbling config");
    println!("  project_path = {}", summary.project_path.display());
    println!("  port = {}", summary.port);
    println!("  force_https = {}", summary.force_https);
    println!(
        "  event_storage_path = {}",
        summary.event_storage_path.display()
    );
    println!("  on_start = {}", summary.on_start);
    println!();

    println!("jobs ({}):", summary.jobs.len());
    for (index, job) in summary.jobs.iter().enumerate() {
        match &job.id {
            Some(id) => println!("  - {id}: {}", job.schedule),
            None => println!("  - #{index}: {}", job.schedule),
        }
    }

    debug!("summary printed");
}
