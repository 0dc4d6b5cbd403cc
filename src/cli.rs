// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dashbling-config`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dashbling-config",
    version,
    about = "Load and validate a dashbling project configuration.",
    long_about = None
)]
pub struct CliArgs {
    /// Project directory containing `dashbling.config.toml`.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub project: String,

    /// Name of a job action the host provides (repeatable).
    ///
    /// Jobs whose `fn` is not listed here fail validation.
    #[arg(long = "action", value_name = "NAME")]
    pub actions: Vec<String>,

    /// Name of a start hook the host provides (repeatable).
    #[arg(long = "hook", value_name = "NAME")]
    pub hooks: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DASHBLING_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the validated configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
