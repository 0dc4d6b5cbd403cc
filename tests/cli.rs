// tests/cli.rs

use clap::Parser;
use dashbling_config::cli::{CliArgs, LogLevel};
use dashbling_config::logging::resolve_level;
use dashbling_config::registry_from_args;
use dashbling_config::summary::{ConfigSummary, JobSummary};
use dashbling_config::config::{StaticSource, load_with};
use dashbling_test_utils::builders::{JobBuilder, RawConfigBuilder};
use std::collections::HashMap;

#[test]
fn parses_repeated_action_and_hook_flags() {
    let args = CliArgs::try_parse_from([
        "dashbling-config",
        "--project",
        "demo",
        "--action",
        "refresh",
        "--action",
        "cleanup",
        "--hook",
        "seed",
        "--json",
    ])
    .unwrap();

    assert_eq!(args.project, "demo");
    assert_eq!(args.actions, vec!["refresh", "cleanup"]);
    assert_eq!(args.hooks, vec!["seed"]);
    assert!(args.json);

    let registry = registry_from_args(&args);
    assert_eq!(registry.action_names().collect::<Vec<_>>(), vec!["cleanup", "refresh"]);
    assert_eq!(registry.hook_names().collect::<Vec<_>>(), vec!["seed"]);
}

#[test]
fn project_defaults_to_current_directory() {
    let args = CliArgs::try_parse_from(["dashbling-config"]).unwrap();
    assert_eq!(args.project, ".");
    assert!(args.actions.is_empty());
    assert!(args.log_level.is_none());
}

#[test]
fn log_level_flag_beats_environment() {
    assert_eq!(
        resolve_level(Some(LogLevel::Warn), Some("trace")),
        tracing::Level::WARN
    );
    assert_eq!(resolve_level(None, Some(" DEBUG ")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}

#[test]
fn summary_reflects_the_validated_config() {
    let args = CliArgs::try_parse_from(["dashbling-config", "--action", "refresh"]).unwrap();
    let registry = registry_from_args(&args);
    let source = StaticSource::new(
        RawConfigBuilder::new()
            .with_job(JobBuilder::new("*/5 * * * *", "refresh").id("weather"))
            .port(8080)
            .build(),
    );

    let config = load_with("demo", &source, &HashMap::<String, String>::new(), &registry).unwrap();
    let summary = ConfigSummary::from(&config);

    assert_eq!(summary.port, 8080);
    assert!(!summary.on_start);
    assert_eq!(
        summary.jobs,
        vec![JobSummary {
            id: Some("weather".to_string()),
            schedule: "*/5 * * * *".to_string(),
        }]
    );

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["port"], 8080);
    assert_eq!(json["jobs"][0]["id"], "weather");
}
