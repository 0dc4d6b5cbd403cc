// src/config/validate.rs

//! Schema checks over a raw configuration record.
//!
//! Every check runs regardless of earlier failures; all messages are
//! collected and reported together in one [`ValidationError`].

use std::path::PathBuf;

use toml::Value;
use tracing::debug;

use crate::config::coerce::{
    envify, identity, resolve_override, try_parse_bool, try_parse_number,
};
use crate::config::model::{ClientConfig, JobSpec, RawConfig, StartHook};
use crate::config::registry::ActionRegistry;
use crate::config::schedule::parse_schedule;
use crate::env::Environment;
use crate::errors::ValidationError;

pub const JOBS: &str = "jobs";
pub const ON_START: &str = "onStart";
pub const FORCE_HTTPS: &str = "forceHttps";
pub const PORT: &str = "port";
pub const EVENT_STORAGE_PATH: &str = "eventStoragePath";

/// Validate `raw`, apply environment overrides and build the final config.
pub fn parse(
    raw: &RawConfig,
    project_path: impl Into<PathBuf>,
    env: &dyn Environment,
    registry: &ActionRegistry,
) -> Result<ClientConfig, ValidationError> {
    let mut errors = Vec::new();

    let jobs = validate_jobs(raw.get(JOBS), registry, &mut errors);
    let on_start = validate_on_start(raw.get(ON_START), registry, &mut errors);

    log_override(FORCE_HTTPS, env);
    let force_https = resolve_override(FORCE_HTTPS, env, raw, try_parse_bool);
    let force_https = validate_force_https(force_https, &mut errors);

    log_override(PORT, env);
    let port = resolve_override(PORT, env, raw, try_parse_number);
    let port = validate_port(port, &mut errors);

    log_override(EVENT_STORAGE_PATH, env);
    let event_storage_path = resolve_override(EVENT_STORAGE_PATH, env, raw, identity);
    let event_storage_path = validate_event_storage_path(event_storage_path, &mut errors);

    if !errors.is_empty() {
        return Err(ValidationError::new(errors));
    }

    let mut config = ClientConfig::new(project_path);
    config.jobs = jobs;
    if let Some(hook) = on_start {
        config.on_start = Some(hook);
    }
    if let Some(force_https) = force_https {
        config.force_https = force_https;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(path) = event_storage_path {
        config.event_storage_path = PathBuf::from(path);
    }

    Ok(config)
}

/// Format one violation.
pub fn invalid(name: &str, expectation: &str, actual: Option<&Value>) -> String {
    format!(
        "Invalid '{name}' configuration. Expected '{name}' to be {expectation}, but was '{}'.",
        display_value(actual)
    )
}

/// Strings render bare, missing values as `undefined`, everything else in
/// TOML inline form.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn log_override(option: &str, env: &dyn Environment) {
    let var = envify(option);
    if env.var(&var).is_some() {
        debug!(option, var = %var, "environment override applied");
    }
}

fn validate_jobs(
    value: Option<&Value>,
    registry: &ActionRegistry,
    errors: &mut Vec<String>,
) -> Vec<JobSpec> {
    let Some(Value::Array(entries)) = value else {
        errors.push(invalid(JOBS, "an array", value));
        return Vec::new();
    };

    let mut jobs = Vec::with_capacity(entries.len());
    for entry in entries {
        let table = entry.as_table();
        let field = |key: &str| table.and_then(|t| t.get(key));

        let id = field("id");
        if id.is_some_and(|v| !v.is_str()) {
            errors.push(invalid("job.id", "a string", id));
        }

        let fn_value = field("fn");
        let action = registry.resolve_action(fn_value);
        if action.is_none() {
            errors.push(invalid("job.fn", "a function", fn_value));
        }

        let schedule_value = field("schedule");
        let schedule = schedule_value
            .and_then(Value::as_str)
            .and_then(|s| parse_schedule(s).ok().map(|cron| (s, cron)));
        if schedule.is_none() {
            errors.push(invalid(
                "job.schedule",
                "a valid cron expression",
                schedule_value,
            ));
        }

        if let (Some(action), Some((schedule, cron))) = (action, schedule) {
            let mut job = JobSpec::from_parsed(schedule, cron, action);
            if let Some(id) = id.and_then(Value::as_str) {
                job = job.with_id(id);
            }
            jobs.push(job);
        }
    }
    jobs
}

fn validate_on_start(
    value: Option<&Value>,
    registry: &ActionRegistry,
    errors: &mut Vec<String>,
) -> Option<StartHook> {
    let raw = value?;
    let hook = registry.resolve_hook(Some(raw));
    if hook.is_none() {
        errors.push(invalid(ON_START, "a function", Some(raw)));
    }
    hook
}

fn validate_force_https(value: Option<Value>, errors: &mut Vec<String>) -> Option<bool> {
    match value {
        None => None,
        Some(Value::Boolean(b)) => Some(b),
        Some(other) => {
            errors.push(invalid(FORCE_HTTPS, "a boolean", Some(&other)));
            None
        }
    }
}

fn validate_port(value: Option<Value>, errors: &mut Vec<String>) -> Option<u16> {
    let value = value?;
    let port = match &value {
        Value::Integer(n) => u16::try_from(*n).ok(),
        Value::Float(n) if n.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(n) => {
            Some(*n as u16)
        }
        Value::Float(_) => None,
        _ => {
            errors.push(invalid(PORT, "a number", Some(&value)));
            return None;
        }
    };
    if port.is_none() {
        errors.push(invalid(PORT, "a valid port number", Some(&value)));
    }
    port
}

fn validate_event_storage_path(value: Option<Value>, errors: &mut Vec<String>) -> Option<String> {
    match value {
        None => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            errors.push(invalid(EVENT_STORAGE_PATH, "a string", Some(&other)));
            None
        }
    }
}
