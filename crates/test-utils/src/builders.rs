#![allow(dead_code)]

use dashbling_config::config::RawConfig;
use toml::Value;

/// Builder for raw configuration records to simplify test setup.
///
/// Nothing is set by default, not even `jobs`.
pub struct RawConfigBuilder {
    raw: RawConfig,
}

impl RawConfigBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawConfig::new(),
        }
    }

    /// Start from `jobs = []`, the smallest valid record.
    pub fn empty_jobs() -> Self {
        Self::new().set("jobs", Value::Array(vec![]))
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.raw.insert(key.to_string(), value.into());
        self
    }

    pub fn with_job(mut self, job: JobBuilder) -> Self {
        let jobs = self
            .raw
            .entry("jobs")
            .or_insert(Value::Array(vec![]));
        if let Value::Array(entries) = jobs {
            entries.push(job.build());
        }
        self
    }

    pub fn port(self, value: impl Into<Value>) -> Self {
        self.set("port", value)
    }

    pub fn force_https(self, value: impl Into<Value>) -> Self {
        self.set("forceHttps", value)
    }

    pub fn event_storage_path(self, value: impl Into<Value>) -> Self {
        self.set("eventStoragePath", value)
    }

    pub fn on_start(self, value: impl Into<Value>) -> Self {
        self.set("onStart", value)
    }

    pub fn build(self) -> RawConfig {
        self.raw
    }
}

impl Default for RawConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `[[jobs]]` entry.
pub struct JobBuilder {
    entry: toml::Table,
}

impl JobBuilder {
    pub fn new(schedule: &str, action: &str) -> Self {
        Self::blank().schedule(schedule).action(action)
    }

    /// An entry with no keys at all.
    pub fn blank() -> Self {
        Self {
            entry: toml::Table::new(),
        }
    }

    pub fn schedule(self, value: impl Into<Value>) -> Self {
        self.set("schedule", value)
    }

    pub fn action(self, value: impl Into<Value>) -> Self {
        self.set("fn", value)
    }

    pub fn id(self, value: impl Into<Value>) -> Self {
        self.set("id", value)
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.entry.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Table(self.entry)
    }
}
