// src/summary.rs

//! Plain-data view of a validated configuration, for printing.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub project_path: PathBuf,
    pub port: u16,
    pub force_https: bool,
    pub event_storage_path: PathBuf,
    pub on_start: bool,
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub schedule: String,
}

impl From<&ClientConfig> for ConfigSummary {
    fn from(config: &ClientConfig) -> Self {
        Self {
            project_path: config.project_path().to_path_buf(),
            port: config.port(),
            force_https: config.force_https(),
            event_storage_path: config.event_storage_path().to_path_buf(),
            on_start: config.has_on_start(),
            jobs: config
                .jobs()
                .iter()
                .map(|job| JobSummary {
                    id: job.id().map(str::to_string),
                    schedule: job.schedule().to_string(),
                })
                .collect(),
        }
    }
}
