// src/config/model.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cron::Schedule;

use crate::config::schedule::parse_schedule;
use crate::errors::ScheduleError;

/// Raw, untyped configuration record as read from the source file.
///
/// Mirrors a project file such as:
///
/// ```toml
/// port = 8080
/// forceHttps = true
/// onStart = "seed-dashboard"
///
/// [[jobs]]
/// id = "weather"
/// schedule = "*/5 * * * *"
/// fn = "refresh-weather"
/// ```
pub type RawConfig = toml::Table;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FORCE_HTTPS: bool = false;
pub const EVENT_STORAGE_DIR_NAME: &str = "dashbling-events";

/// Zero-argument callable fired by the scheduler.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Callable invoked once by the host at startup.
pub type StartHook = Arc<dyn Fn(&dyn SendEvent) + Send + Sync>;

/// Handle a start hook uses to push events to the dashboard.
pub trait SendEvent {
    fn send_event(&self, id: &str, data: serde_json::Value);
}

pub fn noop_hook() -> StartHook {
    Arc::new(|_: &dyn SendEvent| {})
}

/// `<cwd>/dashbling-events`, or `./dashbling-events` if the working directory
/// cannot be determined.
pub fn default_event_storage_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(EVENT_STORAGE_DIR_NAME)
}

/// One scheduled unit of work.
///
/// Always holds a schedule that parsed and a callable action.
#[derive(Clone)]
pub struct JobSpec {
    id: Option<String>,
    schedule: String,
    cron: Schedule,
    action: Action,
}

impl JobSpec {
    pub fn new(schedule: impl Into<String>, action: Action) -> Result<Self, ScheduleError> {
        let schedule = schedule.into();
        let cron = parse_schedule(&schedule)?;
        Ok(Self::from_parsed(schedule, cron, action))
    }

    /// Build from a schedule that has already been parsed.
    pub(crate) fn from_parsed(schedule: impl Into<String>, cron: Schedule, action: Action) -> Self {
        Self {
            id: None,
            schedule: schedule.into(),
            cron,
            action,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The schedule exactly as written in the config.
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// The parsed schedule, in seconds-first form.
    pub fn cron(&self) -> &Schedule {
        &self.cron
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Invoke the job's action.
    pub fn run(&self) {
        (self.action)()
    }
}

impl fmt::Debug for JobSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobSpec")
            .field("id", &self.id)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

/// Finalized configuration for one project.
///
/// Built once by the loader and read-only afterwards. Cloning is cheap; the
/// callables are shared.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) project_path: PathBuf,
    pub(crate) jobs: Vec<JobSpec>,
    pub(crate) on_start: Option<StartHook>,
    pub(crate) force_https: bool,
    pub(crate) port: u16,
    pub(crate) event_storage_path: PathBuf,
}

impl ClientConfig {
    /// A configuration holding only defaults.
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            jobs: Vec::new(),
            on_start: None,
            force_https: DEFAULT_FORCE_HTTPS,
            port: DEFAULT_PORT,
            event_storage_path: default_event_storage_path(),
        }
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Jobs in the order they were declared.
    pub fn jobs(&self) -> &[JobSpec] {
        &self.jobs
    }

    pub fn has_on_start(&self) -> bool {
        self.on_start.is_some()
    }

    /// The start hook, or a no-op when none was configured.
    pub fn on_start(&self) -> StartHook {
        self.on_start.clone().unwrap_or_else(noop_hook)
    }

    /// Run the start hook with the given event handle.
    pub fn start(&self, events: &dyn SendEvent) {
        if let Some(hook) = &self.on_start {
            hook(events);
        }
    }

    pub fn force_https(&self) -> bool {
        self.force_https
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn event_storage_path(&self) -> &Path {
        &self.event_storage_path
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("project_path", &self.project_path)
            .field("jobs", &self.jobs)
            .field("on_start", &self.on_start.is_some())
            .field("force_https", &self.force_https)
            .field("port", &self.port)
            .field("event_storage_path", &self.event_storage_path)
            .finish()
    }
}
