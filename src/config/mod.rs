// src/config/mod.rs

//! Project configuration loading and validation for dashbling.
//!
//! Responsibilities:
//! - Define the raw record and the finalized `ClientConfig` (`model.rs`).
//! - Resolve environment overrides and coerce values (`coerce.rs`).
//! - Check cron syntax for job schedules (`schedule.rs`).
//! - Map callable names to host-provided functions (`registry.rs`).
//! - Validate a raw record, collecting every error (`validate.rs`).
//! - Locate and read the project config file (`loader.rs`).

pub mod coerce;
pub mod loader;
pub mod model;
pub mod registry;
pub mod schedule;
pub mod validate;

pub use loader::{
    CONFIG_FILE_NAME, ConfigSource, StaticSource, TomlFileSource, config_path, load_and_validate,
    load_with,
};
pub use model::{
    Action, ClientConfig, DEFAULT_PORT, JobSpec, RawConfig, SendEvent, StartHook,
    default_event_storage_path,
};
pub use registry::ActionRegistry;
pub use validate::parse;
