// src/config/loader.rs

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tracing::{debug, error, info};

use crate::config::model::{ClientConfig, RawConfig};
use crate::config::registry::ActionRegistry;
use crate::config::validate::parse;
use crate::env::{Environment, ProcessEnvironment};
use crate::errors::{LoadError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// File name of the project configuration, relative to the project root.
pub const CONFIG_FILE_NAME: &str = "dashbling.config.toml";

/// Where the raw configuration record comes from.
pub trait ConfigSource: Send + Sync + Debug {
    fn load(&self, path: &Path) -> anyhow::Result<RawConfig>;
}

/// Reads the record as a TOML document through a [`FileSystem`].
#[derive(Debug, Clone, Default)]
pub struct TomlFileSource<F = RealFileSystem> {
    fs: F,
}

impl<F: FileSystem> TomlFileSource<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigSource for TomlFileSource<F> {
    fn load(&self, path: &Path) -> anyhow::Result<RawConfig> {
        if !self.fs.exists(path) {
            bail!("no configuration file at {:?}", path);
        }
        if !self.fs.is_file(path) {
            bail!("{:?} is not a regular file", path);
        }
        let contents = self.fs.read_to_string(path)?;
        let raw: RawConfig =
            toml::from_str(&contents).with_context(|| format!("parsing TOML in {:?}", path))?;
        Ok(raw)
    }
}

/// A fixed, in-memory record. Ignores the requested path.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    raw: RawConfig,
}

impl StaticSource {
    pub fn new(raw: RawConfig) -> Self {
        Self { raw }
    }
}

impl ConfigSource for StaticSource {
    fn load(&self, _path: &Path) -> anyhow::Result<RawConfig> {
        Ok(self.raw.clone())
    }
}

/// `<project_path>/dashbling.config.toml`.
pub fn config_path(project_path: impl AsRef<Path>) -> PathBuf {
    project_path.as_ref().join(CONFIG_FILE_NAME)
}

/// Load and validate a project's configuration.
///
/// Makes exactly one attempt:
/// - a source that cannot be read or parsed yields [`LoadError::Unreadable`]
///   naming the resolved path; the cause is logged, not returned.
/// - a record that fails validation yields [`LoadError::Invalid`] with every
///   message, after logging each one.
pub fn load_with(
    project_path: impl AsRef<Path>,
    source: &dyn ConfigSource,
    env: &dyn Environment,
    registry: &ActionRegistry,
) -> Result<ClientConfig> {
    let project_path = project_path.as_ref();
    let path = config_path(project_path);
    debug!(path = %path.display(), "loading configuration");

    let raw = match source.load(&path) {
        Ok(raw) => raw,
        Err(cause) => {
            error!(path = %path.display(), "unable to load configuration: {cause:#}");
            return Err(LoadError::Unreadable { path });
        }
    };

    match parse(&raw, project_path, env, registry) {
        Ok(config) => {
            info!(
                path = %path.display(),
                jobs = config.jobs().len(),
                port = config.port(),
                force_https = config.force_https(),
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => {
            for message in err.errors() {
                error!(path = %path.display(), "{message}");
            }
            Err(LoadError::Invalid(err))
        }
    }
}

/// Production entry point: reads `dashbling.config.toml` from disk and
/// consults the process environment.
pub fn load_and_validate(
    project_path: impl AsRef<Path>,
    registry: &ActionRegistry,
) -> Result<ClientConfig> {
    let source = TomlFileSource::new(RealFileSystem);
    load_with(project_path, &source, &ProcessEnvironment, registry)
}
