// src/env.rs

//! Read-only view of the environment variables consulted during validation.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

/// Source of environment variables.
pub trait Environment: Send + Sync + Debug {
    fn var(&self, name: &str) -> Option<String>;
}

/// Implementation backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        // A value that is not valid unicode counts as unset.
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
