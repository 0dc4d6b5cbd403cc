// src/config/registry.rs

//! Named callables the host makes available to configuration files.
//!
//! Config files are data, so `fn = "..."` and `onStart = "..."` name entries
//! in this registry instead of carrying code.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use toml::Value;

use crate::config::model::{Action, SendEvent, StartHook};

#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Action>,
    hooks: BTreeMap<String, StartHook>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job action. A later registration under the same name wins.
    pub fn register_action<F>(&mut self, name: impl Into<String>, action: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(action));
        self
    }

    /// Register a start hook. A later registration under the same name wins.
    pub fn register_hook<F>(&mut self, name: impl Into<String>, hook: F) -> &mut Self
    where
        F: Fn(&dyn SendEvent) + Send + Sync + 'static,
    {
        self.hooks.insert(name.into(), Arc::new(hook));
        self
    }

    pub fn with_action<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.register_action(name, action);
        self
    }

    pub fn with_hook<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(&dyn SendEvent) + Send + Sync + 'static,
    {
        self.register_hook(name, hook);
        self
    }

    pub fn action(&self, name: &str) -> Option<Action> {
        self.actions.get(name).cloned()
    }

    pub fn hook(&self, name: &str) -> Option<StartHook> {
        self.hooks.get(name).cloned()
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Resolve a raw `fn` value. Only a string naming a registered action
    /// counts as callable.
    pub(crate) fn resolve_action(&self, value: Option<&Value>) -> Option<Action> {
        match value {
            Some(Value::String(name)) => self.action(name),
            _ => None,
        }
    }

    pub(crate) fn resolve_hook(&self, value: Option<&Value>) -> Option<StartHook> {
        match value {
            Some(Value::String(name)) => self.hook(name),
            _ => None,
        }
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}
