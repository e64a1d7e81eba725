//! Route table: maps an update's kind to the one handler responsible for it.
//!
//! Built once at startup and immutable afterwards. Lookup is an explicit match on
//! [`UpdateKind`] followed by a hash-map lookup, so there is no predicate scanning.

use gatebot_core::{Handler, Update, UpdateKind};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct RouteTable {
    commands: HashMap<String, Arc<dyn Handler>>,
    unknown_command: Option<Arc<dyn Handler>>,
    callbacks: HashMap<String, Arc<dyn Handler>>,
    text: Option<Arc<dyn Handler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for `/name`. Names are matched lower-cased, without the slash.
    pub fn on_command(mut self, name: &str, handler: Arc<dyn Handler>) -> Self {
        let name = name.trim_start_matches('/').to_lowercase();
        self.commands.insert(name, handler);
        self
    }

    /// Handler for commands with no registered route.
    pub fn on_unknown_command(mut self, handler: Arc<dyn Handler>) -> Self {
        self.unknown_command = Some(handler);
        self
    }

    /// Registers the handler for inline-button presses carrying `data`.
    pub fn on_callback(mut self, data: &str, handler: Arc<dyn Handler>) -> Self {
        self.callbacks.insert(data.to_string(), handler);
        self
    }

    /// Handler for plain text messages.
    pub fn on_text(mut self, handler: Arc<dyn Handler>) -> Self {
        self.text = Some(handler);
        self
    }

    /// Returns the handler for this update, or None when nothing is registered for it.
    pub fn route(&self, update: &Update) -> Option<Arc<dyn Handler>> {
        match &update.kind {
            UpdateKind::Command { name, .. } => self
                .commands
                .get(name)
                .or(self.unknown_command.as_ref())
                .cloned(),
            UpdateKind::Callback { data, .. } => self.callbacks.get(data).cloned(),
            UpdateKind::Text(_) => self.text.clone(),
        }
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered callback payloads, sorted.
    pub fn callbacks(&self) -> Vec<&str> {
        let mut data: Vec<&str> = self.callbacks.keys().map(String::as_str).collect();
        data.sort_unstable();
        data
    }
}
