use anyhow::Result;
use tracing::info;

use super::store::KeyValueStore;

/// Fixed key under which the visitor's chosen name is persisted.
pub const USER_NAME_KEY: &str = "userName";
/// Sentinel shown until the visitor sets a name.
pub const DEFAULT_VISITOR_NAME: &str = "Guest";

/// The visitor's display name, loaded at startup and re-persisted on change.
#[derive(Debug, Clone)]
pub struct VisitorProfile {
    name: String,
}

impl VisitorProfile {
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let name = store
            .get(USER_NAME_KEY)?
            .unwrap_or_else(|| DEFAULT_VISITOR_NAME.to_string());
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Greeting line for the header surface.
    pub fn greeting(&self, site_title: &str) -> String {
        format!("Hi {}! Welcome to {}", self.name, site_title)
    }

    /// Set and persist a new name. Empty or whitespace-only input is a
    /// no-op: the stored value and the greeting stay unchanged. Returns
    /// whether the name changed.
    pub fn set_name(&mut self, store: &mut dyn KeyValueStore, raw: &str) -> Result<bool> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        store.set(USER_NAME_KEY, trimmed)?;
        self.name = trimmed.to_string();
        info!(name = %self.name, "visitor name updated");
        Ok(true)
    }
}
