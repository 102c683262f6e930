//! Game store configuration.

use serde::{Deserialize, Serialize};

/// Default key the game snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "game";

/// Configuration for a [`GameStore`](super::GameStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage key for the snapshot.
    pub storage_key: String,

    /// Write indented JSON.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            pretty: false,
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}
