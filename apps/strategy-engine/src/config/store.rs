//! Strategy store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the in-memory strategy store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Owner id stamped on strategies created by this process.
    #[serde(default = "default_owner_id")]
    pub owner_id: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            owner_id: default_owner_id(),
        }
    }
}

fn default_owner_id() -> String {
    "local".to_string()
}
