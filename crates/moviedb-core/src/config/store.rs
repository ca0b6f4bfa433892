//! Record store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the in-process record store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to a JSON array of movies loaded into the store at startup.
    #[serde(default)]
    pub seed_path: Option<String>,
}
