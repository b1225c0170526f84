//! Photo storage configuration.

use serde::{Deserialize, Serialize};

/// Local filesystem storage configuration.
///
/// Photo files live at `<root_path>/photos/<property_id>/<filename>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage root directory.
    #[serde(default = "default_root")]
    pub root_path: String,
    /// Create the storage root on startup if it is missing.
    #[serde(default = "default_create_root")]
    pub create_root: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root(),
            create_root: default_create_root(),
        }
    }
}

fn default_root() -> String {
    "./storage".to_string()
}

fn default_create_root() -> bool {
    true
}
