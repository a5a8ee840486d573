//! Thumbnail storage configuration.

use serde::{Deserialize, Serialize};

/// Where thumbnails are written and how they are addressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory thumbnails are written into.
    #[serde(default = "default_assets_root")]
    pub assets_root: String,
    /// Externally visible URL prefix under which `assets_root` is served.
    #[serde(default = "default_assets_base_url")]
    pub assets_base_url: String,
    /// Optional ceiling on a thumbnail upload request body, in bytes.
    ///
    /// Uploads are streamed to disk, so this is a deployment limit rather
    /// than a memory bound. Unset means no limit.
    #[serde(default)]
    pub upload_limit_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            assets_base_url: default_assets_base_url(),
            upload_limit_bytes: None,
        }
    }
}

fn default_assets_root() -> String {
    "./assets".to_string()
}

fn default_assets_base_url() -> String {
    "http://localhost:8091/assets".to_string()
}
