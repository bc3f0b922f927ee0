//! Kernel configuration passed by the host at `init_with_config`.

use serde::{Deserialize, Serialize};
use wsh_vfs::DEFAULT_DIRECTORIES;

use crate::error::BoundaryError;

/// Host-supplied kernel settings. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    /// Duplicate log lines to `globalThis.log(text, level)` after init
    pub mirror_to_host: bool,
    /// Directories created at init, parents first
    pub directories: Vec<String>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            mirror_to_host: true,
            directories: DEFAULT_DIRECTORIES.iter().map(|d| String::from(*d)).collect(),
        }
    }
}

impl KernelConfig {
    /// Parse a JSON document. Unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, BoundaryError> {
        serde_json::from_str(json).map_err(|e| BoundaryError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KernelConfig::default();
        assert!(config.mirror_to_host);
        assert_eq!(config.directories, ["/tmp", "/home", "/home/web_user"]);
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(KernelConfig::from_json("{}").unwrap(), KernelConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = KernelConfig::from_json(r#"{"mirror_to_host": false}"#).unwrap();
        assert!(!config.mirror_to_host);
        assert_eq!(config.directories, KernelConfig::default().directories);

        let config = KernelConfig::from_json(r#"{"directories": ["/srv/data"]}"#).unwrap();
        assert!(config.mirror_to_host);
        assert_eq!(config.directories, ["/srv/data"]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            KernelConfig::from_json("{mirror_to_host"),
            Err(BoundaryError::Config(_))
        ));
        assert!(matches!(
            KernelConfig::from_json(r#"{"mirror_to_host": "yes"}"#),
            Err(BoundaryError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            KernelConfig::from_json(r#"{"mirror": false}"#),
            Err(BoundaryError::Config(_))
        ));
    }
}
