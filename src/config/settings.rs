//! User settings for stacks
//!
//! A small config.json alongside the data directory. Currently holds the
//! schema version and whether the circulation audit log is written.

use serde::{Deserialize, Serialize};

use super::paths::StacksPaths;
use crate::error::CatalogError;

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

/// User settings for stacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether successful circulation operations are appended to audit.log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &StacksPaths) -> Result<Self, CatalogError> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| CatalogError::Config(format!("Failed to read settings: {}", e)))?;
            serde_json::from_str(&contents)
                .map_err(|e| CatalogError::Config(format!("Failed to parse settings: {}", e)))
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StacksPaths) -> Result<(), CatalogError> {
        paths.ensure_directories()?;

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), json)
            .map_err(|e| CatalogError::Config(format!("Failed to write settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_load_or_create_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StacksPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.settings_file().exists());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StacksPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.audit_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StacksPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), "{}").unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.audit_enabled);
    }
}
