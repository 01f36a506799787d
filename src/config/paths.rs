//! Path management for stacks
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `STACKS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/stacks` or `~/.config/stacks`
//! 3. Windows: `%APPDATA%\stacks`

use std::path::PathBuf;

use crate::error::CatalogError;

/// Manages all paths used by stacks
#[derive(Debug, Clone)]
pub struct StacksPaths {
    /// Base directory for all stacks data
    base_dir: PathBuf,
}

impl StacksPaths {
    /// Create a new StacksPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CatalogError> {
        let base_dir = if let Ok(custom) = std::env::var("STACKS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StacksPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/stacks/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/stacks/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the circulation audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to items.json
    pub fn items_file(&self) -> PathBuf {
        self.data_dir().join("items.json")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CatalogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CatalogError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CatalogError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if stacks has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CatalogError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| CatalogError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("stacks"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CatalogError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CatalogError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("stacks"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StacksPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.items_file(), temp_dir.path().join("data/items.json"));
        assert_eq!(paths.users_file(), temp_dir.path().join("data/users.json"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let paths = StacksPaths::with_base_dir(base.clone());

        assert!(!base.exists());
        paths.ensure_directories().unwrap();
        assert!(base.exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StacksPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        std::fs::write(paths.settings_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
