use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConfigManager;
use crate::error::{Result, VaunchError};
use crate::store::{self, FolderStore};

/// Storage manages the on-disk home of the folder document and configuration.
///
/// The structure is:
/// - `{data_dir}/folders.json` - Serialized folders and their files
/// - `{data_dir}/config.json` - User configuration
#[derive(Debug, Clone)]
pub struct Storage {
    /// Base data directory for the application
    pub base_dir: PathBuf,
    /// Path to the folder document (folders.json)
    pub folders_file: PathBuf,
    /// Path to the configuration file (config.json)
    pub config_file: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance using the platform-appropriate data directory.
    ///
    /// On Linux: ~/.local/share/vaunch/
    /// On macOS: ~/Library/Application Support/vaunch/
    /// On Windows: C:\Users\{user}\AppData\Roaming\vaunch\
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .ok_or_else(|| VaunchError::Storage("Could not determine data directory".to_string()))?
            .join("vaunch");

        Ok(Self::new_with_base(&base_dir))
    }

    /// Creates a new Storage instance with a custom base directory.
    /// Useful for testing.
    pub fn new_with_base(base_dir: &Path) -> Self {
        let base_dir = base_dir.to_path_buf();
        let folders_file = base_dir.join("folders.json");
        let config_file = base_dir.join("config.json");

        Self {
            base_dir,
            folders_file,
            config_file,
        }
    }

    /// Ensures the base directory exists, creating it if necessary.
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir).map_err(|e| {
            VaunchError::Storage(format!("Failed to create base directory: {}", e))
        })
    }

    /// Loads the folder document. A missing file is an empty store.
    pub fn load_folders(&self) -> Result<FolderStore> {
        if !self.folders_file.exists() {
            return Ok(FolderStore::new());
        }

        let content = fs::read_to_string(&self.folders_file)
            .map_err(|e| VaunchError::Storage(format!("Failed to read folders file: {}", e)))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| VaunchError::Storage(format!("Failed to parse folders file: {}", e)))?;

        store::from_json(value)
    }

    /// Writes the folder document.
    pub fn save_folders(&self, folders: &FolderStore) -> Result<()> {
        let value = store::to_json(folders)?;
        let content = serde_json::to_string_pretty(&value)
            .map_err(|e| VaunchError::Storage(format!("Failed to serialize folders: {}", e)))?;

        fs::write(&self.folders_file, content)
            .map_err(|e| VaunchError::Storage(format!("Failed to write folders file: {}", e)))
    }

    /// A config manager backed by this storage's config file.
    pub fn config_manager(&self) -> Result<ConfigManager> {
        ConfigManager::new(self.config_file.clone())
    }
}
