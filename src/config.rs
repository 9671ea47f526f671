use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, VaunchError};
use crate::models::Config;

/// ConfigManager handles loading, saving, and updating user configuration.
///
/// Saved files are merged over defaults field by field, so a partial or older
/// file never loses settings it does not mention. A manager created with
/// [`ConfigManager::in_memory`] has no backing file and never writes.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// The current configuration
    config: Config,
    /// Path to the configuration file
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a new ConfigManager backed by `config_path`, loading whatever
    /// is already there.
    ///
    /// # Returns
    /// * `Ok(ConfigManager)` - A new ConfigManager instance
    /// * `Err(VaunchError::Storage)` - If the file exists but cannot be read or parsed
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let config = Self::load_from_file(&config_path)?;
        Ok(Self {
            config,
            config_path: Some(config_path),
        })
    }

    /// A manager holding `config` with nothing on disk behind it.
    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            config_path: None,
        }
    }

    /// Loads configuration from file, merging with defaults.
    ///
    /// A missing file yields the default configuration.
    fn load_from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| VaunchError::Storage(format!("Failed to read config file: {}", e)))?;

        merge_config_with_defaults(&content)
    }

    /// Gets the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Updates the configuration using a closure.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        f(&mut self.config);
    }

    /// Replaces the whole configuration, e.g. after an import.
    pub fn replace(&mut self, config: Config) {
        self.config = config;
    }

    /// Saves the configuration to disk immediately. A no-op without a backing file.
    pub fn save_sync(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(&self.config)
            .map_err(|e| VaunchError::Storage(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| VaunchError::Storage(format!("Failed to write config file: {}", e)))
    }

    /// Flips whether the command window is shown, returning the new state.
    pub fn toggle_commands(&mut self) -> bool {
        self.config.show_commands = !self.config.show_commands;
        self.config.show_commands
    }

    /// Returns the config file path.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }
}

/// Looks a setting up by its snake_case key, falling back to the camelCase
/// spelling older exports used.
fn field<'a>(obj: &'a Map<String, Value>, key: &str, legacy: &str) -> Option<&'a Value> {
    obj.get(key).or_else(|| obj.get(legacy))
}

/// Overlays every recognised, well-typed field of `value` onto the defaults.
pub fn merge_value(value: &Value) -> Config {
    let mut config = Config::default();

    let Some(obj) = value.as_object() else {
        return config;
    };

    if let Some(v) = field(obj, "show_commands", "showCommands").and_then(|v| v.as_bool()) {
        config.show_commands = v;
    }
    if let Some(v) = field(obj, "show_gui", "showGUI").and_then(|v| v.as_bool()) {
        config.show_gui = v;
    }
    if let Some(v) = field(obj, "title_case", "titleCase").and_then(|v| v.as_bool()) {
        config.title_case = v;
    }
    if let Some(v) = field(obj, "fuzzy", "fuzzy").and_then(|v| v.as_bool()) {
        config.fuzzy = v;
    }
    if let Some(v) = field(obj, "default_file", "defaultFile").and_then(|v| v.as_str()) {
        config.default_file = v.to_string();
    }
    if let Some(v) = field(obj, "background", "background").and_then(|v| v.as_str()) {
        config.background = v.to_string();
    }
    if let Some(v) = obj.get("prefix_icon").and_then(|v| v.as_str()) {
        config.prefix_icon = v.to_string();
    }
    if let Some(v) = obj.get("prefix_icon_class").and_then(|v| v.as_str()) {
        config.prefix_icon_class = v.to_string();
    }
    // Older exports nest the prompt icon as {"name": ..., "class": ...}
    if let Some(prefix) = obj.get("prefix").and_then(|v| v.as_object()) {
        if let Some(v) = prefix.get("name").and_then(|v| v.as_str()) {
            config.prefix_icon = v.to_string();
        }
        if let Some(v) = prefix.get("class").and_then(|v| v.as_str()) {
            config.prefix_icon_class = v.to_string();
        }
    }

    config
}

/// Merges a partial config JSON with defaults.
///
/// # Returns
/// * `Ok(Config)` - The merged configuration
/// * `Err(VaunchError::Storage)` - If parsing fails
pub fn merge_config_with_defaults(partial_json: &str) -> Result<Config> {
    if partial_json.trim().is_empty() {
        return Ok(Config::default());
    }

    let json_value: Value = serde_json::from_str(partial_json)
        .map_err(|e| VaunchError::Storage(format!("Failed to parse config: {}", e)))?;

    Ok(merge_value(&json_value))
}
