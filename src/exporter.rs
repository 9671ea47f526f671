//! Whole-setup backups: folders and configuration in one JSON document.

use serde_json::{json, Value};

use crate::config::merge_value;
use crate::error::{Result, VaunchError};
use crate::models::Config;
use crate::store::{self, FolderStore};

/// Pretty-printed `{"folders": [...], "config": {...}}` document.
pub fn export_document(folders: &FolderStore, config: &Config) -> Result<String> {
    let document = json!({
        "folders": store::to_json(folders)?,
        "config": config,
    });
    serde_json::to_string_pretty(&document)
        .map_err(|e| VaunchError::Storage(format!("Failed to serialize export: {}", e)))
}

/// Parses an exported document. Missing sections import as empty/defaults.
pub fn import_document(text: &str) -> Result<(FolderStore, Config)> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| VaunchError::Storage(format!("Failed to parse import: {}", e)))?;

    let folders = match document.get("folders") {
        Some(value) => store::from_json(value.clone())?,
        None => FolderStore::new(),
    };
    let config = document
        .get("config")
        .map(merge_value)
        .unwrap_or_default();

    Ok((folders, config))
}
