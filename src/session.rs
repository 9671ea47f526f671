//! A running start page: the store, the configuration, and the registry that
//! acts on them.

use crate::commands::Context;
use crate::config::ConfigManager;
use crate::dispatch::Registry;
use crate::error::Result;
use crate::exporter;
use crate::file::FileCapabilities;
use crate::filesystem::Storage;
use crate::models::{Config, Response};
use crate::store::{split_path, FolderStore};

/// Owns all state. Commands run one at a time, each followed by a save.
pub struct Vaunch {
    registry: Registry,
    folders: FolderStore,
    config: ConfigManager,
    storage: Option<Storage>,
}

impl Vaunch {
    /// An empty in-memory session that never touches disk.
    pub fn new() -> Self {
        Self::with_state(FolderStore::new(), Config::default())
    }

    /// An in-memory session starting from existing state.
    pub fn with_state(folders: FolderStore, config: Config) -> Self {
        Self {
            registry: Registry::new(),
            folders,
            config: ConfigManager::in_memory(config),
            storage: None,
        }
    }

    /// Loads a session from `storage`, which is also where it saves.
    ///
    /// # Returns
    /// * `Ok(Vaunch)` - The loaded session
    /// * `Err(VaunchError::Storage)` - If the data directory or its files cannot be used
    pub fn open(storage: Storage) -> Result<Self> {
        storage.ensure_directories()?;
        let folders = storage.load_folders()?;
        let config = storage.config_manager()?;
        log::info!(
            "Loaded {} folder(s) from {}",
            folders.folders().len(),
            storage.base_dir.display()
        );

        Ok(Self {
            registry: Registry::new(),
            folders,
            config,
            storage: Some(storage),
        })
    }

    pub fn folders(&self) -> &FolderStore {
        &self.folders
    }

    pub fn config(&self) -> &Config {
        self.config.get()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs one line of input.
    ///
    /// The first whitespace-separated token picks a command by name or alias.
    /// Failing that it is tried as a query operator (`prefix:` or `prefix:arg`),
    /// then as a `folder/file` path, and finally the whole line is handed to
    /// the configured default file.
    pub fn dispatch(&mut self, input: &str) -> Response {
        let tokens: Vec<String> = input.split_whitespace().map(String::from).collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Response::silent();
        };

        let response = match self.registry.get(verb) {
            Some(command) => {
                log::debug!("dispatching {} with {} argument(s)", command.name(), args.len());
                let mut ctx = Context {
                    folders: &mut self.folders,
                    config: &mut self.config,
                    registry: &self.registry,
                };
                command.execute(args, &mut ctx)
            }
            None => self.run_fallback(verb, args, &tokens),
        };

        self.save();
        response
    }

    /// Runs the file at `folder/file` directly, as when it is clicked.
    pub fn execute_file(&mut self, path: &str, args: &[String]) -> Response {
        let response = self.run_file(path, args);
        self.save();
        response
    }

    /// Combined folders and configuration document.
    pub fn export(&self) -> Result<String> {
        exporter::export_document(&self.folders, self.config.get())
    }

    /// Replaces all state with an exported document and saves it.
    pub fn import(&mut self, text: &str) -> Result<()> {
        let (folders, config) = exporter::import_document(text)?;
        self.folders = folders;
        self.config.replace(config);
        self.save();
        Ok(())
    }

    fn run_fallback(&mut self, verb: &str, args: &[String], tokens: &[String]) -> Response {
        if let Some((folder, file)) = self.folders.find_query_file(verb, true) {
            let mut file_args = Vec::with_capacity(args.len() + 1);
            if let Some((_, first)) = verb.split_once(':') {
                if !first.is_empty() {
                    file_args.push(first.to_string());
                }
            }
            file_args.extend_from_slice(args);
            return self.run_file(&format!("{}/{}", folder, file), &file_args);
        }

        if let (_, Some(_)) = split_path(verb) {
            if self.folders.file_by_path(verb).is_some() {
                return self.run_file(verb, args);
            }
        }

        let default_file = self.config.get().default_file.clone();
        if !default_file.is_empty() {
            let is_query = self
                .folders
                .file_by_path(&default_file)
                .is_some_and(|file| file.as_query().is_some());
            if is_query {
                log::debug!("passing input to default file {}", default_file);
                return self.run_file(&default_file, tokens);
            }
            log::warn!("default file {} is not a Query File", default_file);
        }

        Response::error(format!("Unknown command: {}", verb))
    }

    fn run_file(&mut self, path: &str, args: &[String]) -> Response {
        match self.folders.file_by_path_mut(path) {
            Some(file) => {
                log::debug!("executing {}", path);
                file.execute(args)
            }
            None => Response::error(format!("The file {} does not exist", path)),
        }
    }

    /// Writes folders and configuration when the session has a home on disk.
    fn save(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.save_folders(&self.folders) {
            log::warn!("Failed to save folders: {}", e);
        }
        if let Err(e) = self.config.save_sync() {
            log::warn!("Failed to save config: {}", e);
        }
    }
}

impl Default for Vaunch {
    fn default() -> Self {
        Self::new()
    }
}
