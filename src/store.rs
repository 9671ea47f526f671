//! The in-memory folder store and its persisted document shape.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaunchError};
use crate::file::{FileCapabilities, FileMeta, FileType, LinkFile, QueryFile, VaunchFile};
use crate::folder::{reposition, Folder};
use crate::template::Transform;

/// Every folder, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderStore {
    folders: Vec<Folder>,
}

/// Splits `folder/file` into its folder and optional file segment.
///
/// An empty file segment (`"sites/"`) counts as absent.
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    let mut parts = path.splitn(2, '/');
    let folder = parts.next().unwrap_or("");
    let file = parts.next().filter(|f| !f.is_empty());
    (folder, file)
}

impl FolderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn folder_names(&self) -> Vec<&str> {
        self.folders.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    pub fn folder_mut(&mut self, name: &str) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.name == name)
    }

    /// Appends a folder. Returns false when the name is taken.
    pub fn insert(&mut self, mut folder: Folder) -> bool {
        if self.folder(&folder.name).is_some() {
            return false;
        }
        folder.position = self.folders.len() + 1;
        self.folders.push(folder);
        true
    }

    pub fn add_folder(&mut self, name: &str) -> bool {
        self.insert(Folder::new(name))
    }

    pub fn remove_folder(&mut self, name: &str) -> bool {
        let before = self.folders.len();
        self.folders.retain(|f| f.name != name);
        let removed = self.folders.len() != before;
        if removed {
            self.renumber();
        }
        removed
    }

    /// Looks up `folder/file`.
    pub fn file_by_path(&self, path: &str) -> Option<&VaunchFile> {
        let (folder, file) = split_path(path);
        self.folder(folder)?.file(file?)
    }

    pub fn file_by_path_mut(&mut self, path: &str) -> Option<&mut VaunchFile> {
        let (folder, file) = split_path(path);
        self.folder_mut(folder)?.file_mut(file?)
    }

    /// Finds the Query File addressed by `operator`, i.e. `prefix:` or
    /// `name:` as typed at the start of an input line.
    ///
    /// With `require_colon`, operators without a colon never match.
    pub fn find_query_file(&self, operator: &str, require_colon: bool) -> Option<(String, String)> {
        if require_colon && !operator.contains(':') {
            return None;
        }
        let prefix = operator.split(':').next().unwrap_or("");
        self.folders.iter().find_map(|folder| {
            folder
                .query_files()
                .find(|file| file.names().iter().any(|n| n == prefix))
                .map(|file| (folder.name.clone(), file.file_name().to_string()))
        })
    }

    /// `(file, folder name)` pairs for an external ranking search.
    pub fn flatten(&self) -> Vec<(&VaunchFile, &str)> {
        self.folders
            .iter()
            .flat_map(|folder| folder.files().iter().map(move |f| (f, folder.name.as_str())))
            .collect()
    }

    /// Substring/prefix search across every folder.
    pub fn search(&self, search: &str, types: &[FileType]) -> Vec<(&VaunchFile, &str)> {
        self.folders
            .iter()
            .flat_map(|folder| {
                folder
                    .search_files(search, types)
                    .into_iter()
                    .map(move |f| (f, folder.name.as_str()))
            })
            .collect()
    }

    /// Moves folder `name` to the 1-based `rank`.
    pub fn set_folder_position(&mut self, name: &str, rank: i64) -> Result<()> {
        let index = self
            .folders
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| VaunchError::NotFound(format!("The folder {} does not exist", name)))?;
        reposition(&mut self.folders, index, rank);
        self.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (i, folder) in self.folders.iter_mut().enumerate() {
            folder.position = i + 1;
        }
    }
}

/// One file as persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum FileRecord {
    #[serde(alias = "VaunchLink")]
    LinkFile {
        #[serde(flatten)]
        meta: MetaRecord,
        content: String,
    },
    #[serde(alias = "VaunchQuery")]
    QueryFile {
        #[serde(flatten)]
        meta: MetaRecord,
        content: String,
        prefix: String,
        #[serde(default, alias = "sed")]
        transform: Transform,
    },
}

/// Persisted attributes shared by both file variants. Older documents may
/// omit anything but the name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetaRecord {
    pub file_name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: i64,
}

/// One folder as persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

impl From<&FileMeta> for MetaRecord {
    fn from(meta: &FileMeta) -> Self {
        Self {
            file_name: meta.file_name.clone(),
            icon: Some(meta.icon.clone()),
            icon_class: Some(meta.icon_class.clone()),
            hits: meta.hits,
            description: meta.description.clone(),
            position: meta.position as i64,
        }
    }
}

impl MetaRecord {
    fn apply_to(self, meta: &mut FileMeta) {
        if let Some(icon) = self.icon {
            meta.icon = icon;
        }
        if let Some(icon_class) = self.icon_class {
            meta.icon_class = icon_class;
        }
        meta.hits = self.hits;
        meta.description = self.description;
    }
}

impl From<&VaunchFile> for FileRecord {
    fn from(file: &VaunchFile) -> Self {
        match file {
            VaunchFile::Link(link) => FileRecord::LinkFile {
                meta: MetaRecord::from(&link.meta),
                content: link.content.clone(),
            },
            VaunchFile::Query(query) => FileRecord::QueryFile {
                meta: MetaRecord::from(&query.meta),
                content: query.content.clone(),
                prefix: query.prefix().to_string(),
                transform: query.transform.clone(),
            },
        }
    }
}

impl FileRecord {
    fn position(&self) -> i64 {
        match self {
            FileRecord::LinkFile { meta, .. } | FileRecord::QueryFile { meta, .. } => meta.position,
        }
    }

    fn into_file(self) -> VaunchFile {
        match self {
            FileRecord::LinkFile { meta, content } => {
                let mut file = LinkFile::new(&meta.file_name, content);
                meta.apply_to(&mut file.meta);
                file.into()
            }
            FileRecord::QueryFile {
                meta,
                content,
                prefix,
                transform,
            } => {
                let mut file = QueryFile::new(&meta.file_name, &prefix, content);
                file.transform = transform;
                meta.apply_to(&mut file.meta);
                file.into()
            }
        }
    }
}

/// Unset or non-positive ranks sort after every explicit one.
fn rank_key(position: i64) -> i64 {
    if position > 0 {
        position
    } else {
        i64::MAX
    }
}

/// The persisted document for `store`.
pub fn serialize(store: &FolderStore) -> Vec<FolderRecord> {
    store
        .folders()
        .iter()
        .map(|folder| FolderRecord {
            name: folder.name.clone(),
            icon: Some(folder.icon.clone()),
            icon_class: Some(folder.icon_class.clone()),
            position: folder.position as i64,
            files: folder.files().iter().map(FileRecord::from).collect(),
        })
        .collect()
}

/// Rebuilds a store from its persisted document.
///
/// Folders and files are ordered by their stored rank, then renumbered.
/// Duplicate names keep the first occurrence.
pub fn deserialize(mut records: Vec<FolderRecord>) -> FolderStore {
    records.sort_by_key(|r| rank_key(r.position));
    let mut store = FolderStore::new();
    for mut record in records {
        let mut folder = Folder::new(record.name.clone());
        if let Some(icon) = record.icon.take() {
            folder.icon = icon;
        }
        if let Some(icon_class) = record.icon_class.take() {
            folder.icon_class = icon_class;
        }
        record.files.sort_by_key(|f| rank_key(f.position()));
        for file in record.files {
            let file = file.into_file();
            let name = file.file_name().to_string();
            if !folder.add_file(file) {
                log::warn!("Skipping duplicate file {}/{}", record.name, name);
            }
        }
        if !store.insert(folder) {
            log::warn!("Skipping duplicate folder {}", record.name);
        }
    }
    store
}

/// Serializes `store` into a JSON value.
pub fn to_json(store: &FolderStore) -> Result<serde_json::Value> {
    serde_json::to_value(serialize(store))
        .map_err(|e| VaunchError::Storage(format!("Failed to serialize folders: {}", e)))
}

/// Parses a JSON value into a store.
pub fn from_json(value: serde_json::Value) -> Result<FolderStore> {
    let records: Vec<FolderRecord> = serde_json::from_value(value)
        .map_err(|e| VaunchError::Storage(format!("Failed to parse folders: {}", e)))?;
    Ok(deserialize(records))
}
