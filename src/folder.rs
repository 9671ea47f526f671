use crate::error::{Result, VaunchError};
use crate::file::{title_case, FileCapabilities, FileType, VaunchFile};

/// A named, ordered collection of files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub icon: String,
    pub icon_class: String,
    pub position: usize,
    files: Vec<VaunchFile>,
}

/// Moves the item at `from` so it sits at the 1-based `rank`.
///
/// Ranks below 1 land first and ranks past the end land last.
pub fn reposition<T>(items: &mut Vec<T>, from: usize, rank: i64) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let last = items.len() as i64;
    let index = rank.saturating_sub(1).clamp(0, last) as usize;
    items.insert(index, item);
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: "folder".to_string(),
            icon_class: "solid".to_string(),
            position: 0,
            files: Vec::new(),
        }
    }

    pub fn files(&self) -> &[VaunchFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Appends `file` as the last entry. Returns false, leaving the folder
    /// untouched, when the name is already taken.
    pub fn add_file(&mut self, mut file: VaunchFile) -> bool {
        if self.file(file.file_name()).is_some() {
            return false;
        }
        let meta = file.meta_mut();
        meta.position = self.files.len() + 1;
        meta.parent = Some(self.name.clone());
        self.files.push(file);
        true
    }

    /// Removes the file called `file_name`, returning it.
    pub fn take_file(&mut self, file_name: &str) -> Option<VaunchFile> {
        let index = self.index_of(file_name)?;
        let mut file = self.files.remove(index);
        file.meta_mut().parent = None;
        self.renumber();
        Some(file)
    }

    pub fn remove_file(&mut self, file_name: &str) -> bool {
        self.take_file(file_name).is_some()
    }

    pub fn file(&self, file_name: &str) -> Option<&VaunchFile> {
        self.files.iter().find(|f| f.file_name() == file_name)
    }

    pub fn file_mut(&mut self, file_name: &str) -> Option<&mut VaunchFile> {
        self.files.iter_mut().find(|f| f.file_name() == file_name)
    }

    fn index_of(&self, file_name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.file_name() == file_name)
    }

    /// Files whose name contains `search`, or with any name starting with it.
    /// A non-empty `types` additionally restricts the variant.
    pub fn search_files(&self, search: &str, types: &[FileType]) -> Vec<&VaunchFile> {
        self.files
            .iter()
            .filter(|file| file.file_name().contains(search) || file.names_start_with(search))
            .filter(|file| types.is_empty() || types.contains(&file.file_type()))
            .collect()
    }

    pub fn query_files(&self) -> impl Iterator<Item = &VaunchFile> {
        self.files
            .iter()
            .filter(|f| f.file_type() == FileType::QueryFile)
    }

    /// Moves `file_name` to the 1-based `rank`.
    pub fn set_file_position(&mut self, file_name: &str, rank: i64) -> Result<()> {
        let index = self.index_of(file_name).ok_or_else(|| {
            VaunchError::NotFound(format!("The file {}/{} does not exist", self.name, file_name))
        })?;
        reposition(&mut self.files, index, rank);
        self.renumber();
        Ok(())
    }

    /// Renames a file in place, refusing names that are already taken.
    pub fn rename_file(&mut self, file_name: &str, new_name: &str) -> Result<String> {
        let index = self.index_of(file_name).ok_or_else(|| {
            VaunchError::NotFound(format!("The file {}/{} does not exist", self.name, file_name))
        })?;
        let mut renamed = self.files[index].clone();
        renamed.rename(new_name);
        let final_name = renamed.file_name().to_string();
        if final_name != file_name && self.file(&final_name).is_some() {
            return Err(VaunchError::Conflict(format!(
                "A file with the name {} already exists in {}",
                final_name, self.name
            )));
        }
        self.files[index] = renamed;
        Ok(final_name)
    }

    /// Changes the folder's name and points every child at it.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        for file in &mut self.files {
            file.meta_mut().parent = Some(name.to_string());
        }
    }

    pub fn set_icon(&mut self, icon: &str, icon_class: Option<&str>) {
        self.icon = icon.to_string();
        self.icon_class = icon_class.unwrap_or("solid").to_string();
    }

    pub fn title_case(&self) -> String {
        title_case(&self.name)
    }

    fn renumber(&mut self) {
        for (i, file) in self.files.iter_mut().enumerate() {
            file.meta_mut().position = i + 1;
        }
    }
}
