use serde::{Deserialize, Serialize};

use crate::models::Response;
use crate::resolve::{correct_url, resolve_url};
use crate::template::{expand, Expansion, Transform, BLANK};

pub const LINK_EXTENSION: &str = ".lnk";
pub const QUERY_EXTENSION: &str = ".qry";

/// Longest href shown in a link's default description before it is cut.
const DESCRIPTION_URL_LIMIT: usize = 50;

/// Which variant a file is. Used by search filters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    LinkFile,
    QueryFile,
}

/// Attributes every file carries regardless of variant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub file_name: String,
    pub icon: String,
    pub icon_class: String,
    pub hits: u64,
    pub description: String,
    pub position: usize,
    /// Name of the owning folder, set when the file is attached to one.
    #[serde(skip)]
    pub parent: Option<String>,
}

impl FileMeta {
    fn new(file_name: String, icon: &str) -> Self {
        Self {
            file_name,
            icon: icon.to_string(),
            icon_class: "solid".to_string(),
            hits: 0,
            description: String::new(),
            position: 0,
            parent: None,
        }
    }
}

/// Applies the naming rules: spaces become underscores and the extension is
/// appended when missing.
pub fn normalize_name(name: &str, extension: &str) -> String {
    let name = name.replace(' ', "_");
    if name.ends_with(extension) {
        name
    } else {
        format!("{}{}", name, extension)
    }
}

/// Display form of a file or folder name: extension dropped, `-`/`_` read as
/// spaces, every word capitalized.
pub fn title_case(name: &str) -> String {
    let stem = name
        .strip_suffix(LINK_EXTENSION)
        .or_else(|| name.strip_suffix(QUERY_EXTENSION))
        .unwrap_or(name);
    stem.replace(['-', '_'], " ")
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// What a file can do. Implemented per variant and forwarded by [`VaunchFile`].
pub trait FileCapabilities {
    fn meta(&self) -> &FileMeta;
    fn meta_mut(&mut self) -> &mut FileMeta;
    fn extension(&self) -> &'static str;

    /// Runs the file against `args`, bumping `hits` only on a successful navigation.
    fn execute(&mut self, args: &[String]) -> Response;

    /// Updates variant fields from positional arguments; `*` keeps a value.
    fn edit(&mut self, args: &[String]);

    /// Tooltip text, falling back to a computed default when no description is set.
    fn describe(&self) -> String;

    /// Names the file answers to besides its path alias.
    fn names(&self) -> Vec<String> {
        let mut names = vec![self.meta().file_name.clone()];
        names.extend(self.aliases());
        names
    }

    fn aliases(&self) -> Vec<String> {
        let meta = self.meta();
        meta.parent
            .iter()
            .map(|parent| format!("{}/{}", parent, meta.file_name))
            .collect()
    }

    /// Sets the file name, normalized for this variant. Collision checks are
    /// the folder's business.
    fn rename(&mut self, new_name: &str) {
        let name = normalize_name(new_name, self.extension());
        self.meta_mut().file_name = name;
    }
}

fn keep_or(current: &mut String, arg: Option<&String>) {
    if let Some(value) = arg {
        if !value.is_empty() && value != "*" {
            *current = value.clone();
        }
    }
}

/// Navigates straight to its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkFile {
    pub meta: FileMeta,
    pub content: String,
}

impl LinkFile {
    pub fn new(name: &str, content: impl Into<String>) -> Self {
        Self {
            meta: FileMeta::new(normalize_name(name, LINK_EXTENSION), "link"),
            content: content.into(),
        }
    }
}

impl FileCapabilities for LinkFile {
    fn meta(&self) -> &FileMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut FileMeta {
        &mut self.meta
    }

    fn extension(&self) -> &'static str {
        LINK_EXTENSION
    }

    fn execute(&mut self, args: &[String]) -> Response {
        let new_context = args.first().is_some_and(|a| a == BLANK);
        match resolve_url(&self.content) {
            Ok(url) => {
                self.meta.hits += 1;
                Response::navigate(url.to_string(), new_context)
            }
            Err(err) => err.into(),
        }
    }

    fn edit(&mut self, args: &[String]) {
        keep_or(&mut self.content, args.first());
    }

    fn describe(&self) -> String {
        if !self.meta.description.is_empty() {
            return self.meta.description.clone();
        }
        let url = correct_url(&self.content);
        if url.chars().count() > DESCRIPTION_URL_LIMIT {
            let cut: String = url.chars().take(DESCRIPTION_URL_LIMIT).collect();
            format!("Navigate to: {}...", cut)
        } else {
            format!("Navigate to: {}", url)
        }
    }
}

/// A URL template filled in from invocation arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryFile {
    pub meta: FileMeta,
    pub content: String,
    prefix: String,
    pub transform: Transform,
}

impl QueryFile {
    pub fn new(name: &str, prefix: &str, content: impl Into<String>) -> Self {
        let mut file = Self {
            meta: FileMeta::new(normalize_name(name, QUERY_EXTENSION), "magnifying-glass"),
            content: content.into(),
            prefix: String::new(),
            transform: Transform::default(),
        };
        file.set_prefix(prefix);
        file
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Colons separate a prefix from its arguments, so they are never stored.
    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.replace(':', "");
    }

    /// The substituted target for `args`, without resolving it.
    pub fn expand(&self, args: &[String]) -> crate::error::Result<Expansion> {
        expand(&self.content, &self.prefix, &self.transform, args)
    }
}

impl FileCapabilities for QueryFile {
    fn meta(&self) -> &FileMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut FileMeta {
        &mut self.meta
    }

    fn extension(&self) -> &'static str {
        QUERY_EXTENSION
    }

    fn aliases(&self) -> Vec<String> {
        let mut aliases = vec![self.prefix.clone()];
        if let Some(parent) = &self.meta.parent {
            aliases.push(format!("{}/{}", parent, self.meta.file_name));
        }
        aliases
    }

    fn execute(&mut self, args: &[String]) -> Response {
        let (location, new_context) = match self.expand(args) {
            Ok(Expansion::Prompt(prompt)) => return Response::update_input(prompt),
            Ok(Expansion::Target {
                location,
                new_context,
            }) => (location, new_context),
            Err(err) => return err.into(),
        };

        match resolve_url(&location) {
            Ok(url) => {
                self.meta.hits += 1;
                log::debug!("{} resolved to {}", self.meta.file_name, url);
                Response::navigate(url.to_string(), new_context)
            }
            Err(err) => err.into(),
        }
    }

    fn edit(&mut self, args: &[String]) {
        if let Some(prefix) = args.first() {
            if !prefix.is_empty() && prefix != "*" {
                self.set_prefix(prefix);
            }
        }
        keep_or(&mut self.content, args.get(1));
    }

    fn describe(&self) -> String {
        if self.meta.description.is_empty() {
            format!("{}: Search {}", self.prefix, self.content)
        } else {
            format!("{}: {}", self.prefix, self.meta.description)
        }
    }
}

/// A file in a folder: either a link or a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VaunchFile {
    Link(LinkFile),
    Query(QueryFile),
}

impl VaunchFile {
    pub fn file_type(&self) -> FileType {
        match self {
            VaunchFile::Link(_) => FileType::LinkFile,
            VaunchFile::Query(_) => FileType::QueryFile,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.meta().file_name
    }

    pub fn content(&self) -> &str {
        match self {
            VaunchFile::Link(f) => &f.content,
            VaunchFile::Query(f) => &f.content,
        }
    }

    pub fn as_query(&self) -> Option<&QueryFile> {
        match self {
            VaunchFile::Query(f) => Some(f),
            VaunchFile::Link(_) => None,
        }
    }

    pub fn as_query_mut(&mut self) -> Option<&mut QueryFile> {
        match self {
            VaunchFile::Query(f) => Some(f),
            VaunchFile::Link(_) => None,
        }
    }

    pub fn set_icon(&mut self, icon: &str, icon_class: Option<&str>) {
        let meta = self.meta_mut();
        meta.icon = icon.to_string();
        meta.icon_class = icon_class.unwrap_or("solid").to_string();
    }

    /// Whether any of the file's names begins with `search`.
    pub fn names_start_with(&self, search: &str) -> bool {
        self.names().iter().any(|name| name.starts_with(search))
    }

    pub fn title_case(&self) -> String {
        title_case(self.file_name())
    }

    fn inner(&self) -> &dyn FileCapabilities {
        match self {
            VaunchFile::Link(f) => f,
            VaunchFile::Query(f) => f,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn FileCapabilities {
        match self {
            VaunchFile::Link(f) => f,
            VaunchFile::Query(f) => f,
        }
    }
}

impl From<LinkFile> for VaunchFile {
    fn from(file: LinkFile) -> Self {
        VaunchFile::Link(file)
    }
}

impl From<QueryFile> for VaunchFile {
    fn from(file: QueryFile) -> Self {
        VaunchFile::Query(file)
    }
}

impl FileCapabilities for VaunchFile {
    fn meta(&self) -> &FileMeta {
        self.inner().meta()
    }

    fn meta_mut(&mut self) -> &mut FileMeta {
        self.inner_mut().meta_mut()
    }

    fn extension(&self) -> &'static str {
        self.inner().extension()
    }

    fn execute(&mut self, args: &[String]) -> Response {
        self.inner_mut().execute(args)
    }

    fn edit(&mut self, args: &[String]) {
        self.inner_mut().edit(args)
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }

    fn names(&self) -> Vec<String> {
        self.inner().names()
    }

    fn aliases(&self) -> Vec<String> {
        self.inner().aliases()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponseType;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn test_link() -> LinkFile {
        let mut file = LinkFile::new("test_file", "http://example.com");
        file.meta.description = "Test File".to_string();
        file.meta.parent = Some("test".to_string());
        file
    }

    #[test]
    fn test_link_name_gets_extension() {
        let file = test_link();
        assert_eq!(file.meta.file_name, "test_file.lnk");
    }

    #[test]
    fn test_rename_normalizes() {
        let mut file = test_link();
        file.rename("bar");
        assert_eq!(file.meta.file_name, "bar.lnk");
        file.rename("new name");
        assert_eq!(file.meta.file_name, "new_name.lnk");
        file.rename("kept.lnk");
        assert_eq!(file.meta.file_name, "kept.lnk");
    }

    #[test]
    fn test_link_execute_success_counts_hit() {
        let mut file = test_link();
        let response = file.execute(&[]);
        assert_eq!(response.kind, ResponseType::Success);
        assert_eq!(response.message, "Navigating to: http://example.com/");
        assert_eq!(file.meta.hits, 1);
        assert!(!response.navigation.unwrap().new_context);

        let response = file.execute(&args(&["_blank"]));
        assert!(response.navigation.unwrap().new_context);
        assert_eq!(file.meta.hits, 2);
    }

    #[test]
    fn test_link_execute_invalid_keeps_hits() {
        let mut file = test_link();
        file.edit(&args(&["badLink"]));
        let response = file.execute(&[]);
        assert_eq!(response.kind, ResponseType::Error);
        assert_eq!(
            response.message,
            "Failed to execute file. Attempted URL was: badLink"
        );
        assert_eq!(file.meta.hits, 0);
    }

    #[test]
    fn test_link_description() {
        let mut file = test_link();
        assert_eq!(file.describe(), "Test File");
        file.meta.description.clear();
        assert_eq!(file.describe(), "Navigate to: http://example.com/");

        file.edit(&args(&["https://longdomainname.tld/longpathname#longanchorname"]));
        assert_eq!(
            file.describe(),
            "Navigate to: https://longdomainname.tld/longpathname#longanchor..."
        );
    }

    #[test]
    fn test_title_case() {
        let mut file = test_link();
        assert_eq!(title_case(&file.meta.file_name), "Test File");
        file.rename("new-name.lnk");
        assert_eq!(title_case(&file.meta.file_name), "New Name");
    }

    #[test]
    fn test_link_aliases_use_parent() {
        let file = test_link();
        assert_eq!(file.aliases(), vec!["test/test_file.lnk".to_string()]);
        assert_eq!(
            file.names(),
            vec!["test_file.lnk".to_string(), "test/test_file.lnk".to_string()]
        );
    }

    #[test]
    fn test_query_prefix_strips_colons() {
        let mut file = QueryFile::new("search", "s:", "example.com/?q=${}");
        assert_eq!(file.prefix(), "s");
        assert_eq!(file.meta.file_name, "search.qry");
        file.edit(&args(&["g:o", "*"]));
        assert_eq!(file.prefix(), "go");
        assert_eq!(file.content, "example.com/?q=${}");
    }

    #[test]
    fn test_query_names_include_prefix() {
        let mut file = QueryFile::new("search.qry", "s", "example.com/?q=${}");
        file.meta.parent = Some("web".to_string());
        assert_eq!(
            file.names(),
            vec![
                "search.qry".to_string(),
                "s".to_string(),
                "web/search.qry".to_string()
            ]
        );
    }

    #[test]
    fn test_query_execute_prompt() {
        let mut file = QueryFile::new("search", "s", "example.com/?q=${}");
        let response = file.execute(&[]);
        assert_eq!(response.kind, ResponseType::UpdateInput);
        assert_eq!(response.message, "s: ");
        assert_eq!(file.meta.hits, 0);
    }

    #[test]
    fn test_query_execute_navigates() {
        let mut file = QueryFile::new("search", "s", "example.com/?q=${}");
        let response = file.execute(&args(&["rust", "lang", "_blank"]));
        assert_eq!(
            response.message,
            "Navigating to: https://example.com/?q=rust+lang"
        );
        let nav = response.navigation.unwrap();
        assert!(nav.new_context);
        assert_eq!(file.meta.hits, 1);
    }

    #[test]
    fn test_query_execute_bad_link() {
        let mut file = QueryFile::new("broken", "b", "${1}");
        let response = file.execute(&args(&["badLink"]));
        assert_eq!(response.kind, ResponseType::Error);
        assert!(response.message.contains("badLink"));
        assert_eq!(file.meta.hits, 0);
    }

    #[test]
    fn test_query_execute_bad_transform() {
        let mut file = QueryFile::new("search", "s", "example.com/?q=${}");
        file.transform = Transform::new("/(/g", "");
        let response = file.execute(&args(&["x"]));
        assert_eq!(response.kind, ResponseType::Error);
        assert_eq!(file.meta.hits, 0);
        assert_eq!(file.transform, Transform::new("/(/g", ""));
    }

    #[test]
    fn test_query_description() {
        let mut file = QueryFile::new("search", "s", "example.com/?q=${}");
        assert_eq!(file.describe(), "s: Search example.com/?q=${}");
        file.meta.description = "Search the web".to_string();
        assert_eq!(file.describe(), "s: Search the web");
    }

    #[test]
    fn test_enum_forwards_capabilities() {
        let mut file: VaunchFile = QueryFile::new("search", "s", "example.com/?q=${}").into();
        assert_eq!(file.extension(), QUERY_EXTENSION);
        assert_eq!(file.file_type(), FileType::QueryFile);
        assert!(file.names_start_with("sea"));
        assert!(file.names_start_with("s"));
        file.rename("find");
        assert_eq!(file.file_name(), "find.qry");
        file.set_icon("globe", None);
        assert_eq!(file.meta().icon, "globe");
        assert_eq!(file.meta().icon_class, "solid");
    }
}
