use crate::commands::{Command, Context, Example, Parameter};
use crate::error::{Result, VaunchError};
use crate::file::{normalize_name, FileCapabilities, LinkFile, QueryFile, VaunchFile, QUERY_EXTENSION};
use crate::models::Response;
use crate::store::{split_path, FolderStore};
use crate::template::Transform;

/// Resolves `folder/file` for a handler that needs an existing file.
fn file_mut<'a>(folders: &'a mut FolderStore, path: &str) -> Result<&'a mut VaunchFile> {
    let (folder_name, file_name) = split_path(path);
    let folder = folders
        .folder_mut(folder_name)
        .ok_or_else(|| VaunchError::NotFound(format!("The folder {} does not exist", folder_name)))?;
    let file_name = file_name
        .ok_or_else(|| VaunchError::InvalidArgument(format!("No file given in path {}", path)))?;
    folder
        .file_mut(file_name)
        .ok_or_else(|| VaunchError::NotFound(format!("The file {} does not exist", path)))
}

/// Creates link and query files.
pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["make-file"]
    }

    fn description(&self) -> &'static str {
        "Creates new files"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &[
            "Creates a file within an existing folder, unless a file with that name already exists.",
            "Link files (.lnk) navigate to their content. Query files (.qry) replace '${}' in their content with the arguments they are run with.",
            "Query files run by their full path or by their prefix followed by a colon.",
            "Without an extension a link file is created.",
        ]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[
            Parameter::required("filepath"),
            Parameter::optional("prefix"),
            Parameter::required("content"),
            Parameter::optional("icon"),
            Parameter::optional("iconClass"),
        ];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[
            Example {
                args: &["sites/example", "example.com"],
                description: "Creates a link file in 'sites' that navigates to https://example.com",
            },
            Example {
                args: &["sites/example.qry", "ex", "example.com/search?q=${}"],
                description: "Creates a query file in 'sites', run with 'sites/example.qry foo' or 'ex: foo'",
            },
        ]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let Some(path) = args.first() else {
            return Response::silent();
        };
        let (folder_name, Some(file_name)) = split_path(path) else {
            return Response::silent();
        };
        let Some(folder) = ctx.folders.folder_mut(folder_name) else {
            log::debug!("touch: folder {} does not exist", folder_name);
            return Response::silent();
        };

        let (mut file, rest): (VaunchFile, &[String]) = if file_name.ends_with(QUERY_EXTENSION) {
            let (Some(prefix), Some(content)) = (args.get(1), args.get(2)) else {
                return Response::silent();
            };
            (QueryFile::new(file_name, prefix, content.as_str()).into(), &args[3..])
        } else {
            let Some(content) = args.get(1) else {
                return Response::silent();
            };
            (LinkFile::new(file_name, content.as_str()).into(), &args[2..])
        };

        if let Some(icon) = rest.first() {
            file.set_icon(icon, rest.get(1).map(String::as_str));
        }

        let created = format!("{}/{}", folder_name, file.file_name());
        if folder.add_file(file) {
            Response::success(format!("Created file {}", created))
        } else {
            Response::silent()
        }
    }
}

/// Changes a file's content (and prefix, for queries).
pub struct EditCommand;

impl Command for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["edit-file"]
    }

    fn description(&self) -> &'static str {
        "Edits the content of an existing file"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &[
            "Link files take the new content. Query files take a new prefix, then new content.",
            "Pass '*' to keep a value unchanged.",
        ]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[
            Parameter::required("filepath"),
            Parameter::repeatable("values"),
        ];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[
            Example {
                args: &["sites/example.lnk", "example.org"],
                description: "Points 'example.lnk' at example.org",
            },
            Example {
                args: &["sites/example.qry", "*", "example.org/?q=${}"],
                description: "Keeps the prefix of 'example.qry' and replaces its content",
            },
        ]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let Some((path, values)) = args.split_first() else {
            return Response::error("No file given");
        };
        match file_mut(ctx.folders, path) {
            Ok(file) => {
                file.edit(values);
                Response::success(format!("Edited {}", path))
            }
            Err(err) => err.into(),
        }
    }
}

/// Deletes files.
pub struct RemoveFileCommand;

impl Command for RemoveFileCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["remove-file", "delete-file"]
    }

    fn description(&self) -> &'static str {
        "Deletes files"
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[Parameter::repeatable("filepath")];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[Example {
            args: &["sites/example.lnk"],
            description: "Deletes 'example.lnk' from the 'sites' folder",
        }]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        if args.is_empty() {
            return Response::error("No file given");
        }

        let mut missing = Vec::new();
        let mut removed = Vec::new();
        for path in args {
            let (folder_name, file_name) = split_path(path);
            let deleted = match (ctx.folders.folder_mut(folder_name), file_name) {
                (Some(folder), Some(file_name)) => folder.remove_file(file_name),
                _ => false,
            };
            if deleted {
                removed.push(path.as_str());
            } else {
                missing.push(path.as_str());
            }
        }

        if missing.is_empty() {
            Response::success(format!("Deleted file(s): {}", removed.join(", ")))
        } else {
            Response::error(format!("File(s) not found: {}", missing.join(", ")))
        }
    }
}

/// Moves and renames files and folders.
pub struct MoveCommand;

impl Command for MoveCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["move", "move-file", "move-folder"]
    }

    fn description(&self) -> &'static str {
        "Moves or renames files and folders"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &[
            "Moves files and folders to new locations. Can also be used to rename files and folders.",
            "A file keeps its name when the destination has no file segment, and keeps its extension when the new name omits it.",
        ]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[
            Parameter::required("sourcePath"),
            Parameter::required("destinationPath"),
        ];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[
            Example {
                args: &["sites/example.lnk", "other/"],
                description: "Moves 'example.lnk' from 'sites' to 'other', keeping its name",
            },
            Example {
                args: &["sites/exmaple.lnk", "sites/example.lnk"],
                description: "Renames 'exmaple.lnk' to 'example.lnk' within 'sites'",
            },
            Example {
                args: &["sites/", "other/"],
                description: "Renames the folder 'sites' to 'other'",
            },
        ]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let [source, dest] = args else {
            return Response::error("mv takes exactly two arguments: <sourcePath> <destinationPath>");
        };

        let (source_folder, source_file) = split_path(source);
        let (dest_folder, dest_file) = split_path(dest);

        let Some(folder) = ctx.folders.folder(source_folder) else {
            return Response::error(format!("Source folder '{}' does not exist", source_folder));
        };

        let Some(file_name) = source_file else {
            if dest_folder.is_empty() {
                return Response::error("No destination folder given");
            }
            if ctx.folders.folder(dest_folder).is_some() {
                return Response::error(format!(
                    "Destination folder '{}' already exists",
                    dest_folder
                ));
            }
            if let Some(folder) = ctx.folders.folder_mut(source_folder) {
                folder.set_name(dest_folder);
            }
            return Response::success(format!(
                "Renamed folder {} to {}",
                source_folder, dest_folder
            ));
        };

        let Some(file) = folder.file(file_name) else {
            return Response::error(format!("The file {} does not exist", file_name));
        };
        let new_name = normalize_name(dest_file.unwrap_or(file.file_name()), file.extension());

        let Some(destination) = ctx.folders.folder(dest_folder) else {
            return Response::error(format!("The folder {} does not exist", dest_folder));
        };
        if destination.file(&new_name).is_some() {
            return Response::info(format!(
                "A file with the name {} already exists in the destination folder. {} was not moved.",
                new_name, source
            ));
        }

        if source_folder == dest_folder {
            let renamed = match ctx.folders.folder_mut(source_folder) {
                Some(folder) => folder.rename_file(file_name, &new_name),
                None => {
                    return Response::error(format!("The folder {} does not exist", source_folder))
                }
            };
            return match renamed {
                Ok(name) => {
                    Response::success(format!("Renamed {} to {}/{}", source, source_folder, name))
                }
                Err(err) => err.into(),
            };
        }

        let Some(mut file) = ctx
            .folders
            .folder_mut(source_folder)
            .and_then(|f| f.take_file(file_name))
        else {
            return Response::error(format!("The file {} does not exist", file_name));
        };
        file.rename(&new_name);

        let added = ctx
            .folders
            .folder_mut(dest_folder)
            .is_some_and(|destination| destination.add_file(file));
        if added {
            Response::success(format!("Moved file {} to {}", source, dest))
        } else {
            Response::error(format!("Failed to move {} to {}", source, dest))
        }
    }
}

/// Reorders a file within its folder, or a folder within the folder list.
pub struct SetPositionCommand;

impl Command for SetPositionCommand {
    fn name(&self) -> &'static str {
        "set-position"
    }

    fn description(&self) -> &'static str {
        "Changes the position of a file or folder"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &["Positions start at 1. Positions past the end place the entry last."]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[
            Parameter::required("filepath"),
            Parameter::required("position"),
        ];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[
            Example {
                args: &["sites/example.lnk", "1"],
                description: "Moves 'sites/example.lnk' to the first position",
            },
            Example {
                args: &["sites/", "2"],
                description: "Makes 'sites' the second folder",
            },
        ]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let [path, rank, ..] = args else {
            return Response::error("set-position takes a path and a position");
        };
        let Ok(rank) = rank.parse::<i64>() else {
            return Response::error(format!("Invalid position '{}'", rank));
        };

        let (folder_name, file_name) = split_path(path);
        let result = match file_name {
            Some(file_name) => match ctx.folders.folder_mut(folder_name) {
                Some(folder) => folder
                    .set_file_position(file_name, rank)
                    .map_err(|_| VaunchError::NotFound(format!("The file {} does not exist", path))),
                None => Err(VaunchError::NotFound(format!(
                    "The folder {} does not exist",
                    folder_name
                ))),
            },
            None => ctx.folders.set_folder_position(folder_name, rank),
        };

        match result {
            Ok(()) => Response::success(format!("Changed the position of {}", path)),
            Err(err) => err.into(),
        }
    }
}

/// Sets the find/replace rule of a query file.
pub struct SedCommand;

impl Command for SedCommand {
    fn name(&self) -> &'static str {
        "sed"
    }

    fn description(&self) -> &'static str {
        "Changes the sed expression of an existing Query File"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &[
            "Rewrites a Query File's arguments with a regex-like expression before they are placed in its URL.",
            "Only the first match is replaced unless the expression carries the g flag.",
            "Without a replaceString every match is removed. Without an expression the rule is cleared.",
            "The target file must be a Query File.",
        ]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[
            Parameter::required("filepath"),
            Parameter::optional("expression"),
            Parameter::optional("replaceString"),
        ];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[
            Example {
                args: &["terraform/azurerm_resource.qry", "/azurerm_/"],
                description: "Removes 'azurerm_', so 'azurerm_resource_group' becomes 'resource_group'",
            },
            Example {
                args: &["sites/example.qry", "/ /g", "/"],
                description: "Replaces every space with a forward slash",
            },
        ]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let Some(path) = args.first() else {
            return Response::error("No file given");
        };
        let file = match file_mut(ctx.folders, path) {
            Ok(file) => file,
            Err(err) => return err.into(),
        };
        let Some(query) = file.as_query_mut() else {
            return Response::error(format!("The file at {} is not a Query File", path));
        };

        let expression = args.get(1).map(String::as_str).unwrap_or("");
        let replacement = args.get(2).map(String::as_str).unwrap_or("");
        query.transform = Transform::new(expression, replacement);
        Response::success(format!("Successfully set the sed expression for {}", path))
    }
}

/// Sets the tooltip text of a file.
pub struct SetDescriptionCommand;

impl Command for SetDescriptionCommand {
    fn name(&self) -> &'static str {
        "set-description"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["set-desc"]
    }

    fn description(&self) -> &'static str {
        "Sets the description of a file's tooltip"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &["The file extension must be supplied. An empty description restores the default."]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[
            Parameter::required("filepath"),
            Parameter::repeatable("description"),
        ];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[Example {
            args: &["sites/example.lnk", "Goes", "to", "an", "example", "site"],
            description: "Changes the description of 'example.lnk' in 'sites'",
        }]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let Some((path, words)) = args.split_first() else {
            return Response::error("No file given");
        };
        match file_mut(ctx.folders, path) {
            Ok(file) => {
                file.meta_mut().description = words.join(" ");
                Response::success(format!("Set the description of {}", path))
            }
            Err(err) => err.into(),
        }
    }
}

/// Sets the icon of a file or folder.
pub struct SetIconCommand;

impl Command for SetIconCommand {
    fn name(&self) -> &'static str {
        "set-icon"
    }

    fn description(&self) -> &'static str {
        "Changes the icon of an existing file or folder"
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[
            Parameter::required("path"),
            Parameter::required("icon"),
            Parameter::optional("iconClass"),
        ];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[
            Example {
                args: &["sites/example.lnk", "github", "brands"],
                description: "Gives 'example.lnk' the brands 'github' icon",
            },
            Example {
                args: &["sites/", "globe"],
                description: "Gives the folder 'sites' the solid 'globe' icon",
            },
        ]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let [path, icon, rest @ ..] = args else {
            return Response::error("set-icon takes a path and an icon name");
        };
        let icon_class = rest.first().map(String::as_str);

        let (folder_name, file_name) = split_path(path);
        if file_name.is_some() {
            return match file_mut(ctx.folders, path) {
                Ok(file) => {
                    file.set_icon(icon, icon_class);
                    Response::success(format!("Changed the icon of {}", path))
                }
                Err(err) => err.into(),
            };
        }

        match ctx.folders.folder_mut(folder_name) {
            Some(folder) => {
                folder.set_icon(icon, icon_class);
                Response::success(format!("Changed the icon of {}", folder_name))
            }
            None => Response::error(format!("The folder {} does not exist", folder_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::dispatch::Registry;
    use crate::models::{Config, ResponseType};

    fn run(command: &dyn Command, folders: &mut FolderStore, args: &[&str]) -> Response {
        let registry = Registry::new();
        let mut config = ConfigManager::in_memory(Config::default());
        let mut ctx = Context {
            folders,
            config: &mut config,
            registry: &registry,
        };
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        command.execute(&args, &mut ctx)
    }

    fn store() -> FolderStore {
        let mut folders = FolderStore::new();
        folders.add_folder("sites");
        folders.add_folder("other");
        let sites = folders.folder_mut("sites").unwrap();
        sites.add_file(LinkFile::new("example", "example.com").into());
        sites.add_file(QueryFile::new("search", "s", "example.com/?q=${}").into());
        folders
    }

    fn names(folders: &FolderStore, folder: &str) -> Vec<String> {
        folders
            .folder(folder)
            .unwrap()
            .files()
            .iter()
            .map(|f| f.file_name().to_string())
            .collect()
    }

    #[test]
    fn test_touch_link_and_query() {
        let mut folders = store();
        let response = run(&TouchCommand, &mut folders, &["other/docs", "docs.rs", "book", "regular"]);
        assert_eq!(response.message, "Created file other/docs.lnk");
        let file = folders.file_by_path("other/docs.lnk").unwrap();
        assert_eq!(file.content(), "docs.rs");
        assert_eq!(file.meta().icon, "book");
        assert_eq!(file.meta().icon_class, "regular");

        run(&TouchCommand, &mut folders, &["other/crates.qry", "cr:", "crates.io/search?q=${}"]);
        let file = folders.file_by_path("other/crates.qry").unwrap();
        assert_eq!(file.as_query().unwrap().prefix(), "cr");
        assert_eq!(file.meta().icon, "magnifying-glass");
    }

    #[test]
    fn test_touch_fails_quietly() {
        let mut folders = store();
        let before = folders.clone();
        for args in [
            vec!["missing/file", "example.com"],
            vec!["sites"],
            vec!["sites/new"],
            vec!["sites/new.qry", "prefix-only"],
            vec!["sites/example.lnk", "other.com"],
        ] {
            let response = run(&TouchCommand, &mut folders, &args);
            assert_eq!(response.kind, ResponseType::Success);
            assert!(response.message.is_empty());
        }
        assert_eq!(folders, before);
    }

    #[test]
    fn test_edit() {
        let mut folders = store();
        run(&EditCommand, &mut folders, &["sites/search.qry", "*", "example.org/?q=${}"]);
        let query = folders.file_by_path("sites/search.qry").unwrap().as_query().unwrap();
        assert_eq!(query.prefix(), "s");
        assert_eq!(query.content, "example.org/?q=${}");

        let response = run(&EditCommand, &mut folders, &["sites/nope.lnk", "x.com"]);
        assert_eq!(response.kind, ResponseType::Error);
    }

    #[test]
    fn test_rm() {
        let mut folders = store();
        let response = run(&RemoveFileCommand, &mut folders, &["sites/example.lnk"]);
        assert_eq!(response.kind, ResponseType::Success);
        assert_eq!(names(&folders, "sites"), vec!["search.qry"]);

        let response = run(&RemoveFileCommand, &mut folders, &["sites/example.lnk"]);
        assert_eq!(response.kind, ResponseType::Error);
        assert!(response.message.contains("sites/example.lnk"));
    }

    #[test]
    fn test_mv_file_keeps_name() {
        let mut folders = store();
        let response = run(&MoveCommand, &mut folders, &["sites/example.lnk", "other/"]);
        assert_eq!(response.kind, ResponseType::Success);
        assert_eq!(names(&folders, "sites"), vec!["search.qry"]);
        assert_eq!(names(&folders, "other"), vec!["example.lnk"]);
        let moved = folders.file_by_path("other/example.lnk").unwrap();
        assert_eq!(moved.aliases(), vec!["other/example.lnk".to_string()]);
        assert_eq!(moved.meta().position, 1);
    }

    #[test]
    fn test_mv_renames_and_appends_extension() {
        let mut folders = store();
        let response = run(&MoveCommand, &mut folders, &["sites/search.qry", "sites/find"]);
        assert_eq!(response.message, "Renamed sites/search.qry to sites/find.qry");
        assert_eq!(names(&folders, "sites"), vec!["example.lnk", "find.qry"]);
    }

    #[test]
    fn test_mv_rename_in_place_keeps_position() {
        let mut folders = store();
        run(&MoveCommand, &mut folders, &["sites/example.lnk", "sites/sample"]);
        assert_eq!(names(&folders, "sites"), vec!["sample.lnk", "search.qry"]);
        let renamed = folders.file_by_path("sites/sample.lnk").unwrap();
        assert_eq!(renamed.meta().position, 1);
        assert_eq!(renamed.aliases(), vec!["sites/sample.lnk".to_string()]);
    }

    #[test]
    fn test_mv_moved_file_lands_last() {
        let mut folders = store();
        folders
            .folder_mut("other")
            .unwrap()
            .add_file(LinkFile::new("docs", "docs.rs").into());

        let response = run(&MoveCommand, &mut folders, &["sites/search.qry", "other/find"]);
        assert_eq!(response.kind, ResponseType::Success);
        assert_eq!(names(&folders, "other"), vec!["docs.lnk", "find.qry"]);
        assert_eq!(names(&folders, "sites"), vec!["example.lnk"]);
        let moved = folders.file_by_path("other/find.qry").unwrap();
        assert_eq!(moved.meta().position, 2);
    }

    #[test]
    fn test_mv_collision_is_info() {
        let mut folders = store();
        folders
            .folder_mut("other")
            .unwrap()
            .add_file(LinkFile::new("example", "other.com").into());
        let before = folders.clone();

        let response = run(&MoveCommand, &mut folders, &["sites/example.lnk", "other/"]);
        assert_eq!(response.kind, ResponseType::Info);
        assert_eq!(folders, before);
    }

    #[test]
    fn test_mv_errors() {
        let mut folders = store();
        let before = folders.clone();
        for args in [
            vec!["sites/example.lnk"],
            vec!["nope/example.lnk", "other/"],
            vec!["sites/nope.lnk", "other/"],
            vec!["sites/example.lnk", "nope/"],
            vec!["sites/", "other/"],
        ] {
            let response = run(&MoveCommand, &mut folders, &args);
            assert_eq!(response.kind, ResponseType::Error, "args {:?}", args);
        }
        assert_eq!(folders, before);
    }

    #[test]
    fn test_mv_renames_folder() {
        let mut folders = store();
        let response = run(&MoveCommand, &mut folders, &["sites/", "web/"]);
        assert_eq!(response.message, "Renamed folder sites to web");
        assert!(folders.folder("sites").is_none());
        let file = folders.file_by_path("web/search.qry").unwrap();
        assert!(file.aliases().contains(&"web/search.qry".to_string()));
    }

    #[test]
    fn test_set_position() {
        let mut folders = store();
        run(&SetPositionCommand, &mut folders, &["sites/search.qry", "1"]);
        assert_eq!(names(&folders, "sites"), vec!["search.qry", "example.lnk"]);

        run(&SetPositionCommand, &mut folders, &["other", "1"]);
        assert_eq!(folders.folder_names(), vec!["other", "sites"]);

        let response = run(
            &SetPositionCommand,
            &mut folders,
            &["sites/example.lnk", "-9223372036854775808"],
        );
        assert_eq!(response.kind, ResponseType::Success);
        assert_eq!(names(&folders, "sites"), vec!["example.lnk", "search.qry"]);

        let response = run(&SetPositionCommand, &mut folders, &["sites/search.qry", "first"]);
        assert_eq!(response.kind, ResponseType::Error);
        let response = run(&SetPositionCommand, &mut folders, &["sites/nope.lnk", "1"]);
        assert_eq!(response.kind, ResponseType::Error);
        let response = run(&SetPositionCommand, &mut folders, &["nope", "1"]);
        assert_eq!(response.kind, ResponseType::Error);
    }

    #[test]
    fn test_sed() {
        let mut folders = store();
        let response = run(&SedCommand, &mut folders, &["sites/search.qry", "/ /g", "/"]);
        assert_eq!(response.kind, ResponseType::Success);
        let query = folders.file_by_path("sites/search.qry").unwrap().as_query().unwrap();
        assert_eq!(query.transform, Transform::new("/ /g", "/"));

        let response = run(&SedCommand, &mut folders, &["sites/example.lnk", "/a/"]);
        assert_eq!(response.message, "The file at sites/example.lnk is not a Query File");

        let response = run(&SedCommand, &mut folders, &["sites/nope.qry", "/a/"]);
        assert_eq!(response.kind, ResponseType::Error);

        run(&SedCommand, &mut folders, &["sites/search.qry"]);
        let query = folders.file_by_path("sites/search.qry").unwrap().as_query().unwrap();
        assert!(query.transform.is_empty());
    }

    #[test]
    fn test_set_description() {
        let mut folders = store();
        run(&SetDescriptionCommand, &mut folders, &["sites/example.lnk", "An", "example"]);
        let file = folders.file_by_path("sites/example.lnk").unwrap();
        assert_eq!(file.describe(), "An example");
    }

    #[test]
    fn test_set_icon() {
        let mut folders = store();
        run(&SetIconCommand, &mut folders, &["sites/example.lnk", "github", "brands"]);
        let file = folders.file_by_path("sites/example.lnk").unwrap();
        assert_eq!(file.meta().icon, "github");
        assert_eq!(file.meta().icon_class, "brands");

        run(&SetIconCommand, &mut folders, &["sites/", "globe"]);
        let folder = folders.folder("sites").unwrap();
        assert_eq!(folder.icon, "globe");
        assert_eq!(folder.icon_class, "solid");

        let response = run(&SetIconCommand, &mut folders, &["nope/", "globe"]);
        assert_eq!(response.kind, ResponseType::Error);
    }
}
