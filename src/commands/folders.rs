use crate::commands::{Command, Context, Example, Parameter};
use crate::models::Response;

/// Creates folders.
pub struct MakeFolderCommand;

impl Command for MakeFolderCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["make-folder"]
    }

    fn description(&self) -> &'static str {
        "Creates new folders"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &["Creates one folder per name given. Names that already exist are skipped."]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[Parameter::repeatable("folderName")];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[Example {
            args: &["sites", "tools"],
            description: "Creates the folders 'sites' and 'tools'",
        }]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        if args.is_empty() {
            return Response::error("No folder name given");
        }

        let names: Vec<&str> = args
            .iter()
            .map(|name| name.trim_end_matches('/'))
            .filter(|name| !name.is_empty())
            .collect();
        if let Some(nested) = names.iter().find(|name| name.contains('/')) {
            return Response::error(format!("Folder names cannot contain '/': {}", nested));
        }

        let mut created = Vec::new();
        for name in names {
            if ctx.folders.add_folder(name) {
                created.push(name);
            }
        }

        if created.is_empty() {
            Response::info("No new folders were created")
        } else {
            Response::success(format!("Created folder(s): {}", created.join(", ")))
        }
    }
}

/// Deletes folders and everything in them.
pub struct RemoveFolderCommand;

impl Command for RemoveFolderCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["remove-folder", "delete-folder"]
    }

    fn description(&self) -> &'static str {
        "Deletes folders and their files"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &["Removes each named folder along with every file inside it. This cannot be undone."]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[Parameter::repeatable("folderName")];
        PARAMS
    }

    fn examples(&self) -> &'static [Example] {
        &[Example {
            args: &["sites/"],
            description: "Deletes the folder 'sites'",
        }]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        if args.is_empty() {
            return Response::error("No folder name given");
        }

        let mut missing = Vec::new();
        let mut removed = Vec::new();
        for name in args {
            // Autocompleted names carry a trailing slash
            let name = name.replace('/', "");
            if ctx.folders.remove_folder(&name) {
                removed.push(name);
            } else {
                missing.push(name);
            }
        }

        if missing.is_empty() {
            Response::success(format!("Deleted folder(s): {}", removed.join(", ")))
        } else {
            log::debug!("rmdir skipped missing folders: {:?}", missing);
            Response::error(format!("Folder(s) not found: {}", missing.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::dispatch::Registry;
    use crate::models::{Config, ResponseType};
    use crate::store::FolderStore;

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

    #[test]
    fn test_mkdir_creates_and_skips_existing() {
        let mut folders = FolderStore::new();
        let response = run(&MakeFolderCommand, &mut folders, &["sites", "tools/", "sites"]);
        assert_eq!(response.kind, ResponseType::Success);
        assert_eq!(folders.folder_names(), vec!["sites", "tools"]);

        let response = run(&MakeFolderCommand, &mut folders, &["sites"]);
        assert_eq!(response.kind, ResponseType::Info);
    }

    #[test]
    fn test_mkdir_rejects_nested_names() {
        let mut folders = FolderStore::new();
        let response = run(&MakeFolderCommand, &mut folders, &["a/b"]);
        assert_eq!(response.kind, ResponseType::Error);
        assert!(folders.folders().is_empty());

        let response = run(&MakeFolderCommand, &mut folders, &["good", "a/b", "later"]);
        assert_eq!(response.kind, ResponseType::Error);
        assert!(response.message.contains("a/b"));
        assert!(folders.folders().is_empty());
    }

    #[test]
    fn test_rmdir() {
        let mut folders = FolderStore::new();
        folders.add_folder("sites");
        folders.add_folder("tools");

        let response = run(&RemoveFolderCommand, &mut folders, &["sites/"]);
        assert_eq!(response.kind, ResponseType::Success);
        assert_eq!(folders.folder_names(), vec!["tools"]);

        let response = run(&RemoveFolderCommand, &mut folders, &["sites", "tools"]);
        assert_eq!(response.kind, ResponseType::Error);
        assert!(response.message.contains("sites"));
        assert!(folders.folders().is_empty());
    }
}
