use crate::commands::{Command, Context, Parameter};
use crate::models::Response;

/// Prints the manual of one command, or a summary of all of them.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["man"]
    }

    fn description(&self) -> &'static str {
        "Shows how to use commands"
    }

    fn long_description(&self) -> &'static [&'static str] {
        &["Without a command name every available command is listed with its usage."]
    }

    fn parameters(&self) -> &'static [Parameter] {
        const PARAMS: &[Parameter] = &[Parameter::optional("command")];
        PARAMS
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response {
        let Some(verb) = args.first() else {
            let listing = ctx
                .registry
                .commands()
                .map(|command| format!("{} - {}", command.usage(), command.description()))
                .collect::<Vec<_>>()
                .join("\n");
            return Response::info(listing);
        };

        match ctx.registry.get(verb) {
            Some(command) => Response::info(command.manual()),
            None => Response::error(format!("No manual entry for {}", verb)),
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

    fn help(args: &[&str]) -> Response {
        let registry = Registry::new();
        let mut folders = FolderStore::new();
        let mut config = ConfigManager::in_memory(Config::default());
        let mut ctx = Context {
            folders: &mut folders,
            config: &mut config,
            registry: &registry,
        };
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        HelpCommand.execute(&args, &mut ctx)
    }

    #[test]
    fn test_help_lists_every_command() {
        let response = help(&[]);
        assert_eq!(response.kind, ResponseType::Info);
        for verb in ["mkdir", "touch", "mv", "rm", "rmdir", "sed", "help"] {
            assert!(
                response.message.lines().any(|line| line.starts_with(verb)),
                "{} missing from listing",
                verb
            );
        }
    }

    #[test]
    fn test_help_by_alias() {
        let response = help(&["move"]);
        assert!(response.message.starts_with("mv - "));

        let response = help(&["frobnicate"]);
        assert_eq!(response.kind, ResponseType::Error);
    }
}
