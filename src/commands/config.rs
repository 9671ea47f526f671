use crate::commands::{Command, Context};
use crate::models::Response;

/// Shows or hides the command list on the start page.
pub struct ToggleCommandsCommand;

impl Command for ToggleCommandsCommand {
    fn name(&self) -> &'static str {
        "toggle-commands"
    }

    fn description(&self) -> &'static str {
        "Toggles the visibility of the commands list"
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Response {
        let shown = ctx.config.toggle_commands();
        log::debug!("show_commands is now {}", shown);
        if shown {
            Response::success("Commands are now shown")
        } else {
            Response::success("Commands are now hidden")
        }
    }
}
