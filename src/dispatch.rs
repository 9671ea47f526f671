//! The command registry: every verb and alias mapped to one handler.

use std::collections::HashMap;

use crate::commands::*;

/// Fixed set of handlers, looked up by exact, case-sensitive verb.
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
    verbs: HashMap<&'static str, usize>,
}

impl Registry {
    /// Builds the registry with every built-in command.
    pub fn new() -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(MakeFolderCommand),
            Box::new(TouchCommand),
            Box::new(EditCommand),
            Box::new(MoveCommand),
            Box::new(RemoveFileCommand),
            Box::new(RemoveFolderCommand),
            Box::new(SetPositionCommand),
            Box::new(SedCommand),
            Box::new(SetDescriptionCommand),
            Box::new(SetIconCommand),
            Box::new(ToggleCommandsCommand),
            Box::new(HelpCommand),
        ];

        let mut verbs = HashMap::new();
        for (index, command) in commands.iter().enumerate() {
            for verb in std::iter::once(command.name()).chain(command.aliases().iter().copied()) {
                if let Some(previous) = verbs.insert(verb, index) {
                    log::error!(
                        "verb {} registered by both {} and {}",
                        verb,
                        commands[previous].name(),
                        command.name()
                    );
                }
            }
        }

        Self { commands, verbs }
    }

    pub fn get(&self, verb: &str) -> Option<&dyn Command> {
        self.verbs.get(verb).map(|&index| self.commands[index].as_ref())
    }

    /// Handlers in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|command| command.as_ref())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
