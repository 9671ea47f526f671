//! Command handlers, one per verb.
//!
//! Every handler validates its own arguments and reports back through a
//! [`Response`]; nothing here returns an error to the dispatcher.

pub mod config;
pub mod files;
pub mod folders;
pub mod help;

pub use config::*;
pub use files::*;
pub use folders::*;
pub use help::*;

use crate::config::ConfigManager;
use crate::dispatch::Registry;
use crate::models::Response;
use crate::store::FolderStore;

/// One entry of a command's parameter schema. Documentation only; handlers
/// do their own validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub optional: bool,
    pub repeatable: bool,
}

impl Parameter {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            optional: false,
            repeatable: false,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            optional: true,
            repeatable: false,
        }
    }

    pub const fn repeatable(name: &'static str) -> Self {
        Self {
            name,
            optional: false,
            repeatable: true,
        }
    }

    fn usage(&self) -> String {
        let mut text = if self.optional {
            format!("[{}]", self.name)
        } else {
            format!("<{}>", self.name)
        };
        if self.repeatable {
            text.push_str("...");
        }
        text
    }
}

/// A documented invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub args: &'static [&'static str],
    pub description: &'static str,
}

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub folders: &'a mut FolderStore,
    pub config: &'a mut ConfigManager,
    pub registry: &'a Registry,
}

pub trait Command {
    /// Primary verb.
    fn name(&self) -> &'static str;

    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// One-line summary.
    fn description(&self) -> &'static str;

    fn long_description(&self) -> &'static [&'static str] {
        &[]
    }

    fn parameters(&self) -> &'static [Parameter] {
        &[]
    }

    fn examples(&self) -> &'static [Example] {
        &[]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Response;

    /// `name <required> [optional] <repeatable>...`
    fn usage(&self) -> String {
        std::iter::once(self.name().to_string())
            .chain(self.parameters().iter().map(Parameter::usage))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full manual page rendered from the declared schema.
    fn manual(&self) -> String {
        let mut lines = vec![format!("{} - {}", self.name(), self.description())];
        lines.push(format!("Usage: {}", self.usage()));
        if !self.aliases().is_empty() {
            lines.push(format!("Aliases: {}", self.aliases().join(", ")));
        }
        lines.extend(self.long_description().iter().map(|line| line.to_string()));
        for example in self.examples() {
            let invocation = std::iter::once(self.name())
                .chain(example.args.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("  {}\n      {}", invocation, example.description));
        }
        lines.join("\n")
    }
}
