use serde::{Deserialize, Serialize};

use crate::error::VaunchError;

/// Tag a caller branches on when handling a [`Response`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseType {
    Success,
    Error,
    Info,
    /// Not a terminal action: the input buffer should be replaced with the message.
    UpdateInput,
}

/// A request for the caller to leave the current page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub url: String,
    pub new_context: bool,
}

/// Result of executing a command or a file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub navigation: Option<Navigation>,
}

impl Response {
    fn new(kind: ResponseType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            navigation: None,
        }
    }

    /// Create a successful result
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ResponseType::Success, message)
    }

    /// A success with nothing to say. Used by handlers that fail closed and stay quiet.
    pub fn silent() -> Self {
        Self::new(ResponseType::Success, "")
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ResponseType::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ResponseType::Info, message)
    }

    /// Ask the caller to rewrite its input buffer.
    pub fn update_input(message: impl Into<String>) -> Self {
        Self::new(ResponseType::UpdateInput, message)
    }

    /// A successful navigation to `url`.
    pub fn navigate(url: impl Into<String>, new_context: bool) -> Self {
        let url = url.into();
        Self {
            kind: ResponseType::Success,
            message: format!("Navigating to: {}", url),
            navigation: Some(Navigation { url, new_context }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ResponseType::Success
    }
}

impl From<VaunchError> for Response {
    fn from(err: VaunchError) -> Self {
        match err {
            VaunchError::Conflict(msg) => Response::info(msg),
            other => Response::error(other.to_string()),
        }
    }
}

/// User configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub show_commands: bool,
    pub show_gui: bool,
    pub title_case: bool,
    pub fuzzy: bool,
    /// Path of a Query File that receives any input no command claims.
    pub default_file: String,
    pub background: String,
    pub prefix_icon: String,
    pub prefix_icon_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_commands: false,
            show_gui: true,
            title_case: true,
            fuzzy: false,
            default_file: String::new(),
            background: String::new(),
            prefix_icon: "chevron-right".to_string(),
            prefix_icon_class: "solid".to_string(),
        }
    }
}
