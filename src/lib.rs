pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exporter;
pub mod file;
pub mod filesystem;
pub mod folder;
pub mod models;
pub mod resolve;
pub mod session;
pub mod store;
pub mod template;

pub use error::{Result, VaunchError};
pub use models::{Config, Navigation, Response, ResponseType};
pub use session::Vaunch;
