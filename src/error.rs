use thiserror::Error;

/// Failure categories surfaced by the entry model, the engines and storage.
///
/// Command handlers never let these escape: every variant is turned into a
/// [`Response`](crate::models::Response) before it reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VaunchError {
    /// A folder or file path did not resolve.
    #[error("{0}")]
    NotFound(String),
    /// A name is already taken.
    #[error("{0}")]
    Conflict(String),
    /// Wrong arity, wrong file type, or a malformed transform.
    #[error("{0}")]
    InvalidArgument(String),
    /// Content could not be turned into a navigable URL.
    #[error("Failed to execute file. Attempted URL was: {0}")]
    InvalidUrl(String),
    /// Reading or writing the persisted documents failed.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, VaunchError>;
