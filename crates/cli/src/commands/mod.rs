//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod session;

use thiserror::Error;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Session state file could not be opened or read.
    #[error("session storage error: {0}")]
    Storage(#[from] afroman_session::StorageError),

    /// Cart state file could not be read or written.
    #[error("cart file error: {0}")]
    Io(#[from] std::io::Error),

    /// Cart state file is not valid JSON.
    #[error("cart file format error: {0}")]
    Format(#[from] serde_json::Error),

    /// No catalog item with the given identifier.
    #[error("unknown merch item: {0}")]
    UnknownItem(String),

    /// The item exists but is not offered in the given size.
    #[error("item {item} is not offered in size {size}")]
    SizeNotOffered { item: String, size: String },

    /// Admin credentials were rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Verification code was rejected.
    #[error("invalid verification code")]
    InvalidCode,
}
