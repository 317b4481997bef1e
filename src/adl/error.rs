use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdlError {
    #[error("'{}' exists but is not a directory", .0.display())]
    Conflict(PathBuf),

    #[error("Not managed by adl ('{}' does not exist)", .0.display())]
    NotManaged(PathBuf),

    #[error("No name supplied for the ADR")]
    MissingName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl AdlError {
    /// Corrective hint for a directory that is not (or cannot be) managed.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AdlError::NotManaged(_) | AdlError::Conflict(_) => Some("Run 'adl init' first."),
            _ => None,
        }
    }

    /// Usage line shown on stdout after a malformed command.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            AdlError::MissingName => Some("Usage: adl create <name>"),
            _ => None,
        }
    }
}


pub type Result<T> = std::result::Result<T, AdlError>;
