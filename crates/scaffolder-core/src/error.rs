//! Error types for module scaffolding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used for every scaffolding failure
pub const FAILURE_EXIT_CODE: u8 = 1;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a scaffold run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The module name is empty or contains characters other than letters, digits and hyphens
    #[error("module name must be alphanumeric (hyphens allowed), got '{raw}'")]
    InvalidName { raw: String },

    /// The API package directory is not present under the project root
    #[error("{} not found. Run from the monorepo root.", .path.display())]
    MissingApiRoot { path: PathBuf },

    /// The target module directory is already on disk
    #[error("{} already exists", .path.display())]
    ModuleExists { path: PathBuf },

    /// The layout file could not be read or parsed
    #[error("invalid layout file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// A filesystem operation failed while writing the module
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}
