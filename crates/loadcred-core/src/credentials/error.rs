//! Credential store error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening a store or retrieving a credential
///
/// Construction failures (`MissingPrefix`, `DirectoryUnset`,
/// `DirectoryAccess`) are surfaced by [`Store::open`]; retrieval failures
/// (`InvalidName`, `CredentialValue`) by [`Store::get`] and
/// [`Store::get_bytes`]. Underlying I/O causes are preserved and reachable
/// through [`std::error::Error::source`].
///
/// [`Store::open`]: super::Store::open
/// [`Store::get`]: super::Store::get
/// [`Store::get_bytes`]: super::Store::get_bytes
#[derive(Error, Debug)]
pub enum StoreError {
    /// Namespace prefix is empty (or whitespace-only)
    #[error("credentials prefix cannot be empty")]
    MissingPrefix,

    /// The credentials directory environment variable is absent or empty.
    /// This usually means the process is not running under a supervisor
    /// with credentials configured.
    #[error("CREDENTIALS_DIRECTORY environment variable not set; is this a supervised service?")]
    DirectoryUnset,

    /// The credentials directory could not be accessed, likely a permission
    /// issue or a missing directory
    #[error("failed to access credentials directory {path:?}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested credential name is unsafe to splice into a path
    #[error("credential name cannot be empty or contain path separators: {0:?}")]
    InvalidName(String),

    /// The credential's value could not be read
    #[error("failed to read credential's value")]
    CredentialValue(#[source] io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
