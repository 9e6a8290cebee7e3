//! Directory-backed credential store

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{StoreError, StoreResult};
use super::name::validate_name;

/// Name of the environment variable that holds the path to the directory
/// where the supervisor stores credentials.
pub const CREDENTIALS_DIRECTORY: &str = "CREDENTIALS_DIRECTORY";

/// Read-only store over a supervisor-provided credential directory
///
/// A `Store` pairs the directory announced through [`CREDENTIALS_DIRECTORY`]
/// with a namespace prefix. Credential `name` resolves to the file
/// `<directory>/<prefix>-<name>`; the prefix keeps applications sharing a
/// directory from colliding.
///
/// The environment is consulted exactly once, in [`Store::open`]. Both
/// fields are immutable afterwards and every retrieval performs a fresh
/// read of its own file, so a `Store` can be shared freely across threads.
///
/// # Example
///
/// ```no_run
/// use loadcred_core::Store;
///
/// # fn main() -> Result<(), loadcred_core::StoreError> {
/// let store = Store::open("myapp")?;
/// let token = store.get("api-token")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
    prefix: String,
}

impl Store {
    /// Open the credential store using the given namespace prefix.
    ///
    /// Fails with [`StoreError::MissingPrefix`] if the prefix is empty or
    /// whitespace-only, [`StoreError::DirectoryUnset`] if
    /// [`CREDENTIALS_DIRECTORY`] is absent or empty, and
    /// [`StoreError::DirectoryAccess`] if the directory cannot be probed.
    /// The prefix is trimmed of surrounding whitespace and lower-cased; the
    /// directory path is taken verbatim from the environment. No credential
    /// file is read here.
    pub fn open(prefix: &str) -> StoreResult<Self> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(StoreError::MissingPrefix);
        }

        let path = match env::var_os(CREDENTIALS_DIRECTORY) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => return Err(StoreError::DirectoryUnset),
        };

        // Existence probe only; a vanished directory surfaces later as a
        // CredentialValue failure at retrieval time.
        fs::metadata(&path).map_err(|source| StoreError::DirectoryAccess {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            prefix: prefix.to_lowercase(),
        })
    }

    /// Absolute path to the credentials directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalized namespace prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Retrieve the credential with the given name as a string.
    ///
    /// This is [`Store::get_bytes`] with the result reinterpreted as text:
    /// no second validation pass, no second read. Valid UTF-8 is taken over
    /// without copying; invalid sequences are replaced with U+FFFD. Use
    /// [`Store::get_bytes`] when the value is not text.
    pub fn get(&self, name: &str) -> StoreResult<String> {
        let value = self.get_bytes(name)?;

        Ok(match String::from_utf8(value) {
            Ok(text) => text,
            Err(raw) => String::from_utf8_lossy(raw.as_bytes()).into_owned(),
        })
    }

    /// Retrieve the credential with the given name as raw bytes.
    ///
    /// The name is validated first ([`validate_name`]); nothing touches the
    /// filesystem on an invalid name. The file at
    /// `<directory>/<prefix>-<name>` is then read whole and returned
    /// unmodified: no trimming, no decoding, no size check. A failed read of
    /// any kind becomes [`StoreError::CredentialValue`] with the underlying
    /// I/O error as its source.
    pub fn get_bytes(&self, name: &str) -> StoreResult<Vec<u8>> {
        validate_name(name)?;

        let path = self.path.join(format!("{}-{}", self.prefix, name));

        fs::read(path).map_err(StoreError::CredentialValue)
    }
}
