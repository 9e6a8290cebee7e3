//! Loadcred Core
//!
//! Retrieval of supervisor-provided, file-backed credentials.
//!
//! A service supervisor (systemd's `LoadCredential=`, or anything compatible)
//! materializes each secret as a file in a private directory and announces
//! that directory through the `CREDENTIALS_DIRECTORY` environment variable.
//! This crate is the thin, validated read path over that directory: it
//! resolves the directory once, namespaces file names with a per-application
//! prefix, and rejects credential names that are unsafe to splice into a
//! filesystem path.
//!
//! ```rust,no_run
//! use loadcred_core::Store;
//!
//! # fn main() -> Result<(), loadcred_core::StoreError> {
//! // Open the credential store with an application prefix.
//! let store = Store::open("myapp")?;
//!
//! // Reads <CREDENTIALS_DIRECTORY>/myapp-database-password.
//! let password = store.get("database-password")?;
//! # Ok(())
//! # }
//! ```
//!
//! Each credential is capped in size by the supervisor (1 MiB under systemd);
//! this crate does not enforce or re-check that limit.

pub mod credentials;

// Re-export commonly used types
pub use credentials::{validate_name, Store, StoreError, StoreResult, CREDENTIALS_DIRECTORY};
