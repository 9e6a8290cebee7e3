//! Credential name validation

use super::error::{StoreError, StoreResult};

/// Check that a candidate credential name is safe to splice into a
/// filesystem path.
///
/// Names must be non-empty and must not contain path separators (`/` or
/// `\`) or the substring `..`. The `..` rule is a blunt substring check:
/// it also rejects names like `a..b` that could never form a
/// parent-directory segment. Relaxing it would weaken the security
/// contract, so it stays.
///
/// Pure and total: no I/O, no side effects, the same verdict for the same
/// input every time.
///
/// # Example
///
/// ```
/// use loadcred_core::{validate_name, StoreError};
///
/// assert!(validate_name("database-password").is_ok());
/// assert!(matches!(
///     validate_name("../database-password"),
///     Err(StoreError::InvalidName(_))
/// ));
/// ```
pub fn validate_name(name: &str) -> StoreResult<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(StoreError::InvalidName(name.to_string()));
    }

    Ok(())
}
