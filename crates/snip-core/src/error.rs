use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors produced by the shortcode registry.
///
/// Every variant is terminal: the registry never retries internally and a
/// failed operation leaves the mapping untouched, except for the deletion
/// that accompanies [`RegistryError::Expired`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("short code already exists: {0}")]
    CodeConflict(String),
    #[error("unable to generate a unique short code after {attempts} attempts")]
    ExhaustedAttempts { attempts: usize },
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("short code has expired: {0}")]
    Expired(String),
    #[error("validity of {0} minutes is out of range")]
    InvalidValidity(i64),
}
