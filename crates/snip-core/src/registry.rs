use crate::error::Result;
use crate::link::ShortLink;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Number of minutes a link stays valid when the caller does not say otherwise.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Number of random codes tried before giving up on generation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Parameters for creating a shortened link.
#[derive(Debug, Clone)]
pub struct CreateLinkParams {
    /// The original URL, already validated by the caller.
    pub original_url: String,
    /// Minutes from now until expiry. Zero or negative values are accepted
    /// and produce a link that is already (or about to be) expired.
    pub validity_minutes: i64,
    /// Optional caller-supplied code, used verbatim.
    pub custom_code: Option<ShortCode>,
}

impl CreateLinkParams {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            validity_minutes: DEFAULT_VALIDITY_MINUTES,
            custom_code: None,
        }
    }

    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.validity_minutes = minutes;
        self
    }

    pub fn with_custom_code(mut self, code: ShortCode) -> Self {
        self.custom_code = Some(code);
        self
    }
}

/// The shortcode registry: sole owner of the code to link mapping.
///
/// Implementations must make the existence check and the mutation of
/// `create_link` and `resolve` atomic with respect to each other.
#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Returns a random code that is absent from the mapping at the
    /// instant of the check.
    ///
    /// Fails with [`RegistryError::ExhaustedAttempts`](crate::RegistryError::ExhaustedAttempts)
    /// when every one of `max_attempts` candidates is already taken.
    async fn generate_unique_code(&self, max_attempts: usize) -> Result<ShortCode>;

    /// Stores a new link and returns it.
    ///
    /// Never overwrites: an existing code yields `CodeConflict`.
    async fn create_link(&self, params: CreateLinkParams) -> Result<ShortLink>;

    /// Returns the original URL for `code`.
    ///
    /// An expired link is removed and reported as `Expired`; looking it up
    /// again yields `NotFound`.
    async fn resolve(&self, code: &ShortCode) -> Result<String>;

    /// Removes every expired link and returns how many were removed.
    async fn sweep_expired(&self) -> usize;

    /// Number of links currently held, expired-but-unswept ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
