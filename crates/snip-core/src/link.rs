use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A shortened link held by the registry.
///
/// Links are immutable once created; their validity cannot be extended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    /// The key under which the link is stored.
    pub code: ShortCode,
    /// The destination URL.
    pub original_url: String,
    /// The instant after which the link can no longer be resolved.
    pub expires_at: Timestamp,
}

impl ShortLink {
    /// A link is reachable at `now` iff `now <= expires_at`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn link(expires_at: Timestamp) -> ShortLink {
        ShortLink {
            code: ShortCode::custom("promo"),
            original_url: "https://example.com".to_string(),
            expires_at,
        }
    }

    #[test]
    fn reachable_at_exact_expiry() {
        let at = Timestamp::from_second(1_000).unwrap();
        assert!(!link(at).is_expired_at(at));
    }

    #[test]
    fn expired_strictly_after_expiry() {
        let at = Timestamp::from_second(1_000).unwrap();
        let later = at + SignedDuration::from_nanos(1);
        assert!(link(at).is_expired_at(later));
    }
}
