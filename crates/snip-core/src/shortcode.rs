use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The key identifying a shortened link.
///
/// The variant records where the code came from; lookups and uniqueness
/// are always decided on [`ShortCode::as_str`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortCode {
    /// A system-generated short code.
    Generated(String),
    /// A caller-supplied code, kept verbatim.
    Custom(String),
}

impl ShortCode {
    /// Wraps a code produced by a generator.
    pub fn generated(code: impl Into<String>) -> Self {
        Self::Generated(code.into())
    }

    /// Wraps a caller-supplied code without altering it.
    pub fn custom(code: impl Into<String>) -> Self {
        Self::Custom(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShortCode::Generated(s) | ShortCode::Custom(s) => s.as_str(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ShortCode::Generated(_))
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_code_is_kept_verbatim() {
        let code = ShortCode::custom("My Promo!");
        assert_eq!(code.as_str(), "My Promo!");
        assert!(!code.is_generated());
    }

    #[test]
    fn display_generated() {
        let code = ShortCode::generated("aB3xYz");
        assert_eq!(code.to_string(), "aB3xYz");
        assert!(code.is_generated());
    }
}
