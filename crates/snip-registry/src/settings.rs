use snip_core::DEFAULT_MAX_ATTEMPTS;
use typed_builder::TypedBuilder;

/// Configures an [`InMemoryRegistry`](crate::InMemoryRegistry).
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RegistrySettings {
    /// Random candidates tried per generated code before giving up.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_attempts() {
        assert_eq!(RegistrySettings::default().max_attempts, 5);
        assert_eq!(RegistrySettings::builder().max_attempts(2).build().max_attempts, 2);
    }
}
