use crate::Generator;
use rand::distr::Alphanumeric;
use rand::Rng;
use snip_core::ShortCode;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates codes drawn uniformly from `[A-Za-z0-9]`.
///
/// With 62 symbols and the default length there are roughly 5.7e10
/// possible codes, so collisions are rare for small registries but still
/// possible; callers must check candidates for uniqueness.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let code: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();
        ShortCode::generated(code)
    }
}
