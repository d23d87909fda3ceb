use crate::settings::RegistrySettings;
use async_trait::async_trait;
use dashmap::mapref::entry::{Entry, VacantEntry};
use dashmap::DashMap;
use jiff::{SignedDuration, Timestamp};
use snip_core::{
    Clock, CreateLinkParams, Registry, RegistryError, Result, ShortCode, ShortLink, SystemClock,
};
use snip_generator::{Generator, RandomGenerator};
use tracing::{debug, info, trace, warn};

/// In-memory implementation of the [`Registry`] trait using DashMap.
///
/// Every check-then-mutate sequence goes through a single DashMap entry,
/// which holds the shard's write lock for its lifetime. That makes the
/// conflict check and the insert in `create_link`, and the expiry check and
/// the removal in `resolve`, atomic per code.
#[derive(Debug)]
pub struct InMemoryRegistry<G = RandomGenerator, C = SystemClock> {
    storage: DashMap<String, ShortLink>,
    generator: G,
    clock: C,
    settings: RegistrySettings,
}

impl InMemoryRegistry {
    /// Creates a registry that generates random codes and reads the system clock.
    pub fn new(settings: RegistrySettings) -> Self {
        Self::with_parts(settings, RandomGenerator::default(), SystemClock)
    }
}

impl<G: Generator, C: Clock> InMemoryRegistry<G, C> {
    /// Creates a registry with an explicit generator and clock.
    pub fn with_parts(settings: RegistrySettings, generator: G, clock: C) -> Self {
        Self {
            storage: DashMap::new(),
            generator,
            clock,
            settings,
        }
    }

    /// Draws up to `max_attempts` candidates and returns the first one absent
    /// from the mapping, together with the entry that proved it absent.
    ///
    /// The entry holds the shard's write lock, so inserting through it
    /// cannot race another writer. Dropping it releases the code unclaimed.
    fn vacant_candidate(
        &self,
        max_attempts: usize,
    ) -> Result<(ShortCode, VacantEntry<'_, String, ShortLink>)> {
        for attempt in 1..=max_attempts {
            let code: ShortCode = self.generator.generate().into();
            match self.storage.entry(code.as_str().to_owned()) {
                Entry::Occupied(_) => {
                    debug!(code = %code, attempt, "generated short code collided");
                }
                Entry::Vacant(slot) => return Ok((code, slot)),
            }
        }

        warn!(attempts = max_attempts, "unable to generate a unique short code");
        Err(RegistryError::ExhaustedAttempts {
            attempts: max_attempts,
        })
    }

    /// Inserts `link` under a caller-supplied code, refusing to overwrite.
    fn insert_custom(&self, link: ShortLink) -> Result<ShortLink> {
        match self.storage.entry(link.code.as_str().to_owned()) {
            Entry::Occupied(_) => {
                warn!(code = %link.code, "short code already in use");
                Err(RegistryError::CodeConflict(link.code.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    fn insert_generated(&self, original_url: String, expires_at: Timestamp) -> Result<ShortLink> {
        let (code, slot) = self.vacant_candidate(self.settings.max_attempts)?;
        let link = ShortLink {
            code,
            original_url,
            expires_at,
        };
        slot.insert(link.clone());
        Ok(link)
    }
}

/// Computes `now + minutes`, failing when the result is not a valid timestamp.
fn expiry_after(now: Timestamp, minutes: i64) -> Result<Timestamp> {
    minutes
        .checked_mul(60)
        .map(SignedDuration::from_secs)
        .and_then(|validity| now.checked_add(validity).ok())
        .ok_or(RegistryError::InvalidValidity(minutes))
}

#[async_trait]
impl<G: Generator, C: Clock> Registry for InMemoryRegistry<G, C> {
    async fn generate_unique_code(&self, max_attempts: usize) -> Result<ShortCode> {
        let (code, _) = self.vacant_candidate(max_attempts)?;
        Ok(code)
    }

    async fn create_link(&self, params: CreateLinkParams) -> Result<ShortLink> {
        let now = self.clock.now();
        let expires_at = expiry_after(now, params.validity_minutes)?;

        let link = match params.custom_code {
            Some(code) => self.insert_custom(ShortLink {
                code,
                original_url: params.original_url,
                expires_at,
            })?,
            None => self.insert_generated(params.original_url, expires_at)?,
        };

        info!(
            code = %link.code,
            original_url = %link.original_url,
            expires_at = %link.expires_at,
            "short link created"
        );
        Ok(link)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<String> {
        trace!(code = %code, "resolving short code");
        let now = self.clock.now();

        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Vacant(_) => {
                warn!(code = %code, "short code not found");
                Err(RegistryError::NotFound(code.to_string()))
            }
            Entry::Occupied(entry) if entry.get().is_expired_at(now) => {
                entry.remove();
                info!(code = %code, "short code expired and removed");
                Err(RegistryError::Expired(code.to_string()))
            }
            Entry::Occupied(entry) => {
                let original_url = entry.get().original_url.clone();
                info!(code = %code, original_url = %original_url, "resolved short code");
                Ok(original_url)
            }
        }
    }

    async fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        let mut removed = 0;

        self.storage.retain(|_, link| {
            let keep = !link.is_expired_at(now);
            if !keep {
                removed += 1;
            }
            keep
        });

        if removed > 0 {
            info!(removed, "swept expired short links");
        }
        removed
    }

    fn len(&self) -> usize {
        self.storage.len()
    }
}
