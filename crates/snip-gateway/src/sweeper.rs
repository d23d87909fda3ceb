use std::sync::Arc;
use std::time::Duration;

use snip_core::Registry;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Periodically removes expired links that were never looked up again.
///
/// Lazy deletion on lookup stays in place; this only reclaims memory held
/// by links nobody resolves after they expire. The task runs until the
/// returned handle is aborted.
pub fn spawn_sweeper(registry: Arc<dyn Registry>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = registry.sweep_expired().await;
            debug!(removed, remaining = registry.len(), "sweep finished");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_core::{CreateLinkParams, ShortCode};
    use snip_registry::{InMemoryRegistry, RegistrySettings};

    #[tokio::test(start_paused = true)]
    async fn sweeper_reclaims_expired_links() {
        let registry: Arc<dyn Registry> =
            Arc::new(InMemoryRegistry::new(RegistrySettings::default()));
        registry
            .create_link(
                CreateLinkParams::new("https://example.com")
                    .with_validity_minutes(-1)
                    .with_custom_code(ShortCode::custom("stale1")),
            )
            .await
            .unwrap();
        registry
            .create_link(CreateLinkParams::new("https://example.com"))
            .await
            .unwrap();

        let handle = spawn_sweeper(Arc::clone(&registry), Duration::from_secs(60));

        // nothing happens before the first interval elapses
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(registry.len(), 2);

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(registry.len(), 1);

        handle.abort();
    }
}
