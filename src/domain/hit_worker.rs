//! Background worker applying hit counter increments.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::LinkStore;

/// Attempts per hit before it is dropped.
const MAX_RETRIES: usize = 3;

/// Drains hit events and applies them to the store until every sender is gone.
///
/// Each increment is retried with jittered exponential backoff; a hit that
/// still fails is logged and dropped.
pub async fn run_hit_worker(mut rx: mpsc::Receiver<HitEvent>, store: Arc<dyn LinkStore>) {
    info!("Hit worker started");

    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(3)
            .map(jitter)
            .take(MAX_RETRIES);

        let result = Retry::start(strategy, || store.increment_hits(&event.code)).await;

        match result {
            Ok(()) => debug!("Hit recorded for {}", event.code),
            Err(e) => {
                metrics::counter!("hits_dropped_total").increment(1);
                warn!("Dropping hit for {} after retries: {}", event.code, e);
            }
        }
    }

    info!("Hit worker stopped: channel closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_worker_applies_every_hit() {
        let mut store = MockLinkStore::new();
        store
            .expect_increment_hits()
            .withf(|code| code == "abc123")
            .times(2)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        tx.send(HitEvent::new("abc123")).await.unwrap();
        tx.send(HitEvent::new("abc123")).await.unwrap();
        drop(tx);

        run_hit_worker(rx, Arc::new(store)).await;
    }

    #[tokio::test]
    async fn test_worker_retries_transient_failure() {
        let mut store = MockLinkStore::new();
        let mut calls = 0;
        store
            .expect_increment_hits()
            .times(2)
            .returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(AppError::Storage("connection reset".to_string()))
                } else {
                    Ok(())
                }
            });

        let (tx, rx) = mpsc::channel(8);
        tx.send(HitEvent::new("retry1")).await.unwrap();
        drop(tx);

        run_hit_worker(rx, Arc::new(store)).await;
    }

    #[tokio::test]
    async fn test_worker_drops_hit_after_retries_exhausted() {
        let mut store = MockLinkStore::new();
        store
            .expect_increment_hits()
            .times(MAX_RETRIES + 1)
            .returning(|_| Err(AppError::Storage("down".to_string())));

        let (tx, rx) = mpsc::channel(8);
        tx.send(HitEvent::new("lost1")).await.unwrap();
        drop(tx);

        run_hit_worker(rx, Arc::new(store)).await;
    }
}
