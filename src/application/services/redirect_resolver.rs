//! Redirect resolution: code to target URL on the read path.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::entities::ShortLink;
use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::is_well_formed;

/// Service resolving short codes to their target URLs.
///
/// Lookups go cache-first, then to the store. Successful resolutions offer a
/// [`HitEvent`] to the hit worker with `try_send`, so a slow or saturated
/// counter never delays the redirect.
pub struct RedirectResolver {
    store: Arc<dyn LinkStore>,
    cache: Arc<dyn CacheService>,
    hit_sender: mpsc::Sender<HitEvent>,
}

impl RedirectResolver {
    pub fn new(
        store: Arc<dyn LinkStore>,
        cache: Arc<dyn CacheService>,
        hit_sender: mpsc::Sender<HitEvent>,
    ) -> Self {
        Self {
            store,
            cache,
            hit_sender,
        }
    }

    /// Resolves `code` to its target URL and schedules a hit increment.
    ///
    /// Malformed codes are reported as [`AppError::NotFound`] without a store
    /// round trip; callers cannot tell them apart from unknown codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    /// Returns [`AppError::Storage`] if the store lookup failed.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if !is_well_formed(code) {
            return Err(AppError::NotFound);
        }

        let target_url = match self.cache.get_url(code).await {
            Ok(Some(url)) => url,
            Ok(None) => self.resolve_from_store(code).await?,
            Err(e) => {
                warn!("Cache error, falling back to store: {}", e);
                self.resolve_from_store(code).await?
            }
        };

        self.record_hit(code);
        metrics::counter!("redirects_total").increment(1);

        Ok(target_url)
    }

    /// Returns the full record for `code` without counting a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    /// Returns [`AppError::Storage`] if the store lookup failed.
    pub async fn inspect(&self, code: &str) -> Result<ShortLink, AppError> {
        if !is_well_formed(code) {
            return Err(AppError::NotFound);
        }

        self.store.lookup(code).await?.ok_or(AppError::NotFound)
    }

    /// Whether the hit queue still has a live consumer.
    pub fn hit_queue_open(&self) -> bool {
        !self.hit_sender.is_closed()
    }

    /// Remaining slots in the hit queue.
    pub fn hit_queue_capacity(&self) -> usize {
        self.hit_sender.capacity()
    }

    async fn resolve_from_store(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .store
            .lookup(code)
            .await?
            .ok_or(AppError::NotFound)?;

        // Fill the cache off the request path
        let cache = self.cache.clone();
        let code = link.code.clone();
        let url = link.target_url.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.set_url(&code, &url, None).await {
                warn!("Failed to cache {}: {}", code, e);
            }
        });

        Ok(link.target_url)
    }

    fn record_hit(&self, code: &str) {
        if let Err(e) = self.hit_sender.try_send(HitEvent::new(code)) {
            metrics::counter!("hits_dropped_total").increment(1);
            debug!("Hit for {} not queued: {}", code, e);
        }
    }
}
