//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkRegistrar, RedirectResolver};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::cache::CacheService;

/// Explicitly constructed service handles; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub registrar: Arc<LinkRegistrar>,
    pub resolver: Arc<RedirectResolver>,
    pub store: Arc<dyn LinkStore>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        registrar: Arc<LinkRegistrar>,
        resolver: Arc<RedirectResolver>,
        store: Arc<dyn LinkStore>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            registrar,
            resolver,
            store,
            cache,
        }
    }
}
