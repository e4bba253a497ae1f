//! In-process implementation of the mapping store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, LinkStore};
use crate::error::AppError;

/// Map-backed store for tests and local development.
///
/// Not durable: contents are lost when the process exits. The check-and-insert
/// runs under the shard lock held by [`DashMap::entry`], so concurrent inserts
/// of one code are serialized.
#[derive(Default)]
pub struct MemoryLinkStore {
    links: DashMap<String, ShortLink>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                let link = new_link.into_link(Utc::now());
                slot.insert(link.clone());
                Ok(InsertOutcome::Created(link))
            }
        }
    }

    async fn lookup(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn increment_hits(&self, code: &str) -> Result<(), AppError> {
        if let Some(mut entry) = self.links.get_mut(code) {
            entry.hit_count += 1;
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
