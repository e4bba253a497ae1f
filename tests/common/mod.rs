#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use short_links::config::{Config, StorageBackend};
use short_links::domain::entities::{NewShortLink, ShortLink};
use short_links::domain::hit_event::HitEvent;
use short_links::domain::repositories::{InsertOutcome, LinkStore};
use short_links::infrastructure::cache::NullCache;
use short_links::infrastructure::persistence::MemoryLinkStore;
use short_links::server::build_state;
use short_links::state::AppState;
use tokio::sync::mpsc;

pub fn test_config() -> Config {
    Config {
        storage_backend: StorageBackend::Memory,
        ..Config::default()
    }
}

/// State over a fresh in-memory store; the receiver end of the hit queue is
/// handed back so tests can observe or drain it.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>, mpsc::Receiver<HitEvent>) {
    create_test_state_with_queue(100)
}

pub fn create_test_state_with_queue(
    capacity: usize,
) -> (AppState, Arc<MemoryLinkStore>, mpsc::Receiver<HitEvent>) {
    let store = Arc::new(MemoryLinkStore::new());
    let (tx, rx) = mpsc::channel(capacity);

    let state = build_state(
        &test_config(),
        store.clone(),
        Arc::new(NullCache::new()),
        tx,
    );

    (state, store, rx)
}

pub async fn create_test_link(store: &MemoryLinkStore, code: &str, url: &str) -> ShortLink {
    match store
        .insert_if_absent(NewShortLink::new(code, url, true))
        .await
        .unwrap()
    {
        InsertOutcome::Created(link) => link,
        InsertOutcome::AlreadyExists => panic!("code {} already exists", code),
    }
}

/// Polls the store until the hit counter for `code` reaches `expected`.
pub async fn wait_for_hits(store: &MemoryLinkStore, code: &str, expected: i64) -> i64 {
    let mut last = 0;
    for _ in 0..100 {
        last = store.lookup(code).await.unwrap().map_or(0, |l| l.hit_count);
        if last >= expected {
            return last;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    last
}
