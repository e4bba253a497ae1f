//! Mapping store implementations.
//!
//! # Stores
//!
//! - [`PgLinkStore`] - Durable PostgreSQL storage (production default)
//! - [`MemoryLinkStore`] - Non-durable in-process storage for tests and local runs

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
