//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkStore`] - Atomic short link storage and lookup

pub mod link_store;

pub use link_store::{InsertOutcome, LinkStore};

#[cfg(test)]
pub use link_store::MockLinkStore;
