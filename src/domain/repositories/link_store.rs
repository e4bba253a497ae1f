//! Mapping store trait: the single source of truth for code-to-URL bindings.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an atomic check-and-insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The code was free and is now bound to the new record.
    Created(ShortLink),
    /// The code was already bound; the existing record was not touched.
    AlreadyExists,
}

/// Storage interface for short link mappings.
///
/// `insert_if_absent` is the only synchronization point for code uniqueness:
/// it must behave as if globally serialized per code, even when many
/// registrations race for the same code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_memory.rs`, `tests/store_postgres.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Atomically binds `new_link.code` to its target URL if the code is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the insert could not be durably persisted.
    /// A taken code is not an error; it is reported as [`InsertOutcome::AlreadyExists`].
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError>;

    /// Finds a mapping by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn lookup(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Bumps the hit counter for a code.
    ///
    /// Best-effort: not linearizable with lookups, lost updates are acceptable,
    /// and an unknown code is silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn increment_hits(&self, code: &str) -> Result<(), AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
