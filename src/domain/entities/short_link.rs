//! ShortLink entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A committed mapping between a short code and its target URL.
///
/// `code` and `target_url` never change once the record exists; only
/// `hit_count` moves, and only upwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub target_url: String,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    pub hit_count: i64,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        code: String,
        target_url: String,
        is_custom: bool,
        created_at: DateTime<Utc>,
        hit_count: i64,
    ) -> Self {
        Self {
            code,
            target_url,
            is_custom,
            created_at,
            hit_count,
        }
    }
}

/// Input data for committing a new mapping.
///
/// The store stamps `created_at` and starts `hit_count` at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub code: String,
    pub target_url: String,
    pub is_custom: bool,
}

impl NewShortLink {
    pub fn new(code: impl Into<String>, target_url: impl Into<String>, is_custom: bool) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
            is_custom,
        }
    }

    /// Materializes the record as the store would on a fresh insert.
    pub fn into_link(self, created_at: DateTime<Utc>) -> ShortLink {
        ShortLink::new(self.code, self.target_url, self.is_custom, created_at, 0)
    }
}
