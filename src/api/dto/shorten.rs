//! DTOs for link shortening and stats endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(length(max = 2048))]
    pub url: String,

    /// Optional custom alias. Empty or blank means "generate one".
    #[validate(length(max = 64))]
    pub custom_path: Option<String>,
}

impl ShortenRequest {
    /// The alias to claim, treating an empty form field as absent.
    pub fn custom_code(&self) -> Option<&str> {
        self.custom_path
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// A stored mapping as seen by clients.
///
/// `short_url` is the bare code; clients prefix it with the service address.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<ShortLink> for ShortLinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_url: link.code,
            original_url: link.target_url,
            created_at: link.created_at,
            clicks: link.hit_count,
        }
    }
}
