//! Target URL validation.
//!
//! URLs are checked, not rewritten: apart from trimming surrounding whitespace
//! the caller's string is stored exactly as submitted, so two spellings of the
//! same resource (`HTTPS://Example.com` vs `https://example.com/`) each get
//! their own code.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates that `input` is a well-formed absolute HTTP(S) URL.
///
/// Returns the trimmed input on success. The returned slice is what gets
/// stored; it is never re-serialized through [`Url`].
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:`, `mailto:` and any other non-HTTP
/// scheme, since the stored value is later emitted as a `Location` header.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] for relative or malformed URLs, or
///   input containing whitespace or control characters
/// - [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// - [`UrlValidationError::MissingHost`] when no host is present
pub fn validate_target_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains whitespace".to_string(),
        ));
    }

    // `Url::parse` percent-encodes these in its own serialization, but the
    // stored string is the raw input and must stay a valid `Location` value.
    if trimmed.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(UrlValidationError::MissingHost),
    }
}
