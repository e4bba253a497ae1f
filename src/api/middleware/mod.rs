//! HTTP middleware for the API.
//!
//! - [`tracing`] - Structured request/response logging
//! - [`cors`] - Cross-origin access for the shortening form

pub mod cors;
pub mod tracing;
