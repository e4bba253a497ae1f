//! Core domain entities.
//!
//! The service has a single entity, [`ShortLink`]. Creation input is carried
//! separately as [`NewShortLink`] so that store-assigned fields (`created_at`,
//! `hit_count`) cannot be forged by callers.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
