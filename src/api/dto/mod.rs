//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request shapes
//! carry `validator` bounds checked before any service call.

pub mod health;
pub mod shorten;
