//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`hit_event`] - Hit counting event model
//! - [`hit_worker`] - Asynchronous hit counter worker
//!
//! # Hit Counting Flow
//!
//! 1. [`crate::application::services::RedirectResolver`] resolves a code
//! 2. A [`hit_event::HitEvent`] is offered to a bounded channel (dropped if full)
//! 3. [`hit_worker::run_hit_worker`] applies it with retry
//! 4. The counter is bumped via [`repositories::LinkStore::increment_hits`]

pub mod entities;
pub mod hit_event;
pub mod hit_worker;
pub mod repositories;
