//! Application layer services implementing business logic.
//!
//! Services orchestrate validation, code generation and store calls, and
//! expose a small API to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_registrar::LinkRegistrar`] - Write path: validation, aliases, collision retry
//! - [`services::redirect_resolver::RedirectResolver`] - Read path: cached resolution and hit counting

pub mod services;
