//! Business logic services for the application layer.

pub mod link_registrar;
pub mod redirect_resolver;

pub use link_registrar::{DEFAULT_MAX_ATTEMPTS, LinkRegistrar};
pub use redirect_resolver::RedirectResolver;
