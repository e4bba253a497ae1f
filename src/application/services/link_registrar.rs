//! Link registration: validation, alias handling and collision retry.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, LinkStore};
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_code};
use crate::utils::url_validator::validate_target_url;

/// Default number of generated candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// Outcome of claiming one generated candidate.
#[derive(Debug)]
enum Claim {
    Created(ShortLink),
    Collision,
}

/// Service for creating short links.
///
/// Custom aliases are claimed exactly once and never fall back to a generated
/// code. Generated codes are claimed in a bounded loop; uniqueness is decided
/// solely by the store's atomic insert, so there is no reservation window.
pub struct LinkRegistrar {
    store: Arc<dyn LinkStore>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl LinkRegistrar {
    /// Creates a new registrar.
    ///
    /// `max_attempts` is raised to at least 1.
    pub fn new(
        store: Arc<dyn LinkStore>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            store,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Registers `target_url`, under `custom_code` if one is given.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL is not an absolute http(s) URL
    /// - [`AppError::InvalidCode`] if the custom code is malformed or reserved
    /// - [`AppError::CodeTaken`] if the custom code is already bound
    /// - [`AppError::GenerationExhausted`] if every generated candidate collided
    /// - [`AppError::Storage`] if the store failed; never retried here
    pub async fn register(
        &self,
        target_url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortLink, AppError> {
        let target_url =
            validate_target_url(target_url).map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        let link = match custom_code {
            Some(code) => self.register_custom(target_url, code).await?,
            None => self.register_generated(target_url).await?,
        };

        metrics::counter!("links_created_total").increment(1);
        info!(
            code = %link.code,
            is_custom = link.is_custom,
            "Short link registered"
        );

        Ok(link)
    }

    async fn register_custom(&self, target_url: &str, code: &str) -> Result<ShortLink, AppError> {
        validate_code(code)?;

        match self
            .store
            .insert_if_absent(NewShortLink::new(code, target_url, true))
            .await?
        {
            InsertOutcome::Created(link) => Ok(link),
            InsertOutcome::AlreadyExists => {
                debug!("Custom code {} already taken", code);
                Err(AppError::CodeTaken(code.to_string()))
            }
        }
    }

    async fn register_generated(&self, target_url: &str) -> Result<ShortLink, AppError> {
        for attempt in 1..=self.max_attempts {
            match self.claim_generated(target_url).await? {
                Claim::Created(link) => return Ok(link),
                Claim::Collision => {
                    metrics::counter!("code_collisions_total").increment(1);
                    debug!("Generated code collided (attempt {})", attempt);
                }
            }
        }

        warn!(
            "Code generation exhausted after {} attempts; consider a longer CODE_LENGTH",
            self.max_attempts
        );
        Err(AppError::GenerationExhausted)
    }

    async fn claim_generated(&self, target_url: &str) -> Result<Claim, AppError> {
        let code = self.generator.generate();

        Ok(
            match self
                .store
                .insert_if_absent(NewShortLink::new(code, target_url, false))
                .await?
            {
                InsertOutcome::Created(link) => Claim::Created(link),
                InsertOutcome::AlreadyExists => Claim::Collision,
            },
        )
    }
}
