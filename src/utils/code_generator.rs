//! Short code generation and validation utilities.
//!
//! Codes are drawn from the base-62 alphabet (`[A-Za-z0-9]`). Generation makes
//! no uniqueness promise on its own; uniqueness is decided by the store's atomic
//! insert.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Shortest code accepted anywhere in the system.
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest code accepted anywhere in the system.
pub const MAX_CODE_LENGTH: usize = 16;

/// Default length of generated codes (62^7 ≈ 3.5 * 10^12 codes).
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Codes that would shadow service routes.
const RESERVED_CODES: &[&str] = &["shorten", "stats", "health", "api"];

/// Source of candidate short codes.
///
/// Implementations must be safe to call from many requests at once.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates random base-62 codes from the thread-local CSPRNG.
///
/// Holds no shared mutable state, so concurrent callers never contend.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// The length is clamped to [`MIN_CODE_LENGTH`]..=[`MAX_CODE_LENGTH`] so
    /// generated codes always pass [`validate_code`] length rules.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Returns true if `code` has the shape of a short code (charset and length only).
pub fn is_well_formed(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validates a caller-supplied custom code.
///
/// # Rules
///
/// - Length: 4-16 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved route name (case-insensitive)
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if any rule is violated.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    let len = code.chars().count();
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&len) {
        return Err(AppError::InvalidCode(format!(
            "must be {}-{} characters, got {}",
            MIN_CODE_LENGTH, MAX_CODE_LENGTH, len
        )));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::InvalidCode(
            "only letters and digits are allowed".to_string(),
        ));
    }

    if RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
    {
        return Err(AppError::InvalidCode(format!("'{}' is reserved", code)));
    }

    Ok(())
}
