//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (drain timeout > 0 when set)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Log level left blank; the subscriber needs a directive.
    #[error("observability.log_level must not be empty")]
    EmptyLogLevel,

    /// A zero drain timeout would abort every drain immediately.
    #[error("shutdown.drain_timeout_secs must be greater than zero when set")]
    ZeroDrainTimeout,
}

/// Validate semantic constraints, collecting every failure.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.observability.log_level.trim().is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    }

    if config.shutdown.drain_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroDrainTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
