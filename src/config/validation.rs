//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MockServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::MockServerConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &MockServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("not a valid socket address: {}", config.listener.bind_address),
        });
    }

    if config.data.dir.as_os_str().is_empty() {
        errors.push(ValidationError {
            field: "data.dir",
            message: "data directory must not be empty".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "request timeout must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&MockServerConfig::default()).is_ok());
    }

    #[test]
    fn reports_every_error() {
        let mut config = MockServerConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "listener.bind_address");
    }
}
