//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MockServerConfig (validated, immutable)
//!     → shared with the server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal (or missing) configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Rule definitions are NOT config: they live in the rule store

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DataConfig, ListenerConfig, MockServerConfig, TimeoutConfig};
