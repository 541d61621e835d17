//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the mock server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MockServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Persistent storage settings.
    pub data: DataConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Persistent storage settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the rule file; created on first use.
    pub dir: PathBuf,
}

impl DataConfig {
    /// Full path to the persisted rule file.
    pub fn rules_file(&self) -> PathBuf {
        self.dir.join("mock_rules.json")
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds. Must exceed the maximum mock
    /// delay (30s) or delayed rules would never answer.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}
