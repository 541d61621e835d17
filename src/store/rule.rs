//! Rule model and admin request shapes.

use serde::{Deserialize, Serialize};

/// A persisted specification of one mock endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    /// Short identifier, unique within the store, immutable after creation.
    pub id: String,

    /// Absolute HTTP path, matched by exact string equality.
    pub path: String,

    /// HTTP method, normalized to uppercase.
    #[serde(default = "default_method")]
    pub method: String,

    /// Optional free-text description.
    #[serde(default)]
    pub description: String,

    /// Canned response body, arbitrary JSON.
    #[serde(default = "default_body")]
    pub response_body: serde_json::Value,

    /// Canned response status code.
    #[serde(default = "default_status")]
    pub status_code: u16,

    /// Response delay in seconds. Stored unclamped; clamped to 30s at
    /// serve time only.
    #[serde(default)]
    pub delay: f64,
}

/// Fields accepted when creating a rule. The id is store-generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDraft {
    pub path: String,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_body")]
    pub response_body: serde_json::Value,

    #[serde(default = "default_status")]
    pub status_code: u16,

    #[serde(default)]
    pub delay: f64,
}

/// Partial update: absent fields keep their prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulePatch {
    pub path: Option<String>,
    pub method: Option<String>,
    pub description: Option<String>,
    pub response_body: Option<serde_json::Value>,
    pub status_code: Option<u16>,
    pub delay: Option<f64>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_status() -> u16 {
    200
}

fn default_body() -> serde_json::Value {
    serde_json::json!({})
}

/// Check field values that serde cannot: status range and delay sanity.
pub(crate) fn validate_fields(status_code: u16, delay: f64) -> Result<(), String> {
    if !(100..=599).contains(&status_code) {
        return Err(format!("invalid status code: {}", status_code));
    }
    if !delay.is_finite() || delay < 0.0 {
        return Err(format!("delay must be a non-negative number of seconds, got {}", delay));
    }
    Ok(())
}
