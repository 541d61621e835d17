//! The rule record store: in-memory state plus JSON-file persistence.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use uuid::Uuid;

use crate::store::rule::{validate_fields, Rule, RuleDraft, RulePatch};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No rule with the given id exists.
    #[error("rule not found: {0}")]
    NotFound(String),

    /// A field value failed validation.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// Reading or writing the rules file failed.
    #[error("store IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the rule collection failed.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Owner of all persisted rules.
///
/// The mutex serializes every "mutate in-memory + rewrite file" pair so
/// concurrent admin requests cannot interleave partial writes. It is never
/// held across an await point; mock handlers never touch it at all.
pub struct RuleStore {
    path: PathBuf,
    rules: Mutex<Vec<Rule>>,
}

impl RuleStore {
    /// Open the store backed by the given file, creating the parent
    /// directory on first use.
    ///
    /// A missing file yields an empty store. A malformed file also yields an
    /// empty store: corrupt state must never block startup.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let rules = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Rule>>(&content) {
                Ok(rules) => rules,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Rules file is malformed, starting with an empty rule set"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            rules = rules.len(),
            "Rule store loaded"
        );

        Ok(Self {
            path,
            rules: Mutex::new(rules),
        })
    }

    /// Snapshot of all rules in insertion order.
    pub fn list_all(&self) -> Vec<Rule> {
        self.rules.lock().unwrap().clone()
    }

    /// Fetch a single rule by id.
    pub fn get(&self, id: &str) -> Result<Rule, StoreError> {
        self.rules
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Create a rule from a draft. The store generates the id and persists
    /// immediately.
    pub fn create(&self, draft: RuleDraft) -> Result<Rule, StoreError> {
        validate_fields(draft.status_code, draft.delay).map_err(StoreError::InvalidRule)?;

        let rule = Rule {
            id: generate_id(),
            path: draft.path,
            method: draft.method.to_ascii_uppercase(),
            description: draft.description,
            response_body: draft.response_body,
            status_code: draft.status_code,
            delay: draft.delay,
        };

        let mut rules = self.rules.lock().unwrap();
        rules.push(rule.clone());
        self.persist(&rules)?;

        tracing::info!(id = %rule.id, method = %rule.method, path = %rule.path, "Rule created");
        Ok(rule)
    }

    /// Merge a partial update into an existing rule. Absent fields keep
    /// their prior values; the id is immutable. Persists immediately.
    pub fn update(&self, id: &str, patch: RulePatch) -> Result<Rule, StoreError> {
        let mut rules = self.rules.lock().unwrap();
        let rule = rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let status_code = patch.status_code.unwrap_or(rule.status_code);
        let delay = patch.delay.unwrap_or(rule.delay);
        validate_fields(status_code, delay).map_err(StoreError::InvalidRule)?;

        if let Some(path) = patch.path {
            rule.path = path;
        }
        if let Some(method) = patch.method {
            rule.method = method.to_ascii_uppercase();
        }
        if let Some(description) = patch.description {
            rule.description = description;
        }
        if let Some(body) = patch.response_body {
            rule.response_body = body;
        }
        rule.status_code = status_code;
        rule.delay = delay;

        let updated = rule.clone();
        self.persist(&rules)?;

        tracing::info!(id = %updated.id, "Rule updated");
        Ok(updated)
    }

    /// Remove a rule. Returns true (and persists) if a record was removed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut rules = self.rules.lock().unwrap();
        let before = rules.len();
        rules.retain(|r| r.id != id);

        if rules.len() == before {
            return Ok(false);
        }

        self.persist(&rules)?;
        tracing::info!(id = %id, "Rule deleted");
        Ok(true)
    }

    /// Rewrite the whole collection. Caller holds the mutation lock.
    fn persist(&self, rules: &[Rule]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(rules)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// 8 hex chars from a random UUID: short, collision-resistant within one
/// store's lifetime.
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
