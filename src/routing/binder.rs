//! Startup-time route binding.
//!
//! Turns a snapshot of stored rules into an immutable lookup table. Each
//! entry captures an independent copy of the rule's response data, so later
//! store mutations cannot affect an already-bound route until the next
//! restart.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;

use crate::store::Rule;

/// Upper bound on the artificial response delay, applied at serve time.
pub const MAX_DELAY_SECS: f64 = 30.0;

/// Response data captured from one rule at bind time.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
    pub delay: f64,
}

impl MockResponse {
    /// The delay to apply before responding, clamped to [`MAX_DELAY_SECS`].
    pub fn delay_duration(&self) -> Duration {
        Duration::from_secs_f64(self.delay.clamp(0.0, MAX_DELAY_SECS))
    }
}

/// Immutable (method, path) → response table, built once at startup.
pub struct RouteTable {
    routes: HashMap<(String, String), Arc<MockResponse>>,
}

impl RouteTable {
    /// Bind every rule in the snapshot. Insertion never overwrites, so the
    /// first rule registered for a (method, path) pair answers it; later
    /// duplicates are skipped with a warning.
    pub fn bind(rules: &[Rule]) -> Self {
        let mut routes: HashMap<(String, String), Arc<MockResponse>> = HashMap::new();

        for rule in rules {
            let key = (rule.method.to_ascii_uppercase(), rule.path.clone());
            if routes.contains_key(&key) {
                tracing::warn!(
                    id = %rule.id,
                    method = %key.0,
                    path = %key.1,
                    "Duplicate (method, path); keeping the first registered rule"
                );
                continue;
            }

            // Create/update validate the range, but a hand-edited rules
            // file can hold anything.
            let status = match StatusCode::from_u16(rule.status_code) {
                Ok(status) => status,
                Err(_) => {
                    tracing::warn!(
                        id = %rule.id,
                        status_code = rule.status_code,
                        "Unrepresentable status code; binding as 500"
                    );
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            routes.insert(
                key,
                Arc::new(MockResponse {
                    status,
                    body: rule.response_body.clone(),
                    delay: rule.delay,
                }),
            );
        }

        tracing::info!(routes = routes.len(), "Mock routes bound");
        Self { routes }
    }

    /// Look up the captured response for a request.
    pub fn lookup(&self, method: &str, path: &str) -> Option<Arc<MockResponse>> {
        self.routes
            .get(&(method.to_ascii_uppercase(), path.to_string()))
            .cloned()
    }

    /// Number of bound routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule(id: &str, path: &str, method: &str, body: serde_json::Value) -> Rule {
        Rule {
            id: id.to_string(),
            path: path.to_string(),
            method: method.to_string(),
            description: String::new(),
            response_body: body,
            status_code: 200,
            delay: 0.0,
        }
    }

    #[test]
    fn binds_one_route_per_rule() {
        let rules = vec![
            rule("a", "/a", "GET", json!({"a": 1})),
            rule("b", "/b", "POST", json!({"b": 2})),
        ];
        let table = RouteTable::bind(&rules);

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("GET", "/a").unwrap().body, json!({"a": 1}));
        assert_eq!(table.lookup("get", "/a").unwrap().body, json!({"a": 1}));
        assert!(table.lookup("GET", "/b").is_none());
    }

    #[test]
    fn first_registered_rule_wins_on_duplicates() {
        let rules = vec![
            rule("first", "/x", "GET", json!({"winner": "first"})),
            rule("second", "/x", "GET", json!({"winner": "second"})),
        ];
        let table = RouteTable::bind(&rules);

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.lookup("GET", "/x").unwrap().body,
            json!({"winner": "first"})
        );
    }

    #[test]
    fn bound_response_is_a_capture_not_a_reference() {
        let mut rules = vec![rule("a", "/a", "GET", json!({"v": 1}))];
        let table = RouteTable::bind(&rules);

        // Mutating the snapshot afterwards must not leak into the table.
        rules[0].response_body = json!({"v": 2});
        assert_eq!(table.lookup("GET", "/a").unwrap().body, json!({"v": 1}));
    }

    #[test]
    fn delay_is_clamped_at_serve_time() {
        let resp = MockResponse {
            status: StatusCode::OK,
            body: json!({}),
            delay: 120.0,
        };
        assert_eq!(resp.delay_duration(), Duration::from_secs(30));

        let resp = MockResponse { delay: 0.25, ..resp };
        assert_eq!(resp.delay_duration(), Duration::from_secs_f64(0.25));
    }

    #[test]
    fn out_of_range_status_from_a_hand_edited_file_binds_as_500() {
        let mut r = rule("a", "/a", "GET", json!({}));
        r.status_code = 99;
        let table = RouteTable::bind(&[r]);
        assert_eq!(
            table.lookup("GET", "/a").unwrap().status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn nonstandard_status_codes_survive_binding() {
        // The store validates 100..=599; anything in that range binds as-is,
        // registered IANA code or not.
        let mut r = rule("a", "/a", "GET", json!({}));
        r.status_code = 599;
        let table = RouteTable::bind(&[r]);
        assert_eq!(table.lookup("GET", "/a").unwrap().status.as_u16(), 599);
    }
}
