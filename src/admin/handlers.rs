use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::http::server::AppState;
use crate::lifecycle;
use crate::store::{Rule, RuleDraft, RulePatch, StoreError};

/// Errors surfaced by the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("rule not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidRule(String),

    #[error("store failure: {0}")]
    Store(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::InvalidRule(msg) => ApiError::InvalidRule(msg),
            other => ApiError::Store(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRule(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let ApiError::Store(msg) = &self {
            tracing::error!(error = %msg, "Admin store operation failed");
        }
        (status, Json(json!({"message": self.to_string()}))).into_response()
    }
}

#[derive(Serialize)]
pub struct RuleList {
    pub rules: Vec<Rule>,
}

#[derive(Serialize)]
pub struct RuleEnvelope {
    pub message: &'static str,
    pub rule: Rule,
}

#[derive(Serialize)]
pub struct MessageOnly {
    pub message: &'static str,
}

pub async fn list_rules(State(state): State<AppState>) -> Json<RuleList> {
    Json(RuleList {
        rules: state.store.list_all(),
    })
}

pub async fn create_rule(
    State(state): State<AppState>,
    Json(draft): Json<RuleDraft>,
) -> Result<Json<RuleEnvelope>, ApiError> {
    let rule = state.store.create(draft)?;
    Ok(Json(RuleEnvelope {
        message: "rule created",
        rule,
    }))
}

pub async fn get_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Rule>, ApiError> {
    Ok(Json(state.store.get(&id)?))
}

pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RulePatch>,
) -> Result<Json<RuleEnvelope>, ApiError> {
    let rule = state.store.update(&id, patch)?;
    Ok(Json(RuleEnvelope {
        message: "rule updated",
        rule,
    }))
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageOnly>, ApiError> {
    if state.store.delete(&id)? {
        Ok(Json(MessageOnly {
            message: "rule deleted",
        }))
    } else {
        Err(ApiError::NotFound(id))
    }
}

/// Exit immediately so the supervisor relaunches with fresh routes. The
/// connection is dropped rather than answered; that is the contract.
pub async fn restart_service() {
    lifecycle::restart();
}
