//! Admin API: rule CRUD, restart, and the management page.
//!
//! Mutations persist immediately but only reach the live mock surface after
//! the restart endpoint is hit and a supervisor relaunches the process.

pub mod handlers;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::server::AppState;
use self::handlers::*;

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(page::admin_page))
        .route("/admin/rules", get(list_rules).post(create_rule))
        .route(
            "/admin/rules/{id}",
            get(get_rule).put(update_rule).delete(delete_rule),
        )
        .route("/admin/restart", post(restart_service))
}
