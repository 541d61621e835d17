//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → admin routes / health → admin handlers
//!     → anything else → mock fallback handler
//!         → RouteTable lookup
//!         → optional delay → canned JSON response, or 404
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
