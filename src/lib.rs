//! Configurable HTTP Mock Server
//!
//! Operators define request-matching rules (path + method) through the admin
//! API; the server answers matching requests with a canned status code, JSON
//! body, and optional delay.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │                 MOCK SERVICE                   │
//!                  │                                                │
//!  Admin Request   │  ┌─────────┐    ┌──────────────┐              │
//!  ────────────────┼─▶│  admin  │───▶│  rule store  │──▶ JSON file │
//!                  │  │handlers │    │  (mutex'd)   │              │
//!                  │  └─────────┘    └──────┬───────┘              │
//!                  │                        │ snapshot at startup  │
//!                  │                        ▼                      │
//!  Mock Request    │  ┌─────────┐    ┌──────────────┐              │
//!  ────────────────┼─▶│  http   │───▶│ route table  │──▶ canned    │
//!                  │  │ server  │    │  (immutable) │    response  │
//!                  │  └─────────┘    └──────────────┘              │
//!                  │                                               │
//!                  │  POST /admin/restart ──▶ process exit ──▶     │
//!                  │      supervisor relaunch ──▶ fresh bind       │
//!                  └────────────────────────────────────────────────┘
//! ```
//!
//! Rule mutations persist immediately but only reach the live route table
//! after a restart: route binding is a startup-time-only operation.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod store;

// Cross-cutting concerns
pub mod admin;
pub mod lifecycle;

pub use config::MockServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::RuleStore;
