//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route binding (at startup):
//!     RuleStore snapshot
//!         → binder.rs (capture status/body/delay per rule)
//!         → Freeze as immutable RouteTable
//!
//! Incoming mock request (method, path):
//!     → RouteTable lookup
//!     → Return: captured MockResponse or NoMatch
//!
//! Introspection (matcher.rs):
//!     linear scan over a rule snapshot, used by tests and tooling
//! ```
//!
//! # Design Decisions
//! - Routes bound once at startup, immutable at runtime; rule mutations
//!   only take effect after a process restart
//! - Exact path string equality, case-insensitive method; no patterns
//! - Deterministic: duplicate (method, path) pairs resolve to the first
//!   registered rule
//! - Delay clamped at serve time, never in storage

pub mod binder;
pub mod matcher;

pub use binder::{MockResponse, RouteTable, MAX_DELAY_SECS};
pub use matcher::find_match;
