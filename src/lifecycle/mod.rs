//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Open rule store → Bind route table → Start listener
//!
//! Restart (restart.rs):
//!     POST /admin/restart → immediate process exit
//!     → external supervisor relaunches the binary
//!     → fresh bind picks up all persisted rule changes
//!
//! Shutdown (shutdown.rs):
//!     Ctrl-C or coordinator trigger → stop accepting → exit
//! ```
//!
//! # Design Decisions
//! - Restart is abrupt by contract: no drain, no in-flight completion
//!   guarantee; it is the mechanism that applies rule changes
//! - Graceful shutdown exists only for operator Ctrl-C and for tests

pub mod restart;
pub mod shutdown;

pub use restart::restart;
pub use shutdown::Shutdown;
