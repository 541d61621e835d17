//! Rule storage subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     rules file (JSON array)
//!         → RuleStore::open (missing → empty, corrupt → warn + empty)
//!         → in-memory Vec<Rule>, insertion order preserved
//!
//! Mutation (create/update/delete):
//!     lock → mutate Vec → rewrite whole file → unlock
//!
//! Read (list/get/snapshot):
//!     lock → clone → unlock
//! ```
//!
//! # Design Decisions
//! - Single mutex around "mutate + persist": no interleaved partial writes
//! - Full-collection rewrite per mutation; rule counts are small and
//!   mutations are operator-driven, so write amplification is a non-issue
//! - Corrupt state never blocks startup; it resets to an empty rule set
//! - The store owns all rules; everyone else gets clones

pub mod records;
pub mod rule;

pub use records::{RuleStore, StoreError};
pub use rule::{Rule, RuleDraft, RulePatch};
