//! Rule matching against a store snapshot.
//!
//! Live traffic is answered by the bound [`RouteTable`](crate::routing::RouteTable);
//! this matcher exists so the store's state can be queried and tested
//! independently of the live route table.

use crate::store::Rule;

/// Find the rule that answers `(path, method)`.
///
/// Exact string equality on path, case-insensitive on method. First match
/// in snapshot order wins.
pub fn find_match<'a>(rules: &'a [Rule], path: &str, method: &str) -> Option<&'a Rule> {
    rules
        .iter()
        .find(|r| r.path == path && r.method.eq_ignore_ascii_case(method))
}
