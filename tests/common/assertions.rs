//! Domain-specific assertion helpers for cityhub harnesses.
//!
//! These wrap `pretty_assertions` so a failing comparison shows which record
//! names were expected and which the filter actually produced.

use cityhub::Record;

/// Names of `records`, in order. Missing names come back as `""`.
pub fn names(records: &[Record<'_>]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

/// Assert that a record slice holds exactly the given names, in order.
///
/// ```rust
/// assert_names!(schemes, ["A", "B"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($records:expr, $expected:expr) => {{
        let actual: Vec<String> = $crate::common::names(&$records);
        let expected: Vec<String> = $expected.iter().map(|s: &&str| s.to_string()).collect();
        pretty_assertions::assert_eq!(actual, expected, "record names differ");
    }};
}

/// Assert that no record in the slice has the given name.
#[macro_export]
macro_rules! assert_excludes {
    ($records:expr, $name:expr) => {{
        let actual: Vec<String> = $crate::common::names(&$records);
        let name: &str = $name;
        if actual.iter().any(|n| n == name) {
            panic!(
                "assert_excludes! failed: {:?} present in {:?}",
                name, actual
            );
        }
    }};
}
