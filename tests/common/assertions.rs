//! Assertion helpers for ufind harnesses.
//!
//! These wrap `pretty_assertions` so a failing comparison shows which records
//! were expected and which were actually returned.

use pretty_assertions::assert_eq;
use ufind::UserRecord;

/// Names of the matched records, in result order. Nameless records show as "".
pub fn names_of(results: &[&UserRecord]) -> Vec<String> {
    results
        .iter()
        .map(|u| u.name.clone().unwrap_or_default())
        .collect()
}

/// Assert the results are exactly the records with these names, in order.
///
/// ```rust
/// assert_names!(filter_by_name("ann", &users), ["Ann"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let results: Vec<&ufind::UserRecord> = $results;
        let expected: Vec<String> = vec![$($name.to_string()),*];
        pretty_assertions::assert_eq!($crate::common::names_of(&results), expected);
    }};
}

/// Assert `results` is a subsequence of `store` in store order: every result
/// is one of the loaded records and none is reordered or duplicated.
pub fn assert_ordered_subset(results: &[&UserRecord], store: &[UserRecord]) {
    let mut cursor = 0;
    for found in results {
        let offset = store[cursor..]
            .iter()
            .position(|u| std::ptr::eq(u, *found))
            .unwrap_or_else(|| panic!("result {found} is not in store order after index {cursor}"));
        cursor += offset + 1;
    }
}

/// Assert two result sets contain the same records in the same order.
pub fn assert_same_results(left: &[&UserRecord], right: &[&UserRecord]) {
    assert_eq!(names_of(left), names_of(right));
    assert!(
        left.iter().zip(right).all(|(l, r)| std::ptr::eq(*l, *r)),
        "result sets name the same users but point at different records"
    );
}
