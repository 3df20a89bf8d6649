//! Card id collation.
//!
//! A deterministic total order over card id strings, shared by the
//! catalogue listing and the deck code encoder so that two decks with
//! identical contents always serialize to identical codes.
//!
//! ## Ordering
//!
//! 1. Set prefix: `OP99` .. `OP01`, then `EB`, `PRB`, `ST`, `P`
//!    (newest set first within each family).
//! 2. Card number after the dash, ascending.
//! 3. Printing suffix `_p<n>`, base printing first.
//!
//! Ids that do not parse sort after every well-formed id and compare
//! equal to each other. `sort_ids` is stable, so they keep their
//! input order.

pub mod set_code;

use std::cmp::Ordering;

pub use set_code::{split_printing, strip_printing_suffix, SetFamily, SetRank, SortKey};

/// Compare two card ids.
///
/// ## Example
///
/// ```
/// use std::cmp::Ordering;
/// use tcg_deck::collate::compare;
///
/// assert_eq!(compare("OP02-001", "OP01-001"), Ordering::Less);
/// assert_eq!(compare("OP01-016", "ST01-002"), Ordering::Less);
/// assert_eq!(compare("OP01-016", "OP01-016_p1"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    SortKey::of(a).cmp(&SortKey::of(b))
}

/// Stable sort of ids in collation order.
pub fn sort_ids<T: AsRef<str>>(ids: &mut [T]) {
    sort_by_id(ids, |id| id.as_ref());
}

/// Stable sort of arbitrary items by an id they carry.
///
/// Keys are computed once per item.
pub fn sort_by_id<T, F>(items: &mut [T], id_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| SortKey::of(id_of(item)));
}
