//! The derivation pipeline: filter, then sort, then paginate.
//!
//! Every stage works on a vector of references into the source slice, so the
//! source collection is never reordered or copied.

use std::ops::Range;

use crate::column::ColumnDef;
use crate::engine::compare::compare_values;
use crate::engine::state::SortDirection;
use crate::row::Row;

/// The key and lowercased term to search with, or `None` when every row
/// passes (no search key, or an empty term).
fn search_needle<'k>(search_key: Option<&'k str>, term: &str) -> Option<(&'k str, String)> {
    match search_key {
        Some(key) if !term.is_empty() => Some((key, term.to_lowercase())),
        _ => None,
    }
}

/// True when the row's `key` field contains `needle`, which must already be
/// lowercase. A missing field is the empty string.
pub fn matches<R: Row>(row: &R, key: &str, needle: &str) -> bool {
    row.field_string(key).to_lowercase().contains(needle)
}

/// Keeps the rows whose `search_key` field contains `term`, ignoring case.
///
/// Without a search key, or with an empty term, every row passes.
pub fn filter_rows<'a, R: Row>(rows: &'a [R], search_key: Option<&str>, term: &str) -> Vec<&'a R> {
    match search_needle(search_key, term) {
        Some((key, needle)) => rows.iter().filter(|row| matches(*row, key, &needle)).collect(),
        None => rows.iter().collect(),
    }
}

/// Counts the rows `filter_rows` would keep without collecting them.
pub fn count_filtered<R: Row>(rows: &[R], search_key: Option<&str>, term: &str) -> usize {
    match search_needle(search_key, term) {
        Some((key, needle)) => rows.iter().filter(|row| matches(*row, key, &needle)).count(),
        None => rows.len(),
    }
}

/// Stable-sorts rows by a column's accessor value.
///
/// Values are read once per row up front rather than once per comparison.
pub fn sort_rows<R: Row>(rows: &mut Vec<&R>, column: &ColumnDef<R>, direction: SortDirection) {
    let mut keyed: Vec<_> = rows.drain(..).map(|row| (column.value(row), row)).collect();
    keyed.sort_by(|a, b| direction.apply(compare_values(a.0.as_ref(), b.0.as_ref())));
    rows.extend(keyed.into_iter().map(|(_, row)| row));
}

/// Index range of `page` (1-based) within `count` rows.
///
/// Out-of-range pages yield an empty range rather than panicking.
pub fn page_range(count: usize, page: usize, page_size: usize) -> Range<usize> {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(count);
    let end = start.saturating_add(size).min(count);
    start..end
}
