//! Engine state and its transitions.
//!
//! `EngineState` is a plain value. Every user interaction is an `EngineEvent`,
//! and `EngineState::reduce` maps `(state, event)` to the next state. The only
//! thing a transition needs to know about the data is how many rows survive
//! the filter for a given search term, which the caller supplies as a closure.
//! That keeps every rule here testable without rows, columns or a UI.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::column::ColumnId;
use crate::row::RowId;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "⏶",
            SortDirection::Desc => "⏷",
        }
    }
}

/// Everything a user can do to a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// New search box contents
    SetSearch(String),
    /// Header click on a sortable column
    SortBy(ColumnId),
    /// Back to source order
    ClearSort,
    /// Jump to a 1-based page number (clamped)
    GoToPage(usize),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    /// Page size picked by the user; keeps the first visible row in view
    SetPageSize(usize),
    /// Page size pushed in by an external controller; repositions like
    /// `SetPageSize` but is never routed back to the controller
    SyncPageSize(usize),
    /// Per-row checkbox
    ToggleRow(RowId),
    /// Header checkbox over the given scope. With `clear_everything`, the
    /// "off" direction empties the whole set instead of just the scope.
    ToggleAll {
        scope: Vec<RowId>,
        clear_everything: bool,
    },
    ClearSelection,
    /// The source collection was swapped for a new one
    SourceReplaced {
        previous_len: usize,
        new_len: usize,
        live_ids: HashSet<RowId>,
    },
}

/// Search, sort, pagination and selection state of one table.
///
/// Invariants (held after every `reduce`):
/// - `page_size >= 1`
/// - `1 <= current_page <= total_pages(filtered_len(search_term), page_size)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    search_term: String,
    sort_column: Option<ColumnId>,
    sort_direction: SortDirection,
    current_page: usize,
    page_size: usize,
    selected_row_ids: HashSet<RowId>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` rows; never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

impl EngineState {
    /// Creates a fresh state on page 1 with nothing searched, sorted or selected.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Asc,
            current_page: 1,
            page_size: page_size.max(1),
            selected_row_ids: HashSet::new(),
        }
    }

    // ===== Queries =====

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected_row_ids(&self) -> &HashSet<RowId> {
        &self.selected_row_ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_row_ids.contains(id)
    }

    /// True when `scope` is non-empty and every id in it is selected.
    pub fn all_selected<'a>(&self, scope: impl IntoIterator<Item = &'a RowId>) -> bool {
        let mut any = false;
        for id in scope {
            any = true;
            if !self.selected_row_ids.contains(id) {
                return false;
            }
        }
        any
    }

    // ===== Transitions =====

    /// Switches to `size` rows per page, moving to the page that holds the
    /// row that was first on screen.
    fn resize_keeping_first_visible(&mut self, size: usize) {
        let size = size.max(1);
        if size == self.page_size {
            return;
        }
        let first_visible = (self.current_page - 1) * self.page_size;
        let page = first_visible / size + 1;
        debug!(
            old_size = self.page_size,
            new_size = size,
            first_visible,
            page,
            "page size changed"
        );
        self.page_size = size;
        self.current_page = page;
    }

    /// Computes the state that follows `event`.
    ///
    /// # Arguments
    /// * `event` - The interaction to apply
    /// * `filtered_len` - Number of rows passing the filter for a search term
    ///
    /// # Returns
    /// The next state, with the current page clamped into range
    pub fn reduce(&self, event: EngineEvent, filtered_len: impl Fn(&str) -> usize) -> EngineState {
        let mut next = self.clone();

        match event {
            EngineEvent::SetSearch(term) => {
                if term != next.search_term {
                    next.search_term = term;
                    next.current_page = 1;
                }
            }
            EngineEvent::SortBy(column) => {
                if next.sort_column.as_deref() == Some(column.as_str()) {
                    next.sort_direction = next.sort_direction.toggled();
                } else {
                    next.sort_column = Some(column);
                    next.sort_direction = SortDirection::Asc;
                }
            }
            EngineEvent::ClearSort => {
                next.sort_column = None;
                next.sort_direction = SortDirection::Asc;
            }
            EngineEvent::GoToPage(page) => next.current_page = page,
            EngineEvent::FirstPage => next.current_page = 1,
            EngineEvent::PreviousPage => next.current_page = next.current_page.saturating_sub(1),
            EngineEvent::NextPage => next.current_page += 1,
            EngineEvent::LastPage => {
                next.current_page = total_pages(filtered_len(&next.search_term), next.page_size);
            }
            EngineEvent::SetPageSize(size) | EngineEvent::SyncPageSize(size) => {
                next.resize_keeping_first_visible(size);
            }
            EngineEvent::ToggleRow(id) => {
                if !next.selected_row_ids.remove(&id) {
                    next.selected_row_ids.insert(id);
                }
            }
            EngineEvent::ToggleAll { scope, clear_everything } => {
                if next.all_selected(scope.iter()) {
                    if clear_everything {
                        next.selected_row_ids.clear();
                    } else {
                        for id in &scope {
                            next.selected_row_ids.remove(id);
                        }
                    }
                } else {
                    next.selected_row_ids.extend(scope);
                }
            }
            EngineEvent::ClearSelection => next.selected_row_ids.clear(),
            EngineEvent::SourceReplaced { previous_len, new_len, live_ids } => {
                if previous_len != new_len {
                    next.current_page = 1;
                }
                let before = next.selected_row_ids.len();
                next.selected_row_ids.retain(|id| live_ids.contains(id));
                let purged = before - next.selected_row_ids.len();
                if purged > 0 {
                    debug!(purged, "dropped selection ids missing from new source");
                }
            }
        }

        let pages = total_pages(filtered_len(&next.search_term), next.page_size);
        next.current_page = next.current_page.clamp(1, pages);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(n: usize) -> impl Fn(&str) -> usize {
        move |_| n
    }

    fn ids(range: std::ops::Range<usize>) -> Vec<RowId> {
        range.map(|i| format!("r{}", i)).collect()
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn test_zero_page_size_is_one() {
        let state = EngineState::new(0);
        assert_eq!(state.page_size(), 1);
        let state = state.reduce(EngineEvent::SetPageSize(0), fixed(10));
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn test_search_resets_page() {
        let state = EngineState::new(5).reduce(EngineEvent::GoToPage(4), fixed(50));
        assert_eq!(state.current_page(), 4);

        let state = state.reduce(EngineEvent::SetSearch("x".into()), |term| {
            if term.is_empty() { 50 } else { 3 }
        });
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.search_term(), "x");
    }

    #[test]
    fn test_sort_toggles_and_resets() {
        let state = EngineState::default();
        let state = state.reduce(EngineEvent::SortBy("eta".into()), fixed(0));
        assert_eq!(state.sort_column(), Some("eta"));
        assert_eq!(state.sort_direction(), SortDirection::Asc);

        let state = state.reduce(EngineEvent::SortBy("eta".into()), fixed(0));
        assert_eq!(state.sort_direction(), SortDirection::Desc);

        let state = state.reduce(EngineEvent::SortBy("eta".into()), fixed(0));
        assert_eq!(state.sort_direction(), SortDirection::Asc);

        let state = state
            .reduce(EngineEvent::SortBy("eta".into()), fixed(0))
            .reduce(EngineEvent::SortBy("origin".into()), fixed(0));
        assert_eq!(state.sort_column(), Some("origin"));
        assert_eq!(state.sort_direction(), SortDirection::Asc);

        let state = state.reduce(EngineEvent::ClearSort, fixed(0));
        assert_eq!(state.sort_column(), None);
    }

    #[test]
    fn test_page_size_change_keeps_first_visible_row() {
        let state = EngineState::new(5).reduce(EngineEvent::GoToPage(3), fixed(23));
        let state = state.reduce(EngineEvent::SetPageSize(10), fixed(23));
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_page_size_change_clamps() {
        // page 5 of 20-per-page over 100 rows -> first visible 80 -> page 2 of 50-per-page
        let state = EngineState::new(20).reduce(EngineEvent::GoToPage(5), fixed(100));
        let state = state.reduce(EngineEvent::SetPageSize(50), fixed(100));
        assert_eq!(state.current_page(), 2);

        let state = state.reduce(EngineEvent::SetPageSize(500), fixed(100));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_sync_page_size_keeps_first_visible_row() {
        // page 4 of 5-per-page over 30 rows -> first visible 15 -> page 1 of 20-per-page
        let state = EngineState::new(5).reduce(EngineEvent::GoToPage(4), fixed(30));
        let state = state.reduce(EngineEvent::SyncPageSize(20), fixed(30));
        assert_eq!(state.page_size(), 20);
        assert_eq!(state.current_page(), 1);

        let state = EngineState::new(5).reduce(EngineEvent::GoToPage(6), fixed(30));
        let state = state.reduce(EngineEvent::SyncPageSize(10), fixed(30));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let state = EngineState::new(5);
        let state = state.reduce(EngineEvent::PreviousPage, fixed(12));
        assert_eq!(state.current_page(), 1);

        let state = state.reduce(EngineEvent::LastPage, fixed(12));
        assert_eq!(state.current_page(), 3);

        let state = state.reduce(EngineEvent::NextPage, fixed(12));
        assert_eq!(state.current_page(), 3);

        let state = state.reduce(EngineEvent::GoToPage(0), fixed(12));
        assert_eq!(state.current_page(), 1);

        let state = state.reduce(EngineEvent::GoToPage(99), fixed(12));
        assert_eq!(state.current_page(), 3);

        let state = state.reduce(EngineEvent::FirstPage, fixed(12));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_toggle_row() {
        let state = EngineState::default().reduce(EngineEvent::ToggleRow("a".into()), fixed(1));
        assert!(state.is_selected("a"));
        let state = state.reduce(EngineEvent::ToggleRow("a".into()), fixed(1));
        assert!(!state.is_selected("a"));
    }

    #[test]
    fn test_toggle_all_round_trip() {
        let scope = ids(0..7);
        let on = EngineState::default().reduce(
            EngineEvent::ToggleAll { scope: scope.clone(), clear_everything: false },
            fixed(7),
        );
        assert_eq!(on.selected_row_ids().len(), 7);
        assert!(on.all_selected(scope.iter()));

        let off = on.reduce(EngineEvent::ToggleAll { scope, clear_everything: false }, fixed(7));
        assert!(off.selected_row_ids().is_empty());
    }

    #[test]
    fn test_toggle_all_scoped_keeps_outside_selection() {
        let state = EngineState::default()
            .reduce(EngineEvent::ToggleRow("outside".into()), fixed(3))
            .reduce(EngineEvent::ToggleAll { scope: ids(0..2), clear_everything: false }, fixed(3));
        assert_eq!(state.selected_row_ids().len(), 3);

        let scoped_off = state.reduce(EngineEvent::ToggleAll { scope: ids(0..2), clear_everything: false }, fixed(3));
        assert_eq!(scoped_off.selected_row_ids().len(), 1);
        assert!(scoped_off.is_selected("outside"));

        let cleared = state.reduce(EngineEvent::ToggleAll { scope: ids(0..2), clear_everything: true }, fixed(3));
        assert!(cleared.selected_row_ids().is_empty());
    }

    #[test]
    fn test_toggle_all_partial_selects_rest() {
        let state = EngineState::default()
            .reduce(EngineEvent::ToggleRow("r0".into()), fixed(3))
            .reduce(EngineEvent::ToggleAll { scope: ids(0..3), clear_everything: false }, fixed(3));
        assert_eq!(state.selected_row_ids().len(), 3);
    }

    #[test]
    fn test_empty_scope_is_never_all_selected() {
        let state = EngineState::default();
        assert!(!state.all_selected(std::iter::empty()));
    }

    #[test]
    fn test_source_replaced_purges_and_resets() {
        let state = EngineState::new(5)
            .reduce(EngineEvent::ToggleAll { scope: ids(0..4), clear_everything: false }, fixed(20))
            .reduce(EngineEvent::GoToPage(3), fixed(20));

        let live: HashSet<RowId> = ids(0..2).into_iter().collect();
        let next = state.reduce(
            EngineEvent::SourceReplaced { previous_len: 20, new_len: 19, live_ids: live },
            fixed(19),
        );
        assert_eq!(next.current_page(), 1);
        assert_eq!(next.selected_row_ids().len(), 2);
    }

    #[test]
    fn test_source_replaced_same_length_keeps_page() {
        let state = EngineState::new(5).reduce(EngineEvent::GoToPage(3), fixed(20));
        let live: HashSet<RowId> = ids(0..20).into_iter().collect();
        let next = state.reduce(
            EngineEvent::SourceReplaced { previous_len: 20, new_len: 20, live_ids: live },
            fixed(20),
        );
        assert_eq!(next.current_page(), 3);
    }
}
