//! Tabular data view engine.
//!
//! `TableEngine` is the composition root for one table: it owns the source
//! collection, the column and action declarations, the options, and the
//! `EngineState`. Interactions go through `dispatch`; `derive` recomputes the
//! visible page from scratch every time it is called.
//!
//! Submodules:
//! - `state` - engine state and pure transitions
//! - `pipeline` - filter, sort and paginate stages
//! - `compare` - value ordering for the sort stage
//! - `pagination` - page-button windowing and navigation enablement

pub mod compare;
pub mod pagination;
pub mod pipeline;
pub mod state;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::action::ActionItem;
use crate::column::ColumnDef;
use crate::row::{Row, RowId};
use crate::status::{resolve_status, StatusBadge, StatusConfig};

pub use pagination::{page_window, range_label, NavControls, PageItem};
pub use pipeline::{count_filtered, filter_rows, page_range, sort_rows};
pub use state::{total_pages, EngineEvent, EngineState, SortDirection, DEFAULT_PAGE_SIZE};

/// Callback receiving a row (row clicks).
pub type RowHandler<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Callback receiving a requested page size (external page-size control).
pub type PageSizeHandler = Arc<dyn Fn(usize) + Send + Sync>;

/// Which rows the header "select all" checkbox covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionScope {
    /// Every row passing the current search, on all pages
    #[default]
    Filtered,
    /// The whole unfiltered source collection; toggling off clears everything
    Source,
}

/// Caller-supplied table configuration.
pub struct TableOptions<R> {
    pub actions: Vec<ActionItem<R>>,
    pub search_key: Option<String>,
    pub search_placeholder: String,
    pub page_size: usize,
    pub on_page_size_change: Option<PageSizeHandler>,
    pub status_key: Option<String>,
    pub status_map: HashMap<String, StatusConfig>,
    pub empty_message: String,
    pub on_row_click: Option<RowHandler<R>>,
    pub selection_scope: SelectionScope,
}

impl<R> Default for TableOptions<R> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            search_key: None,
            search_placeholder: "Search...".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            on_page_size_change: None,
            status_key: None,
            status_map: HashMap::new(),
            empty_message: "No results found".to_string(),
            on_row_click: None,
            selection_scope: SelectionScope::Filtered,
        }
    }
}

impl<R> TableOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(mut self, actions: Vec<ActionItem<R>>) -> Self {
        self.actions = actions;
        self
    }

    pub fn search(mut self, key: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.search_key = Some(key.into());
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Hands page-size changes to the caller instead of applying them.
    pub fn on_page_size_change(mut self, handler: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_page_size_change = Some(Arc::new(handler));
        self
    }

    pub fn status(mut self, key: impl Into<String>, map: HashMap<String, StatusConfig>) -> Self {
        self.status_key = Some(key.into());
        self.status_map = map;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn on_row_click(mut self, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Arc::new(handler));
        self
    }

    pub fn selection_scope(mut self, scope: SelectionScope) -> Self {
        self.selection_scope = scope;
        self
    }
}

/// The visible page, derived from source + state.
pub struct DerivedView<'a, R> {
    /// Rows on the current page, in display order
    pub rows: Vec<&'a R>,
    /// Blank rows appended so every page has `page_size` lines
    pub filler_rows: usize,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub page_items: Vec<PageItem>,
    pub nav: NavControls,
    pub range_label: String,
}

impl<R> DerivedView<'_, R> {
    /// True when the empty-state message should replace the rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One table: source rows, declarations, options and state.
pub struct TableEngine<R> {
    data: Arc<Vec<R>>,
    columns: Vec<ColumnDef<R>>,
    options: TableOptions<R>,
    state: EngineState,
}

impl<R> fmt::Debug for TableEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableEngine")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: Row> TableEngine<R> {
    /// Creates an engine with fresh state using the options' page size.
    pub fn new(data: Arc<Vec<R>>, columns: Vec<ColumnDef<R>>, options: TableOptions<R>) -> Self {
        let state = EngineState::new(options.page_size);
        Self {
            data,
            columns,
            options,
            state,
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions<R> {
        &self.options
    }

    pub fn data(&self) -> &Arc<Vec<R>> {
        &self.data
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|c| c.column_id() == id)
    }

    pub fn find_row(&self, id: &str) -> Option<&R> {
        self.data.iter().find(|row| row.id() == id)
    }

    /// Rows currently selected, in source order.
    pub fn selected_rows(&self) -> Vec<&R> {
        let selected = self.state.selected_row_ids();
        self.data.iter().filter(|row| selected.contains(&row.id())).collect()
    }

    /// Ids covered by the header checkbox under the configured scope.
    pub fn selection_scope_ids(&self) -> Vec<RowId> {
        match self.options.selection_scope {
            SelectionScope::Filtered => self.filtered().into_iter().map(|row| row.id()).collect(),
            SelectionScope::Source => self.data.iter().map(|row| row.id()).collect(),
        }
    }

    /// Whether the header checkbox reads as checked.
    pub fn header_checked(&self) -> bool {
        self.state.all_selected(self.selection_scope_ids().iter())
    }

    /// Resolves the status badge for a row, if the table has a status field.
    pub fn status_badge(&self, row: &R) -> Option<StatusBadge> {
        let key = self.options.status_key.as_deref()?;
        let raw = row.field_string(key);
        Some(resolve_status(&raw, &self.options.status_map))
    }

    /// True when a column should render as a status badge.
    pub fn is_status_column(&self, column: &ColumnDef<R>) -> bool {
        column.renderer().is_none()
            && column.accessor_key().is_some()
            && column.accessor_key() == self.options.status_key.as_deref()
    }

    // ===== Derivation =====

    fn filtered(&self) -> Vec<&R> {
        filter_rows(&self.data, self.options.search_key.as_deref(), self.state.search_term())
    }

    /// Runs filter, sort and paginate against the current state.
    pub fn derive(&self) -> DerivedView<'_, R> {
        let mut rows = self.filtered();

        if let Some(column) = self.state.sort_column().and_then(|id| self.column(id)) {
            sort_rows(&mut rows, column, self.state.sort_direction());
        }

        let filtered_count = rows.len();
        let page_size = self.state.page_size();
        let pages = total_pages(filtered_count, page_size);
        let current_page = self.state.current_page().clamp(1, pages);

        let range = page_range(filtered_count, current_page, page_size);
        let page_rows: Vec<&R> = rows[range].to_vec();
        let filler_rows = if page_rows.is_empty() {
            0
        } else {
            page_size - page_rows.len()
        };

        DerivedView {
            rows: page_rows,
            filler_rows,
            filtered_count,
            total_pages: pages,
            current_page,
            page_size,
            page_items: page_window(current_page, pages),
            nav: NavControls::for_page(current_page, pages),
            range_label: range_label(filtered_count, current_page, page_size),
        }
    }

    // ===== Transitions =====

    fn reduce(&mut self, event: EngineEvent) {
        let data = &self.data;
        let key = self.options.search_key.as_deref();
        self.state = self.state.reduce(event, |term| count_filtered(data, key, term));
    }

    /// Applies a user interaction.
    ///
    /// Sort requests on non-sortable columns are ignored. With an external
    /// page-size handler, page-size requests go to the handler and the state
    /// is left untouched until `sync_page_size` is called.
    pub fn dispatch(&mut self, event: EngineEvent) {
        match &event {
            EngineEvent::SortBy(id) => {
                if !self.column(id).is_some_and(|c| c.enable_sorting()) {
                    return;
                }
            }
            EngineEvent::SetPageSize(size) => {
                if let Some(handler) = &self.options.on_page_size_change {
                    handler((*size).max(1));
                    return;
                }
            }
            _ => {}
        }
        self.reduce(event);
    }

    /// Header checkbox click.
    pub fn toggle_all(&mut self) {
        let scope = self.selection_scope_ids();
        let clear_everything = self.options.selection_scope == SelectionScope::Source;
        self.reduce(EngineEvent::ToggleAll { scope, clear_everything });
    }

    /// Accepts a page size chosen by an external controller, keeping the
    /// first visible row on screen.
    pub fn sync_page_size(&mut self, size: usize) {
        self.reduce(EngineEvent::SyncPageSize(size));
    }

    /// Swaps the source collection.
    ///
    /// Passing the same `Arc` is a no-op. Otherwise selection is intersected
    /// with the new ids, and a length change sends the table back to page 1.
    pub fn set_data(&mut self, data: Arc<Vec<R>>) {
        if Arc::ptr_eq(&self.data, &data) {
            return;
        }
        let previous_len = self.data.len();
        let new_len = data.len();
        let live_ids: HashSet<RowId> = data.iter().map(|row| row.id()).collect();
        debug!(previous_len, new_len, "table source replaced");

        self.data = data;
        self.reduce(EngineEvent::SourceReplaced {
            previous_len,
            new_len,
            live_ids,
        });
    }

    // ===== Callbacks =====

    /// Runs action `index` against the row with `row_id`.
    ///
    /// # Returns
    /// `true` if both the action and the row exist
    pub fn invoke_action(&self, index: usize, row_id: &str) -> bool {
        match (self.options.actions.get(index), self.find_row(row_id)) {
            (Some(action), Some(row)) => {
                action.invoke(row);
                true
            }
            _ => false,
        }
    }

    /// Runs the row-click handler, if any, for the row with `row_id`.
    pub fn click_row(&self, row_id: &str) {
        if let (Some(handler), Some(row)) = (&self.options.on_row_click, self.find_row(row_id)) {
            handler(row);
        }
    }
}
