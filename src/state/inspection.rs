//! Inspected-record state.
//!
//! The details panel shows one record at a time. It is identified by tab and
//! row id rather than held by reference, so it survives source replacement and
//! disappears on its own once the row is deleted.

use logiview::RowId;

use crate::state::Tab;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionState {
    inspected: Option<(Tab, RowId)>,
}

impl InspectionState {
    pub fn new() -> Self {
        Self { inspected: None }
    }

    pub fn clear(&mut self) {
        self.inspected = None;
    }

    // ===== Queries =====

    /// Returns the inspected record's tab and id, if any.
    pub fn inspected(&self) -> Option<(Tab, &str)> {
        self.inspected.as_ref().map(|(tab, id)| (*tab, id.as_str()))
    }

    pub fn is_inspected(&self, tab: Tab, id: &str) -> bool {
        self.inspected() == Some((tab, id))
    }

    // ===== Mutations =====

    pub fn inspect(&mut self, tab: Tab, id: RowId) {
        self.inspected = Some((tab, id));
    }

    /// Drops the inspection if it points at one of `ids` in `tab`.
    pub fn forget(&mut self, tab: Tab, ids: &[RowId]) {
        if let Some((inspected_tab, id)) = &self.inspected {
            if *inspected_tab == tab && ids.contains(id) {
                self.inspected = None;
            }
        }
    }
}
