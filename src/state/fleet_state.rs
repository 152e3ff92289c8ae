//! Fleet dataset state.
//!
//! Owns one table engine per tab. Datasets are never edited in place: every
//! change builds a new row vector and hands the engine a new `Arc`, which is
//! how the engine notices the source changed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use logiview::{FleetSnapshot, Record, Row, RowId, TableEngine};

use crate::app::CommandSender;
use crate::state::{PageSizes, Tab};
use crate::views;

/// Where the current datasets came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Empty,
    Demo { seed: u64 },
    File(PathBuf),
}

/// State related to the loaded datasets.
///
/// Responsibilities:
/// - Holding the table engine of every tab
/// - Swapping datasets in and out
/// - Applying record edits as source replacements
pub struct FleetState {
    vehicles: TableEngine<Record>,
    shipments: TableEngine<Record>,
    compliance: TableEngine<Record>,
    source: DataSource,
}

impl FleetState {
    /// Creates empty tables wired to `commands`.
    pub fn new(commands: &CommandSender, page_sizes: PageSizes) -> Self {
        let engine = |tab: Tab| {
            views::build_engine(tab, Arc::new(Vec::new()), commands, page_sizes.get(tab))
        };
        Self {
            vehicles: engine(Tab::Vehicles),
            shipments: engine(Tab::Shipments),
            compliance: engine(Tab::Compliance),
            source: DataSource::Empty,
        }
    }

    // ===== Queries =====

    pub fn engine(&self, tab: Tab) -> &TableEngine<Record> {
        match tab {
            Tab::Vehicles => &self.vehicles,
            Tab::Shipments => &self.shipments,
            Tab::Compliance => &self.compliance,
        }
    }

    pub fn engine_mut(&mut self, tab: Tab) -> &mut TableEngine<Record> {
        match tab {
            Tab::Vehicles => &mut self.vehicles,
            Tab::Shipments => &mut self.shipments,
            Tab::Compliance => &mut self.compliance,
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn file_path(&self) -> Option<&Path> {
        match &self.source {
            DataSource::File(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.source != DataSource::Empty
    }

    pub fn row_count(&self, tab: Tab) -> usize {
        self.engine(tab).data().len()
    }

    pub fn total_rows(&self) -> usize {
        Tab::ALL.iter().map(|tab| self.row_count(*tab)).sum()
    }

    pub fn find(&self, tab: Tab, id: &str) -> Option<&Record> {
        self.engine(tab).find_row(id)
    }

    /// Copies the current datasets into a snapshot for saving.
    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            vehicles: self.vehicles.data().as_ref().clone(),
            shipments: self.shipments.data().as_ref().clone(),
            compliance: self.compliance.data().as_ref().clone(),
        }
    }

    // ===== Mutations =====

    /// Replaces every dataset with the snapshot's.
    pub fn load(&mut self, snapshot: FleetSnapshot, source: DataSource) {
        self.vehicles.set_data(Arc::new(snapshot.vehicles));
        self.shipments.set_data(Arc::new(snapshot.shipments));
        self.compliance.set_data(Arc::new(snapshot.compliance));
        self.source = source;
    }

    /// Empties every table.
    pub fn clear(&mut self) {
        self.load(FleetSnapshot::default(), DataSource::Empty);
    }

    /// Sets the status field of one record.
    ///
    /// # Returns
    /// `true` if the record exists
    pub fn set_status(&mut self, tab: Tab, id: &str, status: &str) -> bool {
        let engine = self.engine_mut(tab);
        if engine.find_row(id).is_none() {
            return false;
        }
        let rows: Vec<Record> = engine
            .data()
            .iter()
            .map(|row| {
                let mut row = row.clone();
                if row.id() == id {
                    row.set("status", status);
                }
                row
            })
            .collect();
        engine.set_data(Arc::new(rows));
        true
    }

    /// Removes the records with the given ids.
    ///
    /// # Returns
    /// Number of records removed
    pub fn delete(&mut self, tab: Tab, ids: &[RowId]) -> usize {
        let engine = self.engine_mut(tab);
        let before = engine.data().len();
        let rows: Vec<Record> = engine
            .data()
            .iter()
            .filter(|row| !ids.contains(&row.id()))
            .cloned()
            .collect();
        let removed = before - rows.len();
        if removed > 0 {
            engine.set_data(Arc::new(rows));
        }
        removed
    }
}
