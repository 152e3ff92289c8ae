//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the logiview dashboard:
//! - Header panel (snapshot controls, theme selector)
//! - Data table (the engine renderer) and its pagination bar
//! - Status badges
//! - Details panel (fields of the inspected record)
//! - Status bar (memory, data source, dataset sizes)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod data_table;
pub mod pagination_bar;
pub mod badge;
pub mod details_panel;
pub mod status_bar;
pub mod panel_manager;
