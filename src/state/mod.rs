//! State management modules for the logiview dashboard.
//!
//! This module contains state-only logic (no drawing):
//! - Fleet state (datasets and their table engines)
//! - Inspection state (record shown in the details panel)
//! - Theme state (theme manager, current theme)
//! - Layout state (active tab, page sizes, split ratio)

mod fleet_state;
mod inspection;
mod theme_state;
mod layout_state;

pub use fleet_state::{DataSource, FleetState};
pub use inspection::InspectionState;
pub use theme_state::ThemeState;
pub use layout_state::{LayoutState, PageSizes, Tab};
