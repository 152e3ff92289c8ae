//! Centralized application state for the logiview dashboard.
//!
//! Composes focused state components, each keeping its own invariants:
//! datasets and tables, the inspected record, theme and layout.

use crate::app::CommandChannel;
use crate::state::{FleetState, InspectionState, LayoutState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Datasets and their table engines
    pub fleet: FleetState,

    /// Record shown in the details panel
    pub inspection: InspectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Active tab and page sizes
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Commands posted by table callbacks
    pub commands: CommandChannel,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_theme_and_layout("Dark".to_string(), LayoutState::new())
    }

    /// Creates a new AppState with theme and layout settings loaded from storage.
    pub fn with_theme_and_layout(theme_name: String, layout: LayoutState) -> Self {
        let commands = CommandChannel::new();
        let fleet = FleetState::new(&commands.sender(), layout.page_sizes());
        Self {
            fleet,
            inspection: InspectionState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout,
            error_message: None,
            commands,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Clears datasets and transient UI state before a new load.
    pub fn reset_fleet_state(&mut self) {
        self.fleet.clear();
        self.inspection.clear();
        self.error_message = None;
    }
}
