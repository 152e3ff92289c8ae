//! Application-level modules for the logiview dashboard.
//!
//! This module contains the coordinators, the command channel and the
//! centralized state.

mod app_state;
mod application_coordinator;
mod commands;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::{ApplicationCoordinator, DEMO_SEED};
pub use commands::{CommandChannel, CommandSender, DashboardCommand};
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::{SettingsCoordinator, LAYOUT_KEY};
