//! Application-level coordination and workflow management.
//!
//! Handles snapshot loading and saving, tab switching, and the commands
//! posted by table callbacks.

use logiview::Row;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::app::{AppState, DashboardCommand};
use crate::io::{AsyncLoader, LoadResult};
use crate::state::{DataSource, Tab};

/// Seed of the built-in demo fleet.
pub const DEMO_SEED: u64 = 42;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a snapshot file in the background.
    ///
    /// Clears the current datasets right away so the loading indicator shows.
    pub fn open_snapshot(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.reset_fleet_state();
        loader.start_file_load(path, ctx);
    }

    /// Applies a finished background load, if any.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { snapshot, path } => {
                info!(path = %path.display(), rows = snapshot.total_rows(), "snapshot applied");
                state.fleet.load(snapshot, DataSource::File(path));
                state.error_message = None;
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading snapshot: {}", error_msg));
                state.fleet.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Loads the generated demo fleet.
    pub fn load_demo(state: &mut AppState, loader: &AsyncLoader, seed: u64) {
        state.reset_fleet_state();
        let snapshot = loader.load_demo(seed);
        info!(seed, rows = snapshot.total_rows(), "demo fleet generated");
        state.fleet.load(snapshot, DataSource::Demo { seed });
    }

    /// Writes the current datasets to `path`.
    pub fn save_snapshot(state: &mut AppState, path: PathBuf) {
        match state.fleet.snapshot().write(&path) {
            Ok(()) => {
                info!(path = %path.display(), "snapshot saved");
                state.error_message = None;
            }
            Err(err) => {
                error!(path = %path.display(), "{:#}", err);
                state.error_message = Some(format!("Error saving snapshot: {:#}", err));
            }
        }
    }

    pub fn select_tab(state: &mut AppState, tab: Tab) {
        state.layout.set_active_tab(tab);
    }

    /// Deletes every selected row of `tab`.
    pub fn delete_selected(state: &mut AppState, tab: Tab) {
        let ids: Vec<_> = state
            .fleet
            .engine(tab)
            .selected_rows()
            .into_iter()
            .map(|row| row.id())
            .collect();
        Self::handle_command(state, DashboardCommand::Delete { tab, ids });
    }

    /// Applies every command posted since the last frame.
    ///
    /// # Returns
    /// Number of commands handled
    pub fn process_commands(state: &mut AppState) -> usize {
        let commands = state.commands.drain();
        let count = commands.len();
        for command in commands {
            Self::handle_command(state, command);
        }
        count
    }

    /// Applies one command.
    pub fn handle_command(state: &mut AppState, command: DashboardCommand) {
        match command {
            DashboardCommand::Inspect { tab, id } => {
                state.inspection.inspect(tab, id);
            }
            DashboardCommand::SetStatus { tab, id, status } => {
                if state.fleet.set_status(tab, &id, &status) {
                    info!(id = %id, status = %status, "status updated");
                } else {
                    warn!(id = %id, "status update for unknown {}", tab.noun());
                }
            }
            DashboardCommand::Delete { tab, ids } => {
                let removed = state.fleet.delete(tab, &ids);
                state.inspection.forget(tab, &ids);
                info!(removed, "deleted {} record(s)", tab.noun());
            }
            DashboardCommand::PageSizeChanged { tab, size } => {
                state.layout.set_page_size(tab, size);
                state.fleet.engine_mut(tab).sync_page_size(size);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logiview::EngineEvent;

    fn demo_state() -> (AppState, AsyncLoader) {
        let mut state = AppState::new();
        let loader = AsyncLoader::new();
        ApplicationCoordinator::load_demo(&mut state, &loader, DEMO_SEED);
        (state, loader)
    }

    #[test]
    fn test_demo_load() {
        let (state, _loader) = demo_state();
        assert_eq!(state.fleet.source(), &DataSource::Demo { seed: 42 });
        assert_eq!(state.fleet.row_count(Tab::Vehicles), 48);
    }

    #[test]
    fn test_action_commands_round_trip_through_channel() {
        let (mut state, _loader) = demo_state();
        let engine = state.fleet.engine(Tab::Vehicles);
        let first = engine.data()[0].id();
        let retire = engine
            .options()
            .actions
            .iter()
            .position(|a| a.label() == "Retire")
            .unwrap();
        assert!(engine.invoke_action(retire, &first));
        engine.click_row(&first);

        assert_eq!(ApplicationCoordinator::process_commands(&mut state), 2);
        assert_eq!(
            state.fleet.find(Tab::Vehicles, &first).unwrap().field_string("status"),
            "retired"
        );
        assert!(state.inspection.is_inspected(Tab::Vehicles, &first));
    }

    #[test]
    fn test_page_size_change_is_remembered() {
        let (mut state, _loader) = demo_state();
        state.fleet.engine_mut(Tab::Shipments).dispatch(EngineEvent::SetPageSize(50));
        ApplicationCoordinator::process_commands(&mut state);

        assert_eq!(state.layout.page_size(Tab::Shipments), 50);
        assert_eq!(state.fleet.engine(Tab::Shipments).state().page_size(), 50);
    }

    #[test]
    fn test_page_size_change_keeps_position() {
        let (mut state, _loader) = demo_state();
        let engine = state.fleet.engine_mut(Tab::Shipments);
        engine.dispatch(EngineEvent::GoToPage(4));
        let first_visible = engine.derive().rows[0].id();
        engine.dispatch(EngineEvent::SetPageSize(50));
        ApplicationCoordinator::process_commands(&mut state);

        // rows 61-80 of 20-per-page sit on page 2 of 50-per-page
        let view = state.fleet.engine(Tab::Shipments).derive();
        assert_eq!(view.current_page, 2);
        assert!(view.rows.iter().any(|row| row.id() == first_visible));
    }

    #[test]
    fn test_delete_selected_clears_inspection() {
        let (mut state, _loader) = demo_state();
        let engine = state.fleet.engine_mut(Tab::Compliance);
        engine.dispatch(EngineEvent::ToggleRow("CP-0001".into()));
        engine.dispatch(EngineEvent::ToggleRow("CP-0002".into()));
        state.inspection.inspect(Tab::Compliance, "CP-0002".into());

        ApplicationCoordinator::delete_selected(&mut state, Tab::Compliance);

        assert_eq!(state.fleet.row_count(Tab::Compliance), 34);
        assert!(state.fleet.engine(Tab::Compliance).state().selected_row_ids().is_empty());
        assert_eq!(state.inspection.inspected(), None);
    }

    #[test]
    fn test_save_to_bad_path_sets_error() {
        let (mut state, _loader) = demo_state();
        ApplicationCoordinator::save_snapshot(&mut state, PathBuf::from("/no/such/dir/fleet.json"));
        assert!(state.error_message.unwrap().starts_with("Error saving snapshot"));
    }
}
