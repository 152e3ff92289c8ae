//! logiview dashboard GUI
//!
//! Desktop dashboard over fleet, shipment and compliance datasets, built on
//! egui. Every tab is one instance of the table engine from the `logiview`
//! library. The dashboard features:
//! - Searchable, sortable, paginated tables with row selection
//! - Status badges and per-row action menus
//! - Asynchronous snapshot loading (`.json` and brotli `.json.br`)
//! - Theme, tab and page-size preferences persisted across sessions

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! The application is built with a modular architecture:
//! - `app/` - Application state, coordinators and the command channel
//! - `state/` - Datasets, inspection, theme and layout state
//! - `views/` - Column, action and status declarations per tab
//! - `presentation/` - Colour and text styling
//! - `io/` - Background snapshot loading
//! - `ui/` - Panels, the table renderer and its pagination bar
//! - `utils/` - Formatting helpers

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod presentation;
mod state;
mod ui;
mod utils;
mod views;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, DEMO_SEED, LAYOUT_KEY};
use io::AsyncLoader;
use logiview::logging::init_logging;
use state::LayoutState;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Fleet operations dashboard.
#[derive(Parser, Debug)]
#[command(name = "logiview-gui", about = "Fleet operations dashboard", version)]
struct Args {
    /// Snapshot to open (`.json` or `.json.br`). Without one the demo fleet is shown.
    snapshot: Option<PathBuf>,

    /// Seed for the demo fleet.
    #[arg(long, default_value_t = DEMO_SEED)]
    seed: u64,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// What to show on the first frame.
enum InitialLoad {
    Snapshot(PathBuf),
    Demo(u64),
}

fn main() -> eframe::Result {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let initial = match args.snapshot {
        Some(path) => InitialLoad::Snapshot(path),
        None => InitialLoad::Demo(args.seed),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("logiview"),
        ..Default::default()
    };

    eframe::run_native(
        "logiview",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, initial)))),
    )
}

/// The dashboard application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles loading, saving and table commands
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles panel layout and rendering
struct DashboardApp {
    /// Centralized application state
    state: AppState,
    /// Background snapshot loader
    loader: AsyncLoader,
    /// Load to run on the first frame
    pending_load: Option<InitialLoad>,
}

impl DashboardApp {
    /// Creates the app with theme and layout restored from persistent storage.
    fn new(cc: &eframe::CreationContext, initial: InitialLoad) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout: LayoutState =
            SettingsCoordinator::load_setting_or(cc.storage, LAYOUT_KEY, LayoutState::new());

        Self {
            state: AppState::with_theme_and_layout(theme_name, layout),
            loader: AsyncLoader::new(),
            pending_load: Some(initial),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenSnapshotRequested(path) => {
                ApplicationCoordinator::open_snapshot(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::SaveSnapshotRequested(path) => {
                ApplicationCoordinator::save_snapshot(&mut self.state, path);
            }
            PanelInteraction::LoadDemoRequested => {
                ApplicationCoordinator::load_demo(&mut self.state, &self.loader, DEMO_SEED);
            }
            PanelInteraction::TabSelected(tab) => {
                ApplicationCoordinator::select_tab(&mut self.state, tab);
            }
            PanelInteraction::DeleteSelectedRequested(tab) => {
                ApplicationCoordinator::delete_selected(&mut self.state, tab);
            }
            PanelInteraction::CloseDetailsRequested => {
                self.state.inspection.clear();
            }
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout);
    }
}

impl eframe::App for DashboardApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    /// Main update loop:
    /// 1. Check for background load completion
    /// 2. Apply theme
    /// 3. Run the first-frame load
    /// 4. Render all panels
    /// 5. Handle panel interactions and table commands
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(initial) = self.pending_load.take() {
            match initial {
                InitialLoad::Snapshot(path) => {
                    ApplicationCoordinator::open_snapshot(&mut self.state, &mut self.loader, path, ctx);
                }
                InitialLoad::Demo(seed) => {
                    ApplicationCoordinator::load_demo(&mut self.state, &self.loader, seed);
                }
            }
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }

        // Table callbacks posted during rendering; apply them before the next frame
        if ApplicationCoordinator::process_commands(&mut self.state) > 0 {
            ctx.request_repaint();
        }

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            self.save_preferences(storage);
        }
    }
}
