//! Asynchronous snapshot loading.
//!
//! Snapshot files are read on a background thread so the dashboard stays
//! responsive while large (or brotli-compressed) files are parsed.

use eframe::egui;
use logiview::{FleetSnapshot, MockFleet};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

use crate::io::LoadingState;

/// Result of a completed load.
pub enum LoadResult {
    Success {
        snapshot: FleetSnapshot,
        path: PathBuf,
    },
    Error(String),
    /// No load finished since the last check
    None,
}

/// Runs snapshot reads off the GUI thread.
pub struct AsyncLoader {
    /// Shared progress bookkeeping
    loading_state: Arc<Mutex<LoadingState>>,
    /// Receives the outcome of the running load
    loading_receiver: Option<Receiver<Result<FleetSnapshot, String>>>,
    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a load is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Time spent on the running load, if any.
    pub fn elapsed(&self) -> Option<Duration> {
        self.loading_state.lock().ok().and_then(|state| state.elapsed())
    }

    /// Starts reading a snapshot file in the background.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Snapshot file (`.json` or `.json.br`)
    /// * `ctx` - egui context, repainted when the load finishes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.pending_load_path = Some(path.clone());

        if let Ok(mut state) = self.loading_state.lock() {
            state.begin(path.clone());
        }
        debug!(path = %path.display(), "snapshot load started");

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = FleetSnapshot::read(&path).map_err(|e| format!("{:#}", e));
            if let Err(message) = &result {
                error!(path = %path.display(), "{}", message);
            }

            let _ = sender.send(result);

            if let Ok(mut state) = loading_state.lock() {
                state.finish();
            }

            ctx_handle.request_repaint();
        });
    }

    /// Generates the demo fleet synchronously.
    pub fn load_demo(&self, seed: u64) -> FleetSnapshot {
        MockFleet {
            seed,
            ..MockFleet::default()
        }
        .generate()
    }

    /// Returns the outcome of the background load once it is available.
    ///
    /// # Returns
    /// * `LoadResult::Success` - the snapshot was read
    /// * `LoadResult::Error` - reading failed
    /// * `LoadResult::None` - still loading, or nothing to load
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();
        match (result, path) {
            (Ok(snapshot), Some(path)) => LoadResult::Success { snapshot, path },
            (Ok(_), None) => LoadResult::Error("Load finished without a file path".to_string()),
            (Err(message), _) => LoadResult::Error(message),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
