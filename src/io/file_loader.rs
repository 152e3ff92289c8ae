//! Background load bookkeeping.

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Shared between the GUI thread and the loader thread.
///
/// Only the progress bookkeeping lives here; results come through a channel.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True while a snapshot is being read
    pub in_progress: bool,
    /// File being read
    pub path: Option<PathBuf>,
    started: Option<Instant>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a load of `path` as started now.
    pub fn begin(&mut self, path: PathBuf) {
        self.in_progress = true;
        self.path = Some(path);
        self.started = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        self.in_progress = false;
        self.started = None;
    }

    /// Time spent on the current load, if one is running.
    pub fn elapsed(&self) -> Option<Duration> {
        self.started.filter(|_| self.in_progress).map(|t| t.elapsed())
    }
}
