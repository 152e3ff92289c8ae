//! Status bar UI rendering
//!
//! Shows memory usage, where the data came from and the dataset sizes.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::state::{DataSource, Tab};
use crate::utils::{format_memory_mb, format_thousands, get_current_memory_mb};

/// Describes where the current datasets came from.
pub fn source_label(source: &DataSource) -> String {
    match source {
        DataSource::Empty => "No data loaded".to_string(),
        DataSource::Demo { seed } => format!("Demo fleet | Seed: {}", seed),
        DataSource::File(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Snapshot loader, for the progress readout
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        if let Some(elapsed) = loader.elapsed() {
            ui.spinner();
            ui.label(format!("Loading… {:.1}s", elapsed.as_secs_f32()));
            return;
        }

        ui.label(RichText::new(source_label(state.fleet.source())).strong());

        if state.fleet.is_loaded() {
            let counts = Tab::ALL
                .iter()
                .map(|tab| {
                    let engine = state.fleet.engine(*tab);
                    format!(
                        "{}: {} ({} selected)",
                        tab.noun(),
                        format_thousands(engine.data().len() as i64),
                        engine.state().selected_row_ids().len()
                    )
                })
                .collect::<Vec<_>>()
                .join(" | ");
            ui.label(RichText::new("|").strong());
            ui.label(counts);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_source_label() {
        assert_eq!(source_label(&DataSource::Empty), "No data loaded");
        assert_eq!(source_label(&DataSource::Demo { seed: 42 }), "Demo fleet | Seed: 42");
        assert_eq!(
            source_label(&DataSource::File(PathBuf::from("/tmp/fleet.json.br"))),
            "fleet.json.br"
        );
    }
}
