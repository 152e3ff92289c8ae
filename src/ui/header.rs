//! Header panel UI rendering
//!
//! Handles the top bar with snapshot controls and the theme selector.

use eframe::egui;
use std::path::PathBuf;

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a snapshot file to open
    OpenSnapshotRequested(PathBuf),
    /// User picked a destination for the current datasets
    SaveSnapshotRequested(PathBuf),
    /// User clicked "Demo Fleet"
    LoadDemoRequested,
}

fn snapshot_dialog() -> rfd::FileDialog {
    let dialog = rfd::FileDialog::new()
        .add_filter("Fleet Snapshots", &["json", "br"])
        .add_filter("Compressed Snapshots", &["br"]);
    match std::env::current_dir() {
        Ok(cwd) => dialog.set_directory(cwd),
        Err(_) => dialog,
    }
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Snapshot").clicked() {
            if let Some(path) = snapshot_dialog().pick_file() {
                interaction = Some(HeaderInteraction::OpenSnapshotRequested(path));
            }
        }

        let can_save = state.fleet.is_loaded();
        if ui.add_enabled(can_save, egui::Button::new("💾 Save Snapshot")).clicked() {
            if let Some(path) = snapshot_dialog().set_file_name("fleet.json").save_file() {
                interaction = Some(HeaderInteraction::SaveSnapshotRequested(path));
            }
        }

        if ui.button("🎲 Demo Fleet").clicked() {
            interaction = Some(HeaderInteraction::LoadDemoRequested);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    let manager = state.theme.theme_manager();
                    for theme_name in manager.list_themes() {
                        let response =
                            ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                        if let Some(theme) = manager.get_theme(theme_name) {
                            response.on_hover_text(theme.description.as_str());
                        }
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, err);
    }

    interaction
}
