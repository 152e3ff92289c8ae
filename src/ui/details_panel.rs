//! Details panel UI rendering
//!
//! Shows every field of the record picked with a row click or "View details".

use eframe::egui;
use egui::{RichText, ScrollArea};
use logiview::{Row, ThemeColors};

use crate::app::AppState;
use crate::ui::badge::status_badge;

/// Renders the details panel
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Colour palette for the current theme
///
/// # Returns
/// `true` if the user closed the panel
pub fn render_details_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) -> bool {
    let mut close = false;

    let Some((tab, id)) = state.inspection.inspected() else {
        ui.label(RichText::new("Click a row or choose \"View details\" to inspect a record").color(theme_colors.text_dim));
        return close;
    };
    let engine = state.fleet.engine(tab);
    let Some(record) = engine.find_row(id) else {
        ui.label(RichText::new(format!("{} {} no longer exists", tab.noun(), id)).color(theme_colors.text_dim));
        return close;
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Details for {} {}", tab.noun(), id)).strong());
        if let Some(badge) = engine.status_badge(record) {
            status_badge(ui, &badge);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✖").on_hover_text("Close").clicked() {
                close = true;
            }
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("details_grid")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("id").color(theme_colors.text_dim));
                    ui.monospace(record.id());
                    ui.end_row();

                    for (key, _) in record.fields() {
                        ui.label(RichText::new(key).color(theme_colors.text_dim));
                        ui.label(RichText::new(record.field_string(key)).color(theme_colors.blue));
                        ui.end_row();
                    }
                });
        });

    close
}
