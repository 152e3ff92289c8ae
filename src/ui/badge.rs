//! Status badge widget.

use egui::{Response, RichText, Ui};
use logiview::{badge_colors, StatusBadge};

/// Paints a rounded status pill.
pub fn status_badge(ui: &mut Ui, badge: &StatusBadge) -> Response {
    let colors = badge_colors(badge.color, ui.visuals().dark_mode);
    egui::Frame::NONE
        .fill(colors.fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(&badge.label).small().strong().color(colors.text));
        })
        .response
        .on_hover_text(badge.color.name())
}
