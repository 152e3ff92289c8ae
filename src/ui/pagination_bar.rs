//! Pagination controls under a table.
//!
//! Renders the range label, the page-size selector, the first/previous/
//! next/last buttons and the windowed page numbers. Clicks are returned as
//! engine events; nothing is applied here.

use egui::{RichText, Ui};
use logiview::{DerivedView, EngineEvent, PageItem};

/// Page sizes offered by the selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Selector entries: the standard sizes plus `current` if it is not one of them.
pub fn page_size_choices(current: usize) -> Vec<usize> {
    let mut choices = PAGE_SIZE_OPTIONS.to_vec();
    if !choices.contains(&current) {
        choices.push(current);
        choices.sort_unstable();
    }
    choices
}

/// Renders the bar for `view`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `id_salt` - Distinguishes the page-size combo boxes of different tables
/// * `view` - The derived page
///
/// # Returns
/// Events to dispatch to the engine
pub fn render_pagination_bar<R>(ui: &mut Ui, id_salt: &str, view: &DerivedView<'_, R>) -> Vec<EngineEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        ui.label(RichText::new(&view.range_label).weak());
        ui.separator();

        ui.label("Rows per page:");
        let mut selected = view.page_size;
        egui::ComboBox::from_id_salt(("page_size", id_salt))
            .width(50.0)
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                for size in page_size_choices(view.page_size) {
                    ui.selectable_value(&mut selected, size, size.to_string());
                }
            });
        if selected != view.page_size {
            events.push(EngineEvent::SetPageSize(selected));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right-to-left: controls are added last to first
            if ui.add_enabled(view.nav.last, egui::Button::new("⏭")).on_hover_text("Last page").clicked() {
                events.push(EngineEvent::LastPage);
            }
            if ui.add_enabled(view.nav.next, egui::Button::new("▶")).on_hover_text("Next page").clicked() {
                events.push(EngineEvent::NextPage);
            }

            for item in view.page_items.iter().rev() {
                match *item {
                    PageItem::Page { number, current } => {
                        if ui.selectable_label(current, number.to_string()).clicked() && !current {
                            events.push(EngineEvent::GoToPage(number));
                        }
                    }
                    PageItem::Ellipsis => {
                        ui.label("…");
                    }
                }
            }

            if ui.add_enabled(view.nav.previous, egui::Button::new("◀")).on_hover_text("Previous page").clicked() {
                events.push(EngineEvent::PreviousPage);
            }
            if ui.add_enabled(view.nav.first, egui::Button::new("⏮")).on_hover_text("First page").clicked() {
                events.push(EngineEvent::FirstPage);
            }
        });
    });

    events
}
