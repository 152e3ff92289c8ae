//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar, details panel and the tabbed tables,
//! and funnels their interactions into one `PanelInteraction`.

use std::path::PathBuf;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::state::Tab;
use crate::ui::{data_table, details_panel, header, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a snapshot file
    OpenSnapshotRequested(PathBuf),
    /// User requested to write the datasets to a file
    SaveSnapshotRequested(PathBuf),
    /// User requested the generated demo fleet
    LoadDemoRequested,
    /// User switched tabs
    TabSelected(Tab),
    /// User asked to delete every selected row of a tab
    DeleteSelectedRequested(Tab),
    /// User closed the details panel
    CloseDetailsRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors =
            color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name()).clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenSnapshotRequested(path) => {
                        PanelInteraction::OpenSnapshotRequested(path)
                    }
                    header::HeaderInteraction::SaveSnapshotRequested(path) => {
                        PanelInteraction::SaveSnapshotRequested(path)
                    }
                    header::HeaderInteraction::LoadDemoRequested => PanelInteraction::LoadDemoRequested,
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        let window_height = ctx.content_rect().height();
        let details = egui::TopBottomPanel::bottom("details_panel")
            .default_height(window_height * (1.0 - state.layout.split_ratio()))
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    if details_panel::render_details_panel(ui, state, &theme_colors) {
                        interaction = Some(PanelInteraction::CloseDetailsRequested);
                    }
                });
            });
        state
            .layout
            .record_details_height(details.response.rect.height(), window_height);

        let central_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(6))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            let active = state.layout.active_tab();

            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    let caption = format!("{} ({})", tab.title(), state.fleet.row_count(tab));
                    if ui.selectable_label(tab == active, caption).clicked() && tab != active {
                        interaction = Some(PanelInteraction::TabSelected(tab));
                    }
                }

                let selected = state.fleet.engine(active).state().selected_row_ids().len();
                if selected > 0 {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = egui::RichText::new(format!("🗑 Delete selected ({})", selected))
                            .color(color_mapping::destructive_color(&theme_colors));
                        if ui.button(text).clicked() {
                            interaction = Some(PanelInteraction::DeleteSelectedRequested(active));
                        }
                    });
                }
            });
            ui.separator();

            if loader.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            let highlighted = state
                .inspection
                .inspected()
                .filter(|(tab, _)| *tab == active)
                .map(|(_, id)| id.to_string());

            egui::ScrollArea::both()
                .id_salt(("table_scroll", active))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    data_table::show(
                        ui,
                        active.title(),
                        state.fleet.engine_mut(active),
                        &theme_colors,
                        highlighted.as_deref(),
                    );
                });
        });

        interaction
    }
}
