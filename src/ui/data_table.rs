//! The table renderer.
//!
//! Draws one `TableEngine`: search box, sortable headers, selection
//! checkboxes, status badges, per-row action menus, filler rows, the empty
//! state and the pagination bar. Every interaction is collected while the
//! derived page is on screen and applied to the engine afterwards.

use egui::{Align, Checkbox, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use logiview::{ColumnDef, EngineEvent, Row, RowId, TableEngine, ThemeColors};

use crate::presentation::color_mapping::{destructive_color, styled_cell_text};
use crate::ui::badge::status_badge;
use crate::ui::pagination_bar::render_pagination_bar;

/// Height of every body row, filler rows included.
pub const ROW_HEIGHT: f32 = 26.0;
const HEADER_HEIGHT: f32 = 24.0;
const DEFAULT_COLUMN_WIDTH: f32 = 110.0;

/// An interaction gathered during drawing.
enum TableInput {
    Engine(EngineEvent),
    ToggleAll,
    Action { index: usize, row_id: RowId },
    RowClick(RowId),
}

fn table_column<R>(def: &ColumnDef<R>, last: bool) -> Column {
    let width = def.width_hint().unwrap_or(DEFAULT_COLUMN_WIDTH);
    if last {
        Column::remainder().at_least(width)
    } else {
        Column::initial(width).at_least(40.0).resizable(true).clip(true)
    }
}

/// Draws `engine` and applies the user's interactions to it.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `id_salt` - Unique per table, keeps column widths apart
/// * `engine` - The table to draw
/// * `colors` - Palette of the active theme
/// * `highlighted` - Row shown in the details panel, drawn as selected
pub fn show<R: Row>(
    ui: &mut Ui,
    id_salt: &str,
    engine: &mut TableEngine<R>,
    colors: &ThemeColors,
    highlighted: Option<&str>,
) {
    let mut inputs: Vec<TableInput> = Vec::new();

    {
        let engine_ref: &TableEngine<R> = engine;
        render_toolbar(ui, engine_ref, &mut inputs);
        ui.add_space(4.0);

        let view = engine_ref.derive();
        render_table(ui, id_salt, engine_ref, &view, colors, highlighted, &mut inputs);

        if view.is_empty() {
            let height = ROW_HEIGHT * view.page_size as f32;
            ui.allocate_ui_with_layout(
                egui::vec2(ui.available_width(), height),
                Layout::centered_and_justified(egui::Direction::TopDown),
                |ui| {
                    ui.label(RichText::new(&engine_ref.options().empty_message).color(colors.text_dim));
                },
            );
        }

        ui.add_space(4.0);
        inputs.extend(
            render_pagination_bar(ui, id_salt, &view)
                .into_iter()
                .map(TableInput::Engine),
        );
    }

    for input in inputs {
        match input {
            TableInput::Engine(event) => engine.dispatch(event),
            TableInput::ToggleAll => engine.toggle_all(),
            TableInput::Action { index, row_id } => {
                engine.invoke_action(index, &row_id);
            }
            TableInput::RowClick(row_id) => engine.click_row(&row_id),
        }
    }
}

fn render_toolbar<R: Row>(ui: &mut Ui, engine: &TableEngine<R>, inputs: &mut Vec<TableInput>) {
    let options = engine.options();
    let state = engine.state();

    ui.horizontal(|ui| {
        if options.search_key.is_some() {
            let mut term = state.search_term().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut term)
                    .hint_text(options.search_placeholder.as_str())
                    .desired_width(240.0),
            );
            if response.changed() {
                inputs.push(TableInput::Engine(EngineEvent::SetSearch(term)));
            }
            if !state.search_term().is_empty() && ui.small_button("✖").on_hover_text("Clear search").clicked() {
                inputs.push(TableInput::Engine(EngineEvent::SetSearch(String::new())));
            }
        }

        let selected = state.selected_row_ids().len();
        if selected > 0 {
            ui.separator();
            ui.label(format!("{} selected", selected));
            if ui.small_button("Clear").clicked() {
                inputs.push(TableInput::Engine(EngineEvent::ClearSelection));
            }
        }
    });
}

fn render_table<R: Row>(
    ui: &mut Ui,
    id_salt: &str,
    engine: &TableEngine<R>,
    view: &logiview::DerivedView<'_, R>,
    colors: &ThemeColors,
    highlighted: Option<&str>,
    inputs: &mut Vec<TableInput>,
) {
    let columns = engine.columns();
    let actions = &engine.options().actions;
    let state = engine.state();

    let mut builder = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .sense(egui::Sense::click())
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(24.0));
    for (i, def) in columns.iter().enumerate() {
        builder = builder.column(table_column(def, i + 1 == columns.len()));
    }
    if !actions.is_empty() {
        builder = builder.column(Column::exact(32.0));
    }

    let scope_empty = engine.selection_scope_ids().is_empty();

    builder
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                let mut checked = engine.header_checked();
                if ui
                    .add_enabled(!scope_empty, Checkbox::without_text(&mut checked))
                    .on_hover_text("Select all")
                    .changed()
                {
                    inputs.push(TableInput::ToggleAll);
                }
            });
            for def in columns {
                header.col(|ui| {
                    let sorted = state
                        .sort_column()
                        .filter(|id| *id == def.column_id())
                        .map(|_| state.sort_direction());
                    let label = match sorted {
                        Some(direction) => format!("{} {}", def.header_label(), direction.arrow()),
                        None => def.header_label(),
                    };
                    ui.with_layout(def.alignment().layout(), |ui| {
                        if def.enable_sorting() {
                            let button = egui::Button::new(RichText::new(label).strong()).frame(false);
                            if ui.add(button).on_hover_text("Sort").clicked() {
                                inputs.push(TableInput::Engine(EngineEvent::SortBy(def.column_id().to_string())));
                            }
                        } else {
                            ui.strong(label);
                        }
                    });
                });
            }
            if !actions.is_empty() {
                header.col(|_ui| {});
            }
        })
        .body(|mut body| {
            for row_data in &view.rows {
                let id = row_data.id();
                let is_checked = state.is_selected(&id);
                let mut consumed = false;

                body.row(ROW_HEIGHT, |mut row| {
                    row.set_selected(is_checked || highlighted == Some(id.as_str()));

                    row.col(|ui| {
                        let mut on = is_checked;
                        if ui.add(Checkbox::without_text(&mut on)).changed() {
                            inputs.push(TableInput::Engine(EngineEvent::ToggleRow(id.clone())));
                            consumed = true;
                        }
                    });

                    for def in columns {
                        row.col(|ui| {
                            ui.with_layout(def.alignment().layout(), |ui| {
                                render_cell(ui, engine, def, row_data, colors);
                            });
                        });
                    }

                    if !actions.is_empty() {
                        row.col(|ui| {
                            let menu = ui.menu_button("⋮", |ui| {
                                for (index, action) in actions.iter().enumerate() {
                                    let mut text = RichText::new(action.menu_label());
                                    if action.is_destructive() {
                                        text = text.color(destructive_color(colors));
                                    }
                                    if ui.button(text).clicked() {
                                        inputs.push(TableInput::Action { index, row_id: id.clone() });
                                        ui.close();
                                    }
                                }
                            });
                            if menu.response.clicked() {
                                consumed = true;
                            }
                        });
                    }

                    if row.response().clicked() && !consumed {
                        inputs.push(TableInput::RowClick(id.clone()));
                    }
                });
            }

            for _ in 0..view.filler_rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|_ui| {});
                    for _ in columns {
                        row.col(|_ui| {});
                    }
                    if !actions.is_empty() {
                        row.col(|_ui| {});
                    }
                });
            }
        });
}

/// Badge for the status column, custom renderer if set, else styled text.
/// A column with neither accessor nor renderer stays blank.
fn render_cell<R: Row>(ui: &mut Ui, engine: &TableEngine<R>, def: &ColumnDef<R>, row: &R, colors: &ThemeColors) {
    if engine.is_status_column(def) {
        if let Some(badge) = engine.status_badge(row) {
            status_badge(ui, &badge);
        }
    } else if let Some(renderer) = def.renderer() {
        renderer(ui, row);
    } else if def.accessor_key().is_some() {
        ui.label(styled_cell_text(def.text(row), def.class(), colors));
    }
}
