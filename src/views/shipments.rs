//! Shipments tab.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use logiview::{CellAlign, ColumnDef, Record, Row, StatusConfig, TableOptions};

use super::{delete_action, inspect_action, status_action};
use crate::app::CommandSender;
use crate::state::Tab;
use crate::utils::format_weight_kg;

static STATUS_MAP: Lazy<HashMap<String, StatusConfig>> = Lazy::new(|| {
    HashMap::from([
        ("in_transit".to_string(), StatusConfig::new("blue", "In transit")),
        ("delivered".to_string(), StatusConfig::new("green", "Delivered")),
        ("pending".to_string(), StatusConfig::new("purple", "Pending")),
        ("delayed".to_string(), StatusConfig::new("amber", "Delayed")),
        ("cancelled".to_string(), StatusConfig::new("red", "Cancelled")),
    ])
});

fn priority_cell(ui: &mut egui::Ui, row: &Record) {
    let priority = row.field_string("priority");
    let color = match priority.as_str() {
        "urgent" => ui.visuals().error_fg_color,
        "high" => ui.visuals().warn_fg_color,
        "low" => ui.visuals().weak_text_color(),
        _ => ui.visuals().text_color(),
    };
    ui.colored_label(color, priority);
}

pub fn columns() -> Vec<ColumnDef<Record>> {
    vec![
        ColumnDef::accessor("id", "ID").style_class("mono").width(80.0),
        ColumnDef::accessor("reference", "Reference").style_class("mono").width(90.0),
        ColumnDef::display("route", "Route", |ui, row: &Record| {
            ui.label(format!(
                "{} → {}",
                row.field_string("origin"),
                row.field_string("destination")
            ));
        })
        .with_accessor("origin")
        .width(180.0),
        ColumnDef::accessor("carrier", "Carrier").width(120.0),
        ColumnDef::accessor("weight_kg", "Weight")
            .align(CellAlign::Right)
            .width(90.0)
            .cell(|ui, row: &Record| {
                let kg = row.field("weight_kg").and_then(|v| v.as_number()).unwrap_or(0.0);
                ui.monospace(format_weight_kg(kg));
            }),
        ColumnDef::accessor("eta", "ETA").style_class("dim").width(90.0),
        ColumnDef::accessor("priority", "Priority")
            .align(CellAlign::Center)
            .width(70.0)
            .cell(priority_cell),
        ColumnDef::accessor("status", "Status").width(110.0),
    ]
}

pub fn options(commands: &CommandSender) -> TableOptions<Record> {
    TableOptions::new()
        .search("destination", "Search destinations...")
        .status("status", STATUS_MAP.clone())
        .empty_message("No shipments to show")
        .actions(vec![
            inspect_action(Tab::Shipments, commands),
            status_action(Tab::Shipments, commands, "Mark delivered", "✔", "delivered"),
            status_action(Tab::Shipments, commands, "Flag delayed", "⚠", "delayed"),
            status_action(Tab::Shipments, commands, "Cancel", "✖", "cancelled").destructive(),
            delete_action(Tab::Shipments, commands),
        ])
}
