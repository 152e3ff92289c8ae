//! Vehicles tab.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use logiview::{CellAlign, ColumnDef, Record, Row, StatusConfig, TableOptions};

use super::{delete_action, inspect_action, status_action};
use crate::app::CommandSender;
use crate::state::Tab;
use crate::utils::format_thousands;

static STATUS_MAP: Lazy<HashMap<String, StatusConfig>> = Lazy::new(|| {
    HashMap::from([
        ("active".to_string(), StatusConfig::new("green", "Active")),
        ("maintenance".to_string(), StatusConfig::new("amber", "Maintenance")),
        ("idle".to_string(), StatusConfig::new("blue", "Idle")),
    ])
});

pub fn columns() -> Vec<ColumnDef<Record>> {
    vec![
        ColumnDef::accessor("id", "ID").style_class("mono").width(80.0),
        ColumnDef::accessor("plate", "Plate").style_class("strong").width(90.0),
        ColumnDef::accessor("model", "Model").width(130.0),
        ColumnDef::accessor("driver", "Driver").width(110.0),
        ColumnDef::accessor("depot", "Depot").icon("📍").width(100.0),
        ColumnDef::accessor("mileage", "Mileage (km)")
            .align(CellAlign::Right)
            .width(110.0)
            .cell(|ui, row: &Record| {
                let km = row.field("mileage").and_then(|v| v.as_number()).unwrap_or(0.0);
                ui.monospace(format_thousands(km as i64));
            }),
        ColumnDef::accessor("fuel_pct", "Fuel")
            .width(90.0)
            .cell(|ui, row: &Record| {
                let pct = row.field("fuel_pct").and_then(|v| v.as_number()).unwrap_or(0.0);
                ui.add(
                    egui::ProgressBar::new((pct / 100.0).clamp(0.0, 1.0) as f32)
                        .desired_width(80.0)
                        .text(format!("{:.0}%", pct)),
                );
            }),
        ColumnDef::accessor("last_service", "Last service").style_class("dim").width(100.0),
        ColumnDef::accessor("status", "Status").width(110.0),
    ]
}

pub fn options(commands: &CommandSender) -> TableOptions<Record> {
    TableOptions::new()
        .search("plate", "Search plates...")
        .status("status", STATUS_MAP.clone())
        .empty_message("No vehicles match the current search")
        .actions(vec![
            inspect_action(Tab::Vehicles, commands),
            status_action(Tab::Vehicles, commands, "Send to maintenance", "🔧", "maintenance"),
            status_action(Tab::Vehicles, commands, "Mark active", "✔", "active"),
            status_action(Tab::Vehicles, commands, "Retire", "⏏", "retired"),
            delete_action(Tab::Vehicles, commands),
        ])
}
