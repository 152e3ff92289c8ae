//! Compliance tab.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use logiview::{ColumnDef, Record, StatusConfig, TableOptions};

use super::{delete_action, inspect_action, status_action};
use crate::app::CommandSender;
use crate::state::Tab;

static STATUS_MAP: Lazy<HashMap<String, StatusConfig>> = Lazy::new(|| {
    HashMap::from([
        ("valid".to_string(), StatusConfig::new("green", "Valid")),
        ("expiring".to_string(), StatusConfig::new("amber", "Expiring soon")),
        ("expired".to_string(), StatusConfig::new("red", "Expired")),
        ("pending".to_string(), StatusConfig::new("purple", "Pending review")),
    ])
});

pub fn columns() -> Vec<ColumnDef<Record>> {
    vec![
        ColumnDef::accessor("id", "ID").style_class("mono").width(80.0),
        ColumnDef::accessor("vehicle_id", "Vehicle").style_class("mono").width(80.0),
        ColumnDef::accessor("check", "Check").style_class("strong").width(130.0),
        ColumnDef::accessor("inspector", "Inspector").width(110.0),
        ColumnDef::accessor("expires", "Expires").icon("📅").width(100.0),
        ColumnDef::accessor("status", "Status").width(120.0),
    ]
}

pub fn options(commands: &CommandSender) -> TableOptions<Record> {
    TableOptions::new()
        .search("vehicle_id", "Search by vehicle...")
        .status("status", STATUS_MAP.clone())
        .actions(vec![
            inspect_action(Tab::Compliance, commands),
            status_action(Tab::Compliance, commands, "Renew", "⟳", "valid"),
            status_action(Tab::Compliance, commands, "Archive", "🗄", "archived"),
            delete_action(Tab::Compliance, commands),
        ])
}
