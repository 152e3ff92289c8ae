//! Table declarations for the dashboard tabs.
//!
//! Each view lists its columns, row actions and status vocabulary, and wires
//! the callbacks to the command channel. The engine itself knows nothing
//! about vehicles or shipments.

pub mod compliance;
pub mod shipments;
pub mod vehicles;

use std::sync::Arc;

use logiview::{ActionItem, Record, Row, TableEngine, TableOptions};

use crate::app::{CommandSender, DashboardCommand};
use crate::state::Tab;

/// Builds the engine behind `tab`.
pub fn build_engine(
    tab: Tab,
    data: Arc<Vec<Record>>,
    commands: &CommandSender,
    page_size: usize,
) -> TableEngine<Record> {
    let (columns, options) = match tab {
        Tab::Vehicles => (vehicles::columns(), vehicles::options(commands)),
        Tab::Shipments => (shipments::columns(), shipments::options(commands)),
        Tab::Compliance => (compliance::columns(), compliance::options(commands)),
    };
    let options = with_common_callbacks(tab, options, commands).page_size(page_size);
    TableEngine::new(data, columns, options)
}

/// Row click opens the details panel; page-size changes go through the app so
/// they can be remembered per tab.
fn with_common_callbacks(
    tab: Tab,
    options: TableOptions<Record>,
    commands: &CommandSender,
) -> TableOptions<Record> {
    let click = commands.clone();
    let resize = commands.clone();
    options
        .on_row_click(move |row: &Record| {
            let _ = click.send(DashboardCommand::Inspect { tab, id: row.id() });
        })
        .on_page_size_change(move |size| {
            let _ = resize.send(DashboardCommand::PageSizeChanged { tab, size });
        })
}

/// "View details" action.
fn inspect_action(tab: Tab, commands: &CommandSender) -> ActionItem<Record> {
    let sender = commands.clone();
    ActionItem::new("View details", move |row: &Record| {
        let _ = sender.send(DashboardCommand::Inspect { tab, id: row.id() });
    })
    .icon("🔍")
}

/// Action that sets the row's status to `status`.
fn status_action(
    tab: Tab,
    commands: &CommandSender,
    label: &str,
    icon: &str,
    status: &'static str,
) -> ActionItem<Record> {
    let sender = commands.clone();
    ActionItem::new(label, move |row: &Record| {
        let _ = sender.send(DashboardCommand::SetStatus {
            tab,
            id: row.id(),
            status: status.to_string(),
        });
    })
    .icon(icon)
}

/// Destructive "Delete" action.
fn delete_action(tab: Tab, commands: &CommandSender) -> ActionItem<Record> {
    let sender = commands.clone();
    ActionItem::new("Delete", move |row: &Record| {
        let _ = sender.send(DashboardCommand::Delete { tab, ids: vec![row.id()] });
    })
    .icon("🗑")
    .destructive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CommandChannel;
    use logiview::EngineEvent;

    fn rows() -> Arc<Vec<Record>> {
        Arc::new(vec![
            Record::new("VH-001").with("plate", "AB-101").with("status", "active"),
            Record::new("VH-002").with("plate", "CD-202").with("status", "idle"),
        ])
    }

    #[test]
    fn test_every_tab_builds() {
        let channel = CommandChannel::new();
        for tab in Tab::ALL {
            let engine = build_engine(tab, rows(), &channel.sender(), 7);
            assert_eq!(engine.state().page_size(), 7);
            assert!(!engine.columns().is_empty());
            assert!(engine.options().search_key.is_some());
        }
    }

    #[test]
    fn test_callbacks_post_commands() {
        let channel = CommandChannel::new();
        let mut engine = build_engine(Tab::Vehicles, rows(), &channel.sender(), 10);

        engine.click_row("VH-002");
        engine.dispatch(EngineEvent::SetPageSize(50));
        let delete_index = engine
            .options()
            .actions
            .iter()
            .position(|a| a.is_destructive())
            .unwrap();
        assert!(engine.invoke_action(delete_index, "VH-001"));

        assert_eq!(
            channel.drain(),
            vec![
                DashboardCommand::Inspect { tab: Tab::Vehicles, id: "VH-002".into() },
                DashboardCommand::PageSizeChanged { tab: Tab::Vehicles, size: 50 },
                DashboardCommand::Delete { tab: Tab::Vehicles, ids: vec!["VH-001".into()] },
            ]
        );
        // page size is only applied once the app syncs it back
        assert_eq!(engine.state().page_size(), 10);
    }

    #[test]
    fn test_route_column_sorts_by_origin() {
        let channel = CommandChannel::new();
        let data = Arc::new(vec![
            Record::new("SH-1").with("origin", "Milan").with("destination", "Lyon"),
            Record::new("SH-2").with("origin", "Antwerp").with("destination", "Madrid"),
        ]);
        let mut engine = build_engine(Tab::Shipments, data, &channel.sender(), 10);

        engine.dispatch(EngineEvent::SortBy("route".into()));
        let order: Vec<String> = engine.derive().rows.iter().map(|r| r.id()).collect();
        assert_eq!(order, vec!["SH-2", "SH-1"]);
    }
}
