use anyhow::Result;
use logiview::{
    ColumnDef, EngineEvent, FleetSnapshot, MockFleet, PageItem, Record, Row, StatusColor,
    StatusConfig, TableEngine, TableOptions,
};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::sync::{Arc, Mutex};

fn numbered_rows(n: usize) -> Arc<Vec<Record>> {
    Arc::new(
        (1..=n)
            .map(|i| {
                Record::new(format!("R{:02}", i))
                    .with("name", format!("row-{:02}", i))
                    .with("rank", i as i64)
            })
            .collect(),
    )
}

fn engine(n: usize) -> TableEngine<Record> {
    TableEngine::new(
        numbered_rows(n),
        vec![ColumnDef::accessor("name", "Name"), ColumnDef::accessor("rank", "Rank")],
        TableOptions::new().search("name", "Search..."),
    )
}

fn render(items: &[PageItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page { number, current: true } => format!("[{}]", number),
            PageItem::Page { number, .. } => number.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect()
}

#[test]
fn test_page_size_change_keeps_position() {
    let mut table = engine(23);
    table.dispatch(EngineEvent::GoToPage(3));
    assert_eq!(table.derive().rows[0].id(), "R11");

    table.dispatch(EngineEvent::SetPageSize(10));
    let view = table.derive();
    assert_eq!(view.current_page, 2);
    assert_eq!(view.total_pages, 3);
    // first row of the old page is still visible
    assert!(view.rows.iter().any(|r| r.id() == "R11"));
}

#[test]
fn test_search_resets_page_ignoring_case() {
    let mut table = engine(50);
    table.dispatch(EngineEvent::GoToPage(4));
    assert_eq!(table.state().current_page(), 4);

    // row-40 through row-49
    table.dispatch(EngineEvent::SetSearch("ROW-4".into()));
    let view = table.derive();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.filtered_count, 10);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.rows[0].id(), "R40");
}

#[test]
fn test_search_matching_three_rows() {
    let data: Vec<Record> = (1..=50)
        .map(|i| {
            let city = if i % 16 == 0 { "Rotterdam" } else { "Hamburg" };
            Record::new(format!("S{}", i)).with("city", city)
        })
        .collect();
    let mut table = TableEngine::new(
        Arc::new(data),
        vec![ColumnDef::accessor("city", "City")],
        TableOptions::new().search("city", "Search cities..."),
    );
    table.dispatch(EngineEvent::GoToPage(4));

    table.dispatch(EngineEvent::SetSearch("rotter".into()));
    let view = table.derive();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.filler_rows, 2);
    assert_eq!(view.range_label, "Showing 1–3 of 3");
}

#[test]
fn test_pagination_window_for_twelve_pages() {
    let mut table = engine(60);
    table.dispatch(EngineEvent::GoToPage(7));
    let view = table.derive();
    assert_eq!(view.total_pages, 12);
    assert_eq!(render(&view.page_items), vec!["1", "…", "6", "[7]", "8", "…", "12"]);
    assert!(view.nav.first && view.nav.previous && view.nav.next && view.nav.last);
}

#[test]
fn test_empty_dataset() {
    let table = engine(0);
    let view = table.derive();
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.filler_rows, 0);
    assert_eq!(table.options().empty_message, "No results found");
    assert!(!view.nav.first && !view.nav.last);
    assert!(!table.header_checked());
}

#[test]
fn test_unknown_status_renders_gray() {
    let data = Arc::new(vec![Record::new("C1").with("status", "archived")]);
    let table = TableEngine::new(
        data,
        vec![ColumnDef::accessor("status", "Status")],
        TableOptions::new().status(
            "status",
            HashMap::from([("valid".to_string(), StatusConfig::new("green", "Valid"))]),
        ),
    );
    let badge = table.status_badge(&table.data()[0]).unwrap();
    assert_eq!(badge.color, StatusColor::Gray);
    assert_eq!(badge.label, "archived");
}

#[test]
fn test_select_all_round_trip() {
    let mut table = engine(13);
    table.toggle_all();
    assert_eq!(table.state().selected_row_ids().len(), 13);
    table.toggle_all();
    assert!(table.state().selected_row_ids().is_empty());
}

#[test]
fn test_snapshot_round_trip_plain_and_brotli() -> Result<()> {
    let snapshot = MockFleet::with_config(12, 20, 6, 7).generate();

    for name in ["logiview_roundtrip.json", "logiview_roundtrip.json.br"] {
        let path = env::temp_dir().join(name);
        let _ = fs::remove_file(&path);

        snapshot.write(&path)?;
        let loaded = FleetSnapshot::read(&path)?;
        assert_eq!(loaded, snapshot, "{}", name);

        fs::remove_file(&path)?;
    }
    Ok(())
}

#[test]
fn test_brotli_file_is_smaller() -> Result<()> {
    let snapshot = MockFleet::new().generate();
    let plain = env::temp_dir().join("logiview_size.json");
    let packed = env::temp_dir().join("logiview_size.json.br");

    snapshot.write(&plain)?;
    snapshot.write(&packed)?;
    assert!(fs::metadata(&packed)?.len() < fs::metadata(&plain)?.len());

    fs::remove_file(&plain)?;
    fs::remove_file(&packed)?;
    Ok(())
}

#[test]
fn test_snapshot_with_numeric_ids() -> Result<()> {
    let path = env::temp_dir().join("logiview_numeric_ids.json");
    fs::write(
        &path,
        r#"{"vehicles": [{"id": 7, "plate": "AB-123", "retired": null}], "shipments": []}"#,
    )?;

    let snapshot = FleetSnapshot::read(&path)?;
    assert_eq!(snapshot.vehicles[0].id(), "7");
    assert_eq!(snapshot.vehicles[0].field("retired"), None);
    assert!(snapshot.compliance.is_empty());

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_corrupt_snapshot_is_an_error() -> Result<()> {
    let path = env::temp_dir().join("logiview_corrupt.json");
    fs::write(&path, "{\"vehicles\": [")?;

    let err = FleetSnapshot::read(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse snapshot JSON"));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_mock_fleet_feeds_engine() {
    let snapshot = MockFleet::new().generate();
    let mut table = TableEngine::new(
        Arc::new(snapshot.vehicles),
        vec![ColumnDef::accessor("plate", "Plate"), ColumnDef::accessor("mileage", "Mileage")],
        TableOptions::new().search("plate", "Search plates...").page_size(10),
    );
    table.dispatch(EngineEvent::SortBy("mileage".into()));
    let view = table.derive();
    assert_eq!(view.rows.len(), 10);
    let mileages: Vec<f64> = view
        .rows
        .iter()
        .map(|r| r.field("mileage").and_then(|v| v.as_number()).unwrap())
        .collect();
    assert!(mileages.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_replacing_source_purges_missing_selection() {
    let mut table = engine(10);
    table.dispatch(EngineEvent::ToggleRow("R02".into()));
    table.dispatch(EngineEvent::ToggleRow("R09".into()));

    let kept: Vec<Record> = table.data().iter().filter(|r| r.id() != "R09").cloned().collect();
    table.set_data(Arc::new(kept));

    assert_eq!(table.selected_rows().len(), 1);
    assert!(table.state().is_selected("R02"));
    assert!(!table.state().is_selected("R09"));
}

#[test]
fn test_controlled_page_size_waits_for_sync() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requested);
    let mut table = TableEngine::new(
        numbered_rows(40),
        vec![ColumnDef::accessor("name", "Name")],
        TableOptions::new()
            .page_size(10)
            .on_page_size_change(move |size| sink.lock().unwrap().push(size)),
    );

    table.dispatch(EngineEvent::SetPageSize(20));
    assert_eq!(*requested.lock().unwrap(), vec![20]);
    assert_eq!(table.state().page_size(), 10);

    table.sync_page_size(20);
    let view = table.derive();
    assert_eq!(view.page_size, 20);
    assert_eq!(view.rows.len(), 20);
}
