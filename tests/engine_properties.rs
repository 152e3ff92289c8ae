//! Property tests for the table engine.
//!
//! Random event sequences must never leave the current page outside
//! `1..=total_pages`, and the derived rows must agree with the filter and
//! sort settings that produced them.

use logiview::{ColumnDef, EngineEvent, Record, Row, TableEngine, TableOptions};
use proptest::prelude::*;
use std::sync::Arc;

const CITIES: &[&str] = &["Rotterdam", "Hamburg", "Antwerp", "Lyon", "Milan", "Gdansk"];

fn shipments(weights: &[i32]) -> Arc<Vec<Record>> {
    Arc::new(
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                Record::new(format!("SH-{}", i))
                    .with("city", CITIES[i % CITIES.len()])
                    .with("weight", *w as i64)
            })
            .collect(),
    )
}

fn table(weights: &[i32], page_size: usize) -> TableEngine<Record> {
    TableEngine::new(
        shipments(weights),
        vec![
            ColumnDef::accessor("city", "City"),
            ColumnDef::accessor("weight", "Weight"),
            ColumnDef::accessor("id", "Id").sortable(false),
        ],
        TableOptions::new().search("city", "Search cities...").page_size(page_size),
    )
}

fn event() -> impl Strategy<Value = EngineEvent> {
    prop_oneof![
        "[a-z]{0,3}".prop_map(EngineEvent::SetSearch),
        prop::sample::select(vec!["city", "weight", "id"])
            .prop_map(|c| EngineEvent::SortBy(c.to_string())),
        Just(EngineEvent::ClearSort),
        (0usize..40).prop_map(EngineEvent::GoToPage),
        Just(EngineEvent::FirstPage),
        Just(EngineEvent::PreviousPage),
        Just(EngineEvent::NextPage),
        Just(EngineEvent::LastPage),
        (0usize..30).prop_map(EngineEvent::SetPageSize),
        (0usize..40).prop_map(|i| EngineEvent::ToggleRow(format!("SH-{}", i))),
    ]
}

proptest! {
    #[test]
    fn prop_current_page_stays_in_range(
        weights in prop::collection::vec(any::<i32>(), 0..80),
        page_size in 1usize..25,
        events in prop::collection::vec(event(), 0..40),
    ) {
        let mut engine = table(&weights, page_size);
        for event in events {
            engine.dispatch(event);
            let state = engine.state();
            let view = engine.derive();

            prop_assert!(state.page_size() >= 1);
            prop_assert!(state.current_page() >= 1);
            prop_assert!(state.current_page() <= view.total_pages);
            prop_assert_eq!(state.current_page(), view.current_page);
            prop_assert!(view.rows.len() <= view.page_size);
            if !view.rows.is_empty() {
                prop_assert_eq!(view.rows.len() + view.filler_rows, view.page_size);
            }
        }
    }

    #[test]
    fn prop_filtered_rows_contain_term(
        weights in prop::collection::vec(any::<i32>(), 0..80),
        term in "[a-zA-Z]{0,3}",
    ) {
        let mut engine = table(&weights, 500);
        engine.dispatch(EngineEvent::SetSearch(term.clone()));
        let view = engine.derive();

        let needle = term.to_lowercase();
        let expected = engine
            .data()
            .iter()
            .filter(|r| r.field_string("city").to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(view.filtered_count, expected);
        for row in &view.rows {
            prop_assert!(row.field_string("city").to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn prop_numeric_sort_is_non_decreasing(
        weights in prop::collection::vec(any::<i32>(), 0..80),
    ) {
        let mut engine = table(&weights, 500);
        engine.dispatch(EngineEvent::SortBy("weight".into()));
        let view = engine.derive();

        let sorted: Vec<f64> = view
            .rows
            .iter()
            .filter_map(|r| r.field("weight").and_then(|v| v.as_number()))
            .collect();
        prop_assert_eq!(sorted.len(), weights.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_second_sort_click_reverses_unique_values(
        weights in prop::collection::hash_set(any::<i32>(), 0..60),
    ) {
        let weights: Vec<i32> = weights.into_iter().collect();
        let mut engine = table(&weights, 500);

        engine.dispatch(EngineEvent::SortBy("weight".into()));
        let ascending: Vec<String> = engine.derive().rows.iter().map(|r| r.id()).collect();

        engine.dispatch(EngineEvent::SortBy("weight".into()));
        let mut descending: Vec<String> = engine.derive().rows.iter().map(|r| r.id()).collect();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn prop_unsortable_column_is_ignored(
        weights in prop::collection::vec(any::<i32>(), 0..30),
    ) {
        let mut engine = table(&weights, 10);
        engine.dispatch(EngineEvent::SortBy("id".into()));
        prop_assert_eq!(engine.state().sort_column(), None);
    }
}
