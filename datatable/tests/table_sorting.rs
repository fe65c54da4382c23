//! Tests for sorting.

mod common;

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use common::*;
use datatable::DataTable;
use datatable::model::Record;
use datatable::model::Row;
use datatable::model::Value;
use datatable::sort::Extractor;
use datatable::sort::SortBy;
use datatable::sort::SortOrder;
use serde_json::json;

fn names(rows: &[serde_json::Value]) -> Vec<&str> {
    rows.iter().filter_map(|row| row["name"].as_str()).collect()
}

#[test]
fn test_get_sort_returns_current_setting() {
    let table = fruit_table();
    table.set_sort("id", "desc");

    let sort = table.get_sort();
    assert_eq!(sort.sort_by, SortBy::from("id"));
    assert_eq!(sort.sort_order, SortOrder::Desc);
}

#[test]
fn test_sort_by_id_ascending() {
    let table = fruit_table();
    assert!(table.set_sort("id", SortOrder::Asc));
    assert_eq!(visible_ids(&table), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_by_id_descending() {
    let table = fruit_table();
    table.set_sort("id", SortOrder::Desc);
    assert_eq!(visible_ids(&table), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_sort_by_name_ignores_case() {
    let table = fruit_table();
    table.set_sort("name", "asc");
    assert_eq!(
        names(&table.visible_rows()),
        vec!["Ananas", "banana", "Duck", "Ðrone", "ącki"]
    );
}

#[test]
fn test_unknown_order_falls_back_to_ascending() {
    let table = fruit_table();
    table.set_sort("id", "bulb");
    assert_eq!(table.sort_order(), SortOrder::Asc);
    assert_eq!(table.get_sort().sort_order, SortOrder::Asc);
    assert_eq!(visible_ids(&table), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_missing_order_is_ascending() {
    let table = fruit_table();
    table.set_sort("id", None::<&str>);
    assert_eq!(table.sort_order(), SortOrder::Asc);
    assert_eq!(visible_ids(&table), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_order_without_key_keeps_collection_order() {
    let table = fruit_table();
    let before = table.visible_rows();
    let (pages, _pages) = record_pages(&table);
    let sorts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&sorts);
    let _sorts = table.on_sort_change(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(table.set_sort("", SortOrder::Desc));

    assert!(table.sort_by().is_empty());
    assert_eq!(table.sort_order(), SortOrder::Desc);
    assert!(Arc::ptr_eq(&before, &table.visible_rows()));
    assert_eq!(table.visible_rows().as_slice(), fruit().as_slice());
    assert_eq!(sorts.load(Ordering::SeqCst), 0);
    assert!(pages.lock().unwrap().is_empty());
}

#[test]
fn test_same_sort_is_noop() {
    let table = fruit_table();
    assert!(table.set_sort("name", "asc"));
    let before = table.visible_rows();
    let (events, _sub) = record_pages(&table);

    assert!(!table.set_sort("name", "asc"));

    assert!(Arc::ptr_eq(&before, &table.visible_rows()));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_sort_by_two_keys() {
    let table = fruit_table();
    table.set_rows(vec![
        json!({ "name": "Claire", "age": 9 }),
        json!({ "name": "Anna", "age": 34 }),
        json!({ "name": "Claire", "age": 16 }),
        json!({ "name": "Anna", "age": 12 }),
        json!({ "name": "Claire", "age": 7 }),
        json!({ "name": "Anna", "age": 12 }),
    ]);

    table.set_sort(["name", "age"], "asc");

    assert_eq!(
        table.visible_rows().as_slice(),
        &[
            json!({ "name": "Anna", "age": 12 }),
            json!({ "name": "Anna", "age": 12 }),
            json!({ "name": "Anna", "age": 34 }),
            json!({ "name": "Claire", "age": 7 }),
            json!({ "name": "Claire", "age": 9 }),
            json!({ "name": "Claire", "age": 16 }),
        ]
    );
}

#[test]
fn test_sort_by_child_property() {
    let table = fruit_table();
    table.set_rows(vec![
        json!({ "name": "Claire", "city": { "zip": "51111" } }),
        json!({ "name": "Anna" }),
        json!({ "name": "Claire", "city": { "zip": "41111" } }),
        json!({ "name": "Donald", "city": 2 }),
        json!({ "name": "Claire", "city": { "zip": "11111" } }),
        json!({ "name": "Anna", "city": { "zip": "21111" } }),
    ]);

    table.set_sort("city.zip", "asc");

    assert_eq!(
        table.visible_rows().as_slice(),
        &[
            json!({ "name": "Anna" }),
            json!({ "name": "Donald", "city": 2 }),
            json!({ "name": "Claire", "city": { "zip": "11111" } }),
            json!({ "name": "Anna", "city": { "zip": "21111" } }),
            json!({ "name": "Claire", "city": { "zip": "41111" } }),
            json!({ "name": "Claire", "city": { "zip": "51111" } }),
        ]
    );
}

#[test]
fn test_descending_keeps_ties_stable() {
    let table = fruit_table();
    table.set_rows(vec![
        json!({ "id": 1, "group": "b" }),
        json!({ "id": 2, "group": "a" }),
        json!({ "id": 3, "group": "b" }),
        json!({ "id": 4, "group": "a" }),
    ]);

    table.set_sort("group", SortOrder::Desc);
    assert_eq!(visible_ids(&table), vec![1, 3, 2, 4]);
}

#[test]
fn test_sort_by_extractor() {
    let table = fruit_table();
    let name_length = Extractor::new("name_length", |row: &serde_json::Value| {
        Value::from(row["name"].as_str().map(|name| name.chars().count()).unwrap_or(0))
    });

    table.set_sort(name_length.clone(), "desc");

    // Lengths 6, 4, 4, 5, 6: ties keep collection order.
    assert_eq!(visible_ids(&table), vec![3, 4, 5, 1, 2]);
    assert!(!table.set_sort(name_length, "desc"));
}

#[test]
fn test_extractors_compare_by_identity() {
    let table = fruit_table();
    let make = || Extractor::new("id", |row: &serde_json::Value| row.resolve(&"id".into()));

    assert!(table.set_sort(make(), "asc"));
    // Same name, different function instance.
    assert!(table.set_sort(make(), "asc"));
}

#[test]
fn test_mixed_path_and_extractor_keys() {
    let table = fruit_table();
    table.set_rows(vec![
        json!({ "id": 1, "team": "x", "score": 3 }),
        json!({ "id": 2, "team": "y", "score": 5 }),
        json!({ "id": 3, "team": "x", "score": 9 }),
    ]);
    let negated = Extractor::new("negated_score", |row: &serde_json::Value| {
        Value::from(-row["score"].as_i64().unwrap_or(0))
    });

    table.set_sort(
        SortBy::Multi(vec!["team".into(), negated.into()]),
        SortOrder::Asc,
    );
    assert_eq!(visible_ids(&table), vec![3, 1, 2]);
}

#[test]
fn test_clear_sort_restores_collection_order() {
    let table = fruit_table();
    table.set_sort("id", "asc");
    assert!(table.clear_sort());
    assert_eq!(visible_ids(&table), vec![3, 1, 2, 5, 4]);
    assert!(!table.clear_sort());
}

#[test]
fn test_toggle_sort() {
    let table = fruit_table();
    assert_eq!(table.toggle_sort("id"), SortOrder::Asc);
    assert_eq!(table.toggle_sort("id"), SortOrder::Desc);
    assert_eq!(table.toggle_sort("id"), SortOrder::Asc);
    assert_eq!(table.toggle_sort("name"), SortOrder::Asc);
    assert_eq!(table.sort_by(), SortBy::from("name"));
}

#[test]
fn test_sort_then_page() {
    let table = fruit_table();
    table.set_sort("id", "desc");
    table.set_page(2, 2);
    assert_eq!(visible_ids(&table), vec![3, 2]);
}

#[test]
fn test_sort_records() {
    init_logging();
    let rows = Record::list_from_json_str(
        r#"[
            { "id": 2, "owner": { "name": "zed" } },
            { "id": 1, "owner": { "name": "Amy" } },
            { "id": 3 }
        ]"#,
    )
    .unwrap();
    let table = DataTable::with_rows(rows);

    table.set_sort("owner.name", "asc");

    let ids: Vec<i32> = table
        .visible_rows()
        .iter()
        .filter_map(|row| row.get_int("id").ok().flatten())
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_get_sort_round_trip() {
    let table = fruit_table();
    table.set_sort(["name", "id"], "desc");
    let sort = table.get_sort();

    let other = fruit_table();
    other.set_sort(sort.sort_by.clone(), sort.sort_order);
    assert_eq!(other.get_sort(), sort);
    assert_eq!(other.visible_rows(), table.visible_rows());
}
