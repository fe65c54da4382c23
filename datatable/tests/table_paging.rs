//! Tests for paging.

mod common;

use common::*;
use datatable::DataTable;
use datatable::page::PageEvent;
use serde_json::Value;
use serde_json::json;

#[test]
fn test_default_page_shows_every_row() {
    let table = fruit_table();
    assert_eq!(table.visible_rows().as_slice(), fruit().as_slice());
    assert_eq!(
        table.get_page(),
        PageEvent {
            active_page: 1,
            rows_on_page: 1000,
            data_length: 5,
        }
    );
}

#[test]
fn test_first_page_of_two() {
    let table = fruit_table();
    table.set_rows_on_page(2);
    assert_eq!(visible_ids(&table), vec![3, 1]);
    assert_eq!(
        table.get_page(),
        PageEvent {
            active_page: 1,
            rows_on_page: 2,
            data_length: 5,
        }
    );
}

#[test]
fn test_second_page_of_two() {
    let table = fruit_table();
    table.set_rows_on_page(2);
    table.set_active_page(2);
    assert_eq!(visible_ids(&table), vec![2, 5]);
}

#[test]
fn test_set_page_moves_window() {
    let table = fruit_table();
    table.set_rows_on_page(2);

    assert!(table.set_page(2, 2));
    assert_eq!(visible_ids(&table), vec![2, 5]);

    assert!(table.set_page(1, 3));
    assert_eq!(visible_ids(&table), vec![3, 1, 2]);
}

#[test]
fn test_repeated_set_page_is_noop() {
    let table = fruit_table();
    table.set_rows_on_page(2);
    assert!(table.set_page(2, 3));
    let before = table.visible_rows();

    let (events, _sub) = record_pages(&table);
    assert!(!table.set_page(2, 3));

    assert_eq!(visible_ids(&table), vec![5, 4]);
    assert!(std::sync::Arc::ptr_eq(&before, &table.visible_rows()));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_size_change_keeps_first_row() {
    let table = fruit_table();
    table.set_page(2, 2);
    // Row 3 is the first row on page 2; at size 3 it lives on page 1.
    table.set_rows_on_page(3);
    assert_eq!(table.active_page(), 1);
    assert_eq!(visible_ids(&table), vec![3, 1, 2]);

    table.set_page(3, 2);
    // Row 5 at size 3 is on page 2.
    table.set_rows_on_page(3);
    assert_eq!(table.active_page(), 2);
    assert_eq!(visible_ids(&table), vec![5, 4]);
}

#[test]
fn test_size_change_emits_new_size() {
    let table = fruit_table();
    table.set_rows_on_page(2);
    let (events, _sub) = record_pages(&table);

    table.set_rows_on_page(3);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].rows_on_page, 3);
    assert_eq!(visible_ids(&table), vec![3, 1, 2]);
}

#[test]
fn test_zero_is_clamped_to_one() {
    let table = fruit_table();
    assert!(table.set_page(0, 0));
    assert_eq!(table.active_page(), 1);
    assert_eq!(table.rows_on_page(), 1);
    assert_eq!(visible_ids(&table), vec![3]);
    assert_eq!(table.last_page(), 5);
}

#[test]
fn test_out_of_range_page_is_clamped() {
    let table = fruit_table();
    let (events, _sub) = record_pages(&table);

    assert!(table.set_page(10, 2));

    assert_eq!(table.active_page(), 3);
    assert_eq!(visible_ids(&table), vec![4]);
    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[PageEvent {
            active_page: 3,
            rows_on_page: 2,
            data_length: 5,
        }]
    );
}

#[test]
fn test_empty_table_reports_zero_length() {
    let table = fruit_table();
    table.set_rows(None);
    let (events, _sub) = record_pages(&table);

    table.set_page(2, 3);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].data_length, 0);
    assert_eq!(events[0].active_page, 1);
    assert!(table.visible_rows().is_empty());
}

#[test]
fn test_every_page_is_reachable() {
    init_logging();
    for len in 0..12i64 {
        let rows: Vec<Value> = (0..len).map(|id| json!({ "id": id })).collect();
        let table = DataTable::with_rows(rows);
        for size in 1..6usize {
            table.set_page(1, size);
            let last = table.last_page();
            assert_eq!(last, (len as usize).div_ceil(size));

            let mut seen = Vec::new();
            for page in 1..=last {
                table.set_active_page(page);
                let visible = visible_ids(&table);
                if page == last {
                    assert_eq!(visible.len(), len as usize - (last - 1) * size);
                } else {
                    assert_eq!(visible.len(), size);
                }
                seen.extend(visible);
            }
            assert_eq!(seen, (0..len).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_get_page_round_trip() {
    let table = fruit_table();
    table.set_page(2, 2);
    let page = table.get_page();

    let other = fruit_table();
    other.set_page(page.active_page, page.rows_on_page);
    assert_eq!(other.get_page(), page);
    assert_eq!(other.visible_rows(), table.visible_rows());
}
