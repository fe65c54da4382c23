//! Shared fixtures for table tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::Once;

use datatable::DataTable;
use datatable::events::Subscription;
use datatable::page::PageEvent;
use serde_json::Value;
use serde_json::json;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TestLogger;

static LOGGER: Once = Once::new();

/// Route `log` output through the test harness.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}

/// Five rows with mixed-case and non-ASCII names, in collection order.
pub fn fruit() -> Vec<Value> {
    vec![
        json!({ "id": 3, "name": "banana" }),
        json!({ "id": 1, "name": "Duck" }),
        json!({ "id": 2, "name": "ącki" }),
        json!({ "id": 5, "name": "Ðrone" }),
        json!({ "id": 4, "name": "Ananas" }),
    ]
}

/// A table over [`fruit`] with the default page size.
pub fn fruit_table() -> DataTable<Value> {
    init_logging();
    DataTable::with_rows(fruit())
}

/// Returns the `id` field of each row.
pub fn ids(rows: &[Value]) -> Vec<i64> {
    rows.iter().filter_map(|row| row["id"].as_i64()).collect()
}

/// Returns the `id` field of each visible row.
pub fn visible_ids(table: &DataTable<Value>) -> Vec<i64> {
    ids(&table.visible_rows())
}

/// Collect every page event emitted while the returned guard lives.
pub fn record_pages(table: &DataTable<Value>) -> (Arc<Mutex<Vec<PageEvent>>>, Subscription) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let subscription = table.on_page_change(move |event| {
        sink.lock().unwrap().push(*event);
    });
    (events, subscription)
}
