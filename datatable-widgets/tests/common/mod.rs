//! Shared fixtures for widget tests.

#![allow(dead_code)]

use std::sync::Once;

use datatable::DataTable;
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

/// A table of `len` rows with ids `1..=len`.
pub fn numbered_table(len: i64) -> DataTable<Value> {
    init_logging();
    DataTable::with_rows((1..=len).map(|id| json!({ "id": id })).collect())
}

/// Returns the `id` field of each visible row.
pub fn visible_ids(table: &DataTable<Value>) -> Vec<i64> {
    table
        .visible_rows()
        .iter()
        .filter_map(|row| row["id"].as_i64())
        .collect()
}

pub fn page(active_page: usize, rows_on_page: usize, data_length: usize) -> PageEvent {
    PageEvent {
        active_page,
        rows_on_page,
        data_length,
    }
}
