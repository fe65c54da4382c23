//! Tests for the page observer.

mod common;

use common::*;
use datatable::page::PageEvent;
use datatable_widgets::PageControls;
use datatable_widgets::PageLinkKind;
use datatable_widgets::Paginator;

#[test]
fn test_mirrors_table_on_creation() {
    let table = numbered_table(5);
    table.set_page(2, 2);

    let paginator = Paginator::new(&table);

    assert_eq!(paginator.page(), page(2, 2, 5));
    assert_eq!(paginator.last_page(), 3);
    assert!(paginator.is_dirty());
}

#[test]
fn test_follows_page_changes() {
    let table = numbered_table(5);
    let paginator = Paginator::new(&table);
    paginator.clear_dirty();

    table.set_page(3, 2);

    assert_eq!(paginator.active_page(), 3);
    assert_eq!(paginator.rows_on_page(), 2);
    assert_eq!(paginator.data_length(), 5);
    assert!(paginator.is_dirty());
}

#[test]
fn test_follows_row_changes() {
    let table = numbered_table(5);
    let paginator = Paginator::new(&table);
    paginator.set_rows_on_page(2);
    paginator.set_page(3);

    table.update_rows(|rows| rows.truncate(2));

    assert_eq!(paginator.page(), page(1, 2, 2));
    assert_eq!(paginator.last_page(), 1);
}

#[test]
fn test_stays_in_sync_when_sort_listener_pages() {
    let table = numbered_table(5);
    table.set_rows_on_page(2);
    let paginator = Paginator::new(&table);
    let handle = table.clone();
    let _sub = table.on_sort_change(move |_| {
        handle.set_active_page(3);
    });

    table.set_sort("id", "desc");

    assert_eq!(table.active_page(), 3);
    assert_eq!(paginator.page(), table.get_page());
    assert_eq!(visible_ids(&table), vec![1]);
}

#[test]
fn test_set_page_keeps_size() {
    let table = numbered_table(10);
    let paginator = Paginator::new(&table);
    paginator.set_rows_on_page(3);

    assert!(paginator.set_page(2));

    assert_eq!(table.get_page(), page(2, 3, 10));
    assert_eq!(visible_ids(&table), vec![4, 5, 6]);
}

#[test]
fn test_set_rows_on_page_keeps_first_row() {
    let table = numbered_table(10);
    let paginator = Paginator::new(&table);
    paginator.set_rows_on_page(2);
    paginator.set_page(3);

    // Row 5 is first on page 3; at size 4 it is on page 2.
    assert!(paginator.set_rows_on_page(4));

    assert_eq!(paginator.page(), page(2, 4, 10));
    assert_eq!(visible_ids(&table), vec![5, 6, 7, 8]);
}

#[test]
fn test_commands_clamp_like_the_table() {
    let table = numbered_table(5);
    let paginator = Paginator::new(&table);
    paginator.set_rows_on_page(2);

    paginator.set_page(99);
    assert_eq!(paginator.active_page(), 3);

    paginator.set_page(0);
    assert_eq!(paginator.active_page(), 1);
}

#[test]
fn test_set_table_rebinds() {
    let first = numbered_table(5);
    let second = numbered_table(20);
    second.set_page(2, 5);

    let paginator = Paginator::new(&first);
    paginator.set_table(&second);

    assert_eq!(paginator.page(), page(2, 5, 20));
    assert_eq!(paginator.table().id(), second.id());

    // The previous table is no longer followed.
    first.set_page(2, 2);
    assert_eq!(paginator.page(), page(2, 5, 20));

    second.set_page(4, 5);
    assert_eq!(paginator.active_page(), 4);

    paginator.set_page(1);
    assert_eq!(second.active_page(), 1);
    assert_eq!(first.active_page(), 2);
}

#[test]
fn test_clones_share_binding() {
    let table = numbered_table(5);
    let paginator = Paginator::new(&table);
    let handle = paginator.clone();

    handle.set_rows_on_page(1);

    assert_eq!(paginator.rows_on_page(), 1);
    assert_eq!(paginator.last_page(), 5);
}

#[test]
fn test_follow_links() {
    let table = numbered_table(50);
    let paginator = Paginator::new(&table);
    paginator.set_rows_on_page(5);
    let controls = PageControls::new(vec![5, 10]);

    let view = paginator.view(&controls);
    let last = view
        .links
        .iter()
        .find(|link| link.kind == PageLinkKind::Last)
        .copied()
        .unwrap();
    assert!(paginator.follow(&last));
    assert_eq!(paginator.active_page(), 10);

    let view = paginator.view(&controls);
    let last = view.links.last().copied().unwrap();
    assert!(last.disabled);
    assert!(!paginator.follow(&last));

    let previous = view
        .links
        .iter()
        .find(|link| link.kind == PageLinkKind::Page && link.target == 8)
        .copied()
        .unwrap();
    assert!(paginator.follow(&previous));
    assert_eq!(table.get_page(), PageEvent { active_page: 8, rows_on_page: 5, data_length: 50 });
}

#[test]
fn test_view_hides_links_when_everything_fits() {
    let table = numbered_table(3);
    let paginator = Paginator::new(&table);
    let controls = PageControls::new(vec![5, 10]);

    assert!(paginator.view(&controls).is_empty());
}
