use core_actions::{Paginator, initialize};
use core_events::NoopHooks;
use core_model::{PaginationOptions, Slot};
use core_render::{Labels, format_plan};
use pretty_assertions::assert_eq;

fn text(p: &Paginator) -> String {
    format_plan(p.plan(), &Labels::default())
}

fn options(count: i64, current_page: i64) -> PaginationOptions {
    PaginationOptions {
        count,
        current_page,
        ..PaginationOptions::default()
    }
}

#[test]
fn small_list_walks_forward() {
    let mut p = initialize(&options(95, 1), NoopHooks).unwrap();
    assert_eq!(text(&p), "(«) [1] 2 3 4 5 6 7 8 9 10 »");
    p.next();
    assert_eq!(text(&p), "« 1 [2] 3 4 5 6 7 8 9 10 »");
    p.click(10);
    assert_eq!(text(&p), "« 1 2 3 4 5 6 7 8 9 [10] (»)");
}

#[test]
fn large_list_keeps_window_around_current() {
    let mut p = initialize(&options(1000, 50), NoopHooks).unwrap();
    assert_eq!(
        p.plan().page_numbers(),
        vec![45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 100]
    );
    p.next();
    let pages = p.plan().page_numbers();
    assert_eq!(&pages[..2], &[1, 2]);
    assert_eq!(&pages[2..12], &[46, 47, 48, 49, 50, 51, 52, 53, 54, 55]);
    assert_eq!(p.plan().current_page(), Some(51));
}

#[test]
fn item_index_selects_its_page() {
    let opts = PaginationOptions {
        count: 1000,
        current: Some(499),
        ..PaginationOptions::default()
    };
    let p = initialize(&opts, NoopHooks).unwrap();
    assert_eq!(p.current_page(), Some(50));
}

#[test]
fn hidden_controls_are_not_emitted() {
    let opts = PaginationOptions {
        count: 30,
        prev_button: false,
        next_button: false,
        ..PaginationOptions::default()
    };
    let p = initialize(&opts, NoopHooks).unwrap();
    assert!(
        p.plan()
            .iter()
            .all(|slot| matches!(slot, Slot::PageButton { .. }))
    );
    assert_eq!(text(&p), "[1] 2 3");
}

#[test]
fn empty_list_renders_nothing() {
    let mut p = initialize(&options(0, 1), NoopHooks).unwrap();
    assert_eq!(text(&p), "");
    p.next();
    assert_eq!(p.current_page(), None);
}
