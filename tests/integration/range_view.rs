// =====
// TESTS: 7
// =====
//
// Range view: force-materializing an explicit interval of floors and
// restoring the default virtualized view.

use chat_jumper::nav::NavAction;
use chat_jumper::notice::NoticeLevel;
use pretty_assertions::assert_eq;

use crate::helpers::test_nav;

#[tokio::test]
async fn single_floor_range_materializes_exactly_one_position() {
    let mut nav = test_nav(10);

    assert!(nav.handle(NavAction::ShowRange { start: 3, end: 3 }).await);
    assert_eq!(nav.active_range().map(|r| (r.start, r.end)), Some((3, 3)));
    assert_eq!(nav.host().materialized_positions(), vec![3]);
    assert_eq!(nav.host().scroll_top(), 0.0);
}

#[tokio::test]
async fn restore_clears_the_range_and_is_idempotent() {
    let mut nav = test_nav(10);
    assert!(nav.handle(NavAction::ShowRange { start: 3, end: 3 }).await);

    assert!(nav.handle(NavAction::RestoreDefault).await);
    assert_eq!(nav.active_range(), None);
    assert!(!nav.host().in_explicit_view());

    // Second restore: no-op success.
    assert!(nav.handle(NavAction::RestoreDefault).await);
    assert_eq!(nav.active_range(), None);
}

#[tokio::test]
async fn inverted_range_fails_and_leaves_the_active_range_alone() {
    let mut nav = test_nav(10);
    assert!(nav.handle(NavAction::ShowRange { start: 2, end: 5 }).await);

    assert!(!nav.handle(NavAction::ShowRange { start: 5, end: 2 }).await);
    assert_eq!(nav.active_range().map(|r| (r.start, r.end)), Some((2, 5)));
    assert_eq!(nav.host().materialized_positions(), vec![2, 3, 4, 5]);
    assert!(nav.notices().has_level(NoticeLevel::Error));
}

#[tokio::test]
async fn range_past_the_last_floor_is_rejected() {
    let mut nav = test_nav(10);
    assert!(!nav.handle(NavAction::ShowRange { start: 0, end: 10 }).await);
    assert_eq!(nav.active_range(), None);
}

#[tokio::test]
async fn replacing_an_active_range_keeps_record_and_render_in_sync() {
    let mut nav = test_nav(20);
    assert!(nav.handle(NavAction::ShowRange { start: 0, end: 4 }).await);
    assert!(nav.handle(NavAction::ShowRange { start: 10, end: 12 }).await);

    assert_eq!(nav.active_range().map(|r| (r.start, r.end)), Some((10, 12)));
    assert_eq!(nav.host().materialized_positions(), vec![10, 11, 12]);
}

#[tokio::test]
async fn transient_host_failure_is_caught_at_the_operation_boundary() {
    let mut nav = test_nav(10);
    nav.host_mut().fail_commands = true;

    assert!(!nav.handle(NavAction::ShowRange { start: 1, end: 4 }).await);
    assert_eq!(nav.active_range(), None);
    assert!(nav.notices().has_level(NoticeLevel::Error));

    // Commands recover; the user re-invokes, nothing was poisoned.
    nav.host_mut().fail_commands = false;
    assert!(nav.handle(NavAction::ShowRange { start: 1, end: 4 }).await);
}

#[tokio::test]
async fn host_without_explicit_rendering_reports_unsupported() {
    let mut nav = test_nav(10);
    nav.host_mut().supports_explicit_view = false;

    assert!(!nav.handle(NavAction::ShowRange { start: 1, end: 4 }).await);
    assert_eq!(nav.active_range(), None);
    let last = nav.notices().last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert!(last.text.contains("does not support"));
}
