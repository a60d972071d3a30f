// =====
// TESTS: 6
// =====
//
// Temporary bookmarks end to end: toggles through pick mode, the
// click-suppression contract, and jumping back to a bookmarked floor.

use chat_jumper::nav::NavAction;
use pretty_assertions::assert_eq;

use crate::helpers::{tap, test_nav};

#[tokio::test]
async fn toggling_through_actions_keeps_the_list_sorted() {
    let mut nav = test_nav(30);
    nav.toggle_favorite(4);
    nav.toggle_favorite(1);
    nav.toggle_favorite(4);
    assert_eq!(nav.favorites().list(), &[1]);

    nav.toggle_favorite(9);
    nav.toggle_favorite(2);
    assert_eq!(nav.favorites().list(), &[1, 2, 9]);

    assert!(nav.handle(NavAction::RemoveFavorite(2)).await);
    assert_eq!(nav.favorites().list(), &[1, 9]);

    assert!(nav.handle(NavAction::ClearFavorites).await);
    assert!(nav.favorites().is_empty());
}

#[tokio::test]
async fn picking_a_floor_bookmarks_it_and_exits_pick_mode() {
    let mut nav = test_nav(30);
    assert!(nav.handle(NavAction::TogglePick).await);
    assert!(nav.is_picking());

    nav.pointer_down(tap(1, 120.0, 80.0, Some(7)));
    assert_eq!(nav.pointer_up(tap(1, 122.0, 83.0, Some(7))), Some(7));

    assert!(!nav.is_picking());
    assert_eq!(nav.favorites().list(), &[7]);
}

#[tokio::test]
async fn picking_an_already_bookmarked_floor_removes_it() {
    let mut nav = test_nav(30);
    nav.toggle_favorite(7);

    assert!(nav.handle(NavAction::TogglePick).await);
    nav.pointer_down(tap(1, 120.0, 80.0, Some(7)));
    nav.pointer_up(tap(1, 120.0, 80.0, Some(7)));

    assert!(nav.favorites().is_empty());
}

#[tokio::test]
async fn escape_cancels_picking_without_touching_favorites() {
    let mut nav = test_nav(30);
    nav.toggle_favorite(5);
    assert!(nav.handle(NavAction::TogglePick).await);

    assert!(nav.escape());
    assert!(!nav.is_picking());
    assert_eq!(nav.favorites().list(), &[5]);
}

#[tokio::test]
async fn transcript_clicks_are_suppressed_during_and_right_after_a_pick() {
    let mut nav = test_nav(30);
    assert!(nav.handle(NavAction::TogglePick).await);

    // While picking, transcript clicks never reach the host.
    assert!(nav.intercept_click(Some(3), false));

    nav.pointer_down(tap(1, 50.0, 50.0, Some(3)));
    nav.pointer_up(tap(1, 50.0, 50.0, Some(3)));

    // One trailing synthetic click is swallowed, then clicks flow again.
    assert!(nav.intercept_click(Some(3), false));
    assert!(!nav.intercept_click(Some(3), false));
}

#[tokio::test(start_paused = true)]
async fn jumping_to_a_favorite_aligns_its_start_edge() {
    let mut nav = test_nav(50);
    nav.toggle_favorite(25);

    assert!(nav.handle(NavAction::JumpToFavorite(25)).await);
    assert_eq!(nav.anchor(), 25);
    assert_eq!(nav.host().flashed, vec![25]);
}
