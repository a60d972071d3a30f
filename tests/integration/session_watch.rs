// =====
// TESTS: 5
// =====
//
// Session identity changes invalidate all ephemeral overlay state,
// whichever identity signal happened to fire.

use chat_jumper::nav::NavAction;
use pretty_assertions::assert_eq;

use crate::helpers::{tap, test_nav};

#[tokio::test]
async fn key_change_resets_favorites_range_and_pick_mode() {
    let mut nav = test_nav(50);
    nav.host_mut().set_session_key("char:1|chat:a");
    nav.tick();

    nav.toggle_favorite(3);
    nav.toggle_favorite(12);
    assert!(nav.handle(NavAction::ShowRange { start: 2, end: 6 }).await);
    assert!(nav.handle(NavAction::TogglePick).await);
    // A pick is mid-flight when the chat switches.
    nav.pointer_down(tap(1, 10.0, 10.0, Some(4)));

    nav.host_mut().load_session(Some("char:1|chat:b".to_owned()), Some(2), 30);
    nav.tick();

    assert!(nav.favorites().is_empty());
    assert_eq!(nav.active_range(), None);
    assert!(!nav.is_picking());
    // The interrupted pick cannot leak a toggle into the new chat.
    assert_eq!(nav.pointer_up(tap(1, 10.0, 10.0, Some(4))), None);
}

#[tokio::test]
async fn collection_swap_without_a_key_also_resets() {
    let mut nav = test_nav(50);
    nav.toggle_favorite(8);

    nav.host_mut().load_session(None, Some(99), 50);
    nav.tick();

    assert!(nav.favorites().is_empty());
}

#[tokio::test]
async fn emptied_transcript_clears_existing_bookmarks() {
    let mut nav = test_nav(50);
    nav.toggle_favorite(8);

    nav.host_mut().load_session(None, None, 0);
    nav.tick();

    assert!(nav.favorites().is_empty());
    assert!(nav.notices().notices.iter().any(|n| n.text.contains("bookmarks cleared")));
}

#[tokio::test]
async fn in_chat_edits_do_not_reset() {
    let mut nav = test_nav(50);
    nav.host_mut().set_session_key("chat:a");
    nav.tick();
    nav.toggle_favorite(8);

    // Messages deleted within the same chat, but not down to zero.
    nav.host_mut().truncate_transcript(20);
    nav.tick();

    assert_eq!(nav.favorites().list(), &[8]);
}

#[tokio::test]
async fn explicit_host_notification_resets_immediately() {
    let mut nav = test_nav(50);
    nav.toggle_favorite(8);
    assert!(nav.handle(NavAction::ShowRange { start: 0, end: 3 }).await);

    nav.host_mut().load_session(Some("chat:z".to_owned()), Some(7), 10);
    nav.on_session_changed();

    assert!(nav.favorites().is_empty());
    assert_eq!(nav.active_range(), None);
    // The watcher rebaselined: the next periodic tick stays quiet.
    nav.toggle_favorite(1);
    nav.tick();
    assert_eq!(nav.favorites().list(), &[1]);
}
