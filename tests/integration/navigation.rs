// =====
// TESTS: 9
// =====
//
// End-to-end jump behavior against the simulated virtual-scroll host:
// recents, clamping, monotone stepping, edge snaps, timeout fallbacks.

use chat_jumper::host::Edge;
use chat_jumper::nav::NavAction;
use chat_jumper::notice::NoticeLevel;
use pretty_assertions::assert_eq;

use crate::helpers::test_nav;

// --- Recents ---

#[tokio::test(start_paused = true)]
async fn recent_actions_target_the_newest_floors() {
    let mut nav = test_nav(50);

    assert!(nav.handle(NavAction::Recent(1)).await);
    assert!(nav.handle(NavAction::Recent(2)).await);
    assert!(nav.handle(NavAction::Recent(3)).await);

    // 49, 48, 47: counted back from the last floor, aligned by start.
    assert_eq!(nav.host().flashed, vec![49, 48, 47]);
}

// --- Clamping ---

#[tokio::test(start_paused = true)]
async fn overshooting_jump_behaves_like_a_jump_to_the_last_floor() {
    let mut overshoot = test_nav(10);
    assert!(overshoot.jump(999, Edge::End).await);

    let mut exact = test_nav(10);
    assert!(exact.jump(9, Edge::End).await);

    assert_eq!(overshoot.host().scroll_top(), exact.host().scroll_top());
    assert_eq!(overshoot.host().flashed, exact.host().flashed);
}

#[tokio::test(start_paused = true)]
async fn stepping_back_from_floor_zero_stays_at_zero() {
    let mut nav = test_nav(10);
    assert!(nav.jump(0, Edge::Start).await);

    // Repeated "previous floor" at the top keeps re-aligning floor 0,
    // the same as an explicit jump to 0.
    assert!(nav.handle(NavAction::Prev).await);
    assert!(nav.handle(NavAction::Prev).await);
    assert_eq!(nav.anchor(), 0);
}

// --- Monotone stepping ---

#[tokio::test(start_paused = true)]
async fn next_visits_consecutive_floors_without_repeats_or_skips() {
    let mut nav = test_nav(80);
    nav.host_mut().materialize_delay_polls = 4;
    assert!(nav.jump(10, Edge::Start).await);

    let mut visited = Vec::new();
    for _ in 0..6 {
        assert!(nav.handle(NavAction::Next).await);
        visited.push(nav.anchor());
    }
    assert_eq!(visited, vec![11, 12, 13, 14, 15, 16]);
}

#[tokio::test(start_paused = true)]
async fn prev_steps_back_monotonically() {
    let mut nav = test_nav(80);
    assert!(nav.jump(40, Edge::Start).await);

    let mut visited = Vec::new();
    for _ in 0..4 {
        assert!(nav.handle(NavAction::Prev).await);
        visited.push(nav.anchor());
    }
    assert_eq!(visited, vec![39, 38, 37, 36]);
}

// --- Edge snaps ---

#[tokio::test(start_paused = true)]
async fn head_and_tail_snap_the_anchored_floor() {
    let mut nav = test_nav(50);
    assert!(nav.jump(20, Edge::Start).await);
    nav.host_mut().nudge_scroll(35.0);

    assert!(nav.handle(NavAction::AlignStart).await);
    assert_eq!(nav.host().scroll_top(), 2000.0);

    assert!(nav.handle(NavAction::AlignEnd).await);
    assert_eq!(nav.host().scroll_top(), 1800.0);
}

// --- Timeout fallbacks ---

#[tokio::test(start_paused = true)]
async fn interior_target_that_never_materializes_fails_with_a_warning() {
    let mut nav = test_nav(100);
    nav.host_mut().refuse_materialization_of = Some(42);
    let before = nav.host().scroll_top();

    assert!(!nav.jump(42, Edge::Start).await);
    assert_eq!(nav.host().scroll_top(), before);
    assert!(nav.notices().has_level(NoticeLevel::Warning));
}

#[tokio::test(start_paused = true)]
async fn failing_alignment_command_surfaces_a_warning_not_a_panic() {
    let mut nav = test_nav(20);
    nav.host_mut().fail_commands = true;

    // Floor 1 is already materialized; the jump reaches alignment and
    // the host rejects the scroll.
    assert!(!nav.jump(1, Edge::Start).await);
    assert!(nav.notices().has_level(NoticeLevel::Warning));
}

#[tokio::test(start_paused = true)]
async fn boundary_targets_fall_back_to_absolute_scroll() {
    let mut nav = test_nav(100);
    nav.host_mut().refuse_materialization_of = Some(99);

    assert!(nav.jump(99, Edge::End).await);
    assert_eq!(nav.host().scroll_top(), 9700.0);
}
