// chat-jumper — Floor navigation for virtualized chat transcripts
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The navigation controller.
//!
//! One `Navigator` instance owns all ephemeral overlay state (favorite
//! floors, pick mode, the active range, the session watcher) and talks
//! to the embedding application through an injected [`Host`] and
//! [`NoticeSink`]. Every public operation is total: failures are
//! logged, surfaced as a notice, and reported as a boolean -- nothing
//! propagates past the operation boundary.

use crate::host::{Edge, Host, ScrollMotion};
use crate::nav::actions::NavAction;
use crate::nav::anchor::resolve_anchor;
use crate::nav::favorites::FavoriteSet;
use crate::nav::jump::{JumpConfig, Jumper, last_position};
use crate::nav::pick::{PickMode, PointerSample};
use crate::nav::range::{self, ActiveRange};
use crate::nav::session::{ChangeReason, SessionWatcher};
use crate::notice::NoticeSink;

pub struct Navigator<H: Host, S: NoticeSink> {
    host: H,
    notices: S,
    jumper: Jumper,
    favorites: FavoriteSet,
    pick: PickMode,
    active_range: Option<ActiveRange>,
    watcher: SessionWatcher,
}

impl<H: Host, S: NoticeSink> Navigator<H, S> {
    pub fn new(host: H, notices: S) -> Self {
        Self::with_config(host, notices, JumpConfig::default())
    }

    pub fn with_config(host: H, notices: S, config: JumpConfig) -> Self {
        let watcher = SessionWatcher::primed(&host.session_signals());
        Self {
            host,
            notices,
            jumper: Jumper::new(config),
            favorites: FavoriteSet::default(),
            pick: PickMode::default(),
            active_range: None,
            watcher,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn notices(&self) -> &S {
        &self.notices
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub fn active_range(&self) -> Option<ActiveRange> {
        self.active_range
    }

    #[must_use]
    pub fn is_picking(&self) -> bool {
        self.pick.is_picking()
    }

    #[must_use]
    pub fn last_position(&self) -> usize {
        last_position(self.host.transcript_len())
    }

    /// Floor currently anchoring the view.
    #[must_use]
    pub fn anchor(&self) -> usize {
        resolve_anchor(
            &self.host.materialized(),
            self.host.viewport(),
            self.host.fallback_height(),
        )
    }

    // --- Jumps ---

    pub async fn jump(&mut self, target: usize, edge: Edge) -> bool {
        self.jumper.jump(&mut self.host, &mut self.notices, target, edge).await
    }

    /// Jump to the k-th most recent floor (1 = last message).
    pub async fn jump_recent(&mut self, k: u8) -> bool {
        let back = usize::from(k.clamp(1, 3)) - 1;
        let target = self.last_position().saturating_sub(back);
        self.jump(target, Edge::Start).await
    }

    /// Step the anchor by `delta` floors (negative = towards the top).
    pub async fn jump_relative(&mut self, delta: i64) -> bool {
        let anchor = i64::try_from(self.anchor()).unwrap_or(i64::MAX);
        let target = usize::try_from(anchor.saturating_add(delta).max(0)).unwrap_or(0);
        self.jump(target, Edge::Start).await
    }

    /// Snap the current floor flush to the viewport's top or bottom.
    /// Resolves partially scrolled, ambiguous positions.
    pub async fn jump_to_anchor_edge(&mut self, edge: Edge) -> bool {
        let anchor = self.anchor();
        self.jump(anchor, edge).await
    }

    // --- Range view ---

    /// Replace the virtualized view with exactly the floors
    /// `start..=end`. Leaves all state untouched on rejection.
    pub fn show_range(&mut self, start: usize, end: usize) -> bool {
        if self.host.transcript_len() == 0 {
            self.notices.warn("The chat is empty; there is no range to show.");
            return false;
        }

        let range = match range::validate(start, end, self.last_position()) {
            Ok(range) => range,
            Err(err) => {
                tracing::warn!(start, end, "rejected floor range");
                self.notices.error(err.user_message());
                return false;
            }
        };

        if let Err(err) = self.host.show_only(&range.positions()) {
            tracing::warn!(%range, %err, "range view failed");
            self.notices.error(err.user_message());
            return false;
        }

        // The explicit view is in place; a failed scroll command must
        // not desynchronize the recorded range from what is rendered.
        if let Err(err) = self.host.scroll_to_top(ScrollMotion::Instant) {
            tracing::warn!(%err, "scroll to top after range switch failed");
        }

        self.active_range = Some(range);
        self.notices.success(format!("Showing floors {range}."));
        true
    }

    /// Back to the default virtualized view. Idempotent: a no-op
    /// success when no range is active.
    pub fn restore_default(&mut self) -> bool {
        if self.active_range.is_none() {
            self.notices.info("Already showing the default chat view.");
            return true;
        }

        if let Err(err) = self.host.reset_view() {
            tracing::warn!(%err, "default view restore failed");
            self.notices.error(err.user_message());
            return false;
        }

        self.active_range = None;
        self.notices.success("Restored the default chat view.");
        true
    }

    // --- Favorites & pick mode ---

    /// Returns true when the floor ended up bookmarked.
    pub fn toggle_favorite(&mut self, position: usize) -> bool {
        let added = self.favorites.toggle(position);
        if added {
            self.notices.success(format!("Bookmarked floor {position}."));
        } else {
            self.notices.info(format!("Removed bookmark for floor {position}."));
        }
        added
    }

    pub fn toggle_pick(&mut self) {
        if self.pick.is_picking() {
            self.pick.exit();
        } else {
            self.pick.enter();
            self.notices.info("Tap a floor to bookmark it (Esc cancels).");
        }
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.pick.pointer_down(sample);
    }

    /// Feed a pointer-up through pick mode; a completed pick toggles
    /// the tapped floor's bookmark.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<usize> {
        let position = self.pick.pointer_up(sample)?;
        self.toggle_favorite(position);
        Some(position)
    }

    /// Escape key. Returns true when it cancelled an active pick.
    pub fn escape(&mut self) -> bool {
        self.pick.escape()
    }

    /// Capture-phase click filter; see [`PickMode::intercept_click`].
    pub fn intercept_click(&mut self, hit: Option<usize>, over_overlay: bool) -> bool {
        self.pick.intercept_click(hit, over_overlay)
    }

    // --- Session identity ---

    /// One identity-watch cycle; call periodically (the original polls
    /// every second) and from host change notifications.
    pub fn tick(&mut self) {
        let signals = self.host.session_signals();
        if let Some(reason) = self.watcher.observe(&signals, !self.favorites.is_empty()) {
            self.invalidate(reason);
        }
    }

    /// Host told us directly that the chat changed.
    pub fn on_session_changed(&mut self) {
        self.watcher = SessionWatcher::primed(&self.host.session_signals());
        self.invalidate(ChangeReason::Key);
    }

    fn invalidate(&mut self, reason: ChangeReason) {
        tracing::info!(?reason, "chat identity changed; clearing ephemeral state");
        let had_favorites = !self.favorites.is_empty();
        self.favorites.clear();
        self.pick.force_idle();
        // The host reloads its own view on a chat switch; only the
        // record is cleared here.
        self.active_range = None;
        if had_favorites {
            self.notices.info("Chat switched: temporary bookmarks cleared.");
        }
    }

    // --- Dispatch ---

    /// Execute one navigation action. Exhaustive over [`NavAction`].
    pub async fn handle(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Recent(k) => self.jump_recent(k).await,
            NavAction::Prev => self.jump_relative(-1).await,
            NavAction::Next => self.jump_relative(1).await,
            NavAction::AlignStart => self.jump_to_anchor_edge(Edge::Start).await,
            NavAction::AlignEnd => self.jump_to_anchor_edge(Edge::End).await,
            NavAction::ShowRange { start, end } => self.show_range(start, end),
            NavAction::RestoreDefault => self.restore_default(),
            NavAction::TogglePick => {
                self.toggle_pick();
                true
            }
            NavAction::JumpToFavorite(position) => self.jump(position, Edge::Start).await,
            NavAction::RemoveFavorite(position) => self.favorites.remove(position),
            NavAction::ClearFavorites => {
                self.favorites.clear();
                true
            }
        }
    }
}
