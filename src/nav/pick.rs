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

//! Pick mode: redirect the next transcript tap into a bookmark toggle.
//!
//! While picking, a low-movement pointer-down/up pair over a transcript
//! message toggles that floor's bookmark instead of reaching the host's
//! own message interactions, then picking exits (one pick per
//! activation). The host must route its capture-phase click events
//! through [`PickMode::intercept_click`] so both the picking click and
//! the one synthetic click that can trail the pointer-up are swallowed.

/// Movement above this is a drag or scroll, not a tap.
const CLICK_THRESHOLD_PX: f64 = 8.0;

/// One pointer event as delivered by the host. Hit-testing is the
/// host's job: `hit` carries the floor under the pointer, if any, and
/// `over_overlay` is true when the pointer is on the jumper widget
/// itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pointer_id: u64,
    pub x: f64,
    pub y: f64,
    /// Primary button (or touch contact).
    pub primary: bool,
    pub hit: Option<usize>,
    pub over_overlay: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Picking { down: Option<DownOrigin> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DownOrigin {
    pointer_id: u64,
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickMode {
    state: State,
    suppress_next_click: bool,
}

impl Default for PickMode {
    fn default() -> Self {
        Self { state: State::Idle, suppress_next_click: false }
    }
}

impl PickMode {
    #[must_use]
    pub fn is_picking(&self) -> bool {
        matches!(self.state, State::Picking { .. })
    }

    pub fn enter(&mut self) {
        self.state = State::Picking { down: None };
    }

    /// Drop back to idle without touching the suppression flag. Used
    /// after a completed pick and by toggling the mode off.
    pub fn exit(&mut self) {
        self.state = State::Idle;
    }

    /// Escape key: cancel picking. Returns true when a pick was in
    /// progress (so the caller knows the key was consumed).
    pub fn escape(&mut self) -> bool {
        if self.is_picking() {
            self.state = State::Idle;
            true
        } else {
            false
        }
    }

    /// Hard reset on session change: idle, no pending suppression.
    pub fn force_idle(&mut self) {
        self.state = State::Idle;
        self.suppress_next_click = false;
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        let State::Picking { down } = &mut self.state else { return };
        if !sample.primary {
            return;
        }
        *down = Some(DownOrigin { pointer_id: sample.pointer_id, x: sample.x, y: sample.y });
    }

    /// Complete a pick. Returns the floor to toggle when the up event
    /// closes a low-movement tap over a transcript message; picking
    /// exits and the next click is armed for suppression. Drags,
    /// overlay taps and misses leave picking active.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<usize> {
        let State::Picking { down } = &mut self.state else { return None };
        let origin = down.take()?;
        if origin.pointer_id != sample.pointer_id {
            *down = Some(origin);
            return None;
        }

        let moved = f64::hypot(sample.x - origin.x, sample.y - origin.y);
        if moved > CLICK_THRESHOLD_PX {
            return None;
        }
        if sample.over_overlay {
            return None;
        }
        let position = sample.hit?;

        self.suppress_next_click = true;
        self.state = State::Idle;
        Some(position)
    }

    /// Capture-phase click filter. Returns true when the click must be
    /// swallowed before it reaches the host's own message handlers:
    /// any transcript click while picking, plus the single synthetic
    /// click that may trail a completed pick.
    pub fn intercept_click(&mut self, hit: Option<usize>, over_overlay: bool) -> bool {
        if hit.is_none() || over_overlay {
            return false;
        }
        if self.is_picking() {
            self.suppress_next_click = false;
            return true;
        }
        if self.suppress_next_click {
            self.suppress_next_click = false;
            return true;
        }
        false
    }
}
