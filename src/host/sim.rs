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

//! In-memory host for tests and the demo binary.
//!
//! Models a virtualized transcript: per-message heights, a scroll
//! offset, and a materialization window around the viewport. Only
//! messages inside the window (plus overscan) are reported as
//! materialized, so the convergence loop in `nav::jump` is exercised
//! the same way it would be against a real virtual-scroll engine.
//! Materialization requests can be given a poll-count latency;
//! progress is tracked with interior mutability because the jumper
//! polls through a shared reference.

use std::cell::{Cell, RefCell};

use crate::host::{
    Edge, ElementRect, Host, HostResult, MaterializedMessage, ScrollMotion, SessionSignals,
    Viewport,
};
use crate::error::NavError;

const OVERSCAN: f64 = 200.0;

#[derive(Debug, Clone, Copy)]
struct PendingRequest {
    position: usize,
    polls_left: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewMode {
    /// Normal virtualized window around the scroll offset.
    Virtualized,
    /// Explicit list of positions, rendered in order (range view).
    Explicit(Vec<usize>),
}

pub struct SimulatedHost {
    heights: Vec<f64>,
    viewport_height: f64,
    scroll_top: Cell<f64>,
    mode: ViewMode,
    pending: RefCell<Option<PendingRequest>>,
    /// Poll cycles before a materialization request takes effect.
    pub materialize_delay_polls: u32,
    /// When set, a materialization request for this position is dropped
    /// silently -- simulates a message the engine refuses to render.
    pub refuse_materialization_of: Option<usize>,
    /// When true, scroll and view commands fail with a transient error.
    pub fail_commands: bool,
    /// When false, `show_only` reports an unsupported host.
    pub supports_explicit_view: bool,
    /// Positions that received a visual pulse, in order.
    pub flashed: Vec<usize>,
    session_key: Option<String>,
    collection_token: Option<u64>,
}

impl SimulatedHost {
    /// Transcript of `len` messages with a uniform height of 100 px and
    /// a 300 px viewport.
    #[must_use]
    pub fn with_uniform(len: usize) -> Self {
        Self::new(vec![100.0; len], 300.0)
    }

    #[must_use]
    pub fn new(heights: Vec<f64>, viewport_height: f64) -> Self {
        Self {
            heights,
            viewport_height,
            scroll_top: Cell::new(0.0),
            mode: ViewMode::Virtualized,
            pending: RefCell::new(None),
            materialize_delay_polls: 0,
            refuse_materialization_of: None,
            fail_commands: false,
            supports_explicit_view: true,
            flashed: Vec::new(),
            session_key: None,
            collection_token: Some(1),
        }
    }

    pub fn set_session_key(&mut self, key: impl Into<String>) {
        self.session_key = Some(key.into());
    }

    /// Swap in a different chat: new transcript, new identity signals.
    pub fn load_session(&mut self, key: Option<String>, token: Option<u64>, len: usize) {
        self.session_key = key;
        self.collection_token = token;
        self.heights = vec![100.0; len];
        self.mode = ViewMode::Virtualized;
        self.scroll_top.set(0.0);
        *self.pending.borrow_mut() = None;
    }

    /// Truncate the transcript in place without touching identity
    /// signals (models deleting messages within the same chat).
    pub fn truncate_transcript(&mut self, len: usize) {
        self.heights.truncate(len);
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    /// Move the viewport by a raw delta, as a user wheel scroll would.
    pub fn nudge_scroll(&mut self, delta: f64) {
        self.set_scroll(self.scroll_top.get() + delta);
    }

    #[must_use]
    pub fn in_explicit_view(&self) -> bool {
        matches!(self.mode, ViewMode::Explicit(_))
    }

    #[must_use]
    pub fn materialized_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.materialized().iter().map(|m| m.position).collect();
        positions.sort_unstable();
        positions
    }

    fn height_of(&self, position: usize) -> f64 {
        self.heights.get(position).copied().unwrap_or(0.0)
    }

    fn total_height(&self) -> f64 {
        match &self.mode {
            ViewMode::Virtualized => self.heights.iter().sum(),
            ViewMode::Explicit(list) => list.iter().map(|&p| self.height_of(p)).sum(),
        }
    }

    /// Content offset of a position within the current view, if it is
    /// part of that view at all.
    fn content_offset(&self, position: usize) -> Option<f64> {
        match &self.mode {
            ViewMode::Virtualized => {
                if position >= self.heights.len() {
                    return None;
                }
                Some(self.heights[..position].iter().sum())
            }
            ViewMode::Explicit(list) => {
                let mut offset = 0.0;
                for &p in list {
                    if p == position {
                        return Some(offset);
                    }
                    offset += self.height_of(p);
                }
                None
            }
        }
    }

    fn clamp_scroll(&self, top: f64) -> f64 {
        let max = (self.total_height() - self.viewport_height).max(0.0);
        top.clamp(0.0, max)
    }

    fn set_scroll(&self, top: f64) {
        self.scroll_top.set(self.clamp_scroll(top));
    }

    /// Advance a pending materialization request by one poll cycle.
    fn advance_pending(&self) {
        let mut pending = self.pending.borrow_mut();
        let Some(req) = pending.as_mut() else { return };
        if req.polls_left > 0 {
            req.polls_left -= 1;
            return;
        }
        // Request completes: the engine scrolls the target roughly into
        // the middle of the window, like a chat-jump command would.
        let position = req.position;
        *pending = None;
        drop(pending);
        if let Some(offset) = self.content_offset(position) {
            self.set_scroll(offset - self.viewport_height / 2.0);
        }
    }

    fn check_commands(&self) -> HostResult<()> {
        if self.fail_commands {
            return Err(NavError::Transient("simulated command failure".to_owned()));
        }
        Ok(())
    }
}

impl Host for SimulatedHost {
    fn transcript_len(&self) -> usize {
        self.heights.len()
    }

    fn viewport(&self) -> Viewport {
        Viewport { top: 0.0, bottom: self.viewport_height }
    }

    fn fallback_height(&self) -> f64 {
        self.viewport_height
    }

    fn materialized(&self) -> Vec<MaterializedMessage> {
        self.advance_pending();

        let scroll = self.scroll_top.get();
        let window_top = scroll - OVERSCAN;
        let window_bottom = scroll + self.viewport_height + OVERSCAN;

        let positions: Vec<usize> = match &self.mode {
            ViewMode::Virtualized => (0..self.heights.len()).collect(),
            ViewMode::Explicit(list) => list.clone(),
        };

        let mut out = Vec::new();
        let mut offset = 0.0;
        for position in positions {
            let height = self.height_of(position);
            let top = offset - scroll;
            let bottom = top + height;
            // Window test in content coordinates.
            if offset + height > window_top && offset < window_bottom {
                out.push(MaterializedMessage { position, rect: ElementRect { top, bottom } });
            }
            offset += height;
        }
        out
    }

    fn request_materialization(&mut self, position: usize) -> HostResult<()> {
        self.check_commands()?;
        if self.refuse_materialization_of == Some(position) {
            return Ok(());
        }
        if self.content_offset(position).is_none() {
            // Not part of the current view (out of range, or an
            // explicit view without this position). Best-effort: drop.
            return Ok(());
        }
        *self.pending.borrow_mut() =
            Some(PendingRequest { position, polls_left: self.materialize_delay_polls });
        Ok(())
    }

    fn show_only(&mut self, positions: &[usize]) -> HostResult<()> {
        self.check_commands()?;
        if !self.supports_explicit_view {
            return Err(NavError::UnsupportedHost { capability: "explicit range rendering" });
        }
        if positions.iter().any(|&p| p >= self.heights.len()) {
            return Err(NavError::Transient("position out of transcript".to_owned()));
        }
        self.mode = ViewMode::Explicit(positions.to_vec());
        Ok(())
    }

    fn reset_view(&mut self) -> HostResult<()> {
        self.check_commands()?;
        self.mode = ViewMode::Virtualized;
        self.set_scroll(self.scroll_top.get());
        Ok(())
    }

    fn scroll_to_top(&mut self, _motion: ScrollMotion) -> HostResult<()> {
        self.check_commands()?;
        self.set_scroll(0.0);
        Ok(())
    }

    fn scroll_to_bottom(&mut self, _motion: ScrollMotion) -> HostResult<()> {
        self.check_commands()?;
        self.set_scroll(self.total_height());
        Ok(())
    }

    fn align_to_edge(
        &mut self,
        position: usize,
        edge: Edge,
        _motion: ScrollMotion,
    ) -> HostResult<()> {
        self.check_commands()?;
        let Some(offset) = self.content_offset(position) else {
            return Err(NavError::Transient(format!("message {position} is not materialized")));
        };
        match edge {
            Edge::Start => self.set_scroll(offset),
            Edge::End => {
                self.set_scroll(offset + self.height_of(position) - self.viewport_height);
            }
        }
        Ok(())
    }

    fn flash(&mut self, position: usize) {
        self.flashed.push(position);
    }

    fn session_signals(&self) -> SessionSignals {
        SessionSignals {
            key: self.session_key.clone(),
            collection_token: self.collection_token,
            len: self.heights.len(),
        }
    }
}
