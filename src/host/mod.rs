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

//! The host renderer seam.
//!
//! Everything the navigation core needs from the surrounding chat
//! application is expressed as the [`Host`] trait: transcript length,
//! the set of currently materialized messages with their geometry, and
//! a handful of scroll/materialization commands. The virtual-scroll
//! engine itself lives behind this seam; the core only reads geometry
//! and issues best-effort commands.

pub mod sim;

use crate::error::NavError;

pub type HostResult<T> = Result<T, NavError>;

/// Bounding box of one materialized message, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
}

impl ElementRect {
    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// A message the renderer currently has in the DOM, identified by its
/// stable zero-based transcript position. The host alone creates and
/// destroys these; the core only reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterializedMessage {
    pub position: usize,
    pub rect: ElementRect,
}

/// Visible rectangle of the scrollable transcript region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub bottom: f64,
}

impl Viewport {
    /// A zero- or negative-height viewport falls back to the host's
    /// window height, matching how a collapsed scroll wrapper is
    /// measured against the document instead.
    #[must_use]
    pub fn normalized(self, fallback_height: f64) -> Viewport {
        if self.bottom > self.top {
            self
        } else {
            Viewport { top: self.top, bottom: self.top + fallback_height.max(0.0) }
        }
    }
}

/// Which boundary of a message to align flush with the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Message top against viewport top.
    Start,
    /// Message bottom against viewport bottom.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    Instant,
}

/// Identity signals for the currently loaded chat. No single field is
/// reliably present across all host states, so the watcher layers them:
/// an explicit key wins, then the collection token (stands in for
/// reference identity of the transcript array), then the length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSignals {
    /// Composite group/character/chat key, when the host exposes one.
    pub key: Option<String>,
    /// Changes whenever the host swaps the transcript collection itself.
    pub collection_token: Option<u64>,
    pub len: usize,
}

/// Capabilities the embedding chat application provides to the core.
/// All calls are in-process; commands are best-effort and carry no
/// completion signal beyond subsequent polling of `materialized()`.
pub trait Host {
    /// Logical message count of the full transcript.
    fn transcript_len(&self) -> usize;

    fn viewport(&self) -> Viewport;

    /// Stand-in height used when the viewport rectangle is degenerate.
    fn fallback_height(&self) -> f64;

    /// Snapshot of the currently materialized messages, any order.
    fn materialized(&self) -> Vec<MaterializedMessage>;

    /// Ask the renderer to bring `position` into its materialized
    /// window. Fire-and-forget: there is no contract on the resulting
    /// scroll position, only that materialization was requested.
    fn request_materialization(&mut self, position: usize) -> HostResult<()>;

    /// Replace the materialized content with exactly `positions`, in
    /// order. Hosts without explicit-index rendering return
    /// [`NavError::UnsupportedHost`].
    fn show_only(&mut self, positions: &[usize]) -> HostResult<()>;

    /// Reload the default virtualized view.
    fn reset_view(&mut self) -> HostResult<()>;

    fn scroll_to_top(&mut self, motion: ScrollMotion) -> HostResult<()>;

    fn scroll_to_bottom(&mut self, motion: ScrollMotion) -> HostResult<()>;

    /// Align a materialized message's edge flush with the viewport's
    /// corresponding edge.
    fn align_to_edge(&mut self, position: usize, edge: Edge, motion: ScrollMotion)
    -> HostResult<()>;

    /// Transient visual pulse on a materialized message. Best-effort.
    fn flash(&mut self, position: usize);

    fn session_signals(&self) -> SessionSignals;
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn normalized_keeps_a_proper_viewport() {
        let vp = Viewport { top: 10.0, bottom: 400.0 };
        assert_eq!(vp.normalized(800.0), vp);
    }

    #[test]
    fn normalized_extends_a_degenerate_viewport() {
        let vp = Viewport { top: 10.0, bottom: 10.0 };
        let fixed = vp.normalized(600.0);
        assert_eq!(fixed.top, 10.0);
        assert_eq!(fixed.bottom, 610.0);
    }

    #[test]
    fn normalized_never_inverts() {
        let vp = Viewport { top: 50.0, bottom: 20.0 };
        let fixed = vp.normalized(-5.0);
        assert!(fixed.bottom >= fixed.top);
    }
}
