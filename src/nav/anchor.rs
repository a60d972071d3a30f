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

//! Anchor resolution: which floor is the user currently looking at?
//!
//! A 1 px probe sits just inside the viewport's top edge. A message
//! straddling the probe is the anchor; failing that, the first visible
//! message below the probe. Anchoring to the top edge (rather than the
//! viewport center) keeps repeated prev/next stepping monotone -- with
//! a center heuristic the following message steals the anchor as soon
//! as it covers more of the viewport.

use crate::host::{MaterializedMessage, Viewport};

/// The materialized message anchoring the view, or `None` when nothing
/// is materialized at all.
#[must_use]
pub fn anchor_element(
    materialized: &[MaterializedMessage],
    viewport: Viewport,
    fallback_height: f64,
) -> Option<MaterializedMessage> {
    if materialized.is_empty() {
        return None;
    }

    let vp = viewport.normalized(fallback_height);
    let probe = vp.top + 1.0;

    let mut straddler: Option<MaterializedMessage> = None;
    let mut straddler_top = f64::NEG_INFINITY;
    let mut below: Option<MaterializedMessage> = None;
    let mut below_top = f64::INFINITY;

    for &msg in materialized {
        let rect = msg.rect;
        if rect.bottom <= vp.top || rect.top >= vp.bottom {
            continue; // not visible
        }

        // A message covering the probe wins; with several stacked on
        // top of each other, the one whose top sits closest to the
        // viewport edge.
        if rect.top <= probe && rect.bottom >= probe {
            if rect.top > straddler_top {
                straddler_top = rect.top;
                straddler = Some(msg);
            }
            continue;
        }

        if rect.top > probe && rect.top < below_top {
            below_top = rect.top;
            below = Some(msg);
        }
    }

    straddler.or(below).or_else(|| materialized.first().copied())
}

/// Logical position of the current anchor. Position 0 when nothing is
/// materialized.
#[must_use]
pub fn resolve_anchor(
    materialized: &[MaterializedMessage],
    viewport: Viewport,
    fallback_height: f64,
) -> usize {
    anchor_element(materialized, viewport, fallback_height).map_or(0, |m| m.position)
}
