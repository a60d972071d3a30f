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

use std::fmt;

use crate::error::NavError;

/// Closed interval of floors currently force-materialized in place of
/// the default virtualized view. Always mirrors exactly what the host
/// renders while range view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRange {
    pub start: usize,
    pub end: usize,
}

impl ActiveRange {
    /// The floors of the interval, in order.
    #[must_use]
    pub fn positions(self) -> Vec<usize> {
        (self.start..=self.end).collect()
    }
}

impl fmt::Display for ActiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Bounds-check an interval against the transcript.
pub fn validate(start: usize, end: usize, max: usize) -> Result<ActiveRange, NavError> {
    if start > end || end > max {
        return Err(NavError::InvalidRange { start, end, max });
    }
    Ok(ActiveRange { start, end })
}

/// Parse user input of the form `a-b` (whitespace tolerated anywhere).
/// Returns the raw pair; bounds are checked separately by [`validate`].
#[must_use]
pub fn parse_range(raw: &str) -> Option<(usize, usize)> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let (a, b) = compact.split_once('-')?;
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a.parse().ok()?, b.parse().ok()?))
}
