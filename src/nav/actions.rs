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

use std::str::FromStr;

use crate::nav::range::parse_range;

/// Every navigation command the overlay can issue. A closed enum so the
/// controller's dispatch is checked for coverage at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Jump to the k-th most recent floor (k in 1..=3), start edge.
    Recent(u8),
    /// Previous floor relative to the current anchor.
    Prev,
    /// Next floor relative to the current anchor.
    Next,
    /// Snap the current floor's top to the viewport top.
    AlignStart,
    /// Snap the current floor's bottom to the viewport bottom.
    AlignEnd,
    /// Force-materialize exactly the floors `start..=end`.
    ShowRange { start: usize, end: usize },
    /// Back to the default virtualized view.
    RestoreDefault,
    TogglePick,
    /// Jump to a bookmarked floor, start edge.
    JumpToFavorite(usize),
    RemoveFavorite(usize),
    ClearFavorites,
}

/// Script syntax used by the demo driver: `recent:2`, `prev`, `next`,
/// `head`, `tail`, `range:3-7`, `restore`, `pick`, `fav:12`,
/// `unfav:12`, `clear-favs`.
impl FromStr for NavAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, arg) = match s.split_once(':') {
            Some((w, a)) => (w, Some(a)),
            None => (s, None),
        };

        let parsed = match (word, arg) {
            ("recent", Some(k)) => {
                let k: u8 = k.parse()?;
                anyhow::ensure!((1..=3).contains(&k), "recent takes 1, 2 or 3");
                Self::Recent(k)
            }
            ("prev", None) => Self::Prev,
            ("next", None) => Self::Next,
            ("head", None) => Self::AlignStart,
            ("tail", None) => Self::AlignEnd,
            ("range", Some(r)) => {
                let (start, end) =
                    parse_range(r).ok_or_else(|| anyhow::anyhow!("range takes a-b, got `{r}`"))?;
                Self::ShowRange { start, end }
            }
            ("restore", None) => Self::RestoreDefault,
            ("pick", None) => Self::TogglePick,
            ("fav", Some(p)) => Self::JumpToFavorite(p.parse()?),
            ("unfav", Some(p)) => Self::RemoveFavorite(p.parse()?),
            ("clear-favs", None) => Self::ClearFavorites,
            _ => anyhow::bail!("unknown action `{s}`"),
        };
        Ok(parsed)
    }
}
