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

/// Ephemeral set of bookmarked floors. Lives for the current session
/// only; cleared wholesale when the chat identity changes.
///
/// Kept ascending and deduplicated on every mutation so the UI can
/// enumerate it without sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    positions: Vec<usize>,
}

impl FavoriteSet {
    #[must_use]
    pub fn has(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// Returns false if the floor was already bookmarked.
    pub fn add(&mut self, position: usize) -> bool {
        match self.positions.binary_search(&position) {
            Ok(_) => false,
            Err(idx) => {
                self.positions.insert(idx, position);
                true
            }
        }
    }

    /// Returns false if the floor was not bookmarked.
    pub fn remove(&mut self, position: usize) -> bool {
        match self.positions.binary_search(&position) {
            Ok(idx) => {
                self.positions.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Add or remove; returns true when the floor ended up bookmarked.
    pub fn toggle(&mut self, position: usize) -> bool {
        if self.remove(position) { false } else { self.add(position) }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Ascending, unique.
    #[must_use]
    pub fn list(&self) -> &[usize] {
        &self.positions
    }
}
