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

//! Session identity watching.
//!
//! No single identity signal is reliably present across host states:
//! some chats lack an explicit key, the collection token may be stable
//! while content changes, and vice versa. The watcher layers whichever
//! signals exist; any one of them firing is authoritative for that
//! observation cycle. Known limitation, kept deliberately: the
//! length-drop fallback also fires when every message of the current
//! chat is deleted in place while bookmarks exist.

use crate::host::SessionSignals;

/// Why the watcher decided the chat identity changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    /// Explicit group/character/chat key changed.
    Key,
    /// The transcript collection itself was swapped out.
    Collection,
    /// Transcript length dropped from non-empty to empty.
    Emptied,
}

/// Compares each observation against the previously seen signals.
/// First-seen signals populate the baseline without firing.
#[derive(Debug, Clone, Default)]
pub struct SessionWatcher {
    last_key: Option<String>,
    last_token: Option<u64>,
    last_len: Option<usize>,
}

impl SessionWatcher {
    /// Seed the baseline from the current signals so the first periodic
    /// observation does not fire.
    #[must_use]
    pub fn primed(signals: &SessionSignals) -> Self {
        Self {
            last_key: signals.key.clone(),
            last_token: signals.collection_token,
            last_len: Some(signals.len),
        }
    }

    /// One observation cycle. Updates the baseline and reports a change
    /// when one of the layered signals fired.
    pub fn observe(
        &mut self,
        signals: &SessionSignals,
        have_favorites: bool,
    ) -> Option<ChangeReason> {
        // 1) Explicit key, when both sides have one.
        if let (Some(key), Some(last)) = (signals.key.as_ref(), self.last_key.as_ref())
            && key != last
        {
            self.adopt(signals);
            return Some(ChangeReason::Key);
        }
        if self.last_key.is_none() && signals.key.is_some() {
            self.last_key = signals.key.clone();
        }

        // 2) Collection identity.
        if let (Some(token), Some(last)) = (signals.collection_token, self.last_token)
            && token != last
        {
            self.adopt(signals);
            return Some(ChangeReason::Collection);
        }
        if self.last_token.is_none() && signals.collection_token.is_some() {
            self.last_token = signals.collection_token;
        }

        // 3) Chat switches usually clear the transcript first. Only
        // meaningful while there is ephemeral state worth invalidating.
        if let Some(last_len) = self.last_len
            && signals.len == 0
            && last_len > 0
            && have_favorites
        {
            self.adopt(signals);
            return Some(ChangeReason::Emptied);
        }

        self.last_len = Some(signals.len);
        None
    }

    fn adopt(&mut self, signals: &SessionSignals) {
        if signals.key.is_some() {
            self.last_key = signals.key.clone();
        }
        if signals.collection_token.is_some() {
            self.last_token = signals.collection_token;
        }
        self.last_len = Some(signals.len);
    }
}
