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

//! User-visible notifications.
//!
//! The navigation core never prints or panics on failure; it reports
//! outcomes through a [`NoticeSink`] injected by the embedder (a toast
//! layer, a status line, a test recorder).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);

    fn info(&mut self, text: impl Into<String>) {
        self.notify(Notice { level: NoticeLevel::Info, text: text.into() });
    }

    fn success(&mut self, text: impl Into<String>) {
        self.notify(Notice { level: NoticeLevel::Success, text: text.into() });
    }

    fn warn(&mut self, text: impl Into<String>) {
        self.notify(Notice { level: NoticeLevel::Warning, text: text.into() });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.notify(Notice { level: NoticeLevel::Error, text: text.into() });
    }
}

/// Records notices in order. Used by tests to assert on surfaced outcomes.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub notices: Vec<Notice>,
}

impl MemorySink {
    #[must_use]
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    #[must_use]
    pub fn has_level(&self, level: NoticeLevel) -> bool {
        self.notices.iter().any(|n| n.level == level)
    }
}

impl NoticeSink for MemorySink {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Forwards notices to `tracing` at a matching level. Used by the demo
/// binary, where the log file is the only user surface.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info | NoticeLevel::Success => {
                tracing::info!(target: "notice", "{}", notice.text);
            }
            NoticeLevel::Warning => tracing::warn!(target: "notice", "{}", notice.text),
            NoticeLevel::Error => tracing::error!(target: "notice", "{}", notice.text),
        }
    }
}
