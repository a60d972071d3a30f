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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("invalid range {start}-{end} (valid: 0-{max})")]
    InvalidRange { start: usize, end: usize, max: usize },
    #[error("message {position} did not materialize within {timeout_ms}ms")]
    MaterializationTimeout { position: usize, timeout_ms: u64 },
    #[error("host does not support {capability}")]
    UnsupportedHost { capability: &'static str },
    #[error("host command failed: {0}")]
    Transient(String),
}

impl NavError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRange { max, .. } => {
                format!("Invalid floor range. Enter a-b within 0-{max}.")
            }
            Self::MaterializationTimeout { position, .. } => {
                format!(
                    "Could not locate floor {position} (possibly hidden by virtual scrolling). Try again."
                )
            }
            Self::UnsupportedHost { capability } => {
                format!("The current host does not support {capability}.")
            }
            Self::Transient(_) => "The host rejected the command. Try again.".to_owned(),
        }
    }
}
