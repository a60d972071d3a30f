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

//! Convergent jumps.
//!
//! The renderer may not have the target floor materialized, so a jump
//! runs in two phases: ask the engine to bring the target into its
//! window (fire-and-forget), then poll until the element exists and
//! align it to the requested viewport edge. If it never appears within
//! the timeout, fall back to an absolute top/bottom scroll when the
//! target is the first or last floor, otherwise report failure.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::NavError;
use crate::host::{Edge, Host, ScrollMotion};
use crate::notice::NoticeSink;

/// Last valid logical position. An empty transcript pins this to 0,
/// which the fallback phase treats as "scroll to top".
#[must_use]
pub fn last_position(transcript_len: usize) -> usize {
    transcript_len.saturating_sub(1)
}

#[derive(Debug, Clone, Copy)]
pub struct JumpConfig {
    /// How long to poll before giving up on materialization.
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_millis(2000), poll_interval: Duration::from_millis(50) }
    }
}

/// Two-phase jump protocol. Stateless apart from its timing config; a
/// new invocation does not cancel one still polling, so overlapping
/// jumps may interleave scroll commands on the same viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jumper {
    pub config: JumpConfig,
}

impl Jumper {
    #[must_use]
    pub fn new(config: JumpConfig) -> Self {
        Self { config }
    }

    /// Phase 1: best-effort materialization request. Host errors are
    /// logged and swallowed; convergence is judged by polling alone.
    pub fn request_materialization<H: Host>(self, host: &mut H, target: usize) {
        if let Err(err) = host.request_materialization(target) {
            tracing::warn!(position = target, %err, "materialization request failed");
        }
    }

    /// Phase 2: poll until the target floor is materialized.
    pub async fn await_materialized<H: Host>(
        self,
        host: &H,
        target: usize,
    ) -> Result<(), NavError> {
        let started = Instant::now();
        loop {
            if host.materialized().iter().any(|m| m.position == target) {
                return Ok(());
            }
            if started.elapsed() >= self.config.timeout {
                return Err(NavError::MaterializationTimeout {
                    position: target,
                    timeout_ms: u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX),
                });
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Jump to `target` (clamped to the transcript) and align its
    /// `edge` flush with the viewport. Returns whether the viewport
    /// ended up positioned; failures are surfaced as a warning notice.
    pub async fn jump<H: Host, S: NoticeSink>(
        self,
        host: &mut H,
        notices: &mut S,
        target: usize,
        edge: Edge,
    ) -> bool {
        let last = last_position(host.transcript_len());
        let target = target.min(last);

        self.request_materialization(host, target);

        match self.await_materialized(host, target).await {
            Ok(()) => {
                if let Err(err) = host.align_to_edge(target, edge, ScrollMotion::Smooth) {
                    tracing::warn!(position = target, %err, "edge alignment failed");
                    notices.warn(err.user_message());
                    return false;
                }
                host.flash(target);
                tracing::debug!(position = target, ?edge, "jump converged");
                true
            }
            Err(timeout) => self.fallback(host, notices, target, last, &timeout),
        }
    }

    /// Phase 3: the target never materialized. Absolute scroll is exact
    /// only at the transcript boundaries; anywhere else the target is
    /// presumed hidden by virtualization and the viewport is left alone.
    fn fallback<H: Host, S: NoticeSink>(
        self,
        host: &mut H,
        notices: &mut S,
        target: usize,
        last: usize,
        timeout: &NavError,
    ) -> bool {
        let result = if target == 0 {
            host.scroll_to_top(ScrollMotion::Smooth)
        } else if target >= last {
            host.scroll_to_bottom(ScrollMotion::Smooth)
        } else {
            tracing::warn!(position = target, "jump target never materialized");
            notices.warn(timeout.user_message());
            return false;
        };

        match result {
            Ok(()) => {
                tracing::debug!(position = target, "jump fell back to boundary scroll");
                true
            }
            Err(err) => {
                notices.warn(err.user_message());
                false
            }
        }
    }
}
