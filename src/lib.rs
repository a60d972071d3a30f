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

pub mod error;
pub mod host;
pub mod nav;
pub mod notice;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chat-jumper", about = "Floor navigation demo against a simulated chat host")]
pub struct Cli {
    /// Number of messages in the simulated transcript
    #[arg(long, default_value_t = 50)]
    pub length: usize,

    /// Poll cycles before a simulated materialization request completes
    #[arg(long, default_value_t = 2)]
    pub latency: u32,

    /// Actions to run, e.g. `recent:1 prev next range:3-7 restore`
    #[arg(value_name = "ACTION")]
    pub script: Vec<String>,

    /// Write tracing diagnostics to this file
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then "info")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
