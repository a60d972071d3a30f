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

use chat_jumper::Cli;
use chat_jumper::host::sim::SimulatedHost;
use chat_jumper::nav::{NavAction, Navigator};
use chat_jumper::notice::TracingSink;
use clap::Parser;
use std::fs::OpenOptions;

#[allow(clippy::exit)]
fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let actions = parse_script(&cli)?;

    // Single-threaded by design: all navigator state mutates on
    // run-to-completion callbacks, never across threads.
    let rt = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
    let local_set = tokio::task::LocalSet::new();

    rt.block_on(local_set.run_until(async move {
        let mut host = SimulatedHost::with_uniform(cli.length);
        host.materialize_delay_polls = cli.latency;
        host.set_session_key("demo-chat");
        let mut nav = Navigator::new(host, TracingSink);

        println!("transcript: {} floors, anchor at {}", cli.length, nav.anchor());
        for action in actions {
            nav.tick();
            let ok = nav.handle(action).await;
            println!(
                "{action:?}: {} (anchor {}, scroll {:.0}, range {}, favorites {:?})",
                if ok { "ok" } else { "failed" },
                nav.anchor(),
                nav.host().scroll_top(),
                nav.active_range().map_or_else(|| "-".to_owned(), |r| r.to_string()),
                nav.favorites().list(),
            );
        }
        Ok(())
    }))
}

fn parse_script(cli: &Cli) -> anyhow::Result<Vec<NavAction>> {
    if cli.script.is_empty() {
        // Default tour: recents, stepping, edge snaps, a range view.
        return Ok(vec![
            NavAction::Recent(1),
            NavAction::Recent(3),
            NavAction::Prev,
            NavAction::Next,
            NavAction::AlignStart,
            NavAction::AlignEnd,
            NavAction::ShowRange { start: 0, end: 5 },
            NavAction::RestoreDefault,
        ]);
    }
    cli.script.iter().map(|raw| raw.parse()).collect()
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        if std::env::var_os("RUST_LOG").is_some() {
            eprintln!(
                "RUST_LOG is set, but tracing is disabled without --log-file <PATH>. \
Use --log-file to enable diagnostics."
            );
        }
        return Ok(());
    };

    let directives = cli
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_owned());
    let filter = tracing_subscriber::EnvFilter::try_new(directives.as_str())
        .map_err(|e| anyhow::anyhow!("invalid tracing filter `{directives}`: {e}"))?;

    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if cli.log_append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    let file = options
        .open(path)
        .map_err(|e| anyhow::anyhow!("failed to open log file {}: {e}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    tracing::info!(
        target: "diagnostics",
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        log_filter = %directives,
        log_append = cli.log_append,
        "tracing enabled"
    );

    Ok(())
}
