use anyhow::{Context, Result};
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use statux::{LineHandle, LineMultiplexer};
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

const DEFAULT_LINES: usize = 5;
const TOTAL: usize = 100;
const BAR_WIDTH: usize = 40;

/// Runs one counter per status line until all of them reach 100.
///
/// Usage: `demo [LINES]`. Set `STATUX_LOG=<path>` to log to a file; the terminal itself is
/// taken up by the status block.
#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let line_count = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>())
        .transpose()
        .context("line count must be a non-negative integer")?
        .unwrap_or(DEFAULT_LINES);

    let multiplexer =
        Arc::new(LineMultiplexer::new(line_count).context("failed to reserve status lines")?);

    let mut counters = JoinSet::new();
    for line in multiplexer.build_line_handles() {
        counters.spawn(count(line));
    }
    while let Some(counter) = counters.join_next().await {
        counter.context("counter task panicked")??;
    }

    multiplexer.finish()?;
    info!("all {line_count} counter(s) finished");
    println!("DONE");
    Ok(())
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("STATUX_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("failed to create {path:?}"))?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}

async fn count(line: LineHandle) -> statux::Result<()> {
    // Spread the lines over a few speeds so they visibly race.
    let step = Duration::from_millis(10 * (line.index() as u64 % 3 + 1));
    for done in 0..=TOTAL {
        tokio::time::sleep(step).await;
        line.write(&render_bar(done))?;
    }
    info!("counter on line {} done", line.index());
    Ok(())
}

fn render_bar(done: usize) -> String {
    let filled = BAR_WIDTH * done / TOTAL;
    let mut bar = "#".repeat(filled);
    if filled < BAR_WIDTH {
        bar.push('>');
        bar.push_str(&" ".repeat(BAR_WIDTH - filled - 1));
    }
    format!("[{bar}] {done:>3}/{TOTAL}")
}
