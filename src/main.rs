use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{info, warn};

mod commands;
mod config;

use commands::{apply, parse_line, render_summary};
use config::Config;
use live_scoreboard::ScoreBoard;

fn main() -> Result<()> {
    // Logs go to stderr so summaries on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let reader: Box<dyn BufRead> = match &config.script {
        Some(path) => {
            info!("Reading commands from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Reading commands from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let mut board = ScoreBoard::new();
    let mut rejected = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read command")?;
        let line_no = idx + 1;

        let cmd = match parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) if config.fail_fast => return Err(e.context(format!("line {}", line_no))),
            Err(e) => {
                warn!("line {}: {:#}", line_no, e);
                rejected += 1;
                continue;
            }
        };

        match apply(&mut board, &cmd) {
            Ok(Some(summary)) => println!("{}", render_summary(&summary, config.format)?),
            Ok(None) => {}
            Err(e) if config.fail_fast => {
                return Err(anyhow::Error::new(e).context(format!("line {}", line_no)))
            }
            Err(e) => {
                warn!("line {}: {}", line_no, e);
                rejected += 1;
            }
        }
    }

    info!(
        "Input finished: {} game(s) in progress, {} command(s) rejected",
        board.len(),
        rejected
    );
    println!(
        "{}",
        render_summary(&board.summary_by_total_score(), config.format)?
    );

    Ok(())
}
