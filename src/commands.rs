//! Line-oriented command scripts for driving a [`ScoreBoard`].
//!
//! ```text
//! # comment
//! start  Mexico Canada
//! update Mexico Canada 0 5
//! finish Mexico Canada
//! summary
//! ```

use anyhow::{bail, Context, Result};
use live_scoreboard::{Match, ScoreBoard, ScoreBoardError};

use crate::config::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home: String,
        away: String,
    },
    Update {
        home: String,
        away: String,
        home_score: i32,
        away_score: i32,
    },
    Finish {
        home: String,
        away: String,
    },
    Summary,
}

/// Parse one script line.  Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = parts.split_first() else {
        return Ok(None);
    };

    let cmd = match (verb.to_lowercase().as_str(), args) {
        ("start", [home, away]) => Command::Start {
            home: home.to_string(),
            away: away.to_string(),
        },
        ("update", [home, away, home_score, away_score]) => Command::Update {
            home: home.to_string(),
            away: away.to_string(),
            home_score: parse_score(home_score)?,
            away_score: parse_score(away_score)?,
        },
        ("finish", [home, away]) => Command::Finish {
            home: home.to_string(),
            away: away.to_string(),
        },
        ("summary", []) => Command::Summary,
        ("start" | "update" | "finish" | "summary", _) => {
            bail!("wrong number of arguments for '{}'", verb)
        }
        _ => bail!("unknown command '{}'", verb),
    };
    Ok(Some(cmd))
}

fn parse_score(raw: &str) -> Result<i32> {
    raw.parse()
        .with_context(|| format!("invalid score '{}'", raw))
}

/// Apply a command to the board.  `Summary` yields the current ranking; the
/// other commands yield nothing on success.
pub fn apply<'a>(
    board: &'a mut ScoreBoard,
    cmd: &Command,
) -> Result<Option<Vec<&'a Match>>, ScoreBoardError> {
    match cmd {
        Command::Start { home, away } => board.start_game(home, away)?,
        Command::Update {
            home,
            away,
            home_score,
            away_score,
        } => board.update_score(home, away, *home_score, *away_score)?,
        Command::Finish { home, away } => {
            board.finish_game(home, away)?;
        }
        Command::Summary => return Ok(Some(board.summary_by_total_score())),
    }
    Ok(None)
}

/// Render a summary for printing.
pub fn render_summary(summary: &[&Match], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if summary.is_empty() {
                return Ok("No games in progress.".to_string());
            }
            let lines: Vec<String> = summary
                .iter()
                .enumerate()
                .map(|(i, m)| format!("{}. {}", i + 1, m))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).context("Failed to serialize summary")
        }
    }
}
