use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How summaries are printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One numbered line per match
    Text,
    /// JSON array of matches
    Json,
}

/// Live football scoreboard driven by a command script
#[derive(Parser, Debug, Clone)]
#[command(name = "live-scoreboard", version, about)]
pub struct Config {
    /// Script of scoreboard commands (reads stdin when omitted)
    #[arg(long, env = "SCOREBOARD_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Summary output format
    #[arg(long, env = "SCOREBOARD_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Stop at the first rejected command instead of logging and continuing
    #[arg(long, env = "SCOREBOARD_FAIL_FAST", default_value = "false")]
    pub fail_fast: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.script {
            if !path.is_file() {
                anyhow::bail!("script {} does not exist or is not a file", path.display());
            }
        }
        Ok(())
    }
}
