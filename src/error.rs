use std::fmt;

/// Why a team name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamNameIssue {
    /// Empty or whitespace-only after trimming
    Empty,
    /// Longer than `max` characters after trimming
    TooLong { max: usize },
    /// Contains something other than ASCII letters
    NotLetters,
    /// Home and away names are identical
    SameAsOpponent,
}

impl fmt::Display for TeamNameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamNameIssue::Empty => write!(f, "Team name cannot be empty."),
            TeamNameIssue::TooLong { max } => {
                write!(f, "Team name cannot be longer than {} characters.", max)
            }
            TeamNameIssue::NotLetters => {
                write!(f, "Team names should contain only letters (a-z, A-Z).")
            }
            TeamNameIssue::SameAsOpponent => {
                write!(f, "Home and away teams must be different.")
            }
        }
    }
}

/// Errors returned by scoreboard operations.
///
/// Every failure is a synchronous validation error; the scoreboard is left
/// untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreBoardError {
    #[error("{reason} (got {name:?})")]
    InvalidTeamName { name: String, reason: TeamNameIssue },

    #[error("Scores cannot be negative (got {home_score}-{away_score}).")]
    NegativeScore { home_score: i32, away_score: i32 },

    #[error("A game between these teams already exists ({home_team} vs {away_team}).")]
    GameExists { home_team: String, away_team: String },

    #[error("{team} team is already playing another game.")]
    TeamBusy { team: String },

    #[error("Game not found ({home_team} vs {away_team}).")]
    GameNotFound { home_team: String, away_team: String },
}

impl ScoreBoardError {
    pub(crate) fn invalid_name(name: &str, reason: TeamNameIssue) -> Self {
        ScoreBoardError::InvalidTeamName {
            name: name.to_string(),
            reason,
        }
    }

    pub(crate) fn not_found(home_team: &str, away_team: &str) -> Self {
        ScoreBoardError::GameNotFound {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreBoardError>;
