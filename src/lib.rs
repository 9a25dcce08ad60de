//! Live football scoreboard: start matches, update scores, finish matches and
//! rank the running ones by total score.

pub mod error;
pub mod scoreboard;

pub use error::{ScoreBoardError, TeamNameIssue};
pub use scoreboard::{Match, MatchKey, ScoreBoard, MAX_TEAM_NAME_LEN};
