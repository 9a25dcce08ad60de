use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{Result, ScoreBoardError, TeamNameIssue};

/// Maximum team name length, counted in characters after trimming.
pub const MAX_TEAM_NAME_LEN: usize = 35;

/// A single live match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    /// Wall-clock start time, for display only
    started_at: DateTime<Utc>,
}

impl Match {
    /// Create a match at 0–0.
    ///
    /// Names are checked for emptiness first, then length, then equality; the
    /// first violation found is returned.
    pub fn new(home_team: &str, away_team: &str) -> Result<Self> {
        for name in [home_team, away_team] {
            if name.trim().is_empty() {
                return Err(ScoreBoardError::invalid_name(name, TeamNameIssue::Empty));
            }
        }
        for name in [home_team, away_team] {
            if name.trim().chars().count() > MAX_TEAM_NAME_LEN {
                return Err(ScoreBoardError::invalid_name(
                    name,
                    TeamNameIssue::TooLong {
                        max: MAX_TEAM_NAME_LEN,
                    },
                ));
            }
        }
        if home_team == away_team {
            return Err(ScoreBoardError::invalid_name(
                away_team,
                TeamNameIssue::SameAsOpponent,
            ));
        }

        Ok(Match {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: 0,
            away_score: 0,
            started_at: Utc::now(),
        })
    }

    /// Replace both scores at once. Negative values are rejected and leave
    /// the current score untouched.
    pub fn update_score(&mut self, home_score: i32, away_score: i32) -> Result<()> {
        match (u32::try_from(home_score), u32::try_from(away_score)) {
            (Ok(home), Ok(away)) => {
                self.home_score = home;
                self.away_score = away;
                Ok(())
            }
            _ => Err(ScoreBoardError::NegativeScore {
                home_score,
                away_score,
            }),
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// True if `team` plays in this match, ignoring ASCII case.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team.eq_ignore_ascii_case(team) || self.away_team.eq_ignore_ascii_case(team)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_starts_at_zero() {
        let m = Match::new("Poland", "Spain").unwrap();
        assert_eq!(m.home_team(), "Poland");
        assert_eq!(m.away_team(), "Spain");
        assert_eq!(m.home_score(), 0);
        assert_eq!(m.away_score(), 0);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn test_empty_names_rejected() {
        let err = Match::new("", "Spain").unwrap_err();
        assert!(matches!(
            err,
            ScoreBoardError::InvalidTeamName {
                reason: TeamNameIssue::Empty,
                ..
            }
        ));

        let err = Match::new("Poland", "   ").unwrap_err();
        assert_eq!(err, ScoreBoardError::invalid_name("   ", TeamNameIssue::Empty));
    }

    #[test]
    fn test_long_name_rejected() {
        let long = "A".repeat(MAX_TEAM_NAME_LEN + 1);
        let err = Match::new(&long, "Spain").unwrap_err();
        assert_eq!(
            err,
            ScoreBoardError::invalid_name(&long, TeamNameIssue::TooLong { max: 35 })
        );
    }

    #[test]
    fn test_name_at_limit_after_trim_accepted() {
        let name = format!("  {}  ", "B".repeat(MAX_TEAM_NAME_LEN));
        assert!(Match::new(&name, "Spain").is_ok());
    }

    #[test]
    fn test_emptiness_checked_before_length() {
        let long = "A".repeat(40);
        let err = Match::new(&long, "").unwrap_err();
        assert!(matches!(
            err,
            ScoreBoardError::InvalidTeamName {
                reason: TeamNameIssue::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_same_teams_rejected() {
        let err = Match::new("Spain", "Spain").unwrap_err();
        assert!(matches!(
            err,
            ScoreBoardError::InvalidTeamName {
                reason: TeamNameIssue::SameAsOpponent,
                ..
            }
        ));
    }

    #[test]
    fn test_same_teams_differing_case_accepted() {
        assert!(Match::new("Spain", "SPAIN").is_ok());
    }

    #[test]
    fn test_same_teams_differing_whitespace_accepted() {
        // Only exactly equal names clash; trimming is for emptiness and length
        assert!(Match::new("Spain", "Spain ").is_ok());
    }

    #[test]
    fn test_update_score() {
        let mut m = Match::new("Mexico", "Canada").unwrap();
        m.update_score(0, 5).unwrap();
        assert_eq!(m.home_score(), 0);
        assert_eq!(m.away_score(), 5);
        assert_eq!(m.total_score(), 5);
    }

    #[test]
    fn test_negative_score_leaves_match_unchanged() {
        let mut m = Match::new("Mexico", "Canada").unwrap();
        m.update_score(2, 1).unwrap();

        let err = m.update_score(3, -1).unwrap_err();
        assert_eq!(
            err,
            ScoreBoardError::NegativeScore {
                home_score: 3,
                away_score: -1
            }
        );
        assert_eq!((m.home_score(), m.away_score()), (2, 1));

        assert!(m.update_score(-1, 0).is_err());
        assert_eq!((m.home_score(), m.away_score()), (2, 1));
    }

    #[test]
    fn test_total_score_does_not_overflow() {
        let mut m = Match::new("Mexico", "Canada").unwrap();
        m.update_score(i32::MAX, i32::MAX).unwrap();
        assert_eq!(m.total_score(), 2 * i32::MAX as u64);
    }

    #[test]
    fn test_involves_ignores_case() {
        let m = Match::new("Poland", "Spain").unwrap();
        assert!(m.involves("POLAND"));
        assert!(m.involves("spain"));
        assert!(!m.involves("Italy"));
    }

    #[test]
    fn test_display() {
        let mut m = Match::new("Spain", "Brazil").unwrap();
        m.update_score(10, 2).unwrap();
        assert_eq!(m.to_string(), "Spain 10 - Brazil 2");
    }
}
