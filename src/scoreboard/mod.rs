//! In-memory registry of live matches.
//!
//! Matches are keyed by [`MatchKey`], so a pair of teams resolves to the same
//! entry regardless of which side is home.  Each start is stamped with a
//! monotonic sequence number that drives the summary tie-break.

pub mod match_key;
pub mod models;

pub use match_key::MatchKey;
pub use models::{Match, MAX_TEAM_NAME_LEN};

use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::error::{Result, ScoreBoardError, TeamNameIssue};

/// An active match together with its start order.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    game: Match,
}

/// Scoreboard of currently running matches.
///
/// Not synchronised; callers sharing one board across threads must guard it
/// with a single lock.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    games: HashMap<MatchKey, Entry>,
    next_seq: u64,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new match at 0–0.
    ///
    /// Checks, in order: the pair is not already playing (in either order),
    /// both names are letters only, neither team is busy (home first), and
    /// finally the match-level name rules.
    pub fn start_game(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        let key = MatchKey::new(home_team, away_team);

        if self.games.contains_key(&key) {
            return Err(ScoreBoardError::GameExists {
                home_team: home_team.to_string(),
                away_team: away_team.to_string(),
            });
        }

        for name in [home_team, away_team] {
            if !is_letters_only(name) {
                return Err(ScoreBoardError::invalid_name(name, TeamNameIssue::NotLetters));
            }
        }

        for name in [home_team, away_team] {
            if self.is_team_busy(name) {
                return Err(ScoreBoardError::TeamBusy {
                    team: name.to_string(),
                });
            }
        }

        let game = Match::new(home_team, away_team)?;
        let seq = self.next_seq;
        self.next_seq += 1;

        info!("Game started: {} vs {} (key={}, seq={})", home_team, away_team, key, seq);
        self.games.insert(key, Entry { seq, game });
        Ok(())
    }

    /// Remove a running match, returning its final state.
    ///
    /// Teams may be given in either order.  A blank team name is reported as
    /// [`ScoreBoardError::GameNotFound`] without a lookup.
    pub fn finish_game(&mut self, home_team: &str, away_team: &str) -> Result<Match> {
        let key = lookup_key(home_team, away_team)?;
        let entry = self
            .games
            .remove(&key)
            .ok_or_else(|| ScoreBoardError::not_found(home_team, away_team))?;

        info!("Game finished: {}", entry.game);
        Ok(entry.game)
    }

    /// Set the score of a running match.
    ///
    /// The match is found regardless of team order, but the scores are
    /// positional: `home_score` is always stored against the home side the
    /// match was started with, whichever team is named first here.  Calling
    /// `update_score("Spain", "Poland", 2, 1)` on Poland vs Spain records
    /// Poland 2 - Spain 1.  A blank team name is reported as
    /// [`ScoreBoardError::GameNotFound`].
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        let key = lookup_key(home_team, away_team)?;
        let entry = self
            .games
            .get_mut(&key)
            .ok_or_else(|| ScoreBoardError::not_found(home_team, away_team))?;

        entry.game.update_score(home_score, away_score)?;
        debug!("Score updated: {}", entry.game);
        Ok(())
    }

    /// Running matches ordered by total score, highest first.  Matches with
    /// the same total are listed most recently started first.
    pub fn summary_by_total_score(&self) -> Vec<&Match> {
        let mut entries: Vec<&Entry> = self.games.values().collect();
        entries.sort_by_key(|e| (Reverse(e.game.total_score()), Reverse(e.seq)));
        entries.into_iter().map(|e| &e.game).collect()
    }

    /// Running matches in the order they were started.
    pub fn matches(&self) -> Vec<&Match> {
        let mut entries: Vec<&Entry> = self.games.values().collect();
        entries.sort_by_key(|e| e.seq);
        entries.into_iter().map(|e| &e.game).collect()
    }

    pub fn get(&self, home_team: &str, away_team: &str) -> Option<&Match> {
        self.games
            .get(&MatchKey::new(home_team, away_team))
            .map(|e| &e.game)
    }

    pub fn contains(&self, home_team: &str, away_team: &str) -> bool {
        self.get(home_team, away_team).is_some()
    }

    /// Whether `team` is playing in any running match (ASCII case-insensitive).
    pub fn is_team_busy(&self, team: &str) -> bool {
        self.games.values().any(|e| e.game.involves(team))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Full match against `[a-zA-Z]+`.
fn is_letters_only(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Key for finish/update lookups. A blank name can never refer to a running
/// match, so it is reported as not found rather than risking a key collision.
fn lookup_key(home_team: &str, away_team: &str) -> Result<MatchKey> {
    if home_team.trim().is_empty() || away_team.trim().is_empty() {
        return Err(ScoreBoardError::not_found(home_team, away_team));
    }
    Ok(MatchKey::new(home_team, away_team))
}
