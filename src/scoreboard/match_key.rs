//! Canonical, order-independent identity for a pair of teams.
//!
//! Both names are upper-cased and sorted before being combined, so
//! "Poland vs Italy" and "Italy vs Poland" map to the same key.  Every ASCII
//! letter is then replaced by its alphabet position (A=1 … Z=26) and all other
//! characters are dropped:
//!
//! ```text
//! ("POLAND", "ITALY") → "ITALY" + "POLAND"
//!                     → 9 20 1 12 25 16 15 12 1 14 4
//!                     → "920112251615121144"
//! ```
//!
//! The mapping is not injective ("L" and "AB" both give "12"), so the key is a
//! practical identity for letters-only team names rather than a hash.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey(String);

impl MatchKey {
    pub fn new(home_team: &str, away_team: &str) -> Self {
        Self::from_optional(Some(home_team), Some(away_team))
    }

    /// Compute the key treating a missing team name as an empty string.
    pub fn from_optional(home_team: Option<&str>, away_team: Option<&str>) -> Self {
        let mut pair = [
            home_team.unwrap_or_default().to_uppercase(),
            away_team.unwrap_or_default().to_uppercase(),
        ];
        pair.sort();

        let id = pair
            .iter()
            .flat_map(|name| name.chars())
            .filter_map(letter_position)
            .map(|n| n.to_string())
            .collect::<String>();

        MatchKey(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based alphabet position of an upper-case ASCII letter.
fn letter_position(c: char) -> Option<u32> {
    c.is_ascii_uppercase().then(|| c as u32 - 'A' as u32 + 1)
}
