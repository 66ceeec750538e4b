// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_table_domain::{FormatTag, Identifier, Team};

/// Request to create a league, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLeague {
    /// The league name. Blank or absent names get a dated placeholder.
    pub name: Option<String>,
    /// Teams in the order they were entered. At least two are expected;
    /// the caller validates this before creating the league.
    pub teams: Vec<Team>,
    /// The fixture format.
    pub format: FormatTag,
}

/// Request to record or clear a match result, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchUpdate {
    /// The match to update.
    pub match_id: Identifier,
    /// The home score, absent when clearing the result.
    pub home_score: Option<u32>,
    /// The away score, absent when clearing the result.
    pub away_score: Option<u32>,
    /// Whether the match has been played.
    pub is_completed: bool,
}

impl MatchUpdate {
    /// A completed result.
    #[must_use]
    pub const fn completed(match_id: Identifier, home_score: u32, away_score: u32) -> Self {
        Self {
            match_id,
            home_score: Some(home_score),
            away_score: Some(away_score),
            is_completed: true,
        }
    }

    /// Clears a previously recorded result.
    #[must_use]
    pub const fn cleared(match_id: Identifier) -> Self {
        Self {
            match_id,
            home_score: None,
            away_score: None,
            is_completed: false,
        }
    }
}
