// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Score, TeamEntry};
use time::Date;

/// Minimum number of named teams in a league.
pub const MIN_TEAMS: usize = 2;

/// Maximum number of teams in a league.
pub const MAX_TEAMS: usize = 20;

/// Validates the teams entered for a new league.
///
/// Names and owners are trimmed and entries with a blank name are dropped,
/// so unfilled rows do not count as teams. Team names are not required to
/// be unique.
///
/// # Arguments
///
/// * `entries` - The teams as entered, in order
///
/// # Returns
///
/// The cleaned entries, in their original order.
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than `MIN_TEAMS` entries have a name
/// - More than `MAX_TEAMS` entries have a name
pub fn validate_team_entries(entries: &[TeamEntry]) -> Result<Vec<TeamEntry>, DomainError> {
    let named: Vec<TeamEntry> = entries
        .iter()
        .filter(|entry| !entry.name.trim().is_empty())
        .map(|entry| TeamEntry::new(entry.name.trim(), entry.owner.trim()))
        .collect();

    if named.len() < MIN_TEAMS {
        return Err(DomainError::NotEnoughTeams {
            found: named.len(),
            minimum: MIN_TEAMS,
        });
    }

    if named.len() > MAX_TEAMS {
        return Err(DomainError::TooManyTeams {
            found: named.len(),
            maximum: MAX_TEAMS,
        });
    }

    Ok(named)
}

/// Returns the placeholder name used when a league is created without one.
#[must_use]
pub fn default_league_name(date: Date) -> String {
    format!("League {date}")
}

/// Returns the trimmed league name, or the placeholder when it is blank.
#[must_use]
pub fn resolve_league_name(name: Option<&str>, date: Date) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => default_league_name(date),
    }
}

/// Validates a score pair against the completion flag.
///
/// Scores are either both present on a completed match or both absent on
/// an unplayed one.
///
/// # Returns
///
/// * `Ok(Some(Score))` for a completed match
/// * `Ok(None)` for an unplayed match
///
/// # Errors
///
/// Returns an error if:
/// - Exactly one score is present
/// - The match is completed but has no scores
/// - The match is not completed but has scores
pub fn validate_score_pair(
    home_score: Option<u32>,
    away_score: Option<u32>,
    is_completed: bool,
) -> Result<Option<Score>, DomainError> {
    match (home_score, away_score, is_completed) {
        (Some(home), Some(away), true) => Ok(Some(Score::new(home, away))),
        (None, None, false) => Ok(None),
        (Some(_), None, _) | (None, Some(_), _) => Err(DomainError::PartialScore {
            home_score,
            away_score,
        }),
        (None, None, true) => Err(DomainError::MissingScore),
        (Some(_), Some(_), false) => Err(DomainError::ScoreOnIncompleteMatch),
    }
}
