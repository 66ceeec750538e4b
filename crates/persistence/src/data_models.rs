// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stored representation of a league.
//!
//! The JSON shape uses camelCase field names and keeps each match's
//! `homeScore`, `awayScore` and `isCompleted` fields explicit, so an
//! unplayed match stores `null` scores rather than zeros.

use league_table_domain::{FormatTag, Identifier, League, Match, Team, validate_score_pair};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::PersistenceError;

/// Serializable representation of a `Match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    /// The match identifier.
    pub id: Identifier,
    /// The home team's identifier.
    pub home_team_id: Identifier,
    /// The away team's identifier.
    pub away_team_id: Identifier,
    /// Goals scored by the home team, `null` until played.
    pub home_score: Option<u32>,
    /// Goals scored by the away team, `null` until played.
    pub away_score: Option<u32>,
    /// Whether the result has been recorded.
    pub is_completed: bool,
    /// Round tag for formats that split fixtures into rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
}

/// Serializable representation of a `League`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueData {
    /// The league identifier.
    pub id: Identifier,
    /// The league's display name.
    pub name: String,
    /// The league format tag.
    pub format: FormatTag,
    /// Teams in entry order.
    pub teams: Vec<Team>,
    /// Matches in generation order.
    pub matches: Vec<MatchData>,
    /// Creation time as an RFC 3339 string.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Whether every match has been played.
    pub is_complete: bool,
}

impl From<&Match> for MatchData {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id.clone(),
            home_team_id: m.home_team_id.clone(),
            away_team_id: m.away_team_id.clone(),
            home_score: m.home_score(),
            away_score: m.away_score(),
            is_completed: m.is_completed(),
            round: m.round,
        }
    }
}

impl TryFrom<MatchData> for Match {
    type Error = PersistenceError;

    fn try_from(data: MatchData) -> Result<Self, Self::Error> {
        let result = validate_score_pair(data.home_score, data.away_score, data.is_completed)
            .map_err(|e| {
                PersistenceError::SerializationError(format!("Invalid match '{}': {e}", data.id))
            })?;

        Ok(Self::new(data.id, data.home_team_id, data.away_team_id, data.round).with_result(result))
    }
}

impl From<&League> for LeagueData {
    fn from(league: &League) -> Self {
        Self {
            id: league.id.clone(),
            name: league.name.clone(),
            format: league.format,
            teams: league.teams.clone(),
            matches: league.matches.iter().map(MatchData::from).collect(),
            created_at: league.created_at,
            is_complete: league.is_complete,
        }
    }
}

impl TryFrom<LeagueData> for League {
    type Error = PersistenceError;

    fn try_from(data: LeagueData) -> Result<Self, Self::Error> {
        let matches: Vec<Match> = data
            .matches
            .into_iter()
            .map(Match::try_from)
            .collect::<Result<Vec<Match>, PersistenceError>>()?;

        // A league without fixtures is never played out, so either flag is accepted.
        let all_completed: bool = matches.iter().all(Match::is_completed);
        if !matches.is_empty() && data.is_complete != all_completed {
            return Err(PersistenceError::SerializationError(format!(
                "Invalid league '{}': isComplete is {} but {} of {} matches are played",
                data.id,
                data.is_complete,
                matches.iter().filter(|m| m.is_completed()).count(),
                matches.len()
            )));
        }

        Ok(Self {
            id: data.id,
            name: data.name,
            format: data.format,
            teams: data.teams,
            matches,
            created_at: data.created_at,
            is_complete: data.is_complete,
        })
    }
}

/// Encodes a league as its stored JSON form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_league(league: &League) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&LeagueData::from(league))?)
}

/// Decodes a league from its stored JSON form.
///
/// # Errors
///
/// Returns an error if:
/// - The JSON is malformed
/// - A match carries an inconsistent score and completion state
/// - The league's completion flag disagrees with its matches
pub fn decode_league(value_json: &str) -> Result<League, PersistenceError> {
    let data: LeagueData = serde_json::from_str(value_json)?;
    League::try_from(data)
}
