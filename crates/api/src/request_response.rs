// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use league_table_domain::TeamEntry;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to create a new league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLeagueRequest {
    /// The league name. Blank or absent names get a dated placeholder.
    #[serde(default)]
    pub name: Option<String>,
    /// Teams as entered. Rows with a blank name are ignored.
    pub teams: Vec<TeamEntry>,
    /// The format tag (e.g. `round-robin-single`).
    pub format: String,
}

/// API request to record or clear a match result.
///
/// The match counts as played when both scores are present and as
/// unplayed when both are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMatchScoreRequest {
    /// The match to update.
    pub match_id: String,
    /// Goals scored by the home team.
    pub home_score: Option<u32>,
    /// Goals scored by the away team.
    pub away_score: Option<u32>,
}

/// A team as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    /// The team identifier.
    pub id: String,
    /// The team name.
    pub name: String,
    /// The team's owner.
    pub owner: String,
}

/// A match as returned by the API, with team names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    /// The match identifier.
    pub id: String,
    /// The home team identifier.
    pub home_team_id: String,
    /// The home team name, if the team exists.
    pub home_team_name: Option<String>,
    /// The away team identifier.
    pub away_team_id: String,
    /// The away team name, if the team exists.
    pub away_team_name: Option<String>,
    /// Goals scored by the home team.
    pub home_score: Option<u32>,
    /// Goals scored by the away team.
    pub away_score: Option<u32>,
    /// Whether the match has been played.
    pub is_completed: bool,
    /// The leg, for formats that tag rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
}

/// A full league as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueResponse {
    /// The league identifier.
    pub id: String,
    /// The league name.
    pub name: String,
    /// The format tag.
    pub format: String,
    /// The human-readable format label.
    pub format_label: String,
    /// Teams in creation order.
    pub teams: Vec<TeamResponse>,
    /// Matches not yet played, in generation order.
    pub pending_matches: Vec<MatchResponse>,
    /// Matches already played, in generation order.
    pub completed_matches: Vec<MatchResponse>,
    /// When the league was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Whether every match has been played.
    pub is_complete: bool,
}

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntryResponse {
    /// 1-based table position.
    pub position: usize,
    /// The team identifier.
    pub team_id: String,
    /// The team name.
    pub team_name: String,
    /// The team's owner.
    pub owner: String,
    /// Matches played.
    pub played: u32,
    /// Matches won.
    pub won: u32,
    /// Matches drawn.
    pub drawn: u32,
    /// Matches lost.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: u64,
    /// Goals conceded.
    pub goals_against: u64,
    /// Goals scored minus goals conceded.
    pub goal_difference: i64,
    /// League points.
    pub points: u32,
}

/// Header information for a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSummaryResponse {
    /// The league identifier.
    pub id: String,
    /// The league name.
    pub name: String,
    /// The human-readable format label.
    pub format_label: String,
    /// The number of teams.
    pub team_count: usize,
    /// Matches played so far.
    pub played_matches: usize,
    /// Total matches in the league.
    pub total_matches: usize,
    /// Lifecycle state (`Created`, `InProgress` or `Complete`).
    pub lifecycle: String,
}

/// The session state as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStateResponse {
    /// The current league, if one exists.
    pub league: Option<LeagueResponse>,
    /// Whether the league creation form should be shown.
    pub is_creating_league: bool,
}

/// A supported league format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResponse {
    /// The format tag.
    pub tag: String,
    /// The human-readable label.
    pub label: String,
}

/// Response for a recorded match result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMatchScoreResponse {
    /// The updated match.
    pub updated_match: MatchResponse,
    /// Whether every match has now been played.
    pub is_complete: bool,
    /// Whether this update completed the league.
    pub completed_now: bool,
    /// A success message.
    pub message: String,
}
