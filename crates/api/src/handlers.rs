// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stateless API operations.
//!
//! These functions validate requests, call into the core and shape the
//! results for the presentation layer. They never touch storage; the
//! session decides when to load and save.

use league_table::{
    CreateLeague, LeagueLifecycle, MatchUpdate, MatchUpdateOutcome, create_new_league,
    get_team_by_id, record_match_update,
};
use league_table_domain::{
    FormatTag, IdGenerator, Identifier, League, Match, TableEntry, Team, TeamEntry,
    calculate_league_table, validate_team_entries,
};
use time::OffsetDateTime;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CreateLeagueRequest, FormatResponse, LeagueResponse, LeagueSummaryResponse, MatchResponse,
    TableEntryResponse, TeamResponse, UpdateMatchScoreRequest,
};

/// Builds a new league from a creation request.
///
/// Team identifiers are drawn first, in entry order, followed by the league
/// identifier and then one identifier per generated match.
///
/// # Arguments
///
/// * `ids` - Source of identifiers
/// * `request` - The creation request
/// * `now` - The creation timestamp
///
/// # Errors
///
/// Returns an error if:
/// - The format tag is not recognized
/// - Fewer than two or more than twenty teams have a name
pub fn build_league<G>(
    ids: &mut G,
    request: &CreateLeagueRequest,
    now: OffsetDateTime,
) -> Result<League, ApiError>
where
    G: IdGenerator + ?Sized,
{
    let format: FormatTag = request
        .format
        .parse::<FormatTag>()
        .map_err(translate_domain_error)?;
    let entries: Vec<TeamEntry> =
        validate_team_entries(&request.teams).map_err(translate_domain_error)?;

    let teams: Vec<Team> = entries
        .iter()
        .map(|entry| Team::new(ids.generate_id(), &entry.name, &entry.owner))
        .collect();

    let command: CreateLeague = CreateLeague {
        name: request.name.clone(),
        teams,
        format,
    };

    Ok(create_new_league(ids, command, now))
}

/// Applies a score update to a league.
///
/// The match is treated as played when both scores are present.
///
/// # Errors
///
/// Returns an error if:
/// - Exactly one score is present
/// - No match has the requested identifier
pub fn apply_score_update(
    league: League,
    request: &UpdateMatchScoreRequest,
) -> Result<MatchUpdateOutcome, ApiError> {
    let update: MatchUpdate = MatchUpdate {
        match_id: Identifier::new(request.match_id.as_str()),
        home_score: request.home_score,
        away_score: request.away_score,
        is_completed: request.home_score.is_some() && request.away_score.is_some(),
    };

    record_match_update(league, &update).map_err(translate_core_error)
}

/// Converts a match to its API representation.
#[must_use]
pub fn match_to_response(league: &League, m: &Match) -> MatchResponse {
    MatchResponse {
        id: m.id.to_string(),
        home_team_id: m.home_team_id.to_string(),
        home_team_name: get_team_by_id(league, &m.home_team_id).map(|t| t.name.clone()),
        away_team_id: m.away_team_id.to_string(),
        away_team_name: get_team_by_id(league, &m.away_team_id).map(|t| t.name.clone()),
        home_score: m.home_score(),
        away_score: m.away_score(),
        is_completed: m.is_completed(),
        round: m.round,
    }
}

/// Converts a league to its API representation.
#[must_use]
pub fn league_to_response(league: &League) -> LeagueResponse {
    LeagueResponse {
        id: league.id.to_string(),
        name: league.name.clone(),
        format: league.format.to_string(),
        format_label: league.format.label().to_string(),
        teams: league
            .teams
            .iter()
            .map(|t| TeamResponse {
                id: t.id.to_string(),
                name: t.name.clone(),
                owner: t.owner.clone(),
            })
            .collect(),
        pending_matches: league
            .pending_matches()
            .into_iter()
            .map(|m| match_to_response(league, m))
            .collect(),
        completed_matches: league
            .completed_matches()
            .into_iter()
            .map(|m| match_to_response(league, m))
            .collect(),
        created_at: league.created_at,
        is_complete: league.is_complete,
    }
}

/// Computes the standings table with 1-based positions.
#[must_use]
pub fn build_league_table(league: &League) -> Vec<TableEntryResponse> {
    calculate_league_table(league)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| table_entry_to_response(index + 1, entry))
        .collect()
}

fn table_entry_to_response(position: usize, entry: TableEntry) -> TableEntryResponse {
    TableEntryResponse {
        position,
        team_id: entry.team_id.to_string(),
        team_name: entry.team_name,
        owner: entry.owner,
        played: entry.played,
        won: entry.won,
        drawn: entry.drawn,
        lost: entry.lost,
        goals_for: entry.goals_for,
        goals_against: entry.goals_against,
        goal_difference: entry.goal_difference,
        points: entry.points,
    }
}

/// Summarizes a league for display in a header.
#[must_use]
pub fn build_league_summary(league: &League) -> LeagueSummaryResponse {
    LeagueSummaryResponse {
        id: league.id.to_string(),
        name: league.name.clone(),
        format_label: league.format.label().to_string(),
        team_count: league.teams.len(),
        played_matches: league.completed_matches().len(),
        total_matches: league.matches.len(),
        lifecycle: LeagueLifecycle::of(league).to_string(),
    }
}

/// Lists every supported format with its label.
#[must_use]
pub fn list_formats() -> Vec<FormatResponse> {
    FormatTag::ALL
        .iter()
        .map(|format| FormatResponse {
            tag: format.as_str().to_string(),
            label: format.label().to_string(),
        })
        .collect()
}
