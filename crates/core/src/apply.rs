// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League lifecycle operations.
//!
//! Every operation takes the league by value (or by reference for reads)
//! and returns a new league. Nothing here performs I/O; persisting the
//! returned league is the caller's job.

use crate::command::{CreateLeague, MatchUpdate};
use crate::error::CoreError;
use crate::state::MatchUpdateOutcome;
use league_table_domain::{
    IdGenerator, Identifier, League, Match, Score, Team, generate_matches, resolve_league_name,
    validate_score_pair,
};
use time::OffsetDateTime;
use tracing::debug;

/// Creates a new league and generates its fixtures.
///
/// # Arguments
///
/// * `ids` - Source of identifiers for the league and its matches
/// * `command` - The league name, teams and format
/// * `now` - The creation timestamp
///
/// The team count is not re-validated here; fewer than two teams simply
/// yields a league without matches.
pub fn create_new_league<G>(ids: &mut G, command: CreateLeague, now: OffsetDateTime) -> League
where
    G: IdGenerator + ?Sized,
{
    let CreateLeague {
        name,
        teams,
        format,
    } = command;

    let id: Identifier = ids.generate_id();
    let name: String = resolve_league_name(name.as_deref(), now.date());
    let matches: Vec<Match> = generate_matches(&teams, format, ids);

    debug!(
        league_id = %id,
        format = %format,
        teams = teams.len(),
        matches = matches.len(),
        "Created league"
    );

    League {
        id,
        name,
        format,
        teams,
        matches,
        created_at: now,
        is_complete: false,
    }
}

/// Records or clears a match result.
///
/// The matching match gets its scores and completion replaced; every other
/// match and field is carried over unchanged. `is_complete` is recomputed
/// as part of the same update.
///
/// # Errors
///
/// Returns an error if:
/// - No match in the league has `update.match_id`
/// - The scores do not agree with `update.is_completed` (exactly one score,
///   a completed match without scores, or scores on an unplayed match)
pub fn update_match(league: League, update: &MatchUpdate) -> Result<League, CoreError> {
    let result: Option<Score> =
        validate_score_pair(update.home_score, update.away_score, update.is_completed)?;

    if league.find_match(&update.match_id).is_none() {
        return Err(CoreError::MatchNotFound(update.match_id.clone()));
    }

    let matches: Vec<Match> = league
        .matches
        .into_iter()
        .map(|m| {
            if m.id == update.match_id {
                m.with_result(result)
            } else {
                m
            }
        })
        .collect();

    let is_complete: bool = matches.iter().all(Match::is_completed);

    debug!(
        match_id = %update.match_id,
        completed = update.is_completed,
        league_complete = is_complete,
        "Updated match"
    );

    Ok(League {
        matches,
        is_complete,
        ..league
    })
}

/// Applies a match update and reports whether it completed the league.
///
/// # Errors
///
/// Returns the same errors as `update_match`.
pub fn record_match_update(
    league: League,
    update: &MatchUpdate,
) -> Result<MatchUpdateOutcome, CoreError> {
    let was_complete: bool = check_league_completion(&league);
    let league: League = update_match(league, update)?;
    let completed_now: bool = !was_complete && league.is_complete;

    Ok(MatchUpdateOutcome {
        league,
        completed_now,
    })
}

/// Returns whether every match in the league has been completed.
///
/// For any league with at least one match this agrees with the
/// `is_complete` flag maintained by `update_match`.
#[must_use]
pub fn check_league_completion(league: &League) -> bool {
    league.all_matches_completed()
}

/// Looks up a team by identifier.
#[must_use]
pub fn get_team_by_id<'a>(league: &'a League, team_id: &Identifier) -> Option<&'a Team> {
    league.teams.iter().find(|team| &team.id == team_id)
}
