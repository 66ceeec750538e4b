// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The league session.
//!
//! A session owns the storage handle, the current league (if any) and
//! whether the creation form is showing. It loads the stored league when
//! opened and saves after every change, so storage always mirrors the
//! session's league.
//!
//! ## State
//!
//! - No league stored: the session opens in creation mode.
//! - League stored: the session opens showing that league.
//! - Creating a league replaces the current one and leaves creation mode.
//! - Resetting clears storage and returns to creation mode.

use league_table::MatchUpdateOutcome;
use league_table_domain::{IdGenerator, League, RandomIdGenerator};
use league_table_persistence::{Persistence, PersistenceError};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::{ApiError, translate_persistence_error};
use crate::handlers::{
    apply_score_update, build_league, build_league_summary, build_league_table,
    league_to_response, match_to_response,
};
use crate::request_response::{
    CreateLeagueRequest, LeagueResponse, LeagueSummaryResponse, MatchResponse,
    SessionStateResponse, TableEntryResponse, UpdateMatchScoreRequest, UpdateMatchScoreResponse,
};

/// A single-writer league session over durable storage.
pub struct LeagueSession {
    persistence: Persistence,
    ids: Box<dyn IdGenerator + Send>,
    league: Option<League>,
    is_creating_league: bool,
}

impl LeagueSession {
    /// Opens a session, loading any stored league.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn open(persistence: Persistence) -> Result<Self, ApiError> {
        Self::open_with_ids(persistence, Box::new(RandomIdGenerator::new()))
    }

    /// Opens a session with a specific identifier source.
    ///
    /// A stored record that cannot be decoded is logged and ignored; the
    /// session opens in creation mode and the record is overwritten by the
    /// next save.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn open_with_ids(
        mut persistence: Persistence,
        ids: Box<dyn IdGenerator + Send>,
    ) -> Result<Self, ApiError> {
        let league: Option<League> = match persistence.get_stored_league() {
            Ok(league) => league,
            Err(PersistenceError::SerializationError(reason)) => {
                warn!(%reason, "Ignoring unreadable stored league");
                None
            }
            Err(err) => return Err(translate_persistence_error(err)),
        };

        match &league {
            Some(l) => info!(league_id = %l.id, name = %l.name, "Loaded stored league"),
            None => info!("No stored league, starting in creation mode"),
        }

        let is_creating_league: bool = league.is_none();
        Ok(Self {
            persistence,
            ids,
            league,
            is_creating_league,
        })
    }

    /// Returns the current league.
    #[must_use]
    pub const fn league(&self) -> Option<&League> {
        self.league.as_ref()
    }

    /// Returns whether the creation form should be shown.
    #[must_use]
    pub const fn is_creating_league(&self) -> bool {
        self.is_creating_league
    }

    /// Returns the session state for display.
    #[must_use]
    pub fn state(&self) -> SessionStateResponse {
        SessionStateResponse {
            league: self.league.as_ref().map(league_to_response),
            is_creating_league: self.is_creating_league,
        }
    }

    /// Enters creation mode without discarding the current league.
    pub fn start_league_creation(&mut self) {
        self.is_creating_league = true;
    }

    /// Leaves creation mode and returns to the current league.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no league to return to.
    pub fn cancel_league_creation(&mut self) -> Result<(), ApiError> {
        if self.league.is_none() {
            return Err(ApiError::Conflict {
                message: String::from("There is no league to return to"),
            });
        }
        self.is_creating_league = false;
        Ok(())
    }

    /// Creates a league, replacing the current one, and saves it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or the league cannot be saved.
    pub fn create_league(
        &mut self,
        request: &CreateLeagueRequest,
        now: OffsetDateTime,
    ) -> Result<LeagueResponse, ApiError> {
        let league: League = build_league(self.ids.as_mut(), request, now)?;
        self.persistence
            .save_league(&league)
            .map_err(translate_persistence_error)?;

        info!(
            league_id = %league.id,
            name = %league.name,
            format = %league.format,
            teams = league.teams.len(),
            matches = league.matches.len(),
            "League created"
        );

        let response: LeagueResponse = league_to_response(&league);
        self.league = Some(league);
        self.is_creating_league = false;
        Ok(response)
    }

    /// Records or clears a match result and saves the league.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There is no current league
    /// - The score pair is partial
    /// - The match does not exist
    /// - The league cannot be saved
    pub fn update_match_score(
        &mut self,
        request: &UpdateMatchScoreRequest,
    ) -> Result<UpdateMatchScoreResponse, ApiError> {
        let league: League = self.league.clone().ok_or_else(no_league)?;

        let MatchUpdateOutcome {
            league,
            completed_now,
        } = apply_score_update(league, request)?;

        self.persistence
            .save_league(&league)
            .map_err(translate_persistence_error)?;

        let updated: MatchResponse = league
            .matches
            .iter()
            .find(|m| m.id.as_str() == request.match_id)
            .map(|m| match_to_response(&league, m))
            .ok_or_else(|| ApiError::Internal {
                message: format!("Match '{}' vanished after update", request.match_id),
            })?;

        let message: String = if updated.is_completed {
            info!(match_id = %request.match_id, "Match result saved");
            String::from("The match result has been recorded.")
        } else {
            info!(match_id = %request.match_id, "Match result cleared");
            String::from("The match result has been cleared.")
        };
        if completed_now {
            info!(league_id = %league.id, "League complete");
        }

        let response: UpdateMatchScoreResponse = UpdateMatchScoreResponse {
            updated_match: updated,
            is_complete: league.is_complete,
            completed_now,
            message,
        };
        self.league = Some(league);
        Ok(response)
    }

    /// Returns the standings of the current league, or an empty table.
    #[must_use]
    pub fn league_table(&self) -> Vec<TableEntryResponse> {
        self.league
            .as_ref()
            .map(build_league_table)
            .unwrap_or_default()
    }

    /// Returns the summary of the current league.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no current league.
    pub fn league_summary(&self) -> Result<LeagueSummaryResponse, ApiError> {
        self.league
            .as_ref()
            .map(build_league_summary)
            .ok_or_else(no_league)
    }

    /// Discards the current league and clears storage.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be cleared.
    pub fn reset_league(&mut self) -> Result<(), ApiError> {
        self.persistence
            .clear_stored_league()
            .map_err(translate_persistence_error)?;
        self.league = None;
        self.is_creating_league = true;
        info!("League reset");
        Ok(())
    }
}

fn no_league() -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("League"),
        message: String::from("No league has been created"),
    }
}
