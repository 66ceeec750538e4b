// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the league table tracker.
//!
//! Requests arrive as plain DTOs, are validated here and translated into
//! core calls. Errors from lower layers are translated explicitly into
//! `ApiError` so that domain and storage types never leak outward.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    apply_score_update, build_league, build_league_summary, build_league_table,
    league_to_response, list_formats, match_to_response,
};
pub use request_response::{
    CreateLeagueRequest, FormatResponse, LeagueResponse, LeagueSummaryResponse, MatchResponse,
    SessionStateResponse, TableEntryResponse, TeamResponse, UpdateMatchScoreRequest,
    UpdateMatchScoreResponse,
};
pub use session::LeagueSession;
