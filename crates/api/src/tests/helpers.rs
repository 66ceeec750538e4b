// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use league_table_domain::{SequentialIdGenerator, TeamEntry};
use league_table_persistence::Persistence;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{CreateLeagueRequest, LeagueSession, UpdateMatchScoreRequest};

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2026-05-17 20:00 UTC)
}

pub fn create_test_request(names: &[&str], format: &str) -> CreateLeagueRequest {
    CreateLeagueRequest {
        name: Some(String::from("Friday Night League")),
        teams: names
            .iter()
            .map(|name| TeamEntry::new(name, "Owner"))
            .collect(),
        format: String::from(format),
    }
}

pub fn create_score_request(
    match_id: &str,
    home_score: Option<u32>,
    away_score: Option<u32>,
) -> UpdateMatchScoreRequest {
    UpdateMatchScoreRequest {
        match_id: String::from(match_id),
        home_score,
        away_score,
    }
}

/// Opens a session over a fresh in-memory database with ids `id-1`, `id-2`, ...
pub fn create_test_session() -> LeagueSession {
    let persistence: Persistence = Persistence::new_in_memory().unwrap();
    LeagueSession::open_with_ids(persistence, Box::new(SequentialIdGenerator::new("id")))
        .unwrap()
}
