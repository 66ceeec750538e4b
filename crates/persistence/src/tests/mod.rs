// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod data_model_tests;
mod initialization_tests;

use league_table::{CreateLeague, MatchUpdate, create_new_league, update_match};
use league_table_domain::{FormatTag, Identifier, League, SequentialIdGenerator, Team};
use time::macros::datetime;

pub fn create_test_teams() -> Vec<Team> {
    vec![
        Team::new(Identifier::new("t1"), "Alpha", "Ann"),
        Team::new(Identifier::new("t2"), "Beta", "Bob"),
        Team::new(Identifier::new("t3"), "Gamma", "Cat"),
    ]
}

/// Creates a three-team best-of-2 league with deterministic ids.
pub fn create_test_league() -> League {
    let mut ids = SequentialIdGenerator::new("id");
    create_new_league(
        &mut ids,
        CreateLeague {
            name: Some(String::from("Sunday League")),
            teams: create_test_teams(),
            format: FormatTag::BestOfTwo,
        },
        datetime!(2026-03-01 12:00 +1),
    )
}

/// Creates the test league with its first match played 2-0 and its
/// second drawn 0-0.
pub fn create_partly_played_league() -> League {
    let league: League = create_test_league();
    let first: Identifier = league.matches[0].id.clone();
    let second: Identifier = league.matches[1].id.clone();
    let league: League = update_match(league, &MatchUpdate::completed(first, 2, 0)).unwrap();
    update_match(league, &MatchUpdate::completed(second, 0, 0)).unwrap()
}
