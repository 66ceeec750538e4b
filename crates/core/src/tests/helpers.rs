// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_table_domain::{FormatTag, Identifier, League, SequentialIdGenerator, Team};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{CreateLeague, MatchUpdate, create_new_league, update_match};

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2026-10-19 18:30 UTC)
}

pub fn create_test_teams(names: &[&str]) -> Vec<Team> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Team::new(Identifier::new(format!("team-{}", i + 1)), name, "Owner"))
        .collect()
}

/// Creates a league with deterministic ids: `league-1` for the league,
/// then `league-2`, `league-3`, ... for matches in generation order.
pub fn create_test_league(names: &[&str], format: FormatTag) -> League {
    let mut ids = SequentialIdGenerator::new("league");
    let command = CreateLeague {
        name: Some(String::from("Test League")),
        teams: create_test_teams(names),
        format,
    };
    create_new_league(&mut ids, command, create_test_time())
}

/// Records the same score for every match in the league.
pub fn complete_all_matches(league: League, home: u32, away: u32) -> League {
    let ids: Vec<Identifier> = league.matches.iter().map(|m| m.id.clone()).collect();
    ids.into_iter().fold(league, |league, id| {
        update_match(league, &MatchUpdate::completed(id, home, away)).unwrap()
    })
}
