// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error;

use time::macros::datetime;

use crate::{FormatTag, Identifier, League, Match, Score, Team};

/// Builds teams with identifiers `t1`, `t2`, ... in the given order.
pub fn create_test_teams(names: &[&str]) -> Vec<Team> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Team::new(
                Identifier::new(format!("t{}", i + 1)),
                name,
                &format!("Owner of {name}"),
            )
        })
        .collect()
}

/// Builds a league directly from teams and matches, bypassing fixture generation.
pub fn create_test_league(teams: Vec<Team>, matches: Vec<Match>) -> League {
    let is_complete: bool = matches.iter().all(Match::is_completed);
    League {
        id: Identifier::new("league-1"),
        name: String::from("Test League"),
        format: FormatTag::RoundRobinSingle,
        teams,
        matches,
        created_at: datetime!(2026-01-01 12:00 UTC),
        is_complete,
    }
}

/// Builds a completed match between two team ids.
pub fn played(id: &str, home: &str, away: &str, home_goals: u32, away_goals: u32) -> Match {
    Match::new(
        Identifier::new(id),
        Identifier::new(home),
        Identifier::new(away),
        None,
    )
    .with_result(Some(Score::new(home_goals, away_goals)))
}

/// Builds an unplayed match between two team ids.
pub fn unplayed(id: &str, home: &str, away: &str) -> Match {
    Match::new(
        Identifier::new(id),
        Identifier::new(home),
        Identifier::new(away),
        None,
    )
}
