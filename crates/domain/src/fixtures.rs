// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture generation.
//!
//! Teams are indexed `0..n` in input order. For each format:
//!
//! - `round-robin-single`: one match per pair `i < j`, `i` at home, no round
//! - `round-robin-double`: one match per ordered pair `i != j`, no round
//! - `best-of-2`: per pair `i < j`, `i` hosts round 1 then `j` hosts round 2
//! - `home-away`: one match per ordered pair, round 1 when `i < j` else round 2
//!
//! `home-away` yields the same pairings as `round-robin-double`; only the
//! round tags differ.
//!
//! Fewer than two teams produce no matches.

use crate::ids::IdGenerator;
use crate::types::{FormatTag, Match, Team};

/// Generates the complete fixture list for a league.
///
/// All matches start unplayed.
///
/// # Arguments
///
/// * `teams` - Teams in input order
/// * `format` - The league format
/// * `ids` - Source of match identifiers
pub fn generate_matches<G>(teams: &[Team], format: FormatTag, ids: &mut G) -> Vec<Match>
where
    G: IdGenerator + ?Sized,
{
    let mut matches: Vec<Match> = Vec::with_capacity(format.expected_match_count(teams.len()));

    match format {
        FormatTag::RoundRobinSingle => {
            for (i, home) in teams.iter().enumerate() {
                for away in &teams[i + 1..] {
                    matches.push(create_match(ids, home, away, None));
                }
            }
        }
        FormatTag::RoundRobinDouble => {
            for (i, home) in teams.iter().enumerate() {
                for (j, away) in teams.iter().enumerate() {
                    if i != j {
                        matches.push(create_match(ids, home, away, None));
                    }
                }
            }
        }
        FormatTag::BestOfTwo => {
            for (i, first) in teams.iter().enumerate() {
                for second in &teams[i + 1..] {
                    matches.push(create_match(ids, first, second, Some(1)));
                    matches.push(create_match(ids, second, first, Some(2)));
                }
            }
        }
        FormatTag::HomeAway => {
            for (i, home) in teams.iter().enumerate() {
                for (j, away) in teams.iter().enumerate() {
                    if i != j {
                        let round: u32 = if i < j { 1 } else { 2 };
                        matches.push(create_match(ids, home, away, Some(round)));
                    }
                }
            }
        }
    }

    matches
}

fn create_match<G>(ids: &mut G, home: &Team, away: &Team, round: Option<u32>) -> Match
where
    G: IdGenerator + ?Sized,
{
    Match::new(ids.generate_id(), home.id.clone(), away.id.clone(), round)
}
