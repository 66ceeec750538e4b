// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Standings computation.
//!
//! The table is rebuilt from the match list on every call; nothing is
//! cached between calls.
//!
//! ## Ordering Rules
//!
//! Entries are ordered by:
//! 1. Points (most first)
//! 2. Goal difference (largest first)
//! 3. Goals scored (most first)
//! 4. Team name (collated with the root locale)
//!
//! Any tie left after these rules keeps the teams' league order, since
//! the sort is stable.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

use crate::types::{League, Match, Score, TableEntry};

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

static NAME_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default()).ok()
});

/// Computes the sorted standings table for a league.
///
/// Only completed matches count. A match naming a team that is not in the
/// league is skipped entirely.
#[must_use]
pub fn calculate_league_table(league: &League) -> Vec<TableEntry> {
    let mut entries: Vec<TableEntry> = league.teams.iter().map(TableEntry::for_team).collect();

    for m in &league.matches {
        if let Some(score) = m.result {
            apply_result(&mut entries, m, score);
        }
    }

    entries.sort_by(compare_entries);
    entries
}

fn apply_result(entries: &mut [TableEntry], m: &Match, score: Score) {
    let home_index: Option<usize> = entries.iter().position(|e| e.team_id == m.home_team_id);
    let away_index: Option<usize> = entries.iter().position(|e| e.team_id == m.away_team_id);

    let (Some(home_index), Some(away_index)) = (home_index, away_index) else {
        return;
    };

    record_side(&mut entries[home_index], score.home, score.away);
    record_side(&mut entries[away_index], score.away, score.home);
}

/// Adds one side of a result to that team's entry.
fn record_side(entry: &mut TableEntry, scored: u32, conceded: u32) {
    entry.played += 1;
    // Totals are wider than a single score.
    entry.goals_for += u64::from(scored);
    entry.goals_against += u64::from(conceded);
    entry.goal_difference += i64::from(scored) - i64::from(conceded);

    match scored.cmp(&conceded) {
        Ordering::Greater => {
            entry.won += 1;
            entry.points += POINTS_FOR_WIN;
        }
        Ordering::Less => entry.lost += 1,
        Ordering::Equal => {
            entry.drawn += 1;
            entry.points += POINTS_FOR_DRAW;
        }
    }
}

/// Compares two table entries by the standings ordering rules.
///
/// Returns `Ordering::Less` when `a` ranks above `b`.
#[must_use]
pub fn compare_entries(a: &TableEntry, b: &TableEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| compare_team_names(&a.team_name, &b.team_name))
}

/// Compares team names with the root-locale collator.
///
/// Accented letters sort next to their base letter and case only matters
/// between otherwise equal names. Names the collator treats as equal fall
/// back to a plain comparison so the result is still a total order.
#[must_use]
pub fn compare_team_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .as_ref()
        .map_or_else(
            || a.to_lowercase().cmp(&b.to_lowercase()),
            |collator| collator.compare(a, b),
        )
        .then_with(|| a.cmp(b))
}
