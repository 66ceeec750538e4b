// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod fixtures;
mod ids;
mod standings;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use fixtures::generate_matches;
pub use ids::{ID_LENGTH, IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use standings::{calculate_league_table, compare_entries, compare_team_names};

// Re-export public types
pub use types::{FormatTag, Identifier, League, Match, Score, TableEntry, Team, TeamEntry};
pub use validation::{
    MAX_TEAMS, MIN_TEAMS, default_league_name, resolve_league_name, validate_score_pair,
    validate_team_entries,
};
