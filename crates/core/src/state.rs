// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_table_domain::League;

/// Where a league is in its life.
///
/// Valid progressions are:
/// - `Created` → `InProgress` → `Complete`
/// - `Created` → `Complete` (every match recorded in one step)
///
/// Clearing a result can move a league back from `Complete`. Removing a
/// league entirely happens outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeagueLifecycle {
    /// No match has a result yet.
    Created,
    /// Some, but not all, matches have results.
    InProgress,
    /// Every match has a result.
    Complete,
}

impl LeagueLifecycle {
    /// Derives the lifecycle state from the league's matches.
    #[must_use]
    pub fn of(league: &League) -> Self {
        let total: usize = league.matches.len();
        let completed: usize = league.matches.iter().filter(|m| m.is_completed()).count();

        if total > 0 && completed == total {
            Self::Complete
        } else if completed == 0 {
            Self::Created
        } else {
            Self::InProgress
        }
    }

    /// Converts this lifecycle state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::InProgress => "InProgress",
            Self::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for LeagueLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of applying a match update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchUpdateOutcome {
    /// The league after the update.
    pub league: League,
    /// True when this update is the one that completed the league.
    pub completed_now: bool,
}
