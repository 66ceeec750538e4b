// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The format tag is not one of the supported league formats.
    UnknownFormat(String),
    /// Fewer named teams than a league requires.
    NotEnoughTeams {
        /// The number of named teams supplied.
        found: usize,
        /// The minimum number of teams.
        minimum: usize,
    },
    /// More teams than a league allows.
    TooManyTeams {
        /// The number of named teams supplied.
        found: usize,
        /// The maximum number of teams.
        maximum: usize,
    },
    /// Exactly one of the two scores was supplied.
    PartialScore {
        /// The home score as supplied.
        home_score: Option<u32>,
        /// The away score as supplied.
        away_score: Option<u32>,
    },
    /// A match was marked completed without any scores.
    MissingScore,
    /// Scores were supplied for a match that is not marked completed.
    ScoreOnIncompleteMatch,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFormat(tag) => write!(f, "Unknown league format: '{tag}'"),
            Self::NotEnoughTeams { found, minimum } => {
                write!(
                    f,
                    "A league needs at least {minimum} teams with names, got {found}"
                )
            }
            Self::TooManyTeams { found, maximum } => {
                write!(f, "A league allows at most {maximum} teams, got {found}")
            }
            Self::PartialScore {
                home_score,
                away_score,
            } => {
                write!(
                    f,
                    "Both scores must be present or both absent (home: {}, away: {})",
                    display_score(*home_score),
                    display_score(*away_score)
                )
            }
            Self::MissingScore => write!(f, "A completed match must have both scores"),
            Self::ScoreOnIncompleteMatch => {
                write!(f, "An incomplete match cannot carry scores")
            }
        }
    }
}

impl std::error::Error for DomainError {}

fn display_score(score: Option<u32>) -> String {
    score.map_or_else(|| String::from("-"), |value| value.to_string())
}
