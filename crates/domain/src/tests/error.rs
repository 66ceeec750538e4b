// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MAX_TEAMS, MIN_TEAMS};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::UnknownFormat(String::from("knockout"));
    assert_eq!(format!("{err}"), "Unknown league format: 'knockout'");

    let err: DomainError = DomainError::NotEnoughTeams {
        found: 1,
        minimum: MIN_TEAMS,
    };
    assert_eq!(
        format!("{err}"),
        "A league needs at least 2 teams with names, got 1"
    );

    let err: DomainError = DomainError::TooManyTeams {
        found: 21,
        maximum: MAX_TEAMS,
    };
    assert_eq!(format!("{err}"), "A league allows at most 20 teams, got 21");

    let err: DomainError = DomainError::PartialScore {
        home_score: Some(2),
        away_score: None,
    };
    assert_eq!(
        format!("{err}"),
        "Both scores must be present or both absent (home: 2, away: -)"
    );

    let err: DomainError = DomainError::MissingScore;
    assert_eq!(format!("{err}"), "A completed match must have both scores");

    let err: DomainError = DomainError::ScoreOnIncompleteMatch;
    assert_eq!(format!("{err}"), "An incomplete match cannot carry scores");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::MissingScore);
    assert_eq!(err.to_string(), "A completed match must have both scores");
}
