// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// An opaque identifier for a league, team or match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Creates an identifier from any string value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The format that controls how fixtures are generated from the team list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatTag {
    /// Every pair of teams meets once.
    #[serde(rename = "round-robin-single")]
    RoundRobinSingle,
    /// Every ordered pair of teams meets once (home and away).
    #[serde(rename = "round-robin-double")]
    RoundRobinDouble,
    /// Every pair of teams meets twice, legs tagged as rounds 1 and 2.
    #[serde(rename = "best-of-2")]
    BestOfTwo,
    /// Every ordered pair meets once, tagged round 1 or 2 by input order.
    #[serde(rename = "home-away")]
    HomeAway,
}

impl FormatTag {
    /// All supported formats, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::RoundRobinSingle,
        Self::RoundRobinDouble,
        Self::BestOfTwo,
        Self::HomeAway,
    ];

    /// Converts this format to its tag string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobinSingle => "round-robin-single",
            Self::RoundRobinDouble => "round-robin-double",
            Self::BestOfTwo => "best-of-2",
            Self::HomeAway => "home-away",
        }
    }

    /// Returns the human-readable label for this format.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RoundRobinSingle => "Round Robin (Single)",
            Self::RoundRobinDouble => "Round Robin (Double)",
            Self::BestOfTwo => "Best of 2",
            Self::HomeAway => "Home & Away",
        }
    }

    /// Returns how many matches this format produces for `team_count` teams.
    #[must_use]
    pub const fn expected_match_count(&self, team_count: usize) -> usize {
        if team_count < 2 {
            return 0;
        }
        let ordered_pairs: usize = team_count * (team_count - 1);
        match self {
            Self::RoundRobinSingle => ordered_pairs / 2,
            Self::RoundRobinDouble | Self::BestOfTwo | Self::HomeAway => ordered_pairs,
        }
    }
}

impl FromStr for FormatTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round-robin-single" => Ok(Self::RoundRobinSingle),
            "round-robin-double" => Ok(Self::RoundRobinDouble),
            "best-of-2" => Ok(Self::BestOfTwo),
            "home-away" => Ok(Self::HomeAway),
            _ => Err(DomainError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A team taking part in a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The team identifier.
    pub id: Identifier,
    /// The team's display name.
    pub name: String,
    /// The person who plays as this team.
    pub owner: String,
}

impl Team {
    /// Creates a new team.
    #[must_use]
    pub fn new(id: Identifier, name: &str, owner: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            owner: owner.to_string(),
        }
    }
}

/// A team as entered before it has been assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    /// The team's display name.
    pub name: String,
    /// The person who plays as this team.
    pub owner: String,
}

impl TeamEntry {
    /// Creates a new team entry.
    #[must_use]
    pub fn new(name: &str, owner: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
        }
    }
}

/// The final score of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    /// Goals scored by the home team.
    pub home: u32,
    /// Goals scored by the away team.
    pub away: u32,
}

impl Score {
    /// Creates a new score.
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

/// A single fixture between two teams.
///
/// A match is completed exactly when it carries a `Score`, so a
/// half-entered result cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The match identifier.
    pub id: Identifier,
    /// The home team.
    pub home_team_id: Identifier,
    /// The away team.
    pub away_team_id: Identifier,
    /// The recorded result, if the match has been played.
    pub result: Option<Score>,
    /// Optional display grouping (leg 1 or 2).
    pub round: Option<u32>,
}

impl Match {
    /// Creates an unplayed match.
    #[must_use]
    pub const fn new(
        id: Identifier,
        home_team_id: Identifier,
        away_team_id: Identifier,
        round: Option<u32>,
    ) -> Self {
        Self {
            id,
            home_team_id,
            away_team_id,
            result: None,
            round,
        }
    }

    /// Returns this match with its result replaced.
    #[must_use]
    pub fn with_result(self, result: Option<Score>) -> Self {
        Self { result, ..self }
    }

    /// Returns whether the match has been played.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the home score, if recorded.
    #[must_use]
    pub fn home_score(&self) -> Option<u32> {
        self.result.map(|score| score.home)
    }

    /// Returns the away score, if recorded.
    #[must_use]
    pub fn away_score(&self) -> Option<u32> {
        self.result.map(|score| score.away)
    }

    /// Returns whether the given team plays in this match.
    #[must_use]
    pub fn involves(&self, team_id: &Identifier) -> bool {
        &self.home_team_id == team_id || &self.away_team_id == team_id
    }
}

/// The root aggregate: teams, their fixtures and the chosen format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    /// The league identifier.
    pub id: Identifier,
    /// The league's display name.
    pub name: String,
    /// The format the fixtures were generated from.
    pub format: FormatTag,
    /// Teams in creation order.
    pub teams: Vec<Team>,
    /// Matches in generation order.
    pub matches: Vec<Match>,
    /// When the league was created.
    pub created_at: OffsetDateTime,
    /// True exactly when every match has been completed.
    pub is_complete: bool,
}

impl League {
    /// Returns whether every match in the league has been completed.
    #[must_use]
    pub fn all_matches_completed(&self) -> bool {
        self.matches.iter().all(Match::is_completed)
    }

    /// Finds a match by identifier.
    #[must_use]
    pub fn find_match(&self, match_id: &Identifier) -> Option<&Match> {
        self.matches.iter().find(|m| &m.id == match_id)
    }

    /// Returns matches that have not been played yet, in generation order.
    #[must_use]
    pub fn pending_matches(&self) -> Vec<&Match> {
        self.matches.iter().filter(|m| !m.is_completed()).collect()
    }

    /// Returns matches that have been played, in generation order.
    #[must_use]
    pub fn completed_matches(&self) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.is_completed()).collect()
    }

    /// Returns matches tagged with the given round.
    #[must_use]
    pub fn matches_in_round(&self, round: u32) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| m.round == Some(round))
            .collect()
    }
}

/// One row of the standings table.
///
/// Derived from league state on every read and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// The team identifier.
    pub team_id: Identifier,
    /// The team's display name.
    pub team_name: String,
    /// The team's owner.
    pub owner: String,
    /// Matches played.
    pub played: u32,
    /// Matches won.
    pub won: u32,
    /// Matches drawn.
    pub drawn: u32,
    /// Matches lost.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: u64,
    /// Goals conceded.
    pub goals_against: u64,
    /// `goals_for - goals_against`.
    pub goal_difference: i64,
    /// `3 * won + drawn`.
    pub points: u32,
}

impl TableEntry {
    /// Creates an empty entry for a team.
    #[must_use]
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            owner: team.owner.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}
