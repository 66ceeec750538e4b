// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use league_table::CoreError;
use league_table_domain::DomainError;
use league_table_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request conflicts with the current session state.
    #[error("Conflict: {message}")]
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownFormat(_) => ApiError::InvalidInput {
            field: String::from("format"),
            message: err.to_string(),
        },
        DomainError::NotEnoughTeams { .. } | DomainError::TooManyTeams { .. } => {
            ApiError::InvalidInput {
                field: String::from("teams"),
                message: err.to_string(),
            }
        }
        DomainError::PartialScore { .. } => ApiError::DomainRuleViolation {
            rule: String::from("complete_score_pair"),
            message: err.to_string(),
        },
        DomainError::MissingScore | DomainError::ScoreOnIncompleteMatch => {
            ApiError::DomainRuleViolation {
                rule: String::from("score_matches_completion"),
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::MatchNotFound(match_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Match"),
            message: format!("Match '{match_id}' does not exist in the current league"),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("Storage failure: {err}"),
    }
}
