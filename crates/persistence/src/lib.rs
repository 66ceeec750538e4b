// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the league table tracker.
//!
//! The whole league is kept as one JSON document in a durable key-value
//! slot under a fixed key. Saving replaces the document, loading decodes
//! it, and clearing removes it. Storage is `SQLite` through Diesel, with
//! migrations embedded in the binary.
//!
//! ## Testing
//!
//! Tests use `Persistence::new_in_memory()`, which gives every call its
//! own shared-cache in-memory database.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use league_table_domain::League;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{LeagueData, MatchData, decode_league, encode_league};
pub use error::PersistenceError;

/// The slot key the current league is stored under.
pub const LEAGUE_STORAGE_KEY: &str = "league-table-data";

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the stored league.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database, so instances never share data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_league_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Saves the league, replacing any previously stored league.
    ///
    /// # Errors
    ///
    /// Returns an error if the league cannot be encoded or written.
    pub fn save_league(&mut self, league: &League) -> Result<(), PersistenceError> {
        let value_json: String = encode_league(league)?;
        mutations::slots::put_slot(&mut self.conn, LEAGUE_STORAGE_KEY, &value_json)?;
        debug!(league_id = %league.id, matches = league.matches.len(), "Saved league");
        Ok(())
    }

    /// Loads the stored league.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no league is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the stored record cannot be
    /// decoded into a valid league.
    pub fn get_stored_league(&mut self) -> Result<Option<League>, PersistenceError> {
        let Some(value_json) = queries::slots::get_slot(&mut self.conn, LEAGUE_STORAGE_KEY)? else {
            return Ok(None);
        };

        let league: League = decode_league(&value_json)?;
        debug!(league_id = %league.id, "Loaded stored league");
        Ok(Some(league))
    }

    /// Removes the stored league. Clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear_stored_league(&mut self) -> Result<(), PersistenceError> {
        let removed: bool = mutations::slots::delete_slot(&mut self.conn, LEAGUE_STORAGE_KEY)?;
        info!(removed, "Cleared stored league");
        Ok(())
    }
}
