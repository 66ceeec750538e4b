// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value slot queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::kv_slots;
use crate::error::PersistenceError;

/// Retrieves the raw JSON stored under a slot key.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `slot_key` - The slot to read
///
/// # Returns
///
/// `Ok(None)` if nothing is stored under the key.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_slot(
    conn: &mut SqliteConnection,
    slot_key: &str,
) -> Result<Option<String>, PersistenceError> {
    let value: Option<String> = kv_slots::table
        .filter(kv_slots::slot_key.eq(slot_key))
        .select(kv_slots::value_json)
        .first::<String>(conn)
        .optional()?;

    debug!(slot_key, found = value.is_some(), "Read slot");
    Ok(value)
}

