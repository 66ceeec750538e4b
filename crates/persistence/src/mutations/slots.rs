// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value slot mutations.
//!
//! A slot holds at most one value; writing replaces whatever was there.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info};

use crate::diesel_schema::kv_slots;
use crate::error::PersistenceError;

/// Stores a value under a slot key, replacing any previous value.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `slot_key` - The slot to write
/// * `value_json` - The serialized value
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted or the write fails.
pub fn put_slot(
    conn: &mut SqliteConnection,
    slot_key: &str,
    value_json: &str,
) -> Result<(), PersistenceError> {
    let updated_at: String = OffsetDateTime::now_utc().format(&Rfc3339)?;

    diesel::replace_into(kv_slots::table)
        .values((
            kv_slots::slot_key.eq(slot_key),
            kv_slots::value_json.eq(value_json),
            kv_slots::updated_at.eq(&updated_at),
        ))
        .execute(conn)?;

    debug!(slot_key, bytes = value_json.len(), "Wrote slot");
    Ok(())
}

/// Removes a slot. Removing an empty slot is not an error.
///
/// # Returns
///
/// Whether a value was removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_slot(conn: &mut SqliteConnection, slot_key: &str) -> Result<bool, PersistenceError> {
    let removed: usize =
        diesel::delete(kv_slots::table.filter(kv_slots::slot_key.eq(slot_key))).execute(conn)?;

    info!(slot_key, removed, "Cleared slot");
    Ok(removed > 0)
}
