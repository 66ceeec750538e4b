// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LEAGUE_STORAGE_KEY, Persistence, PersistenceError};

use super::create_test_league;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_new_database_has_no_league() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.get_stored_league().unwrap(), None);
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    db1.save_league(&create_test_league()).unwrap();

    assert!(db1.get_stored_league().unwrap().is_some());
    assert!(db2.get_stored_league().unwrap().is_none());
}

#[test]
fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "league_table_reopen_{}.sqlite",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let league = create_test_league();

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence.save_league(&league).unwrap();
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.get_stored_league().unwrap(), Some(league));

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

#[test]
fn test_storage_key_is_fixed() {
    assert_eq!(LEAGUE_STORAGE_KEY, "league-table-data");
}
