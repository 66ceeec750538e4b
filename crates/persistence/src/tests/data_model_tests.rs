// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the stored JSON shape of a league.

use league_table_domain::{FormatTag, League, Score};
use serde_json::{Value, json};

use super::{create_partly_played_league, create_test_league};
use crate::{LeagueData, PersistenceError, decode_league, encode_league};

fn encode_to_value(league: &League) -> Value {
    serde_json::from_str(&encode_league(league).unwrap()).unwrap()
}

#[test]
fn test_unplayed_match_encodes_null_scores() {
    let value: Value = encode_to_value(&create_test_league());

    assert_eq!(
        value["matches"][0],
        json!({
            "id": "id-2",
            "homeTeamId": "t1",
            "awayTeamId": "t2",
            "homeScore": null,
            "awayScore": null,
            "isCompleted": false,
            "round": 1
        })
    );
}

#[test]
fn test_played_match_encodes_scores() {
    let value: Value = encode_to_value(&create_partly_played_league());

    assert_eq!(value["matches"][0]["homeScore"], json!(2));
    assert_eq!(value["matches"][0]["awayScore"], json!(0));
    assert_eq!(value["matches"][0]["isCompleted"], json!(true));
    assert_eq!(value["matches"][1]["homeScore"], json!(0));
}

#[test]
fn test_league_fields_encode_in_camel_case() {
    let value: Value = encode_to_value(&create_test_league());

    assert_eq!(value["id"], json!("id-1"));
    assert_eq!(value["name"], json!("Sunday League"));
    assert_eq!(value["format"], json!("best-of-2"));
    assert_eq!(value["createdAt"], json!("2026-03-01T12:00:00+01:00"));
    assert_eq!(value["isComplete"], json!(false));
    assert_eq!(
        value["teams"][1],
        json!({"id": "t2", "name": "Beta", "owner": "Bob"})
    );
}

#[test]
fn test_missing_round_is_omitted_and_defaults_on_decode() {
    let mut league: League = create_test_league();
    league.format = FormatTag::RoundRobinDouble;
    for m in &mut league.matches {
        m.round = None;
    }

    let encoded: String = encode_league(&league).unwrap();
    assert!(!encoded.contains("\"round\""));
    assert_eq!(decode_league(&encoded).unwrap(), league);
}

#[test]
fn test_decode_rejects_partial_score() {
    let mut data: LeagueData = LeagueData::from(&create_test_league());
    data.matches[0].home_score = Some(1);
    let encoded: String = serde_json::to_string(&data).unwrap();

    assert!(matches!(
        decode_league(&encoded),
        Err(PersistenceError::SerializationError(_))
    ));
}

#[test]
fn test_decode_rejects_completed_match_without_scores() {
    let mut data: LeagueData = LeagueData::from(&create_test_league());
    data.matches[0].is_completed = true;
    let encoded: String = serde_json::to_string(&data).unwrap();

    let err: PersistenceError = decode_league(&encoded).unwrap_err();
    assert!(err.to_string().contains("id-2"));
}

#[test]
fn test_decode_rejects_unknown_format() {
    let mut value: Value = encode_to_value(&create_test_league());
    value["format"] = json!("knockout");

    assert!(matches!(
        decode_league(&value.to_string()),
        Err(PersistenceError::SerializationError(_))
    ));
}

#[test]
fn test_decode_rejects_complete_flag_with_unplayed_match() {
    let mut data: LeagueData = LeagueData::from(&create_partly_played_league());
    data.is_complete = true;
    let encoded: String = serde_json::to_string(&data).unwrap();

    let err: PersistenceError = decode_league(&encoded).unwrap_err();
    assert!(matches!(err, PersistenceError::SerializationError(_)));
    assert!(err.to_string().contains("id-1"));
}

#[test]
fn test_decode_rejects_incomplete_flag_when_all_matches_played() {
    let mut league: League = create_test_league();
    for m in &mut league.matches {
        *m = m.clone().with_result(Some(Score::new(1, 1)));
    }
    let mut data: LeagueData = LeagueData::from(&league);
    data.is_complete = false;
    let encoded: String = serde_json::to_string(&data).unwrap();

    assert!(matches!(
        decode_league(&encoded),
        Err(PersistenceError::SerializationError(_))
    ));

    data.is_complete = true;
    let encoded: String = serde_json::to_string(&data).unwrap();
    assert!(decode_league(&encoded).unwrap().is_complete);
}
