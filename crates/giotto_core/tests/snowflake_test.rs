//! Tests for snowflake parsing and timestamp extraction.

use chrono::{TimeZone, Utc};
use giotto_core::Snowflake;

#[test]
fn test_timestamp_extraction() {
    // Worked example from the API documentation.
    let id = Snowflake::new(175928847299117063);
    assert_eq!(id.timestamp().timestamp_millis(), 1462015105796);
    assert_eq!(id.worker_id(), 1);
    assert_eq!(id.process_id(), 0);
    assert_eq!(id.increment(), 7);
}

#[test]
fn test_serializes_as_string() {
    let id = Snowflake::new(175928847299117063);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"175928847299117063\"");
}

#[test]
fn test_deserializes_from_string_or_number() {
    let from_str: Snowflake = serde_json::from_str("\"175928847299117063\"").unwrap();
    let from_num: Snowflake = serde_json::from_str("175928847299117063").unwrap();
    assert_eq!(from_str, from_num);
    assert_eq!(from_str.get(), 175928847299117063);
}

#[test]
fn test_from_timestamp_round_trips() {
    let at = Utc.timestamp_millis_opt(1_600_000_000_000).unwrap();
    let id = Snowflake::from_timestamp(at);
    assert_eq!(id.timestamp(), at);
    assert_eq!(id.increment(), 0);
}

#[test]
fn test_ordering_follows_creation_time() {
    let early = Snowflake::from_timestamp(Utc.timestamp_millis_opt(1_500_000_000_000).unwrap());
    let late = Snowflake::from_timestamp(Utc.timestamp_millis_opt(1_600_000_000_000).unwrap());
    assert!(early < late);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("not-a-number".parse::<Snowflake>().is_err());
    let bad: Result<Snowflake, _> = serde_json::from_str("\"abc\"");
    assert!(bad.is_err());
}
