//! Tests for request payload validation.

use giotto_core::{validate, CreateMessage, Embed, Snowflake};

#[test]
fn test_content_limit() {
    assert!(validate::content(&"a".repeat(2000)).is_ok());
    assert!(validate::content(&"a".repeat(2001)).is_err());
}

#[test]
fn test_embed_title_limit() {
    let ok = Embed::default().title("a".repeat(256));
    assert!(validate::embed(&ok).is_ok());
    let long = Embed::default().title("a".repeat(257));
    assert!(validate::embed(&long).is_err());
}

#[test]
fn test_embed_field_limits() {
    let mut embed = Embed::default();
    for i in 0..25 {
        embed = embed.field(format!("field {i}"), "value", false);
    }
    assert!(validate::embed(&embed).is_ok());
    let overfull = embed.field("one more", "value", false);
    assert!(validate::embed(&overfull).is_err());

    let wide = Embed::default().field("name", "v".repeat(1025), false);
    assert!(validate::embed(&wide).is_err());
}

#[test]
fn test_embed_combined_limit() {
    // Each surface is individually legal but the sum crosses 6000.
    let embed = Embed::default()
        .title("t".repeat(256))
        .description("d".repeat(4096))
        .field("f".repeat(256), "v".repeat(1024), false)
        .field("g".repeat(256), "w".repeat(1024), false);
    assert!(validate::embed(&embed).is_err());
}

#[test]
fn test_create_message_requires_a_payload() {
    assert!(validate::create_message(&CreateMessage::default()).is_err());
    assert!(validate::create_message(&CreateMessage::default().content("hi")).is_ok());
    let embed_only = CreateMessage::default().embed(Embed::default().title("t"));
    assert!(validate::create_message(&embed_only).is_ok());
}

#[test]
fn test_create_message_embed_count() {
    let mut body = CreateMessage::default();
    for _ in 0..10 {
        body = body.embed(Embed::default().title("t"));
    }
    assert!(validate::create_message(&body).is_ok());
    let overfull = body.embed(Embed::default().title("t"));
    assert!(validate::create_message(&overfull).is_err());
}

#[test]
fn test_bulk_delete_count_bounds() {
    let now_ms = 1_756_000_000_000u64;
    let fresh = Snowflake::new((now_ms - 1_420_070_400_000 - 1000) << 22);
    assert!(validate::bulk_delete(&[fresh], now_ms).is_err());
    assert!(validate::bulk_delete(&[fresh; 2], now_ms).is_ok());
    assert!(validate::bulk_delete(&vec![fresh; 100], now_ms).is_ok());
    assert!(validate::bulk_delete(&vec![fresh; 101], now_ms).is_err());
}

#[test]
fn test_bulk_delete_rejects_stale_messages() {
    let now_ms = 1_756_000_000_000u64;
    let fifteen_days_ms = 15 * 24 * 60 * 60 * 1000;
    let stale = Snowflake::new((now_ms - 1_420_070_400_000 - fifteen_days_ms) << 22);
    let fresh = Snowflake::new((now_ms - 1_420_070_400_000 - 1000) << 22);
    assert!(validate::bulk_delete(&[fresh, stale], now_ms).is_err());
}
