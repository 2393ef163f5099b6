//! Tests for gateway intent flags.

use giotto_core::Intents;

#[test]
fn test_bit_positions() {
    assert_eq!(Intents::GUILDS.bits(), 1);
    assert_eq!(Intents::GUILD_MEMBERS.bits(), 1 << 1);
    assert_eq!(Intents::MESSAGE_CONTENT.bits(), 1 << 15);
    assert_eq!(Intents::GUILD_SCHEDULED_EVENTS.bits(), 1 << 16);
}

#[test]
fn test_unprivileged_excludes_privileged_flags() {
    let unprivileged = Intents::unprivileged();
    assert!(!unprivileged.contains(Intents::GUILD_MEMBERS));
    assert!(!unprivileged.contains(Intents::GUILD_PRESENCES));
    assert!(!unprivileged.contains(Intents::MESSAGE_CONTENT));
    assert!(unprivileged.contains(Intents::GUILDS));
    assert!(!unprivileged.is_privileged());
}

#[test]
fn test_all_is_privileged() {
    assert!(Intents::all().is_privileged());
    assert!(Intents::all().contains(Intents::unprivileged()));
}

#[test]
fn test_combining() {
    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES;
    assert!(intents.contains(Intents::GUILDS));
    assert!(!intents.contains(Intents::GUILD_MEMBERS));

    let mut grown = intents;
    grown |= Intents::MESSAGE_CONTENT;
    assert!(grown.is_privileged());
}

#[test]
fn test_serializes_as_integer() {
    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES;
    let json = serde_json::to_string(&intents).unwrap();
    assert_eq!(json, "513");
    let back: Intents = serde_json::from_str("513").unwrap();
    assert_eq!(back, intents);
}
