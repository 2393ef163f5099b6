//! Tests for entity deserialization against realistic API payloads.

use giotto_core::{
    ChannelType, CreateMessage, Interaction, InteractionType, Message, MessageType, Snowflake,
};

#[test]
fn test_message_deserializes_from_api_shape() {
    let json = r#"{
        "id": "334385199974967042",
        "channel_id": "290926798999357250",
        "author": {
            "id": "53908099506183680",
            "username": "Mason",
            "discriminator": "9999",
            "avatar": "a_bab14f271d565501444b2ca3be944b25"
        },
        "content": "Supa Hot",
        "timestamp": "2017-07-11T17:27:07.299000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0
    }"#;
    let message: Message = serde_json::from_str(json).unwrap();
    assert_eq!(message.id, Snowflake::new(334385199974967042));
    assert_eq!(message.kind, MessageType::Default);
    assert_eq!(message.author.username, "Mason");
    assert!(message.guild_id.is_none());
}

#[test]
fn test_channel_type_uses_wire_integers() {
    let kind: ChannelType = serde_json::from_str("5").unwrap();
    assert_eq!(kind, ChannelType::GuildAnnouncement);
    assert_eq!(serde_json::to_string(&ChannelType::PublicThread).unwrap(), "11");
}

#[test]
fn test_interaction_invoking_user_prefers_member() {
    let json = r#"{
        "id": "1",
        "application_id": "2",
        "type": 2,
        "token": "tok",
        "guild_id": "3",
        "member": {
            "user": {"id": "4", "username": "giotto"},
            "roles": [],
            "joined_at": "2021-01-01T00:00:00Z"
        }
    }"#;
    let interaction: Interaction = serde_json::from_str(json).unwrap();
    assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
    let user = interaction.invoking_user().unwrap();
    assert_eq!(user.username, "giotto");
}

#[test]
fn test_create_message_serializes_only_set_fields() {
    let body = CreateMessage::default().content("hello");
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"content": "hello"}));
}
