use giotto_gateway::Event;

fn message_json() -> serde_json::Value {
    serde_json::json!({
        "id": "334385199974967042",
        "channel_id": "290926798999357250",
        "author": {
            "id": "53908099506183680",
            "username": "mason",
            "discriminator": "9999"
        },
        "content": "supa hot",
        "timestamp": "2017-07-11T17:27:07.299000+00:00",
        "tts": false,
        "mention_everyone": false,
        "type": 0
    })
}

#[test]
fn test_message_create_parses_into_a_typed_event() {
    let event = Event::parse("MESSAGE_CREATE", message_json()).unwrap();
    match &event {
        Event::MessageCreate(message) => {
            assert_eq!(message.content, "supa hot");
            assert_eq!(message.author.username, "mason");
        }
        other => panic!("unexpected event: {}", other.name()),
    }
    assert_eq!(event.name(), "MESSAGE_CREATE");
}

#[test]
fn test_message_delete_extracts_ids() {
    let data = serde_json::json!({
        "id": "334385199974967042",
        "channel_id": "290926798999357250",
        "guild_id": "41771983423143937"
    });
    let event = Event::parse("MESSAGE_DELETE", data).unwrap();
    match event {
        Event::MessageDelete(delete) => {
            assert_eq!(delete.id.get(), 334385199974967042);
            assert!(delete.guild_id.is_some());
        }
        other => panic!("unexpected event: {}", other.name()),
    }
}

#[test]
fn test_guild_delete_distinguishes_outage_from_removal() {
    let outage = serde_json::json!({"id": "41771983423143937", "unavailable": true});
    let removed = serde_json::json!({"id": "41771983423143937"});

    match Event::parse("GUILD_DELETE", outage).unwrap() {
        Event::GuildDelete(delete) => assert!(delete.unavailable),
        other => panic!("unexpected event: {}", other.name()),
    }
    match Event::parse("GUILD_DELETE", removed).unwrap() {
        Event::GuildDelete(delete) => assert!(!delete.unavailable),
        other => panic!("unexpected event: {}", other.name()),
    }
}

#[test]
fn test_resumed_carries_no_data() {
    let event = Event::parse("RESUMED", serde_json::Value::Null).unwrap();
    assert_eq!(event, Event::Resumed);
}

#[test]
fn test_unrecognized_dispatches_keep_their_raw_data() {
    let data = serde_json::json!({"user_id": "1", "channel_id": "2"});
    let event = Event::parse("TYPING_START", data.clone()).unwrap();
    match event {
        Event::Unknown { name, data: raw } => {
            assert_eq!(name, "TYPING_START");
            assert_eq!(raw, data);
        }
        other => panic!("unexpected event: {}", other.name()),
    }
}

#[test]
fn test_malformed_dispatch_data_is_an_error() {
    let result = Event::parse("MESSAGE_CREATE", serde_json::json!({"id": "not a message"}));
    assert!(result.is_err());
}
