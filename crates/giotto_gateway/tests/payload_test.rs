use giotto_core::Intents;
use giotto_gateway::{
    ConnectionProperties, GatewayPayload, Hello, Identify, Opcode, Ready, Resume,
};

#[test]
fn test_hello_decodes_from_the_wire_shape() {
    let raw = r#"{"op":10,"d":{"heartbeat_interval":41250},"s":null,"t":null}"#;
    let payload: GatewayPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.op, Opcode::Hello);
    let hello: Hello = serde_json::from_value(payload.d.unwrap()).unwrap();
    assert_eq!(hello.heartbeat_interval, 41250);
}

#[test]
fn test_dispatch_carries_sequence_and_name() {
    let raw = r#"{"op":0,"d":{},"s":42,"t":"RESUMED"}"#;
    let payload: GatewayPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.op, Opcode::Dispatch);
    assert_eq!(payload.s, Some(42));
    assert_eq!(payload.t.as_deref(), Some("RESUMED"));
}

#[test]
fn test_outbound_payloads_omit_sequence_and_name() {
    let payload = GatewayPayload::send(Opcode::Heartbeat, serde_json::json!(251));
    let rendered = serde_json::to_string(&payload).unwrap();
    assert_eq!(rendered, r#"{"op":1,"d":251}"#);
}

#[test]
fn test_identify_serializes_intents_as_an_integer() {
    let identify = Identify {
        token: "abc".to_string(),
        properties: ConnectionProperties::default(),
        intents: Intents::GUILDS | Intents::GUILD_MESSAGES,
        shard: [0, 1],
        large_threshold: 250,
        presence: None,
    };
    let value = serde_json::to_value(&identify).unwrap();
    assert_eq!(value["intents"], serde_json::json!(513));
    assert_eq!(value["shard"], serde_json::json!([0, 1]));
    assert_eq!(value["properties"]["browser"], "giotto");
    // Absent presence is omitted entirely rather than sent as null.
    assert!(value.get("presence").is_none());
}

#[test]
fn test_resume_round_trips() {
    let resume = Resume {
        token: "abc".to_string(),
        session_id: "deadbeef".to_string(),
        seq: 1337,
    };
    let value = serde_json::to_value(&resume).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"token": "abc", "session_id": "deadbeef", "seq": 1337})
    );
}

#[test]
fn test_ready_decodes_session_state() {
    let raw = serde_json::json!({
        "v": 10,
        "user": {"id": "80351110224678912", "username": "bot", "discriminator": "1337"},
        "session_id": "abc123",
        "resume_gateway_url": "wss://gateway-us-east1-b.discord.gg",
        "guilds": [{"id": "41771983423143937", "unavailable": true}],
        "shard": [0, 1]
    });
    let ready: Ready = serde_json::from_value(raw).unwrap();
    assert_eq!(ready.session_id, "abc123");
    assert_eq!(ready.resume_gateway_url, "wss://gateway-us-east1-b.discord.gg");
    assert_eq!(ready.guilds.len(), 1);
    assert!(ready.guilds[0].unavailable);
    assert_eq!(ready.shard, Some([0, 1]));
}

#[test]
fn test_opcodes_use_the_documented_numbers() {
    assert_eq!(serde_json::to_string(&Opcode::Dispatch).unwrap(), "0");
    assert_eq!(serde_json::to_string(&Opcode::Identify).unwrap(), "2");
    assert_eq!(serde_json::to_string(&Opcode::Resume).unwrap(), "6");
    assert_eq!(serde_json::to_string(&Opcode::InvalidSession).unwrap(), "9");
    assert_eq!(serde_json::to_string(&Opcode::Hello).unwrap(), "10");
    assert_eq!(serde_json::to_string(&Opcode::HeartbeatAck).unwrap(), "11");
}
