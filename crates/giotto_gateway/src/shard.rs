//! The shard connection state machine.
//!
//! A [`Shard`] owns one websocket connection to the gateway and drives the
//! full lifecycle: HELLO handshake, IDENTIFY or RESUME, heartbeat keepalive,
//! dispatch decoding, and reconnection. Events flow out over an mpsc
//! channel; presence, voice-state, and shutdown commands flow in through a
//! [`ShardHandle`].

use crate::payload::{ConnectionProperties, Hello, Identify, Resume, UpdateVoiceState};
use crate::{close, Event, GatewayPayload, Opcode};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use giotto_core::{Intents, Snowflake, UpdatePresence};
use giotto_error::{
    CloseFrame, GatewayError, GatewayErrorKind, GiottoError, GiottoResult, JsonError,
};
use giotto_rate_limit::{CommandRateLimiter, ExponentialBackOff};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame as WsCloseFrame;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, instrument, warn};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, WsMessage>;
type WsSource = SplitStream<WsStream>;

/// Reconnect backoff: 1.85^n seconds, jittered, capped at ten minutes. The
/// increment starts at 2 so the first delay is already a few seconds.
const BACKOFF_BASE: f64 = 1.85;
const BACKOFF_MAX_SECS: f64 = 600.0;
const BACKOFF_JITTER: f64 = 1.0;
const BACKOFF_INITIAL_INCREMENT: u32 = 2;

fn default_gateway_url() -> String {
    "wss://gateway.discord.gg".to_string()
}

/// Settings for one shard.
///
/// # Example
///
/// ```
/// use giotto_core::Intents;
/// use giotto_gateway::ShardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ShardConfig::builder()
///     .token("my-bot-token")
///     .intents(Intents::GUILDS | Intents::GUILD_MESSAGES)
///     .build()?;
/// assert_eq!(config.shard_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ShardConfig {
    /// The bot token, with or without its `Bot ` prefix.
    token: String,
    /// The event groups to subscribe to.
    intents: Intents,
    /// The gateway URL for fresh sessions.
    #[builder(default = "default_gateway_url()")]
    gateway_url: String,
    /// This shard's index within the shard set.
    #[builder(default)]
    shard_id: u32,
    /// The total shard count.
    #[builder(default = "1")]
    shard_count: u32,
    /// Member count past which guilds are delivered without offline members.
    #[builder(default = "250")]
    large_threshold: u32,
    /// Presence to declare on IDENTIFY.
    #[builder(default)]
    presence: Option<UpdatePresence>,
    /// Reconnects within this many seconds of the previous connection start
    /// are delayed by the backoff.
    #[builder(default = "30")]
    restart_window_secs: u64,
}

impl ShardConfig {
    /// Start building a config. Token and intents are required.
    pub fn builder() -> ShardConfigBuilder {
        ShardConfigBuilder::default()
    }

    /// The total shard count.
    pub fn shard_count(&self) -> u32 {
        self.shard_count
    }

    /// This shard's index.
    pub fn shard_id(&self) -> u32 {
        self.shard_id
    }

    /// The token in the bare form the gateway expects.
    fn bare_token(&self) -> &str {
        self.token.strip_prefix("Bot ").unwrap_or(&self.token)
    }
}

/// Commands a handle can send to a running shard.
#[derive(Debug)]
enum Command {
    Presence(Box<UpdatePresence>),
    VoiceState(UpdateVoiceState),
    Close,
}

/// A control handle to a running shard.
///
/// Cheap to clone. Commands queue until the shard's send loop picks them up;
/// sending to a shard that already shut down returns an error.
#[derive(Debug, Clone)]
pub struct ShardHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl ShardHandle {
    /// Update the bot's presence on this shard.
    pub fn update_presence(&self, presence: UpdatePresence) -> GiottoResult<()> {
        self.send(Command::Presence(Box::new(presence)))
    }

    /// Join, move within, or leave (with `channel_id: None`) a guild's voice
    /// channels.
    pub fn update_voice_state(
        &self,
        guild_id: Snowflake,
        channel_id: Option<Snowflake>,
        self_mute: bool,
        self_deaf: bool,
    ) -> GiottoResult<()> {
        self.send(Command::VoiceState(UpdateVoiceState {
            guild_id,
            channel_id,
            self_mute,
            self_deaf,
        }))
    }

    /// Ask the shard to close its connection and stop.
    pub fn close(&self) -> GiottoResult<()> {
        self.send(Command::Close)
    }

    fn send(&self, command: Command) -> GiottoResult<()> {
        self.commands
            .send(command)
            .map_err(|_| GatewayError::new(GatewayErrorKind::ClientClosed).into())
    }
}

/// Live session state, kept across reconnects for RESUME.
#[derive(Debug, Clone)]
struct Session {
    id: String,
    resume_url: String,
    seq: u64,
}

/// How a connection ended, and what to do next.
enum Disconnect {
    /// Shutdown was requested; stop cleanly.
    Shutdown,
    /// Reconnect, resuming the session if `resume` and the session survive.
    Reconnect { resume: bool, reset_backoff: bool },
    /// No reconnect will help; surface the error.
    Fatal(GiottoError),
}

/// A single gateway connection and its reconnect loop.
pub struct Shard {
    config: ShardConfig,
    session: Option<Session>,
    backoff: ExponentialBackOff,
    limiter: CommandRateLimiter,
    events: mpsc::UnboundedSender<Event>,
    commands: mpsc::UnboundedReceiver<Command>,
    last_start: Option<Instant>,
}

impl Shard {
    /// Create a shard. Returns the shard itself, a control handle, and the
    /// receiving end of its event channel.
    ///
    /// The shard does nothing until [`run`](Self::run) is polled; spawn it
    /// on a task and consume events from the receiver.
    pub fn new(config: ShardConfig) -> (Self, ShardHandle, mpsc::UnboundedReceiver<Event>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let shard = Self {
            config,
            session: None,
            backoff: ExponentialBackOff::new(
                BACKOFF_BASE,
                BACKOFF_MAX_SECS,
                BACKOFF_JITTER,
                BACKOFF_INITIAL_INCREMENT,
            ),
            limiter: CommandRateLimiter::new(),
            events: event_tx,
            commands: command_rx,
            last_start: None,
        };
        (
            shard,
            ShardHandle {
                commands: command_tx,
            },
            event_rx,
        )
    }

    /// Run the shard until it is closed or hits a fatal error.
    ///
    /// Reconnects on transient failures, resuming the session when the
    /// disconnect permits it. Connection attempts started within the restart
    /// window of the previous one are delayed by an exponential backoff; the
    /// backoff resets once a session proves healthy.
    #[instrument(skip(self), fields(shard = self.config.shard_id))]
    pub async fn run(mut self) -> GiottoResult<()> {
        loop {
            if let Some(last) = self.last_start {
                if last.elapsed() < Duration::from_secs(self.config.restart_window_secs) {
                    let delay = self
                        .backoff
                        .next()
                        .unwrap_or(Duration::from_secs_f64(BACKOFF_MAX_SECS));
                    info!(
                        delay_s = delay.as_secs_f64(),
                        "restarted within the rate limit window, backing off"
                    );
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        command = self.commands.recv() => {
                            if matches!(command, None | Some(Command::Close)) {
                                info!("shut down while waiting to reconnect");
                                return Ok(());
                            }
                        }
                    }
                }
            }
            self.last_start = Some(Instant::now());

            match self.run_once().await {
                Disconnect::Shutdown => {
                    info!("shard shut down");
                    return Ok(());
                }
                Disconnect::Fatal(error) => {
                    self.session = None;
                    error!(%error, "shard hit a fatal error");
                    return Err(error);
                }
                Disconnect::Reconnect {
                    resume,
                    reset_backoff,
                } => {
                    if !resume {
                        self.session = None;
                    }
                    if reset_backoff {
                        self.backoff.reset();
                    }
                }
            }
        }
    }

    /// Drive one connection from dial to disconnect.
    async fn run_once(&mut self) -> Disconnect {
        let base = self
            .session
            .as_ref()
            .map(|s| s.resume_url.clone())
            .unwrap_or_else(|| self.config.gateway_url.clone());
        let url = format!("{}/?v=10&encoding=json", base.trim_end_matches('/'));

        debug!(%url, "connecting to the gateway");
        let (stream, _) = match tokio_tungstenite::connect_async(url.as_str()).await {
            Ok(ok) => ok,
            Err(e) => {
                warn!(error = %e, "failed to connect");
                return Disconnect::Reconnect {
                    resume: true,
                    reset_backoff: false,
                };
            }
        };
        let (mut sink, mut source) = stream.split();

        let hello = match self.expect_hello(&mut source).await {
            Ok(hello) => hello,
            Err(disconnect) => return disconnect,
        };
        let interval = Duration::from_millis(hello.heartbeat_interval);
        debug!(interval_ms = hello.heartbeat_interval, "received HELLO");

        if let Err(disconnect) = self.handshake(&mut sink).await {
            return disconnect;
        }

        // The first beat lands at a random point inside the first interval
        // so a fleet of shards does not heartbeat in lockstep.
        let first_beat = interval.mul_f64(rand::random::<f64>());
        let mut heartbeat = tokio::time::interval_at(Instant::now() + first_beat, interval);
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_message = Instant::now();
        let mut beat_sent_at = Instant::now();

        loop {
            tokio::select! {
                _ = heartbeat.tick() => {
                    if last_message.elapsed() > interval {
                        warn!("no traffic for a full heartbeat interval, connection is a zombie");
                        return Disconnect::Reconnect { resume: true, reset_backoff: true };
                    }
                    beat_sent_at = Instant::now();
                    let seq = serde_json::json!(self.session.as_ref().map(|s| s.seq));
                    if let Err(disconnect) = self
                        .send_payload(&mut sink, GatewayPayload::send(Opcode::Heartbeat, seq))
                        .await
                    {
                        return disconnect;
                    }
                }
                command = self.commands.recv() => match command {
                    None | Some(Command::Close) => {
                        let frame = WsCloseFrame {
                            code: CloseCode::Normal,
                            reason: "".into(),
                        };
                        let _ = sink.send(WsMessage::Close(Some(frame))).await;
                        return Disconnect::Shutdown;
                    }
                    Some(Command::Presence(presence)) => {
                        let data = match serde_json::to_value(&*presence) {
                            Ok(data) => data,
                            Err(e) => {
                                return Disconnect::Fatal(
                                    JsonError::new(format!(
                                        "Failed to encode presence update: {e}"
                                    ))
                                    .into(),
                                )
                            }
                        };
                        if let Err(disconnect) = self
                            .send_payload(
                                &mut sink,
                                GatewayPayload::send(Opcode::PresenceUpdate, data),
                            )
                            .await
                        {
                            return disconnect;
                        }
                    }
                    Some(Command::VoiceState(state)) => {
                        let data = match serde_json::to_value(state) {
                            Ok(data) => data,
                            Err(e) => {
                                return Disconnect::Fatal(
                                    JsonError::new(format!(
                                        "Failed to encode voice state update: {e}"
                                    ))
                                    .into(),
                                )
                            }
                        };
                        if let Err(disconnect) = self
                            .send_payload(
                                &mut sink,
                                GatewayPayload::send(Opcode::VoiceStateUpdate, data),
                            )
                            .await
                        {
                            return disconnect;
                        }
                    }
                },
                message = source.next() => {
                    last_message = Instant::now();
                    match message {
                        Some(Ok(WsMessage::Text(text))) => {
                            let payload: GatewayPayload = match serde_json::from_str(text.as_str()) {
                                Ok(payload) => payload,
                                Err(e) => {
                                    warn!(error = %e, "ignoring a malformed payload");
                                    continue;
                                }
                            };
                            match self.handle_payload(payload, beat_sent_at, &mut sink).await {
                                Ok(()) => {}
                                Err(disconnect) => return disconnect,
                            }
                        }
                        Some(Ok(WsMessage::Close(frame))) => {
                            return self.classify_close(frame);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!(error = %e, "socket error");
                            return Disconnect::Reconnect { resume: true, reset_backoff: false };
                        }
                        None => {
                            warn!("socket ended without a close frame");
                            return Disconnect::Reconnect { resume: true, reset_backoff: false };
                        }
                    }
                }
            }
        }
    }

    /// Read payloads until HELLO arrives.
    async fn expect_hello(&mut self, source: &mut WsSource) -> Result<Hello, Disconnect> {
        loop {
            match source.next().await {
                Some(Ok(WsMessage::Text(text))) => {
                    let payload: GatewayPayload = match serde_json::from_str(text.as_str()) {
                        Ok(payload) => payload,
                        Err(e) => {
                            warn!(error = %e, "malformed payload during the handshake");
                            return Err(Disconnect::Reconnect {
                                resume: true,
                                reset_backoff: false,
                            });
                        }
                    };
                    if payload.op != Opcode::Hello {
                        warn!(op = ?payload.op, "expected HELLO, reconnecting");
                        return Err(Disconnect::Reconnect {
                            resume: true,
                            reset_backoff: false,
                        });
                    }
                    return serde_json::from_value(payload.d.unwrap_or_default()).map_err(|e| {
                        warn!(error = %e, "HELLO data failed to decode");
                        Disconnect::Reconnect {
                            resume: true,
                            reset_backoff: false,
                        }
                    });
                }
                Some(Ok(WsMessage::Close(frame))) => return Err(self.classify_close(frame)),
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(error = %e, "socket error during the handshake");
                    return Err(Disconnect::Reconnect {
                        resume: true,
                        reset_backoff: false,
                    });
                }
                None => {
                    warn!("socket ended during the handshake");
                    return Err(Disconnect::Reconnect {
                        resume: true,
                        reset_backoff: false,
                    });
                }
            }
        }
    }

    /// Send IDENTIFY for a fresh session, or RESUME when one survives.
    async fn handshake(&mut self, sink: &mut WsSink) -> Result<(), Disconnect> {
        let (op, data) = if let Some(session) = &self.session {
            info!(session = %session.id, seq = session.seq, "resuming session");
            let resume = Resume {
                token: self.config.bare_token().to_string(),
                session_id: session.id.clone(),
                seq: session.seq,
            };
            (Opcode::Resume, serde_json::to_value(resume))
        } else {
            info!(
                shard = self.config.shard_id,
                count = self.config.shard_count,
                "identifying a new session"
            );
            let identify = Identify {
                token: self.config.bare_token().to_string(),
                properties: ConnectionProperties::default(),
                intents: self.config.intents,
                shard: [self.config.shard_id, self.config.shard_count],
                large_threshold: self.config.large_threshold,
                presence: self.config.presence.clone(),
            };
            (Opcode::Identify, serde_json::to_value(identify))
        };
        let data = match data {
            Ok(data) => data,
            Err(e) => {
                return Err(Disconnect::Fatal(
                    JsonError::new(format!("Failed to encode handshake payload: {e}")).into(),
                ))
            }
        };
        self.send_payload(sink, GatewayPayload::send(op, data)).await
    }

    /// React to one decoded payload from the server.
    async fn handle_payload(
        &mut self,
        payload: GatewayPayload,
        beat_sent_at: Instant,
        sink: &mut WsSink,
    ) -> Result<(), Disconnect> {
        match payload.op {
            Opcode::Dispatch => {
                if let Some(seq) = payload.s {
                    if let Some(session) = &mut self.session {
                        session.seq = seq;
                    }
                }
                let name = payload.t.unwrap_or_default();
                let data = payload.d.unwrap_or_default();
                self.handle_dispatch(&name, data, payload.s.unwrap_or(0))
            }
            Opcode::Heartbeat => {
                // The server wants a beat right now.
                let seq = serde_json::json!(self.session.as_ref().map(|s| s.seq));
                self.send_payload(sink, GatewayPayload::send(Opcode::Heartbeat, seq))
                    .await
            }
            Opcode::HeartbeatAck => {
                debug!(
                    latency_ms = beat_sent_at.elapsed().as_millis() as u64,
                    "heartbeat acknowledged"
                );
                Ok(())
            }
            Opcode::Reconnect => {
                info!("server requested a reconnect");
                Err(Disconnect::Reconnect {
                    resume: true,
                    reset_backoff: true,
                })
            }
            Opcode::InvalidSession => {
                let resumable = payload.d.as_ref().and_then(|d| d.as_bool()).unwrap_or(false);
                warn!(resumable, "session invalidated");
                Err(Disconnect::Reconnect {
                    resume: resumable,
                    reset_backoff: false,
                })
            }
            other => {
                debug!(op = ?other, "ignoring an unexpected opcode");
                Ok(())
            }
        }
    }

    /// Decode a dispatch and forward it to the event channel.
    fn handle_dispatch(
        &mut self,
        name: &str,
        data: serde_json::Value,
        seq: u64,
    ) -> Result<(), Disconnect> {
        let event = match Event::parse(name, data) {
            Ok(event) => event,
            Err(error) => {
                warn!(%name, %error, "dropping a dispatch that failed to decode");
                return Ok(());
            }
        };

        match &event {
            Event::Ready(ready) => {
                info!(
                    session = %ready.session_id,
                    user = %ready.user.tag(),
                    guilds = ready.guilds.len(),
                    "session is ready"
                );
                self.session = Some(Session {
                    id: ready.session_id.clone(),
                    resume_url: ready.resume_gateway_url.clone(),
                    seq,
                });
                self.backoff.reset();
            }
            Event::Resumed => {
                info!("session resumed");
                self.backoff.reset();
            }
            _ => {}
        }

        if self.events.send(event).is_err() {
            info!("event receiver dropped, shutting down");
            return Err(Disconnect::Shutdown);
        }
        Ok(())
    }

    /// Serialize and send a payload, honoring the outbound command limit.
    async fn send_payload(
        &self,
        sink: &mut WsSink,
        payload: GatewayPayload,
    ) -> Result<(), Disconnect> {
        let text = match serde_json::to_string(&payload) {
            Ok(text) => text,
            Err(e) => {
                return Err(Disconnect::Fatal(
                    JsonError::new(format!("Failed to encode gateway payload: {e}")).into(),
                ))
            }
        };
        self.limiter.acquire().await;
        if let Err(e) = sink.send(WsMessage::text(text)).await {
            warn!(error = %e, "failed to send, reconnecting");
            return Err(Disconnect::Reconnect {
                resume: true,
                reset_backoff: false,
            });
        }
        Ok(())
    }

    /// Turn a server close frame into the next action.
    fn classify_close(&self, frame: Option<WsCloseFrame>) -> Disconnect {
        let (code, reason) = frame
            .map(|f| (u16::from(f.code), f.reason.to_string()))
            .unwrap_or((1000, String::new()));

        if close::is_resumable(code) {
            warn!(code, %reason, "server closed the connection, will resume");
            return Disconnect::Reconnect {
                resume: true,
                reset_backoff: false,
            };
        }

        let error = GatewayError::new(GatewayErrorKind::ServerClosed {
            frame: CloseFrame { code, reason },
            can_resume: false,
        });
        error!(%error, "server closed the connection fatally");
        Disconnect::Fatal(error.into())
    }
}
