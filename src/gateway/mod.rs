//! Payloads, opcodes and close codes of Discord's main gateway.
//!
//! Frames are decoded in two steps: [`GatewayFrame`] carries the opcode and
//! raw data, and [`DispatchEvent::from_frame`] gives typed access to the
//! dispatch events this crate models.
//!
//! See <https://discord.com/developers/docs/topics/gateway-events>

mod event;
mod payload;

pub use self::{event::*, payload::*};

use crate::error::Result;
use bitflags::bitflags;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Gateway opcodes.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum GatewayOpcode {
    /// An event was dispatched.
    Dispatch = 0,
    /// Keeps the connection alive; may also be requested by Discord.
    Heartbeat = 1,
    /// Starts a new session.
    Identify = 2,
    /// Updates the client's presence.
    PresenceUpdate = 3,
    /// Joins, moves between or leaves voice channels.
    VoiceStateUpdate = 4,
    /// Resumes a previous session.
    Resume = 6,
    /// The client should reconnect and resume.
    Reconnect = 7,
    /// Requests members of a large guild.
    RequestGuildMembers = 8,
    /// The session was invalidated.
    InvalidSession = 9,
    /// Sent on connect, with the heartbeat interval.
    Hello = 10,
    /// Acknowledges a heartbeat.
    HeartbeatAck = 11,
    /// Requests soundboard sounds of a set of guilds.
    RequestSoundboardSounds = 31,
}

impl_try_from_repr!(
    GatewayOpcode,
    u8,
    [
        Dispatch,
        Heartbeat,
        Identify,
        PresenceUpdate,
        VoiceStateUpdate,
        Resume,
        Reconnect,
        RequestGuildMembers,
        InvalidSession,
        Hello,
        HeartbeatAck,
        RequestSoundboardSounds,
    ]
);

/// Codes Discord closes the gateway websocket with.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u16)]
#[non_exhaustive]
pub enum GatewayCloseCode {
    /// Unknown error; try reconnecting.
    UnknownError = 4000,
    /// An invalid opcode or payload was sent.
    UnknownOpcode = 4001,
    /// A payload could not be decoded.
    DecodeError = 4002,
    /// A payload was sent before identifying.
    NotAuthenticated = 4003,
    /// The account token was incorrect.
    AuthenticationFailed = 4004,
    /// More than one identify was sent.
    AlreadyAuthenticated = 4005,
    /// The sequence sent when resuming was invalid.
    InvalidSeq = 4007,
    /// Payloads were sent too quickly.
    RateLimited = 4008,
    /// The session timed out.
    SessionTimedOut = 4009,
    /// An invalid shard was sent when identifying.
    InvalidShard = 4010,
    /// The session would have handled too many guilds.
    ShardingRequired = 4011,
    /// An invalid gateway version was requested.
    InvalidApiVersion = 4012,
    /// An invalid intent was sent.
    InvalidIntents = 4013,
    /// A privileged intent was sent without being enabled.
    DisallowedIntents = 4014,
}

impl_try_from_repr!(
    GatewayCloseCode,
    u16,
    [
        UnknownError,
        UnknownOpcode,
        DecodeError,
        NotAuthenticated,
        AuthenticationFailed,
        AlreadyAuthenticated,
        InvalidSeq,
        RateLimited,
        SessionTimedOut,
        InvalidShard,
        ShardingRequired,
        InvalidApiVersion,
        InvalidIntents,
        DisallowedIntents,
    ]
);

impl GatewayCloseCode {
    /// Returns whether a client may reconnect after this close code.
    ///
    /// Codes caused by a bad token or bad identify parameters repeat on
    /// every attempt.
    pub fn can_reconnect(self) -> bool {
        !matches!(
            self,
            GatewayCloseCode::AuthenticationFailed
                | GatewayCloseCode::InvalidShard
                | GatewayCloseCode::ShardingRequired
                | GatewayCloseCode::InvalidApiVersion
                | GatewayCloseCode::InvalidIntents
                | GatewayCloseCode::DisallowedIntents
        )
    }
}

bitflags! {
    /// Groups of events a session subscribes to.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct GatewayIntents: u64 {
        /// Guild, role, channel and thread lifecycle.
        const GUILDS = 1 << 0;
        /// Member joins, updates and removals. Privileged.
        const GUILD_MEMBERS = 1 << 1;
        /// Bans and audit log entries.
        const GUILD_MODERATION = 1 << 2;
        /// Emoji, sticker and soundboard updates.
        const GUILD_EXPRESSIONS = 1 << 3;
        /// Integration updates.
        const GUILD_INTEGRATIONS = 1 << 4;
        /// Webhook updates.
        const GUILD_WEBHOOKS = 1 << 5;
        /// Invite creation and deletion.
        const GUILD_INVITES = 1 << 6;
        /// Voice state updates.
        const GUILD_VOICE_STATES = 1 << 7;
        /// Presence updates. Privileged.
        const GUILD_PRESENCES = 1 << 8;
        /// Guild messages.
        const GUILD_MESSAGES = 1 << 9;
        /// Guild message reactions.
        const GUILD_MESSAGE_REACTIONS = 1 << 10;
        /// Guild typing indicators.
        const GUILD_MESSAGE_TYPING = 1 << 11;
        /// Direct messages.
        const DIRECT_MESSAGES = 1 << 12;
        /// Direct message reactions.
        const DIRECT_MESSAGE_REACTIONS = 1 << 13;
        /// Direct message typing indicators.
        const DIRECT_MESSAGE_TYPING = 1 << 14;
        /// Message content in events. Privileged.
        const MESSAGE_CONTENT = 1 << 15;
        /// Scheduled events.
        const GUILD_SCHEDULED_EVENTS = 1 << 16;
        /// Auto moderation rule changes.
        const AUTO_MODERATION_CONFIGURATION = 1 << 20;
        /// Auto moderation actions.
        const AUTO_MODERATION_EXECUTION = 1 << 21;
        /// Guild poll votes.
        const GUILD_MESSAGE_POLLS = 1 << 24;
        /// Direct message poll votes.
        const DIRECT_MESSAGE_POLLS = 1 << 25;
    }
}

impl_bits_serde!(GatewayIntents, u64);

impl GatewayIntents {
    /// Intents which must be enabled in the developer portal before use.
    pub fn privileged() -> Self {
        Self::GUILD_MEMBERS | Self::GUILD_PRESENCES | Self::MESSAGE_CONTENT
    }

    /// All intents which need no approval.
    pub fn non_privileged() -> Self {
        Self::all().difference(Self::privileged())
    }

    /// Returns whether any privileged intent is requested.
    pub fn is_privileged(self) -> bool {
        self.intersects(Self::privileged())
    }
}

/// One gateway message, before its data is decoded.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GatewayFrame {
    /// Opcode.
    pub op: GatewayOpcode,
    /// Event data.
    #[serde(default)]
    pub d: Value,
    /// Sequence number, for dispatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,
    /// Event name, for dispatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
}

impl GatewayFrame {
    /// Decodes a frame from gateway JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encodes this frame as gateway JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes the data of a frame with a known shape, such as `Hello`.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.d)?)
    }
}

/// A payload the client sends to the gateway.
pub trait Command: Serialize {
    /// Opcode this payload is sent with.
    const OPCODE: GatewayOpcode;

    /// Wraps this payload in a frame ready to send.
    fn to_frame(&self) -> Result<GatewayFrame> {
        Ok(GatewayFrame {
            op: Self::OPCODE,
            d: serde_json::to_value(self)?,
            s: None,
            t: None,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use std::convert::TryFrom;

    #[test]
    fn close_codes_classify_reconnects() {
        assert!(GatewayCloseCode::UnknownError.can_reconnect());
        assert!(GatewayCloseCode::InvalidSeq.can_reconnect());
        assert!(!GatewayCloseCode::AuthenticationFailed.can_reconnect());
        assert!(!GatewayCloseCode::DisallowedIntents.can_reconnect());

        assert_eq!(GatewayCloseCode::try_from(4006u16), Err(4006));
        assert_eq!(GatewayOpcode::try_from(5u8), Err(5));
        assert_eq!(GatewayOpcode::try_from(31u8), Ok(GatewayOpcode::RequestSoundboardSounds));
    }

    #[test]
    fn privileged_intents() {
        let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;
        assert!(!intents.is_privileged());
        assert!((intents | GatewayIntents::MESSAGE_CONTENT).is_privileged());
        assert!(!GatewayIntents::non_privileged().is_privileged());

        assert_eq!(serde_json::to_value(intents).unwrap(), json!(513));
    }

    #[test]
    fn hello_frame_decodes() {
        let frame = GatewayFrame::from_json(r#"{"op":10,"d":{"heartbeat_interval":45000},"s":null,"t":null}"#)
            .unwrap();

        assert_eq!(frame.op, GatewayOpcode::Hello);
        assert_eq!(frame.data::<Hello>().unwrap().heartbeat_interval, 45000);
    }

    #[test]
    fn heartbeat_frame_encodes_sequence() {
        let frame = Heartbeat(Some(251)).to_frame().unwrap();
        assert_eq!(frame.to_json().unwrap(), r#"{"op":1,"d":251}"#);

        let frame = Heartbeat(None).to_frame().unwrap();
        assert_eq!(frame.to_json().unwrap(), r#"{"op":1,"d":null}"#);
    }
}
