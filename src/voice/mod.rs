//! Payloads, opcodes and close codes of Discord's voice gateway (version 8).
//!
//! See <https://discord.com/developers/docs/topics/voice-connections>

mod encryption;
mod info;
mod payload;

pub use self::{encryption::*, info::*, payload::*};

use crate::error::Result;
use bitflags::bitflags;
use serde::{
    de::{Deserializer, Error as DeError},
    ser::{Error as SerError, Serializer},
    Deserialize,
    Serialize,
};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Voice gateway opcodes.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum VoiceOpcode {
    /// Begins a voice websocket connection.
    Identify = 0,
    /// Selects the voice protocol.
    SelectProtocol = 1,
    /// Completes the websocket handshake.
    Ready = 2,
    /// Keeps the websocket connection alive.
    Heartbeat = 3,
    /// Describes the session.
    SessionDescription = 4,
    /// Indicates which users are speaking.
    Speaking = 5,
    /// Acknowledges a heartbeat.
    HeartbeatAck = 6,
    /// Resumes a connection.
    Resume = 7,
    /// Sent on connect, with the heartbeat interval.
    Hello = 8,
    /// Acknowledges a resume.
    Resumed = 9,
    /// Users connected to the call.
    ClientsConnect = 11,
    /// A user disconnected from the call.
    ClientDisconnect = 13,
}

impl_try_from_repr!(
    VoiceOpcode,
    u8,
    [
        Identify,
        SelectProtocol,
        Ready,
        Heartbeat,
        SessionDescription,
        Speaking,
        HeartbeatAck,
        Resume,
        Hello,
        Resumed,
        ClientsConnect,
        ClientDisconnect,
    ]
);

/// Codes Discord closes the voice websocket with.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u16)]
#[non_exhaustive]
pub enum VoiceCloseCode {
    /// An invalid opcode was sent.
    UnknownOpcode = 4001,
    /// An invalid payload was sent.
    FailedToDecode = 4002,
    /// A payload was sent before identifying.
    NotAuthenticated = 4003,
    /// The token sent with identify was incorrect.
    AuthenticationFailed = 4004,
    /// More than one identify was sent.
    AlreadyAuthenticated = 4005,
    /// The session is no longer valid.
    SessionNoLongerValid = 4006,
    /// The session timed out.
    SessionTimeout = 4009,
    /// The requested server could not be found.
    ServerNotFound = 4011,
    /// An unrecognised protocol was selected.
    UnknownProtocol = 4012,
    /// Kicked from the channel, the channel was deleted, or the client
    /// joined another call.
    Disconnected = 4014,
    /// The voice server crashed.
    VoiceServerCrashed = 4015,
    /// An unrecognised encryption mode was selected.
    UnknownEncryptionMode = 4016,
    /// End-to-end encryption is required by the call.
    E2eeRequired = 4017,
    /// A malformed request was sent.
    BadRequest = 4020,
    /// The client was rate limited.
    RateLimited = 4021,
    /// The call was terminated.
    CallTerminated = 4022,
}

impl_try_from_repr!(
    VoiceCloseCode,
    u16,
    [
        UnknownOpcode,
        FailedToDecode,
        NotAuthenticated,
        AuthenticationFailed,
        AlreadyAuthenticated,
        SessionNoLongerValid,
        SessionTimeout,
        ServerNotFound,
        UnknownProtocol,
        Disconnected,
        VoiceServerCrashed,
        UnknownEncryptionMode,
        E2eeRequired,
        BadRequest,
        RateLimited,
        CallTerminated,
    ]
);

impl VoiceCloseCode {
    /// Returns whether the session can be resumed after this close code.
    ///
    /// Any other code needs a new session from the main gateway.
    pub fn should_resume(self) -> bool {
        matches!(self, VoiceCloseCode::VoiceServerCrashed)
    }
}

bitflags! {
    /// How a user is transmitting audio.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct SpeakingFlags: u8 {
        /// Normal transmission of voice audio.
        const MICROPHONE = 1 << 0;
        /// Transmission of context audio for video, without a speaking indicator.
        const SOUNDSHARE = 1 << 1;
        /// Priority speaker, lowering the audio of other speakers.
        const PRIORITY = 1 << 2;
    }
}

impl_bits_serde!(SpeakingFlags, u8);

/// A voice gateway message, with its data decoded by opcode.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum VoiceEvent {
    /// Opcode 0.
    Identify(Identify),
    /// Opcode 1.
    SelectProtocol(SelectProtocol),
    /// Opcode 2.
    Ready(Ready),
    /// Opcode 3.
    Heartbeat(Heartbeat),
    /// Opcode 4.
    SessionDescription(SessionDescription),
    /// Opcode 5.
    Speaking(Speaking),
    /// Opcode 6.
    HeartbeatAck(HeartbeatAck),
    /// Opcode 7.
    Resume(Resume),
    /// Opcode 8.
    Hello(Hello),
    /// Opcode 9.
    Resumed,
    /// Opcode 11.
    ClientsConnect(ClientsConnect),
    /// Opcode 13.
    ClientDisconnect(ClientDisconnect),
}

#[derive(Deserialize, Serialize)]
struct RawVoiceFrame {
    op: VoiceOpcode,
    #[serde(default)]
    d: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seq: Option<u64>,
}

impl VoiceEvent {
    /// Opcode this event is sent with.
    pub fn opcode(&self) -> VoiceOpcode {
        match self {
            Self::Identify(_) => VoiceOpcode::Identify,
            Self::SelectProtocol(_) => VoiceOpcode::SelectProtocol,
            Self::Ready(_) => VoiceOpcode::Ready,
            Self::Heartbeat(_) => VoiceOpcode::Heartbeat,
            Self::SessionDescription(_) => VoiceOpcode::SessionDescription,
            Self::Speaking(_) => VoiceOpcode::Speaking,
            Self::HeartbeatAck(_) => VoiceOpcode::HeartbeatAck,
            Self::Resume(_) => VoiceOpcode::Resume,
            Self::Hello(_) => VoiceOpcode::Hello,
            Self::Resumed => VoiceOpcode::Resumed,
            Self::ClientsConnect(_) => VoiceOpcode::ClientsConnect,
            Self::ClientDisconnect(_) => VoiceOpcode::ClientDisconnect,
        }
    }

    /// Decodes an event from voice gateway JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encodes this event as voice gateway JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn data(&self) -> serde_json::Result<Value> {
        match self {
            Self::Identify(d) => serde_json::to_value(d),
            Self::SelectProtocol(d) => serde_json::to_value(d),
            Self::Ready(d) => serde_json::to_value(d),
            Self::Heartbeat(d) => serde_json::to_value(d),
            Self::SessionDescription(d) => serde_json::to_value(d),
            Self::Speaking(d) => serde_json::to_value(d),
            Self::HeartbeatAck(d) => serde_json::to_value(d),
            Self::Resume(d) => serde_json::to_value(d),
            Self::Hello(d) => serde_json::to_value(d),
            Self::Resumed => Ok(Value::Null),
            Self::ClientsConnect(d) => serde_json::to_value(d),
            Self::ClientDisconnect(d) => serde_json::to_value(d),
        }
    }

    fn from_raw(op: VoiceOpcode, d: Value) -> serde_json::Result<Self> {
        use serde_json::from_value;

        Ok(match op {
            VoiceOpcode::Identify => Self::Identify(from_value(d)?),
            VoiceOpcode::SelectProtocol => Self::SelectProtocol(from_value(d)?),
            VoiceOpcode::Ready => Self::Ready(from_value(d)?),
            VoiceOpcode::Heartbeat => Self::Heartbeat(from_value(d)?),
            VoiceOpcode::SessionDescription => Self::SessionDescription(from_value(d)?),
            VoiceOpcode::Speaking => Self::Speaking(from_value(d)?),
            VoiceOpcode::HeartbeatAck => Self::HeartbeatAck(from_value(d)?),
            VoiceOpcode::Resume => Self::Resume(from_value(d)?),
            VoiceOpcode::Hello => Self::Hello(from_value(d)?),
            VoiceOpcode::Resumed => Self::Resumed,
            VoiceOpcode::ClientsConnect => Self::ClientsConnect(from_value(d)?),
            VoiceOpcode::ClientDisconnect => Self::ClientDisconnect(from_value(d)?),
        })
    }
}

impl Serialize for VoiceEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let d = self.data().map_err(S::Error::custom)?;

        RawVoiceFrame {
            op: self.opcode(),
            d,
            seq: None,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VoiceEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        VoiceFrame::deserialize(deserializer).map(|frame| frame.event)
    }
}

/// A voice gateway message together with its sequence number.
///
/// Servers number their messages with `seq`. The last one seen is echoed back
/// as `seq_ack` in [`Heartbeat`] and [`Resume`], so a client that resumes
/// should decode frames with this type rather than bare [`VoiceEvent`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct VoiceFrame {
    /// Decoded message.
    pub event: VoiceEvent,
    /// Sequence number, absent on client messages.
    pub seq: Option<u64>,
}

impl VoiceFrame {
    /// Decodes a frame from voice gateway JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encodes this frame as voice gateway JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<VoiceEvent> for VoiceFrame {
    fn from(event: VoiceEvent) -> Self {
        Self { event, seq: None }
    }
}

impl Serialize for VoiceFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let d = self.event.data().map_err(S::Error::custom)?;

        RawVoiceFrame {
            op: self.event.opcode(),
            d,
            seq: self.seq,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VoiceFrame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawVoiceFrame::deserialize(deserializer)?;

        Ok(Self {
            event: VoiceEvent::from_raw(raw.op, raw.d).map_err(D::Error::custom)?,
            seq: raw.seq,
        })
    }
}

macro_rules! impl_from_payload {
    ($($Variant:ident),* $(,)?) => {
        $(
            impl From<$Variant> for VoiceEvent {
                fn from(payload: $Variant) -> Self {
                    VoiceEvent::$Variant(payload)
                }
            }
        )*
    };
}

impl_from_payload!(
    Identify,
    SelectProtocol,
    Ready,
    Heartbeat,
    SessionDescription,
    Speaking,
    HeartbeatAck,
    Resume,
    Hello,
    ClientsConnect,
    ClientDisconnect,
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::snowflake::Snowflake;
    use serde_json::json;
    use std::convert::TryFrom;

    #[test]
    fn hello_decodes_fractional_interval() {
        let event = VoiceEvent::from_json(r#"{"op":8,"d":{"heartbeat_interval":41250.0}}"#).unwrap();

        assert_eq!(event, VoiceEvent::Hello(Hello { heartbeat_interval: 41250.0 }));
    }

    #[test]
    fn heartbeat_round_trips_with_seq_ack() {
        let event = VoiceEvent::from(Heartbeat {
            t: 1_501_184_119_561,
            seq_ack: Some(10),
        });

        let text = event.to_json().unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&text).unwrap(),
            json!({"op": 3, "d": {"t": 1_501_184_119_561u64, "seq_ack": 10}})
        );
        assert_eq!(VoiceEvent::from_json(&text).unwrap(), event);
    }

    #[test]
    fn speaking_flags_on_the_wire() {
        let event = VoiceEvent::from_json(
            r#"{"op":5,"d":{"speaking":5,"delay":0,"ssrc":1,"user_id":"80351110224678912"}}"#,
        )
        .unwrap();

        match event {
            VoiceEvent::Speaking(speaking) => {
                assert_eq!(speaking.speaking, SpeakingFlags::MICROPHONE | SpeakingFlags::PRIORITY);
                assert_eq!(speaking.user_id, Some(Snowflake::from("80351110224678912")));
            },
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn frame_keeps_sequence_number() {
        let text = r#"{"op":5,"seq":42,"d":{"speaking":1,"delay":0,"ssrc":7}}"#;
        let frame = VoiceFrame::from_json(text).unwrap();

        assert_eq!(frame.seq, Some(42));
        assert_eq!(frame.event.opcode(), VoiceOpcode::Speaking);
        assert_eq!(
            serde_json::from_str::<Value>(&frame.to_json().unwrap()).unwrap(),
            serde_json::from_str::<Value>(text).unwrap()
        );

        let ack = VoiceFrame::from(VoiceEvent::from(Heartbeat {
            t: 1,
            seq_ack: frame.seq,
        }));
        assert_eq!(ack.to_json().unwrap(), r#"{"op":3,"d":{"t":1,"seq_ack":42}}"#);
    }

    #[test]
    fn resumed_has_null_data() {
        assert_eq!(VoiceEvent::Resumed.to_json().unwrap(), r#"{"op":9,"d":null}"#);
        assert_eq!(VoiceEvent::from_json(r#"{"op":9,"d":null}"#).unwrap(), VoiceEvent::Resumed);
    }

    #[test]
    fn unknown_opcode_is_json_error() {
        assert!(matches!(
            VoiceEvent::from_json(r#"{"op":12,"d":{}}"#),
            Err(crate::Error::Json(_))
        ));
    }

    #[test]
    fn close_codes() {
        assert_eq!(VoiceCloseCode::try_from(4015u16), Ok(VoiceCloseCode::VoiceServerCrashed));
        assert!(VoiceCloseCode::VoiceServerCrashed.should_resume());
        assert!(!VoiceCloseCode::Disconnected.should_resume());
        assert_eq!(VoiceCloseCode::try_from(4007u16), Err(4007));
    }
}
