use super::{EncryptionMode, SpeakingFlags};
use crate::snowflake::Snowflake;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// Opcode 0: identifies with the session from the main gateway.
#[derive(Clone, Derivative, Deserialize, Eq, PartialEq, Serialize)]
#[derivative(Debug)]
pub struct Identify {
    /// Guild of the call.
    pub server_id: Snowflake,
    /// The current user.
    pub user_id: Snowflake,
    /// Session ID from `VOICE_STATE_UPDATE`.
    pub session_id: String,
    #[derivative(Debug = "ignore")]
    /// Token from `VOICE_SERVER_UPDATE`.
    pub token: String,
}

/// Address, port and encryption mode chosen by the client.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ProtocolData {
    /// External IP found by UDP IP discovery.
    pub address: String,
    /// External port found by UDP IP discovery.
    pub port: u16,
    /// Encryption mode name.
    pub mode: String,
}

/// Opcode 1: selects the protocol used to send voice data.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SelectProtocol {
    /// Always `udp`.
    pub protocol: String,
    /// Connection details.
    pub data: ProtocolData,
}

impl SelectProtocol {
    /// Selects UDP at the discovered address, with `mode` encryption.
    pub fn udp(address: impl Into<String>, port: u16, mode: EncryptionMode) -> Self {
        Self {
            protocol: "udp".to_owned(),
            data: ProtocolData {
                address: address.into(),
                port,
                mode: mode.to_request_str().to_owned(),
            },
        }
    }
}

/// Opcode 2: the voice server's UDP endpoint and supported modes.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Ready {
    /// SSRC assigned to the client.
    pub ssrc: u32,
    /// Voice server IP.
    pub ip: String,
    /// Voice server UDP port.
    pub port: u16,
    /// Supported encryption mode names.
    pub modes: Vec<String>,
}

impl Ready {
    /// Picks the preferred encryption mode among those offered.
    pub fn negotiate_mode(&self) -> Option<EncryptionMode> {
        EncryptionMode::negotiate(&self.modes, EncryptionMode::PREFERENCE)
    }
}

/// Opcode 3: keeps the connection alive.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Heartbeat {
    /// Nonce, echoed in the acknowledgement.
    pub t: u64,
    /// Last sequence number received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_ack: Option<u64>,
}

/// Opcode 6: acknowledges a heartbeat.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct HeartbeatAck {
    /// The heartbeat's nonce.
    pub t: u64,
}

/// Opcode 4: the encryption mode and key for voice data.
#[derive(Clone, Derivative, Deserialize, Eq, PartialEq, Serialize)]
#[derivative(Debug)]
pub struct SessionDescription {
    /// Encryption mode name.
    pub mode: String,
    #[derivative(Debug = "ignore")]
    /// 32-byte secret key.
    pub secret_key: Vec<u8>,
}

impl SessionDescription {
    /// The selected mode, if it is one this crate knows.
    pub fn encryption_mode(&self) -> Option<EncryptionMode> {
        EncryptionMode::from_request_str(&self.mode)
    }
}

/// Opcode 5: a user started or stopped speaking.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Speaking {
    /// Transmission modes in use.
    pub speaking: SpeakingFlags,
    /// Always `0` for bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    /// SSRC of the audio source.
    pub ssrc: u32,
    /// Speaking user, sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Snowflake>,
}

/// Opcode 7: resumes a dropped connection.
#[derive(Clone, Derivative, Deserialize, Eq, PartialEq, Serialize)]
#[derivative(Debug)]
pub struct Resume {
    /// Guild of the call.
    pub server_id: Snowflake,
    /// Session ID from `VOICE_STATE_UPDATE`.
    pub session_id: String,
    #[derivative(Debug = "ignore")]
    /// Token from `VOICE_SERVER_UPDATE`.
    pub token: String,
    /// Last sequence number received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_ack: Option<u64>,
}

/// Opcode 8: heartbeat interval.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Hello {
    /// Heartbeat interval in milliseconds, which may be fractional.
    pub heartbeat_interval: f64,
}

/// Opcode 11: users connected to the call.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ClientsConnect {
    /// Connected users.
    pub user_ids: Vec<Snowflake>,
}

/// Opcode 13: a user left the call.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ClientDisconnect {
    /// Disconnected user.
    pub user_id: Snowflake,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::voice::VoiceEvent;
    use serde_json::json;

    #[test]
    fn select_protocol_uses_request_name() {
        let select = SelectProtocol::udp("127.0.0.1", 1337, EncryptionMode::Aes256Gcm);

        assert_eq!(
            serde_json::to_value(VoiceEvent::from(select)).unwrap(),
            json!({
                "op": 1,
                "d": {
                    "protocol": "udp",
                    "data": {"address": "127.0.0.1", "port": 1337, "mode": "aead_aes256_gcm_rtpsize"}
                }
            })
        );
    }

    #[test]
    fn ready_negotiates_supported_mode() {
        let ready: Ready = serde_json::from_value(json!({
            "ssrc": 1,
            "ip": "127.0.0.1",
            "port": 1234,
            "modes": ["xsalsa20_poly1305", "aead_xchacha20_poly1305_rtpsize", "some_new_mode"],
            "heartbeat_interval": 1
        }))
        .unwrap();

        assert_eq!(ready.negotiate_mode(), Some(EncryptionMode::XChaCha20Poly1305));
    }

    #[test]
    fn session_description_hides_key() {
        let description: SessionDescription = serde_json::from_value(json!({
            "mode": "aead_aes256_gcm_rtpsize",
            "secret_key": [251, 100, 11]
        }))
        .unwrap();

        assert_eq!(description.encryption_mode(), Some(EncryptionMode::Aes256Gcm));
        assert!(!format!("{:?}", description).contains("251"));
    }
}
