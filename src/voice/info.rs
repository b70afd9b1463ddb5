use super::{Identify, Resume};
use crate::{constants::VOICE_GATEWAY_VERSION, snowflake::Snowflake};
use std::fmt;

/// Parameters needed to connect to a voice server.
///
/// Discord splits these across the current user's `VOICE_STATE_UPDATE` (the
/// session ID) and the guild's `VOICE_SERVER_UPDATE` (endpoint and token).
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct ConnectionInfo {
    /// Voice channel being joined.
    pub channel_id: Snowflake,
    /// Host of the voice websocket server assigned to this call.
    pub endpoint: String,
    /// Guild of the channel.
    ///
    /// Bots cannot join guildless (direct message) calls.
    pub guild_id: Snowflake,
    /// Session ID from the current user's voice state.
    pub session_id: String,
    /// Ephemeral secret validating the session.
    pub token: String,
    /// The current user.
    pub user_id: Snowflake,
}

impl ConnectionInfo {
    /// Combines a voice state and a voice server update.
    ///
    /// Returns `None` if the state has left voice, the server update has no
    /// endpoint yet, or the two belong to different guilds.
    #[cfg(feature = "gateway")]
    pub fn from_updates(
        state: &crate::gateway::VoiceState,
        server: &crate::gateway::VoiceServerUpdate,
    ) -> Option<Self> {
        if state.guild_id.as_ref() != Some(&server.guild_id) {
            return None;
        }

        Some(Self {
            channel_id: state.channel_id.clone()?,
            endpoint: server.endpoint.clone()?,
            guild_id: server.guild_id.clone(),
            session_id: state.session_id.clone(),
            token: server.token.clone(),
            user_id: state.user_id.clone(),
        })
    }

    /// Voice websocket URL for this server.
    pub fn ws_url(&self) -> String {
        let host = self
            .endpoint
            .trim_start_matches("wss://")
            .trim_end_matches('/');
        format!("wss://{}/?v={}", host, VOICE_GATEWAY_VERSION)
    }

    /// The identify payload for this session.
    pub fn identify(&self) -> Identify {
        Identify {
            server_id: self.guild_id.clone(),
            user_id: self.user_id.clone(),
            session_id: self.session_id.clone(),
            token: self.token.clone(),
        }
    }

    /// The resume payload for this session.
    ///
    /// `seq_ack` is the last [`VoiceFrame::seq`](super::VoiceFrame::seq) seen.
    pub fn resume(&self, seq_ack: Option<u64>) -> Resume {
        Resume {
            server_id: self.guild_id.clone(),
            session_id: self.session_id.clone(),
            token: self.token.clone(),
            seq_ack,
        }
    }
}

impl fmt::Debug for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionInfo")
            .field("channel_id", &self.channel_id)
            .field("endpoint", &self.endpoint)
            .field("guild_id", &self.guild_id)
            .field("session_id", &self.session_id)
            .field("token", &"<secret>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn info() -> ConnectionInfo {
        ConnectionInfo {
            channel_id: "3".into(),
            endpoint: "eu.discord.media:443".to_owned(),
            guild_id: "1".into(),
            session_id: "session".to_owned(),
            token: "secret_tok".to_owned(),
            user_id: "2".into(),
        }
    }

    #[test]
    fn builds_payloads_without_leaking_token() {
        let info = info();

        assert_eq!(info.ws_url(), "wss://eu.discord.media:443/?v=8");
        assert_eq!(info.identify().server_id.as_str(), "1");
        assert_eq!(info.identify().session_id, "session");
        assert_eq!(info.resume(Some(5)).seq_ack, Some(5));
        assert!(!format!("{:?}", info).contains("secret_tok"));
    }

    #[test]
    fn ws_url_accepts_scheme_and_trailing_slash() {
        let mut info = info();
        info.endpoint = "wss://eu.discord.media/".to_owned();

        assert_eq!(info.ws_url(), "wss://eu.discord.media/?v=8");
    }

    #[cfg(feature = "gateway")]
    #[test]
    fn combines_gateway_updates() {
        use crate::gateway::{VoiceServerUpdate, VoiceState};

        let mut state: VoiceState = serde_json::from_value(serde_json::json!({
            "guild_id": "1",
            "channel_id": "3",
            "user_id": "2",
            "session_id": "session",
            "deaf": false,
            "mute": false,
            "self_deaf": false,
            "self_mute": false,
            "self_video": false,
            "suppress": false,
            "request_to_speak_timestamp": null
        }))
        .unwrap();
        let mut server: VoiceServerUpdate = serde_json::from_value(serde_json::json!({
            "token": "secret_tok",
            "guild_id": "1",
            "endpoint": "eu.discord.media:443"
        }))
        .unwrap();

        assert_eq!(ConnectionInfo::from_updates(&state, &server), Some(info()));

        server.endpoint = None;
        assert_eq!(ConnectionInfo::from_updates(&state, &server), None);

        server.endpoint = Some("eu.discord.media:443".to_owned());
        state.channel_id = None;
        assert_eq!(ConnectionInfo::from_updates(&state, &server), None);

        state.channel_id = Some("3".into());
        state.guild_id = Some("9".into());
        assert_eq!(ConnectionInfo::from_updates(&state, &server), None);
    }
}
