use super::{Command, GatewayIntents, GatewayOpcode};
use crate::{
    model::{GuildMember, UnavailableGuild, User},
    snowflake::Snowflake,
};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Client properties sent when identifying.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IdentifyProperties {
    /// Operating system.
    pub os: String,
    /// Library name.
    pub browser: String,
    /// Library name.
    pub device: String,
}

impl IdentifyProperties {
    /// Properties naming this host's OS and the given library.
    pub fn new(library: &str) -> Self {
        Self {
            os: std::env::consts::OS.to_owned(),
            browser: library.to_owned(),
            device: library.to_owned(),
        }
    }
}

/// Opcode 2: starts a new session.
#[derive(Clone, Derivative, Deserialize, Serialize)]
#[derivative(Debug)]
pub struct Identify {
    #[derivative(Debug = "ignore")]
    /// Bot token.
    pub token: String,
    /// Client properties.
    pub properties: IdentifyProperties,
    /// Whether the client supports compressed payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    /// Member count above which offline members are not sent (50-250).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_threshold: Option<u8>,
    /// `[shard_id, num_shards]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard: Option<[u32; 2]>,
    /// Initial presence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<UpdatePresence>,
    /// Subscribed event groups.
    pub intents: GatewayIntents,
}

impl Identify {
    /// An unsharded identify with no initial presence.
    pub fn new(token: impl Into<String>, intents: GatewayIntents, properties: IdentifyProperties) -> Self {
        Self {
            token: token.into(),
            properties,
            compress: None,
            large_threshold: None,
            shard: None,
            presence: None,
            intents,
        }
    }
}

impl Command for Identify {
    const OPCODE: GatewayOpcode = GatewayOpcode::Identify;
}

/// Opcode 6: replays events missed since `seq`.
#[derive(Clone, Derivative, Deserialize, Eq, PartialEq, Serialize)]
#[derivative(Debug)]
pub struct Resume {
    #[derivative(Debug = "ignore")]
    /// Bot token.
    pub token: String,
    /// Session to resume.
    pub session_id: String,
    /// Last sequence number received.
    pub seq: u64,
}

impl Command for Resume {
    const OPCODE: GatewayOpcode = GatewayOpcode::Resume;
}

/// Opcode 1: carries the last sequence number received, if any.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Heartbeat(pub Option<u64>);

impl Command for Heartbeat {
    const OPCODE: GatewayOpcode = GatewayOpcode::Heartbeat;
}

/// Opcode 8: requests `GUILD_MEMBERS_CHUNK` dispatches.
///
/// Exactly one of `query` and `user_ids` should be set.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RequestGuildMembers {
    /// Guild to fetch members of.
    pub guild_id: Snowflake,
    /// Username prefix, or `""` for all members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Maximum members to send, `0` for all with an empty query.
    pub limit: u32,
    /// Whether to include presences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presences: Option<bool>,
    /// Specific users to fetch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<Snowflake>,
    /// Echoed back in the chunk dispatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

impl Command for RequestGuildMembers {
    const OPCODE: GatewayOpcode = GatewayOpcode::RequestGuildMembers;
}

/// Opcode 4: joins, moves or leaves a voice channel.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UpdateVoiceState {
    /// Guild of the voice channel.
    pub guild_id: Snowflake,
    /// Channel to join, or `None` to disconnect.
    pub channel_id: Option<Snowflake>,
    /// Whether the client is muted.
    pub self_mute: bool,
    /// Whether the client is deafened.
    pub self_deaf: bool,
}

impl UpdateVoiceState {
    /// Joins `channel_id`, or leaves voice in the guild when `None`.
    pub fn join(guild_id: Snowflake, channel_id: Option<Snowflake>) -> Self {
        Self {
            guild_id,
            channel_id,
            self_mute: false,
            self_deaf: false,
        }
    }
}

impl Command for UpdateVoiceState {
    const OPCODE: GatewayOpcode = GatewayOpcode::VoiceStateUpdate;
}

/// Online status.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    /// Online.
    Online,
    /// Do not disturb.
    Dnd,
    /// AFK.
    Idle,
    /// Shown as offline.
    Invisible,
    /// Offline.
    Offline,
}

/// Kind of an [`Activity`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ActivityType {
    /// "Playing {name}"
    Playing = 0,
    /// "Streaming {details}"
    Streaming = 1,
    /// "Listening to {name}"
    Listening = 2,
    /// "Watching {name}"
    Watching = 3,
    /// "{emoji} {state}"
    Custom = 4,
    /// "Competing in {name}"
    Competing = 5,
}

impl_try_from_repr!(
    ActivityType,
    u8,
    [Playing, Streaming, Listening, Watching, Custom, Competing]
);

/// An activity shown in a user's presence.
///
/// Bots may only send `name`, `state`, `type` and `url`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Activity {
    /// Activity name.
    pub name: String,
    /// Activity type.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Stream URL, for streaming activities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Status text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Opcode 3: updates the client's presence.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UpdatePresence {
    /// Unix time in milliseconds the client went idle, if idle.
    pub since: Option<u64>,
    /// Activities.
    pub activities: Vec<Activity>,
    /// Status.
    pub status: StatusType,
    /// Whether the client is AFK.
    pub afk: bool,
}

impl Command for UpdatePresence {
    const OPCODE: GatewayOpcode = GatewayOpcode::PresenceUpdate;
}

/// Opcode 10: first frame of every connection.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Hello {
    /// Heartbeat interval in milliseconds.
    pub heartbeat_interval: u64,
}

/// Partial application object in [`Ready`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReadyApplication {
    /// Application ID.
    pub id: Snowflake,
    /// Application flags.
    pub flags: u64,
}

/// `READY` dispatch.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Ready {
    /// Gateway version.
    pub v: u8,
    /// The current user.
    pub user: User,
    /// Guilds the user is in, all unavailable at first.
    pub guilds: Vec<UnavailableGuild>,
    /// Session ID for resuming.
    pub session_id: String,
    /// Gateway URL to resume with.
    pub resume_gateway_url: String,
    /// `[shard_id, num_shards]`, if sharded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard: Option<[u32; 2]>,
    /// The current application.
    pub application: ReadyApplication,
}

/// A user's voice connection status, from `VOICE_STATE_UPDATE`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VoiceState {
    /// Guild of the voice state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// Connected channel, `None` once disconnected.
    pub channel_id: Option<Snowflake>,
    /// User this voice state is for.
    pub user_id: Snowflake,
    /// The user's guild member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<GuildMember>,
    /// Session ID for the voice gateway.
    pub session_id: String,
    /// Whether the user is server-deafened.
    pub deaf: bool,
    /// Whether the user is server-muted.
    pub mute: bool,
    /// Whether the user is self-deafened.
    pub self_deaf: bool,
    /// Whether the user is self-muted.
    pub self_mute: bool,
    /// Whether the user is streaming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_stream: Option<bool>,
    /// Whether the user's camera is on.
    pub self_video: bool,
    /// Whether the user is kept from speaking.
    pub suppress: bool,
    /// When the user asked to speak in a stage.
    #[serde(default)]
    pub request_to_speak_timestamp: Option<String>,
}

/// `VOICE_SERVER_UPDATE` dispatch.
#[derive(Clone, Derivative, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[derivative(Debug)]
pub struct VoiceServerUpdate {
    #[derivative(Debug = "ignore")]
    /// Voice connection token.
    pub token: String,
    /// Guild this voice server is for.
    pub guild_id: Snowflake,
    /// Voice server host; `None` while a server is being reallocated.
    pub endpoint: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn identify_hides_token() {
        let identify = Identify::new(
            "my_token",
            GatewayIntents::GUILDS,
            IdentifyProperties::new("discord-api-types"),
        );

        let debug = format!("{:?}", identify);
        assert!(!debug.contains("my_token"));

        let frame = identify.to_frame().unwrap();
        assert_eq!(frame.op, GatewayOpcode::Identify);
        assert_eq!(frame.d["token"], json!("my_token"));
        assert_eq!(frame.d["intents"], json!(1));
        assert!(frame.d.get("shard").is_none());
    }

    #[test]
    fn leave_voice_sends_null_channel() {
        let frame = UpdateVoiceState::join(Snowflake::from("41771983423143937"), None)
            .to_frame()
            .unwrap();

        assert_eq!(
            frame.d,
            json!({
                "guild_id": "41771983423143937",
                "channel_id": null,
                "self_mute": false,
                "self_deaf": false
            })
        );
    }

    #[test]
    fn presence_payload() {
        let presence = UpdatePresence {
            since: None,
            activities: vec![Activity {
                name: "music".to_owned(),
                kind: ActivityType::Listening,
                url: None,
                state: None,
            }],
            status: StatusType::Dnd,
            afk: false,
        };

        assert_eq!(
            serde_json::to_value(&presence).unwrap(),
            json!({
                "since": null,
                "activities": [{"name": "music", "type": 2}],
                "status": "dnd",
                "afk": false
            })
        );
    }

    #[test]
    fn voice_server_update_hides_token() {
        let update: VoiceServerUpdate = serde_json::from_value(json!({
            "token": "my_token",
            "guild_id": "41771983423143937",
            "endpoint": "sweetwater-12345.discord.media:2048"
        }))
        .unwrap();

        assert!(!format!("{:?}", update).contains("my_token"));
    }
}
