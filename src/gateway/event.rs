use super::{GatewayFrame, GatewayOpcode, Ready, VoiceServerUpdate, VoiceState};
use crate::{
    error::Result,
    model::{Channel, Emoji, Guild, GuildMember, Message, UnavailableGuild, User},
    snowflake::Snowflake,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// `GUILD_MEMBER_ADD` dispatch.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuildMemberAdd {
    /// Guild the member joined.
    pub guild_id: Snowflake,
    /// The new member.
    #[serde(flatten)]
    pub member: GuildMember,
}

/// `GUILD_MEMBER_REMOVE` dispatch.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildMemberRemove {
    /// Guild the user left.
    pub guild_id: Snowflake,
    /// The removed user.
    pub user: User,
}

/// `MESSAGE_DELETE` dispatch.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageDelete {
    /// Deleted message.
    pub id: Snowflake,
    /// Channel of the message.
    pub channel_id: Snowflake,
    /// Guild of the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

/// `MESSAGE_DELETE_BULK` dispatch.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageDeleteBulk {
    /// Deleted messages.
    pub ids: Vec<Snowflake>,
    /// Channel of the messages.
    pub channel_id: Snowflake,
    /// Guild of the messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

/// `MESSAGE_REACTION_ADD` and `MESSAGE_REACTION_REMOVE` dispatches.
///
/// `member` and `message_author_id` are only sent on add.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MessageReaction {
    /// Reacting user.
    pub user_id: Snowflake,
    /// Channel of the message.
    pub channel_id: Snowflake,
    /// Message reacted to.
    pub message_id: Snowflake,
    /// Guild of the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// The reacting member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<GuildMember>,
    /// The reaction emoji.
    pub emoji: Emoji,
    /// Author of the message reacted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_author_id: Option<Snowflake>,
    /// Whether this is a super-reaction.
    #[serde(default)]
    pub burst: bool,
    /// `0` for normal reactions, `1` for super-reactions.
    #[serde(rename = "type", default)]
    pub kind: u8,
}

/// `TYPING_START` dispatch.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypingStart {
    /// Channel being typed in.
    pub channel_id: Snowflake,
    /// Guild of the channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// Typing user.
    pub user_id: Snowflake,
    /// Unix time in seconds typing started.
    pub timestamp: u64,
    /// The typing member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<GuildMember>,
}

/// A decoded dispatch (opcode 0) event.
///
/// Events this crate does not model are kept by name with their raw data.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DispatchEvent {
    /// `READY`
    Ready(Box<Ready>),
    /// `RESUMED`
    Resumed,
    /// `GUILD_CREATE`
    GuildCreate(Box<Guild>),
    /// `GUILD_UPDATE`
    GuildUpdate(Box<Guild>),
    /// `GUILD_DELETE`
    GuildDelete(UnavailableGuild),
    /// `GUILD_MEMBER_ADD`
    GuildMemberAdd(Box<GuildMemberAdd>),
    /// `GUILD_MEMBER_REMOVE`
    GuildMemberRemove(GuildMemberRemove),
    /// `CHANNEL_CREATE`
    ChannelCreate(Box<Channel>),
    /// `CHANNEL_UPDATE`
    ChannelUpdate(Box<Channel>),
    /// `CHANNEL_DELETE`
    ChannelDelete(Box<Channel>),
    /// `THREAD_CREATE`
    ThreadCreate(Box<Channel>),
    /// `MESSAGE_CREATE`
    MessageCreate(Box<Message>),
    /// `MESSAGE_UPDATE`
    MessageUpdate(Box<Message>),
    /// `MESSAGE_DELETE`
    MessageDelete(MessageDelete),
    /// `MESSAGE_DELETE_BULK`
    MessageDeleteBulk(MessageDeleteBulk),
    /// `MESSAGE_REACTION_ADD`
    MessageReactionAdd(Box<MessageReaction>),
    /// `MESSAGE_REACTION_REMOVE`
    MessageReactionRemove(Box<MessageReaction>),
    /// `TYPING_START`
    TypingStart(Box<TypingStart>),
    /// `VOICE_STATE_UPDATE`
    VoiceStateUpdate(Box<VoiceState>),
    /// `VOICE_SERVER_UPDATE`
    VoiceServerUpdate(VoiceServerUpdate),
    /// Any other event.
    Unknown {
        /// Event name, from the frame's `t`.
        name: String,
        /// Raw event data.
        data: Value,
    },
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T> {
    Ok(serde_json::from_value(data)?)
}

impl DispatchEvent {
    /// Decodes the event carried by a dispatch frame.
    ///
    /// Returns `Ok(None)` for frames with any other opcode, or without an
    /// event name.
    pub fn from_frame(frame: GatewayFrame) -> Result<Option<Self>> {
        if frame.op != GatewayOpcode::Dispatch {
            return Ok(None);
        }

        let name = match frame.t {
            Some(name) => name,
            None => return Ok(None),
        };

        Self::from_name(name, frame.d).map(Some)
    }

    /// Decodes the data of the dispatch named `name`.
    pub fn from_name(name: String, data: Value) -> Result<Self> {
        Ok(match name.as_str() {
            "READY" => Self::Ready(decode(data)?),
            "RESUMED" => Self::Resumed,
            "GUILD_CREATE" => Self::GuildCreate(decode(data)?),
            "GUILD_UPDATE" => Self::GuildUpdate(decode(data)?),
            "GUILD_DELETE" => Self::GuildDelete(decode(data)?),
            "GUILD_MEMBER_ADD" => Self::GuildMemberAdd(decode(data)?),
            "GUILD_MEMBER_REMOVE" => Self::GuildMemberRemove(decode(data)?),
            "CHANNEL_CREATE" => Self::ChannelCreate(decode(data)?),
            "CHANNEL_UPDATE" => Self::ChannelUpdate(decode(data)?),
            "CHANNEL_DELETE" => Self::ChannelDelete(decode(data)?),
            "THREAD_CREATE" => Self::ThreadCreate(decode(data)?),
            "MESSAGE_CREATE" => Self::MessageCreate(decode(data)?),
            "MESSAGE_UPDATE" => Self::MessageUpdate(decode(data)?),
            "MESSAGE_DELETE" => Self::MessageDelete(decode(data)?),
            "MESSAGE_DELETE_BULK" => Self::MessageDeleteBulk(decode(data)?),
            "MESSAGE_REACTION_ADD" => Self::MessageReactionAdd(decode(data)?),
            "MESSAGE_REACTION_REMOVE" => Self::MessageReactionRemove(decode(data)?),
            "TYPING_START" => Self::TypingStart(decode(data)?),
            "VOICE_STATE_UPDATE" => Self::VoiceStateUpdate(decode(data)?),
            "VOICE_SERVER_UPDATE" => Self::VoiceServerUpdate(decode(data)?),
            _ => {
                trace!("Keeping unmodelled dispatch {} as raw data.", name);
                Self::Unknown { name, data }
            },
        })
    }

    /// The event's gateway name, such as `MESSAGE_CREATE`.
    pub fn name(&self) -> &str {
        match self {
            Self::Ready(_) => "READY",
            Self::Resumed => "RESUMED",
            Self::GuildCreate(_) => "GUILD_CREATE",
            Self::GuildUpdate(_) => "GUILD_UPDATE",
            Self::GuildDelete(_) => "GUILD_DELETE",
            Self::GuildMemberAdd(_) => "GUILD_MEMBER_ADD",
            Self::GuildMemberRemove(_) => "GUILD_MEMBER_REMOVE",
            Self::ChannelCreate(_) => "CHANNEL_CREATE",
            Self::ChannelUpdate(_) => "CHANNEL_UPDATE",
            Self::ChannelDelete(_) => "CHANNEL_DELETE",
            Self::ThreadCreate(_) => "THREAD_CREATE",
            Self::MessageCreate(_) => "MESSAGE_CREATE",
            Self::MessageUpdate(_) => "MESSAGE_UPDATE",
            Self::MessageDelete(_) => "MESSAGE_DELETE",
            Self::MessageDeleteBulk(_) => "MESSAGE_DELETE_BULK",
            Self::MessageReactionAdd(_) => "MESSAGE_REACTION_ADD",
            Self::MessageReactionRemove(_) => "MESSAGE_REACTION_REMOVE",
            Self::TypingStart(_) => "TYPING_START",
            Self::VoiceStateUpdate(_) => "VOICE_STATE_UPDATE",
            Self::VoiceServerUpdate(_) => "VOICE_SERVER_UPDATE",
            Self::Unknown { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn dispatch(t: &str, d: Value) -> GatewayFrame {
        GatewayFrame {
            op: GatewayOpcode::Dispatch,
            d,
            s: Some(42),
            t: Some(t.to_owned()),
        }
    }

    #[test]
    fn message_delete_dispatch() {
        let event = DispatchEvent::from_frame(dispatch(
            "MESSAGE_DELETE",
            json!({"id": "1", "channel_id": "2", "guild_id": "3"}),
        ))
        .unwrap();

        match event {
            Some(DispatchEvent::MessageDelete(delete)) => {
                assert_eq!(delete.id.as_str(), "1");
                assert_eq!(delete.guild_id, Some(Snowflake::from("3")));
            },
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn reaction_add_carries_emoji() {
        let event = DispatchEvent::from_frame(dispatch(
            "MESSAGE_REACTION_ADD",
            json!({
                "user_id": "1",
                "channel_id": "2",
                "message_id": "3",
                "emoji": {"id": null, "name": "👍"},
                "burst": false,
                "type": 0
            }),
        ))
        .unwrap()
        .unwrap();

        assert_eq!(event.name(), "MESSAGE_REACTION_ADD");
        if let DispatchEvent::MessageReactionAdd(reaction) = event {
            assert_eq!(reaction.emoji.reaction_param(), "👍");
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn member_add_flattens_member() {
        let event = DispatchEvent::from_name(
            "GUILD_MEMBER_ADD".to_owned(),
            json!({
                "guild_id": "5",
                "roles": [],
                "joined_at": "2015-04-26T06:26:56.936000+00:00",
                "deaf": false,
                "mute": false
            }),
        )
        .unwrap();

        match event {
            DispatchEvent::GuildMemberAdd(add) => {
                assert_eq!(add.guild_id.as_str(), "5");
                assert!(add.member.roles.is_empty());
            },
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn unknown_events_keep_raw_data() {
        let event = DispatchEvent::from_frame(dispatch("ENTITLEMENT_CREATE", json!({"id": "9"})))
            .unwrap()
            .unwrap();

        assert_eq!(event.name(), "ENTITLEMENT_CREATE");
        assert_eq!(
            event,
            DispatchEvent::Unknown {
                name: "ENTITLEMENT_CREATE".to_owned(),
                data: json!({"id": "9"}),
            }
        );
    }

    #[test]
    fn non_dispatch_frames_are_skipped() {
        let frame = GatewayFrame {
            op: GatewayOpcode::HeartbeatAck,
            d: Value::Null,
            s: None,
            t: None,
        };

        assert!(DispatchEvent::from_frame(frame).unwrap().is_none());
    }

    #[test]
    fn malformed_data_is_json_error() {
        let err = DispatchEvent::from_frame(dispatch("MESSAGE_DELETE", json!({"id": 1})));

        assert!(matches!(err, Err(crate::Error::Json(_))));
    }
}
