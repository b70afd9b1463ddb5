//! Messages and everything embedded in them.

use super::{channel::ChannelType, emoji::Emoji, guild::GuildMember, user::User, Timestamp};
use crate::snowflake::Snowflake;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Kind of a [`Message`].
///
/// Variant names follow Discord's message type table.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum MessageType {
    Default = 0,
    RecipientAdd = 1,
    RecipientRemove = 2,
    Call = 3,
    ChannelNameChange = 4,
    ChannelIconChange = 5,
    ChannelPinnedMessage = 6,
    UserJoin = 7,
    GuildBoost = 8,
    GuildBoostTier1 = 9,
    GuildBoostTier2 = 10,
    GuildBoostTier3 = 11,
    ChannelFollowAdd = 12,
    GuildDiscoveryDisqualified = 14,
    GuildDiscoveryRequalified = 15,
    GuildDiscoveryGracePeriodInitialWarning = 16,
    GuildDiscoveryGracePeriodFinalWarning = 17,
    ThreadCreated = 18,
    Reply = 19,
    ChatInputCommand = 20,
    ThreadStarterMessage = 21,
    GuildInviteReminder = 22,
    ContextMenuCommand = 23,
    AutoModerationAction = 24,
    RoleSubscriptionPurchase = 25,
    InteractionPremiumUpsell = 26,
    StageStart = 27,
    StageEnd = 28,
    StageSpeaker = 29,
    StageTopic = 31,
    GuildApplicationPremiumSubscription = 32,
    GuildIncidentAlertModeEnabled = 36,
    GuildIncidentAlertModeDisabled = 37,
    GuildIncidentReportRaid = 38,
    GuildIncidentReportFalseAlarm = 39,
    PurchaseNotification = 44,
    PollResult = 46,
}

impl_try_from_repr!(
    MessageType,
    u8,
    [
        Default,
        RecipientAdd,
        RecipientRemove,
        Call,
        ChannelNameChange,
        ChannelIconChange,
        ChannelPinnedMessage,
        UserJoin,
        GuildBoost,
        GuildBoostTier1,
        GuildBoostTier2,
        GuildBoostTier3,
        ChannelFollowAdd,
        GuildDiscoveryDisqualified,
        GuildDiscoveryRequalified,
        GuildDiscoveryGracePeriodInitialWarning,
        GuildDiscoveryGracePeriodFinalWarning,
        ThreadCreated,
        Reply,
        ChatInputCommand,
        ThreadStarterMessage,
        GuildInviteReminder,
        ContextMenuCommand,
        AutoModerationAction,
        RoleSubscriptionPurchase,
        InteractionPremiumUpsell,
        StageStart,
        StageEnd,
        StageSpeaker,
        StageTopic,
        GuildApplicationPremiumSubscription,
        GuildIncidentAlertModeEnabled,
        GuildIncidentAlertModeDisabled,
        GuildIncidentReportRaid,
        GuildIncidentReportFalseAlarm,
        PurchaseNotification,
        PollResult,
    ]
);

impl MessageType {
    /// Returns whether a message of this type can be deleted by its author's
    /// guild moderators.
    pub fn is_deletable(self) -> bool {
        !matches!(
            self,
            MessageType::RecipientAdd
                | MessageType::RecipientRemove
                | MessageType::Call
                | MessageType::ChannelNameChange
                | MessageType::ChannelIconChange
                | MessageType::ThreadStarterMessage
        )
    }
}

bitflags! {
    /// Extra message properties.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Published to following channels.
        const CROSSPOSTED = 1 << 0;
        /// Originated from a followed channel.
        const IS_CROSSPOST = 1 << 1;
        /// Embeds are not shown.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Source message of this crosspost was deleted.
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        /// Came from the urgent message system.
        const URGENT = 1 << 4;
        /// Has an associated thread with the same ID.
        const HAS_THREAD = 1 << 5;
        /// Only visible to the user who invoked the interaction.
        const EPHEMERAL = 1 << 6;
        /// Interaction response showing "thinking".
        const LOADING = 1 << 7;
        /// Failed to mention some roles in a thread.
        const FAILED_TO_MENTION_SOME_ROLES_IN_THREAD = 1 << 8;
        /// Does not trigger push and desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        /// Voice message.
        const IS_VOICE_MESSAGE = 1 << 13;
        /// Has a snapshot, via forwarding.
        const HAS_SNAPSHOT = 1 << 14;
        /// Uses components v2.
        const IS_COMPONENTS_V2 = 1 << 15;
    }
}

impl_bits_serde!(MessageFlags, u64);

/// A file attached to a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Attachment {
    /// Attachment ID.
    pub id: Snowflake,
    /// File name.
    pub filename: String,
    /// Title of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description (alt text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// Source URL.
    pub url: String,
    /// Proxied URL.
    pub proxy_url: String,
    /// Image height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Image width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Whether the attachment is ephemeral.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<bool>,
    /// Duration of a voice message, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    /// Base64 sampled waveform of a voice message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waveform: Option<String>,
    /// Attachment flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

/// Footer of an [`Embed`].
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Footer icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Proxied footer icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

/// Image, thumbnail or video of an [`Embed`].
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedMedia {
    /// Source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Proxied URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    /// Height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Provider of an [`Embed`].
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedProvider {
    /// Provider name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Author of an [`Embed`].
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedAuthor {
    /// Author name.
    pub name: String,
    /// Author URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Author icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Proxied author icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

/// A name/value pair in an [`Embed`].
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether the field is displayed inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

/// Rich content attached to a message.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Embed {
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Embed type; always `rich` for webhook embeds.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Title link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Embed timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// Colour code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    /// Image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    /// Thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    /// Video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedMedia>,
    /// Provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,
    /// Author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    /// Fields, at most 25.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

/// Reaction counts split by kind.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReactionCountDetails {
    /// Super-reactions.
    pub burst: u32,
    /// Normal reactions.
    pub normal: u32,
}

/// One emoji's reactions to a message.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Reaction {
    /// Total times this emoji was used.
    pub count: u32,
    /// Counts split by kind.
    #[serde(default)]
    pub count_details: ReactionCountDetails,
    /// Whether the current user reacted with this emoji.
    pub me: bool,
    /// Whether the current user super-reacted with this emoji.
    #[serde(default)]
    pub me_burst: bool,
    /// The emoji.
    pub emoji: Emoji,
    /// Super-reaction colours, as hex strings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub burst_colors: Vec<String>,
}

/// How a [`MessageReference`] relates to its message.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum MessageReferenceType {
    /// A reply or crosspost.
    Default = 0,
    /// A forward.
    Forward = 1,
}

impl_try_from_repr!(MessageReferenceType, u8, [Default, Forward]);

/// Reference to another message: a reply, crosspost, pin or forward source.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageReference {
    /// Reference kind; defaults to [`MessageReferenceType::Default`].
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageReferenceType>,
    /// Referenced message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Snowflake>,
    /// Channel of the referenced message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Guild of the referenced message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// When sending, whether to error if the referenced message is gone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_if_not_exists: Option<bool>,
}

/// Kinds of mention that [`AllowedMentions::parse`] can enable.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowedMentionType {
    /// Role mentions.
    Roles,
    /// User mentions.
    Users,
    /// `@everyone` and `@here`.
    Everyone,
}

/// Controls which mentions in an outgoing message notify anyone.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AllowedMentions {
    /// Mention kinds parsed from the content.
    #[serde(default)]
    pub parse: Vec<AllowedMentionType>,
    /// Roles allowed to be mentioned (max 100).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
    /// Users allowed to be mentioned (max 100).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<Snowflake>,
    /// Whether to mention the author of a replied-to message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_user: Option<bool>,
}

impl AllowedMentions {
    /// Mentions that notify no-one.
    pub fn none() -> Self {
        Self::default()
    }
}

/// A channel mentioned in a crossposted message.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChannelMention {
    /// Channel ID.
    pub id: Snowflake,
    /// Guild containing the channel.
    pub guild_id: Snowflake,
    /// Channel type.
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// Channel name.
    pub name: String,
}

/// Value used to verify that a message was sent.
///
/// Discord echoes back whichever form was sent.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Nonce {
    /// Integer nonce.
    Integer(i64),
    /// String nonce, at most 25 characters.
    String(String),
}

/// A message sent in a channel.
///
/// See <https://discord.com/developers/docs/resources/message#message-object>
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Message {
    /// Message ID.
    pub id: Snowflake,
    /// Channel the message was sent in.
    pub channel_id: Snowflake,
    /// Author; a webhook author for webhook messages.
    pub author: User,
    /// Contents, empty without the message content intent.
    #[serde(default)]
    pub content: String,
    /// When the message was sent.
    pub timestamp: Timestamp,
    /// When the message was last edited.
    #[serde(default)]
    pub edited_timestamp: Option<Timestamp>,
    /// Whether this is a text-to-speech message.
    #[serde(default)]
    pub tts: bool,
    /// Whether `@everyone` is mentioned.
    #[serde(default)]
    pub mention_everyone: bool,
    /// Users mentioned.
    #[serde(default)]
    pub mentions: Vec<User>,
    /// Roles mentioned.
    #[serde(default)]
    pub mention_roles: Vec<Snowflake>,
    /// Channels mentioned, for crossposts only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mention_channels: Vec<ChannelMention>,
    /// Attached files.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Embedded content.
    #[serde(default)]
    pub embeds: Vec<Embed>,
    /// Reactions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<Reaction>,
    /// Nonce for verifying the send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Nonce>,
    /// Whether the message is pinned.
    #[serde(default)]
    pub pinned: bool,
    /// Webhook that sent this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<Snowflake>,
    /// Message type.
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Application of an interaction or application-owned webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    /// Source of a crosspost, reply, pin or forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
    /// Message flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
    /// The replied-to message; `null` when it was deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_message: Option<Box<Message>>,
    /// Guild the message was sent in, on gateway dispatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// The author's guild member, on gateway dispatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<GuildMember>,
    /// Approximate position in a thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
}

impl Message {
    /// Returns whether this message was sent by a bot or webhook.
    pub fn is_from_bot(&self) -> bool {
        self.webhook_id.is_some() || self.author.bot.unwrap_or(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn author() -> serde_json::Value {
        json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": null
        })
    }

    #[test]
    fn deserializes_reply() {
        let message: Message = serde_json::from_value(json!({
            "id": "334385199974967042",
            "channel_id": "290926798999357250",
            "author": author(),
            "content": "Supa Hot",
            "timestamp": "2017-07-11T17:27:07.299000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "attachments": [],
            "embeds": [],
            "nonce": 1,
            "pinned": false,
            "type": 19,
            "flags": 4,
            "message_reference": {
                "message_id": "306588351130107906",
                "channel_id": "278325129692446722"
            }
        }))
        .unwrap();

        assert_eq!(message.kind, MessageType::Reply);
        assert_eq!(message.nonce, Some(Nonce::Integer(1)));
        assert_eq!(message.flags, Some(MessageFlags::SUPPRESS_EMBEDS));
        assert!(!message.is_from_bot());
        assert_eq!(
            message.message_reference.and_then(|r| r.message_id),
            Some(Snowflake::from("306588351130107906"))
        );
    }

    #[test]
    fn nonce_keeps_its_form() {
        let nonce: Nonce = serde_json::from_value(json!("12345")).unwrap();
        assert_eq!(nonce, Nonce::String("12345".to_owned()));
        assert_eq!(serde_json::to_value(&nonce).unwrap(), json!("12345"));

        let nonce: Nonce = serde_json::from_value(json!(12345)).unwrap();
        assert_eq!(serde_json::to_value(&nonce).unwrap(), json!(12345));
    }

    #[test]
    fn unknown_flag_bits_survive() {
        let flags: MessageFlags = serde_json::from_value(json!(1u64 << 40 | 1)).unwrap();

        assert!(flags.contains(MessageFlags::CROSSPOSTED));
        assert_eq!(serde_json::to_value(flags).unwrap(), json!(1u64 << 40 | 1));
    }

    #[test]
    fn allowed_mentions_none_clears_parse() {
        assert_eq!(
            serde_json::to_value(AllowedMentions::none()).unwrap(),
            json!({"parse": []})
        );

        let mentions = AllowedMentions {
            parse: vec![AllowedMentionType::Users],
            replied_user: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(mentions).unwrap(),
            json!({"parse": ["users"], "replied_user": false})
        );
    }
}
