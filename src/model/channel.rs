//! Channels, threads and permission overwrites.

use super::{user::User, Timestamp};
use crate::{permissions::Permissions, snowflake::Snowflake};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Kind of a [`Channel`].
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum ChannelType {
    /// Text channel within a guild.
    GuildText = 0,
    /// Direct message between users.
    Dm = 1,
    /// Voice channel within a guild.
    GuildVoice = 2,
    /// Direct message between multiple users.
    GroupDm = 3,
    /// Category containing up to 50 channels.
    GuildCategory = 4,
    /// Channel that users can follow and crosspost into their own guild.
    GuildAnnouncement = 5,
    /// Thread within an announcement channel.
    AnnouncementThread = 10,
    /// Thread within a text or forum channel.
    PublicThread = 11,
    /// Thread only viewable by those invited and moderators.
    PrivateThread = 12,
    /// Voice channel for hosting events with an audience.
    GuildStageVoice = 13,
    /// Channel listing servers in a student hub.
    GuildDirectory = 14,
    /// Channel that can only contain threads.
    GuildForum = 15,
    /// Channel that can only contain threads, shown as a media gallery.
    GuildMedia = 16,
}

impl_try_from_repr!(
    ChannelType,
    u8,
    [
        GuildText,
        Dm,
        GuildVoice,
        GroupDm,
        GuildCategory,
        GuildAnnouncement,
        AnnouncementThread,
        PublicThread,
        PrivateThread,
        GuildStageVoice,
        GuildDirectory,
        GuildForum,
        GuildMedia,
    ]
);

impl ChannelType {
    /// Returns whether channels of this type are threads.
    pub fn is_thread(self) -> bool {
        matches!(
            self,
            ChannelType::AnnouncementThread | ChannelType::PublicThread | ChannelType::PrivateThread
        )
    }

    /// Returns whether users can join channels of this type for voice.
    pub fn is_voice(self) -> bool {
        matches!(self, ChannelType::GuildVoice | ChannelType::GuildStageVoice)
    }
}

/// Whether an [`Overwrite`] targets a role or a member.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum OverwriteType {
    /// The overwrite's ID is a role ID.
    Role = 0,
    /// The overwrite's ID is a user ID.
    Member = 1,
}

impl_try_from_repr!(OverwriteType, u8, [Role, Member]);

/// Explicit permission changes for one role or member in a channel.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Overwrite {
    /// Role or user ID.
    pub id: Snowflake,
    /// What `id` refers to.
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    /// Permissions granted.
    pub allow: Permissions,
    /// Permissions removed.
    pub deny: Permissions,
}

bitflags! {
    /// Extra channel properties.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ChannelFlags: u64 {
        /// Thread is pinned to the top of its parent forum or media channel.
        const PINNED = 1 << 1;
        /// Forum or media channel requires a tag on new threads.
        const REQUIRE_TAG = 1 << 4;
        /// Hides the embedded media download options in a media channel.
        const HIDE_MEDIA_DOWNLOAD_OPTIONS = 1 << 15;
    }
}

impl_bits_serde!(ChannelFlags, u64);

/// Thread-specific fields of a thread [`Channel`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ThreadMetadata {
    /// Whether the thread is archived.
    pub archived: bool,
    /// Minutes of inactivity after which the thread is archived.
    pub auto_archive_duration: u16,
    /// When the archive status last changed.
    pub archive_timestamp: Timestamp,
    /// Whether only moderators can unarchive the thread.
    pub locked: bool,
    /// Whether non-moderators can add other non-moderators to a private thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
    /// When the thread was created; absent for threads made before 2022-01-09.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<Timestamp>,
}

/// The current user's membership of a thread.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ThreadMember {
    /// Thread ID, omitted within `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    /// User ID, omitted within `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Snowflake>,
    /// When the user last joined.
    pub join_timestamp: Timestamp,
    /// Notification settings.
    pub flags: u64,
}

/// A tag applied to threads in a forum or media channel.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ForumTag {
    /// Tag ID.
    pub id: Snowflake,
    /// Tag name (0-20 characters).
    pub name: String,
    /// Whether only members with `MANAGE_THREADS` can apply the tag.
    pub moderated: bool,
    /// Custom emoji ID.
    #[serde(default)]
    pub emoji_id: Option<Snowflake>,
    /// Unicode emoji.
    #[serde(default)]
    pub emoji_name: Option<String>,
}

/// A guild or DM channel, or a thread.
///
/// See <https://discord.com/developers/docs/resources/channel#channel-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Channel {
    /// Channel ID.
    pub id: Snowflake,
    /// Channel type.
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// Guild ID; may be missing for channels received over gateway guild dispatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// Sorting position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Explicit permission overwrites for members and roles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<Overwrite>,
    /// Channel name (1-100 characters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Channel topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Whether the channel is age-restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    /// ID of the last message sent, which may not point to an existing message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
    /// Voice bitrate in bits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Voice user limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    /// Seconds a user must wait between messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,
    /// DM recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<User>,
    /// Group DM icon hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Creator of the group DM or thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
    /// Application that created a group DM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    /// Category for guild channels, text channel for threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// When the last pinned message was pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_pin_timestamp: Option<Timestamp>,
    /// Voice region ID; `None` is automatic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<String>,
    /// Camera video quality mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_quality_mode: Option<u8>,
    /// Approximate message count of a thread, capped at 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u32>,
    /// Approximate member count of a thread, capped at 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    /// Thread-specific fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_metadata: Option<ThreadMetadata>,
    /// The current user's thread membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<ThreadMember>,
    /// Default auto-archive duration for new threads, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<u16>,
    /// Computed permissions of the invoking user, in interaction payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    /// Channel flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<ChannelFlags>,
    /// Number of messages ever sent in a thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_message_sent: Option<u32>,
    /// Tags usable in a forum or media channel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_tags: Vec<ForumTag>,
    /// Tags applied to a forum or media thread.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_tags: Vec<Snowflake>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::permissions::PermissionFlags;
    use serde_json::json;
    use std::convert::TryFrom;

    #[test]
    fn deserializes_guild_text_channel() {
        let channel: Channel = serde_json::from_value(json!({
            "id": "41771983423143937",
            "guild_id": "41771983423143937",
            "name": "general",
            "type": 0,
            "position": 6,
            "permission_overwrites": [
                {"id": "41771983423143937", "type": 0, "allow": "1024", "deny": "2048"}
            ],
            "rate_limit_per_user": 2,
            "nsfw": true,
            "topic": "24/7 chat about how to gank Mike #2",
            "last_message_id": "155117677105512449",
            "parent_id": "399942396007890945",
            "default_auto_archive_duration": 60,
        }))
        .unwrap();

        assert_eq!(channel.kind, ChannelType::GuildText);
        assert_eq!(channel.permission_overwrites.len(), 1);

        let overwrite = &channel.permission_overwrites[0];
        assert_eq!(overwrite.kind, OverwriteType::Role);
        assert!(overwrite.allow.contains(PermissionFlags::VIEW_CHANNEL).unwrap());
        assert!(overwrite.deny.contains(PermissionFlags::SEND_MESSAGES).unwrap());
        assert!(channel.recipients.is_empty());
    }

    #[test]
    fn thread_metadata_and_classification() {
        let channel: Channel = serde_json::from_value(json!({
            "id": "41771983423143937",
            "guild_id": "41771983423143937",
            "parent_id": "41771983423143937",
            "owner_id": "41771983423143937",
            "name": "don't buy dota-2",
            "type": 11,
            "last_message_id": "155117677105512449",
            "message_count": 1,
            "member_count": 5,
            "rate_limit_per_user": 2,
            "thread_metadata": {
                "archived": false,
                "auto_archive_duration": 1440,
                "archive_timestamp": "2021-04-12T23:40:39.855793+00:00",
                "locked": false
            },
            "total_message_sent": 1
        }))
        .unwrap();

        assert!(channel.kind.is_thread());
        assert!(!channel.kind.is_voice());
        assert_eq!(
            channel.thread_metadata.as_ref().map(|m| m.auto_archive_duration),
            Some(1440)
        );
    }

    #[test]
    fn channel_type_from_integer() {
        assert_eq!(ChannelType::try_from(13u8), Ok(ChannelType::GuildStageVoice));
        assert_eq!(ChannelType::try_from(6u8), Err(6));
    }
}
