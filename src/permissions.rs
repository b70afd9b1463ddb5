//! Permission bitfields, carried in their decimal wire form.
//!
//! See <https://discord.com/developers/docs/topics/permissions>

use crate::{
    error::{Error, Result},
    snowflake::DecimalVisitor,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};

bitflags! {
    /// Every named permission bit.
    ///
    /// Bits 47 and 48 are unassigned.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct PermissionFlags: u64 {
        /// Allows creation of instant invites.
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Allows kicking members.
        const KICK_MEMBERS = 1 << 1;
        /// Allows banning members.
        const BAN_MEMBERS = 1 << 2;
        /// Allows all permissions and bypasses channel permission overwrites.
        const ADMINISTRATOR = 1 << 3;
        /// Allows management and editing of channels.
        const MANAGE_CHANNELS = 1 << 4;
        /// Allows management and editing of the guild.
        const MANAGE_GUILD = 1 << 5;
        /// Allows for the addition of reactions to messages.
        const ADD_REACTIONS = 1 << 6;
        /// Allows for viewing of audit logs.
        const VIEW_AUDIT_LOG = 1 << 7;
        /// Allows for using priority speaker in a voice channel.
        const PRIORITY_SPEAKER = 1 << 8;
        /// Allows the user to go live.
        const STREAM = 1 << 9;
        /// Allows guild members to view a channel.
        const VIEW_CHANNEL = 1 << 10;
        /// Allows for sending messages and creating forum posts.
        const SEND_MESSAGES = 1 << 11;
        /// Allows for sending of `/tts` messages.
        const SEND_TTS_MESSAGES = 1 << 12;
        /// Allows for deletion of other users' messages.
        const MANAGE_MESSAGES = 1 << 13;
        /// Links sent by users with this permission will be auto-embedded.
        const EMBED_LINKS = 1 << 14;
        /// Allows for uploading images and files.
        const ATTACH_FILES = 1 << 15;
        /// Allows for reading of message history.
        const READ_MESSAGE_HISTORY = 1 << 16;
        /// Allows for using the `@everyone` and `@here` tags.
        const MENTION_EVERYONE = 1 << 17;
        /// Allows the usage of custom emojis from other servers.
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        /// Allows for viewing guild insights.
        const VIEW_GUILD_INSIGHTS = 1 << 19;
        /// Allows for joining of a voice channel.
        const CONNECT = 1 << 20;
        /// Allows for speaking in a voice channel.
        const SPEAK = 1 << 21;
        /// Allows for muting members in a voice channel.
        const MUTE_MEMBERS = 1 << 22;
        /// Allows for deafening of members in a voice channel.
        const DEAFEN_MEMBERS = 1 << 23;
        /// Allows for moving of members between voice channels.
        const MOVE_MEMBERS = 1 << 24;
        /// Allows for using voice-activity-detection in a voice channel.
        const USE_VAD = 1 << 25;
        /// Allows for modification of own nickname.
        const CHANGE_NICKNAME = 1 << 26;
        /// Allows for modification of other users' nicknames.
        const MANAGE_NICKNAMES = 1 << 27;
        /// Allows management and editing of roles.
        const MANAGE_ROLES = 1 << 28;
        /// Allows management and editing of webhooks.
        const MANAGE_WEBHOOKS = 1 << 29;
        /// Allows for editing and deleting emojis, stickers and soundboard sounds.
        const MANAGE_GUILD_EXPRESSIONS = 1 << 30;
        /// Allows members to use application commands.
        const USE_APPLICATION_COMMANDS = 1 << 31;
        /// Allows for requesting to speak in stage channels.
        const REQUEST_TO_SPEAK = 1 << 32;
        /// Allows for editing and deleting scheduled events.
        const MANAGE_EVENTS = 1 << 33;
        /// Allows for deleting and archiving threads.
        const MANAGE_THREADS = 1 << 34;
        /// Allows for creating public and announcement threads.
        const CREATE_PUBLIC_THREADS = 1 << 35;
        /// Allows for creating private threads.
        const CREATE_PRIVATE_THREADS = 1 << 36;
        /// Allows the usage of custom stickers from other servers.
        const USE_EXTERNAL_STICKERS = 1 << 37;
        /// Allows for sending messages in threads.
        const SEND_MESSAGES_IN_THREADS = 1 << 38;
        /// Allows for using activities in a voice channel.
        const USE_EMBEDDED_ACTIVITIES = 1 << 39;
        /// Allows for timing out users.
        const MODERATE_MEMBERS = 1 << 40;
        /// Allows for viewing role subscription insights.
        const VIEW_CREATOR_MONETIZATION_ANALYTICS = 1 << 41;
        /// Allows for using the soundboard in a voice channel.
        const USE_SOUNDBOARD = 1 << 42;
        /// Allows for creating emojis, stickers and soundboard sounds.
        const CREATE_GUILD_EXPRESSIONS = 1 << 43;
        /// Allows for creating scheduled events.
        const CREATE_EVENTS = 1 << 44;
        /// Allows the usage of custom soundboard sounds from other servers.
        const USE_EXTERNAL_SOUNDS = 1 << 45;
        /// Allows sending voice messages.
        const SEND_VOICE_MESSAGES = 1 << 46;
        /// Allows sending polls.
        const SEND_POLLS = 1 << 49;
        /// Allows user-installed apps to send public responses.
        const USE_EXTERNAL_APPS = 1 << 50;
        /// Allows pinning and unpinning messages.
        const PIN_MESSAGES = 1 << 51;
    }
}

/// A permission bitmask in decimal string form.
///
/// Like [`Snowflake`], no validation happens until a numeric view is requested.
///
/// [`Snowflake`]: crate::Snowflake
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Permissions(String);

impl Permissions {
    /// Wraps a raw string without checking it.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Formats a bitmask in decimal.
    pub fn from_i64(bits: i64) -> Self {
        Self(bits.to_string())
    }

    /// Returns the raw decimal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses this bitmask as a signed 64-bit integer.
    pub fn to_i64(&self) -> Result<i64> {
        self.0.parse().map_err(|e| Error::parse(&self.0, e))
    }

    /// Tests whether any bit of `bit` is set in this bitmask.
    pub fn has(&self, bit: i64) -> Result<bool> {
        Ok((self.to_i64()? & bit) != 0)
    }

    /// Tests whether every bit in `flags` is set in this bitmask.
    pub fn contains(&self, flags: PermissionFlags) -> Result<bool> {
        Ok(self.flags()?.contains(flags))
    }

    /// Interprets this bitmask as named flags, retaining unknown bits.
    pub fn flags(&self) -> Result<PermissionFlags> {
        Ok(PermissionFlags::from_bits_retain(self.to_i64()? as u64))
    }
}

impl From<PermissionFlags> for Permissions {
    fn from(flags: PermissionFlags) -> Self {
        Self::from_i64(flags.bits() as i64)
    }
}

impl From<String> for Permissions {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Permissions {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Display for Permissions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer
            .deserialize_any(DecimalVisitor("a permission bitfield"))
            .map(Self)
    }
}
