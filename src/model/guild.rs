//! Guilds, roles and members.

use super::{
    channel::Channel,
    deserialize_present,
    emoji::Emoji,
    is_false,
    serialize_present,
    user::User,
    Timestamp,
};
use crate::{permissions::Permissions, snowflake::Snowflake};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Verification a member must pass before they can send messages.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum VerificationLevel {
    /// Unrestricted.
    None = 0,
    /// Must have a verified email.
    Low = 1,
    /// Must also be registered for longer than 5 minutes.
    Medium = 2,
    /// Must also be a member for longer than 10 minutes.
    High = 3,
    /// Must have a verified phone number.
    VeryHigh = 4,
}

impl_try_from_repr!(VerificationLevel, u8, [None, Low, Medium, High, VeryHigh]);

/// Whose messages are scanned for explicit media.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum ExplicitContentFilterLevel {
    /// Nobody's.
    Disabled = 0,
    /// Members without roles.
    MembersWithoutRoles = 1,
    /// All members.
    AllMembers = 2,
}

impl_try_from_repr!(
    ExplicitContentFilterLevel,
    u8,
    [Disabled, MembersWithoutRoles, AllMembers]
);

/// Server boost tier.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum PremiumTier {
    /// No boost perks.
    None = 0,
    /// Tier 1.
    Tier1 = 1,
    /// Tier 2.
    Tier2 = 2,
    /// Tier 3.
    Tier3 = 3,
}

impl_try_from_repr!(PremiumTier, u8, [None, Tier1, Tier2, Tier3]);

/// Extra properties of a [`Role`].
///
/// The three boolean tags are sent as `null` when set and omitted otherwise.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RoleTags {
    /// Bot this role belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<Snowflake>,
    /// Integration this role belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<Snowflake>,
    /// Whether this is the guild's booster role.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        serialize_with = "serialize_present",
        skip_serializing_if = "is_false"
    )]
    pub premium_subscriber: bool,
    /// SKU of the role subscription listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_listing_id: Option<Snowflake>,
    /// Whether the role can be purchased.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        serialize_with = "serialize_present",
        skip_serializing_if = "is_false"
    )]
    pub available_for_purchase: bool,
    /// Whether this is the guild's linked role.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        serialize_with = "serialize_present",
        skip_serializing_if = "is_false"
    )]
    pub guild_connections: bool,
}

/// A guild role.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Role {
    /// Role ID.
    pub id: Snowflake,
    /// Role name.
    pub name: String,
    /// RGB colour, `0` for none.
    pub color: u32,
    /// Whether members are shown separately in the member list.
    pub hoist: bool,
    /// Role icon hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Unicode emoji shown as the role icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode_emoji: Option<String>,
    /// Sorting position; ties are broken by ID.
    pub position: i32,
    /// Permissions granted by this role.
    pub permissions: Permissions,
    /// Whether the role is managed by an integration.
    pub managed: bool,
    /// Whether the role can be mentioned.
    pub mentionable: bool,
    /// Extra properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<RoleTags>,
    /// Role flags.
    #[serde(default)]
    pub flags: u64,
}

/// A user's membership of a guild.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildMember {
    /// The member's user; absent in message `member` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Guild nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Guild avatar hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Guild banner hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Role IDs.
    pub roles: Vec<Snowflake>,
    /// When the user joined; `null` for guest members of voice channels.
    #[serde(default)]
    pub joined_at: Option<Timestamp>,
    /// When the user started boosting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_since: Option<Timestamp>,
    /// Whether the member is server-deafened.
    #[serde(default)]
    pub deaf: bool,
    /// Whether the member is server-muted.
    #[serde(default)]
    pub mute: bool,
    /// Member flags.
    #[serde(default)]
    pub flags: u64,
    /// Whether the member has yet to pass membership screening.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    /// Total channel permissions, in interaction payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    /// When the member's timeout expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<Timestamp>,
}

/// A guild that is offline or not yet loaded.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UnavailableGuild {
    /// Guild ID.
    pub id: Snowflake,
    /// Whether the guild is unavailable; omitted when the bot was removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<bool>,
}

/// A guild, as returned by `GET /guilds/{guild.id}` and `GUILD_CREATE`.
///
/// `GUILD_CREATE` adds the member, channel and thread lists, which the REST
/// API never sends.
///
/// See <https://discord.com/developers/docs/resources/guild#guild-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Guild {
    /// Guild ID.
    pub id: Snowflake,
    /// Guild name (2-100 characters).
    pub name: String,
    /// Icon hash.
    #[serde(default)]
    pub icon: Option<String>,
    /// Splash hash.
    #[serde(default)]
    pub splash: Option<String>,
    /// Discovery splash hash.
    #[serde(default)]
    pub discovery_splash: Option<String>,
    /// Owner ID.
    pub owner_id: Snowflake,
    /// AFK channel ID.
    #[serde(default)]
    pub afk_channel_id: Option<Snowflake>,
    /// AFK timeout in seconds.
    pub afk_timeout: u32,
    /// Whether the server widget is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_enabled: Option<bool>,
    /// Channel the widget invites into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_channel_id: Option<Snowflake>,
    /// Verification required for the guild.
    pub verification_level: VerificationLevel,
    /// Default notification level.
    pub default_message_notifications: u8,
    /// Explicit content filter level.
    pub explicit_content_filter: ExplicitContentFilterLevel,
    /// Roles in the guild.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Custom emoji.
    #[serde(default)]
    pub emojis: Vec<Emoji>,
    /// Enabled guild features.
    #[serde(default)]
    pub features: Vec<String>,
    /// Required MFA level for moderation actions.
    pub mfa_level: u8,
    /// Application that created a bot-created guild.
    #[serde(default)]
    pub application_id: Option<Snowflake>,
    /// Channel where system messages are posted.
    #[serde(default)]
    pub system_channel_id: Option<Snowflake>,
    /// System channel flags.
    #[serde(default)]
    pub system_channel_flags: u64,
    /// Channel where community guilds show rules.
    #[serde(default)]
    pub rules_channel_id: Option<Snowflake>,
    /// Maximum presences; `None` apart from the largest guilds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_presences: Option<u32>,
    /// Maximum members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_members: Option<u32>,
    /// Vanity invite code.
    #[serde(default)]
    pub vanity_url_code: Option<String>,
    /// Guild description.
    #[serde(default)]
    pub description: Option<String>,
    /// Banner hash.
    #[serde(default)]
    pub banner: Option<String>,
    /// Boost tier.
    pub premium_tier: PremiumTier,
    /// Number of boosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_subscription_count: Option<u32>,
    /// Preferred locale of a community guild.
    pub preferred_locale: String,
    /// Channel where admins and moderators receive notices.
    #[serde(default)]
    pub public_updates_channel_id: Option<Snowflake>,
    /// Approximate member count, with `with_counts=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<u32>,
    /// Approximate online member count, with `with_counts=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<u32>,
    /// Guild NSFW level.
    #[serde(default)]
    pub nsfw_level: u8,
    /// Whether the boost progress bar is shown.
    #[serde(default)]
    pub premium_progress_bar_enabled: bool,
    /// Channel where safety alerts are sent.
    #[serde(default)]
    pub safety_alerts_channel_id: Option<Snowflake>,
    /// When the current user joined, in `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<Timestamp>,
    /// Whether the guild is considered large, in `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<bool>,
    /// Total member count, in `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    /// Members, in `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<GuildMember>,
    /// Channels, in `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<Channel>,
    /// Active threads the current user can see, in `GUILD_CREATE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threads: Vec<Channel>,
}

impl Guild {
    /// Looks up a role of this guild by ID.
    pub fn role(&self, id: &Snowflake) -> Option<&Role> {
        self.roles.iter().find(|role| &role.id == id)
    }

    /// The `@everyone` role, which shares the guild's ID.
    pub fn everyone_role(&self) -> Option<&Role> {
        self.role(&self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn booster_role_tag_is_presence() {
        let tags: RoleTags = serde_json::from_value(json!({"premium_subscriber": null})).unwrap();
        assert!(tags.premium_subscriber);
        assert!(!tags.guild_connections);

        let tags: RoleTags = serde_json::from_value(json!({"bot_id": "1"})).unwrap();
        assert!(!tags.premium_subscriber);

        let back = serde_json::to_value(&RoleTags {
            premium_subscriber: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(back, json!({"premium_subscriber": null}));
    }

    #[test]
    fn deserializes_minimal_guild() {
        let guild: Guild = serde_json::from_value(json!({
            "id": "197038439483310086",
            "name": "Discord Testers",
            "icon": "f64c482b807da4f539cff778d174971c",
            "owner_id": "73193882359173120",
            "afk_channel_id": null,
            "afk_timeout": 300,
            "verification_level": 3,
            "default_message_notifications": 1,
            "explicit_content_filter": 2,
            "roles": [{
                "id": "197038439483310086",
                "name": "@everyone",
                "color": 0,
                "hoist": false,
                "position": 0,
                "permissions": "104324161",
                "managed": false,
                "mentionable": false
            }],
            "emojis": [],
            "features": ["ANIMATED_ICON", "VERIFIED"],
            "mfa_level": 1,
            "premium_tier": 3,
            "preferred_locale": "en-US"
        }))
        .unwrap();

        assert_eq!(guild.verification_level, VerificationLevel::High);
        assert_eq!(guild.premium_tier, PremiumTier::Tier3);
        assert_eq!(guild.everyone_role().map(|r| r.name.as_str()), Some("@everyone"));
        assert!(guild.members.is_empty());
    }

    #[test]
    fn member_without_user() {
        let member: GuildMember = serde_json::from_value(json!({
            "roles": ["41771983423143936"],
            "joined_at": "2015-04-26T06:26:56.936000+00:00",
            "deaf": false,
            "mute": false
        }))
        .unwrap();

        assert!(member.user.is_none());
        assert_eq!(member.roles.len(), 1);
    }
}
