//! Users and their account flags.

use crate::snowflake::Snowflake;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

bitflags! {
    /// Badges and account properties of a user.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct UserFlags: u64 {
        /// Discord employee.
        const STAFF = 1 << 0;
        /// Partnered server owner.
        const PARTNER = 1 << 1;
        /// HypeSquad events member.
        const HYPESQUAD = 1 << 2;
        /// Bug hunter, level 1.
        const BUG_HUNTER_LEVEL_1 = 1 << 3;
        /// House Bravery member.
        const HYPESQUAD_ONLINE_HOUSE_1 = 1 << 6;
        /// House Brilliance member.
        const HYPESQUAD_ONLINE_HOUSE_2 = 1 << 7;
        /// House Balance member.
        const HYPESQUAD_ONLINE_HOUSE_3 = 1 << 8;
        /// Early nitro supporter.
        const PREMIUM_EARLY_SUPPORTER = 1 << 9;
        /// User is a team.
        const TEAM_PSEUDO_USER = 1 << 10;
        /// Bug hunter, level 2.
        const BUG_HUNTER_LEVEL_2 = 1 << 14;
        /// Verified bot.
        const VERIFIED_BOT = 1 << 16;
        /// Early verified bot developer.
        const VERIFIED_DEVELOPER = 1 << 17;
        /// Moderator programs alumni.
        const CERTIFIED_MODERATOR = 1 << 18;
        /// Bot uses only HTTP interactions.
        const BOT_HTTP_INTERACTIONS = 1 << 19;
        /// Active developer.
        const ACTIVE_DEVELOPER = 1 << 22;
    }
}

impl_bits_serde!(UserFlags, u64);

/// Nitro subscription level.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum PremiumType {
    /// No subscription.
    None = 0,
    /// Nitro Classic.
    NitroClassic = 1,
    /// Nitro.
    Nitro = 2,
    /// Nitro Basic.
    NitroBasic = 3,
}

impl_try_from_repr!(PremiumType, u8, [None, NitroClassic, Nitro, NitroBasic]);

/// Avatar decoration currently applied to a user.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AvatarDecorationData {
    /// Decoration asset hash.
    pub asset: String,
    /// SKU of the decoration.
    pub sku_id: Snowflake,
}

/// A Discord user account.
///
/// See <https://discord.com/developers/docs/resources/user#user-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct User {
    /// The user's ID.
    pub id: Snowflake,
    /// Username, not unique across the platform for legacy accounts.
    pub username: String,
    /// Legacy 4-digit tag, `"0"` for migrated accounts.
    pub discriminator: String,
    /// Display name, if set.
    #[serde(default)]
    pub global_name: Option<String>,
    /// Avatar hash.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Whether the user belongs to an OAuth2 application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    /// Whether the user is an official Discord system user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    /// Whether the user has two-factor authentication enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    /// Banner hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Banner colour as an RGB integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    /// Chosen language option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Whether the email on this account has been verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Account email, with the `email` OAuth2 scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<UserFlags>,
    /// Nitro subscription level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<PremiumType>,
    /// Publicly visible account flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<UserFlags>,
    /// Applied avatar decoration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_decoration_data: Option<AvatarDecorationData>,
}

/// A user in partial payloads, where only the ID is guaranteed.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PartialUser {
    /// The user's ID.
    pub id: Snowflake,
    /// Username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Legacy 4-digit tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    /// Avatar hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Whether the user belongs to an OAuth2 application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    /// Publicly visible account flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<UserFlags>,
}

impl From<User> for PartialUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: Some(user.username),
            discriminator: Some(user.discriminator),
            global_name: user.global_name,
            avatar: user.avatar,
            bot: user.bot,
            public_flags: user.public_flags,
        }
    }
}

impl User {
    /// Index of this user's default avatar, for [`cdn::default_user_avatar`].
    ///
    /// [`cdn::default_user_avatar`]: crate::routes::cdn::default_user_avatar
    pub fn default_avatar_index(&self) -> u8 {
        match self.discriminator.parse::<u16>() {
            Ok(discriminator) if discriminator != 0 => (discriminator % 5) as u8,
            _ => self
                .id
                .to_u64()
                .map(|id| ((id >> 22) % 6) as u8)
                .unwrap_or(0),
        }
    }

    /// The name shown in clients: the display name if set, the username otherwise.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_documented_user() {
        let user: User = serde_json::from_value(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "verified": true,
            "email": "nelly@discord.com",
            "flags": 64,
            "banner": "06c16474723fe537c283b8efa61a30c8",
            "accent_color": 16711680,
            "premium_type": 1,
            "public_flags": 64,
        }))
        .unwrap();

        assert_eq!(user.id.as_str(), "80351110224678912");
        assert_eq!(user.flags, Some(UserFlags::HYPESQUAD_ONLINE_HOUSE_1));
        assert_eq!(user.premium_type, Some(PremiumType::NitroClassic));
        assert_eq!(user.global_name, None);
        assert_eq!(user.display_name(), "Nelly");
        assert_eq!(user.default_avatar_index(), 2);

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["flags"], json!(64));
        assert!(back.get("bot").is_none());
    }

    #[test]
    fn migrated_users_use_id_for_default_avatar() {
        let user: User = serde_json::from_value(json!({
            "id": "175928847299117063",
            "username": "nelly",
            "discriminator": "0",
            "global_name": "Nelly",
            "avatar": null,
        }))
        .unwrap();

        assert_eq!(user.default_avatar_index(), ((175_928_847_299_117_063u64 >> 22) % 6) as u8);
        assert_eq!(user.display_name(), "Nelly");
    }

    #[test]
    fn partial_user_needs_only_id() {
        let partial: PartialUser = serde_json::from_value(json!({"id": 80351110224678912u64})).unwrap();

        assert_eq!(partial.id.as_str(), "80351110224678912");
        assert_eq!(serde_json::to_value(&partial).unwrap(), json!({"id": "80351110224678912"}));
    }
}
