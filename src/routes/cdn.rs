//! CDN asset paths.
//!
//! See <https://discord.com/developers/docs/reference#image-formatting>

use crate::snowflake::Snowflake;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// File extension requested from the CDN.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// `.png`
    Png,
    /// `.jpg`
    Jpeg,
    /// `.webp`
    Webp,
    /// `.gif`, only served for animated assets.
    Gif,
    /// `.json`, only served for Lottie stickers.
    Lottie,
}

impl ImageFormat {
    /// The extension, without a leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Webp => "webp",
            ImageFormat::Gif => "gif",
            ImageFormat::Lottie => "json",
        }
    }

    /// Picks GIF for animated (`a_`-prefixed) asset hashes, and PNG otherwise.
    pub fn for_hash(hash: &str) -> Self {
        if hash.starts_with("a_") {
            ImageFormat::Gif
        } else {
            ImageFormat::Png
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.extension())
    }
}

impl AsRef<str> for ImageFormat {
    fn as_ref(&self) -> &str {
        self.extension()
    }
}

/// Application that owns the built-in sticker pack banners.
const STICKER_PACK_APPLICATION_ID: &str = "710982414301790216";

/// `/emojis/{emoji.id}.{format}`
pub fn emoji(emoji_id: &Snowflake, format: ImageFormat) -> String {
    route!("/emojis/{}.{}", emoji_id, &format)
}

/// `/icons/{guild.id}/{guild.icon}.{format}`
pub fn guild_icon(guild_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/icons/{}/{}.{}", guild_id, hash, &format)
}

/// `/splashes/{guild.id}/{guild.splash}.{format}`
pub fn guild_splash(guild_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/splashes/{}/{}.{}", guild_id, hash, &format)
}

/// `/discovery-splashes/{guild.id}/{guild.discovery_splash}.{format}`
pub fn guild_discovery_splash(guild_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/discovery-splashes/{}/{}.{}", guild_id, hash, &format)
}

/// `/banners/{guild.id}/{guild.banner}.{format}`
pub fn guild_banner(guild_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/banners/{}/{}.{}", guild_id, hash, &format)
}

/// `/banners/{user.id}/{user.banner}.{format}`
pub fn user_banner(user_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/banners/{}/{}.{}", user_id, hash, &format)
}

/// `/embed/avatars/{index}.png`
///
/// For migrated usernames the index is `(user.id >> 22) % 6`; for legacy
/// discriminators it is `discriminator % 5`.
pub fn default_user_avatar(index: u8) -> String {
    format!("/embed/avatars/{}.png", index)
}

/// `/avatars/{user.id}/{user.avatar}.{format}`
pub fn user_avatar(user_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/avatars/{}/{}.{}", user_id, hash, &format)
}

/// `/guilds/{guild.id}/users/{user.id}/avatars/{member.avatar}.{format}`
pub fn guild_member_avatar(
    guild_id: &Snowflake,
    user_id: &Snowflake,
    hash: &str,
    format: ImageFormat,
) -> String {
    route!(
        "/guilds/{}/users/{}/avatars/{}.{}",
        guild_id,
        user_id,
        hash,
        &format
    )
}

/// `/guilds/{guild.id}/users/{user.id}/banners/{member.banner}.{format}`
pub fn guild_member_banner(
    guild_id: &Snowflake,
    user_id: &Snowflake,
    hash: &str,
    format: ImageFormat,
) -> String {
    route!(
        "/guilds/{}/users/{}/banners/{}.{}",
        guild_id,
        user_id,
        hash,
        &format
    )
}

/// `/avatar-decoration-presets/{asset}.png`
pub fn avatar_decoration(asset: &str) -> String {
    route!("/avatar-decoration-presets/{}.png", asset)
}

/// `/app-icons/{application.id}/{application.icon}.{format}`
pub fn application_icon(application_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/app-icons/{}/{}.{}", application_id, hash, &format)
}

/// `/app-icons/{application.id}/{application.cover_image}.{format}`
pub fn application_cover(application_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/app-icons/{}/{}.{}", application_id, hash, &format)
}

/// `/app-assets/{application.id}/{asset.id}.{format}`
pub fn application_asset(application_id: &Snowflake, asset_id: &str, format: ImageFormat) -> String {
    route!("/app-assets/{}/{}.{}", application_id, asset_id, &format)
}

/// `/app-assets/{application.id}/achievements/{achievement.id}/icons/{icon}.{format}`
pub fn achievement_icon(
    application_id: &Snowflake,
    achievement_id: &Snowflake,
    hash: &str,
    format: ImageFormat,
) -> String {
    route!(
        "/app-assets/{}/achievements/{}/icons/{}.{}",
        application_id,
        achievement_id,
        hash,
        &format
    )
}

/// `/app-assets/{application.id}/store/{asset.id}.{format}`
pub fn store_page_asset(application_id: &Snowflake, asset_id: &Snowflake, format: ImageFormat) -> String {
    route!("/app-assets/{}/store/{}.{}", application_id, asset_id, &format)
}

/// `/app-assets/710982414301790216/store/{pack.banner_asset_id}.{format}`
pub fn sticker_pack_banner(asset_id: &Snowflake, format: ImageFormat) -> String {
    route!(
        "/app-assets/{}/store/{}.{}",
        STICKER_PACK_APPLICATION_ID,
        asset_id,
        &format
    )
}

/// `/team-icons/{team.id}/{team.icon}.{format}`
pub fn team_icon(team_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/team-icons/{}/{}.{}", team_id, hash, &format)
}

/// `/stickers/{sticker.id}.{format}`
pub fn sticker(sticker_id: &Snowflake, format: ImageFormat) -> String {
    route!("/stickers/{}.{}", sticker_id, &format)
}

/// `/role-icons/{role.id}/{role.icon}.{format}`
pub fn role_icon(role_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/role-icons/{}/{}.{}", role_id, hash, &format)
}

/// `/guild-events/{event.id}/{event.image}.{format}`
pub fn guild_scheduled_event_cover(event_id: &Snowflake, hash: &str, format: ImageFormat) -> String {
    route!("/guild-events/{}/{}.{}", event_id, hash, &format)
}

/// `/soundboard-sounds/{sound.id}`
pub fn soundboard_sound(sound_id: &Snowflake) -> String {
    route!("/soundboard-sounds/{}", sound_id)
}
