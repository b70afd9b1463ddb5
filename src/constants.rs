//! Constants describing the Discord API version and its fixed encodings.

use std::time::Duration;

/// The REST API version modelled by this library.
pub const API_VERSION: u8 = 10;

/// The gateway version modelled by this library.
pub const GATEWAY_VERSION: u8 = 10;

/// The voice gateway version modelled by this library.
pub const VOICE_GATEWAY_VERSION: u8 = 8;

/// Milliseconds between the Unix epoch and the Discord epoch
/// (the first second of 2015).
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Type-converted offset between the Unix epoch and the Discord epoch.
pub const DISCORD_EPOCH: Duration = Duration::from_millis(DISCORD_EPOCH_MS);

/// Start position of the timestamp portion of a snowflake's binary encoding.
pub const SNOWFLAKE_TIMESTAMP_SHIFT: u32 = 22;

/// Shortest decimal length accepted for a well-formed snowflake.
///
/// This is a sanity bound rather than a hard rule: IDs grow over time.
pub const SNOWFLAKE_MIN_LEN: usize = 17;

/// Longest decimal length of a `u64`, and so of any snowflake.
pub const SNOWFLAKE_MAX_LEN: usize = 20;

/// Placeholder path segment for the current user.
pub const CURRENT_USER: &str = "@me";

/// Placeholder path segment for the initial response to an interaction.
pub const ORIGINAL_MESSAGE: &str = "@original";

/// Base URLs for each of Discord's public hosts.
#[non_exhaustive]
pub struct RouteBases;

impl RouteBases {
    /// Versioned REST API root.
    pub const API: &'static str = "https://discord.com/api/v10";
    /// Static asset CDN.
    pub const CDN: &'static str = "https://cdn.discordapp.com";
    /// Media proxy for attachments and embeds.
    pub const MEDIA: &'static str = "https://media.discordapp.net";
    /// Short invite links.
    pub const INVITE: &'static str = "https://discord.gg";
    /// Guild template links.
    pub const TEMPLATE: &'static str = "https://discord.new";
    /// Gift links.
    pub const GIFT: &'static str = "https://discord.gift";
    /// Guild scheduled event links.
    pub const SCHEDULED_EVENT: &'static str = "https://discord.com/events";
}
