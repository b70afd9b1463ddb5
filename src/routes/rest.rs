//! REST API paths, one function per endpoint shape.
//!
//! Optional user IDs default to `@me`, and optional webhook message IDs
//! default to `@original`.
//!
//! See <https://discord.com/developers/docs/reference#http-api>

use crate::{
    constants::{CURRENT_USER, ORIGINAL_MESSAGE},
    snowflake::Snowflake,
};

fn user_or_me(user_id: Option<&Snowflake>) -> &str {
    user_id.map_or(CURRENT_USER, Snowflake::as_str)
}

/// Visibility of an archived thread listing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ThreadArchiveStatus {
    /// Archived threads any member could see.
    Public,
    /// Archived private threads.
    Private,
}

impl AsRef<str> for ThreadArchiveStatus {
    fn as_ref(&self) -> &str {
        match self {
            ThreadArchiveStatus::Public => "public",
            ThreadArchiveStatus::Private => "private",
        }
    }
}

/// Third-party payload formats accepted by webhooks.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WebhookPlatform {
    /// GitHub-compatible payloads.
    Github,
    /// Slack-compatible payloads.
    Slack,
}

impl AsRef<str> for WebhookPlatform {
    fn as_ref(&self) -> &str {
        match self {
            WebhookPlatform::Github => "github",
            WebhookPlatform::Slack => "slack",
        }
    }
}

// Applications and commands.

/// `/applications/@me`
pub fn current_application() -> String {
    format!("/applications/{}", CURRENT_USER)
}

/// `/applications/{application.id}/commands`
pub fn application_commands(application_id: &Snowflake) -> String {
    route!("/applications/{}/commands", application_id)
}

/// `/applications/{application.id}/commands/{command.id}`
pub fn application_command(application_id: &Snowflake, command_id: &Snowflake) -> String {
    route!("/applications/{}/commands/{}", application_id, command_id)
}

/// `/applications/{application.id}/guilds/{guild.id}/commands`
pub fn application_guild_commands(application_id: &Snowflake, guild_id: &Snowflake) -> String {
    route!("/applications/{}/guilds/{}/commands", application_id, guild_id)
}

/// `/applications/{application.id}/guilds/{guild.id}/commands/{command.id}`
pub fn application_guild_command(
    application_id: &Snowflake,
    guild_id: &Snowflake,
    command_id: &Snowflake,
) -> String {
    route!(
        "/applications/{}/guilds/{}/commands/{}",
        application_id,
        guild_id,
        command_id
    )
}

/// `/applications/{application.id}/guilds/{guild.id}/commands/permissions`
pub fn guild_application_command_permissions(
    application_id: &Snowflake,
    guild_id: &Snowflake,
) -> String {
    route!(
        "/applications/{}/guilds/{}/commands/permissions",
        application_id,
        guild_id
    )
}

/// `/applications/{application.id}/guilds/{guild.id}/commands/{command.id}/permissions`
pub fn application_command_permissions(
    application_id: &Snowflake,
    guild_id: &Snowflake,
    command_id: &Snowflake,
) -> String {
    route!(
        "/applications/{}/guilds/{}/commands/{}/permissions",
        application_id,
        guild_id,
        command_id
    )
}

/// `/applications/{application.id}/role-connections/metadata`
pub fn application_role_connection_metadata(application_id: &Snowflake) -> String {
    route!("/applications/{}/role-connections/metadata", application_id)
}

/// `/applications/{application.id}/emojis`
pub fn application_emojis(application_id: &Snowflake) -> String {
    route!("/applications/{}/emojis", application_id)
}

/// `/applications/{application.id}/emojis/{emoji.id}`
pub fn application_emoji(application_id: &Snowflake, emoji_id: &Snowflake) -> String {
    route!("/applications/{}/emojis/{}", application_id, emoji_id)
}

/// `/applications/{application.id}/entitlements`
pub fn entitlements(application_id: &Snowflake) -> String {
    route!("/applications/{}/entitlements", application_id)
}

/// `/applications/{application.id}/entitlements/{entitlement.id}`
pub fn entitlement(application_id: &Snowflake, entitlement_id: &Snowflake) -> String {
    route!("/applications/{}/entitlements/{}", application_id, entitlement_id)
}

/// `/applications/{application.id}/entitlements/{entitlement.id}/consume`
pub fn consume_entitlement(application_id: &Snowflake, entitlement_id: &Snowflake) -> String {
    route!(
        "/applications/{}/entitlements/{}/consume",
        application_id,
        entitlement_id
    )
}

/// `/applications/{application.id}/skus`
pub fn skus(application_id: &Snowflake) -> String {
    route!("/applications/{}/skus", application_id)
}

/// `/skus/{sku.id}/subscriptions`
pub fn sku_subscriptions(sku_id: &Snowflake) -> String {
    route!("/skus/{}/subscriptions", sku_id)
}

/// `/skus/{sku.id}/subscriptions/{subscription.id}`
pub fn sku_subscription(sku_id: &Snowflake, subscription_id: &Snowflake) -> String {
    route!("/skus/{}/subscriptions/{}", sku_id, subscription_id)
}

/// `/interactions/{interaction.id}/{interaction.token}/callback`
pub fn interaction_callback(interaction_id: &Snowflake, interaction_token: &str) -> String {
    route!("/interactions/{}/{}/callback", interaction_id, interaction_token)
}

// Channels and messages.

/// `/channels/{channel.id}`
pub fn channel(channel_id: &Snowflake) -> String {
    route!("/channels/{}", channel_id)
}

/// `/channels/{channel.id}/messages`
pub fn channel_messages(channel_id: &Snowflake) -> String {
    route!("/channels/{}/messages", channel_id)
}

/// `/channels/{channel.id}/messages/{message.id}`
pub fn channel_message(channel_id: &Snowflake, message_id: &Snowflake) -> String {
    route!("/channels/{}/messages/{}", channel_id, message_id)
}

/// `/channels/{channel.id}/messages/{message.id}/crosspost`
pub fn channel_message_crosspost(channel_id: &Snowflake, message_id: &Snowflake) -> String {
    route!("/channels/{}/messages/{}/crosspost", channel_id, message_id)
}

/// `/channels/{channel.id}/messages/{message.id}/reactions`
pub fn channel_message_all_reactions(channel_id: &Snowflake, message_id: &Snowflake) -> String {
    route!("/channels/{}/messages/{}/reactions", channel_id, message_id)
}

/// `/channels/{channel.id}/messages/{message.id}/reactions/{emoji}`
///
/// `emoji` is either a unicode emoji or `name:id` for a custom one.
pub fn channel_message_reaction(
    channel_id: &Snowflake,
    message_id: &Snowflake,
    emoji: &str,
) -> String {
    route!(
        "/channels/{}/messages/{}/reactions/{}",
        channel_id,
        message_id,
        emoji
    )
}

/// `/channels/{channel.id}/messages/{message.id}/reactions/{emoji}/{user.id}`
///
/// `user_id` defaults to `@me`.
pub fn channel_message_user_reaction(
    channel_id: &Snowflake,
    message_id: &Snowflake,
    emoji: &str,
    user_id: Option<&Snowflake>,
) -> String {
    route!(
        "/channels/{}/messages/{}/reactions/{}/{}",
        channel_id,
        message_id,
        emoji,
        user_or_me(user_id)
    )
}

/// `/channels/{channel.id}/messages/bulk-delete`
pub fn channel_bulk_delete(channel_id: &Snowflake) -> String {
    route!("/channels/{}/messages/bulk-delete", channel_id)
}

/// `/channels/{channel.id}/permissions/{overwrite.id}`
pub fn channel_permission(channel_id: &Snowflake, overwrite_id: &Snowflake) -> String {
    route!("/channels/{}/permissions/{}", channel_id, overwrite_id)
}

/// `/channels/{channel.id}/invites`
pub fn channel_invites(channel_id: &Snowflake) -> String {
    route!("/channels/{}/invites", channel_id)
}

/// `/channels/{channel.id}/followers`
pub fn channel_followers(channel_id: &Snowflake) -> String {
    route!("/channels/{}/followers", channel_id)
}

/// `/channels/{channel.id}/typing`
pub fn channel_typing(channel_id: &Snowflake) -> String {
    route!("/channels/{}/typing", channel_id)
}

/// `/channels/{channel.id}/messages/pins`
pub fn channel_messages_pins(channel_id: &Snowflake) -> String {
    route!("/channels/{}/messages/pins", channel_id)
}

/// `/channels/{channel.id}/messages/pins/{message.id}`
pub fn channel_message_pin(channel_id: &Snowflake, message_id: &Snowflake) -> String {
    route!("/channels/{}/messages/pins/{}", channel_id, message_id)
}

/// `/channels/{channel.id}/pins`, superseded by [`channel_messages_pins`].
pub fn channel_pins(channel_id: &Snowflake) -> String {
    route!("/channels/{}/pins", channel_id)
}

/// `/channels/{channel.id}/pins/{message.id}`, superseded by [`channel_message_pin`].
pub fn channel_pin(channel_id: &Snowflake, message_id: &Snowflake) -> String {
    route!("/channels/{}/pins/{}", channel_id, message_id)
}

/// `/channels/{channel.id}/recipients/{user.id}`
pub fn channel_recipient(channel_id: &Snowflake, user_id: &Snowflake) -> String {
    route!("/channels/{}/recipients/{}", channel_id, user_id)
}

/// `/channels/{channel.id}/webhooks`
pub fn channel_webhooks(channel_id: &Snowflake) -> String {
    route!("/channels/{}/webhooks", channel_id)
}

/// `/channels/{channel.id}/send-soundboard-sound`
pub fn send_soundboard_sound(channel_id: &Snowflake) -> String {
    route!("/channels/{}/send-soundboard-sound", channel_id)
}

/// `/channels/{channel.id}/polls/{message.id}/answers/{answer_id}`
pub fn poll_answer_voters(channel_id: &Snowflake, message_id: &Snowflake, answer_id: u32) -> String {
    route!(
        "/channels/{}/polls/{}/answers/{}",
        channel_id,
        message_id,
        &answer_id.to_string()
    )
}

/// `/channels/{channel.id}/polls/{message.id}/expire`
pub fn expire_poll(channel_id: &Snowflake, message_id: &Snowflake) -> String {
    route!("/channels/{}/polls/{}/expire", channel_id, message_id)
}

// Threads.

/// `/channels/{channel.id}/threads`, or
/// `/channels/{channel.id}/messages/{message.id}/threads` when starting a
/// thread from a message.
pub fn threads(parent_id: &Snowflake, message_id: Option<&Snowflake>) -> String {
    match message_id {
        Some(message_id) => route!("/channels/{}/messages/{}/threads", parent_id, message_id),
        None => route!("/channels/{}/threads", parent_id),
    }
}

/// `/channels/{channel.id}/threads/archived/{public|private}`
pub fn channel_archived_threads(channel_id: &Snowflake, status: ThreadArchiveStatus) -> String {
    route!("/channels/{}/threads/archived/{}", channel_id, &status)
}

/// `/channels/{channel.id}/users/@me/threads/archived/private`
pub fn channel_joined_archived_threads(channel_id: &Snowflake) -> String {
    route!("/channels/{}/users/@me/threads/archived/private", channel_id)
}

/// `/channels/{thread.id}/thread-members`
pub fn thread_members(thread_id: &Snowflake) -> String {
    route!("/channels/{}/thread-members", thread_id)
}

/// `/channels/{thread.id}/thread-members/{user.id}`
///
/// `user_id` defaults to `@me`.
pub fn thread_member(thread_id: &Snowflake, user_id: Option<&Snowflake>) -> String {
    route!("/channels/{}/thread-members/{}", thread_id, user_or_me(user_id))
}

/// `/guilds/{guild.id}/threads/active`
pub fn guild_active_threads(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/threads/active", guild_id)
}

// Guilds.

/// `/guilds`
pub fn guilds() -> String {
    "/guilds".to_owned()
}

/// `/guilds/{guild.id}`
pub fn guild(guild_id: &Snowflake) -> String {
    route!("/guilds/{}", guild_id)
}

/// `/guilds/{guild.id}/preview`
pub fn guild_preview(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/preview", guild_id)
}

/// `/guilds/{guild.id}/channels`
pub fn guild_channels(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/channels", guild_id)
}

/// `/guilds/{guild.id}/members`
pub fn guild_members(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/members", guild_id)
}

/// `/guilds/{guild.id}/members/search`
pub fn guild_members_search(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/members/search", guild_id)
}

/// `/guilds/{guild.id}/members/{user.id}`
///
/// `user_id` defaults to `@me`.
pub fn guild_member(guild_id: &Snowflake, user_id: Option<&Snowflake>) -> String {
    route!("/guilds/{}/members/{}", guild_id, user_or_me(user_id))
}

/// `/guilds/{guild.id}/members/{user.id}/roles/{role.id}`
pub fn guild_member_role(guild_id: &Snowflake, member_id: &Snowflake, role_id: &Snowflake) -> String {
    route!("/guilds/{}/members/{}/roles/{}", guild_id, member_id, role_id)
}

/// `/guilds/{guild.id}/mfa`
pub fn guild_mfa(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/mfa", guild_id)
}

/// `/guilds/{guild.id}/bans`
pub fn guild_bans(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/bans", guild_id)
}

/// `/guilds/{guild.id}/bans/{user.id}`
pub fn guild_ban(guild_id: &Snowflake, user_id: &Snowflake) -> String {
    route!("/guilds/{}/bans/{}", guild_id, user_id)
}

/// `/guilds/{guild.id}/bulk-ban`
pub fn guild_bulk_ban(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/bulk-ban", guild_id)
}

/// `/guilds/{guild.id}/roles`
pub fn guild_roles(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/roles", guild_id)
}

/// `/guilds/{guild.id}/roles/{role.id}`
pub fn guild_role(guild_id: &Snowflake, role_id: &Snowflake) -> String {
    route!("/guilds/{}/roles/{}", guild_id, role_id)
}

/// `/guilds/{guild.id}/prune`
pub fn guild_prune(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/prune", guild_id)
}

/// `/guilds/{guild.id}/regions`
pub fn guild_voice_regions(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/regions", guild_id)
}

/// `/guilds/{guild.id}/invites`
pub fn guild_invites(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/invites", guild_id)
}

/// `/guilds/{guild.id}/integrations`
pub fn guild_integrations(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/integrations", guild_id)
}

/// `/guilds/{guild.id}/integrations/{integration.id}`
pub fn guild_integration(guild_id: &Snowflake, integration_id: &Snowflake) -> String {
    route!("/guilds/{}/integrations/{}", guild_id, integration_id)
}

/// `/guilds/{guild.id}/widget`
pub fn guild_widget_settings(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/widget", guild_id)
}

/// `/guilds/{guild.id}/widget.json`
pub fn guild_widget_json(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/widget.json", guild_id)
}

/// `/guilds/{guild.id}/widget.png`
pub fn guild_widget_image(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/widget.png", guild_id)
}

/// `/guilds/{guild.id}/vanity-url`
pub fn guild_vanity_url(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/vanity-url", guild_id)
}

/// `/guilds/{guild.id}/welcome-screen`
pub fn guild_welcome_screen(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/welcome-screen", guild_id)
}

/// `/guilds/{guild.id}/onboarding`
pub fn guild_onboarding(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/onboarding", guild_id)
}

/// `/guilds/{guild.id}/incident-actions`
pub fn guild_incident_actions(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/incident-actions", guild_id)
}

/// `/guilds/{guild.id}/voice-states/{user.id}`
///
/// `user_id` defaults to `@me`.
pub fn guild_voice_state(guild_id: &Snowflake, user_id: Option<&Snowflake>) -> String {
    route!("/guilds/{}/voice-states/{}", guild_id, user_or_me(user_id))
}

/// `/guilds/{guild.id}/emojis`
pub fn guild_emojis(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/emojis", guild_id)
}

/// `/guilds/{guild.id}/emojis/{emoji.id}`
pub fn guild_emoji(guild_id: &Snowflake, emoji_id: &Snowflake) -> String {
    route!("/guilds/{}/emojis/{}", guild_id, emoji_id)
}

/// `/guilds/{guild.id}/stickers`
pub fn guild_stickers(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/stickers", guild_id)
}

/// `/guilds/{guild.id}/stickers/{sticker.id}`
pub fn guild_sticker(guild_id: &Snowflake, sticker_id: &Snowflake) -> String {
    route!("/guilds/{}/stickers/{}", guild_id, sticker_id)
}

/// `/guilds/{guild.id}/soundboard-sounds`
pub fn guild_soundboard_sounds(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/soundboard-sounds", guild_id)
}

/// `/guilds/{guild.id}/soundboard-sounds/{sound.id}`
pub fn guild_soundboard_sound(guild_id: &Snowflake, sound_id: &Snowflake) -> String {
    route!("/guilds/{}/soundboard-sounds/{}", guild_id, sound_id)
}

/// `/soundboard-default-sounds`
pub fn soundboard_default_sounds() -> String {
    "/soundboard-default-sounds".to_owned()
}

/// `/guilds/{guild.id}/webhooks`
pub fn guild_webhooks(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/webhooks", guild_id)
}

/// `/guilds/{guild.id}/audit-logs`
pub fn guild_audit_log(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/audit-logs", guild_id)
}

/// `/guilds/{guild.id}/auto-moderation/rules`
pub fn guild_auto_moderation_rules(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/auto-moderation/rules", guild_id)
}

/// `/guilds/{guild.id}/auto-moderation/rules/{rule.id}`
pub fn guild_auto_moderation_rule(guild_id: &Snowflake, rule_id: &Snowflake) -> String {
    route!("/guilds/{}/auto-moderation/rules/{}", guild_id, rule_id)
}

/// `/guilds/{guild.id}/scheduled-events`
pub fn guild_scheduled_events(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/scheduled-events", guild_id)
}

/// `/guilds/{guild.id}/scheduled-events/{event.id}`
pub fn guild_scheduled_event(guild_id: &Snowflake, event_id: &Snowflake) -> String {
    route!("/guilds/{}/scheduled-events/{}", guild_id, event_id)
}

/// `/guilds/{guild.id}/scheduled-events/{event.id}/users`
pub fn guild_scheduled_event_users(guild_id: &Snowflake, event_id: &Snowflake) -> String {
    route!("/guilds/{}/scheduled-events/{}/users", guild_id, event_id)
}

/// `/guilds/{guild.id}/templates`
pub fn guild_templates(guild_id: &Snowflake) -> String {
    route!("/guilds/{}/templates", guild_id)
}

/// `/guilds/{guild.id}/templates/{template.code}`
pub fn guild_template(guild_id: &Snowflake, code: &str) -> String {
    route!("/guilds/{}/templates/{}", guild_id, code)
}

/// `/guilds/templates/{template.code}`
pub fn template(code: &str) -> String {
    route!("/guilds/templates/{}", code)
}

/// `/invites/{invite.code}`
pub fn invite(code: &str) -> String {
    route!("/invites/{}", code)
}

// Stages and stickers.

/// `/stage-instances`
pub fn stage_instances() -> String {
    "/stage-instances".to_owned()
}

/// `/stage-instances/{channel.id}`
pub fn stage_instance(channel_id: &Snowflake) -> String {
    route!("/stage-instances/{}", channel_id)
}

/// `/stickers/{sticker.id}`
pub fn sticker(sticker_id: &Snowflake) -> String {
    route!("/stickers/{}", sticker_id)
}

/// `/sticker-packs`
pub fn sticker_packs() -> String {
    "/sticker-packs".to_owned()
}

/// `/sticker-packs/{pack.id}`
pub fn sticker_pack(pack_id: &Snowflake) -> String {
    route!("/sticker-packs/{}", pack_id)
}

// Users.

/// `/users/{user.id}`
///
/// `user_id` defaults to `@me`.
pub fn user(user_id: Option<&Snowflake>) -> String {
    route!("/users/{}", user_or_me(user_id))
}

/// `/users/@me/guilds`
pub fn user_guilds() -> String {
    format!("/users/{}/guilds", CURRENT_USER)
}

/// `/users/@me/guilds/{guild.id}`
pub fn user_guild(guild_id: &Snowflake) -> String {
    route!("/users/@me/guilds/{}", guild_id)
}

/// `/users/@me/guilds/{guild.id}/member`
pub fn user_guild_member(guild_id: &Snowflake) -> String {
    route!("/users/@me/guilds/{}/member", guild_id)
}

/// `/users/@me/channels`
pub fn user_channels() -> String {
    format!("/users/{}/channels", CURRENT_USER)
}

/// `/users/@me/connections`
pub fn user_connections() -> String {
    format!("/users/{}/connections", CURRENT_USER)
}

/// `/users/@me/applications/{application.id}/role-connection`
pub fn user_application_role_connection(application_id: &Snowflake) -> String {
    route!("/users/@me/applications/{}/role-connection", application_id)
}

/// `/voice/regions`
pub fn voice_regions() -> String {
    "/voice/regions".to_owned()
}

// Webhooks.

/// `/webhooks/{webhook.id}` or `/webhooks/{webhook.id}/{webhook.token}`.
pub fn webhook(webhook_id: &Snowflake, token: Option<&str>) -> String {
    match token {
        Some(token) => route!("/webhooks/{}/{}", webhook_id, token),
        None => route!("/webhooks/{}", webhook_id),
    }
}

/// `/webhooks/{webhook.id}/{webhook.token}/messages/{message.id}`
///
/// `message_id` defaults to `@original`, the initial interaction response.
pub fn webhook_message(webhook_id: &Snowflake, token: &str, message_id: Option<&Snowflake>) -> String {
    route!(
        "/webhooks/{}/{}/messages/{}",
        webhook_id,
        token,
        message_id.map_or(ORIGINAL_MESSAGE, Snowflake::as_str)
    )
}

/// `/webhooks/{webhook.id}/{webhook.token}/{github|slack}`
pub fn webhook_platform(webhook_id: &Snowflake, token: &str, platform: WebhookPlatform) -> String {
    route!("/webhooks/{}/{}/{}", webhook_id, token, &platform)
}

// Gateway and OAuth2.

/// `/gateway`
pub fn gateway() -> String {
    "/gateway".to_owned()
}

/// `/gateway/bot`
pub fn gateway_bot() -> String {
    "/gateway/bot".to_owned()
}

/// `/oauth2/applications/@me`
pub fn oauth2_current_application() -> String {
    format!("/oauth2/applications/{}", CURRENT_USER)
}

/// `/oauth2/@me`
pub fn oauth2_current_authorization() -> String {
    format!("/oauth2/{}", CURRENT_USER)
}

/// `/oauth2/authorize`
pub fn oauth2_authorization() -> String {
    "/oauth2/authorize".to_owned()
}

/// `/oauth2/token`
pub fn oauth2_token_exchange() -> String {
    "/oauth2/token".to_owned()
}

/// `/oauth2/token/revoke`
pub fn oauth2_token_revocation() -> String {
    "/oauth2/token/revoke".to_owned()
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(s: &str) -> Snowflake {
        Snowflake::from(s)
    }

    #[test]
    fn channel_route_is_deterministic() {
        assert_eq!(channel(&id("123")), "/channels/123");
        assert_eq!(channel(&id("123")), channel(&id("123")));
    }

    #[test]
    fn unsafe_ids_are_encoded_in_place() {
        let odd = id("12/3 4");

        assert_eq!(channel(&odd), "/channels/12%2F3%204");
        assert_eq!(channel(&odd), channel(&odd));
    }

    #[test]
    fn user_defaults_to_current() {
        assert_eq!(user(None), "/users/@me");
        assert_eq!(user(Some(&id("80351110224678912"))), "/users/80351110224678912");
        assert_eq!(guild_member(&id("1"), None), "/guilds/1/members/@me");
        assert_eq!(thread_member(&id("2"), None), "/channels/2/thread-members/@me");
        assert_eq!(guild_voice_state(&id("1"), None), "/guilds/1/voice-states/@me");
        assert_eq!(
            channel_message_user_reaction(&id("1"), &id("2"), "\u{1F44D}", None),
            "/channels/1/messages/2/reactions/%F0%9F%91%8D/@me"
        );
    }

    #[test]
    fn webhook_message_defaults_to_original() {
        assert_eq!(
            webhook_message(&id("1"), "tok-en_.", None),
            "/webhooks/1/tok-en_./messages/@original"
        );
        assert_eq!(
            webhook_message(&id("1"), "tok", Some(&id("9"))),
            "/webhooks/1/tok/messages/9"
        );
        assert_eq!(webhook(&id("1"), None), "/webhooks/1");
        assert_eq!(webhook_platform(&id("1"), "tok", WebhookPlatform::Slack), "/webhooks/1/tok/slack");
    }

    #[test]
    fn custom_emoji_reaction_encodes_separator() {
        assert_eq!(
            channel_message_reaction(&id("1"), &id("2"), "blob:123456789012345678"),
            "/channels/1/messages/2/reactions/blob%3A123456789012345678"
        );
    }

    #[test]
    fn nested_routes() {
        assert_eq!(
            application_guild_command(&id("1"), &id("2"), &id("3")),
            "/applications/1/guilds/2/commands/3"
        );
        assert_eq!(threads(&id("5"), Some(&id("6"))), "/channels/5/messages/6/threads");
        assert_eq!(threads(&id("5"), None), "/channels/5/threads");
        assert_eq!(
            channel_archived_threads(&id("5"), ThreadArchiveStatus::Private),
            "/channels/5/threads/archived/private"
        );
        assert_eq!(poll_answer_voters(&id("1"), &id("2"), 3), "/channels/1/polls/2/answers/3");
        assert_eq!(invite("discord-api"), "/invites/discord-api");
        assert_eq!(current_application(), "/applications/@me");
    }
}
