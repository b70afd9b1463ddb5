//! Recognition of Discord's message formatting constructs.
//!
//! Mentions, custom emoji, timestamps and command references all use a short
//! `<...>` markup in message content. Each construct is described by one
//! [`FormattingPattern`], whose compiled expression is shared process-wide.
//! IDs inside these constructs are limited to 17-20 digits, matching
//! [`Snowflake::is_valid`].
//!
//! The inverse operation, rendering values into markup, lives in [`markdown`].
//!
//! See <https://discord.com/developers/docs/reference#message-formatting>

pub mod markdown;

pub use markdown::*;

use crate::{
    error::{Error, Result},
    snowflake::Snowflake,
};
use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter, Result as FmtResult},
};
use tracing::trace;

/// Characters accepted in an application command name.
macro_rules! command_name {
    () => {
        r"[-_\p{L}\p{N}\p{Devanagari}\p{Thai}]{1,32}"
    };
}

/// One of Discord's `<...>` formatting constructs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum FormattingPattern {
    /// `<@id>`
    User,
    /// `<@!id>`, a deprecated form still sent by older clients.
    UserWithNickname,
    /// `<@id>` or `<@!id>`.
    UserWithOptionalNickname,
    /// `<#id>`
    Channel,
    /// `<@&id>`
    Role,
    /// `</name:id>`, `</name sub:id>` or `</name group sub:id>`.
    SlashCommand,
    /// `<:name:id>` or `<a:name:id>`.
    Emoji,
    /// `<a:name:id>`
    AnimatedEmoji,
    /// `<:name:id>`
    StaticEmoji,
    /// `<t:timestamp>` or `<t:timestamp:style>`.
    Timestamp,
    /// `<t:timestamp>`
    DefaultStyledTimestamp,
    /// `<t:timestamp:style>`
    StyledTimestamp,
    /// `<id:customize>`, `<id:browse>`, `<id:guide>` or `<id:linked-roles>`.
    GuildNavigation,
    /// `<id:linked-roles:id>`
    LinkedRole,
}

impl FormattingPattern {
    /// Every pattern, in declaration order.
    pub const ALL: [FormattingPattern; 14] = [
        FormattingPattern::User,
        FormattingPattern::UserWithNickname,
        FormattingPattern::UserWithOptionalNickname,
        FormattingPattern::Channel,
        FormattingPattern::Role,
        FormattingPattern::SlashCommand,
        FormattingPattern::Emoji,
        FormattingPattern::AnimatedEmoji,
        FormattingPattern::StaticEmoji,
        FormattingPattern::Timestamp,
        FormattingPattern::DefaultStyledTimestamp,
        FormattingPattern::StyledTimestamp,
        FormattingPattern::GuildNavigation,
        FormattingPattern::LinkedRole,
    ];

    /// Uncompiled source of this pattern, without anchors.
    pub fn source(self) -> &'static str {
        use FormattingPattern::*;
        match self {
            User => r"<@(?P<id>[0-9]{17,20})>",
            UserWithNickname => r"<@!(?P<id>[0-9]{17,20})>",
            UserWithOptionalNickname => r"<@!?(?P<id>[0-9]{17,20})>",
            Channel => r"<#(?P<id>[0-9]{17,20})>",
            Role => r"<@&(?P<id>[0-9]{17,20})>",
            SlashCommand => concat!(
                r"</(?P<fullName>(?P<name>",
                command_name!(),
                r")(?: (?P<subcommandOrGroup>",
                command_name!(),
                r"))?(?: (?P<subcommand>",
                command_name!(),
                r"))?):(?P<id>[0-9]{17,20})>",
            ),
            Emoji => r"<(?P<animated>a)?:(?P<name>[A-Za-z0-9_]{2,32}):(?P<id>[0-9]{17,20})>",
            AnimatedEmoji => r"<(?P<animated>a):(?P<name>[A-Za-z0-9_]{2,32}):(?P<id>[0-9]{17,20})>",
            StaticEmoji => r"<:(?P<name>[A-Za-z0-9_]{2,32}):(?P<id>[0-9]{17,20})>",
            Timestamp => r"<t:(?P<timestamp>-?[0-9]{1,13})(?::(?P<style>[DFRTdft]))?>",
            DefaultStyledTimestamp => r"<t:(?P<timestamp>-?[0-9]{1,13})>",
            StyledTimestamp => r"<t:(?P<timestamp>-?[0-9]{1,13}):(?P<style>[DFRTdft])>",
            GuildNavigation => r"<id:(?P<type>customize|browse|guide|linked-roles)>",
            LinkedRole => r"<id:linked-roles:(?P<id>[0-9]{17,20})>",
        }
    }

    /// Compiled expression matching this construct anywhere in a string.
    pub fn regex(self) -> &'static Regex {
        &PATTERNS[self as usize].open
    }

    /// Compiled expression matching this construct as the entire string.
    pub fn anchored(self) -> &'static Regex {
        &PATTERNS[self as usize].whole
    }

    /// Tests whether this construct occurs anywhere in `text`.
    pub fn is_match(self, text: &str) -> bool {
        self.regex().is_match(text).unwrap_or(false)
    }

    /// Captures the first occurrence of this construct in `text`.
    pub fn captures(self, text: &str) -> Option<Captures<'_>> {
        self.regex().captures(text).ok().flatten()
    }

    /// Captures this construct only if it spans all of `text`.
    pub fn captures_whole(self, text: &str) -> Option<Captures<'_>> {
        self.anchored().captures(text).ok().flatten()
    }
}

struct CompiledPattern {
    open: Regex,
    whole: Regex,
}

impl CompiledPattern {
    fn new(source: &str) -> Self {
        Self {
            open: Regex::new(source).unwrap(),
            whole: Regex::new(&format!("^(?:{})$", source)).unwrap(),
        }
    }
}

lazy_static! {
    static ref PATTERNS: Vec<CompiledPattern> = FormattingPattern::ALL
        .iter()
        .map(|p| CompiledPattern::new(p.source()))
        .collect();
}

/// The kind of entity referenced by a mention.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    /// `<@id>` or `<@!id>`.
    User,
    /// `<#id>`.
    Channel,
    /// `<@&id>`.
    Role,
}

impl MentionKind {
    fn pattern(self) -> FormattingPattern {
        match self {
            MentionKind::User => FormattingPattern::UserWithOptionalNickname,
            MentionKind::Channel => FormattingPattern::Channel,
            MentionKind::Role => FormattingPattern::Role,
        }
    }
}

impl Display for MentionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            MentionKind::User => "user",
            MentionKind::Channel => "channel",
            MentionKind::Role => "role",
        })
    }
}

/// Interprets `text` as exactly one user, channel or role mention.
///
/// Patterns are tried in that order, and each must cover the whole input:
/// `"<@&id>"` is only ever a role, never a user.
pub fn parse_mention(text: &str) -> Result<(Snowflake, MentionKind)> {
    for kind in [MentionKind::User, MentionKind::Channel, MentionKind::Role] {
        if let Some(id) = kind
            .pattern()
            .captures_whole(text)
            .and_then(|c| c.name("id").map(|m| Snowflake::from(m.as_str())))
        {
            return Ok((id, kind));
        }
    }

    trace!("No mention found in {:?}.", text);
    Err(Error::MentionNotFound)
}

/// Collects every distinct mention of `kind` within `text`, in numeric ID order.
///
/// Unlike the Discord client, this also finds mentions inside code blocks.
pub fn find_mentions(text: &str, kind: MentionKind) -> Vec<Snowflake> {
    let mut ids = BTreeSet::new();
    for capture in kind.pattern().regex().captures_iter(text).flatten() {
        if let Some(id) = capture.name("id") {
            ids.insert(Snowflake::from(id.as_str()));
        }
    }

    ids.into_iter().collect()
}

/// A custom guild emoji reference.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CustomEmoji {
    /// Whether the emoji is animated (`<a:...>`).
    pub animated: bool,
    /// Emoji name.
    pub name: String,
    /// Emoji ID.
    pub id: Snowflake,
}

/// Interprets `text` as exactly one custom emoji.
pub fn parse_emoji(text: &str) -> Option<CustomEmoji> {
    let caps = FormattingPattern::Emoji.captures_whole(text)?;

    Some(CustomEmoji {
        animated: caps.name("animated").is_some(),
        name: caps.name("name")?.as_str().to_owned(),
        id: caps.name("id")?.as_str().into(),
    })
}

/// A `<t:...>` timestamp reference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MarkdownTimestamp {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Display style, if not the client default.
    pub style: Option<TimestampStyle>,
}

/// Interprets `text` as exactly one timestamp.
pub fn parse_timestamp(text: &str) -> Option<MarkdownTimestamp> {
    let caps = FormattingPattern::Timestamp.captures_whole(text)?;
    let timestamp = caps.name("timestamp")?.as_str().parse().ok()?;
    let style = match caps.name("style") {
        Some(m) => Some(TimestampStyle::from_code(m.as_str())?),
        None => None,
    };

    Some(MarkdownTimestamp { timestamp, style })
}

/// A clickable reference to a chat input application command.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SlashCommandMention {
    /// The space-separated command path, e.g. `"tag get"`.
    pub full_name: String,
    /// Top-level command name.
    pub name: String,
    /// Subcommand group, or subcommand if only two levels are present.
    pub subcommand_or_group: Option<String>,
    /// Subcommand beneath a group.
    pub subcommand: Option<String>,
    /// Command ID.
    pub id: Snowflake,
}

/// Interprets `text` as exactly one slash command mention.
pub fn parse_slash_command(text: &str) -> Option<SlashCommandMention> {
    let caps = FormattingPattern::SlashCommand.captures_whole(text)?;
    let owned = |name: &str| caps.name(name).map(|m| m.as_str().to_owned());

    Some(SlashCommandMention {
        full_name: owned("fullName")?,
        name: owned("name")?,
        subcommand_or_group: owned("subcommandOrGroup"),
        subcommand: owned("subcommand"),
        id: owned("id")?.into(),
    })
}

/// Interprets `text` as exactly one guild navigation reference.
pub fn parse_guild_navigation(text: &str) -> Option<GuildNavigationType> {
    let caps = FormattingPattern::GuildNavigation.captures_whole(text)?;
    GuildNavigationType::from_code(caps.name("type")?.as_str())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::test_data::MENTION_ID;

    #[test]
    fn every_pattern_compiles() {
        for pattern in FormattingPattern::ALL {
            let _ = pattern.regex();
            let _ = pattern.anchored();
        }
    }

    #[test]
    fn mention_kinds_in_fixed_order() {
        let cases = [
            (format!("<@{}>", MENTION_ID), MentionKind::User),
            (format!("<@!{}>", MENTION_ID), MentionKind::User),
            (format!("<#{}>", MENTION_ID), MentionKind::Channel),
            (format!("<@&{}>", MENTION_ID), MentionKind::Role),
        ];

        for (text, kind) in cases.iter() {
            let (id, found) = parse_mention(text).unwrap();
            assert_eq!(id.as_str(), MENTION_ID);
            assert_eq!(found, *kind);
        }
    }

    #[test]
    fn non_mentions_are_not_found() {
        for text in [
            "not a mention",
            "<@1234>",
            "<@123456789012345678901>",
            "<@123456789012345678> trailing",
            "<@&>",
            "",
        ] {
            assert!(matches!(parse_mention(text), Err(Error::MentionNotFound)));
        }
    }

    #[test]
    fn ids_must_be_ascii_digits() {
        for text in [
            "<@١٢٣٤٥٦٧٨٩٠١٢٣٤٥٦٧٨>",
            "<#１２３４５６７８９０１２３４５６７８>",
            "<@&१२३४५६७८९०१२३४५६७८>",
        ] {
            assert!(matches!(parse_mention(text), Err(Error::MentionNotFound)));
        }

        assert!(parse_emoji("<:blob:١٢٣٤٥٦٧٨٩٠١٢٣٤٥٦٧٨>").is_none());
        assert!(parse_emoji("<:blöb:123456789012345678>").is_none());
        assert!(parse_timestamp("<t:١٦١٨٩٥٣٦٣٠>").is_none());
    }

    #[test]
    fn find_mentions_orders_numerically() {
        let text = "<@100000000000000000> <@99999999999999999>";

        assert_eq!(
            find_mentions(text, MentionKind::User),
            vec![
                Snowflake::from("99999999999999999"),
                Snowflake::from("100000000000000000"),
            ]
        );
    }

    #[test]
    fn find_mentions_dedups_and_sorts() {
        let text = "<@223456789012345678> hi <@123456789012345678> <@!223456789012345678> <@&323456789012345678>";

        assert_eq!(
            find_mentions(text, MentionKind::User),
            vec![
                Snowflake::from("123456789012345678"),
                Snowflake::from("223456789012345678"),
            ]
        );
        assert_eq!(
            find_mentions(text, MentionKind::Role),
            vec![Snowflake::from("323456789012345678")]
        );
        assert!(find_mentions(text, MentionKind::Channel).is_empty());
    }

    #[test]
    fn emoji_variants() {
        let animated = parse_emoji("<a:party_blob:123456789012345678>").unwrap();
        assert!(animated.animated);
        assert_eq!(animated.name, "party_blob");
        assert_eq!(animated.id.as_str(), MENTION_ID);

        let still = parse_emoji("<:ok:123456789012345678>").unwrap();
        assert!(!still.animated);

        assert!(FormattingPattern::AnimatedEmoji.is_match("<a:ok:123456789012345678>"));
        assert!(!FormattingPattern::StaticEmoji.is_match("<a:ok:123456789012345678>"));
        assert!(parse_emoji("<:x:123456789012345678>").is_none());
    }

    #[test]
    fn timestamps_with_and_without_style() {
        assert_eq!(
            parse_timestamp("<t:1618953630>"),
            Some(MarkdownTimestamp {
                timestamp: 1_618_953_630,
                style: None,
            })
        );
        assert_eq!(
            parse_timestamp("<t:-86400:R>"),
            Some(MarkdownTimestamp {
                timestamp: -86_400,
                style: Some(TimestampStyle::RelativeTime),
            })
        );
        assert!(parse_timestamp("<t:1618953630:x>").is_none());
        assert!(FormattingPattern::StyledTimestamp.is_match("<t:1:F>"));
        assert!(!FormattingPattern::DefaultStyledTimestamp.is_match("<t:1:F>"));
    }

    #[test]
    fn slash_commands_up_to_two_sublevels() {
        let top = parse_slash_command("</ping:123456789012345678>").unwrap();
        assert_eq!(top.full_name, "ping");
        assert_eq!(top.subcommand_or_group, None);

        let nested = parse_slash_command("</tag edit name:123456789012345678>").unwrap();
        assert_eq!(nested.full_name, "tag edit name");
        assert_eq!(nested.name, "tag");
        assert_eq!(nested.subcommand_or_group.as_deref(), Some("edit"));
        assert_eq!(nested.subcommand.as_deref(), Some("name"));
        assert_eq!(nested.id.as_str(), MENTION_ID);

        assert!(parse_slash_command("</a b c d:123456789012345678>").is_none());
    }

    #[test]
    fn guild_navigation_targets() {
        assert_eq!(
            parse_guild_navigation("<id:linked-roles>"),
            Some(GuildNavigationType::LinkedRoles)
        );
        assert_eq!(
            parse_guild_navigation("<id:browse>"),
            Some(GuildNavigationType::Browse)
        );
        assert!(parse_guild_navigation("<id:home>").is_none());

        let caps = FormattingPattern::LinkedRole
            .captures("see <id:linked-roles:123456789012345678>")
            .unwrap();
        assert_eq!(caps.name("id").unwrap().as_str(), MENTION_ID);
    }
}
