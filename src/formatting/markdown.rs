//! Rendering of values into Discord message markup.
//!
//! All functions here are total: any input produces well-formed markup,
//! meaningful or not.

use crate::snowflake::Snowflake;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Client-side rendering style of a `<t:...>` timestamp.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TimestampStyle {
    /// `16:20`
    #[serde(rename = "t")]
    ShortTime,
    /// `16:20:30`
    #[serde(rename = "T")]
    LongTime,
    /// `20/04/2021`
    #[serde(rename = "d")]
    ShortDate,
    /// `20 April 2021`
    #[serde(rename = "D")]
    LongDate,
    /// `20 April 2021 16:20`, the client default.
    #[serde(rename = "f")]
    ShortDateTime,
    /// `Tuesday, 20 April 2021 16:20`
    #[serde(rename = "F")]
    LongDateTime,
    /// `2 months ago`
    #[serde(rename = "R")]
    RelativeTime,
}

impl TimestampStyle {
    /// The single-character style code used in markup.
    pub fn code(self) -> &'static str {
        use TimestampStyle::*;
        match self {
            ShortTime => "t",
            LongTime => "T",
            ShortDate => "d",
            LongDate => "D",
            ShortDateTime => "f",
            LongDateTime => "F",
            RelativeTime => "R",
        }
    }

    /// Looks up a style by its markup code.
    pub fn from_code(code: &str) -> Option<Self> {
        use TimestampStyle::*;
        Some(match code {
            "t" => ShortTime,
            "T" => LongTime,
            "d" => ShortDate,
            "D" => LongDate,
            "f" => ShortDateTime,
            "F" => LongDateTime,
            "R" => RelativeTime,
            _ => return None,
        })
    }
}

/// Destination of a `<id:...>` guild navigation link.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuildNavigationType {
    /// Customize tab with the server's onboarding prompts.
    Customize,
    /// Browse channels tab.
    Browse,
    /// Server guide.
    Guide,
    /// Linked roles.
    LinkedRoles,
}

impl GuildNavigationType {
    /// Segment used in markup.
    pub fn code(self) -> &'static str {
        match self {
            GuildNavigationType::Customize => "customize",
            GuildNavigationType::Browse => "browse",
            GuildNavigationType::Guide => "guide",
            GuildNavigationType::LinkedRoles => "linked-roles",
        }
    }

    /// Looks up a destination by its markup segment.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "customize" => GuildNavigationType::Customize,
            "browse" => GuildNavigationType::Browse,
            "guide" => GuildNavigationType::Guide,
            "linked-roles" => GuildNavigationType::LinkedRoles,
            _ => return None,
        })
    }
}

/// `<@id>`
pub fn user_mention(id: &Snowflake) -> String {
    format!("<@{}>", id)
}

/// `<#id>`
pub fn channel_mention(id: &Snowflake) -> String {
    format!("<#{}>", id)
}

/// `<@&id>`
pub fn role_mention(id: &Snowflake) -> String {
    format!("<@&{}>", id)
}

/// `<:name:id>` or `<a:name:id>`.
///
/// A missing name renders as the `_` placeholder, which Discord resolves by ID
/// alone. [`parse_emoji`](crate::formatting::parse_emoji) only accepts real
/// emoji names of 2 to 32 characters, so this form does not parse back.
pub fn formatted_emoji(id: &Snowflake, name: Option<&str>, animated: bool) -> String {
    format!(
        "<{}:{}:{}>",
        if animated { "a" } else { "" },
        name.unwrap_or("_"),
        id
    )
}

/// `<t:seconds>` or `<t:seconds:style>`.
pub fn timestamp_markdown(seconds: i64, style: Option<TimestampStyle>) -> String {
    match style {
        Some(style) => format!("<t:{}:{}>", seconds, style.code()),
        None => format!("<t:{}>", seconds),
    }
}

/// `</name:id>`, `</name sub:id>` or `</name group sub:id>`.
pub fn chat_input_application_command_mention(
    id: &Snowflake,
    name: &str,
    subcommand_group: Option<&str>,
    subcommand: Option<&str>,
) -> String {
    let mut path = name.to_owned();
    for level in subcommand_group.iter().chain(subcommand.iter()) {
        path.push(' ');
        path.push_str(level);
    }

    format!("</{}:{}>", path, id)
}

/// `<id:type>`
pub fn guild_navigation(kind: GuildNavigationType) -> String {
    format!("<id:{}>", kind.code())
}

/// `<id:linked-roles:id>`
pub fn linked_role(id: &Snowflake) -> String {
    format!("<id:linked-roles:{}>", id)
}

/// `[text](url)` or `[text](url "title")`.
pub fn hyperlink(text: impl Display, url: impl Display, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("[{}]({} \"{}\")", text, url, title),
        None => format!("[{}]({})", text, url),
    }
}

/// `<url>`, which suppresses the link's embed.
pub fn hide_link_embed(url: impl Display) -> String {
    format!("<{}>", url)
}

/// `||content||`
pub fn spoiler(content: impl Display) -> String {
    format!("||{}||", content)
}

/// `` `content` ``
pub fn inline_code(content: impl Display) -> String {
    format!("`{}`", content)
}

/// A fenced code block, with an optional highlighting language.
pub fn code_block(content: impl Display, language: Option<&str>) -> String {
    format!("```{}\n{}\n```", language.unwrap_or(""), content)
}

/// `**content**`
pub fn bold(content: impl Display) -> String {
    format!("**{}**", content)
}

/// `_content_`
pub fn italic(content: impl Display) -> String {
    format!("_{}_", content)
}

/// `__content__`
pub fn underline(content: impl Display) -> String {
    format!("__{}__", content)
}

/// `~~content~~`
pub fn strikethrough(content: impl Display) -> String {
    format!("~~{}~~", content)
}

/// `> content`, quoting a single line.
pub fn quote(content: impl Display) -> String {
    format!("> {}", content)
}

/// `>>> content`, quoting everything that follows.
pub fn block_quote(content: impl Display) -> String {
    format!(">>> {}", content)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::formatting::{
        parse_emoji,
        parse_guild_navigation,
        parse_mention,
        parse_slash_command,
        parse_timestamp,
        MentionKind,
    };

    fn id() -> Snowflake {
        Snowflake::from(crate::constants::test_data::MENTION_ID)
    }

    #[test]
    fn rendered_mentions_parse_back() {
        assert_eq!(parse_mention(&user_mention(&id())).unwrap(), (id(), MentionKind::User));
        assert_eq!(
            parse_mention(&channel_mention(&id())).unwrap(),
            (id(), MentionKind::Channel)
        );
        assert_eq!(parse_mention(&role_mention(&id())).unwrap(), (id(), MentionKind::Role));
    }

    #[test]
    fn rendered_constructs_are_recognised() {
        let emoji = parse_emoji(&formatted_emoji(&id(), Some("blob"), true)).unwrap();
        assert!(emoji.animated);
        assert_eq!(emoji.name, "blob");

        let unnamed = formatted_emoji(&id(), None, false);
        assert_eq!(unnamed, "<:_:123456789012345678>");
        assert!(parse_emoji(&unnamed).is_none());

        let ts = parse_timestamp(&timestamp_markdown(42, Some(TimestampStyle::LongDate))).unwrap();
        assert_eq!(ts.style, Some(TimestampStyle::LongDate));

        let cmd = chat_input_application_command_mention(&id(), "role", None, Some("add"));
        assert_eq!(cmd, "</role add:123456789012345678>");
        assert_eq!(
            parse_slash_command(&cmd).unwrap().subcommand_or_group.as_deref(),
            Some("add")
        );

        assert_eq!(
            parse_guild_navigation(&guild_navigation(GuildNavigationType::Guide)),
            Some(GuildNavigationType::Guide)
        );
    }

    #[test]
    fn text_decorations() {
        assert_eq!(bold("a"), "**a**");
        assert_eq!(italic("a"), "_a_");
        assert_eq!(underline("a"), "__a__");
        assert_eq!(strikethrough("a"), "~~a~~");
        assert_eq!(spoiler("a"), "||a||");
        assert_eq!(inline_code("a"), "`a`");
        assert_eq!(code_block("fn main() {}", Some("rs")), "```rs\nfn main() {}\n```");
        assert_eq!(quote("a"), "> a");
        assert_eq!(block_quote("a"), ">>> a");
        assert_eq!(
            hyperlink("docs", "https://discord.com", Some("Discord")),
            "[docs](https://discord.com \"Discord\")"
        );
        assert_eq!(hide_link_embed("https://discord.com"), "<https://discord.com>");
    }

    #[test]
    fn style_codes_round_trip() {
        for code in ["t", "T", "d", "D", "f", "F", "R"] {
            assert_eq!(TimestampStyle::from_code(code).unwrap().code(), code);
        }
        assert!(TimestampStyle::from_code("x").is_none());
    }
}
