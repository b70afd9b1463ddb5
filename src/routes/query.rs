//! Typed query strings for paginated and filtered endpoints.
//!
//! Each query type knows which parameter name every field maps to. Unset
//! fields are left out of the encoded string entirely.

use crate::snowflake::Snowflake;
use url::form_urlencoded::Serializer;

/// A set of query-string parameters for one endpoint.
pub trait Query {
    /// Parameter name/value pairs for every field that is set, in field order.
    fn pairs(&self) -> Vec<(&'static str, String)>;

    /// Encodes the set fields as `key=value&...`, without a leading `?`.
    fn to_query_string(&self) -> String {
        let mut out = Serializer::new(String::new());
        for (key, value) in self.pairs() {
            out.append_pair(key, &value);
        }

        out.finish()
    }
}

/// Appends `query` to `route`, adding the `?` only if a parameter is set.
pub fn with_query(route: String, query: &impl Query) -> String {
    let query = query.to_query_string();
    if query.is_empty() {
        route
    } else {
        format!("{}?{}", route, query)
    }
}

macro_rules! query {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty => $key:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: Option<$ty>,
            )*
        }

        impl Query for $name {
            fn pairs(&self) -> Vec<(&'static str, String)> {
                let mut pairs = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        pairs.push(($key, value.to_string()));
                    }
                )*
                pairs
            }
        }
    };
}

query! {
    /// `GET /channels/{channel.id}/messages`
    GetChannelMessagesQuery {
        /// Maximum number of messages to return (1-100).
        limit: u8 => "limit",
        /// Get messages before this message ID.
        before: Snowflake => "before",
        /// Get messages after this message ID.
        after: Snowflake => "after",
        /// Get messages around this message ID.
        around: Snowflake => "around",
    }
}

query! {
    /// `GET /channels/{channel.id}/messages/{message.id}/reactions/{emoji}`
    GetReactionsQuery {
        /// `0` for normal reactions, `1` for super-reactions.
        kind: u8 => "type",
        /// Get users after this user ID.
        after: Snowflake => "after",
        /// Maximum number of users to return (1-100).
        limit: u8 => "limit",
    }
}

query! {
    /// `GET /channels/{channel.id}/threads/archived/{public|private}`
    GetArchivedThreadsQuery {
        /// ISO8601 timestamp; returns threads archived before it.
        before: String => "before",
        /// Maximum number of threads to return.
        limit: u32 => "limit",
    }
}

query! {
    /// `GET /channels/{thread.id}/thread-members`
    ListThreadMembersQuery {
        /// Include a guild member object for each thread member.
        with_member: bool => "with_member",
        /// Get thread members after this user ID.
        after: Snowflake => "after",
        /// Maximum number of thread members to return (1-100).
        limit: u8 => "limit",
    }
}

query! {
    /// `GET /channels/{channel.id}/polls/{message.id}/answers/{answer_id}`
    GetAnswerVotersQuery {
        /// Get users after this user ID.
        after: Snowflake => "after",
        /// Maximum number of users to return (1-100).
        limit: u8 => "limit",
    }
}

query! {
    /// `GET /guilds/{guild.id}`
    GetGuildQuery {
        /// Include approximate member and presence counts.
        with_counts: bool => "with_counts",
    }
}

query! {
    /// `GET /guilds/{guild.id}/members`
    GetGuildMembersQuery {
        /// Maximum number of members to return (1-1000).
        limit: u16 => "limit",
        /// The highest user ID in the previous page.
        after: Snowflake => "after",
    }
}

query! {
    /// `GET /guilds/{guild.id}/members/search`
    SearchGuildMembersQuery {
        /// Matched against username and nickname prefixes.
        query: String => "query",
        /// Maximum number of members to return (1-1000).
        limit: u16 => "limit",
    }
}

query! {
    /// `GET /guilds/{guild.id}/bans`
    GetGuildBansQuery {
        /// Get users before this user ID.
        before: Snowflake => "before",
        /// Get users after this user ID.
        after: Snowflake => "after",
        /// Maximum number of bans to return (1-1000).
        limit: u16 => "limit",
    }
}

query! {
    /// `GET /guilds/{guild.id}/prune`
    GetPruneCountQuery {
        /// Days of inactivity to count (1-30).
        days: u8 => "days",
        /// Comma-separated role IDs to include.
        include_roles: String => "include_roles",
    }
}

query! {
    /// `GET /guilds/{guild.id}/audit-logs`
    GetAuditLogQuery {
        /// Entries from a specific user.
        user_id: Snowflake => "user_id",
        /// Entries of a specific audit log event type.
        action_type: u16 => "action_type",
        /// Entries with an ID before this one.
        before: Snowflake => "before",
        /// Entries with an ID after this one.
        after: Snowflake => "after",
        /// Maximum number of entries to return (1-100).
        limit: u8 => "limit",
    }
}

query! {
    /// `GET /guilds/{guild.id}/scheduled-events/{event.id}/users`
    GetScheduledEventUsersQuery {
        /// Maximum number of users to return (up to 100).
        limit: u8 => "limit",
        /// Include a guild member object for each user.
        with_member: bool => "with_member",
        /// Get users before this user ID.
        before: Snowflake => "before",
        /// Get users after this user ID.
        after: Snowflake => "after",
    }
}

query! {
    /// `GET /users/@me/guilds`
    GetCurrentUserGuildsQuery {
        /// Get guilds before this guild ID.
        before: Snowflake => "before",
        /// Get guilds after this guild ID.
        after: Snowflake => "after",
        /// Maximum number of guilds to return (1-200).
        limit: u8 => "limit",
        /// Include approximate member and presence counts.
        with_counts: bool => "with_counts",
    }
}

query! {
    /// `GET /invites/{invite.code}`
    GetInviteQuery {
        /// Include approximate member and presence counts.
        with_counts: bool => "with_counts",
        /// Include the invite's expiration date.
        with_expiration: bool => "with_expiration",
        /// Guild scheduled event to include with the invite.
        guild_scheduled_event_id: Snowflake => "guild_scheduled_event_id",
    }
}

query! {
    /// `POST /webhooks/{webhook.id}/{webhook.token}`
    WebhookExecuteQuery {
        /// Wait for server confirmation and return the created message.
        wait: bool => "wait",
        /// Send the message to this thread within the webhook's channel.
        thread_id: Snowflake => "thread_id",
        /// Allow non-interactive components from a non-application webhook.
        with_components: bool => "with_components",
    }
}

query! {
    /// `GET`/`PATCH`/`DELETE /webhooks/{webhook.id}/{webhook.token}/messages/{message.id}`
    WebhookMessageQuery {
        /// The thread containing the message.
        thread_id: Snowflake => "thread_id",
        /// Allow non-interactive components from a non-application webhook.
        with_components: bool => "with_components",
    }
}

query! {
    /// `GET /applications/{application.id}/commands`
    ApplicationCommandsQuery {
        /// Include the full localization dictionaries.
        with_localizations: bool => "with_localizations",
    }
}

query! {
    /// `GET /applications/{application.id}/entitlements`
    GetEntitlementsQuery {
        /// Entitlements of a specific user.
        user_id: Snowflake => "user_id",
        /// Comma-separated SKU IDs to filter by.
        sku_ids: String => "sku_ids",
        /// Entitlements before this ID.
        before: Snowflake => "before",
        /// Entitlements after this ID.
        after: Snowflake => "after",
        /// Maximum number of entitlements to return (1-100).
        limit: u8 => "limit",
        /// Entitlements of a specific guild.
        guild_id: Snowflake => "guild_id",
        /// Whether ended entitlements should be omitted.
        exclude_ended: bool => "exclude_ended",
        /// Whether deleted entitlements should be omitted.
        exclude_deleted: bool => "exclude_deleted",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::rest;

    #[test]
    fn unset_fields_are_omitted() {
        let query = GetChannelMessagesQuery {
            limit: Some(50),
            before: Some(Snowflake::from("175928847299117063")),
            ..Default::default()
        };

        assert_eq!(query.to_query_string(), "limit=50&before=175928847299117063");
        assert_eq!(GetChannelMessagesQuery::default().to_query_string(), "");
    }

    #[test]
    fn parameter_names_follow_wire_names() {
        let query = GetReactionsQuery {
            kind: Some(1),
            ..Default::default()
        };
        assert_eq!(query.pairs(), vec![("type", "1".to_owned())]);

        let query = GetGuildQuery {
            with_counts: Some(true),
        };
        assert_eq!(query.to_query_string(), "with_counts=true");
    }

    #[test]
    fn values_are_form_encoded() {
        let query = SearchGuildMembersQuery {
            query: Some("a b&c".to_owned()),
            limit: None,
        };

        assert_eq!(query.to_query_string(), "query=a+b%26c");
    }

    #[test]
    fn query_only_appended_when_set() {
        let guild = Snowflake::from("1");

        assert_eq!(
            with_query(rest::guild(&guild), &GetGuildQuery::default()),
            "/guilds/1"
        );
        assert_eq!(
            with_query(
                rest::guild_members(&guild),
                &GetGuildMembersQuery {
                    limit: Some(1000),
                    after: Some(Snowflake::from("0")),
                }
            ),
            "/guilds/1/members?limit=1000&after=0"
        );
    }
}
