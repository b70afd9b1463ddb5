//! Custom and unicode emoji.

use super::user::User;
use crate::snowflake::Snowflake;
use serde::{Deserialize, Serialize};

/// A custom guild emoji, or a unicode emoji in reactions.
///
/// Unicode emoji have no `id` and carry the emoji itself in `name`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Emoji {
    /// Emoji ID.
    #[serde(default)]
    pub id: Option<Snowflake>,
    /// Emoji name; may be missing for deleted custom emoji in reactions.
    #[serde(default)]
    pub name: Option<String>,
    /// Roles allowed to use this emoji.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
    /// User that created this emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Whether the emoji must be wrapped in colons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_colons: Option<bool>,
    /// Whether the emoji is managed by an integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    /// Whether the emoji is animated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    /// Whether the emoji can be used; may be false after losing server boosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl Emoji {
    /// Form of this emoji used in reaction routes: `name:id` for custom
    /// emoji, the emoji itself for unicode emoji.
    ///
    /// The result still needs escaping, which the reaction routes apply.
    pub fn reaction_param(&self) -> String {
        let name = self.name.as_deref().unwrap_or_default();
        match &self.id {
            Some(id) => format!("{}:{}", name, id),
            None => name.to_owned(),
        }
    }

    /// Returns whether this is a custom emoji.
    pub fn is_custom(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn reaction_param_forms() {
        let custom: Emoji = serde_json::from_value(json!({
            "id": "41771983429993937",
            "name": "LUL",
            "animated": true
        }))
        .unwrap();
        assert!(custom.is_custom());
        assert_eq!(custom.reaction_param(), "LUL:41771983429993937");

        let unicode: Emoji = serde_json::from_value(json!({"id": null, "name": "🔥"})).unwrap();
        assert!(!unicode.is_custom());
        assert_eq!(unicode.reaction_param(), "🔥");
    }

    #[cfg(feature = "rest")]
    #[test]
    fn reaction_param_is_escaped_in_routes() {
        let unicode: Emoji = serde_json::from_value(json!({"id": null, "name": "🔥"})).unwrap();

        assert_eq!(
            crate::routes::rest::channel_message_user_reaction(
                &"1".into(),
                &"2".into(),
                &unicode.reaction_param(),
                None
            ),
            "/channels/1/messages/2/reactions/%F0%9F%94%A5/@me"
        );
    }
}
