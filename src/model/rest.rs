//! Request bodies and the JSON error body returned by the REST API.

use super::{
    channel::{ChannelType, Overwrite},
    message::{AllowedMentions, Embed, MessageFlags, MessageReference, Nonce},
};
use crate::snowflake::Snowflake;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Body of `POST /channels/{channel.id}/messages`.
///
/// At least one of `content`, `embeds`, `sticker_ids` or attachments must be set.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CreateMessage {
    /// Message contents, up to 2000 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Nonce echoed back in `MESSAGE_CREATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Nonce>,
    /// Whether this is a text-to-speech message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    /// Up to 10 rich embeds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    /// Mentions allowed to notify.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Message to reply to or forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
    /// Up to 3 guild stickers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sticker_ids: Vec<Snowflake>,
    /// Only `SUPPRESS_EMBEDS`, `SUPPRESS_NOTIFICATIONS` and
    /// `IS_COMPONENTS_V2` may be set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
    /// Fail instead of sending a duplicate when `nonce` was already used recently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_nonce: Option<bool>,
}

impl CreateMessage {
    /// A plain text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Makes this message a reply to `message_id`.
    pub fn reply_to(mut self, message_id: Snowflake) -> Self {
        self.message_reference = Some(MessageReference {
            message_id: Some(message_id),
            ..Default::default()
        });
        self
    }
}

/// Body of `PATCH /channels/{channel.id}/messages/{message.id}`.
///
/// Each field is doubly optional: the outer `None` leaves it unchanged, an
/// inner `None` clears it.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EditMessage {
    /// New contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Option<String>>,
    /// Replacement embeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Option<Vec<Embed>>>,
    /// Only `SUPPRESS_EMBEDS` can be toggled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Option<MessageFlags>>,
    /// Mentions allowed to notify.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<Option<AllowedMentions>>,
}

/// Body of `PATCH /channels/{channel.id}` for guild channels and threads.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ModifyChannel {
    /// Channel name (1-100 characters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Converts between text and announcement channels.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    /// Sorting position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Option<i32>>,
    /// Channel topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Option<String>>,
    /// Whether the channel is age-restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<Option<bool>>,
    /// Slowmode in seconds (0-21600).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<Option<u32>>,
    /// Voice bitrate in bits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<Option<u32>>,
    /// Voice user limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<Option<u32>>,
    /// Replacement permission overwrites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Option<Vec<Overwrite>>>,
    /// Parent category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<Snowflake>>,
    /// Voice region; `null` is automatic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<Option<String>>,
    /// Thread archive state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Thread auto-archive duration, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<u16>,
    /// Whether the thread is locked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

/// Numeric code in a [`RestError`].
///
/// See <https://discord.com/developers/docs/topics/opcodes-and-status-codes#json-json-error-codes>
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct JsonErrorCode(pub u32);

#[allow(missing_docs)]
impl JsonErrorCode {
    pub const GENERAL_ERROR: Self = Self(0);
    pub const UNKNOWN_ACCOUNT: Self = Self(10001);
    pub const UNKNOWN_APPLICATION: Self = Self(10002);
    pub const UNKNOWN_CHANNEL: Self = Self(10003);
    pub const UNKNOWN_GUILD: Self = Self(10004);
    pub const UNKNOWN_INTEGRATION: Self = Self(10005);
    pub const UNKNOWN_INVITE: Self = Self(10006);
    pub const UNKNOWN_MEMBER: Self = Self(10007);
    pub const UNKNOWN_MESSAGE: Self = Self(10008);
    pub const UNKNOWN_PERMISSION_OVERWRITE: Self = Self(10009);
    pub const UNKNOWN_PROVIDER: Self = Self(10010);
    pub const UNKNOWN_ROLE: Self = Self(10011);
    pub const UNKNOWN_TOKEN: Self = Self(10012);
    pub const UNKNOWN_USER: Self = Self(10013);
    pub const UNKNOWN_EMOJI: Self = Self(10014);
    pub const UNKNOWN_WEBHOOK: Self = Self(10015);
    pub const UNKNOWN_WEBHOOK_SERVICE: Self = Self(10016);
    pub const UNKNOWN_SESSION: Self = Self(10020);
    pub const UNKNOWN_BAN: Self = Self(10026);
    pub const UNKNOWN_SKU: Self = Self(10027);
    pub const UNKNOWN_STORE_LISTING: Self = Self(10028);
    pub const UNKNOWN_ENTITLEMENT: Self = Self(10029);
    pub const UNKNOWN_INTERACTION: Self = Self(10062);
    pub const UNKNOWN_APPLICATION_COMMAND: Self = Self(10063);
    pub const UNKNOWN_STICKER: Self = Self(10060);
    pub const UNKNOWN_STAGE_INSTANCE: Self = Self(10067);
    pub const UNKNOWN_GUILD_SCHEDULED_EVENT: Self = Self(10070);
    pub const UNKNOWN_THREAD: Self = Self(10071);
    pub const BOTS_CANNOT_USE_THIS_ENDPOINT: Self = Self(20001);
    pub const ONLY_BOTS_CAN_USE_THIS_ENDPOINT: Self = Self(20002);
    pub const ACTION_ON_SLOWMODE_RATE_LIMIT: Self = Self(20016);
    pub const ONLY_OWNER_CAN_PERFORM_ACTION: Self = Self(20018);
    pub const ANNOUNCEMENT_EDIT_LIMIT_EXCEEDED: Self = Self(20022);
    pub const CHANNEL_WRITE_RATE_LIMIT: Self = Self(20028);
    pub const MAXIMUM_GUILDS: Self = Self(30001);
    pub const MAXIMUM_FRIENDS: Self = Self(30002);
    pub const MAXIMUM_PINS: Self = Self(30003);
    pub const MAXIMUM_ROLES: Self = Self(30005);
    pub const MAXIMUM_WEBHOOKS: Self = Self(30007);
    pub const MAXIMUM_EMOJIS: Self = Self(30008);
    pub const MAXIMUM_REACTIONS: Self = Self(30010);
    pub const MAXIMUM_CHANNELS: Self = Self(30013);
    pub const MAXIMUM_THREAD_PARTICIPANTS: Self = Self(30033);
    pub const UNAUTHORIZED: Self = Self(40001);
    pub const VERIFY_ACCOUNT: Self = Self(40002);
    pub const REQUEST_ENTITY_TOO_LARGE: Self = Self(40005);
    pub const FEATURE_TEMPORARILY_DISABLED: Self = Self(40006);
    pub const USER_BANNED_FROM_GUILD: Self = Self(40007);
    pub const INTERACTION_ALREADY_ACKNOWLEDGED: Self = Self(40060);
    pub const MISSING_ACCESS: Self = Self(50001);
    pub const INVALID_ACCOUNT_TYPE: Self = Self(50002);
    pub const CANNOT_EXECUTE_ON_DM: Self = Self(50003);
    pub const WIDGET_DISABLED: Self = Self(50004);
    pub const CANNOT_EDIT_OTHER_USERS_MESSAGE: Self = Self(50005);
    pub const CANNOT_SEND_EMPTY_MESSAGE: Self = Self(50006);
    pub const CANNOT_SEND_MESSAGES_TO_USER: Self = Self(50007);
    pub const CANNOT_SEND_MESSAGES_IN_VOICE_CHANNEL: Self = Self(50008);
    pub const CHANNEL_VERIFICATION_TOO_HIGH: Self = Self(50009);
    pub const MISSING_PERMISSIONS: Self = Self(50013);
    pub const INVALID_AUTHENTICATION_TOKEN: Self = Self(50014);
    pub const NOTE_TOO_LONG: Self = Self(50015);
    pub const INVALID_BULK_DELETE_COUNT: Self = Self(50016);
    pub const MESSAGE_IN_WRONG_CHANNEL: Self = Self(50019);
    pub const INVALID_INVITE_CODE: Self = Self(50020);
    pub const CANNOT_EXECUTE_ON_SYSTEM_MESSAGE: Self = Self(50021);
    pub const INVALID_OAUTH2_ACCESS_TOKEN: Self = Self(50025);
    pub const INVALID_WEBHOOK_TOKEN: Self = Self(50027);
    pub const INVALID_FORM_BODY: Self = Self(50035);
    pub const MESSAGE_TOO_OLD_TO_BULK_DELETE: Self = Self(50034);
    pub const INVALID_API_VERSION: Self = Self(50041);
    pub const REACTION_BLOCKED: Self = Self(90001);
    pub const API_OVERLOADED: Self = Self(130000);
}

impl Display for JsonErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// One validation failure on a request field.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct FieldInformation {
    /// Machine-readable failure code, such as `BASE_TYPE_REQUIRED`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// Structured detail of a [`RestError`].
///
/// Discord nests errors by request path: objects keyed by field names or
/// array indices, ending in an `_errors` list for the failing field.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RestErrorData {
    /// The failures of a single field.
    Group {
        /// Failures, in the order Discord reported them.
        #[serde(rename = "_errors")]
        errors: Vec<FieldInformation>,
    },
    /// A single failure without a wrapper.
    Field(FieldInformation),
    /// A bare message.
    String(String),
    /// Errors keyed by field name or array index.
    Map(BTreeMap<String, RestErrorData>),
}

impl RestErrorData {
    /// Lists every failure with its dotted field path, such as
    /// `embeds.0.title`.
    pub fn flatten(&self) -> Vec<(String, FieldInformation)> {
        let mut out = Vec::new();
        self.flatten_into(String::new(), &mut out);
        out
    }

    fn flatten_into(&self, path: String, out: &mut Vec<(String, FieldInformation)>) {
        match self {
            RestErrorData::Group { errors } =>
                out.extend(errors.iter().cloned().map(|e| (path.clone(), e))),
            RestErrorData::Field(info) => out.push((path, info.clone())),
            RestErrorData::String(message) => out.push((
                path,
                FieldInformation {
                    code: String::new(),
                    message: message.clone(),
                },
            )),
            RestErrorData::Map(map) => {
                for (key, inner) in map {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    inner.flatten_into(child, out);
                }
            },
        }
    }
}

/// JSON body of a failed REST request.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RestError {
    /// Error code.
    pub code: JsonErrorCode,
    /// Summary message.
    pub message: String,
    /// Per-field detail, on validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<RestErrorData>,
}

impl Display for RestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for RestError {}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_form_errors_flatten_to_paths() {
        let error: RestError = serde_json::from_value(json!({
            "code": 50035,
            "errors": {
                "access_token": {
                    "_errors": [{"code": "BASE_TYPE_REQUIRED", "message": "This field is required"}]
                },
                "embeds": {
                    "0": {
                        "title": {
                            "_errors": [{"code": "BASE_TYPE_MAX_LENGTH", "message": "Too long"}]
                        }
                    }
                }
            },
            "message": "Invalid Form Body"
        }))
        .unwrap();

        assert_eq!(error.code, JsonErrorCode::INVALID_FORM_BODY);
        assert_eq!(error.to_string(), "Invalid Form Body (code 50035)");

        let flat = error.errors.map(|e| e.flatten()).unwrap_or_default();
        let paths: Vec<&str> = flat.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["access_token", "embeds.0.title"]);
        assert_eq!(flat[1].1.code, "BASE_TYPE_MAX_LENGTH");
    }

    #[test]
    fn error_data_shapes() {
        let data: RestErrorData = serde_json::from_value(json!("rate limited")).unwrap();
        assert_eq!(data, RestErrorData::String("rate limited".to_owned()));

        let data: RestErrorData =
            serde_json::from_value(json!({"code": "X", "message": "y"})).unwrap();
        assert!(matches!(data, RestErrorData::Field(_)));

        let error: RestError =
            serde_json::from_value(json!({"code": 10003, "message": "Unknown Channel"})).unwrap();
        assert_eq!(error.code, JsonErrorCode::UNKNOWN_CHANNEL);
        assert!(error.errors.is_none());
    }

    #[test]
    fn reply_body() {
        let body = CreateMessage::text("pong").reply_to(Snowflake::from("1"));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"content": "pong", "message_reference": {"message_id": "1"}})
        );
    }

    #[test]
    fn edit_distinguishes_clear_from_unchanged() {
        let edit = EditMessage {
            content: Some(None),
            ..Default::default()
        };

        assert_eq!(serde_json::to_value(&edit).unwrap(), json!({"content": null}));
        assert_eq!(serde_json::to_value(EditMessage::default()).unwrap(), json!({}));
    }
}
