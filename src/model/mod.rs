//! Discord v10 resources as they appear on the wire.
//!
//! Field names and optionality follow Discord's API reference. Fields Discord
//! may omit are `Option`s which are skipped again on serialization; lists
//! Discord may omit default to empty.

pub mod channel;
pub mod emoji;
pub mod guild;
pub mod message;
#[cfg(feature = "rest")]
pub mod rest;
pub mod user;

pub use self::{channel::*, emoji::*, guild::*, message::*, user::*};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An ISO8601 timestamp, kept in the form Discord sent it.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub String);

impl Timestamp {
    /// Returns the raw ISO8601 string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Reads a field whose presence, even as `null`, means `true`.
///
/// Discord uses this encoding for role tags and a few guild flags.
pub(crate) fn deserialize_present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<bool, D::Error> {
    Option::<()>::deserialize(deserializer).map(|_| true)
}

/// Writes a presence-means-`true` field as `null`; pair with
/// `skip_serializing_if = "is_false"`.
pub(crate) fn serialize_present<S: Serializer>(
    _present: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_unit()
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
