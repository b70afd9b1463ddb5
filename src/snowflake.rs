//! Discord's 64-bit IDs, carried in their decimal wire form.
//!
//! A [`Snowflake`] is never validated on construction: Discord always sends IDs
//! as JSON strings, and this type keeps that string as-is until a numeric view
//! is requested. Use [`Snowflake::is_valid`] where a sanity check is wanted.
//!
//! See <https://discord.com/developers/docs/reference#snowflakes>

use crate::{
    constants::{
        DISCORD_EPOCH_MS,
        SNOWFLAKE_MAX_LEN,
        SNOWFLAKE_MIN_LEN,
        SNOWFLAKE_TIMESTAMP_SHIFT,
    },
    error::{Error, Result},
};
use serde::{
    de::{Error as DeError, Visitor},
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use std::{
    cmp::Ordering,
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// A Discord ID in decimal string form.
///
/// IDs order numerically: shorter decimal strings sort first, and strings of
/// equal length compare byte-wise. This matches `u64` order for any ID that
/// [`is_valid`](Self::is_valid).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Snowflake(String);

impl Snowflake {
    /// Wraps a raw string without checking it.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Formats an integer ID in decimal.
    pub fn from_i64(id: i64) -> Self {
        Self(id.to_string())
    }

    /// Formats an unsigned integer ID in decimal.
    pub fn from_u64(id: u64) -> Self {
        Self(id.to_string())
    }

    /// Naively converts a Unix timestamp (ms) into a snowflake boundary.
    ///
    /// This is not a real ID, but can be used as a `before`/`after` cursor
    /// when paginating by time. Timestamps before the Discord epoch map to `0`.
    pub fn from_timestamp_ms(timestamp_ms: u64) -> Self {
        Self::from_u64(timestamp_ms.saturating_sub(DISCORD_EPOCH_MS) << SNOWFLAKE_TIMESTAMP_SHIFT)
    }

    /// Returns the raw decimal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID, returning its raw decimal string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses this ID as a signed 64-bit integer.
    pub fn to_i64(&self) -> Result<i64> {
        self.0.parse().map_err(|e| Error::parse(&self.0, e))
    }

    /// Parses this ID as an unsigned 64-bit integer.
    pub fn to_u64(&self) -> Result<u64> {
        self.0.parse().map_err(|e| Error::parse(&self.0, e))
    }

    /// Milliseconds since the Unix epoch at which this ID was created.
    pub fn timestamp_ms(&self) -> Result<u64> {
        Ok((self.to_u64()? >> SNOWFLAKE_TIMESTAMP_SHIFT) + DISCORD_EPOCH_MS)
    }

    /// Wall-clock creation time of this ID.
    pub fn time(&self) -> Result<SystemTime> {
        let ms = self.timestamp_ms()?;
        let since_unix =
            Duration::new(ms / 1_000, ((ms % 1_000) as u32) * 1_000_000);

        Ok(UNIX_EPOCH + since_unix)
    }

    /// Internal worker which generated this ID.
    pub fn worker_id(&self) -> Result<u64> {
        Ok((self.to_u64()? & 0x3E_0000) >> 17)
    }

    /// Internal process which generated this ID.
    pub fn process_id(&self) -> Result<u64> {
        Ok((self.to_u64()? & 0x1_F000) >> 12)
    }

    /// Per-process counter value at the time this ID was generated.
    pub fn increment(&self) -> Result<u64> {
        Ok(self.to_u64()? & 0xFFF)
    }

    /// Sanity-checks the decimal form of this ID.
    ///
    /// Returns `false` if the length lies outside `[17, 20]`, the string holds
    /// anything but ASCII digits, or it does not fit a `u64`. Never errors.
    pub fn is_valid(&self) -> bool {
        (SNOWFLAKE_MIN_LEN..=SNOWFLAKE_MAX_LEN).contains(&self.0.len())
            && self.0.bytes().all(|b| b.is_ascii_digit())
            && self.0.parse::<u64>().is_ok()
    }
}

impl Ord for Snowflake {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for Snowflake {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Snowflake {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Snowflake {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Snowflake {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl From<String> for Snowflake {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Snowflake {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self::from_i64(id)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self::from_u64(id)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor("a snowflake")).map(Self)
    }
}

/// Accepts either a JSON string or a JSON integer, keeping the decimal form.
///
/// Shared by every decimal-string wire type.
pub(crate) struct DecimalVisitor(pub(crate) &'static str);

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = String;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} as a decimal string or integer", self.0)
    }

    fn visit_str<E: DeError>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: DeError>(self, v: String) -> std::result::Result<Self::Value, E> {
        Ok(v)
    }

    fn visit_u64<E: DeError>(self, v: u64) -> std::result::Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: DeError>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(v.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::test_data::*;

    #[test]
    fn documented_snowflake_has_expected_timestamp() {
        let id = Snowflake::from(SNOWFLAKE);

        assert_eq!(id.timestamp_ms().unwrap(), SNOWFLAKE_MS);
        assert_eq!(
            id.time().unwrap(),
            UNIX_EPOCH + Duration::from_millis(SNOWFLAKE_MS)
        );
        assert_eq!(id.worker_id().unwrap(), 1);
        assert_eq!(id.process_id().unwrap(), 0);
        assert_eq!(id.increment().unwrap(), 7);
    }

    #[test]
    fn integer_round_trip() {
        for i in [0, 1, 42, 175_928_847_299_117_063, i64::MAX, -1, i64::MIN] {
            assert_eq!(Snowflake::from_i64(i).to_i64().unwrap(), i);
        }
    }

    #[test]
    fn shifted_offset_recovers_timestamp() {
        let offset_ms = 123_456_789_u64;
        let id = Snowflake::from_i64((offset_ms << 22) as i64);

        assert_eq!(id.timestamp_ms().unwrap(), DISCORD_EPOCH_MS + offset_ms);
        assert_eq!(
            id.time().unwrap(),
            UNIX_EPOCH + Duration::from_millis(DISCORD_EPOCH_MS + offset_ms)
        );
    }

    #[test]
    fn timestamp_boundary_inverts_extraction() {
        let id = Snowflake::from_timestamp_ms(SNOWFLAKE_MS);
        assert_eq!(id.timestamp_ms().unwrap(), SNOWFLAKE_MS);

        assert_eq!(Snowflake::from_timestamp_ms(0).as_str(), "0");
    }

    #[test]
    fn invalid_strings_fail_lazily() {
        let id = Snowflake::from_string("not an id");

        assert!(id.to_i64().unwrap_err().is_parse());
        assert!(id.time().is_err());
        assert!(!id.is_valid());
    }

    #[test]
    fn validity_bounds() {
        assert!(Snowflake::from("12345678901234567").is_valid());
        assert!(Snowflake::from(SNOWFLAKE).is_valid());
        assert!(Snowflake::from(u64::MAX).is_valid());

        assert!(!Snowflake::from("1234567890123456").is_valid());
        assert!(!Snowflake::from("18446744073709551616").is_valid());
        assert!(!Snowflake::from("123456789012345678901").is_valid());
        assert!(!Snowflake::from("-12345678901234567").is_valid());
        assert!(!Snowflake::from("1234567890123456a").is_valid());
        assert!(!Snowflake::from("+1234567890123456").is_valid());
        assert!(!Snowflake::from("١٢٣٤٥٦٧٨٩٠١٢٣٤٥٦٧٨").is_valid());
        assert!(!Snowflake::from("").is_valid());
    }

    #[test]
    fn ordering_is_numeric() {
        let short = Snowflake::from("99999999999999999");
        let long = Snowflake::from("100000000000000000");
        assert!(short < long);
        assert_eq!(short.cmp(&short.clone()), Ordering::Equal);

        let mut ids = vec![
            Snowflake::from(u64::MAX),
            long.clone(),
            Snowflake::from(SNOWFLAKE),
            short.clone(),
        ];
        ids.sort();

        let numeric: Vec<u64> = ids.iter().map(|id| id.to_u64().unwrap()).collect();
        let mut expected = numeric.clone();
        expected.sort_unstable();
        assert_eq!(numeric, expected);
        assert_eq!(ids[0], short);
    }

    #[test]
    fn serde_uses_string_form() {
        let id = Snowflake::from(SNOWFLAKE);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", SNOWFLAKE));

        let from_str: Snowflake = serde_json::from_str(&json).unwrap();
        let from_int: Snowflake = serde_json::from_str(SNOWFLAKE).unwrap();
        assert_eq!(from_str, id);
        assert_eq!(from_int, id);
    }
}
