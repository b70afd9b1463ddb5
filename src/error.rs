//! Conversion and parsing error handling.

use serde_json::Error as JsonError;
use std::{
    error::Error as StdError,
    fmt,
    num::ParseIntError,
};

/// Errors raised when interpreting values received from Discord.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A decimal-string field (snowflake, permission bitfield) was not a
    /// valid base-10 integer in 64-bit range.
    Parse {
        /// The offending input.
        input: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },
    /// No known mention pattern matched the given text.
    MentionNotFound,
    /// A gateway or REST payload could not be (de)serialized.
    Json(JsonError),
}

impl Error {
    pub(crate) fn parse(input: &str, source: ParseIntError) -> Self {
        Error::Parse {
            input: input.to_owned(),
            source,
        }
    }

    /// Indicates whether this failure came from a malformed numeric string.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { input, source } =>
                write!(f, "failed to parse {:?} as a 64-bit integer: {}", input, source),
            Error::MentionNotFound => write!(f, "no user, channel or role mention found"),
            Error::Json(e) => write!(f, "malformed payload: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Parse { source, .. } => Some(source),
            Error::MentionNotFound => None,
            Error::Json(e) => Some(e),
        }
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Self {
        Error::Json(e)
    }
}

/// Convenience type for fallible conversions in this crate.
pub type Result<T> = std::result::Result<T, Error>;
