//! Construction of REST API and CDN paths.
//!
//! Every function in [`rest`] and [`cdn`] is total: it substitutes its
//! arguments into a fixed path template and returns the result. Each
//! argument passes through [`escape`] first, so unusual input yields an
//! unusual (but well-formed) path rather than an error. Checking that an ID
//! is plausible is left to [`Snowflake::is_valid`].
//!
//! Paths are relative to [`RouteBases::API`] or [`RouteBases::CDN`]; use
//! [`api_url`] or [`cdn_url`] to make them absolute.
//!
//! [`Snowflake::is_valid`]: crate::Snowflake::is_valid

/// Substitutes escaped parameters into a path template.
macro_rules! route {
    ($fmt:literal $(, $param:expr)* $(,)?) => {
        format!($fmt $(, $crate::routes::escape(AsRef::<str>::as_ref($param)))*)
    };
}

pub mod cdn;
pub mod query;
pub mod rest;

pub use self::{
    cdn::ImageFormat,
    query::{with_query, Query},
};

use crate::constants::RouteBases;
use fancy_regex::Regex;
use lazy_static::lazy_static;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use tracing::trace;

/// Characters left untouched when a parameter does need encoding.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

lazy_static! {
    static ref URL_SAFE: Regex = Regex::new(r"^[A-Za-z0-9_\-.~@]+$").unwrap();
}

/// Prepares one route parameter for substitution into a path.
///
/// Parameters made only of unreserved characters (plus `@`, for `@me`-style
/// placeholders) are returned as-is. Anything else is percent-encoded as a
/// single path segment, so `/` in a parameter can never introduce a new
/// segment.
pub fn escape(param: &str) -> Cow<'_, str> {
    if URL_SAFE.is_match(param).unwrap_or(false) {
        Cow::Borrowed(param)
    } else {
        trace!("Percent-encoding route parameter {:?}.", param);
        Cow::Owned(utf8_percent_encode(param, PATH_SEGMENT).to_string())
    }
}

/// Makes a REST path absolute.
pub fn api_url(route: &str) -> String {
    format!("{}{}", RouteBases::API, route)
}

/// Makes a CDN path absolute.
pub fn cdn_url(route: &str) -> String {
    format!("{}{}", RouteBases::CDN, route)
}
