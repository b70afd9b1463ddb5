#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
//! Typed building blocks for the Discord v10 API, without any client attached.
//!
//! The library offers:
//!  * [`Snowflake`] and [`Permissions`], Discord's string-encoded integers, with
//!  checked numeric views and the timestamp and bit-field decoding snowflakes carry.
//!  * Mention and markdown [`formatting`]: patterns matching Discord's message
//!  markup, and helpers rendering mentions, emoji and timestamps back into it.
//!  * Serde-mapped REST resources in [`model`], with API v10 field names and optionality.
//!  * REST and CDN [`routes`] with escaped path segments, and typed query strings,
//!  via the `"rest"` feature.
//!  * Main gateway frames, opcodes, intents and dispatch events in [`gateway`], via
//!  the `"gateway"` feature.
//!  * Voice gateway payloads and session tracking in [`voice`], via the `"voice"` feature.
//!
//! All three features are enabled by default.
//!
//! ## Wire numerics
//! Discord sends IDs and permission sets as decimal strings so that they survive
//! JavaScript's number type. This crate keeps them as strings: construction never
//! fails, and malformed values surface as [`Error::Parse`] only when a numeric view
//! is requested. Both types still accept integers when deserializing.
//!
//! ```
//! use discord_api_types::Snowflake;
//!
//! let id = Snowflake::from("175928847299117063");
//! assert_eq!(id.timestamp_ms().unwrap(), 1_462_015_105_796);
//! assert_eq!(serde_json::to_string(&id).unwrap(), "\"175928847299117063\"");
//! ```

#![warn(clippy::pedantic)]
#![allow(
    // Allowed as they are too pedantic
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::too_many_lines,
    clippy::cast_lossless,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::struct_excessive_bools,
    clippy::missing_errors_doc,
)]

#[macro_use]
mod macros;

pub mod constants;
pub mod error;
pub mod formatting;
#[cfg(feature = "gateway")]
pub mod gateway;
pub mod model;
pub mod permissions;
#[cfg(feature = "rest")]
pub mod routes;
pub mod snowflake;
#[cfg(feature = "voice")]
pub mod voice;

pub use crate::{
    error::{Error, Result},
    permissions::{PermissionFlags, Permissions},
    snowflake::Snowflake,
};
