//! Concrete resource kinds served by the CRUD handlers.
//!
//! Field sets are deserialized straight from the query string, so a missing
//! required field or a non-numeric integer is rejected before the store is
//! touched.

pub mod statement;
pub mod user;

pub use statement::{Statement, StatementFields, StatementPatch};
pub use user::{User, UserFields, UserPatch};

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional query value, treating an empty value as absent.
pub(crate) fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
