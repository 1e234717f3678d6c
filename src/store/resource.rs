//! The record abstraction the store and CRUD handlers are generic over.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// A flat record type that can live in a [`ResourceStore`](super::ResourceStore).
pub trait Resource: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Full field set, required on create and replace.
    type Fields: DeserializeOwned + Send + 'static;

    /// Optional field set used by partial updates.
    type Patch: DeserializeOwned + Send + 'static;

    /// Plural path segment, e.g. `users`.
    const NAME: &'static str;

    /// Singular label used in messages, e.g. `User`.
    const LABEL: &'static str;

    fn id(&self) -> u64;

    /// Build a new record from its id and fields.
    fn from_fields(id: u64, fields: Self::Fields) -> Self;

    /// Apply the supplied fields of `patch`, leaving the rest untouched.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Fixed sample records present at process start.
    fn seed() -> Vec<Self>;
}
