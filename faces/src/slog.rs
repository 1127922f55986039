//! Adapters for logging revealed faces through `slog`.
//!
//! This module connects [`Revealable`] with `slog` by providing a `slog::Value`
//! that serializes the revealed form of a value as structured JSON via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is taken after revealing a face, never
//!   from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or choose which face a log line should carry.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{face::Face, reveal::Revealable};

/// Placeholder emitted when the revealed value cannot be turned into JSON.
pub const SERIALIZATION_FAILED: &str = "Failed to serialize revealed value";

/// A `slog::Value` that emits an owned revealed payload as structured JSON.
///
/// This type does not return serialization errors to `slog`; if converting the
/// revealed output into a JSON value fails, it falls back to a JSON string value.
pub struct RevealedJson {
    value: JsonValue,
}

impl RevealedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    fn from_revealed<T: Serialize>(revealed: &T) -> Self {
        let json_value = serde_json::to_value(revealed)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZATION_FAILED.to_string()));
        Self::new(json_value)
    }

    /// The JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RevealedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs one of their faces as JSON.
///
/// ## Example
/// ```ignore
/// use faces::slog::IntoRevealedJson;
///
/// info!(logger, "signup"; "user" => user.into_revealed_json(["public"]));
/// ```
pub trait IntoRevealedJson: Revealable + Serialize + Sized {
    /// Reveals the face made of `tags` on `self` and captures the result as JSON.
    ///
    /// As with [`crate::reveal`], no tags means the value is logged unchanged.
    fn into_revealed_json<I, S>(self, tags: I) -> RevealedJson
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RevealedJson::from_revealed(&self.revealed(tags))
    }

    /// Like [`IntoRevealedJson::into_revealed_json`], but reveals an existing [`Face`].
    fn into_revealed_json_face(self, face: &Face) -> RevealedJson {
        let mut revealed = self;
        revealed.reveal_face(face);
        RevealedJson::from_revealed(&revealed)
    }

    /// Like [`IntoRevealedJson::into_revealed_json`], but borrows `self` and clones it first.
    fn to_revealed_json<I, S>(&self, tags: I) -> RevealedJson
    where
        Self: Clone,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clone().into_revealed_json(tags)
    }

    /// Like [`IntoRevealedJson::to_revealed_json`], but reveals an existing [`Face`].
    fn to_revealed_json_face(&self, face: &Face) -> RevealedJson
    where
        Self: Clone,
    {
        self.clone().into_revealed_json_face(face)
    }
}

impl<T> IntoRevealedJson for T where T: Revealable + Serialize {}
