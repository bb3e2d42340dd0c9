//! Wire types for the remote image API.
//!
//! DESIGN
//! ======
//! Response bodies are kept as `serde_json::Value` until they reach these
//! helpers so that shape tolerance (two list layouts, missing `result`) lives
//! in one place instead of in serde attributes scattered across structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A stored image as described by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    /// Opaque identifier; numeric ids are accepted and kept as text.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Rendition URLs, conventionally smallest first.
    pub variants: Vec<String>,
}

impl ImageRecord {
    /// URL used for the grid thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.variants.first().map(String::as_str)
    }
}

/// Where the image collection was found in a list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListShape {
    /// `{ "result": { "images": [...] } }`
    Nested,
    /// `{ "images": [...] }`
    TopLevel,
}

/// Decoded list response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageListing {
    pub images: Vec<ImageRecord>,
    /// `None` when neither known layout held an array.
    pub shape: Option<ListShape>,
    /// Entries dropped because they were not valid image records.
    pub skipped: usize,
}

/// Extract the image collection from a list response, preferring
/// `result.images` over `images`.
pub fn parse_image_listing(body: &Value) -> ImageListing {
    let located = body
        .pointer("/result/images")
        .and_then(Value::as_array)
        .map(|a| (ListShape::Nested, a))
        .or_else(|| body.get("images").and_then(Value::as_array).map(|a| (ListShape::TopLevel, a)));

    let Some((shape, entries)) = located else {
        return ImageListing::default();
    };

    let images: Vec<ImageRecord> = entries.iter().filter_map(decode_record).collect();
    ImageListing { skipped: entries.len() - images.len(), images, shape: Some(shape) }
}

/// Extract the newly stored record from an upload response's `result` field.
pub fn parse_uploaded_record(body: &Value) -> Option<ImageRecord> {
    body.get("result").and_then(decode_record)
}

fn decode_record(value: &Value) -> Option<ImageRecord> {
    ImageRecord::deserialize(value)
        .ok()
        .filter(|record| !record.variants.is_empty())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("image id must be a string or number, got {other}"))),
    }
}
