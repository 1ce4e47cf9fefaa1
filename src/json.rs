//! serde integration and JSON text helpers
//!
//! The core works on `serde_json::Value` trees. The impls here let any serde
//! writer emit the compact form, and the helpers cover the common case of
//! going straight to and from JSON text.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::{Document, Measurement, Result};

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = JsonValue::deserialize(deserializer)?;
        Measurement::from_json(&data).map_err(D::Error::custom)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = JsonValue::deserialize(deserializer)?;
        Document::from_json(&data).map_err(D::Error::custom)
    }
}

impl Document {
    /// Parse a document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: JsonValue = serde_json::from_str(json)?;
        Self::from_json(&data)
    }

    /// Parse a document from JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let data: JsonValue = serde_json::from_slice(bytes)?;
        Self::from_json(&data)
    }

    /// Serialize the compact form to JSON text
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Serialize the compact form to JSON bytes
    pub fn to_json_vec(&self) -> Vec<u8> {
        self.to_json_string().into_bytes()
    }

    /// Serialize the normalized form to JSON text
    pub fn to_normalized_json_string(&self) -> String {
        self.to_normalized_json().to_string()
    }
}
