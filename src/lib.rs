//! # senml-document - SenML documents for Rust
//!
//! Parsing and serialization of [RFC 8428](https://tools.ietf.org/html/rfc8428)
//! Sensor Measurement Lists (SenML) in their JSON form.
//!
//! A SenML document is an array of records. The first record may carry base
//! fields (`bn`, `bt`, `bu`, `bv`, `biso8601`) that act as defaults for every
//! record in the array: names are prefixed, times and numeric values offset,
//! units and ISO timestamps filled in.
//!
//! - [`Measurement`] is one record with optional fields and a [`Value`]
//! - [`Document`] is the ordered list of measurements plus their base
//! - [`Document::to_normalized_json`] resolves every record against the base,
//!   producing self-contained readings
//!
//! The library works on `serde_json::Value` trees. Text helpers such as
//! [`Document::from_json_str`] are thin wrappers over `serde_json`.
//!
//! ## Quick Start
//!
//! ```rust
//! use senml_document::{Document, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let doc = Document::from_json(&json!([
//!         {"bn": "urn:dev:ow:10e2073a01080063/", "bt": 1.320067464e9, "bu": "%RH",
//!          "n": "humidity", "v": 20.0},
//!         {"n": "humidity", "v": 24.0, "t": 60.0}
//!     ]))?;
//!
//!     let flat = doc.to_normalized_json();
//!     assert_eq!(flat[1]["n"], "urn:dev:ow:10e2073a01080063/humidity");
//!     assert_eq!(flat[1]["u"], "%RH");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod json;
pub mod measurement;
pub mod value;

// Re-export main types
pub use builder::DocumentBuilder;
pub use config::Config;
pub use document::{DefaultFactory, Document, MeasurementFactory};
pub use error::{MalformedInputError, Result};
pub use measurement::Measurement;
pub use value::Value;

/// SenML JSON media type identifiers
pub mod content_format {
    /// CoAP Content-Format for application/senml+json
    pub const SENML_JSON: u16 = 110;
    /// Media type for SenML JSON
    pub const SENML_JSON_CONTENT_TYPE: &str = "application/senml+json";
}
