//! Error types for SenML parsing

use thiserror::Error;

/// Result type alias for SenML operations
pub type Result<T> = std::result::Result<T, MalformedInputError>;

/// Raised when input cannot be read as a SenML document or record
///
/// Every variant is a flavour of malformed input. Serialization of in-memory
/// values never fails, so there is no output-side error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedInputError {
    /// A document must be a JSON array
    #[error("Malformed SenML input: expected an array of records, found {found}")]
    NotAnArray { found: String },

    /// A record must be a JSON object
    #[error("Malformed SenML input: expected a record object, found {found}")]
    NotAnObject { found: String },

    /// A document needs at least one record to carry the base fields
    #[error("Malformed SenML input: document contains no records")]
    EmptyDocument,

    /// A field holds a value of the wrong JSON type
    #[error("Malformed SenML input: field '{field}' must be {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: String,
        found: String,
    },

    /// A record inside a document failed to parse
    #[error("Malformed SenML input: record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<MalformedInputError>,
    },

    /// JSON text could not be decoded
    #[error("Malformed SenML input: invalid JSON: {message}")]
    Json { message: String },
}

impl MalformedInputError {
    /// Create an invalid field error
    pub fn invalid_field<S: Into<String>>(field: S, expected: S, found: &serde_json::Value) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected: expected.into(),
            found: json_type_name(found).to_string(),
        }
    }

    /// Wrap a record-level error with the record's position in its document
    pub fn at_record(self, index: usize) -> Self {
        Self::InvalidRecord {
            index,
            source: Box::new(self),
        }
    }

    /// Create a JSON decoding error
    pub fn json<S: Into<String>>(message: S) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    pub(crate) fn not_an_array(found: &serde_json::Value) -> Self {
        Self::NotAnArray {
            found: json_type_name(found).to_string(),
        }
    }

    pub(crate) fn not_an_object(found: &serde_json::Value) -> Self {
        Self::NotAnObject {
            found: json_type_name(found).to_string(),
        }
    }
}

impl From<serde_json::Error> for MalformedInputError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

/// Human readable name of a JSON value's type, used in error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
