//! Error types for dependency construction
//!
//! A single error kind covers every way construction input can violate the
//! entity contract: a blank dependency name, a requirement key outside the
//! recognized schema, a missing required key, a record that is not an object
//! at all, or a recognized key carrying a value of the wrong shape.
//! Construction either fully succeeds or fails with the first violation
//! found, so no partially validated entity ever escapes.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::RequirementKey;

/// Error raised when construction input does not match the entity contract
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// An empty string was supplied as the dependency name
    #[error("blank strings must not be provided as names")]
    BlankName,

    /// A key outside the recognized schema was supplied
    #[error(
        "unknown requirement key '{key}': each requirement must have the following required \
         keys: {required}. It may also have the following optional keys: {optional}. \
         Offending record: {record}",
        required = RequirementKey::REQUIRED_LIST,
        optional = RequirementKey::OPTIONAL_LIST
    )]
    UnknownKey { key: String, record: String },

    /// A required key was absent from the record
    #[error(
        "missing requirement key '{key}': each requirement must have the following required \
         keys: {required}. It may also have the following optional keys: {optional}. \
         Offending record: {record}",
        required = RequirementKey::REQUIRED_LIST,
        optional = RequirementKey::OPTIONAL_LIST
    )]
    MissingKey {
        key: RequirementKey,
        record: String,
    },

    /// The requirement element was not a key/value object
    #[error(
        "each requirement must be an object with the required keys: {required}; got: {found}",
        required = RequirementKey::REQUIRED_LIST
    )]
    NotAnObject { found: String },

    /// A recognized key carried a value of the wrong shape
    #[error("invalid value for requirement key '{key}': expected {expected}, got: {found}")]
    InvalidValue {
        key: RequirementKey,
        expected: &'static str,
        found: String,
    },
}

impl SchemaValidationError {
    /// Creates a new UnknownKey error
    pub fn unknown_key(key: impl Into<String>, record: &Map<String, Value>) -> Self {
        SchemaValidationError::UnknownKey {
            key: key.into(),
            record: render_record(record),
        }
    }

    /// Creates a new MissingKey error
    pub fn missing_key(key: RequirementKey, record: &Map<String, Value>) -> Self {
        SchemaValidationError::MissingKey {
            key,
            record: render_record(record),
        }
    }

    /// Creates a new NotAnObject error
    pub fn not_an_object(found: &Value) -> Self {
        SchemaValidationError::NotAnObject {
            found: found.to_string(),
        }
    }

    /// Creates a new InvalidValue error
    pub fn invalid_value(key: RequirementKey, expected: &'static str, found: &Value) -> Self {
        SchemaValidationError::InvalidValue {
            key,
            expected,
            found: found.to_string(),
        }
    }
}

/// Renders the offending record into error messages as compact JSON
fn render_record(record: &Map<String, Value>) -> String {
    Value::Object(record.clone()).to_string()
}
