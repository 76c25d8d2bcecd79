//! Requirement records and their key schema
//!
//! A requirement describes one reference to a dependency inside a manifest
//! file. Callers hand requirements over as untyped key/value records; every
//! record is checked against the recognized key schema and normalized into
//! the typed form before it is stored, so downstream code never sees a
//! requirement with surprise keys or missing fields.

use super::Metadata;
use crate::error::SchemaValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Canonical form of a requirement field name
///
/// Caller-supplied records are keyed by strings; each key is mapped onto
/// this enum before the key set is checked, so stored requirements always
/// use the canonical form regardless of how the caller spelled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKey {
    /// Manifest file the requirement was declared in
    File,
    /// Constraint expression as written in the manifest
    Requirement,
    /// Group names the requirement belongs to in its file
    Groups,
    /// Ecosystem-specific source descriptor
    Source,
    /// Optional per-requirement annotation
    Metadata,
}

impl RequirementKey {
    /// Keys every requirement record must carry
    pub const REQUIRED: [RequirementKey; 4] = [
        RequirementKey::File,
        RequirementKey::Requirement,
        RequirementKey::Groups,
        RequirementKey::Source,
    ];

    /// The required keys as quoted in schema error messages
    pub const REQUIRED_LIST: &'static str = "file, requirement, groups, source";

    /// The optional keys as quoted in schema error messages
    pub const OPTIONAL_LIST: &'static str = "metadata";

    /// Returns the canonical spelling of this key
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementKey::File => "file",
            RequirementKey::Requirement => "requirement",
            RequirementKey::Groups => "groups",
            RequirementKey::Source => "source",
            RequirementKey::Metadata => "metadata",
        }
    }

    /// Maps a caller-supplied key onto its canonical form
    pub fn parse(key: &str) -> Option<RequirementKey> {
        match key {
            "file" => Some(RequirementKey::File),
            "requirement" => Some(RequirementKey::Requirement),
            "groups" => Some(RequirementKey::Groups),
            "source" => Some(RequirementKey::Source),
            "metadata" => Some(RequirementKey::Metadata),
            _ => None,
        }
    }

    /// Returns all recognized keys, required first
    pub fn all() -> &'static [RequirementKey] {
        &[
            RequirementKey::File,
            RequirementKey::Requirement,
            RequirementKey::Groups,
            RequirementKey::Source,
            RequirementKey::Metadata,
        ]
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single reference to a dependency inside a manifest file
///
/// Deserialization goes through `from_record`, so a requirement parsed from
/// JSON has passed the same key schema validation as one built from records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Requirement {
    /// Manifest file the requirement was declared in
    pub file: String,
    /// Constraint expression as written in the manifest, kept verbatim
    pub requirement: String,
    /// Group names the requirement belongs to, in declaration order
    pub groups: Vec<String>,
    /// Ecosystem-specific source descriptor, passed through unexamined
    pub source: Option<Value>,
    /// Optional per-requirement annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Requirement {
    /// Creates a requirement with no source and no metadata
    pub fn new(
        file: impl Into<String>,
        requirement: impl Into<String>,
        groups: Vec<String>,
    ) -> Self {
        Self {
            file: file.into(),
            requirement: requirement.into(),
            groups,
            source: None,
            metadata: None,
        }
    }

    /// Sets the source descriptor (builder pattern)
    pub fn with_source(mut self, source: Value) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the per-requirement metadata (builder pattern)
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validates an untyped record and normalizes it into canonical form
    ///
    /// The record must be an object whose keys, once normalized, cover
    /// exactly the required set plus at most the optional `metadata` key.
    /// Values are moved in unchanged; a `null` source becomes an absent one.
    pub fn from_record(record: Value) -> Result<Self, SchemaValidationError> {
        let mut map = match record {
            Value::Object(map) => map,
            other => return Err(SchemaValidationError::not_an_object(&other)),
        };

        for key in map.keys() {
            if RequirementKey::parse(key).is_none() {
                return Err(SchemaValidationError::unknown_key(key, &map));
            }
        }
        for key in RequirementKey::REQUIRED {
            if !map.contains_key(key.as_str()) {
                return Err(SchemaValidationError::missing_key(key, &map));
            }
        }

        let file = into_string(RequirementKey::File, take(&mut map, RequirementKey::File)?)?;
        let requirement = into_string(
            RequirementKey::Requirement,
            take(&mut map, RequirementKey::Requirement)?,
        )?;
        let groups = into_groups(take(&mut map, RequirementKey::Groups)?)?;
        let source = match take(&mut map, RequirementKey::Source)? {
            Value::Null => None,
            value => Some(value),
        };
        let metadata = match map.remove(RequirementKey::Metadata.as_str()) {
            Some(value) => Some(into_object(RequirementKey::Metadata, value)?),
            None => None,
        };

        Ok(Self {
            file,
            requirement,
            groups,
            source,
            metadata,
        })
    }

    /// Returns this requirement as a record with canonical keys
    ///
    /// An absent source serializes as `null`; the `metadata` key is omitted
    /// entirely when there is none.
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert(
            RequirementKey::File.as_str().to_string(),
            Value::String(self.file.clone()),
        );
        record.insert(
            RequirementKey::Requirement.as_str().to_string(),
            Value::String(self.requirement.clone()),
        );
        record.insert(
            RequirementKey::Groups.as_str().to_string(),
            Value::Array(self.groups.iter().cloned().map(Value::String).collect()),
        );
        record.insert(
            RequirementKey::Source.as_str().to_string(),
            self.source.clone().unwrap_or(Value::Null),
        );
        if let Some(metadata) = &self.metadata {
            record.insert(
                RequirementKey::Metadata.as_str().to_string(),
                Value::Object(metadata.clone()),
            );
        }
        Value::Object(record)
    }
}

impl TryFrom<Value> for Requirement {
    type Error = SchemaValidationError;

    fn try_from(record: Value) -> Result<Self, Self::Error> {
        Requirement::from_record(record)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.requirement, self.file)
    }
}

/// Removes a required key from the record
fn take(map: &mut Map<String, Value>, key: RequirementKey) -> Result<Value, SchemaValidationError> {
    match map.remove(key.as_str()) {
        Some(value) => Ok(value),
        None => Err(SchemaValidationError::missing_key(key, map)),
    }
}

fn into_string(key: RequirementKey, value: Value) -> Result<String, SchemaValidationError> {
    match value {
        Value::String(value) => Ok(value),
        other => Err(SchemaValidationError::invalid_value(key, "a string", &other)),
    }
}

fn into_groups(value: Value) -> Result<Vec<String>, SchemaValidationError> {
    let values = match value {
        Value::Array(values) => values,
        other => {
            return Err(SchemaValidationError::invalid_value(
                RequirementKey::Groups,
                "an array of strings",
                &other,
            ))
        }
    };
    values
        .into_iter()
        .map(|value| into_string(RequirementKey::Groups, value))
        .collect()
}

fn into_object(key: RequirementKey, value: Value) -> Result<Metadata, SchemaValidationError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SchemaValidationError::invalid_value(key, "an object", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Value {
        json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": ["runtime"],
            "source": null
        })
    }

    fn sample_requirement() -> Requirement {
        Requirement::new("Gemfile", ">= 1.0", vec!["runtime".to_string()])
    }

    #[test]
    fn test_key_as_str_round_trip() {
        for key in RequirementKey::all() {
            assert_eq!(RequirementKey::parse(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_key_parse_rejects_unknown() {
        assert_eq!(RequirementKey::parse("version"), None);
        assert_eq!(RequirementKey::parse("Files"), None);
        assert_eq!(RequirementKey::parse(""), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(format!("{}", RequirementKey::File), "file");
        assert_eq!(format!("{}", RequirementKey::Metadata), "metadata");
    }

    #[test]
    fn test_required_list_matches_required_keys() {
        let joined = RequirementKey::REQUIRED
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(joined, RequirementKey::REQUIRED_LIST);
        assert_eq!(RequirementKey::Metadata.as_str(), RequirementKey::OPTIONAL_LIST);
    }

    #[test]
    fn test_key_serde_uses_lowercase() {
        let json = serde_json::to_string(&RequirementKey::File).unwrap();
        assert_eq!(json, "\"file\"");
    }

    #[test]
    fn test_new_has_no_source_or_metadata() {
        let requirement = sample_requirement();
        assert_eq!(requirement.file, "Gemfile");
        assert_eq!(requirement.requirement, ">= 1.0");
        assert_eq!(requirement.groups, vec!["runtime".to_string()]);
        assert_eq!(requirement.source, None);
        assert_eq!(requirement.metadata, None);
    }

    #[test]
    fn test_with_source() {
        let requirement = sample_requirement().with_source(json!({"type": "git"}));
        assert_eq!(requirement.source, Some(json!({"type": "git"})));
    }

    #[test]
    fn test_with_metadata() {
        let mut metadata = Metadata::new();
        metadata.insert("bundled".to_string(), json!(true));
        let requirement = sample_requirement().with_metadata(metadata.clone());
        assert_eq!(requirement.metadata, Some(metadata));
    }

    #[test]
    fn test_from_record_normalizes_string_keys() {
        let requirement = Requirement::from_record(sample_record()).unwrap();
        assert_eq!(requirement, sample_requirement());
    }

    #[test]
    fn test_from_record_preserves_group_order() {
        let record = json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": ["test", "development", "ci"],
            "source": null
        });
        let requirement = Requirement::from_record(record).unwrap();
        assert_eq!(requirement.groups, vec!["test", "development", "ci"]);
    }

    #[test]
    fn test_from_record_null_source_is_absent() {
        let requirement = Requirement::from_record(sample_record()).unwrap();
        assert_eq!(requirement.source, None);
    }

    #[test]
    fn test_from_record_keeps_source_value() {
        let record = json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": [],
            "source": {"type": "git", "url": "https://example.com/repo"}
        });
        let requirement = Requirement::from_record(record).unwrap();
        assert_eq!(
            requirement.source,
            Some(json!({"type": "git", "url": "https://example.com/repo"}))
        );
    }

    #[test]
    fn test_from_record_accepts_optional_metadata() {
        let record = json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": [],
            "source": null,
            "metadata": {"bundled": true}
        });
        let requirement = Requirement::from_record(record).unwrap();
        let metadata = requirement.metadata.unwrap();
        assert_eq!(metadata.get("bundled"), Some(&json!(true)));
    }

    #[test]
    fn test_from_record_rejects_unknown_key() {
        let record = json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": [],
            "source": null,
            "version": "1.2.3"
        });
        let err = Requirement::from_record(record).unwrap_err();
        assert!(matches!(err, SchemaValidationError::UnknownKey { .. }));
        assert!(format!("{}", err).contains("required keys"));
    }

    #[test]
    fn test_from_record_rejects_each_missing_key() {
        for missing in RequirementKey::REQUIRED {
            let mut map = match sample_record() {
                Value::Object(map) => map,
                _ => unreachable!(),
            };
            map.remove(missing.as_str());
            let err = Requirement::from_record(Value::Object(map)).unwrap_err();
            assert!(matches!(err, SchemaValidationError::MissingKey { key, .. } if key == missing));
        }
    }

    #[test]
    fn test_from_record_rejects_non_object() {
        let err = Requirement::from_record(json!(">= 1.0")).unwrap_err();
        assert!(matches!(err, SchemaValidationError::NotAnObject { .. }));
    }

    #[test]
    fn test_from_record_rejects_wrong_value_shapes() {
        let not_a_string = json!({
            "file": 42,
            "requirement": ">= 1.0",
            "groups": [],
            "source": null
        });
        let err = Requirement::from_record(not_a_string).unwrap_err();
        assert!(matches!(
            err,
            SchemaValidationError::InvalidValue { key: RequirementKey::File, .. }
        ));

        let not_an_array = json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": "runtime",
            "source": null
        });
        let err = Requirement::from_record(not_an_array).unwrap_err();
        assert!(matches!(
            err,
            SchemaValidationError::InvalidValue { key: RequirementKey::Groups, .. }
        ));

        let not_a_group_name = json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": [1, 2],
            "source": null
        });
        let err = Requirement::from_record(not_a_group_name).unwrap_err();
        assert!(matches!(
            err,
            SchemaValidationError::InvalidValue { key: RequirementKey::Groups, .. }
        ));

        let not_an_object = json!({
            "file": "Gemfile",
            "requirement": ">= 1.0",
            "groups": [],
            "source": null,
            "metadata": "bundled"
        });
        let err = Requirement::from_record(not_an_object).unwrap_err();
        assert!(matches!(
            err,
            SchemaValidationError::InvalidValue { key: RequirementKey::Metadata, .. }
        ));
    }

    #[test]
    fn test_to_record_uses_canonical_keys() {
        let record = sample_requirement().to_record();
        let map = record.as_object().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["file", "groups", "requirement", "source"]);
        assert_eq!(map.get("source"), Some(&Value::Null));
    }

    #[test]
    fn test_to_record_includes_metadata_only_when_present() {
        let mut metadata = Metadata::new();
        metadata.insert("bundled".to_string(), json!(true));
        let record = sample_requirement().with_metadata(metadata).to_record();
        assert_eq!(record["metadata"], json!({"bundled": true}));
    }

    #[test]
    fn test_record_round_trip() {
        let mut metadata = Metadata::new();
        metadata.insert("bundled".to_string(), json!(true));
        let requirement = sample_requirement()
            .with_source(json!({"type": "registry"}))
            .with_metadata(metadata);
        let round_tripped = Requirement::from_record(requirement.to_record()).unwrap();
        assert_eq!(round_tripped, requirement);
    }

    #[test]
    fn test_deserialize_validates_key_schema() {
        let parsed: Result<Requirement, _> = serde_json::from_value(json!({
            "file": "Gemfile",
            "requirement": ">= 1.0"
        }));
        assert!(parsed.is_err());

        let parsed: Requirement = serde_json::from_value(sample_record()).unwrap();
        assert_eq!(parsed, sample_requirement());
    }

    #[test]
    fn test_serde_round_trip() {
        let requirement = sample_requirement().with_source(json!({"type": "git"}));
        let json = serde_json::to_value(&requirement).unwrap();
        let parsed: Requirement = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, requirement);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", sample_requirement()), ">= 1.0 (Gemfile)");
    }
}
