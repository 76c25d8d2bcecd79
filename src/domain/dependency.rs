//! The dependency entity
//!
//! A dependency ties a package name and its package manager to the list of
//! validated requirements referencing it, plus an opaque metadata mapping.
//! Values are immutable once built: changing one means constructing a new
//! value, and two dependencies built from the same inputs always compare
//! equal field by field.

use super::{Metadata, PackageManager, Requirement};
use crate::error::SchemaValidationError;
use crate::policy::PolicyRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A package dependency with its validated requirement list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// The package manager this dependency belongs to
    pub package_manager: PackageManager,
    /// Requirement records, in the order supplied
    pub requirements: Vec<Requirement>,
    /// Opaque caller-supplied annotations
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Dependency {
    /// Creates a dependency, validating and normalizing every requirement record
    ///
    /// Rejects an empty name, then fails with the first record whose key set
    /// does not match the recognized schema.
    pub fn new(
        name: impl Into<String>,
        requirements: Vec<Value>,
        package_manager: impl Into<PackageManager>,
    ) -> Result<Self, SchemaValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaValidationError::BlankName);
        }
        let requirements = requirements
            .into_iter()
            .map(Requirement::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_requirements(name, requirements, package_manager))
    }

    /// Creates a dependency from requirements already in canonical form
    pub fn from_requirements(
        name: impl Into<String>,
        requirements: Vec<Requirement>,
        package_manager: impl Into<PackageManager>,
    ) -> Self {
        Self {
            name: name.into(),
            package_manager: package_manager.into(),
            requirements,
            metadata: Metadata::new(),
        }
    }

    /// Sets the opaque metadata mapping (builder pattern)
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns true if the dependency is referenced from at least one manifest
    pub fn is_top_level(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// Returns all group names across requirements, in requirement order
    pub fn groups(&self) -> Vec<&str> {
        self.requirements
            .iter()
            .flat_map(|requirement| requirement.groups.iter().map(String::as_str))
            .collect()
    }

    /// Returns true if this dependency matters for a production build
    ///
    /// Applies the default rule, which treats every dependency as production,
    /// including one with no requirements at all. Package managers with their
    /// own group conventions go through `is_production_with`.
    pub fn is_production(&self) -> bool {
        self.is_production_with(&PolicyRegistry::new())
    }

    /// Classifies this dependency using the check registered for its package manager
    pub fn is_production_with(&self, policies: &PolicyRegistry) -> bool {
        let groups = self.groups();
        policies
            .production_check(&self.package_manager)
            .is_production(&groups)
    }

    /// Returns the name as presented to users
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Formats the name using the builder registered for its package manager
    ///
    /// Falls back to the name itself when no builder is registered.
    pub fn display_name_with(&self, policies: &PolicyRegistry) -> String {
        match policies.display_name_builder(&self.package_manager) {
            Some(builder) => builder.display_name(&self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.package_manager)
    }
}
