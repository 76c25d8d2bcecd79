//! Package manager identifiers
//!
//! The package manager names the ecosystem a dependency belongs to. The
//! identifier is opaque to this crate: it is never interpreted, only
//! displayed and used as the lookup key for ecosystem policies.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of the package manager a dependency belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageManager(String);

impl PackageManager {
    /// Creates a package manager identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PackageManager {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PackageManager {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PackageManager {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageManager {
    fn borrow(&self) -> &str {
        &self.0
    }
}
