//! Core domain models for depcore
//!
//! This module contains the fundamental types of the dependency model:
//! - Package manager identifiers naming the ecosystem a dependency belongs to
//! - Requirement records and their canonical key schema
//! - The dependency entity tying name, package manager, requirements, and
//!   metadata together

mod dependency;
mod package_manager;
mod requirement;

pub use dependency::Dependency;
pub use package_manager::PackageManager;
pub use requirement::{Requirement, RequirementKey};

/// Opaque caller-supplied annotations carried by dependencies and requirements
pub type Metadata = serde_json::Map<String, serde_json::Value>;
