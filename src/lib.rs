//! depcore - dependency model core for automated dependency updates
//!
//! This library provides the validated dependency entity that update tooling
//! is built around:
//! - A requirement key schema with strict validation and normalization of
//!   caller-supplied records
//! - An immutable dependency value tying name, package manager, requirements,
//!   and opaque metadata together
//! - Ecosystem policies for production classification and display names

pub mod domain;
pub mod error;
pub mod policy;
