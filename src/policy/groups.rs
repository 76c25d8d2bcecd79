//! Group-vocabulary production checks
//!
//! Which group names mark a requirement as production or development-only is
//! a package manager convention, so the vocabulary is configuration here
//! rather than behavior of the dependency entity. Both checks treat a
//! dependency without any groups as production.

use super::ProductionCheck;
use std::collections::HashSet;

/// Production check driven by a vocabulary of production group names
///
/// A dependency counts as production when it has no groups at all or when at
/// least one of its groups is in the vocabulary.
#[derive(Debug, Clone, Default)]
pub struct ProductionGroups {
    vocabulary: HashSet<String>,
}

impl ProductionGroups {
    /// Creates a check from the given production group names
    pub fn new(vocabulary: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProductionCheck for ProductionGroups {
    fn is_production(&self, groups: &[&str]) -> bool {
        groups.is_empty() || groups.iter().any(|group| self.vocabulary.contains(*group))
    }
}

/// Production check driven by a vocabulary of development-only group names
///
/// A dependency stays production unless it has groups and every one of them
/// is in the vocabulary.
#[derive(Debug, Clone, Default)]
pub struct DevelopmentGroups {
    vocabulary: HashSet<String>,
}

impl DevelopmentGroups {
    /// Creates a check from the given development group names
    pub fn new(vocabulary: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProductionCheck for DevelopmentGroups {
    fn is_production(&self, groups: &[&str]) -> bool {
        groups.is_empty() || !groups.iter().all(|group| self.vocabulary.contains(*group))
    }
}
