//! Ecosystem policies for classification and presentation
//!
//! The dependency entity never interprets group names or naming conventions
//! itself; what "production" or a friendly display name means varies by
//! package manager. Ecosystem-specific rules are registered here instead:
//! - Production checks decide whether a dependency's requirement groups mark
//!   it as production
//! - Display name builders format a dependency name for users
//!
//! Unregistered package managers fall back to the defaults: every dependency
//! counts as production, and names are displayed as-is.

mod display;
mod groups;

pub use display::LastNameSegment;
pub use groups::{DevelopmentGroups, ProductionGroups};

use crate::domain::PackageManager;
use std::collections::HashMap;

/// Rule deciding whether requirement groups mark a dependency as production
pub trait ProductionCheck: Send + Sync {
    /// Returns true if the flattened group names indicate production use
    fn is_production(&self, groups: &[&str]) -> bool;
}

impl<F> ProductionCheck for F
where
    F: Fn(&[&str]) -> bool + Send + Sync,
{
    fn is_production(&self, groups: &[&str]) -> bool {
        self(groups)
    }
}

/// Rule formatting a dependency name for display
pub trait DisplayNameBuilder: Send + Sync {
    /// Formats the given package name
    fn display_name(&self, name: &str) -> String;
}

impl<F> DisplayNameBuilder for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn display_name(&self, name: &str) -> String {
        self(name)
    }
}

/// Default production check: every dependency counts, whatever its groups
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeProduction;

impl ProductionCheck for AssumeProduction {
    fn is_production(&self, _groups: &[&str]) -> bool {
        true
    }
}

static DEFAULT_PRODUCTION_CHECK: AssumeProduction = AssumeProduction;

/// Per-ecosystem policy overrides, keyed by package manager
#[derive(Default)]
pub struct PolicyRegistry {
    production_checks: HashMap<PackageManager, Box<dyn ProductionCheck>>,
    display_name_builders: HashMap<PackageManager, Box<dyn DisplayNameBuilder>>,
}

impl PolicyRegistry {
    /// Creates an empty registry; defaults apply to every package manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the production check for a package manager
    pub fn register_production_check(
        &mut self,
        package_manager: impl Into<PackageManager>,
        check: impl ProductionCheck + 'static,
    ) {
        self.production_checks
            .insert(package_manager.into(), Box::new(check));
    }

    /// Registers the display name builder for a package manager
    pub fn register_display_name_builder(
        &mut self,
        package_manager: impl Into<PackageManager>,
        builder: impl DisplayNameBuilder + 'static,
    ) {
        self.display_name_builders
            .insert(package_manager.into(), Box::new(builder));
    }

    /// Returns the production check for a package manager
    pub fn production_check(&self, package_manager: &PackageManager) -> &dyn ProductionCheck {
        match self.production_checks.get(package_manager) {
            Some(check) => check.as_ref(),
            None => &DEFAULT_PRODUCTION_CHECK,
        }
    }

    /// Returns the display name builder for a package manager, if registered
    pub fn display_name_builder(
        &self,
        package_manager: &PackageManager,
    ) -> Option<&dyn DisplayNameBuilder> {
        self.display_name_builders
            .get(package_manager)
            .map(|builder| builder.as_ref())
    }
}
