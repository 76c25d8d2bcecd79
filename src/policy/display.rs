//! Display name builders

use super::DisplayNameBuilder;

/// Keeps only the final segment of a separator-delimited name
///
/// Some ecosystems carry a namespace in the package identifier, such as
/// `com.google.guava:guava`; users usually know the dependency by the last
/// segment alone. Names without the separator pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct LastNameSegment {
    separator: char,
}

impl LastNameSegment {
    /// Creates a builder splitting on the given separator
    pub fn new(separator: char) -> Self {
        Self { separator }
    }
}

impl DisplayNameBuilder for LastNameSegment {
    fn display_name(&self, name: &str) -> String {
        name.rsplit(self.separator)
            .next()
            .unwrap_or(name)
            .to_string()
    }
}
