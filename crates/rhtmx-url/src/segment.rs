//! URL segment model
//!
//! A segment is one hop of a URL tree: its path token, the matrix
//! parameters attached to it and the outlet it targets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the unnamed default outlet
pub const PRIMARY_OUTLET: &str = "primary";

/// Insertion-ordered parameter map (matrix and query parameters)
///
/// Inserting an existing key overwrites its value in place.
pub type Params = IndexMap<String, String>;

/// A single path segment with its matrix parameters and outlet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSegment {
    /// Path token, free of reserved delimiters when produced by the parser
    pub path: String,
    /// Matrix parameters (`;key=value`)
    pub parameters: Params,
    /// Outlet this segment renders into
    pub outlet: String,
}

impl UrlSegment {
    pub fn new(path: impl Into<String>, parameters: Params, outlet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parameters,
            outlet: outlet.into(),
        }
    }

    /// Creates a parameterless segment in the primary outlet
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::UrlSegment;
    ///
    /// let segment = UrlSegment::primary("users");
    /// assert!(segment.is_primary());
    /// assert!(segment.parameters.is_empty());
    /// ```
    pub fn primary(path: impl Into<String>) -> Self {
        Self::new(path, Params::new(), PRIMARY_OUTLET)
    }

    /// Creates a parameterless segment in a named outlet
    pub fn named(outlet: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(path, Params::new(), outlet)
    }

    /// Returns a copy of this segment with one more matrix parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn is_primary(&self) -> bool {
        self.outlet == PRIMARY_OUTLET
    }

    /// True for a segment that carries nothing: empty path, no parameters,
    /// primary outlet
    pub(crate) fn is_blank(&self) -> bool {
        self.path.is_empty() && self.parameters.is_empty() && self.is_primary()
    }
}

impl Default for UrlSegment {
    fn default() -> Self {
        Self::primary("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_param_last_write_wins() {
        let segment = UrlSegment::primary("a")
            .with_param("x", "1")
            .with_param("y", "2")
            .with_param("x", "3");

        let pairs: Vec<(&str, &str)> = segment
            .parameters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("x", "3"), ("y", "2")]);
    }

    #[test]
    fn test_named_segment() {
        let segment = UrlSegment::named("popup", "compose");
        assert!(!segment.is_primary());
        assert_eq!(segment.outlet, "popup");
        assert_eq!(segment.path, "compose");
    }

    #[test]
    fn test_blank() {
        assert!(UrlSegment::default().is_blank());
        assert!(!UrlSegment::primary("").with_param("x", "1").is_blank());
        assert!(!UrlSegment::named("aux", "").is_blank());
    }
}
