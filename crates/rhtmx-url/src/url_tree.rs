//! URL tree: the parsed form of a navigation target

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::segment::{Params, UrlSegment};
use crate::tree::TreeNode;

/// A parsed URL: segment tree, query parameters and optional fragment
///
/// The root node holds a sentinel segment (empty path, primary outlet).
/// Real segments start at `root.children()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTree {
    root: TreeNode<UrlSegment>,
    query_parameters: Params,
    fragment: Option<String>,
}

impl UrlTree {
    /// Builds a tree from the given top-level sibling group
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::{Params, TreeNode, UrlSegment, UrlTree};
    ///
    /// let tree = UrlTree::new(
    ///     vec![TreeNode::leaf(UrlSegment::primary("inbox"))],
    ///     Params::new(),
    ///     None,
    /// );
    /// assert_eq!(tree.to_string(), "inbox");
    /// ```
    pub fn new(
        segments: Vec<TreeNode<UrlSegment>>,
        query_parameters: Params,
        fragment: Option<String>,
    ) -> Self {
        Self {
            root: TreeNode::new(UrlSegment::default(), segments),
            query_parameters,
            fragment,
        }
    }

    /// The tree for `""` or `"/"`
    pub fn empty() -> Self {
        Self::new(Vec::new(), Params::new(), None)
    }

    pub fn root(&self) -> &TreeNode<UrlSegment> {
        &self.root
    }

    pub fn query_parameters(&self) -> &Params {
        &self.query_parameters
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// True when there are no segments, no query parameters and no fragment
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf() && self.query_parameters.is_empty() && self.fragment.is_none()
    }

    /// Returns a copy of this tree with one more query parameter
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this tree with the fragment replaced
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

impl Default for UrlTree {
    fn default() -> Self {
        Self::empty()
    }
}

/// Root node of a URL tree, for generic tree utilities
pub fn root_node(tree: &UrlTree) -> &TreeNode<UrlSegment> {
    tree.root()
}

impl FromStr for UrlTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl fmt::Display for UrlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = UrlTree::default();
        assert!(tree.is_empty());
        assert!(root_node(&tree).is_leaf());
        assert!(root_node(&tree).value().is_blank());
        assert_eq!(tree.fragment(), None);
    }

    #[test]
    fn test_builders() {
        let tree = UrlTree::empty()
            .with_query_param("page", "2")
            .with_fragment("top");
        assert!(!tree.is_empty());
        assert_eq!(tree.query_parameters().get("page").map(String::as_str), Some("2"));
        assert_eq!(tree.fragment(), Some("top"));
    }

    #[test]
    fn test_from_str_and_display() {
        let tree: UrlTree = "team/33;open=true?debug=true#end".parse().unwrap();
        assert_eq!(tree.to_string(), "team/33;open=true?debug=true#end");
    }
}
