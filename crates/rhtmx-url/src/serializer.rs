//! URL tree serialization
//!
//! Pure, total functions: any tree built from parser output renders to a
//! string that parses back into an equal tree.

use crate::config::UrlConfig;
use crate::error::ParseError;
use crate::parser;
use crate::segment::{Params, UrlSegment};
use crate::tree::TreeNode;
use crate::url_tree::UrlTree;

/// Converts between URL strings and [`UrlTree`]s
pub trait UrlSerializer {
    fn parse(&self, url: &str) -> Result<UrlTree, ParseError>;

    fn serialize(&self, tree: &UrlTree) -> String;
}

/// The standard grammar: outlets in parentheses, matrix parameters,
/// query string and fragment
#[derive(Debug, Clone, Default)]
pub struct DefaultUrlSerializer {
    config: UrlConfig,
}

impl DefaultUrlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UrlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UrlConfig {
        &self.config
    }
}

impl UrlSerializer for DefaultUrlSerializer {
    fn parse(&self, url: &str) -> Result<UrlTree, ParseError> {
        match parser::parse_with(url, &self.config) {
            Ok(tree) => {
                tracing::debug!(
                    "Parsed URL {:?} into {} top-level segment(s)",
                    url,
                    tree.root().children().len()
                );
                Ok(tree)
            }
            Err(e) => {
                tracing::debug!("Failed to parse URL {:?}: {}", url, e);
                Err(e)
            }
        }
    }

    fn serialize(&self, tree: &UrlTree) -> String {
        let url = serialize(tree);
        tracing::debug!("Serialized URL tree to {:?}", url);
        url
    }
}

/// Renders a whole tree
///
/// The root sentinel contributes nothing and there is no leading `/`,
/// except when the first segment renders empty and is followed by its
/// children (`//b`), where the extra `/` keeps the child separator from
/// being read as the optional leading slash.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{parse, serialize};
///
/// let tree = parse("/inbox/33(popup:compose)?debug#top").unwrap();
/// assert_eq!(serialize(&tree), "inbox/33(popup:compose)?debug=true#top");
/// ```
pub fn serialize(tree: &UrlTree) -> String {
    let mut url = serialize_sibling_group(tree.root().children());
    if url.starts_with('/') {
        url.insert(0, '/');
    }

    url.push_str(&serialize_query_params(tree.query_parameters()));
    if let Some(fragment) = tree.fragment() {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// Renders one hop: `outlet:path;k=v;...` (no prefix for the primary outlet)
///
/// # Examples
///
/// ```
/// use rhtmx_url::{serialize_segment, UrlSegment};
///
/// let segment = UrlSegment::named("popup", "compose").with_param("draft", "7");
/// assert_eq!(serialize_segment(&segment), "popup:compose;draft=7");
/// ```
pub fn serialize_segment(segment: &UrlSegment) -> String {
    let outlet = if segment.is_primary() {
        String::new()
    } else {
        format!("{}:", segment.outlet)
    };
    format!(
        "{}{}{}",
        outlet,
        segment.path,
        serialize_matrix_params(&segment.parameters)
    )
}

/// Renders a node and its whole subtree
pub fn serialize_node(node: &TreeNode<UrlSegment>) -> String {
    format!("{}{}", serialize_segment(node.value()), serialize_children(node))
}

/// `"/"` followed by the children's sibling group, or `""` for a leaf
pub fn serialize_children(node: &TreeNode<UrlSegment>) -> String {
    if node.is_leaf() {
        String::new()
    } else {
        format!("/{}", serialize_sibling_group(node.children()))
    }
}

/// Renders `[primary, ...secondaries]`
///
/// Secondaries go in parentheses right after the primary segment,
/// separated by `//`, each with its own subtree; the primary's children
/// follow the group. An empty slice renders as `""`.
pub fn serialize_sibling_group(nodes: &[TreeNode<UrlSegment>]) -> String {
    let Some((primary, secondary)) = nodes.split_first() else {
        return String::new();
    };

    let secondary = if secondary.is_empty() {
        String::new()
    } else {
        let members: Vec<String> = secondary.iter().map(serialize_node).collect();
        format!("({})", members.join("//"))
    };

    format!(
        "{}{}{}",
        serialize_segment(primary.value()),
        secondary,
        serialize_children(primary)
    )
}

fn serialize_matrix_params(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!(";{}={}", key, value))
        .collect()
}

fn serialize_query_params(params: &Params) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("?{}", pairs.join("&"))
}
