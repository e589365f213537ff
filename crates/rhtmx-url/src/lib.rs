//! # RHTMX URL
//!
//! Parser and serializer for navigation URLs with:
//! - Nested path segments (`/inbox/33`)
//! - Matrix parameters per segment (`/inbox;unread=true`)
//! - Named outlets in parenthesized sibling groups (`/inbox(popup:compose//aux:help)`)
//! - Query parameters (`?page=2`) and a fragment (`#top`)
//!
//! A string parses into a [`UrlTree`]: a tree of [`UrlSegment`]s plus the
//! query map and the fragment. Serializing that tree and parsing the result
//! again always gives back an equal tree.
//!
//! ## Sibling groups
//!
//! Every position in the tree holds `[primary, ...secondaries]`. The
//! primary segment's children continue the path after a single `/`;
//! secondaries come from `(outlet:path//outlet:path)` and sit next to the
//! primary segment, not below it.
//!
//! ## Example
//!
//! ```
//! use rhtmx_url::{parse, serialize, PRIMARY_OUTLET};
//!
//! let tree = parse("/inbox/33(popup:compose)?debug=true").unwrap();
//!
//! let inbox = &tree.root().children()[0];
//! assert_eq!(inbox.value().path, "inbox");
//!
//! let group = inbox.children();
//! assert_eq!(group[0].value().path, "33");
//! assert_eq!(group[0].value().outlet, PRIMARY_OUTLET);
//! assert_eq!(group[1].value().outlet, "popup");
//!
//! assert_eq!(serialize(&tree), "inbox/33(popup:compose)?debug=true");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod parser;
mod segment;
mod serializer;
mod tree;
mod url_tree;

pub use config::{Config, UrlConfig};
pub use error::ParseError;
pub use parser::UrlParser;
pub use segment::{Params, UrlSegment, PRIMARY_OUTLET};
pub use serializer::{
    serialize, serialize_children, serialize_node, serialize_segment, serialize_sibling_group,
    DefaultUrlSerializer, UrlSerializer,
};
pub use tree::{PrimaryChain, TreeNode};
pub use url_tree::{root_node, UrlTree};

// ============================================================================
// Entry Points
// ============================================================================

/// Parses a URL with the default settings
///
/// # Examples
///
/// ```
/// use rhtmx_url::parse;
///
/// let tree = parse("a;x=1;y=2").unwrap();
/// let a = tree.root().children()[0].value();
/// assert_eq!(a.parameters.get("x").map(String::as_str), Some("1"));
///
/// assert!(parse("popup:b").is_err());
/// assert!(parse("(b)").is_err());
/// ```
pub fn parse(url: &str) -> Result<UrlTree, ParseError> {
    DefaultUrlSerializer::new().parse(url)
}
