//! Recursive-descent URL parser
//!
//! Single pass, no backtracking. The cursor is a byte offset into the
//! borrowed input; every production either commits what it consumed or
//! fails with a [`ParseError`].
//!
//! ```text
//! Url            := RootSegment QueryParams? Fragment?
//! RootSegment    := ε | '/' | Segments(false)
//! Segments(req)  := '/'? Token(req) MatrixParams? SecondaryGroup? ('/' Segments(false))?
//! MatrixParams   := (';' Key ('=' Value)?)*
//! SecondaryGroup := '(' Segments(true) ('//' Segments(true))* ')'
//! QueryParams    := '?' QueryParam ('&' QueryParam)*
//! Fragment       := '#' <rest of input>
//! ```

pub mod token;

use crate::config::{UrlConfig, DEFAULT_MAX_DEPTH, DEPTH_CEILING};
use crate::error::ParseError;
use crate::segment::{Params, UrlSegment, PRIMARY_OUTLET};
use crate::tree::TreeNode;
use crate::url_tree::UrlTree;

use token::{match_url_query_param_value, match_url_segment};

/// Cursor over the unconsumed suffix of a URL string
///
/// Nesting (path levels plus parenthesized groups) is capped at
/// `max_depth`; the productions recurse once per level.
pub struct UrlParser<'a> {
    input: &'a str,
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> UrlParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// Parser that fails with [`ParseError::TooDeep`] past `max_depth`
    /// levels (never more than [`DEPTH_CEILING`])
    pub fn with_max_depth(input: &'a str, max_depth: usize) -> Self {
        Self {
            input,
            position: 0,
            depth: 0,
            max_depth: max_depth.min(DEPTH_CEILING),
        }
    }

    /// Unconsumed input
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek_starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    fn capture(&mut self, literal: &str) -> Result<(), ParseError> {
        if !self.peek_starts_with(literal) {
            return Err(ParseError::Expected {
                expected: literal.to_string(),
                position: self.position,
            });
        }
        self.position += literal.len();
        Ok(())
    }

    /// Top-level sibling group (the children of the root sentinel)
    ///
    /// `""` and `"/"` yield no segments.
    pub fn parse_root_segments(&mut self) -> Result<Vec<TreeNode<UrlSegment>>, ParseError> {
        match self.remaining() {
            "" | "/" => {
                self.position = self.input.len();
                Ok(Vec::new())
            }
            _ => self.parse_segments(false),
        }
    }

    /// Parses one position: `[primary, ...secondaries]`
    fn parse_segments(
        &mut self,
        outlet_required: bool,
    ) -> Result<Vec<TreeNode<UrlSegment>>, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                max_depth: self.max_depth,
                position: self.position,
            });
        }
        self.depth += 1;
        let group = self.parse_position(outlet_required);
        self.depth -= 1;
        group
    }

    /// Body of [`Self::parse_segments`]
    ///
    /// A segment with an empty path and nothing attached to it is dropped,
    /// so `a/` and `a/?q` leave `a` without children.
    fn parse_position(
        &mut self,
        outlet_required: bool,
    ) -> Result<Vec<TreeNode<UrlSegment>>, ParseError> {
        if self.is_exhausted() {
            return Ok(Vec::new());
        }
        if self.peek_starts_with("/") {
            self.capture("/")?;
        }

        let start = self.position;
        let token = match_url_segment(self.remaining());
        self.capture(token)?;

        let (outlet, path) = if outlet_required {
            match token.split_once(':') {
                Some((PRIMARY_OUTLET, _)) => {
                    return Err(ParseError::ReservedOutletName { position: start })
                }
                Some(("", _)) | None => {
                    return Err(ParseError::MissingOutletName {
                        segment: token.to_string(),
                        position: start,
                    })
                }
                Some(parts) => parts,
            }
        } else if token.contains(':') {
            return Err(ParseError::OutletNotAllowed {
                segment: token.to_string(),
                position: start,
            });
        } else {
            (PRIMARY_OUTLET, token)
        };

        let parameters = if self.peek_starts_with(";") {
            self.parse_matrix_params()?
        } else {
            Params::new()
        };

        let secondary = if self.peek_starts_with("(") {
            self.parse_secondary_segments()?
        } else {
            Vec::new()
        };

        let children = if self.peek_starts_with("/") && !self.peek_starts_with("//") {
            self.capture("/")?;
            self.parse_segments(false)?
        } else {
            Vec::new()
        };

        let node = TreeNode::new(UrlSegment::new(path, parameters, outlet), children);
        if node.value().is_blank() && node.is_leaf() && secondary.is_empty() {
            return Ok(Vec::new());
        }

        let mut group = Vec::with_capacity(1 + secondary.len());
        group.push(node);
        group.extend(secondary);
        Ok(group)
    }

    fn parse_matrix_params(&mut self) -> Result<Params, ParseError> {
        let mut params = Params::new();
        while self.peek_starts_with(";") {
            self.capture(";")?;
            self.parse_param(&mut params, match_url_segment)?;
        }
        Ok(params)
    }

    /// `Key ('=' Value)?` into `params`; a missing or empty value reads as
    /// `"true"`. An empty key consumes nothing.
    fn parse_param(
        &mut self,
        params: &mut Params,
        match_value: fn(&str) -> &str,
    ) -> Result<(), ParseError> {
        let key = match_url_segment(self.remaining());
        if key.is_empty() {
            return Ok(());
        }
        self.capture(key)?;

        let mut value = "true";
        if self.peek_starts_with("=") {
            self.capture("=")?;
            let matched = match_value(self.remaining());
            if !matched.is_empty() {
                self.capture(matched)?;
                value = matched;
            }
        }

        params.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn parse_secondary_segments(&mut self) -> Result<Vec<TreeNode<UrlSegment>>, ParseError> {
        self.capture("(")?;
        let mut segments = Vec::new();
        while !self.peek_starts_with(")") && !self.is_exhausted() {
            segments.extend(self.parse_segments(true)?);
            if self.peek_starts_with("//") {
                self.capture("//")?;
            }
        }
        self.capture(")")?;
        Ok(segments)
    }

    pub fn parse_query_params(&mut self) -> Result<Params, ParseError> {
        let mut params = Params::new();
        if self.peek_starts_with("?") {
            self.capture("?")?;
            self.parse_param(&mut params, match_url_query_param_value)?;
            while self.peek_starts_with("&") {
                self.capture("&")?;
                self.parse_param(&mut params, match_url_query_param_value)?;
            }
        }
        Ok(params)
    }

    /// Everything after `#`, verbatim
    pub fn parse_fragment(&mut self) -> Option<String> {
        if !self.peek_starts_with("#") {
            return None;
        }
        let fragment = self.remaining()[1..].to_string();
        self.position = self.input.len();
        Some(fragment)
    }
}

/// Parses `url` under the limits of `config`
pub fn parse_with(url: &str, config: &UrlConfig) -> Result<UrlTree, ParseError> {
    if config.max_length > 0 && url.len() > config.max_length {
        return Err(ParseError::TooLong {
            length: url.len(),
            max: config.max_length,
        });
    }

    let mut parser = UrlParser::with_max_depth(url, config.effective_max_depth());
    let segments = parser.parse_root_segments()?;
    let query_parameters = parser.parse_query_params()?;
    let fragment = parser.parse_fragment();

    if !parser.is_exhausted() {
        if config.strict {
            return Err(ParseError::TrailingInput {
                remaining: parser.remaining().to_string(),
                position: parser.position(),
            });
        }
        tracing::trace!(
            "Ignoring unparsed input {:?} at offset {}",
            parser.remaining(),
            parser.position()
        );
    }

    Ok(UrlTree::new(segments, query_parameters, fragment))
}
