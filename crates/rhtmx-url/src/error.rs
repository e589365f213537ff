//! Parse errors
//!
//! Every grammar violation aborts parsing on the spot; no partial tree is
//! ever handed back to the caller.

use thiserror::Error;

/// Error returned when a string cannot be read as a URL tree
///
/// Each variant records the byte offset of the parser cursor at the point
/// the violation was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A literal delimiter was required but something else was found
    #[error("Expected \"{expected}\".")]
    Expected { expected: String, position: usize },

    /// A segment inside a parenthesized group has no `outlet:` qualifier
    #[error("missing outlet name in segment \"{segment}\"")]
    MissingOutletName { segment: String, position: usize },

    /// A segment outside a parenthesized group carries an `outlet:` qualifier
    #[error("outlet name not allowed here: \"{segment}\"")]
    OutletNotAllowed { segment: String, position: usize },

    /// The primary outlet cannot be addressed by name
    #[error("outlet name \"primary\" is reserved")]
    ReservedOutletName { position: usize },

    /// Input is longer than the configured limit
    #[error("URL is {length} bytes long, the limit is {max}")]
    TooLong { length: usize, max: usize },

    /// Path levels and groups nest deeper than the configured limit
    #[error("URL nests deeper than {max_depth} levels")]
    TooDeep { max_depth: usize, position: usize },

    /// Strict mode found input the grammar did not consume
    #[error("unexpected input \"{remaining}\"")]
    TrailingInput { remaining: String, position: usize },
}

impl ParseError {
    /// Byte offset into the input where parsing stopped
    ///
    /// `None` for [`ParseError::TooLong`], which is raised before the
    /// cursor moves.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Expected { position, .. }
            | ParseError::MissingOutletName { position, .. }
            | ParseError::OutletNotAllowed { position, .. }
            | ParseError::ReservedOutletName { position }
            | ParseError::TooDeep { position, .. }
            | ParseError::TrailingInput { position, .. } => Some(*position),
            ParseError::TooLong { .. } => None,
        }
    }
}
