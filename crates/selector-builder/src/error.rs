//! Error types for selector construction.
//!
//! Every error here describes a mistake in the *sequence* of builder calls,
//! never a problem with the values themselves. Values are passed through
//! verbatim.

use thiserror::Error;

use crate::selector::PartKind;

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, SelectorError>;

/// Errors that can occur while building a selector.
///
/// # Examples
///
/// ```rust
/// use selector_builder::{id, SelectorError};
///
/// let err = id("main").id("other").unwrap_err();
/// assert!(matches!(err, SelectorError::DuplicatePart { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was added a second time.
    ///
    /// `selector` holds the text accumulated before the rejected call.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector \
         (duplicate {kind} in `{selector}`)"
    )]
    DuplicatePart { kind: PartKind, selector: String },

    /// A part was added after a part that must come later in a simple selector.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element ({kind} after {after} in `{selector}`)"
    )]
    SelectorOrder {
        kind: PartKind,
        after: PartKind,
        selector: String,
    },

    /// A combinator token other than ` `, `>`, `+` or `~`.
    #[error("Unknown combinator: {0:?}")]
    UnknownCombinator(String),
}

impl SelectorError {
    /// Create a duplicate part error.
    pub fn duplicate(kind: PartKind, selector: impl Into<String>) -> Self {
        Self::DuplicatePart {
            kind,
            selector: selector.into(),
        }
    }

    /// Create an ordering error.
    pub fn order(kind: PartKind, after: PartKind, selector: impl Into<String>) -> Self {
        Self::SelectorOrder {
            kind,
            after,
            selector: selector.into(),
        }
    }

    /// The kind of part whose addition was rejected, if any.
    pub fn rejected_kind(&self) -> Option<PartKind> {
        match self {
            Self::DuplicatePart { kind, .. } | Self::SelectorOrder { kind, .. } => Some(*kind),
            Self::UnknownCombinator(_) => None,
        }
    }
}
