//! Selector expression types.
//!
//! - [`SelectorExpression`]: the builder and its grammar checks
//! - [`PartKind`]: the six simple-selector part kinds, in rank order
//! - [`Combinator`]: tokens joining two expressions

mod combinator;
mod expression;
mod part;

pub use combinator::Combinator;
pub use expression::{SelectorExpression, SelectorState};
pub use part::PartKind;
