//! Entry points that each start a fresh expression.
//!
//! These are plain functions with no shared state, so independent chains
//! never observe each other.

use crate::selector::{Combinator, PartKind, SelectorExpression};

/// Start a selector with a type selector (`div`).
pub fn element(value: impl Into<String>) -> SelectorExpression {
    SelectorExpression::starting_with(PartKind::Element, value)
}

/// Start a selector with an ID selector (`#main`).
pub fn id(value: impl Into<String>) -> SelectorExpression {
    SelectorExpression::starting_with(PartKind::Id, value)
}

/// Start a selector with a class selector (`.primary`).
pub fn class(value: impl Into<String>) -> SelectorExpression {
    SelectorExpression::starting_with(PartKind::Class, value)
}

/// Start a selector with an attribute selector (`[value]`).
pub fn attr(value: impl Into<String>) -> SelectorExpression {
    SelectorExpression::starting_with(PartKind::Attribute, value)
}

/// Start a selector with a pseudo-class (`:hover`).
pub fn pseudo_class(value: impl Into<String>) -> SelectorExpression {
    SelectorExpression::starting_with(PartKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element (`::before`).
pub fn pseudo_element(value: impl Into<String>) -> SelectorExpression {
    SelectorExpression::starting_with(PartKind::PseudoElement, value)
}

/// Join two expressions: `left {combinator} right`.
///
/// ```rust
/// use selector_builder::{combine, element, Combinator};
///
/// let sel = combine(
///     element("div").id("main")?,
///     Combinator::AdjacentSibling,
///     element("table").id("data")?,
/// );
/// assert_eq!(sel.stringify(), "div#main + table#data");
/// # Ok::<(), selector_builder::SelectorError>(())
/// ```
pub fn combine(
    left: SelectorExpression,
    combinator: Combinator,
    right: SelectorExpression,
) -> SelectorExpression {
    left.combine(combinator, right)
}
