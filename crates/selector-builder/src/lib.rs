//! # selector-builder
//!
//! A fluent builder for CSS selector strings.
//!
//! Selectors are assembled one part at a time and rendered with
//! [`SelectorExpression::stringify`]. The builder only enforces the *shape*
//! of a simple selector; values are written out exactly as given.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector_builder::{combine, element, id, Combinator};
//!
//! let sel = id("main").class("container")?.class("editable")?;
//! assert_eq!(sel.stringify(), "#main.container.editable");
//!
//! let rows = combine(
//!     element("tr").pseudo_class("nth-of-type(even)")?,
//!     Combinator::Child,
//!     element("td").pseudo_class("nth-of-type(even)")?,
//! );
//! assert_eq!(rows.stringify(), "tr:nth-of-type(even) > td:nth-of-type(even)");
//! # Ok::<(), selector_builder::SelectorError>(())
//! ```
//!
//! ## Grammar
//!
//! Parts of a simple selector must appear in this order, each kind optional:
//!
//! | Rank | Kind           | Output      | Repeatable |
//! |------|----------------|-------------|------------|
//! | 0    | element        | `div`       | no         |
//! | 1    | id             | `#main`     | no         |
//! | 2    | class          | `.primary`  | yes        |
//! | 3    | attribute      | `[href]`    | yes        |
//! | 4    | pseudo-class   | `:hover`    | yes        |
//! | 5    | pseudo-element | `::before`  | no         |
//!
//! Adding a part whose rank is lower than one already present fails with
//! [`SelectorError::SelectorOrder`]; repeating a non-repeatable part fails with
//! [`SelectorError::DuplicatePart`].
//!
//! ## Combinators
//!
//! - Descendant: `" "`
//! - Child: `">"`
//! - Adjacent sibling: `"+"`
//! - General sibling: `"~"`
//!
//! Combining always writes a space on each side of the token, so a descendant
//! combination renders as three spaces.
//!
//! ## Modules
//!
//! - [`builder`]: Entry points that start a new expression
//! - [`selector`]: Expression, part kind and combinator types
//! - [`error`]: Error types for invalid build sequences

pub mod builder;
pub mod error;
pub mod selector;

pub use builder::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use error::{Result, SelectorError};
pub use selector::{Combinator, PartKind, SelectorExpression, SelectorState};
