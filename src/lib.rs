//! Small object exercises and a fluent CSS selector builder.
//!
//! - [`selector_builder`]: build selector strings such as `a[href$=".png"]:focus`
//! - [`objects`]: a [`Rectangle`] with a computed area and JSON conversion
//!
//! ```rust
//! use selector_kata::{element, from_json, to_json, Rectangle};
//!
//! let sel = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let r: Rectangle = from_json(&to_json(&Rectangle::new(2.0, 3.0))?)?;
//! assert_eq!(r.area(), 6.0);
//! # Ok::<(), selector_kata::KataError>(())
//! ```

pub mod error;
pub mod log_init;

pub use error::{KataError, Result};
pub use log_init::init_logger;

pub use objects::{JsonError, Rectangle, from_json, to_json};
pub use selector_builder::{
    Combinator, PartKind, SelectorError, SelectorExpression, SelectorState, attr, class, combine,
    element, id, pseudo_class, pseudo_element,
};
