//! Plain data objects and JSON round-tripping.
//!
//! - [`Rectangle`]: a width and a height with a computed [`Rectangle::area`]
//! - [`to_json`] / [`from_json`]: convert any serde type to and from JSON text
//!
//! ```rust
//! use objects::{from_json, to_json, Rectangle};
//!
//! let json = to_json(&Rectangle::new(3.0, 4.0))?;
//! let back: Rectangle = from_json(&json)?;
//! assert_eq!(back.area(), 12.0);
//! # Ok::<(), objects::JsonError>(())
//! ```

pub mod error;
pub mod json;
pub mod rectangle;

pub use error::{JsonError, Result};
pub use json::{from_json, to_json};
pub use rectangle::Rectangle;
