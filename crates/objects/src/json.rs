//! Converting objects to and from JSON text.
//!
//! Deserializing into a concrete type gives back a value with all of that
//! type's methods, so no separate "reattach" step is needed.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{JsonError, Result};

/// Serialize `value` as compact JSON.
///
/// ```rust
/// use objects::{to_json, Rectangle};
///
/// let json = to_json(&Rectangle::new(10.0, 20.0))?;
/// assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
/// # Ok::<(), objects::JsonError>(())
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(JsonError::Serialize)?;
    log::trace!("serialized {} bytes", json.len());
    Ok(json)
}

/// Parse `json` into a `T`.
///
/// ```rust
/// use objects::{from_json, Rectangle};
///
/// let r: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#)?;
/// assert_eq!(r.area(), 200.0);
/// # Ok::<(), objects::JsonError>(())
/// ```
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| {
        log::debug!("rejected JSON input: {}", e);
        JsonError::Deserialize(e)
    })
}
