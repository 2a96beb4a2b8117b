//! A plain rectangle with a computed area.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its size.
///
/// ```rust
/// use objects::Rectangle;
///
/// let r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width times height.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area() {
        assert_eq!(Rectangle::new(10.0, 20.0).area(), 200.0);
        assert_eq!(Rectangle::new(5.0, 5.0).area(), 25.0);
        assert_eq!(Rectangle::new(0.0, 7.0).area(), 0.0);
    }

    #[test]
    fn area_follows_fields() {
        let mut r = Rectangle::new(2.0, 3.0);
        r.width = 4.0;
        assert_eq!(r.area(), 12.0);
    }
}
