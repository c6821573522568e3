//! Four-sided quantities: padding, margin and position offsets.

use serde::{Deserialize, Serialize};

/// A value for each of the four physical edges of a box.
///
/// Edges deserialize from a map where missing sides fall back to
/// `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges<T> {
    /// Left edge
    pub left: T,
    /// Top edge
    pub top: T,
    /// Right edge
    pub right: T,
    /// Bottom edge
    pub bottom: T,
}

impl<T> Edges<T> {
    /// Create edges with individual values.
    #[must_use]
    pub const fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl<T: Copy> Edges<T> {
    /// Create edges with the same value on every side.
    #[must_use]
    pub const fn uniform(value: T) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Edges<f32> {
    /// Sum of the left and right edges.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom edges.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_uniform() {
        let e = Edges::uniform(4.0);
        assert_eq!(e, Edges::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(e.horizontal(), 8.0);
        assert_eq!(e.vertical(), 8.0);
    }

    #[test]
    fn test_edges_default_is_zero() {
        assert_eq!(Edges::<f32>::default(), Edges::uniform(0.0));
    }

    #[test]
    fn test_edges_deserialize_missing_sides() {
        let e: Edges<f32> = serde_json::from_str(r#"{"left": 5.0}"#).unwrap();
        assert_eq!(e, Edges::new(5.0, 0.0, 0.0, 0.0));
    }
}
