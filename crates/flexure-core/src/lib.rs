//! Core types for the Flexure layout engine.
//!
//! This crate provides the geometric primitives shared by the layout engine
//! and its consumers:
//! - Points, sizes and rectangles: [`Point`], [`Size`], [`Rect`]
//! - Four-sided quantities such as padding and margins: [`Edges`]

mod edges;
mod geometry;

pub use edges::Edges;
pub use geometry::{Point, Rect, Size};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_point_new() {
            let p = Point::new(10.0, 20.0);
            assert_eq!(p.x, 10.0);
            assert_eq!(p.y, 20.0);
        }

        #[test]
        fn test_point_add() {
            let a = Point::new(10.0, 20.0);
            let b = Point::new(1.0, -2.0);
            assert_eq!(a + b, Point::new(11.0, 18.0));
        }

        #[test]
        fn test_size_new() {
            let s = Size::new(100.0, 200.0);
            assert_eq!(s.width, 100.0);
            assert_eq!(s.height, 200.0);
        }

        #[test]
        fn test_rect_translate() {
            let r = Rect::new(10.0, 10.0, 5.0, 5.0).translate(Point::new(-10.0, 5.0));
            assert_eq!(r, Rect::new(0.0, 15.0, 5.0, 5.0));
        }

        #[test]
        fn test_rect_serde_roundtrip() {
            let r = Rect::new(1.5, 2.5, 3.0, 4.0);
            let json = serde_json::to_string(&r).unwrap();
            let back: Rect = serde_json::from_str(&json).unwrap();
            assert_eq!(r, back);
        }

        proptest! {
            #[test]
            fn prop_translate_preserves_size(
                x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
                w in 0.0f32..1000.0, h in 0.0f32..1000.0,
                dx in -1000.0f32..1000.0, dy in -1000.0f32..1000.0
            ) {
                let r = Rect::new(x, y, w, h);
                let moved = r.translate(Point::new(dx, dy));
                prop_assert_eq!((moved.width, moved.height), (r.width, r.height));
            }

            #[test]
            fn prop_uniform_inset_keeps_center(
                x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
                w in 0.0f32..1000.0, h in 0.0f32..1000.0,
                pad in 0.0f32..100.0
            ) {
                let r = Rect::new(x, y, w, h);
                let inner = r.inset(&Edges::uniform(pad));
                prop_assert!((inner.x + inner.width / 2.0 - (r.x + r.width / 2.0)).abs() < 0.01);
                prop_assert!((inner.y + inner.height / 2.0 - (r.y + r.height / 2.0)).abs() < 0.01);
            }
        }
    }
}
