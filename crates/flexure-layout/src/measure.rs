//! Intrinsic measurement of leaf content.

use flexure_core::Size;
use serde::{Deserialize, Serialize};

/// How a leaf should interpret the size offered along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// No constraint; the offered size is meaningless
    #[default]
    Undefined,
    /// The result must equal the offered size
    Exactly,
    /// The result may be at most the offered size
    AtMost,
}

/// Intrinsic size provider attached to a leaf node (text, images, native
/// controls).
///
/// Closures of the shape `Fn(f32, MeasureMode, f32, MeasureMode) -> Size`
/// implement this trait directly.
pub trait Measure: Send {
    /// Report the node's size for the offered constraints.
    fn measure(
        &self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size;
}

impl<F> Measure for F
where
    F: Fn(f32, MeasureMode, f32, MeasureMode) -> Size + Send,
{
    fn measure(
        &self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size {
        self(width, width_mode, height, height_mode)
    }
}

/// Content with a fixed natural size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedMeasure(pub Size);

impl FixedMeasure {
    /// Create a measure reporting `width` x `height` when unconstrained.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self(Size::new(width, height))
    }

    fn fit(natural: f32, offered: f32, mode: MeasureMode) -> f32 {
        match mode {
            MeasureMode::Undefined => natural,
            MeasureMode::Exactly => offered,
            MeasureMode::AtMost => natural.min(offered),
        }
    }
}

impl Measure for FixedMeasure {
    fn measure(
        &self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size {
        Size::new(
            Self::fit(self.0.width, width, width_mode),
            Self::fit(self.0.height, height, height_mode),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_mode_default() {
        assert_eq!(MeasureMode::default(), MeasureMode::Undefined);
    }

    #[test]
    fn test_closure_is_measure() {
        let m = |w: f32, _: MeasureMode, h: f32, _: MeasureMode| Size::new(w / 2.0, h / 2.0);
        let size = m.measure(10.0, MeasureMode::Exactly, 20.0, MeasureMode::AtMost);
        assert_eq!(size, Size::new(5.0, 10.0));
    }

    #[test]
    fn test_fixed_measure_undefined_reports_natural() {
        let m = FixedMeasure::new(40.0, 12.0);
        let size = m.measure(0.0, MeasureMode::Undefined, 0.0, MeasureMode::Undefined);
        assert_eq!(size, Size::new(40.0, 12.0));
    }

    #[test]
    fn test_fixed_measure_at_most_caps() {
        let m = FixedMeasure::new(40.0, 12.0);
        let size = m.measure(30.0, MeasureMode::AtMost, 100.0, MeasureMode::AtMost);
        assert_eq!(size, Size::new(30.0, 12.0));
    }

    #[test]
    fn test_fixed_measure_exactly_obeys() {
        let m = FixedMeasure::new(40.0, 12.0);
        let size = m.measure(64.0, MeasureMode::Exactly, 8.0, MeasureMode::Exactly);
        assert_eq!(size, Size::new(64.0, 8.0));
    }
}
