//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tree-wide layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Physical pixels per point used to snap results to the pixel grid.
    ///
    /// Zero (the default), negative and non-finite values leave results
    /// unrounded.
    pub point_scale_factor: f32,
}

impl LayoutConfig {
    /// Configuration that snaps to a grid of `1 / scale` points.
    #[must_use]
    pub const fn with_point_scale_factor(scale: f32) -> Self {
        Self {
            point_scale_factor: scale,
        }
    }

    /// Whether a rounding pass runs after layout.
    #[must_use]
    pub fn rounding_enabled(&self) -> bool {
        self.point_scale_factor.is_finite() && self.point_scale_factor > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_rounding() {
        assert!(!LayoutConfig::default().rounding_enabled());
    }

    #[test]
    fn test_rounding_enabled() {
        assert!(LayoutConfig::with_point_scale_factor(2.0).rounding_enabled());
        assert!(!LayoutConfig::with_point_scale_factor(-1.0).rounding_enabled());
        assert!(!LayoutConfig::with_point_scale_factor(f32::NAN).rounding_enabled());
    }

    #[test]
    fn test_deserialize_empty_map() {
        let config: LayoutConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }
}
