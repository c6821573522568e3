//! Per-node layout intent.

use flexure_core::Edges;
use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::flex::{AlignItems, AlignSelf, Display, FlexDirection, JustifyContent, PositionType};
use crate::value::LayoutValue;

/// Layout style attached 1:1 to a node.
///
/// Pure data: the only behavior is unit resolution and validation. Every
/// field has a default, so styles deserialize from sparse maps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Main axis orientation and placement order
    pub flex_direction: FlexDirection,
    /// Main axis distribution of leftover space
    pub justify_content: JustifyContent,
    /// Default cross axis alignment for children
    pub align_items: AlignItems,
    /// Cross axis alignment override for this node
    pub align_self: AlignSelf,
    /// Share of leftover main axis space
    pub flex_grow: f32,
    /// Stored and validated; overflow never shrinks children
    pub flex_shrink: f32,
    /// Flow or absolute placement
    pub position_type: PositionType,
    /// Hidden nodes are skipped entirely
    pub display: Display,
    /// Preferred width
    pub width: LayoutValue,
    /// Preferred height
    pub height: LayoutValue,
    /// Lower width bound
    pub min_width: LayoutValue,
    /// Lower height bound
    pub min_height: LayoutValue,
    /// Upper width bound
    pub max_width: LayoutValue,
    /// Upper height bound
    pub max_height: LayoutValue,
    /// Inner spacing
    pub padding: Edges<LayoutValue>,
    /// Outer spacing
    pub margin: Edges<LayoutValue>,
    /// Offsets used when `position_type` is absolute
    pub position: Edges<LayoutValue>,
    /// Spacing between consecutive flow children along the main axis
    pub gap: f32,
    /// Width divided by height
    pub aspect_ratio: Option<f32>,
}

impl Style {
    /// Create a style with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flex direction.
    #[must_use]
    pub const fn direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = direction;
        self
    }

    /// Set the main axis distribution.
    #[must_use]
    pub const fn justify(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    /// Set the default cross axis alignment for children.
    #[must_use]
    pub const fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    /// Set the cross axis alignment override.
    #[must_use]
    pub const fn align_self(mut self, align: AlignSelf) -> Self {
        self.align_self = align;
        self
    }

    /// Set the grow factor.
    #[must_use]
    pub const fn grow(mut self, grow: f32) -> Self {
        self.flex_grow = grow;
        self
    }

    /// Set the shrink factor.
    #[must_use]
    pub const fn shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = shrink;
        self
    }

    /// Make the node absolutely positioned.
    #[must_use]
    pub const fn absolute(mut self) -> Self {
        self.position_type = PositionType::Absolute;
        self
    }

    /// Hide the node.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.display = Display::None;
        self
    }

    /// Set the width.
    #[must_use]
    pub fn width(mut self, width: impl Into<LayoutValue>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height.
    #[must_use]
    pub fn height(mut self, height: impl Into<LayoutValue>) -> Self {
        self.height = height.into();
        self
    }

    /// Set width and height together.
    #[must_use]
    pub fn size(self, width: impl Into<LayoutValue>, height: impl Into<LayoutValue>) -> Self {
        self.width(width).height(height)
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, value: impl Into<LayoutValue>) -> Self {
        self.min_width = value.into();
        self
    }

    /// Set the minimum height.
    #[must_use]
    pub fn min_height(mut self, value: impl Into<LayoutValue>) -> Self {
        self.min_height = value.into();
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_width(mut self, value: impl Into<LayoutValue>) -> Self {
        self.max_width = value.into();
        self
    }

    /// Set the maximum height.
    #[must_use]
    pub fn max_height(mut self, value: impl Into<LayoutValue>) -> Self {
        self.max_height = value.into();
        self
    }

    /// Set the same padding on every edge.
    #[must_use]
    pub fn padding_all(mut self, value: impl Into<LayoutValue>) -> Self {
        self.padding = Edges::uniform(value.into());
        self
    }

    /// Set individual padding edges.
    #[must_use]
    pub const fn padding(mut self, padding: Edges<LayoutValue>) -> Self {
        self.padding = padding;
        self
    }

    /// Set the same margin on every edge.
    #[must_use]
    pub fn margin_all(mut self, value: impl Into<LayoutValue>) -> Self {
        self.margin = Edges::uniform(value.into());
        self
    }

    /// Set individual margin edges.
    #[must_use]
    pub const fn margin(mut self, margin: Edges<LayoutValue>) -> Self {
        self.margin = margin;
        self
    }

    /// Set absolute position offsets.
    #[must_use]
    pub const fn position(mut self, position: Edges<LayoutValue>) -> Self {
        self.position = position;
        self
    }

    /// Set the gap between flow children.
    #[must_use]
    pub const fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the aspect ratio (width / height).
    #[must_use]
    pub const fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Check the numeric fields.
    ///
    /// Lengths may be negative (negative margins are legitimate) but must be
    /// finite; factors and the gap must be non-negative.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.flex_grow.is_finite() {
            return Err(StyleError::NonFinite { field: "flex_grow" });
        }
        if self.flex_grow < 0.0 {
            return Err(StyleError::NegativeFlexGrow(self.flex_grow));
        }
        if !self.flex_shrink.is_finite() {
            return Err(StyleError::NonFinite {
                field: "flex_shrink",
            });
        }
        if self.flex_shrink < 0.0 {
            return Err(StyleError::NegativeFlexShrink(self.flex_shrink));
        }
        if !self.gap.is_finite() {
            return Err(StyleError::NonFinite { field: "gap" });
        }
        if self.gap < 0.0 {
            return Err(StyleError::NegativeGap(self.gap));
        }
        if let Some(ratio) = self.aspect_ratio {
            if !ratio.is_finite() {
                return Err(StyleError::NonFinite {
                    field: "aspect_ratio",
                });
            }
            if ratio <= 0.0 {
                return Err(StyleError::NonPositiveAspectRatio(ratio));
            }
        }

        let lengths = [
            ("width", self.width),
            ("height", self.height),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
            ("margin.left", self.margin.left),
            ("margin.top", self.margin.top),
            ("margin.right", self.margin.right),
            ("margin.bottom", self.margin.bottom),
            ("position.left", self.position.left),
            ("position.top", self.position.top),
            ("position.right", self.position.right),
            ("position.bottom", self.position.bottom),
        ];
        for (field, value) in lengths {
            if !value.is_finite() {
                return Err(StyleError::NonFinite { field });
            }
        }
        Ok(())
    }

    pub(crate) const fn dimension(&self, horizontal: bool) -> LayoutValue {
        if horizontal {
            self.width
        } else {
            self.height
        }
    }

    /// Apply min then max, each only when defined. An inverted pair ends at max.
    pub(crate) fn clamp(&self, horizontal: bool, value: f32, parent_size: f32) -> f32 {
        let (min, max) = if horizontal {
            (self.min_width, self.max_width)
        } else {
            (self.min_height, self.max_height)
        };
        let mut result = value;
        if let Some(min) = min.resolve_defined(parent_size) {
            result = result.max(min);
        }
        if let Some(max) = max.resolve_defined(parent_size) {
            result = result.min(max);
        }
        result
    }

    /// Size along one axis derived from the other through `aspect_ratio`.
    ///
    /// Only applies when this axis is undefined in style.
    pub(crate) fn aspect_dimension(&self, horizontal: bool, other: Option<f32>) -> Option<f32> {
        if self.dimension(horizontal).is_defined() {
            return None;
        }
        let ratio = self.aspect_ratio?;
        let other = other?;
        Some(if horizontal {
            other * ratio
        } else {
            other / ratio
        })
    }
}
