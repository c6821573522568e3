//! Flexbox layout enums.

use serde::{Deserialize, Serialize};

/// Direction of the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    /// Vertical (top to bottom)
    #[default]
    Column,
    /// Vertical (bottom to top)
    ColumnReverse,
    /// Horizontal (left to right)
    Row,
    /// Horizontal (right to left)
    RowReverse,
}

impl FlexDirection {
    /// Whether the main axis is horizontal.
    #[must_use]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether children are placed in reverse order.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::ColumnReverse | Self::RowReverse)
    }
}

/// Main axis distribution of leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustifyContent {
    /// Pack items at the start
    #[default]
    FlexStart,
    /// Pack items at the end
    FlexEnd,
    /// Center items
    Center,
    /// Distribute space evenly between items
    SpaceBetween,
    /// Distribute space evenly around items
    SpaceAround,
    /// Distribute space evenly, including edges
    SpaceEvenly,
}

/// Cross axis alignment set on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignItems {
    /// Align to the start
    FlexStart,
    /// Align to the end
    FlexEnd,
    /// Center items
    Center,
    /// Stretch to fill
    #[default]
    Stretch,
}

/// Per-child cross axis alignment override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignSelf {
    /// Inherit the container's `align_items`
    #[default]
    Auto,
    /// Align to the start
    FlexStart,
    /// Align to the end
    FlexEnd,
    /// Center the item
    Center,
    /// Stretch to fill
    Stretch,
}

impl AlignSelf {
    /// Effective alignment given the container's `align_items`.
    #[must_use]
    pub const fn resolve(self, parent: AlignItems) -> AlignItems {
        match self {
            Self::Auto => parent,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

/// Whether a node takes part in flow layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    /// Participates in flex flow
    #[default]
    Relative,
    /// Removed from flow, placed by its `position` edges
    Absolute,
}

/// Whether a node is laid out at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    /// Normal flex layout
    #[default]
    Flex,
    /// Hidden: zero-sized and skipped by its parent
    None,
}
