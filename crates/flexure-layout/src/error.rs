//! Error types for tree mutation and style validation.
//!
//! The layout pass itself never fails; these errors are raised at the
//! mutation boundary so that bad input is rejected before it reaches
//! `calculate_layout`.

use thiserror::Error;

use crate::node::NodeId;

/// Rejected style values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// `flex_grow` must be zero or positive.
    #[error("flex_grow must be >= 0, got {0}")]
    NegativeFlexGrow(f32),
    /// `flex_shrink` must be zero or positive.
    #[error("flex_shrink must be >= 0, got {0}")]
    NegativeFlexShrink(f32),
    /// `gap` must be zero or positive.
    #[error("gap must be >= 0, got {0}")]
    NegativeGap(f32),
    /// `aspect_ratio` must be strictly positive.
    #[error("aspect_ratio must be > 0, got {0}")]
    NonPositiveAspectRatio(f32),
    /// A numeric field held NaN or an infinity.
    #[error("{field} must be finite")]
    NonFinite {
        /// Style field name
        field: &'static str,
    },
}

/// Errors from [`LayoutTree`](crate::LayoutTree) mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// The id refers to a node that was removed (or never existed in this tree).
    #[error("node {0} is not alive in this tree")]
    StaleNode(NodeId),
    /// A node cannot be its own child.
    #[error("node {0} cannot be added as its own child")]
    SelfChild(NodeId),
    /// Adding the child would make it an ancestor of itself.
    #[error("adding {child} under {parent} would create a cycle")]
    WouldCycle {
        /// Prospective parent
        parent: NodeId,
        /// Prospective child (an ancestor of `parent`)
        child: NodeId,
    },
    /// Insertion index past the end of the child list.
    #[error("child index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Current child count
        len: usize,
    },
    /// `remove_child` was given a node that is not a child of `parent`.
    #[error("{child} is not a child of {parent}")]
    NotAChild {
        /// Parent that was searched
        parent: NodeId,
        /// Node that was not found
        child: NodeId,
    },
    /// The style failed validation.
    #[error("invalid style: {0}")]
    InvalidStyle(#[from] StyleError),
}

/// Errors from parsing a textual [`LayoutValue`](crate::LayoutValue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueParseError {
    /// The text was empty.
    #[error("empty layout value")]
    Empty,
    /// The text was not a number, a `px` length, a percentage or `auto`.
    #[error("invalid layout value '{0}'")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_error_display() {
        assert_eq!(
            StyleError::NegativeFlexGrow(-1.0).to_string(),
            "flex_grow must be >= 0, got -1"
        );
        assert_eq!(
            StyleError::NonFinite { field: "width" }.to_string(),
            "width must be finite"
        );
    }

    #[test]
    fn test_tree_error_from_style_error() {
        let err: TreeError = StyleError::NegativeGap(-2.0).into();
        assert_eq!(err.to_string(), "invalid style: gap must be >= 0, got -2");
    }

    #[test]
    fn test_index_error_display() {
        let err = TreeError::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(err.to_string(), "child index 5 out of bounds (len 2)");
    }

    #[test]
    fn test_value_parse_error_display() {
        assert_eq!(
            ValueParseError::Invalid("abc".into()).to_string(),
            "invalid layout value 'abc'"
        );
    }
}
