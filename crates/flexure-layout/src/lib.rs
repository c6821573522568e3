#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
//! Flexbox-style layout engine for native view hierarchies.
//!
//! Nodes live in a [`LayoutTree`] arena and are addressed by [`NodeId`].
//! Each node carries a [`Style`] describing its layout intent and,
//! optionally, a [`Measure`] callback for intrinsically sized content such
//! as text.
//!
//! - **Layout**: [`calculate_layout`] resolves every node's box in one
//!   top-down pass (single line, grow only, no wrapping)
//! - **Output**: [`apply_layout`] hands parent-relative frames to the
//!   attached [`ViewHandle`]s
//! - **Rounding**: [`LayoutConfig::point_scale_factor`] snaps results to
//!   the physical pixel grid
//!
//! ```
//! use flexure_layout::{calculate_layout, FlexDirection, LayoutTree, Style};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.new_node(Style::new().direction(FlexDirection::Row)).unwrap();
//! let sidebar = tree.new_node(Style::new().width(80.0)).unwrap();
//! let content = tree.new_node(Style::new().grow(1.0)).unwrap();
//! tree.add_child(root, sidebar).unwrap();
//! tree.add_child(root, content).unwrap();
//!
//! calculate_layout(&mut tree, root, 320.0, 200.0);
//! assert_eq!(tree.layout(content).unwrap().width, 240.0);
//! ```

mod absolute;
mod apply;
mod config;
mod engine;
mod error;
mod flex;
mod measure;
mod node;
mod round;
mod style;
mod tree;
mod value;

pub use absolute::layout_absolute_children;
pub use apply::{apply_layout, collect_frames};
pub use config::LayoutConfig;
pub use engine::{calculate_layout, layout_flex_container, layout_node};
pub use error::{StyleError, TreeError, ValueParseError};
pub use flex::{AlignItems, AlignSelf, Display, FlexDirection, JustifyContent, PositionType};
pub use flexure_core::{Edges, Point, Rect, Size};
pub use measure::{FixedMeasure, Measure, MeasureMode};
pub use node::{LayoutResult, Node, NodeId, ViewHandle};
pub use style::Style;
pub use tree::LayoutTree;
pub use value::{resolve, LayoutValue};
