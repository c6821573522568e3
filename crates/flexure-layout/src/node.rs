//! Node identity, per-node storage and computed results.

use flexure_core::{Edges, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::measure::Measure;
use crate::style::Style;

/// Identifier for a node in a [`LayoutTree`](crate::LayoutTree).
///
/// A slot index plus a generation counter. Removing a node frees its slot;
/// when the slot is reused the generation increments, so an id held across a
/// removal never aliases the new occupant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0, self.1)
    }
}

/// Opaque handle to a platform view that receives frames.
///
/// The engine never interprets the value; it is handed back verbatim to the
/// frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewHandle(pub u64);

/// Computed geometry of a node.
///
/// `left`/`top` are relative to the parent's origin. Values are stale until
/// `calculate_layout` visits the node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Offset from the parent's left edge
    pub left: f32,
    /// Offset from the parent's top edge
    pub top: f32,
    /// Resolved width
    pub width: f32,
    /// Resolved height
    pub height: f32,
    /// Resolved padding in pixels
    pub padding: Edges<f32>,
}

impl LayoutResult {
    /// Width minus horizontal padding.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.width - self.padding.horizontal()
    }

    /// Height minus vertical padding.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.height - self.padding.vertical()
    }

    /// `left + width`.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// `top + height`.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Parent-relative frame.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Parent-relative frame of the content box (padding removed).
    #[must_use]
    pub fn content_frame(&self) -> Rect {
        self.frame().inset(&self.padding)
    }
}

/// A node of the layout tree.
///
/// Links to parent and children are ids into the owning tree; the tree holds
/// the storage for every node.
pub struct Node {
    pub(crate) style: Style,
    pub(crate) layout: LayoutResult,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) measure: Option<Box<dyn Measure>>,
    pub(crate) view: Option<ViewHandle>,
    pub(crate) dirty: bool,
}

impl Node {
    pub(crate) fn new(style: Style) -> Self {
        Self {
            style,
            layout: LayoutResult::default(),
            children: Vec::new(),
            parent: None,
            measure: None,
            view: None,
            dirty: true,
        }
    }

    /// Layout intent.
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Most recently computed geometry.
    #[must_use]
    pub const fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Child ids in sibling order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id, if attached.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Attached native view.
    #[must_use]
    pub const fn view(&self) -> Option<ViewHandle> {
        self.view
    }

    /// Whether an intrinsic measure callback is attached.
    #[must_use]
    pub const fn has_measure_func(&self) -> bool {
        self.measure.is_some()
    }

    /// Advisory dirty flag.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("style", &self.style)
            .field("layout", &self.layout)
            .field("children", &self.children)
            .field("parent", &self.parent)
            .field("measure", &self.measure.is_some())
            .field("view", &self.view)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_result_derived_edges() {
        let layout = LayoutResult {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
            padding: Edges::new(1.0, 2.0, 3.0, 4.0),
        };
        assert_eq!(layout.right(), 110.0);
        assert_eq!(layout.bottom(), 70.0);
        assert_eq!(layout.content_width(), 96.0);
        assert_eq!(layout.content_height(), 44.0);
        assert_eq!(layout.frame(), Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(layout.content_frame(), Rect::new(11.0, 22.0, 96.0, 44.0));
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(3, 2).to_string(), "#3v2");
    }

    #[test]
    fn test_new_node_starts_dirty_and_detached() {
        let node = Node::new(Style::default());
        assert!(node.is_dirty());
        assert!(node.parent().is_none());
        assert!(node.children().is_empty());
        assert!(!node.has_measure_func());
        assert!(node.view().is_none());
    }

    #[test]
    fn test_view_handle_serializes_transparently() {
        assert_eq!(serde_json::to_string(&ViewHandle(7)).unwrap(), "7");
    }
}
