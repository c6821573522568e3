//! Placement of absolutely positioned children.
//!
//! Absolute children are sized and offset against the parent's full box
//! (width x height including padding), not its content box.

use log::trace;

use crate::engine::{hide_subtree, layout_assigned, resolve_edges};
use crate::error::TreeError;
use crate::flex::{Display, PositionType};
use crate::measure::MeasureMode;
use crate::node::{LayoutResult, NodeId};
use crate::tree::LayoutTree;

/// Size and place every absolute child of `parent`, then lay out their
/// subtrees.
///
/// A leading edge (`left`/`top`) wins over a trailing one; with neither the
/// child sits at the parent's origin. Flow siblings are never affected.
pub fn layout_absolute_children(tree: &mut LayoutTree, parent: NodeId) -> Result<(), TreeError> {
    let mut pending = Vec::new();
    place_absolute_children(tree, parent, &mut pending)?;
    layout_assigned(tree, pending)
}

/// Size and place the absolute children of `parent`, pushing those with
/// children of their own onto `pending`.
pub(crate) fn place_absolute_children(
    tree: &mut LayoutTree,
    parent: NodeId,
    pending: &mut Vec<NodeId>,
) -> Result<(), TreeError> {
    let parent_node = tree.get(parent)?;
    let parent_width = parent_node.layout.width;
    let parent_height = parent_node.layout.height;

    let absolute: Vec<NodeId> = parent_node
        .children
        .iter()
        .copied()
        .filter(|&child| {
            tree.node(child)
                .is_some_and(|n| n.style.position_type == PositionType::Absolute)
        })
        .collect();

    for child in absolute {
        let node = tree.get(child)?;
        let style = &node.style;
        if style.display == Display::None {
            hide_subtree(tree, child)?;
            continue;
        }

        let position = resolve_edges(&style.position, parent_width, parent_height);
        let margin = resolve_edges(&style.margin, parent_width, parent_height);
        let left_edge = style.position.left.is_defined().then_some(position.left);
        let right_edge = style.position.right.is_defined().then_some(position.right);
        let top_edge = style.position.top.is_defined().then_some(position.top);
        let bottom_edge = style.position.bottom.is_defined().then_some(position.bottom);

        let explicit_width = style.width.resolve_defined(parent_width);
        let explicit_height = style.height.resolve_defined(parent_height);
        let mut width = explicit_width
            .or_else(|| style.aspect_dimension(true, explicit_height))
            .or_else(|| {
                left_edge
                    .zip(right_edge)
                    .map(|(l, r)| parent_width - l - r - margin.horizontal())
            });
        let mut height = explicit_height
            .or_else(|| style.aspect_dimension(false, explicit_width))
            .or_else(|| {
                top_edge
                    .zip(bottom_edge)
                    .map(|(t, b)| parent_height - t - b - margin.vertical())
            });

        if width.is_none() || height.is_none() {
            if let (Some(measure), true) = (&node.measure, node.children.is_empty()) {
                let (w, w_mode) = width.map_or((parent_width, MeasureMode::AtMost), |w| {
                    (w, MeasureMode::Exactly)
                });
                let (h, h_mode) = height.map_or((parent_height, MeasureMode::AtMost), |h| {
                    (h, MeasureMode::Exactly)
                });
                let size = measure.measure(w, w_mode, h, h_mode);
                width = width.or(Some(size.width));
                height = height.or(Some(size.height));
            }
        }

        let width = style.clamp(true, width.unwrap_or(0.0), parent_width);
        let height = style.clamp(false, height.unwrap_or(0.0), parent_height);

        let left = match (left_edge, right_edge) {
            (Some(l), _) => l + margin.left,
            (None, Some(r)) => parent_width - width - r - margin.right,
            (None, None) => margin.left,
        };
        let top = match (top_edge, bottom_edge) {
            (Some(t), _) => t + margin.top,
            (None, Some(b)) => parent_height - height - b - margin.bottom,
            (None, None) => margin.top,
        };
        let padding = resolve_edges(&style.padding, width, height);
        let has_children = !node.children.is_empty();
        trace!("layout_absolute_children: {child} at {left},{top} size {width}x{height}");

        let node = tree.get_mut(child)?;
        node.layout = LayoutResult {
            left,
            top,
            width,
            height,
            padding,
        };
        node.dirty = false;

        if has_children {
            pending.push(child);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_layout;
    use crate::style::Style;
    use crate::value::LayoutValue;
    use crate::FixedMeasure;
    use flexure_core::Edges;

    fn frame(tree: &LayoutTree, id: NodeId) -> (f32, f32, f32, f32) {
        let l = tree.layout(id).unwrap();
        (l.left, l.top, l.width, l.height)
    }

    fn with_overlay(style: Style) -> (LayoutTree, NodeId, NodeId) {
        let mut tree = LayoutTree::new();
        let root = tree.new_node(Style::new().padding_all(10.0)).unwrap();
        let overlay = tree.new_node(style.absolute()).unwrap();
        tree.add_child(root, overlay).unwrap();
        calculate_layout(&mut tree, root, 200.0, 100.0);
        (tree, root, overlay)
    }

    #[test]
    fn test_defaults_to_origin() {
        let (tree, _, overlay) = with_overlay(Style::new().size(20.0, 20.0));
        assert_eq!(frame(&tree, overlay), (0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_leading_edges() {
        let edges = Edges::new(
            LayoutValue::points(5.0),
            LayoutValue::points(7.0),
            LayoutValue::Undefined,
            LayoutValue::Undefined,
        );
        let (tree, _, overlay) = with_overlay(Style::new().size(20.0, 20.0).position(edges));
        assert_eq!(frame(&tree, overlay), (5.0, 7.0, 20.0, 20.0));
    }

    #[test]
    fn test_trailing_edges() {
        let edges = Edges::new(
            LayoutValue::Undefined,
            LayoutValue::Undefined,
            LayoutValue::points(5.0),
            LayoutValue::points(10.0),
        );
        let (tree, _, overlay) = with_overlay(Style::new().size(20.0, 20.0).position(edges));
        assert_eq!(frame(&tree, overlay), (175.0, 70.0, 20.0, 20.0));
    }

    #[test]
    fn test_leading_wins_over_trailing() {
        let edges = Edges::new(
            LayoutValue::points(1.0),
            LayoutValue::Undefined,
            LayoutValue::points(50.0),
            LayoutValue::Undefined,
        );
        let (tree, _, overlay) = with_overlay(Style::new().width(20.0).position(edges));
        assert_eq!(tree.layout(overlay).unwrap().left, 1.0);
        assert_eq!(tree.layout(overlay).unwrap().width, 20.0);
    }

    #[test]
    fn test_percent_size_uses_full_parent_box() {
        let (tree, _, overlay) = with_overlay(
            Style::new().size(LayoutValue::percent(50.0), LayoutValue::percent(100.0)),
        );
        assert_eq!(frame(&tree, overlay), (0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_stretches_between_opposite_edges() {
        let (tree, _, overlay) =
            with_overlay(Style::new().position(Edges::uniform(LayoutValue::points(10.0))));
        assert_eq!(frame(&tree, overlay), (10.0, 10.0, 180.0, 80.0));
    }

    #[test]
    fn test_measured_absolute_leaf() {
        let mut tree = LayoutTree::new();
        let root = tree.new_node(Style::default()).unwrap();
        let badge = tree
            .new_leaf_with_measure(Style::new().absolute(), FixedMeasure::new(24.0, 300.0))
            .unwrap();
        tree.add_child(root, badge).unwrap();
        calculate_layout(&mut tree, root, 200.0, 100.0);
        assert_eq!(frame(&tree, badge), (0.0, 0.0, 24.0, 100.0));
    }

    #[test]
    fn test_absolute_child_lays_out_descendants() {
        let mut tree = LayoutTree::new();
        let root = tree.new_node(Style::default()).unwrap();
        let panel = tree
            .new_node(Style::new().absolute().size(50.0, 50.0).padding_all(5.0))
            .unwrap();
        let row = tree.new_node(Style::new().grow(1.0)).unwrap();
        tree.add_child(root, panel).unwrap();
        tree.add_child(panel, row).unwrap();

        calculate_layout(&mut tree, root, 200.0, 100.0);
        assert_eq!(frame(&tree, row), (5.0, 5.0, 40.0, 40.0));
    }

    #[test]
    fn test_absolute_pass_alone_leaves_flow_untouched() {
        let mut tree = LayoutTree::new();
        let root = tree.new_node(Style::default()).unwrap();
        let body = tree.new_node(Style::new().height(30.0)).unwrap();
        let sheet = tree
            .new_node(Style::new().absolute().size(LayoutValue::percent(100.0), 40.0))
            .unwrap();
        let handle = tree.new_node(Style::new().height(4.0)).unwrap();
        tree.add_child(root, body).unwrap();
        tree.add_child(root, sheet).unwrap();
        tree.add_child(sheet, handle).unwrap();
        calculate_layout(&mut tree, root, 100.0, 100.0);

        tree.get_mut(root).unwrap().layout.width = 60.0;
        layout_absolute_children(&mut tree, root).unwrap();
        assert_eq!(frame(&tree, sheet), (0.0, 0.0, 60.0, 40.0));
        assert_eq!(frame(&tree, handle), (0.0, 0.0, 60.0, 4.0));
        assert_eq!(frame(&tree, body), (0.0, 0.0, 100.0, 30.0));
    }

    #[test]
    fn test_hidden_absolute_child_is_zeroed() {
        let (tree, _, overlay) = with_overlay(Style::new().size(20.0, 20.0).hidden());
        assert_eq!(frame(&tree, overlay), (0.0, 0.0, 0.0, 0.0));
    }
}
