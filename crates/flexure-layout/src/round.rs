//! Snapping computed geometry to the physical pixel grid.
//!
//! Edges are rounded in absolute coordinates and converted back to
//! parent-relative offsets, so adjacent siblings never open a one-pixel seam
//! or overlap after rounding.

use flexure_core::Edges;
use log::trace;

use crate::error::TreeError;
use crate::node::NodeId;
use crate::tree::LayoutTree;

fn snap(value: f32, scale: f32) -> f32 {
    (value * scale).round() / scale
}

/// Round every box under `root` to multiples of `1 / scale`.
pub(crate) fn round_to_pixel_grid(
    tree: &mut LayoutTree,
    root: NodeId,
    scale: f32,
) -> Result<(), TreeError> {
    trace!("round_to_pixel_grid: {root} at scale {scale}");
    // (node, unrounded absolute origin of parent, rounded absolute origin of parent)
    let mut stack = vec![(root, (0.0, 0.0), (0.0, 0.0))];
    while let Some((id, (parent_left, parent_top), (snapped_parent_left, snapped_parent_top))) =
        stack.pop()
    {
        let node = tree.get_mut(id)?;
        let layout = node.layout;
        let abs_left = parent_left + layout.left;
        let abs_top = parent_top + layout.top;

        let left = snap(abs_left, scale);
        let top = snap(abs_top, scale);
        let right = snap(abs_left + layout.width, scale);
        let bottom = snap(abs_top + layout.height, scale);

        node.layout.left = left - snapped_parent_left;
        node.layout.top = top - snapped_parent_top;
        node.layout.width = right - left;
        node.layout.height = bottom - top;
        node.layout.padding = Edges::new(
            snap(layout.padding.left, scale),
            snap(layout.padding.top, scale),
            snap(layout.padding.right, scale),
            snap(layout.padding.bottom, scale),
        );

        for &child in node.children.iter().rev() {
            stack.push((child, (abs_left, abs_top), (left, top)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::engine::calculate_layout;
    use crate::flex::FlexDirection;
    use crate::style::Style;

    fn thirds(scale: f32) -> (LayoutTree, Vec<NodeId>) {
        let mut tree = LayoutTree::with_config(LayoutConfig::with_point_scale_factor(scale));
        let root = tree
            .new_node(Style::new().direction(FlexDirection::Row))
            .unwrap();
        let kids: Vec<NodeId> = (0..3)
            .map(|_| {
                let id = tree.new_node(Style::new().grow(1.0)).unwrap();
                tree.add_child(root, id).unwrap();
                id
            })
            .collect();
        calculate_layout(&mut tree, root, 100.0, 10.0);
        (tree, kids)
    }

    #[test]
    fn test_snap() {
        assert_eq!(snap(10.4, 1.0), 10.0);
        assert_eq!(snap(10.6, 1.0), 11.0);
        assert_eq!(snap(10.3, 2.0), 10.5);
    }

    #[test]
    fn test_rounded_siblings_tile_without_gaps() {
        let (tree, kids) = thirds(1.0);
        let frames: Vec<_> = kids.iter().map(|&k| *tree.layout(k).unwrap()).collect();
        assert_eq!(frames[0].left, 0.0);
        assert_eq!(frames[0].right(), frames[1].left);
        assert_eq!(frames[1].right(), frames[2].left);
        assert_eq!(frames[2].right(), 100.0);
        for frame in &frames {
            assert_eq!(frame.left.fract(), 0.0);
            assert_eq!(frame.width.fract(), 0.0);
        }
    }

    #[test]
    fn test_half_point_grid() {
        let (tree, kids) = thirds(2.0);
        let width = tree.layout(kids[0]).unwrap().width;
        assert_eq!((width * 2.0).fract(), 0.0);
        assert_eq!(width, 33.5);
    }

    #[test]
    fn test_rounding_off_keeps_fractions() {
        let (tree, kids) = thirds(0.0);
        let width = tree.layout(kids[0]).unwrap().width;
        assert!((width - 100.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_nested_offsets_stay_relative() {
        let mut tree = LayoutTree::with_config(LayoutConfig::with_point_scale_factor(1.0));
        let root = tree.new_node(Style::new().padding_all(0.4)).unwrap();
        let inner = tree.new_node(Style::new().height(10.0).padding_all(0.4)).unwrap();
        let leaf = tree.new_node(Style::new().height(5.0)).unwrap();
        tree.add_child(root, inner).unwrap();
        tree.add_child(inner, leaf).unwrap();
        calculate_layout(&mut tree, root, 20.0, 20.0);

        let inner_layout = *tree.layout(inner).unwrap();
        let leaf_layout = *tree.layout(leaf).unwrap();
        assert_eq!(inner_layout.left, 0.0);
        assert_eq!(inner_layout.top, 0.0);
        // unrounded absolute left is 0.8
        assert_eq!(leaf_layout.left, 1.0);
        assert_eq!(inner_layout.padding.left, 0.0);
    }
}
