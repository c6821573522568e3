//! Handing computed frames to platform views.

use flexure_core::{Point, Rect};
use log::{trace, warn};

use crate::node::{NodeId, ViewHandle};
use crate::tree::LayoutTree;

/// Walk `root`'s subtree depth first and call `set_frame` for every node
/// that carries a view.
///
/// Frames are parent-relative, matching views that are nested the same way
/// as the layout tree. Nodes without a view are still descended into.
pub fn apply_layout<F>(tree: &LayoutTree, root: NodeId, mut set_frame: F)
where
    F: FnMut(ViewHandle, Rect),
{
    if !tree.is_alive(root) {
        warn!("apply_layout: stale root {root}");
        return;
    }

    let mut stack = vec![(root, Point::ORIGIN)];
    while let Some((id, parent_origin)) = stack.pop() {
        let Some(node) = tree.node(id) else {
            continue;
        };
        let frame = node.layout.frame();
        let origin = parent_origin + frame.origin();
        if let Some(view) = node.view {
            trace!(
                "apply_layout: view {} at ({}, {}) size {}x{}",
                view.0,
                origin.x,
                origin.y,
                frame.width,
                frame.height
            );
            set_frame(view, frame);
        }
        stack.extend(node.children.iter().rev().map(|&child| (child, origin)));
    }
}

/// Frames for every view under `root`, in traversal order.
#[must_use]
pub fn collect_frames(tree: &LayoutTree, root: NodeId) -> Vec<(ViewHandle, Rect)> {
    let mut frames = Vec::new();
    apply_layout(tree, root, |view, frame| frames.push((view, frame)));
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_layout;
    use crate::style::Style;

    #[test]
    fn test_preorder_with_relative_frames() {
        let mut tree = LayoutTree::new();
        let root = tree.new_node(Style::new().padding_all(10.0)).unwrap();
        let group = tree.new_node(Style::new().height(50.0)).unwrap();
        let label = tree.new_node(Style::new().height(20.0)).unwrap();
        let footer = tree.new_node(Style::new().height(10.0)).unwrap();
        tree.add_child(root, group).unwrap();
        tree.add_child(group, label).unwrap();
        tree.add_child(root, footer).unwrap();
        tree.set_native_view(root, Some(ViewHandle(1))).unwrap();
        tree.set_native_view(label, Some(ViewHandle(2))).unwrap();
        tree.set_native_view(footer, Some(ViewHandle(3))).unwrap();

        calculate_layout(&mut tree, root, 100.0, 100.0);
        let frames = collect_frames(&tree, root);

        assert_eq!(
            frames,
            vec![
                (ViewHandle(1), Rect::new(0.0, 0.0, 100.0, 100.0)),
                (ViewHandle(2), Rect::new(0.0, 0.0, 80.0, 20.0)),
                (ViewHandle(3), Rect::new(10.0, 60.0, 80.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_no_views_no_calls() {
        let mut tree = LayoutTree::new();
        let root = tree.new_node(Style::default()).unwrap();
        calculate_layout(&mut tree, root, 10.0, 10.0);
        let mut calls = 0;
        apply_layout(&tree, root, |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_stale_root_is_ignored() {
        let mut tree = LayoutTree::new();
        let root = tree.new_node(Style::default()).unwrap();
        tree.set_native_view(root, Some(ViewHandle(9))).unwrap();
        tree.remove_node(root).unwrap();
        assert!(collect_frames(&tree, root).is_empty());
    }
}
