//! Flex layout algorithm.
//!
//! Layout is a single top-down pass. The root box is resolved from the
//! available size, then each container distributes its flow children along
//! the main axis and positions them on the cross axis. Absolutely
//! positioned children are placed afterwards against the container's
//! resolved box. Placed children that have children of their own go onto a
//! work list and are laid out the same way.
//!
//! Every entry point is a free function over an explicit [`LayoutTree`];
//! nothing is cached between calls, so two passes with the same input give
//! identical results.

use flexure_core::Edges;
use log::{debug, trace, warn};

use crate::absolute::place_absolute_children;
use crate::error::TreeError;
use crate::flex::{AlignItems, Display, JustifyContent, PositionType};
use crate::measure::MeasureMode;
use crate::node::{LayoutResult, Node, NodeId};
use crate::round::round_to_pixel_grid;
use crate::tree::LayoutTree;
use crate::value::LayoutValue;

/// Compute geometry for `root` and its whole subtree.
///
/// The available size is always offered in [`MeasureMode::Exactly`]. A stale
/// `root` is logged and ignored.
pub fn calculate_layout(
    tree: &mut LayoutTree,
    root: NodeId,
    available_width: f32,
    available_height: f32,
) {
    if !tree.is_alive(root) {
        warn!("calculate_layout: stale root {root}");
        return;
    }
    debug!(
        "calculate_layout: root {root} available {available_width}x{available_height} ({} nodes)",
        tree.len()
    );

    if let Err(err) = run_pass(tree, root, available_width, available_height) {
        warn!("calculate_layout: aborted, {err}");
        return;
    }

    if let Ok(layout) = tree.layout(root) {
        debug!(
            "calculate_layout: root {root} resolved to {}x{}",
            layout.width, layout.height
        );
    }
}

fn run_pass(
    tree: &mut LayoutTree,
    root: NodeId,
    available_width: f32,
    available_height: f32,
) -> Result<(), TreeError> {
    if tree.get(root)?.parent.is_none() {
        let layout = &mut tree.get_mut(root)?.layout;
        layout.left = 0.0;
        layout.top = 0.0;
    }

    layout_node(
        tree,
        root,
        available_width,
        MeasureMode::Exactly,
        available_height,
        MeasureMode::Exactly,
    )?;

    let config = *tree.config();
    if config.rounding_enabled() {
        round_to_pixel_grid(tree, root, config.point_scale_factor)?;
    }
    Ok(())
}

/// Resolve one node's own box, then lay out its children.
///
/// Width and height come from style when defined, otherwise from the
/// available size when the mode is `Exactly` or `AtMost`. Each axis is
/// clamped min first, max second. A leaf with a measure callback adopts the
/// size the callback reports.
pub fn layout_node(
    tree: &mut LayoutTree,
    id: NodeId,
    available_width: f32,
    width_mode: MeasureMode,
    available_height: f32,
    height_mode: MeasureMode,
) -> Result<(), TreeError> {
    let node = tree.get(id)?;
    if node.style.display == Display::None {
        return hide_subtree(tree, id);
    }
    let style = &node.style;

    let explicit_width = style.width.resolve_defined(available_width);
    let explicit_height = style.height.resolve_defined(available_height);

    let width = explicit_width
        .or_else(|| style.aspect_dimension(true, explicit_height))
        .or_else(|| offered(available_width, width_mode))
        .unwrap_or(0.0);
    let width = style.clamp(true, width, available_width);

    let height = explicit_height
        .or_else(|| style.aspect_dimension(false, explicit_width))
        .or_else(|| offered(available_height, height_mode))
        .unwrap_or(0.0);
    let height = style.clamp(false, height, available_height);

    // Padding resolves against the styled box, before a measured leaf
    // replaces it.
    let padding = resolve_edges(&style.padding, width, height);
    let (width, height) = match (&node.measure, node.children.is_empty()) {
        (Some(measure), true) => {
            let size = measure.measure(width, width_mode, height, height_mode);
            (size.width, size.height)
        }
        _ => (width, height),
    };
    trace!("layout_node: {id} -> {width}x{height}");

    let node = tree.get_mut(id)?;
    node.layout.width = width;
    node.layout.height = height;
    node.layout.padding = padding;
    node.dirty = false;

    layout_assigned(tree, vec![id])
}

fn offered(available: f32, mode: MeasureMode) -> Option<f32> {
    match mode {
        MeasureMode::Exactly | MeasureMode::AtMost => Some(available),
        MeasureMode::Undefined => None,
    }
}

/// A flow child between the measuring and placing passes.
struct FlowItem {
    id: NodeId,
    base_main: f32,
    margin: Edges<f32>,
}

/// Distribute a container's flow children along its main axis, then lay out
/// their subtrees.
///
/// The container's own box and padding must already be resolved. Children
/// that are absolutely positioned are skipped here; hidden children are
/// zeroed.
pub fn layout_flex_container(tree: &mut LayoutTree, id: NodeId) -> Result<(), TreeError> {
    let mut pending = Vec::new();
    place_flow_children(tree, id, &mut pending)?;
    layout_assigned(tree, pending)
}

/// Lay out everything below the nodes in `pending`, whose own boxes are
/// already assigned.
///
/// Depth is bounded by memory, not by the call stack.
pub(crate) fn layout_assigned(
    tree: &mut LayoutTree,
    mut pending: Vec<NodeId>,
) -> Result<(), TreeError> {
    while let Some(id) = pending.pop() {
        place_flow_children(tree, id, &mut pending)?;
        place_absolute_children(tree, id, &mut pending)?;
    }
    Ok(())
}

/// Size and place the flow children of `id`. Children that have children
/// of their own are pushed onto `pending`.
fn place_flow_children(
    tree: &mut LayoutTree,
    id: NodeId,
    pending: &mut Vec<NodeId>,
) -> Result<(), TreeError> {
    let container = tree.get(id)?;
    let style = container.style;
    let layout = container.layout;
    let is_row = style.flex_direction.is_row();

    let content_width = layout.content_width();
    let content_height = layout.content_height();
    let (main_size, cross_size) = if is_row {
        (content_width, content_height)
    } else {
        (content_height, content_width)
    };

    let mut flow = Vec::with_capacity(container.children.len());
    let mut hidden = Vec::new();
    for &child in &container.children {
        let child_node = tree.get(child)?;
        if child_node.style.display == Display::None {
            hidden.push(child);
        } else if child_node.style.position_type == PositionType::Relative {
            flow.push(child);
        }
    }
    for child in hidden {
        hide_subtree(tree, child)?;
    }
    if flow.is_empty() {
        return Ok(());
    }

    let count = flow.len();
    let total_gap = style.gap * (count - 1) as f32;

    let mut items = Vec::with_capacity(count);
    let mut total_flex_grow = 0.0;
    let mut total_fixed_size = 0.0;
    for child in flow {
        let child_node = tree.get(child)?;
        let margin = resolve_edges(&child_node.style.margin, content_width, content_height);
        let (main_lead, main_trail) = axis_margins(&margin, is_row);
        let (cross_lead, cross_trail) = axis_margins(&margin, !is_row);
        let remaining_so_far = main_size - total_fixed_size - main_lead - main_trail;
        let base_main = base_main_size(
            child_node,
            is_row,
            main_size,
            cross_size,
            cross_size - cross_lead - cross_trail,
            remaining_so_far,
        );

        total_flex_grow += child_node.style.flex_grow;
        total_fixed_size += base_main + main_lead + main_trail;
        items.push(FlowItem {
            id: child,
            base_main,
            margin,
        });
    }

    let remaining_space = main_size - total_fixed_size - total_gap;
    let flex_grow_unit = if total_flex_grow > 0.0 && remaining_space > 0.0 {
        remaining_space / total_flex_grow
    } else {
        0.0
    };
    let (leading_space, between_space) = if total_flex_grow <= 0.0 && remaining_space > 0.0 {
        justify_spacing(style.justify_content, remaining_space, count)
    } else {
        (0.0, 0.0)
    };
    trace!(
        "layout_flex_container: {id} main {main_size} cross {cross_size} \
         remaining {remaining_space} grow unit {flex_grow_unit}"
    );

    if style.flex_direction.is_reverse() {
        items.reverse();
    }

    let (main_padding, cross_padding) = if is_row {
        (layout.padding.left, layout.padding.top)
    } else {
        (layout.padding.top, layout.padding.left)
    };

    let mut main_offset = leading_space;
    for (index, item) in items.iter().enumerate() {
        let child_node = tree.get(item.id)?;
        let child_style = &child_node.style;
        let (main_lead, main_trail) = axis_margins(&item.margin, is_row);
        let (cross_lead, cross_trail) = axis_margins(&item.margin, !is_row);

        let mut main = item.base_main;
        if child_style.flex_grow > 0.0 && flex_grow_unit > 0.0 {
            main += child_style.flex_grow * flex_grow_unit;
        }
        let main = child_style.clamp(is_row, main, main_size);

        let align = child_style.align_self.resolve(style.align_items);
        let cross_available = cross_size - cross_lead - cross_trail;
        let cross = if align == AlignItems::Stretch {
            cross_available
        } else {
            intrinsic_cross_size(child_node, is_row, main, cross_size, cross_available)
        };
        let cross = child_style.clamp(!is_row, cross, cross_size);

        let cross_offset = match align {
            AlignItems::FlexStart | AlignItems::Stretch => 0.0,
            AlignItems::FlexEnd => cross_available - cross,
            AlignItems::Center => (cross_available - cross) / 2.0,
        };

        let main_pos = main_padding + main_offset + main_lead;
        let cross_pos = cross_padding + cross_lead + cross_offset;
        let (left, top, width, height) = if is_row {
            (main_pos, cross_pos, main, cross)
        } else {
            (cross_pos, main_pos, cross, main)
        };
        let padding = resolve_edges(&child_style.padding, width, height);
        let has_children = !child_node.children.is_empty();

        let child = tree.get_mut(item.id)?;
        child.layout = LayoutResult {
            left,
            top,
            width,
            height,
            padding,
        };
        child.dirty = false;

        if has_children {
            pending.push(item.id);
        }

        main_offset += main_lead + main + main_trail + style.gap;
        if index + 1 < count {
            main_offset += between_space;
        }
    }
    Ok(())
}

/// Main size before growing: explicit, derived from the aspect ratio, or
/// measured with both axes `AtMost`.
fn base_main_size(
    node: &Node,
    is_row: bool,
    main_size: f32,
    cross_size: f32,
    cross_available: f32,
    remaining: f32,
) -> f32 {
    let style = &node.style;
    if let Some(main) = style.dimension(is_row).resolve_defined(main_size) {
        return main;
    }
    let explicit_cross = style.dimension(!is_row).resolve_defined(cross_size);
    if let Some(main) = style.aspect_dimension(is_row, explicit_cross) {
        return main;
    }
    let Some(measure) = &node.measure else {
        return 0.0;
    };

    let available_main = remaining.max(0.0);
    if is_row {
        measure
            .measure(
                available_main,
                MeasureMode::AtMost,
                cross_available,
                MeasureMode::AtMost,
            )
            .width
    } else {
        measure
            .measure(
                cross_available,
                MeasureMode::AtMost,
                available_main,
                MeasureMode::AtMost,
            )
            .height
    }
}

/// Cross size of a non-stretched child: explicit, derived from the aspect
/// ratio, or measured with the main axis fixed. Anything else takes the
/// whole cross space left after its margins.
fn intrinsic_cross_size(
    node: &Node,
    is_row: bool,
    main: f32,
    cross_size: f32,
    cross_available: f32,
) -> f32 {
    let style = &node.style;
    if let Some(cross) = style.dimension(!is_row).resolve_defined(cross_size) {
        return cross;
    }
    if let Some(cross) = style.aspect_dimension(!is_row, Some(main)) {
        return cross;
    }
    let Some(measure) = &node.measure else {
        return cross_available;
    };

    if is_row {
        measure
            .measure(
                main,
                MeasureMode::Exactly,
                cross_available,
                MeasureMode::AtMost,
            )
            .height
    } else {
        measure
            .measure(
                cross_available,
                MeasureMode::AtMost,
                main,
                MeasureMode::Exactly,
            )
            .width
    }
}

/// Offset before the first child and extra space between consecutive
/// children for a given leftover.
pub(crate) fn justify_spacing(justify: JustifyContent, remaining: f32, count: usize) -> (f32, f32) {
    let n = count as f32;
    match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::FlexEnd => (remaining, 0.0),
        JustifyContent::Center => (remaining / 2.0, 0.0),
        JustifyContent::SpaceBetween if count > 1 => (0.0, remaining / (n - 1.0)),
        JustifyContent::SpaceBetween => (0.0, 0.0),
        JustifyContent::SpaceAround => (remaining / (2.0 * n), remaining / n),
        JustifyContent::SpaceEvenly => (remaining / (n + 1.0), remaining / (n + 1.0)),
    }
}

/// Leading and trailing edge along the horizontal or vertical axis.
const fn axis_margins(margin: &Edges<f32>, horizontal: bool) -> (f32, f32) {
    if horizontal {
        (margin.left, margin.right)
    } else {
        (margin.top, margin.bottom)
    }
}

/// Resolve left/right against `width` and top/bottom against `height`.
pub(crate) fn resolve_edges(edges: &Edges<LayoutValue>, width: f32, height: f32) -> Edges<f32> {
    Edges::new(
        edges.left.resolve(width),
        edges.top.resolve(height),
        edges.right.resolve(width),
        edges.bottom.resolve(height),
    )
}

/// Zero the geometry of a hidden node and everything below it.
pub(crate) fn hide_subtree(tree: &mut LayoutTree, id: NodeId) -> Result<(), TreeError> {
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        let node = tree.get_mut(current)?;
        node.layout = LayoutResult::default();
        node.dirty = false;
        stack.extend(node.children.iter().copied());
    }
    Ok(())
}
