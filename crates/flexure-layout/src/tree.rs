//! Arena that owns every layout node.
//!
//! Nodes live in slots addressed by generational [`NodeId`]s. Parent and
//! child links are ids, never owning references, so detaching a node never
//! frees its children: a removed subtree simply becomes a set of detached
//! roots that the caller may re-attach or remove.
//!
//! Every structural or style mutation marks the node and its ancestors dirty.
//! The flag is advisory; layout always recomputes the whole subtree.

use flexure_core::{Point, Rect};
use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::error::TreeError;
use crate::measure::Measure;
use crate::node::{LayoutResult, Node, NodeId, ViewHandle};
use crate::style::Style;

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Owner of a forest of layout nodes.
#[derive(Debug, Default)]
pub struct LayoutTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    config: LayoutConfig,
}

impl LayoutTree {
    /// Create an empty tree with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with the given configuration.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether the tree holds no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` refers to a live node of this tree.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Ids of every live node, in slot order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.node
                .as_ref()
                .map(|_| NodeId::new(idx as u32, slot.generation))
        })
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.node(id).ok_or(TreeError::StaleNode(id))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(TreeError::StaleNode(id))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        }
    }

    // ------------------------------------------------------------------
    // Creation and removal
    // ------------------------------------------------------------------

    /// Create a detached node.
    pub fn new_node(&mut self, style: Style) -> Result<NodeId, TreeError> {
        style.validate()?;
        Ok(self.alloc(Node::new(style)))
    }

    /// Create a detached leaf with an intrinsic measure callback.
    pub fn new_leaf_with_measure(
        &mut self,
        style: Style,
        measure: impl Measure + 'static,
    ) -> Result<NodeId, TreeError> {
        let id = self.new_node(style)?;
        self.get_mut(id)?.measure = Some(Box::new(measure));
        Ok(id)
    }

    /// Destroy a node.
    ///
    /// The node is unlinked from its parent and its children are detached
    /// (but kept alive). The id, and every copy of it, becomes stale.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.get(id)?;
        let parent = node.parent;
        let children = node.children.clone();

        if let Some(parent) = parent {
            self.get_mut(parent)?.children.retain(|&c| c != id);
            self.mark_dirty(parent)?;
        }
        for child in children {
            let child = self.get_mut(child)?;
            child.parent = None;
            child.dirty = true;
        }

        self.slots[id.idx()].node = None;
        self.free.push(id.0);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append `child` to `parent`, detaching it from any previous parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let len = self.get(parent)?.children.len();
        let already_here = self.get(child)?.parent == Some(parent);
        let index = if already_here { len - 1 } else { len };
        self.insert_child(parent, child, index)
    }

    /// Insert `child` at `index` among `parent`'s children, detaching it from
    /// any previous parent first.
    ///
    /// `index` is interpreted after the detach, so moving a child within the
    /// same parent uses indices of the list without it.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: usize,
    ) -> Result<(), TreeError> {
        if parent == child {
            return Err(TreeError::SelfChild(child));
        }
        let parent_node = self.get(parent)?;
        let old_parent = self.get(child)?.parent;

        let mut len = parent_node.children.len();
        if old_parent == Some(parent) {
            len -= 1;
        }
        if index > len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }

        let mut cursor = Some(parent);
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(TreeError::WouldCycle { parent, child });
            }
            cursor = self.get(ancestor)?.parent;
        }

        if let Some(old) = old_parent {
            self.get_mut(old)?.children.retain(|&c| c != child);
            self.mark_dirty(old)?;
        }

        self.get_mut(parent)?.children.insert(index, child);
        let child_node = self.get_mut(child)?;
        child_node.parent = Some(parent);
        child_node.dirty = true;
        self.mark_dirty(parent)
    }

    /// Detach `child` from `parent`. The child stays alive as a detached root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.get_mut(parent)?;
        let Some(pos) = parent_node.children.iter().position(|&c| c == child) else {
            return Err(TreeError::NotAChild { parent, child });
        };
        parent_node.children.remove(pos);

        let child_node = self.get_mut(child)?;
        child_node.parent = None;
        child_node.dirty = true;
        self.mark_dirty(parent)
    }

    /// Detach every child of `parent`.
    pub fn remove_all_children(&mut self, parent: NodeId) -> Result<(), TreeError> {
        let children = std::mem::take(&mut self.get_mut(parent)?.children);
        for child in children {
            let child_node = self.get_mut(child)?;
            child_node.parent = None;
            child_node.dirty = true;
        }
        self.mark_dirty(parent)
    }

    /// Parent of `id`, if attached.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.get(id)?.parent)
    }

    /// Children of `id` in sibling order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(&self.get(id)?.children)
    }

    /// Number of children of `id`.
    pub fn child_count(&self, id: NodeId) -> Result<usize, TreeError> {
        Ok(self.get(id)?.children.len())
    }

    /// Child of `id` at `index`.
    pub fn child_at(&self, id: NodeId, index: usize) -> Result<NodeId, TreeError> {
        let children = &self.get(id)?.children;
        children
            .get(index)
            .copied()
            .ok_or(TreeError::IndexOutOfBounds {
                index,
                len: children.len(),
            })
    }

    /// Move the subtree rooted at `root` out of `other` and into this tree.
    ///
    /// Styles, measure callbacks, views and last results travel with the
    /// nodes. The returned id is a detached root; ids from `other` are not
    /// valid here. Nodes of `other` outside the subtree are dropped with it.
    pub fn adopt(&mut self, mut other: Self, root: NodeId) -> Result<NodeId, TreeError> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(other.get(id)?.children.iter().rev().copied());
        }

        let mut mapping: HashMap<NodeId, NodeId> = HashMap::with_capacity(order.len());
        for &old in &order {
            let node = other.slots[old.idx()]
                .node
                .take()
                .ok_or(TreeError::StaleNode(old))?;
            mapping.insert(old, self.alloc(node));
        }

        for new in mapping.values().copied() {
            let node = self.get_mut(new)?;
            node.children = node
                .children
                .iter()
                .filter_map(|c| mapping.get(c).copied())
                .collect();
            node.parent = node.parent.and_then(|p| mapping.get(&p).copied());
            node.dirty = true;
        }

        mapping.get(&root).copied().ok_or(TreeError::StaleNode(root))
    }

    // ------------------------------------------------------------------
    // Node data
    // ------------------------------------------------------------------

    /// Style of `id`.
    pub fn style(&self, id: NodeId) -> Result<&Style, TreeError> {
        Ok(&self.get(id)?.style)
    }

    /// Replace the style of `id` after validating it.
    ///
    /// Marks the whole subtree of `id` dirty, along with its ancestors.
    pub fn set_style(&mut self, id: NodeId, style: Style) -> Result<(), TreeError> {
        style.validate()?;
        self.get_mut(id)?.style = style;
        self.mark_subtree_dirty(id)?;
        self.mark_dirty(id)
    }

    /// Attach or clear an intrinsic measure callback.
    pub fn set_measure_func(
        &mut self,
        id: NodeId,
        measure: Option<Box<dyn Measure>>,
    ) -> Result<(), TreeError> {
        self.get_mut(id)?.measure = measure;
        self.mark_dirty(id)
    }

    /// Attach or clear the native view that receives this node's frame.
    pub fn set_native_view(
        &mut self,
        id: NodeId,
        view: Option<ViewHandle>,
    ) -> Result<(), TreeError> {
        self.get_mut(id)?.view = view;
        Ok(())
    }

    /// Native view attached to `id`.
    pub fn native_view(&self, id: NodeId) -> Result<Option<ViewHandle>, TreeError> {
        Ok(self.get(id)?.view)
    }

    /// Flag `id` and all of its ancestors as needing layout.
    pub fn mark_dirty(&mut self, id: NodeId) -> Result<(), TreeError> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get_mut(current)?;
            node.dirty = true;
            cursor = node.parent;
        }
        Ok(())
    }

    fn mark_subtree_dirty(&mut self, id: NodeId) -> Result<(), TreeError> {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.get_mut(current)?;
            node.dirty = true;
            stack.extend(node.children.iter().copied());
        }
        Ok(())
    }

    /// Advisory dirty flag of `id`.
    pub fn is_dirty(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(self.get(id)?.dirty)
    }

    // ------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------

    /// Most recently computed geometry of `id`.
    pub fn layout(&self, id: NodeId) -> Result<&LayoutResult, TreeError> {
        Ok(&self.get(id)?.layout)
    }

    /// Frame of `id` in the coordinate space of its topmost ancestor.
    pub fn absolute_frame(&self, id: NodeId) -> Result<Rect, TreeError> {
        let node = self.get(id)?;
        let mut offset = Point::ORIGIN;
        let mut cursor = node.parent;
        while let Some(ancestor) = cursor {
            let ancestor = self.get(ancestor)?;
            offset = offset + Point::new(ancestor.layout.left, ancestor.layout.top);
            cursor = ancestor.parent;
        }
        Ok(node.layout.frame().translate(offset))
    }
}
