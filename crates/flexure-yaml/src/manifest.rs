//! YAML manifest types for Flexure layouts.

use flexure_core::{Rect, Size};
use flexure_layout::{
    apply_layout, calculate_layout, FixedMeasure, LayoutConfig, LayoutTree, NodeId, Style,
    ViewHandle,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ParseError;

/// A layout tree loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutManifest {
    /// Engine configuration
    #[serde(default)]
    pub config: LayoutConfig,
    /// Root node
    pub root: NodeSpec,
}

/// One node of a manifest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    /// Name used to look the node up after building
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// View that receives this node's frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewHandle>,
    /// Layout intent
    pub style: Style,
    /// Fixed content size (leaves only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intrinsic: Option<Size>,
    /// Child nodes in sibling order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Node with the given style and nothing else.
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set the lookup id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

impl LayoutManifest {
    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Create a tree holding every node of the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, invalid styles or an intrinsic size
    /// on a node with children.
    pub fn build(&self) -> Result<BuiltLayout, ParseError> {
        let mut tree = LayoutTree::with_config(self.config);
        let mut ids = HashMap::new();
        let root = build_node(&mut tree, &self.root, &mut ids)?;
        debug!("build: {} nodes, {} named", tree.len(), ids.len());
        Ok(BuiltLayout { tree, root, ids })
    }
}

fn build_node(
    tree: &mut LayoutTree,
    spec: &NodeSpec,
    ids: &mut HashMap<String, NodeId>,
) -> Result<NodeId, ParseError> {
    let node = match spec.intrinsic {
        Some(_) if !spec.children.is_empty() => {
            let name = spec.id.clone().unwrap_or_else(|| "<anonymous>".to_string());
            return Err(ParseError::IntrinsicOnContainer(name));
        }
        Some(size) => tree.new_leaf_with_measure(spec.style, FixedMeasure(size))?,
        None => tree.new_node(spec.style)?,
    };
    tree.set_native_view(node, spec.view)?;

    if let Some(id) = &spec.id {
        if ids.insert(id.clone(), node).is_some() {
            return Err(ParseError::DuplicateId(id.clone()));
        }
    }

    for child in &spec.children {
        let child = build_node(tree, child, ids)?;
        tree.add_child(node, child)?;
    }
    Ok(node)
}

/// A manifest materialized into a [`LayoutTree`].
#[derive(Debug)]
pub struct BuiltLayout {
    /// The tree
    pub tree: LayoutTree,
    /// Root node
    pub root: NodeId,
    /// Named nodes
    pub ids: HashMap<String, NodeId>,
}

impl BuiltLayout {
    /// Node registered under `id`.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Lay the tree out in the given viewport.
    pub fn compute(&mut self, width: f32, height: f32) {
        calculate_layout(&mut self.tree, self.root, width, height);
    }

    /// Parent-relative frame of the node registered under `id`.
    #[must_use]
    pub fn frame(&self, id: &str) -> Option<Rect> {
        let node = self.node(id)?;
        self.tree.layout(node).ok().map(|layout| layout.frame())
    }

    /// Hand every view its frame.
    pub fn apply<F: FnMut(ViewHandle, Rect)>(&self, set_frame: F) {
        apply_layout(&self.tree, self.root, set_frame);
    }
}
