//! Error types for manifest loading.

use flexure_layout::TreeError;
use thiserror::Error;

/// Error type for manifest parsing and tree construction.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML syntax or shape error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// The tree rejected a node, usually an invalid style
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
    /// Two nodes share an id
    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
    /// A node with children also declares an intrinsic size
    #[error("Node '{0}' has children and cannot have an intrinsic size")]
    IntrinsicOnContainer(String),
}
