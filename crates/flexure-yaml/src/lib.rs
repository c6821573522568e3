//! YAML layout manifests for Flexure.
//!
//! A manifest describes a whole layout tree declaratively: styles, attached
//! view handles and fixed intrinsic sizes for leaves. [`LayoutManifest::build`]
//! turns it into a [`LayoutTree`](flexure_layout::LayoutTree) ready for
//! layout, with string ids mapped to [`NodeId`](flexure_layout::NodeId)s.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{BuiltLayout, LayoutManifest, NodeSpec};
