#![forbid(unsafe_code)]

//! Taxonomy model + document loading (headless).
//!
//! Design goals:
//! - the tree is owned by the caller; nothing here mutates it after loading
//! - deterministic, serde-friendly data shapes that round-trip through JSON/YAML
//! - no I/O beyond what the caller hands in as text

pub mod config;
pub mod document;
pub mod error;

pub use config::VizConfig;
pub use document::{DocumentFormat, parse_taxonomy};
pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// One category in the taxonomy tree.
///
/// `children` keeps source order; a missing `children` field deserializes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TaxonomyNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first, pre-order search of this node and its descendants.
    pub fn find(&self, id: &str) -> Option<&TaxonomyNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// The children of the (implicit) root. The root itself is drawn as the hub and has no record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    pub nodes: Vec<TaxonomyNode>,
}

impl Taxonomy {
    pub fn new(nodes: Vec<TaxonomyNode>) -> Self {
        Self { nodes }
    }

    pub fn top_level(&self) -> &[TaxonomyNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn find_top_level(&self, id: &str) -> Option<&TaxonomyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Searches the whole tree, top-level nodes first in source order.
    pub fn find(&self, id: &str) -> Option<&TaxonomyNode> {
        self.nodes.iter().find_map(|n| n.find(id))
    }

    /// Resolves an optional selected id into a [`Selection`] borrowing from this tree.
    ///
    /// Ids that are not present anywhere still produce a selection: emphasis simply matches
    /// nothing.
    pub fn select<'a>(&'a self, id: Option<&'a str>) -> Selection<'a> {
        match id {
            None => Selection::None,
            Some(id) => match self.find(id) {
                Some(node) => Selection::Node(node),
                None => Selection::Id(id),
            },
        }
    }
}

impl From<Vec<TaxonomyNode>> for Taxonomy {
    fn from(nodes: Vec<TaxonomyNode>) -> Self {
        Self { nodes }
    }
}

/// At most one selected node, compared by id against the top-level nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection<'a> {
    #[default]
    None,
    /// A node resolved from the tree.
    Node(&'a TaxonomyNode),
    /// An id that did not resolve to a node.
    Id(&'a str),
}

impl<'a> Selection<'a> {
    pub fn id(&self) -> Option<&'a str> {
        match self {
            Selection::None => None,
            Selection::Node(n) => Some(n.id.as_str()),
            Selection::Id(id) => Some(id),
        }
    }

    pub fn node(&self) -> Option<&'a TaxonomyNode> {
        match self {
            Selection::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_selected(&self, node: &TaxonomyNode) -> bool {
        self.id() == Some(node.id.as_str())
    }
}

impl<'a> From<Option<&'a TaxonomyNode>> for Selection<'a> {
    fn from(value: Option<&'a TaxonomyNode>) -> Self {
        match value {
            Some(n) => Selection::Node(n),
            None => Selection::None,
        }
    }
}

impl<'a> From<&'a TaxonomyNode> for Selection<'a> {
    fn from(value: &'a TaxonomyNode) -> Self {
        Selection::Node(value)
    }
}

#[cfg(test)]
mod tests;
