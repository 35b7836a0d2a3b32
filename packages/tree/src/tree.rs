//! # Layout Tree
//!
//! Indexed form of a layout document.
//!
//! Nodes live in a map keyed by id. Each entry keeps its parent id and the
//! ordered ids of its children, so relocating a node is a pair of list
//! edits instead of a rebuild of the nested value.
//!
//! ## Invariants
//!
//! - Every id appears at most once.
//! - Every node except the root has a parent, and appears exactly once in
//!   that parent's `children`.
//! - The root id is fixed for the lifetime of the tree.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::{LeafContent, Node, NodeKind, NodeTemplate};
use crate::MutationError;

/// A node stored in a [`LayoutTree`]
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub kind: NodeKind,
    pub columns: String,
    pub rows: String,
    pub colspan: String,
    pub rowspan: String,
    pub content: Option<LeafContent>,
    pub(crate) parent: Option<String>,
    pub(crate) children: Vec<String>,
}

impl LayoutNode {
    pub(crate) fn from_template(id: &str, template: &NodeTemplate, parent: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            kind: template.kind,
            columns: template.columns.clone(),
            rows: template.rows.clone(),
            colspan: template.colspan.clone(),
            rowspan: template.rowspan.clone(),
            content: template.content.clone(),
            parent,
            children: Vec::new(),
        }
    }

    /// Take declared attributes from `template`. Content is only replaced
    /// when the template carries some.
    pub(crate) fn redecorate(&mut self, template: &NodeTemplate) {
        self.kind = template.kind;
        self.columns = template.columns.clone();
        self.rows = template.rows.clone();
        self.colspan = template.colspan.clone();
        self.rowspan = template.rowspan.clone();
        if let Some(content) = &template.content {
            self.content = Some(content.clone());
        }
    }

    /// Parent id, `None` for the root
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Child ids in render order
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn template(&self) -> NodeTemplate {
        NodeTemplate {
            kind: self.kind,
            columns: self.columns.clone(),
            rows: self.rows.clone(),
            colspan: self.colspan.clone(),
            rowspan: self.rowspan.clone(),
            content: self.content.clone(),
        }
    }
}

/// Editable layout document with a single fixed root
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    root: String,
    nodes: HashMap<String, LayoutNode>,
}

impl LayoutTree {
    /// Create a tree holding only a root
    pub fn new(root_id: impl Into<String>, template: &NodeTemplate) -> Self {
        let root_id = root_id.into();
        let mut nodes = HashMap::new();
        nodes.insert(root_id.clone(), LayoutNode::from_template(&root_id, template, None));

        Self { root: root_id, nodes }
    }

    /// Index a nested document. Fails if any id occurs twice.
    pub fn from_node(root: Node) -> Result<Self, MutationError> {
        let mut tree = Self::new(root.id.clone(), &root.template());
        for child in root.children {
            tree.insert_subtree(child, &root.id)?;
        }
        Ok(tree)
    }

    fn insert_subtree(&mut self, node: Node, parent_id: &str) -> Result<(), MutationError> {
        if self.nodes.contains_key(&node.id) {
            return Err(MutationError::DuplicateId(node.id));
        }

        let entry = LayoutNode::from_template(&node.id, &node.template(), Some(parent_id.to_string()));
        self.nodes.insert(node.id.clone(), entry);
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.push(node.id.clone());
        }

        for child in node.children {
            self.insert_subtree(child, &node.id)?;
        }
        Ok(())
    }

    /// Rebuild the nested document in child order
    pub fn to_node(&self) -> Node {
        self.build_node(self.root())
    }

    fn build_node(&self, entry: &LayoutNode) -> Node {
        Node {
            id: entry.id.clone(),
            kind: entry.kind,
            columns: entry.columns.clone(),
            rows: entry.rows.clone(),
            colspan: entry.colspan.clone(),
            rowspan: entry.rowspan.clone(),
            content: entry.content.clone(),
            children: entry
                .children
                .iter()
                .filter_map(|id| self.nodes.get(id))
                .map(|child| self.build_node(child))
                .collect(),
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    pub fn root(&self) -> &LayoutNode {
        // The root entry is inserted on construction and never removed
        &self.nodes[&self.root]
    }

    pub fn get(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id)
    }

    pub(crate) fn insert(&mut self, node: LayoutNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|node| node.parent())
    }

    pub fn children_of(&self, id: &str) -> Option<&[String]> {
        self.nodes.get(id).map(|node| node.children())
    }

    /// Nesting level: root is 0, its children are 1
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        let mut node = self.nodes.get(id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent.as_deref() {
            node = self.nodes.get(parent)?;
            depth += 1;
            if depth > self.nodes.len() {
                return None;
            }
        }
        Some(depth)
    }

    /// Replace the editorial attributes of a content leaf
    pub fn set_content(&mut self, id: &str, content: LeafContent) -> Result<(), MutationError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;

        if node.kind != NodeKind::Content {
            return Err(MutationError::NotContent(id.to_string()));
        }

        node.content = Some(content);
        Ok(())
    }
}

impl Serialize for LayoutTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_node().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LayoutTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = Node::deserialize(deserializer)?;
        LayoutTree::from_node(node).map_err(serde::de::Error::custom)
    }
}
