//! # Node Model
//!
//! The nested value form of a layout document. This is what the canvas
//! sends and receives as JSON; [`crate::LayoutTree`] is the indexed form
//! used for editing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Layout primitive of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Flex container
    Flex,
    /// Grid container
    Grid,
    /// Content leaf (text, media, link)
    Content,
}

impl NodeKind {
    /// Containers own children; content leaves do not
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Flex | NodeKind::Grid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Flex => "flex",
            NodeKind::Grid => "grid",
            NodeKind::Content => "content",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One styled title line on a content leaf
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSection {
    pub text: String,
    pub color: String,
    pub gradient: String,
}

/// Editorial attributes of a content leaf.
///
/// Created and edited by the properties panel; the tree carries it
/// without looking inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafContent {
    pub title: String,
    pub link: String,
    pub route: String,
    pub url: String,
    pub titles: BTreeMap<String, TitleSection>,
}

/// Attributes a drag source declares for the node it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub columns: String,
    #[serde(default)]
    pub rows: String,
    #[serde(default)]
    pub colspan: String,
    #[serde(default)]
    pub rowspan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<LeafContent>,
}

impl NodeTemplate {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            columns: String::new(),
            rows: String::new(),
            colspan: String::new(),
            rowspan: String::new(),
            content: None,
        }
    }

    /// Set declared slot grid
    pub fn with_grid(mut self, columns: impl Into<String>, rows: impl Into<String>) -> Self {
        self.columns = columns.into();
        self.rows = rows.into();
        self
    }

    /// Set declared spans
    pub fn with_span(mut self, colspan: impl Into<String>, rowspan: impl Into<String>) -> Self {
        self.colspan = colspan.into();
        self.rowspan = rowspan.into();
        self
    }

    pub fn with_content(mut self, content: LeafContent) -> Self {
        self.content = Some(content);
        self
    }
}

/// A layout node with its ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub columns: String,
    #[serde(default)]
    pub rows: String,
    #[serde(default)]
    pub colspan: String,
    #[serde(default)]
    pub rowspan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<LeafContent>,
    #[serde(default, alias = "childs")]
    pub children: Vec<Node>,
}

impl Node {
    /// Build a childless node from a template
    pub fn from_template(id: impl Into<String>, template: &NodeTemplate) -> Self {
        Self {
            id: id.into(),
            kind: template.kind,
            columns: template.columns.clone(),
            rows: template.rows.clone(),
            colspan: template.colspan.clone(),
            rowspan: template.rowspan.clone(),
            content: template.content.clone(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Placement identity: two nodes are the same if their ids match
    pub fn is_same(&self, other: &Node) -> bool {
        self.id == other.id
    }

    /// Declared attributes as a template
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

/// Parse a declared count. Anything that is not a non-negative base-10
/// integer counts as 0.
pub fn parse_count(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(0)
}
