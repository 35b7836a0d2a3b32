//! # Render Pass
//!
//! Walks a tree the way the canvas draws it and produces a plain outline:
//! which nodes are shown, at what depth, and how many placeholder slots
//! each one leaves open.
//!
//! The root is the canvas itself and is always shown at depth 0. Its
//! children are depth 1. A node deeper than the limit is not shown and
//! neither is anything below it; the pass raises one
//! [`Notice::DepthExceeded`] however many branches were cut.

use std::fmt::Write;

use canvas_tree::{DepthGuard, LayoutNode, LayoutTree, NodeKind, SlotUsage};
use serde::Serialize;

use crate::notice::{Notice, NoticeSink};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNode {
    pub id: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub empty_slots: u32,
    pub children: Vec<RenderedNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPass {
    pub root: RenderedNode,
    /// Some branch was cut at the depth limit
    pub truncated: bool,
    /// Deepest level actually shown
    pub deepest: usize,
}

impl RenderPass {
    /// Ids in draw order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_ids(&self.root, &mut ids);
        ids
    }

    /// Indented text outline, one node per line
    pub fn outline(&self) -> String {
        let mut out = String::new();
        write_outline(&self.root, &mut out);
        out
    }
}

fn collect_ids<'a>(node: &'a RenderedNode, ids: &mut Vec<&'a str>) {
    ids.push(&node.id);
    for child in &node.children {
        collect_ids(child, ids);
    }
}

fn write_outline(node: &RenderedNode, out: &mut String) {
    let indent = "  ".repeat(node.depth);
    let _ = match node.kind {
        NodeKind::Content => writeln!(out, "{}{} [{}]", indent, node.id, node.kind),
        _ => writeln!(out, "{}{} [{}] empty={}", indent, node.id, node.kind, node.empty_slots),
    };
    for child in &node.children {
        write_outline(child, out);
    }
}

struct Renderer<'a> {
    tree: &'a LayoutTree,
    guard: DepthGuard,
    deepest: usize,
}

impl Renderer<'_> {
    fn render_node(&mut self, node: &LayoutNode, depth: usize) -> RenderedNode {
        self.deepest = self.deepest.max(depth);
        let tree = self.tree;

        let mut children = Vec::with_capacity(node.children().len());
        for child_id in node.children() {
            let Some(child) = tree.get(child_id) else {
                continue;
            };
            if !self.guard.admit(depth + 1) {
                continue;
            }
            children.push(self.render_node(child, depth + 1));
        }

        RenderedNode {
            id: node.id.clone(),
            kind: node.kind,
            depth,
            empty_slots: SlotUsage::of(node).empty,
            children,
        }
    }
}

/// Render the whole tree, cutting branches deeper than `max_depth`
pub fn render(tree: &LayoutTree, max_depth: usize, notices: &dyn NoticeSink) -> RenderPass {
    let mut renderer = Renderer {
        tree,
        guard: DepthGuard::new(max_depth),
        deepest: 0,
    };

    let root = renderer.render_node(tree.root(), 0);
    let truncated = renderer.guard.take_tripped();
    if truncated {
        notices.notify(Notice::DepthExceeded { max: max_depth });
    }

    RenderPass {
        root,
        truncated,
        deepest: renderer.deepest,
    }
}
