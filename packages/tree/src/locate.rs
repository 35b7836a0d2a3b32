//! # Tree Locator
//!
//! Read-only lookups. Absent ids are reported as `None`; callers decide
//! whether that is worth surfacing.

use crate::tree::{LayoutNode, LayoutTree};

/// A node found in a tree, with its surroundings
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub node: &'a LayoutNode,
    /// `None` for the root
    pub parent: Option<&'a LayoutNode>,
    pub depth: usize,
}

impl<'a> Located<'a> {
    /// The node's current children, in order
    pub fn children(&self) -> &'a [String] {
        self.node.children()
    }
}

/// Find a node and its parent by id
pub fn locate<'a>(tree: &'a LayoutTree, id: &str) -> Option<Located<'a>> {
    let node = tree.get(id)?;
    let parent = match node.parent() {
        Some(parent_id) => Some(tree.get(parent_id)?),
        None => None,
    };

    Some(Located {
        node,
        parent,
        depth: tree.depth_of(id)?,
    })
}

/// Whether `candidate` sits strictly below `ancestor`
pub fn is_descendant(tree: &LayoutTree, ancestor: &str, candidate: &str) -> bool {
    let mut current = tree.parent_of(candidate);
    let mut steps = 0;

    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        steps += 1;
        if steps > tree.len() {
            break;
        }
        current = tree.parent_of(id);
    }

    false
}

/// Depth-first pre-order traversal, children in sequence order
pub struct Walk<'a> {
    tree: &'a LayoutTree,
    stack: Vec<(&'a str, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a LayoutNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            for child in node.children().iter().rev() {
                self.stack.push((child.as_str(), depth + 1));
            }
            return Some((node, depth));
        }
        None
    }
}

/// Walk the whole tree from the root (depth 0)
pub fn walk(tree: &LayoutTree) -> Walk<'_> {
    Walk {
        tree,
        stack: vec![(tree.root_id(), 0)],
    }
}

/// Walk the subtree under `id`, the node itself excluded.
/// Depths are relative to `id`.
pub fn descendants<'a>(tree: &'a LayoutTree, id: &str) -> Walk<'a> {
    let stack = tree
        .children_of(id)
        .map(|children| children.iter().rev().map(|c| (c.as_str(), 1)).collect())
        .unwrap_or_default();

    Walk { tree, stack }
}
