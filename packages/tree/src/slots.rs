//! # Slot Accounting
//!
//! How many of a container's declared `columns × rows` slots are still free.
//!
//! The count is advisory and deliberately coarse: every child takes one
//! slot, and the container's *own* `colspan` and `rowspan` are added on
//! top. Spans are summed, not multiplied. Renderers that place empty
//! placeholders depend on these exact numbers.

use crate::node::{parse_count, Node};
use crate::tree::{LayoutNode, LayoutTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotUsage {
    pub total: u32,
    pub occupied: u32,
    pub empty: u32,
}

impl SlotUsage {
    pub fn compute(columns: &str, rows: &str, colspan: &str, rowspan: &str, child_count: usize) -> Self {
        let total = parse_count(columns).saturating_mul(parse_count(rows));
        let children = u32::try_from(child_count).unwrap_or(u32::MAX);
        let occupied = children
            .saturating_add(parse_count(colspan))
            .saturating_add(parse_count(rowspan));

        Self {
            total,
            occupied,
            empty: total.saturating_sub(occupied),
        }
    }

    pub fn of(node: &LayoutNode) -> Self {
        Self::compute(&node.columns, &node.rows, &node.colspan, &node.rowspan, node.children().len())
    }

    pub fn of_node(node: &Node) -> Self {
        Self::compute(&node.columns, &node.rows, &node.colspan, &node.rowspan, node.children.len())
    }

    /// Whether placeholders remain for another drop
    pub fn accepts_more(&self) -> bool {
        self.empty > 0
    }
}

/// Free slots at `id`, or `None` if the node is absent
pub fn empty_slots(tree: &LayoutTree, id: &str) -> Option<u32> {
    tree.get(id).map(|node| SlotUsage::of(node).empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, NodeTemplate};

    fn grid(columns: &str, rows: &str, colspan: &str, rowspan: &str, children: usize) -> Node {
        let child = NodeTemplate::new(NodeKind::Content);
        Node::from_template(
            "g",
            &NodeTemplate::new(NodeKind::Grid)
                .with_grid(columns, rows)
                .with_span(colspan, rowspan),
        )
        .with_children((0..children).map(|i| Node::from_template(format!("c{i}"), &child)).collect())
    }

    #[test]
    fn test_three_by_two_with_two_children() {
        let usage = SlotUsage::of_node(&grid("3", "2", "1", "1", 2));

        assert_eq!(usage, SlotUsage { total: 6, occupied: 4, empty: 2 });
        assert!(usage.accepts_more());
    }

    #[test]
    fn test_non_numeric_dimensions_count_as_zero() {
        let usage = SlotUsage::of_node(&grid("auto", "2", "", "", 0));

        assert_eq!(usage.total, 0);
        assert_eq!(usage.empty, 0);
        assert!(!usage.accepts_more());
    }

    #[test]
    fn test_overfull_container_clamps_to_zero() {
        let usage = SlotUsage::of_node(&grid("2", "1", "2", "2", 3));

        assert_eq!(usage.occupied, 7);
        assert_eq!(usage.empty, 0);
    }

    #[test]
    fn test_empty_slots_by_id() {
        let tree = LayoutTree::from_node(grid("2", "2", "", "", 1)).unwrap();

        assert_eq!(empty_slots(&tree, "g"), Some(3));
        assert_eq!(empty_slots(&tree, "nope"), None);
    }
}
