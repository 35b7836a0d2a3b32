//! Nesting limit for traversals.
//!
//! The guard does not stop a tree from being deep; it only tells a
//! traversal where to stop expanding, and remembers that it had to.

/// Deepest level a render pass expands
pub const MAX_DEPTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthGuard {
    max: usize,
    tripped: bool,
}

impl DepthGuard {
    pub fn new(max: usize) -> Self {
        Self { max, tripped: false }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether a node at `depth` may be expanded. Refusals are latched.
    pub fn admit(&mut self, depth: usize) -> bool {
        if depth > self.max {
            self.tripped = true;
            return false;
        }
        true
    }

    pub fn tripped(&self) -> bool {
        self.tripped
    }

    /// Report and clear the latch, so one pass raises one notice
    pub fn take_tripped(&mut self) -> bool {
        std::mem::take(&mut self.tripped)
    }
}

impl Default for DepthGuard {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}
