use std::cmp::Ordering;

/// Sentinel cost meaning "not reached in this search".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Frontier membership of a node within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unvisited,
    Open,
    Closed,
}

// ---------------------------------------------------------------------------
// Per-cell search record
// ---------------------------------------------------------------------------

/// Transient per-search data for one cell.
///
/// A node stamped with an older `generation` is stale and reads as
/// unvisited.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: Option<usize>,
    pub(crate) generation: u32,
    pub(crate) state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            parent: None,
            generation: 0,
            state: NodeState::Unvisited,
        }
    }
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }
}

/// Heap entry referencing a node by index.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest `f` first,
/// then the smallest `h`, then the earliest pushed entry.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
