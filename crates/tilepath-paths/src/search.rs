use std::collections::BinaryHeap;

use tilepath_core::Point;

use crate::grid::WalkGrid;
use crate::neighbors::Neighbors;
use crate::node::{Node, NodeRef, NodeState};

/// How the last search ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// No search has run yet.
    #[default]
    Idle,
    /// Start and goal were the same cell.
    Trivial,
    /// The goal was reached.
    Found,
    /// The goal cell is not walkable.
    GoalBlocked,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// A [`SearchConfig`](crate::SearchConfig) limit stopped the search.
    BudgetExceeded,
}

/// Counters describing the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes moved to the closed set.
    pub expanded: usize,
    /// Successful edge relaxations (first discovery or cost improvement).
    pub relaxed: usize,
    pub outcome: SearchOutcome,
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-search transient layer: costs, parents, open/closed membership.
///
/// One `SearchState` is reused across queries so that warm searches do not
/// allocate. It is invalidated lazily: every search bumps a generation
/// counter and nodes stamped with an older generation read as unvisited.
/// Several threads can search the same [`WalkGrid`] concurrently as long as
/// each owns its own `SearchState`.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) open_count: usize,
    pub(crate) seq: u64,
    pub(crate) neighbors: Neighbors,
    pub(crate) stats: SearchStats,
}

impl SearchState {
    /// Create a state sized for `grid`.
    pub fn new(grid: &WalkGrid) -> Self {
        Self {
            nodes: vec![Node::default(); grid.len()],
            ..Self::default()
        }
    }

    /// Statistics of the most recent search.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Best known cost from the start to `p` in the most recent search, if
    /// `p` was reached.
    pub fn cost_at(&self, grid: &WalkGrid, p: Point) -> Option<i32> {
        let i = grid.idx(p)?;
        let n = self.nodes.get(i)?;
        (n.generation == self.generation && n.state != NodeState::Unvisited).then_some(n.g)
    }

    /// Invalidate every node and empty the frontier for a new search on
    /// `grid`.
    pub(crate) fn begin(&mut self, grid: &WalkGrid) {
        if self.nodes.len() != grid.len() {
            self.nodes.clear();
            self.nodes.resize(grid.len(), Node::default());
            self.generation = 0;
        }

        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: nodes from 2^32 searches ago would look current.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }

        self.open.clear();
        self.open_count = 0;
        self.seq = 0;
        self.stats = SearchStats::default();
    }

    /// The node at `idx`, reset first if it belongs to an older search.
    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        let cur_gen = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != cur_gen {
            *n = Node {
                generation: cur_gen,
                ..Node::default()
            };
        }
        n
    }

    /// Record `g`, `h` and `parent` for `idx` and put it on the frontier.
    ///
    /// Superseded heap entries for the same node are left in place and
    /// skipped by [`pop_open`](Self::pop_open).
    pub(crate) fn relax(&mut self, idx: usize, g: i32, h: i32, parent: Option<usize>) {
        let n = self.node_mut(idx);
        debug_assert!(n.state != NodeState::Closed);
        let newly_open = n.state == NodeState::Unvisited;
        n.g = g;
        n.h = h;
        n.parent = parent;
        n.state = NodeState::Open;
        let f = n.f();

        if newly_open {
            self.open_count += 1;
        }
        self.open.push(NodeRef {
            idx,
            f,
            h,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Pop the open node with the lowest `(f, h)`, skipping stale entries.
    pub(crate) fn pop_open(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let n = &self.nodes[entry.idx];
            if n.generation != self.generation || n.state != NodeState::Open || n.f() != entry.f {
                continue;
            }
            return Some(entry.idx);
        }
        None
    }

    /// Move an open node to the closed set.
    pub(crate) fn close(&mut self, idx: usize) {
        let n = &mut self.nodes[idx];
        debug_assert_eq!(n.state, NodeState::Open);
        n.state = NodeState::Closed;
        self.open_count -= 1;
        self.stats.expanded += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: i32, h: i32) -> WalkGrid {
        WalkGrid::from_fn(w, h, |_| true).unwrap()
    }

    #[test]
    fn begin_invalidates_previous_search() {
        let g = grid(3, 3);
        let mut st = SearchState::new(&g);
        st.begin(&g);
        st.relax(4, 7, 3, None);
        assert_eq!(st.cost_at(&g, Point::new(1, 1)), Some(7));

        st.begin(&g);
        assert_eq!(st.cost_at(&g, Point::new(1, 1)), None);
        assert_eq!(st.pop_open(), None);
        assert_eq!(st.open_count, 0);
    }

    #[test]
    fn pop_skips_superseded_entries() {
        let g = grid(3, 1);
        let mut st = SearchState::new(&g);
        st.begin(&g);
        st.relax(0, 20, 10, None);
        st.relax(1, 25, 0, None);
        // Improve node 0: the (30, 10) entry becomes stale.
        st.relax(0, 5, 10, None);
        assert_eq!(st.open_count, 2);
        assert_eq!(st.open.len(), 3);

        assert_eq!(st.pop_open(), Some(0));
        st.close(0);
        assert_eq!(st.pop_open(), Some(1));
        st.close(1);
        assert_eq!(st.pop_open(), None);
        assert_eq!(st.open_count, 0);
        assert_eq!(st.last_stats().expanded, 2);
    }

    #[test]
    fn ties_prefer_lower_h_then_first_pushed() {
        let g = grid(4, 1);
        let mut st = SearchState::new(&g);
        st.begin(&g);
        st.relax(0, 10, 10, None);
        st.relax(1, 20, 0, None);
        st.relax(2, 20, 0, None);
        st.relax(3, 5, 15, None);
        let order: Vec<usize> = std::iter::from_fn(|| {
            let i = st.pop_open()?;
            st.close(i);
            Some(i)
        })
        .collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let g = grid(2, 2);
        let mut st = SearchState::new(&g);
        st.generation = u32::MAX - 1;
        st.begin(&g);
        assert_eq!(st.generation, u32::MAX);
        st.relax(3, 42, 0, None);
        st.close(3);

        // Next begin wraps to 0 and must not leave node 3 looking current
        // at some later generation.
        st.begin(&g);
        assert_eq!(st.generation, 1);
        assert!(st.nodes.iter().all(|n| n.generation == 0));
        assert_eq!(st.cost_at(&g, Point::new(1, 1)), None);
    }

    #[test]
    fn resizes_for_a_different_grid() {
        let small = grid(2, 2);
        let big = grid(5, 5);
        let mut st = SearchState::new(&small);
        st.begin(&small);
        st.relax(0, 1, 1, None);
        st.begin(&big);
        assert_eq!(st.nodes.len(), 25);
        assert_eq!(st.generation, 1);
        assert_eq!(st.cost_at(&big, Point::ZERO), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expanded: 4,
            relaxed: 9,
            outcome: SearchOutcome::BudgetExceeded,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn every_outcome_round_trips() {
        for outcome in [
            SearchOutcome::Idle,
            SearchOutcome::Trivial,
            SearchOutcome::Found,
            SearchOutcome::GoalBlocked,
            SearchOutcome::Exhausted,
            SearchOutcome::BudgetExceeded,
        ] {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: SearchOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(back, outcome);
        }
        assert_eq!(
            serde_json::to_string(&SearchOutcome::GoalBlocked).unwrap(),
            r#""GoalBlocked""#
        );
    }
}
