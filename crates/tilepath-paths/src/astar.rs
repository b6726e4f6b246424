use tilepath_core::Point;

use crate::config::SearchConfig;
use crate::distance::octile;
use crate::error::PathError;
use crate::grid::WalkGrid;
use crate::node::NodeState;
use crate::search::{SearchOutcome, SearchState};

impl SearchState {
    /// Compute a shortest 8-connected path from `from` to `to` using A*.
    ///
    /// The returned path excludes `from` and ends with `to`. It is empty
    /// when `from == to`, when no path exists, or when a `config` limit
    /// stops the search early; [`last_stats`](Self::last_stats) tells these
    /// apart. Orthogonal steps cost 10 and diagonal steps 14.
    ///
    /// `from` does not need to be walkable; every other cell on the path
    /// is.
    pub fn find_path(
        &mut self,
        grid: &WalkGrid,
        from: Point,
        to: Point,
        config: &SearchConfig,
    ) -> Result<Vec<Point>, PathError> {
        let start_idx = grid.check(from)?;
        let goal_idx = grid.check(to)?;

        self.begin(grid);

        if start_idx == goal_idx {
            self.stats.outcome = SearchOutcome::Trivial;
            return Ok(Vec::new());
        }
        if !grid.walkable_at(goal_idx) {
            self.stats.outcome = SearchOutcome::GoalBlocked;
            log::debug!("astar {from} -> {to}: goal is blocked");
            return Ok(Vec::new());
        }

        self.relax(start_idx, 0, octile(from, to), None);

        let mut neighbors = std::mem::take(&mut self.neighbors);

        let outcome = 'search: loop {
            let Some(ci) = self.pop_open() else {
                break 'search SearchOutcome::Exhausted;
            };

            if ci == goal_idx {
                break 'search SearchOutcome::Found;
            }

            if config.exceeded(self.stats.expanded + 1, self.open_count) {
                break 'search SearchOutcome::BudgetExceeded;
            }

            self.close(ci);
            let current_g = self.nodes[ci].g;
            let current_point = grid.point(ci);
            log::trace!("astar expand {current_point} g={current_g}");

            for &np in neighbors.all(current_point, |n| grid.contains(n)) {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if !grid.walkable_at(ni) {
                    continue;
                }

                let tentative_g = current_g + octile(current_point, np);
                let n = self.node_mut(ni);
                let h = match n.state {
                    NodeState::Closed => continue,
                    NodeState::Open if tentative_g >= n.g => continue,
                    NodeState::Open => n.h,
                    NodeState::Unvisited => octile(np, to),
                };

                self.relax(ni, tentative_g, h, Some(ci));
                self.stats.relaxed += 1;
            }
        };

        self.neighbors = neighbors;
        self.stats.outcome = outcome;
        log::debug!(
            "astar {from} -> {to}: {outcome:?} after {} expansions, {} relaxations",
            self.stats.expanded,
            self.stats.relaxed
        );

        if outcome != SearchOutcome::Found {
            return Ok(Vec::new());
        }
        Ok(self.reconstruct(grid, start_idx, goal_idx))
    }

    /// Follow parent links from `goal_idx` back to `start_idx`.
    ///
    /// The result runs start to goal, without the start cell.
    fn reconstruct(&self, grid: &WalkGrid, start_idx: usize, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.push(grid.point(ci));
            // Every node reached after the start has a parent.
            let Some(parent) = self.nodes[ci].parent else {
                break;
            };
            ci = parent;
        }
        path.reverse();
        path
    }
}
