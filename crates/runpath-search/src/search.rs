use std::collections::BinaryHeap;

use runpath_core::{CostGrid, Direction, Point, manhattan};

use crate::bounds::RunBounds;
use crate::route::{Move, Route};

/// Emit a progress line every this many frontier pops.
const PROGRESS_INTERVAL: u64 = 10_000;

// ---------------------------------------------------------------------------
// Internal node state
// ---------------------------------------------------------------------------

/// Per-(cell, arrival-direction) search record.
#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    run: u8,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            run: 0,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node table, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// RouteSearch
// ---------------------------------------------------------------------------

/// Coordinator for run-constrained best-first searches over a [`CostGrid`].
///
/// `RouteSearch` owns the per-state node table so that repeated queries
/// reuse its allocation: the table only grows when a grid larger than any
/// previous one is searched, and stale entries are invalidated lazily via a
/// generation counter rather than cleared.
///
/// States are `(cell, direction of the move that arrived there)` pairs. The
/// run-length bounds never appear in the state: every enqueued transition is
/// already a complete legal move, so a state's best cost is comparable
/// across arrival runs of any length.
pub struct RouteSearch {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    generation: u32,
}

impl RouteSearch {
    /// Create a search coordinator pre-sized for `width` x `height` grids.
    ///
    /// Sizing is a hint only; the coordinator grows on demand when handed a
    /// larger grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); w * h * 4],
            generation: 0,
        }
    }

    /// Minimum total cost of a route from the top-left to the bottom-right
    /// cell under `bounds`, or `None` if no such route exists.
    ///
    /// The origin cell's own cost is never counted; the cost of every other
    /// cell entered along the route is counted exactly once.
    pub fn min_cost(&mut self, grid: &CostGrid, bounds: RunBounds) -> Option<i32> {
        if grid.bottom_right() == Point::ZERO {
            return Some(0);
        }
        let goal_idx = self.run_search(grid, bounds)?;
        Some(self.nodes[goal_idx].g)
    }

    /// Like [`min_cost`](RouteSearch::min_cost), but also reconstructs the
    /// optimal move sequence.
    pub fn route(&mut self, grid: &CostGrid, bounds: RunBounds) -> Option<Route> {
        if grid.bottom_right() == Point::ZERO {
            return Some(Route {
                moves: Vec::new(),
                cost: 0,
            });
        }
        let goal_idx = self.run_search(grid, bounds)?;
        let cost = self.nodes[goal_idx].g;

        let mut moves = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            let n = &self.nodes[ci];
            moves.push(Move {
                dir: Direction::ALL[ci % 4],
                run: n.run,
            });
            ci = n.parent;
        }
        moves.reverse();
        Some(Route { moves, cost })
    }

    /// Run the search; returns the flat index of the goal state, or `None`
    /// when the frontier is exhausted without reaching the goal.
    fn run_search(&mut self, grid: &CostGrid, bounds: RunBounds) -> Option<usize> {
        self.fit_to(grid);

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);

        let goal = grid.bottom_right();
        // Manhattan distance is only a valid lower bound when every cell
        // costs at least 1; on grids with zero-cost cells fall back to
        // plain uniform-cost ordering.
        let use_heuristic = !has_zero_cost(grid);

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        // Seed: the first move has no predecessor, so all four directions
        // are legal from the origin.
        for dir in Direction::ALL {
            self.push_runs(
                grid,
                bounds,
                Point::ZERO,
                dir,
                0,
                usize::MAX,
                goal,
                use_heuristic,
                &mut open,
            );
        }

        let mut pops: u64 = 0;
        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != self.generation || !self.nodes[ci].open {
                continue;
            }

            pops += 1;
            if pops % PROGRESS_INTERVAL == 0 {
                log::debug!(
                    "search: {pops} pops, frontier {}, best estimate {}",
                    open.len(),
                    current.f
                );
            }

            let (pos, dir) = self.unpack(ci);
            if pos == goal {
                return Some(ci);
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;

            // Mandatory turn: neither continue straight nor reverse.
            for next in Direction::ALL {
                if next == dir || next == dir.opposite() {
                    continue;
                }
                self.push_runs(
                    grid,
                    bounds,
                    pos,
                    next,
                    current_g,
                    ci,
                    goal,
                    use_heuristic,
                    &mut open,
                );
            }
        }

        None
    }

    /// Enqueue every legal move from `from` in direction `dir`.
    ///
    /// Walks outward one cell at a time, accumulating the cost of each cell
    /// entered; runs shorter than `min_run` contribute prefix cost but are
    /// never enqueued themselves. Stops at the first out-of-bounds cell,
    /// since every longer run leaves the grid too.
    #[allow(clippy::too_many_arguments)]
    fn push_runs(
        &mut self,
        grid: &CostGrid,
        bounds: RunBounds,
        from: Point,
        dir: Direction,
        base_g: i32,
        parent: usize,
        goal: Point,
        use_heuristic: bool,
        open: &mut BinaryHeap<NodeRef>,
    ) {
        let step = dir.delta();
        let mut pos = from;
        let mut run_cost = 0i32;

        for run in 1..=bounds.max_run() {
            pos = pos + step;
            let Some(cell) = grid.at(pos) else {
                return;
            };
            run_cost += cell as i32;
            if run < bounds.min_run() {
                continue;
            }

            let si = self.state_idx(pos, dir);
            let tentative = base_g + run_cost;

            let n = &mut self.nodes[si];
            if n.generation == self.generation && tentative >= n.g {
                continue;
            }

            n.generation = self.generation;
            n.g = tentative;
            n.f = tentative + if use_heuristic { manhattan(pos, goal) } else { 0 };
            n.parent = parent;
            n.run = run;
            n.open = true;

            open.push(NodeRef { idx: si, f: n.f });
        }
    }

    /// Adopt the grid's dimensions, growing the node table only when the
    /// grid exceeds all previous capacity.
    fn fit_to(&mut self, grid: &CostGrid) {
        self.width = grid.width() as usize;
        self.height = grid.height() as usize;
        let len = self.width * self.height * 4;
        if len <= self.nodes.len() {
            return;
        }
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
    }

    #[inline]
    fn state_idx(&self, p: Point, dir: Direction) -> usize {
        ((p.y as usize) * self.width + p.x as usize) * 4 + dir as usize
    }

    #[inline]
    fn unpack(&self, idx: usize) -> (Point, Direction) {
        let cell = idx / 4;
        let p = Point::new((cell % self.width) as i32, (cell / self.width) as i32);
        (p, Direction::ALL[idx % 4])
    }
}

fn has_zero_cost(grid: &CostGrid) -> bool {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.at(Point::new(x, y)) == Some(0) {
                return true;
            }
        }
    }
    false
}
