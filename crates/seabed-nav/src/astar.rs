//! Bounded A* search on a 4-connected grid.
//!
//! Edge costs are Euclidean step lengths and the heuristic is the
//! straight-line distance to the goal, which never overestimates under
//! 4-connected movement. The search stops when the goal is dequeued,
//! when the frontier runs dry, or when the expansion budget is spent.
//! All search state lives in a per-call context and is dropped on return.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use seabed_core::constants::MAX_PLANNER_EXPANSIONS;
use seabed_core::types::Position;

use crate::grid::{Occupancy, SpatialGrid};

/// Result of one planning call.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// Cells from the first step up to and including the goal.
    Found(Vec<Position>),
    /// The frontier was exhausted, or start/goal lie outside the grid.
    Unreachable,
    /// The expansion budget ran out before the goal was dequeued.
    BudgetExhausted { expanded: usize },
}

impl PlanOutcome {
    /// The path, or an empty sequence when no path was produced.
    pub fn into_path(self) -> Vec<Position> {
        match self {
            PlanOutcome::Found(path) => path,
            PlanOutcome::Unreachable | PlanOutcome::BudgetExhausted { .. } => Vec::new(),
        }
    }

    pub fn first_step(&self) -> Option<Position> {
        match self {
            PlanOutcome::Found(path) => path.first().copied(),
            _ => None,
        }
    }
}

/// A* planner with a fixed expansion budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planner {
    pub max_expansions: usize,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            max_expansions: MAX_PLANNER_EXPANSIONS,
        }
    }
}

/// Plan on a unit grid of side `bound` with the default budget.
/// Returns an empty path when the goal is unreachable.
pub fn plan(start: Position, goal: Position, obstacles: &Occupancy, bound: i32) -> Vec<Position> {
    Planner::default()
        .plan(&SpatialGrid::unit(bound), start, goal, obstacles)
        .into_path()
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    priority: f64,
    cost: f64,
    seq: u64,
    cell: Position,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Reversed so the max-heap pops the lowest priority, oldest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct SearchContext {
    frontier: BinaryHeap<FrontierEntry>,
    came_from: HashMap<Position, Position>,
    cost_so_far: HashMap<Position, f64>,
    next_seq: u64,
}

impl SearchContext {
    fn new(start: Position) -> Self {
        let mut ctx = Self {
            frontier: BinaryHeap::new(),
            came_from: HashMap::new(),
            cost_so_far: HashMap::new(),
            next_seq: 0,
        };
        ctx.cost_so_far.insert(start, 0.0);
        ctx.push(start, 0.0, 0.0);
        ctx
    }

    fn push(&mut self, cell: Position, cost: f64, priority: f64) {
        self.frontier.push(FrontierEntry {
            priority,
            cost,
            seq: self.next_seq,
            cell,
        });
        self.next_seq += 1;
    }

    fn reconstruct(&self, start: Position, goal: Position) -> Vec<Position> {
        let mut path = Vec::new();
        let mut current = goal;
        while current != start {
            path.push(current);
            match self.came_from.get(&current) {
                Some(prev) => current = *prev,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

impl Planner {
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }

    /// Search from `start` to `goal` (cell coordinates) around `obstacles`.
    ///
    /// The goal cell is always enterable, so a target standing on its own
    /// cell does not block itself. When `start == goal` the path is the goal alone.
    pub fn plan(
        &self,
        grid: &SpatialGrid,
        start: Position,
        goal: Position,
        obstacles: &Occupancy,
    ) -> PlanOutcome {
        if !grid.contains(&start) || !grid.contains(&goal) {
            return PlanOutcome::Unreachable;
        }
        if start == goal {
            return PlanOutcome::Found(vec![goal]);
        }

        let mut ctx = SearchContext::new(start);
        let mut expanded = 0usize;

        while let Some(entry) = ctx.frontier.pop() {
            let current = entry.cell;
            if current == goal {
                return PlanOutcome::Found(ctx.reconstruct(start, goal));
            }

            // Skip entries superseded by a cheaper route.
            if let Some(&best) = ctx.cost_so_far.get(&current) {
                if entry.cost > best {
                    continue;
                }
            }

            if expanded >= self.max_expansions {
                tracing::debug!(
                    ?start,
                    ?goal,
                    expanded,
                    "planner budget exhausted"
                );
                return PlanOutcome::BudgetExhausted { expanded };
            }
            expanded += 1;

            for next in grid.neighbors(current) {
                if next != goal && obstacles.is_blocked(&next) {
                    continue;
                }
                let new_cost = entry.cost + current.distance_to(&next);
                let improves = ctx
                    .cost_so_far
                    .get(&next)
                    .is_none_or(|&known| new_cost < known);
                if improves {
                    ctx.cost_so_far.insert(next, new_cost);
                    ctx.came_from.insert(next, current);
                    let priority = new_cost + next.distance_to(&goal);
                    ctx.push(next, new_cost, priority);
                }
            }
        }

        PlanOutcome::Unreachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_connected(start: Position, path: &[Position]) {
        let mut prev = start;
        for cell in path {
            assert_eq!(prev.manhattan_to(cell), 1, "{prev:?} -> {cell:?} is not a unit step");
            prev = *cell;
        }
    }

    #[test]
    fn test_straight_descent() {
        let start = Position::new(100, 100);
        let goal = Position::new(100, 700);
        let path = plan(start, goal, &Occupancy::new(), 10_000);

        assert_eq!(path.len(), 600);
        assert_eq!(path[0], Position::new(100, 101));
        assert_eq!(*path.last().unwrap(), goal);
        assert!(path.windows(2).all(|w| w[1].y > w[0].y && w[1].x == 100));
    }

    #[test]
    fn test_obstacle_free_path_is_manhattan() {
        let cases = [
            (Position::new(2, 3), Position::new(17, 11)),
            (Position::new(19, 0), Position::new(0, 19)),
            (Position::new(5, 5), Position::new(5, 4)),
            (Position::new(0, 10), Position::new(12, 10)),
        ];
        for (start, goal) in cases {
            let path = plan(start, goal, &Occupancy::new(), 20);
            assert_eq!(path.len() as u32, start.manhattan_to(&goal), "{start:?} -> {goal:?}");
            assert_eq!(*path.last().unwrap(), goal);
            assert_connected(start, &path);
        }
    }

    #[test]
    fn test_enclosed_goal_is_unreachable() {
        let goal = Position::new(5, 5);
        let walls: Occupancy = [
            Position::new(4, 5),
            Position::new(6, 5),
            Position::new(5, 4),
            Position::new(5, 6),
        ]
        .into_iter()
        .collect();
        let outcome = Planner::default().plan(&SpatialGrid::unit(10), Position::new(0, 0), goal, &walls);
        assert_eq!(outcome, PlanOutcome::Unreachable);
        assert!(outcome.into_path().is_empty());
    }

    #[test]
    fn test_detours_around_wall() {
        // Vertical wall at x = 3 from y = 0 to y = 3, gap at y = 4.
        let walls: Occupancy = (0..4).map(|y| Position::new(3, y)).collect();
        let start = Position::new(1, 1);
        let goal = Position::new(5, 1);
        let path = plan(start, goal, &walls, 6);

        assert!(!path.is_empty());
        assert!(path.iter().all(|cell| !walls.is_blocked(cell)));
        assert!(path.contains(&Position::new(3, 4)));
        // 4 across plus 3 down and 3 back up.
        assert_eq!(path.len(), 10);
        assert_connected(start, &path);
    }

    #[test]
    fn test_goal_on_obstacle_is_enterable() {
        let goal = Position::new(4, 4);
        let obstacles: Occupancy = [goal].into_iter().collect();
        let path = plan(Position::new(4, 0), goal, &obstacles, 8);
        assert_eq!(path.len(), 4);
        assert_eq!(*path.last().unwrap(), goal);
    }

    #[test]
    fn test_out_of_bounds_is_unreachable() {
        let outcome = Planner::default().plan(
            &SpatialGrid::unit(10),
            Position::new(0, 0),
            Position::new(10, 3),
            &Occupancy::new(),
        );
        assert_eq!(outcome, PlanOutcome::Unreachable);

        let outcome = Planner::default().plan(
            &SpatialGrid::unit(10),
            Position::new(-1, 0),
            Position::new(3, 3),
            &Occupancy::new(),
        );
        assert_eq!(outcome, PlanOutcome::Unreachable);
    }

    #[test]
    fn test_start_equals_goal() {
        let here = Position::new(3, 3);
        let path = plan(here, here, &Occupancy::new(), 10);
        assert_eq!(path, vec![here]);
    }

    #[test]
    fn test_budget_exhaustion_degrades_to_empty() {
        let planner = Planner::new(10);
        let outcome = planner.plan(
            &SpatialGrid::unit(1_000),
            Position::new(0, 0),
            Position::new(500, 500),
            &Occupancy::new(),
        );
        assert!(matches!(outcome, PlanOutcome::BudgetExhausted { expanded: 10 }));
        assert_eq!(outcome.first_step(), None);
    }

    #[test]
    fn test_deterministic() {
        let walls: Occupancy = [Position::new(2, 2), Position::new(3, 5)].into_iter().collect();
        let a = plan(Position::new(0, 0), Position::new(7, 7), &walls, 8);
        let b = plan(Position::new(0, 0), Position::new(7, 7), &walls, 8);
        assert_eq!(a, b);
    }
}
