//! SpatialGrid: square cell grid over the arena with world/cell mapping.

use std::collections::HashSet;

use seabed_core::types::Position;

/// 4-connected neighbor offsets: down, right, up, left.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Square grid of `bound x bound` cells, each `cell_size` arena units wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialGrid {
    bound: i32,
    cell_size: i32,
}

/// Cells currently occupied by visible fish. Point occupancy only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: HashSet<Position>,
}

impl SpatialGrid {
    /// Grid covering `[0, map_size)` with cells of `cell_size` units.
    /// A `cell_size` of 1 makes cell and world coordinates identical.
    pub fn new(map_size: i32, cell_size: i32) -> Self {
        let cell_size = cell_size.max(1);
        let map_size = map_size.max(0);
        let bound = map_size / cell_size + i32::from(map_size % cell_size != 0);
        Self { bound, cell_size }
    }

    /// Unit-cell grid of `bound x bound`.
    pub fn unit(bound: i32) -> Self {
        Self::new(bound, 1)
    }

    /// Number of cells per side.
    pub fn bound(&self) -> i32 {
        self.bound
    }

    pub fn contains(&self, cell: &Position) -> bool {
        cell.in_bounds(self.bound)
    }

    /// Cell holding a world position. May lie outside the grid.
    pub fn to_cell(&self, pos: &Position) -> Position {
        Position::new(
            pos.x.div_euclid(self.cell_size),
            pos.y.div_euclid(self.cell_size),
        )
    }

    /// World position at the center of a cell.
    pub fn to_world(&self, cell: &Position) -> Position {
        let half = self.cell_size / 2;
        Position::new(
            cell.x * self.cell_size + half,
            cell.y * self.cell_size + half,
        )
    }

    /// In-bounds 4-connected neighbors of `cell`, in `NEIGHBOR_OFFSETS` order.
    pub fn neighbors(&self, cell: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |(dx, dy)| Position::new(cell.x + dx, cell.y + dy))
            .filter(move |next| self.contains(next))
    }

    /// Occupancy from world positions, mapped onto this grid.
    pub fn occupancy<'a>(&self, positions: impl IntoIterator<Item = &'a Position>) -> Occupancy {
        Occupancy {
            cells: positions
                .into_iter()
                .map(|pos| self.to_cell(pos))
                .filter(|cell| self.contains(cell))
                .collect(),
        }
    }
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blocked(&self, cell: &Position) -> bool {
        self.cells.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Position> for Occupancy {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_grid_is_identity() {
        let grid = SpatialGrid::unit(10_000);
        let pos = Position::new(1_234, 9_876);
        assert_eq!(grid.to_cell(&pos), pos);
        assert_eq!(grid.to_world(&pos), pos);
        assert_eq!(grid.bound(), 10_000);
    }

    #[test]
    fn test_coarse_grid_mapping() {
        let grid = SpatialGrid::new(10_000, 100);
        assert_eq!(grid.bound(), 100);
        assert_eq!(grid.to_cell(&Position::new(250, 9_999)), Position::new(2, 99));
        assert_eq!(grid.to_world(&Position::new(2, 99)), Position::new(250, 9_950));
    }

    #[test]
    fn test_bound_rounds_up() {
        let grid = SpatialGrid::new(1_050, 100);
        assert_eq!(grid.bound(), 11);
    }

    #[test]
    fn test_bound_near_i32_max() {
        let grid = SpatialGrid::new(i32::MAX, 100);
        assert_eq!(grid.bound(), i32::MAX / 100 + 1);

        let unit = SpatialGrid::unit(i32::MAX);
        assert_eq!(unit.bound(), i32::MAX);
    }

    #[test]
    fn test_neighbors_clip_at_edges() {
        let grid = SpatialGrid::unit(5);
        let corner: Vec<Position> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(0, 1), Position::new(1, 0)]);

        let middle: Vec<Position> = grid.neighbors(Position::new(2, 2)).collect();
        assert_eq!(middle.len(), 4);
    }

    #[test]
    fn test_occupancy_drops_out_of_grid_positions() {
        let grid = SpatialGrid::new(1_000, 100);
        let positions = [
            Position::new(150, 150),
            Position::new(199, 120),
            Position::new(5_000, 5_000),
        ];
        let occupancy = grid.occupancy(positions.iter());
        assert_eq!(occupancy.len(), 1);
        assert!(occupancy.is_blocked(&Position::new(1, 1)));
    }
}
