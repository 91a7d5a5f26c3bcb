use core::iter::FusedIterator;

use glam::UVec2;

use crate::grid::Grid;

/// Sense of the diagonal run the scan is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `x` increases, `y` decreases
    UpRight,
    /// `x` decreases, `y` increases
    DownLeft,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
        }
    }
}

/// Which neighbour of the origin the scan moves to first.
///
/// `Down` is the same walk mirrored across the main diagonal, so the scan
/// over a `w` by `h` grid visits cell `(x, y)` where `Right` over the
/// `h` by `w` grid would visit `(y, x)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirstStep {
    #[default]
    Right,
    Down,
}

/// Lazy diagonal zigzag over every cell of a [`Grid`].
///
/// Each cell is visited exactly once, `grid.cell_count()` cells in total.
/// Only the step needed to reach the next cell is ever computed, so dropping
/// the scan early does no further work.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZigzagScan {
    grid: Grid,
    first_step: FirstStep,
    // Walk frame, transposed from the grid for `FirstStep::Down`
    cursor: UVec2,
    direction: Direction,
    remaining: u64,
}

impl ZigzagScan {
    pub(crate) fn new(grid: Grid, first_step: FirstStep) -> Self {
        Self {
            grid,
            first_step,
            cursor: UVec2::ZERO,
            direction: Direction::UpRight,
            remaining: grid.cell_count(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn first_step(&self) -> FirstStep {
        self.first_step
    }

    /// Number of cells not yet visited
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Map each visited cell to its row-major value, see [`Grid::value_of`]
    pub fn values(self) -> Values {
        Values { scan: self }
    }

    /// Pair each visited cell with the direction of the run it was visited on
    pub fn with_direction(self) -> WithDirection {
        WithDirection { scan: self }
    }

    fn extent(&self) -> UVec2 {
        match self.first_step {
            FirstStep::Right => self.grid.size(),
            FirstStep::Down => transpose(self.grid.size()),
        }
    }

    fn current(&self) -> (UVec2, Direction) {
        match self.first_step {
            FirstStep::Right => (self.cursor, self.direction),
            FirstStep::Down => (transpose(self.cursor), self.direction.reversed()),
        }
    }

    /// Move the cursor to the next cell of the walk.
    ///
    /// Boundary checks run in a fixed order and the first match wins, which
    /// is what resolves corner cells. Must only be called while another cell
    /// remains, so the cursor never leaves the grid.
    fn advance(&mut self) {
        let last = self.extent() - UVec2::ONE;
        let c = &mut self.cursor;

        self.direction = match self.direction {
            // Right wall
            Direction::UpRight if c.x == last.x => {
                c.y += 1;
                Direction::DownLeft
            }
            // Top wall
            Direction::UpRight if c.y == 0 => {
                c.x += 1;
                Direction::DownLeft
            }
            Direction::UpRight => {
                c.x += 1;
                c.y -= 1;
                Direction::UpRight
            }
            // Bottom wall
            Direction::DownLeft if c.y == last.y => {
                c.x += 1;
                Direction::UpRight
            }
            // Left wall
            Direction::DownLeft if c.x == 0 => {
                c.y += 1;
                Direction::UpRight
            }
            Direction::DownLeft => {
                c.x -= 1;
                c.y += 1;
                Direction::DownLeft
            }
        };
    }

    fn visit(&mut self) -> Option<(UVec2, Direction)> {
        if self.remaining == 0 {
            return None;
        }

        let visited = self.current();

        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(visited)
    }
}

impl Iterator for ZigzagScan {
    type Item = UVec2;

    fn next(&mut self) -> Option<Self::Item> {
        self.visit().map(|(cell, _)| cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint(self.remaining)
    }
}

impl ExactSizeIterator for ZigzagScan {}
impl FusedIterator for ZigzagScan {}

/// Values of the cells visited by a [`ZigzagScan`], in visit order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Values {
    scan: ZigzagScan,
}

impl Values {
    pub fn grid(&self) -> Grid {
        self.scan.grid
    }
}

impl Iterator for Values {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.scan.grid;
        self.scan.next().map(|cell| grid.value_of(cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scan.size_hint()
    }
}

impl ExactSizeIterator for Values {}
impl FusedIterator for Values {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithDirection {
    scan: ZigzagScan,
}

impl Iterator for WithDirection {
    type Item = (UVec2, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        self.scan.visit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scan.size_hint()
    }
}

impl ExactSizeIterator for WithDirection {}
impl FusedIterator for WithDirection {}

/// Values of a `width` by `height` grid in diagonal zigzag order.
///
/// ```
/// let values: Vec<u64> = common::zigzag(3, 3).collect();
/// assert_eq!(values, [1, 2, 4, 7, 5, 3, 6, 8, 9]);
/// ```
pub fn zigzag(width: u32, height: u32) -> Values {
    Grid::new(width, height).zigzag().values()
}

fn transpose(v: UVec2) -> UVec2 {
    UVec2::new(v.y, v.x)
}

fn size_hint(remaining: u64) -> (usize, Option<usize>) {
    match usize::try_from(remaining) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    fn cells(grid: Grid, first_step: FirstStep) -> Vec<(u32, u32)> {
        grid.zigzag_from(first_step).map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_5_by_4() {
        let values: Vec<u64> = zigzag(5, 4).collect();

        assert_eq!(
            values,
            [1, 2, 6, 11, 7, 3, 4, 8, 12, 16, 17, 13, 9, 5, 10, 14, 18, 19, 15, 20]
        );
    }

    #[test]
    fn test_5_by_4_down_first() {
        let values: Vec<u64> = Grid::new(5, 4)
            .zigzag_from(FirstStep::Down)
            .values()
            .collect();

        assert_eq!(
            values,
            [1, 6, 2, 3, 7, 11, 16, 12, 8, 4, 5, 9, 13, 17, 18, 14, 10, 15, 19, 20]
        );
    }

    #[test]
    fn test_small_grids() {
        assert_eq!(zigzag(3, 3).collect::<Vec<_>>(), [1, 2, 4, 7, 5, 3, 6, 8, 9]);
        assert_eq!(zigzag(4, 2).collect::<Vec<_>>(), [1, 2, 5, 6, 3, 4, 7, 8]);
        assert_eq!(zigzag(2, 3).collect::<Vec<_>>(), [1, 2, 3, 5, 4, 6]);
        assert_eq!(zigzag(2, 2).collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(zigzag(1, 1).collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn test_single_row_and_column() {
        assert_eq!(zigzag(1, 5).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(zigzag(5, 1).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);

        assert_eq!(
            cells(Grid::new(1, 3), FirstStep::Right),
            [(0, 0), (0, 1), (0, 2)]
        );
        assert_eq!(
            cells(Grid::new(3, 1), FirstStep::Down),
            [(0, 0), (1, 0), (2, 0)]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(zigzag(0, 4).count(), 0);
        assert_eq!(zigzag(5, 0).count(), 0);
        assert_eq!(zigzag(0, 0).count(), 0);
        assert_eq!(zigzag(0, u32::MAX).len(), 0);
    }

    #[test]
    fn test_corner_resolution() {
        // On a 2x2 the top right corner hits both the right and top walls
        let visits: Vec<_> = Grid::new(2, 2).zigzag().with_direction().collect();

        assert_eq!(
            visits,
            [
                (UVec2::new(0, 0), Direction::UpRight),
                (UVec2::new(1, 0), Direction::DownLeft),
                (UVec2::new(0, 1), Direction::DownLeft),
                (UVec2::new(1, 1), Direction::UpRight),
            ]
        );
    }

    #[test]
    fn test_down_first_is_transposed() {
        let grid = Grid::new(4, 3);
        let mirrored = Grid::new(3, 4);

        let down: Vec<_> = grid.zigzag_from(FirstStep::Down).with_direction().collect();
        let right: Vec<_> = mirrored.zigzag().with_direction().collect();

        assert_eq!(down.len(), right.len());
        for ((a, da), (b, db)) in down.into_iter().zip(right) {
            assert_eq!(a, transpose(b));
            assert_eq!(da, db.reversed());
        }
    }

    #[test]
    fn test_exact_size() {
        let mut scan = Grid::new(5, 4).zigzag();

        for left in (0..20).rev() {
            assert!(scan.next().is_some());
            assert_eq!(scan.len(), left);
            assert_eq!(scan.remaining(), left as u64);
        }

        assert_eq!(scan.next(), None);
        assert_eq!(scan.next(), None);
        assert_eq!(scan.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_early_stop() {
        let mut scan = Grid::new(5, 4).zigzag();

        assert_eq!(scan.by_ref().take(3).count(), 3);
        assert_eq!(scan.remaining(), 17);
        assert_eq!(scan.values().next(), Some(11));
    }

    #[test]
    fn test_huge_grid_is_lazy() {
        let values: Vec<u64> = zigzag(u32::MAX, u32::MAX).take(4).collect();

        assert_eq!(values, [1, 2, 4_294_967_296, 8_589_934_591]);
    }

    #[test]
    fn test_clone_continues_from_same_cell() {
        let mut scan = Grid::new(3, 3).zigzag();
        scan.next();

        let copy = scan.clone();

        assert_eq!(scan.collect::<Vec<_>>(), copy.collect::<Vec<_>>());
    }
}
