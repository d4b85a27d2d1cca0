//! Conway's Game of Life on a fixed-size toroidal grid
//!
//! Cells carry their own live-neighbor count, updated incrementally whenever a
//! neighbor is born or dies. A generation runs in two passes: first the
//! transitions marked by the previous generation are committed (which is the
//! only place neighbor counts move), then every non-blank cell is checked
//! against B3/S23 and marked for the next commit.

use thiserror::Error;

/// Errors raised by the Life engine
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifeError {
    #[error("cannot build a {width}x{height} grid")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// State of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    pending_spawn: bool,
    pending_kill: bool,
    neighbor_count: u8,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Dead now, alive after the next commit
    pub fn is_spawning(&self) -> bool {
        self.pending_spawn
    }

    /// Alive now, dead after the next commit
    pub fn is_dying(&self) -> bool {
        self.pending_kill
    }

    pub fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    #[inline]
    fn is_blank(&self) -> bool {
        *self == Cell::default()
    }
}

/// Toroidal Life world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>, // row-major
    live_cells: usize,
    generation: u64,
}

impl LifeGrid {
    /// Create an empty grid.
    ///
    /// Fails with `InvalidDimensions` if either side is zero or the cell
    /// buffer cannot be allocated. Grids narrower or shorter than 3 cells see
    /// the same neighbor more than once through the wrap; a 1x1 cell is its
    /// own neighbor eight times.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let invalid = LifeError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::default());

        Ok(Self {
            width,
            height,
            cells,
            live_cells: 0,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells currently alive
    pub fn live_cell_count(&self) -> usize {
        self.live_cells
    }

    /// Number of completed `advance` calls
    pub fn generation_count(&self) -> u64 {
        self.generation
    }

    /// Schedule a cell to be alive after the next `advance`.
    ///
    /// Nothing else changes until then. Seeding a cell that is already alive
    /// cancels a pending kill instead, so the cell simply stays alive.
    pub fn seed(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        let idx = self.index(x, y)?;
        let cell = &mut self.cells[idx];
        if cell.alive {
            cell.pending_kill = false;
        } else {
            cell.pending_spawn = true;
        }
        Ok(())
    }

    /// Clear every cell. The generation counter keeps running.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
        self.live_cells = 0;
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, LifeError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.cell(x, y).map(|c| c.alive)
    }

    /// Advance one generation
    pub fn advance(&mut self) {
        self.commit();
        self.evaluate();
        self.generation += 1;
    }

    /// Apply the spawns and kills marked by the previous evaluation
    fn commit(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let cell = self.cells[idx];
                if cell.pending_spawn {
                    self.for_each_neighbor(x, y, |n| n.neighbor_count += 1);
                    let cell = &mut self.cells[idx];
                    cell.alive = true;
                    cell.pending_spawn = false;
                    self.live_cells += 1;
                } else if cell.pending_kill {
                    self.for_each_neighbor(x, y, |n| n.neighbor_count -= 1);
                    let cell = &mut self.cells[idx];
                    cell.alive = false;
                    cell.pending_kill = false;
                    self.live_cells -= 1;
                }
            }
        }
    }

    /// Mark transitions for the next commit using the counts just settled
    fn evaluate(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| !c.is_blank()) {
            match (cell.alive, cell.neighbor_count) {
                (true, 2) | (true, 3) => {}
                (true, _) => cell.pending_kill = true,
                (false, 3) => cell.pending_spawn = true,
                (false, _) => {}
            }
        }
    }

    #[inline]
    fn for_each_neighbor(&mut self, x: usize, y: usize, mut f: impl FnMut(&mut Cell)) {
        let w = self.width;
        let h = self.height;
        let cols = [(x + w - 1) % w, x, (x + 1) % w];
        let rows = [(y + h - 1) % h, y, (y + 1) % h];
        for (ri, &ny) in rows.iter().enumerate() {
            for (ci, &nx) in cols.iter().enumerate() {
                if ri == 1 && ci == 1 {
                    continue;
                }
                f(&mut self.cells[ny * w + nx]);
            }
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_set(grid: &LifeGrid) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_alive(x, y).unwrap() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn seeded(width: usize, height: usize, cells: &[(usize, usize)]) -> LifeGrid {
        let mut grid = LifeGrid::new(width, height).unwrap();
        for &(x, y) in cells {
            grid.seed(x, y).unwrap();
        }
        grid.advance();
        grid
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            LifeGrid::new(0, 4),
            Err(LifeError::InvalidDimensions { width: 0, height: 4 })
        );
        assert!(LifeGrid::new(4, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let wide = usize::MAX / 2 + 1;
        assert_eq!(
            LifeGrid::new(wide, 2),
            Err(LifeError::InvalidDimensions { width: wide, height: 2 })
        );
        // Cell count fits in usize but the byte size does not
        assert!(LifeGrid::new(usize::MAX / 4, 2).is_err());
    }

    #[test]
    fn single_cell_grid_neighbors_itself() {
        let mut grid = seeded(1, 1, &[(0, 0)]);
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.neighbor_count(), 8);
        assert!(cell.is_dying());

        grid.advance();
        assert_eq!(grid.cell(0, 0).unwrap(), Cell::default());
        assert_eq!(grid.live_cell_count(), 0);
    }

    #[test]
    fn seed_defers_everything_until_advance() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        grid.seed(2, 2).unwrap();
        grid.seed(2, 2).unwrap();

        let cell = grid.cell(2, 2).unwrap();
        assert!(cell.is_spawning());
        assert!(!cell.is_alive());
        assert_eq!(grid.cell(1, 1).unwrap().neighbor_count(), 0);
        assert_eq!(grid.live_cell_count(), 0);

        grid.advance();
        assert!(grid.is_alive(2, 2).unwrap());
        assert_eq!(grid.cell(1, 1).unwrap().neighbor_count(), 1);
        assert_eq!(grid.live_cell_count(), 1);
    }

    #[test]
    fn isolated_cell_is_marked_then_dies() {
        let mut grid = seeded(6, 6, &[(3, 3)]);
        let cell = grid.cell(3, 3).unwrap();
        assert!(cell.is_alive());
        assert!(cell.is_dying());

        grid.advance();
        assert!(!grid.is_alive(3, 3).unwrap());
        assert_eq!(grid.live_cell_count(), 0);
        assert_eq!(grid.cell(2, 2).unwrap().neighbor_count(), 0);
    }

    #[test]
    fn seeding_live_cell_cancels_kill() {
        let mut grid = seeded(6, 6, &[(3, 3)]);
        grid.seed(3, 3).unwrap();
        let cell = grid.cell(3, 3).unwrap();
        assert!(cell.is_alive());
        assert!(!cell.is_dying());
        assert!(!cell.is_spawning());

        grid.advance();
        assert!(grid.is_alive(3, 3).unwrap());
        assert_eq!(grid.live_cell_count(), 1);
    }

    #[test]
    fn reset_clears_cells_but_not_generation() {
        let mut grid = seeded(6, 6, &[(1, 1), (2, 1), (1, 2)]);
        grid.advance();
        grid.reset();
        assert!(alive_set(&grid).is_empty());
        assert_eq!(grid.live_cell_count(), 0);
        assert_eq!(grid.generation_count(), 2);
        assert_eq!(grid.cell(0, 0).unwrap(), Cell::default());
    }

    #[test]
    fn corner_cell_wraps_to_opposite_edges() {
        let grid = seeded(5, 4, &[(0, 0)]);
        for (x, y) in [(4, 3), (4, 0), (0, 3), (1, 1), (1, 0), (0, 1), (4, 1), (1, 3)] {
            assert_eq!(grid.cell(x, y).unwrap().neighbor_count(), 1, "({x},{y})");
        }
        assert_eq!(grid.cell(2, 2).unwrap().neighbor_count(), 0);
        assert_eq!(grid.cell(0, 0).unwrap().neighbor_count(), 0);
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut grid = LifeGrid::new(3, 2).unwrap();
        let err = grid.seed(3, 0).unwrap_err();
        assert_eq!(
            err,
            LifeError::OutOfRange { x: 3, y: 0, width: 3, height: 2 }
        );
        assert!(grid.is_alive(0, 2).is_err());
        assert!(grid.cell(7, 7).is_err());
    }

    #[test]
    fn evaluation_ignores_scan_order() {
        // An L-tromino grows into a block in one generation regardless of
        // which corner the scan reaches first.
        let mut grid = seeded(8, 8, &[(3, 3), (4, 3), (3, 4)]);
        assert!(grid.cell(4, 4).unwrap().is_spawning());
        grid.advance();
        assert_eq!(alive_set(&grid), vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }
}
