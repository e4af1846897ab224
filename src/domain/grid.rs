use super::{Cell, Fate, Template};
use crate::error::{LifeError, Result};
use rand::Rng;

/// Number of rows on the board
pub const ROWS: usize = 10;
/// Number of columns on the board
pub const COLS: usize = 10;

/// Result of advancing a grid by one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub grid: Grid,
    /// Positions where a dead cell came to life
    pub births: usize,
}

/// Grid holds the fixed 10×10 board of cells, row-major.
/// Every operation that changes cells returns a new grid and leaves
/// `self` untouched, so old and new states can be compared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new() -> Self {
        let cells = (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| Cell::dead(row, col)))
            .collect();
        Self { cells }
    }

    const fn index(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    /// Validate signed coordinates coming from input
    pub fn checked(row: i32, col: i32) -> Result<(usize, usize)> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < ROWS && c < COLS => Ok((r, c)),
            _ => Err(LifeError::OutOfBounds { row, col }),
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        (row < ROWS && col < COLS).then(|| &self.cells[Self::index(row, col)])
    }

    fn is_alive_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Count live neighbors in the Moore neighborhood.
    /// Edges are bounded: positions off the board count as dead.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                Some((r, c))
            })
            .filter(|&(r, c)| self.is_alive_at(r, c))
            .count() as u8
    }

    /// Compute the next generation.
    /// Survivors keep their variant, births draw a fresh one from `rng`.
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> Generation {
        let mut births = 0;
        let cells = self
            .cells
            .iter()
            .map(|cell| match cell.fate(self.count_neighbors(cell.row(), cell.col())) {
                Fate::Survives => *cell,
                Fate::Born => {
                    births += 1;
                    cell.born(rng)
                }
                Fate::Dies | Fate::StaysDead => cell.killed(),
            })
            .collect();

        Generation {
            grid: Self { cells },
            births,
        }
    }

    /// Give every cell an independent coin-flip liveness
    pub fn randomize<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|cell| {
                let alive = rng.random_bool(0.5);
                cell.with_alive(alive, rng)
            })
            .collect();
        Self { cells }
    }

    /// Fresh grid with only the template's coordinates alive
    pub fn from_template<R: Rng + ?Sized>(template: &Template, rng: &mut R) -> Self {
        let mut grid = Self::new();
        for &(row, col) in template.cells {
            if row < ROWS && col < COLS {
                let idx = Self::index(row, col);
                grid.cells[idx] = grid.cells[idx].born(rng);
            }
        }
        grid
    }

    /// Flip a single cell
    pub fn toggle<R: Rng + ?Sized>(&self, row: i32, col: i32, rng: &mut R) -> Result<Self> {
        let (r, c) = Self::checked(row, col)?;
        let mut grid = self.clone();
        let idx = Self::index(r, c);
        grid.cells[idx] = grid.cells[idx].toggle(rng);
        Ok(grid)
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Coordinates of every living cell, row-major
    pub fn alive_coords(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.row(), cell.col()))
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
