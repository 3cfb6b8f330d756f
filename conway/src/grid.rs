// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use crate::error::{GridError, Result};

/// Width and height of a grid, in cells. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangular matrix of alive/dead cells, stored row by row.
///
/// Cells are addressed as `(x, y)`: column first, then row. A `Grid` can only
/// be built through validating constructors, so it always has at least one
/// row, at least one column, and every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// Validates `rows` and takes ownership of them.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(GridError::Empty),
        };
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GridError::Jagged { row, expected, found });
        }
        Ok(Self { rows })
    }

    pub fn dead(size: GridSize) -> Self {
        Self { rows: vec![vec![false; size.width]; size.height] }
    }

    /// Builds a grid by asking `distributor` for every cell, row by row.
    pub fn generate(size: GridSize, mut distributor: impl FnMut(usize, usize) -> bool) -> Self {
        let rows = (0..size.height)
            .map(|y| (0..size.width).map(|x| distributor(x, y)).collect())
            .collect();
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn size(&self) -> GridSize {
        GridSize { width: self.width(), height: self.height() }
    }

    /// Panics if `(x, y)` lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        self.rows[y][x] = alive;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        let cell = &mut self.rows[y][x];
        *cell = !*cell;
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(x, _)| (x, y))
        })
    }

    pub fn population(&self) -> usize {
        self.rows.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows.clone()
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &alive in row {
                f.write_str(if alive { "█" } else { "·" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
