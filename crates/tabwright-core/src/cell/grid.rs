//! Row-major cell grid
//!
//! The grid never has holes: touching a cell backfills every slot before it
//! with fresh default cells. Rows may have different lengths.

use super::address::{CellReference, RangeSpec};
use super::input::CellInput;
use super::value::{Cell, CellValue, StyleRef};
use crate::error::{Error, Result};

/// Where [`Grid::set_style`] applies a style
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleTarget {
    /// A single A1 reference
    Reference(String),
    /// A single-row range
    Range(RangeSpec),
    /// Zero-based `(row, col)`
    Position(u32, u32),
}

impl From<&str> for StyleTarget {
    fn from(s: &str) -> Self {
        if s.contains(':') {
            StyleTarget::Range(RangeSpec::from(s))
        } else {
            StyleTarget::Reference(s.to_string())
        }
    }
}

impl From<(u32, u32)> for StyleTarget {
    fn from((row, col): (u32, u32)) -> Self {
        StyleTarget::Position(row, col)
    }
}

impl From<RangeSpec> for StyleTarget {
    fn from(spec: RangeSpec) -> Self {
        StyleTarget::Range(spec)
    }
}

/// Dense, dynamically-growing cell storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid holding a single default cell
    pub fn new() -> Self {
        Self {
            rows: vec![vec![Cell::default()]],
        }
    }

    /// Create a grid pre-filled with `n_rows` x `n_cols` default cells
    pub fn with_capacity(n_rows: u32, n_cols: u32) -> Result<Self> {
        CellReference::checked(n_rows.saturating_sub(1), n_cols.saturating_sub(1))?;
        let (n_rows, n_cols) = (n_rows.max(1) as usize, n_cols.max(1) as usize);
        Ok(Self {
            rows: (0..n_rows).map(|_| fresh_row(n_cols)).collect(),
        })
    }

    /// Build a grid from rows of plain values
    pub fn from_values(rows: Vec<Vec<CellValue>>) -> Self {
        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::plain).collect())
            .collect();
        if rows.is_empty() {
            Self::new()
        } else {
            Self { rows }
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Get a row by zero-based index
    pub fn row(&self, index: u32) -> Option<&[Cell]> {
        self.rows.get(index as usize).map(Vec::as_slice)
    }

    /// Get the cell at zero-based `(row, col)`, if the grid reaches it
    pub fn get_at(&self, row: u32, col: u32) -> Option<&Cell> {
        self.rows.get(row as usize)?.get(col as usize)
    }

    /// Get the cell at an A1 reference, if the grid reaches it
    pub fn get(&self, reference: &str) -> Result<Option<&Cell>> {
        let addr = CellReference::locate(reference)?;
        Ok(self.get_at(addr.row, addr.col))
    }

    /// Cells of a single-row range, clipped to the cells that exist
    pub fn get_range<R: Into<RangeSpec>>(&self, spec: R) -> Result<&[Cell]> {
        let spec = spec.into();
        let range = spec.to_range()?;
        if !range.is_single_row() {
            return Err(Error::UnsupportedRange(range.to_a1_string()));
        }

        let row = match self.rows.get(range.start.row as usize) {
            Some(row) => row,
            None => return Ok(&[]),
        };
        let start = range.start.col as usize;
        let end = (range.end.col as usize + 1).min(row.len());
        Ok(row.get(start..end).unwrap_or(&[]))
    }

    /// Write a cell at zero-based `(row, col)`, growing the grid as needed
    pub fn set_at<I: Into<CellInput>>(&mut self, row: u32, col: u32, input: I) -> Result<()> {
        let addr = CellReference::checked(row, col)?;
        *self.slot(addr) = input.into().into_cell();
        Ok(())
    }

    /// Write a cell at an A1 reference, growing the grid as needed
    pub fn set<I: Into<CellInput>>(&mut self, reference: &str, input: I) -> Result<()> {
        let addr = CellReference::locate(reference)?;
        *self.slot(addr) = input.into().into_cell();
        Ok(())
    }

    /// Replace a whole row, growing the grid to reach it
    pub fn set_row(&mut self, index: u32, inputs: Vec<CellInput>) -> Result<()> {
        let last_col = (inputs.len() as u32).saturating_sub(1);
        let addr = CellReference::checked(index, last_col)?;
        self.grow(addr);
        self.rows[index as usize] = inputs.into_iter().map(CellInput::into_cell).collect();
        Ok(())
    }

    /// Write consecutive cells of a single-row range
    ///
    /// Inputs beyond the width of the range are ignored.
    pub fn set_range<R: Into<RangeSpec>>(&mut self, spec: R, inputs: Vec<CellInput>) -> Result<()> {
        let range = spec.into().to_range()?;
        if !range.is_single_row() {
            return Err(Error::UnsupportedRange(range.to_a1_string()));
        }
        if !range.is_ordered() {
            return Err(Error::InvalidAddress(format!(
                "range {} runs right to left",
                range
            )));
        }

        let count = (range.end.col - range.start.col + 1) as usize;
        if inputs.len() < count {
            return Err(Error::InvalidCellValue(format!(
                "range {} needs {} values, got {}",
                range,
                count,
                inputs.len()
            )));
        }

        self.grow(range.end);
        let row = &mut self.rows[range.start.row as usize];
        let start = range.start.col as usize;
        for (slot, input) in row[start..start + count].iter_mut().zip(inputs) {
            *slot = input.into_cell();
        }
        Ok(())
    }

    /// Re-style cells while keeping their values
    pub fn set_style<T: Into<StyleTarget>, S: Into<StyleRef>>(
        &mut self,
        target: T,
        style: S,
    ) -> Result<()> {
        let style = style.into();
        match target.into() {
            StyleTarget::Reference(reference) => {
                let addr = CellReference::locate(&reference)?;
                self.slot(addr).style = style;
            }
            StyleTarget::Position(row, col) => {
                let addr = CellReference::checked(row, col)?;
                self.slot(addr).style = style;
            }
            StyleTarget::Range(spec) => {
                let range = spec.to_range()?;
                if !range.is_single_row() {
                    return Err(Error::UnsupportedRange(range.to_a1_string()));
                }
                let (left, right) = (
                    range.start.col.min(range.end.col),
                    range.start.col.max(range.end.col),
                );
                self.grow(CellReference::new(range.start.row, right));
                let row = &mut self.rows[range.start.row as usize];
                for cell in &mut row[left as usize..=right as usize] {
                    cell.style = style.clone();
                }
            }
        }
        Ok(())
    }

    /// Iterate over every cell with its zero-based position, row-major
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (r as u32, c as u32, cell))
        })
    }

    fn slot(&mut self, addr: CellReference) -> &mut Cell {
        self.grow(addr);
        &mut self.rows[addr.row as usize][addr.col as usize]
    }

    /// Make `addr` reachable
    ///
    /// An existing target row is extended on its own. Missing rows are appended
    /// at the width of row 0 or the target width, whichever is larger.
    fn grow(&mut self, addr: CellReference) {
        let (row, col) = (addr.row as usize, addr.col as usize);
        if row < self.rows.len() {
            let target = &mut self.rows[row];
            if target.len() <= col {
                target.resize_with(col + 1, Cell::default);
            }
            return;
        }

        let width = self.rows.first().map_or(0, Vec::len).max(col + 1);
        let missing = row + 1 - self.rows.len();
        self.rows.extend((0..missing).map(|_| fresh_row(width)));
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_row(width: usize) -> Vec<Cell> {
    let mut row = Vec::with_capacity(width);
    row.resize_with(width, Cell::default);
    row
}
