//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellReference`] / [`CellRange`] - a cell's location (e.g., "A1") and ranges
//! - [`CellValue`] - The value stored in a cell
//! - [`Cell`] - value plus style handle
//! - [`CellInput`] - a value about to be written, optionally styled
//! - [`Grid`] - the row-major cell storage of a worksheet

mod address;
mod grid;
mod input;
mod value;

pub use address::{
    column_to_index, index_to_column, locate_column, reference_to_rowcol, rowcol_to_reference,
    CellRange, CellReference, ColumnKey, RangeSpec,
};
pub use grid::{Grid, StyleTarget};
pub use input::CellInput;
pub use value::{Cell, CellValue, StyleRef};
