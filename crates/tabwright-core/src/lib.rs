//! # tabwright-core
//!
//! Core document model for tabwright.
//!
//! This crate provides the types a caller uses to build a spreadsheet before it is
//! handed to an external renderer:
//! - [`CellReference`], [`CellRange`] and the A1 codec functions
//! - [`Grid`], [`Cell`], [`CellValue`] and [`StyleRef`] - the dynamically-growing cell grid
//! - [`Style`] and [`StyleRegistry`] - style descriptors and their interning
//! - [`Workbook`], [`Worksheet`] - the document structures and sheet metadata
//! - [`validators`] - structural checks run before a snapshot is taken
//!
//! ## Example
//!
//! ```rust
//! use tabwright_core::{Workbook, CellInput};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.current_sheet_mut();
//!
//! sheet.set("A1", CellInput::from("Hello")).unwrap();
//! sheet.set_at(0, 1, CellInput::from(42)).unwrap();
//!
//! assert_eq!(sheet.get("B1").unwrap().unwrap().value.to_string(), "42");
//! ```

pub mod cell;
pub mod comment;
pub mod error;
pub mod group;
pub mod panes;
pub mod properties;
pub mod style;
pub mod table;
pub mod validation;
pub mod validators;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{
    column_to_index, index_to_column, locate_column, reference_to_rowcol, rowcol_to_reference,
    Cell, CellInput, CellRange, CellReference, CellValue, ColumnKey, Grid, RangeSpec, StyleRef,
    StyleTarget,
};
pub use comment::{Comment, CommentRun};
pub use error::{Error, Result};
pub use group::{ColumnGroup, RowGroup};
pub use panes::{ActivePane, Panes, Selection};
pub use properties::{FileProperties, ProtectionAlgorithm, WorkbookProtection};
pub use table::Table;
pub use validation::DataValidation;
pub use workbook::{BuildState, Workbook, WorkbookSettings, WriterEngine};
pub use worksheet::Worksheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillPattern, FillStyle,
    FontStyle, HorizontalAlignment, NumberFormat, Protection, Style, StyleAttributes,
    StyleRegistry, UnderlineStyle, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Reserved name of the style every fresh cell carries
pub const DEFAULT_STYLE: &str = "DEFAULT_STYLE";
