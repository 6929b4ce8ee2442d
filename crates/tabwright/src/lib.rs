//! # tabwright
//!
//! Build spreadsheets in memory and hand them to an external renderer.
//!
//! ## Features
//!
//! - Dynamically-growing cell grid addressed by A1 references or indices
//! - Named and inline cell styles, interned per export
//! - Merges, column widths, row heights, auto-filters, panes
//! - Data validations, tables, comments, row and column groups
//! - Document properties and workbook protection
//! - Structural validation before anything leaves the process
//!
//! ## Example
//!
//! ```rust
//! use tabwright::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! workbook.register_named_style("Header", Style::new().bold(true));
//!
//! let sheet = workbook.current_sheet_mut();
//! sheet.set("A1", CellInput::styled("Name", "Header")).unwrap();
//! sheet.set("B1", CellInput::styled("Score", "Header")).unwrap();
//! sheet.set_row(1, vec!["Alice".into(), 90.into()]).unwrap();
//!
//! let bytes = workbook.export_bytes().unwrap();
//! assert!(!bytes.is_empty());
//!
//! // let file = workbook.render_with(&my_renderer)?;
//! ```

pub mod export;
pub mod prelude;
pub mod render;

pub use export::{ExportError, WorkbookExportExt};
pub use render::{RenderError, Renderer};

// Re-export core types
pub use tabwright_core::{
    column_to_index,
    index_to_column,
    locate_column,
    reference_to_rowcol,
    rowcol_to_reference,
    validators,
    ActivePane,
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    // Build lifecycle
    BuildState,
    // Cell types
    Cell,
    CellInput,
    CellRange,
    CellReference,
    CellValue,
    Color,
    ColumnGroup,
    ColumnKey,
    // Sheet metadata
    Comment,
    CommentRun,
    DataValidation,
    // Error types
    Error,
    FileProperties,
    FillPattern,
    FillStyle,
    FontStyle,
    Grid,
    HorizontalAlignment,
    NumberFormat,
    Panes,
    Protection,
    ProtectionAlgorithm,
    RangeSpec,
    Result,
    RowGroup,
    Selection,
    // Style types
    Style,
    StyleAttributes,
    StyleRef,
    StyleRegistry,
    StyleTarget,
    Table,
    UnderlineStyle,
    VerticalAlignment,
    // Main types
    Workbook,
    WorkbookProtection,
    WorkbookSettings,
    Worksheet,
    WriterEngine,

    DEFAULT_STYLE,
    MAX_COLS,
    // Constants
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export snapshot types
pub use tabwright_snapshot::{
    ExchangeDocument, SerializedCell, SheetDocument, SheetMap, SnapshotError, SnapshotSerializer,
};
