//! Prelude module - common imports for tabwright users
//!
//! ```rust
//! use tabwright::prelude::*;
//! ```

pub use crate::{
    Alignment,
    BorderStyle,
    BuildState,
    CellInput,
    CellRange,
    CellReference,
    // Cell types
    CellValue,
    Color,
    Comment,
    DataValidation,

    // Error types
    Error,
    // Snapshot types
    ExchangeDocument,
    ExportError,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    Panes,
    RenderError,
    Renderer,
    Result,

    // Style types
    Style,
    StyleRef,
    Table,
    VerticalAlignment,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExportExt,
    WorkbookSettings,
    Worksheet,
};
