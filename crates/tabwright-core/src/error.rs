//! Error types for tabwright-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a workbook
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed cell reference, column letters or column index
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Syntactically valid address outside the sheet bounds
    #[error("{what} {value} out of range (valid: 1..={max})")]
    OutOfRange {
        what: &'static str,
        value: u64,
        max: u64,
    },

    /// Range access that spans more than one row
    #[error("Unsupported range {0}: only single-row ranges can be read or written")]
    UnsupportedRange(String),

    /// Cell input with the wrong shape
    #[error("Invalid cell value: {0}")]
    InvalidCellValue(String),

    /// Style handle that is neither a name nor a descriptor
    #[error("Invalid style type: expected a style name or a style descriptor, got {0}")]
    InvalidStyleType(String),

    /// Style name that was never registered
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// Sheet name already used in the workbook
    #[error("Sheet already exists: {0}")]
    DuplicateSheet(String),

    /// Sheet lookup by name failed
    #[error("Sheet does not exist: {0}")]
    NoSuchSheet(String),

    /// Attempt to remove the only sheet of a workbook
    #[error("Cannot remove {0}: a workbook must keep at least one sheet")]
    LastSheetError(String),

    /// Sheet name that Excel would reject
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Merge range with inverted, out-of-range or single-cell corners
    #[error("Invalid merge range {range}: {reason}")]
    InvalidMergeRange { range: String, reason: String },

    /// Table declaration that cannot be accepted (range shape, style name)
    #[error("Invalid table {name}: {reason}")]
    InvalidTable { name: String, reason: String },

    /// Table content that breaks header or first-column uniqueness
    #[error("Invalid table data in {table}: {reason}")]
    InvalidTableData { table: String, reason: String },

    /// Data-validation rule with an incomplete pair or a bad reference
    #[error("Invalid data validation: {0}")]
    InvalidDataValidation(String),

    /// Pane configuration that the renderer would reject
    #[error("Invalid panes: {0}")]
    InvalidPanes(String),

    /// Comment with no text runs
    #[error("Invalid comment: {0}")]
    InvalidComment(String),

    /// File property key outside the fixed key set
    #[error("Invalid file property: {0}")]
    InvalidFileProperty(String),

    /// Workbook protection with an unsupported algorithm
    #[error("Invalid protection algorithm {0}: expected one of XOR, MD4, MD5, SHA-1, SHA-256, SHA-384, SHA-512")]
    InvalidProtection(String),
}

impl Error {
    pub(crate) fn row_out_of_range(row: u64) -> Self {
        Error::OutOfRange {
            what: "Row",
            value: row,
            max: crate::MAX_ROWS as u64,
        }
    }

    pub(crate) fn column_out_of_range(col: u64) -> Self {
        Error::OutOfRange {
            what: "Column",
            value: col,
            max: crate::MAX_COLS as u64,
        }
    }

    /// Create an [`Error::InvalidMergeRange`]
    pub fn invalid_merge<R: Into<String>, S: Into<String>>(range: R, reason: S) -> Self {
        Error::InvalidMergeRange {
            range: range.into(),
            reason: reason.into(),
        }
    }

    /// Create an [`Error::InvalidTableData`]
    pub fn invalid_table_data<T: Into<String>, S: Into<String>>(table: T, reason: S) -> Self {
        Error::InvalidTableData {
            table: table.into(),
            reason: reason.into(),
        }
    }
}
