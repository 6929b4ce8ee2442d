//! Row and column outline groups

use crate::cell::column_to_index;
use crate::error::{Error, Result};
use crate::MAX_ROWS;
use serde::Serialize;

/// Deepest outline level Excel supports
pub const MAX_OUTLINE_LEVEL: u8 = 7;

/// Rows `start_row..=end_row` (1-based) grouped at an outline level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowGroup {
    pub start_row: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_row: Option<u32>,
    pub outline_level: u8,
    pub hidden: bool,
}

impl RowGroup {
    /// Group a single row, or a span when `end_row` is given
    pub fn new(start_row: u32, end_row: Option<u32>, outline_level: u8, hidden: bool) -> Self {
        Self {
            start_row,
            end_row,
            outline_level,
            hidden,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for row in std::iter::once(self.start_row).chain(self.end_row) {
            if row == 0 || row > MAX_ROWS {
                return Err(Error::row_out_of_range(row as u64));
            }
        }
        if self.end_row.map_or(false, |end| end < self.start_row) {
            return Err(Error::InvalidAddress(format!(
                "row group ends before it starts ({} > {})",
                self.start_row,
                self.end_row.unwrap_or_default()
            )));
        }
        check_level(self.outline_level)
    }
}

/// Columns `start_col..=end_col` (letters) grouped at an outline level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnGroup {
    pub start_col: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_col: Option<String>,
    pub outline_level: u8,
    pub hidden: bool,
}

impl ColumnGroup {
    pub fn new<S: Into<String>>(
        start_col: S,
        end_col: Option<String>,
        outline_level: u8,
        hidden: bool,
    ) -> Self {
        Self {
            start_col: start_col.into(),
            end_col,
            outline_level,
            hidden,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let start = column_to_index(&self.start_col)?;
        if let Some(end) = &self.end_col {
            if column_to_index(end)? < start {
                return Err(Error::InvalidAddress(format!(
                    "column group ends before it starts ({} > {})",
                    self.start_col, end
                )));
            }
        }
        check_level(self.outline_level)
    }
}

fn check_level(level: u8) -> Result<()> {
    if level == 0 || level > MAX_OUTLINE_LEVEL {
        return Err(Error::OutOfRange {
            what: "Outline level",
            value: level as u64,
            max: MAX_OUTLINE_LEVEL as u64,
        });
    }
    Ok(())
}
