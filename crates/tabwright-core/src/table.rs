//! Table definitions
//!
//! A table names a rectangular block of the grid whose first row is the
//! header. It does not own cell data; content checks run against the grid
//! when the workbook is exported (see [`crate::validators`]).

use crate::cell::CellRange;
use crate::error::{Error, Result};
use serde::Serialize;

/// Number of built-in styles per family
const LIGHT_STYLES: u32 = 21;
const MEDIUM_STYLES: u32 = 28;
const DARK_STYLES: u32 = 11;

/// Check a table style name against the built-in set
///
/// Accepts `""` and `TableStyleLight1..21`, `TableStyleMedium1..28`,
/// `TableStyleDark1..11`.
pub fn is_builtin_table_style(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    let Some(rest) = name.strip_prefix("TableStyle") else {
        return false;
    };
    let (max, number) = if let Some(n) = rest.strip_prefix("Light") {
        (LIGHT_STYLES, n)
    } else if let Some(n) = rest.strip_prefix("Medium") {
        (MEDIUM_STYLES, n)
    } else if let Some(n) = rest.strip_prefix("Dark") {
        (DARK_STYLES, n)
    } else {
        return false;
    };
    // no sign or leading zero
    if number.starts_with(['0', '+']) {
        return false;
    }
    matches!(number.parse::<u32>(), Ok(n) if (1..=max).contains(&n))
}

/// A table over a grid range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Range in `A1:B2` form, header row first
    pub range: String,
    /// Table name
    pub name: String,
    /// Built-in style name, empty for none
    pub style_name: String,
    pub show_first_column: bool,
    pub show_last_column: bool,
    pub show_row_stripes: bool,
    pub show_column_stripes: bool,
    /// Whether header and column content is checked on export
    #[serde(skip)]
    pub validate_table: bool,
}

impl Table {
    /// Create a table with the default display flags
    pub fn new<R: Into<String>, N: Into<String>>(range: R, name: N) -> Self {
        Self {
            range: range.into(),
            name: name.into(),
            style_name: String::new(),
            show_first_column: true,
            show_last_column: true,
            show_row_stripes: false,
            show_column_stripes: true,
            validate_table: true,
        }
    }

    /// Set the built-in style
    pub fn with_style<S: Into<String>>(mut self, style_name: S) -> Self {
        self.style_name = style_name.into();
        self
    }

    /// Set the four display flags
    pub fn with_display(
        mut self,
        first_column: bool,
        last_column: bool,
        row_stripes: bool,
        column_stripes: bool,
    ) -> Self {
        self.show_first_column = first_column;
        self.show_last_column = last_column;
        self.show_row_stripes = row_stripes;
        self.show_column_stripes = column_stripes;
        self
    }

    /// Skip content checks on export
    pub fn without_validation(mut self) -> Self {
        self.validate_table = false;
        self
    }

    /// Parsed range of the table
    pub fn cell_range(&self) -> Result<CellRange> {
        if !self.range.contains(':') {
            return Err(self.invalid("range must have the form 'A1:B2'"));
        }
        CellRange::parse(&self.range).map_err(|e| self.invalid(e.to_string()))
    }

    /// Declaration checks: range shape and style name
    pub fn validate(&self) -> Result<()> {
        let range = self.cell_range()?;
        if !range.is_ordered() {
            return Err(self.invalid("range corners are inverted"));
        }
        if !is_builtin_table_style(&self.style_name) {
            return Err(self.invalid(format!(
                "unknown table style '{}'",
                self.style_name
            )));
        }
        Ok(())
    }

    /// Validate and rewrite the range in uppercase A1 form
    pub(crate) fn normalized(mut self) -> Result<Self> {
        self.validate()?;
        self.range = self.cell_range()?.to_a1_string();
        Ok(self)
    }

    fn invalid<S: Into<String>>(&self, reason: S) -> Error {
        Error::InvalidTable {
            name: self.name.clone(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_styles() {
        assert!(is_builtin_table_style(""));
        assert!(is_builtin_table_style("TableStyleLight1"));
        assert!(is_builtin_table_style("TableStyleLight21"));
        assert!(is_builtin_table_style("TableStyleMedium28"));
        assert!(is_builtin_table_style("TableStyleDark11"));

        assert!(!is_builtin_table_style("TableStyleLight22"));
        assert!(!is_builtin_table_style("TableStyleMedium0"));
        assert!(!is_builtin_table_style("TableStyleDark12"));
        assert!(!is_builtin_table_style("TableStyleDark01"));
        assert!(!is_builtin_table_style("TableStyleNeon1"));
        assert!(!is_builtin_table_style("tablestylelight1"));
    }

    #[test]
    fn test_declaration_checks() {
        assert!(Table::new("A1:C5", "Sales").validate().is_ok());
        assert!(matches!(
            Table::new("A1", "Sales").validate(),
            Err(Error::InvalidTable { .. })
        ));
        assert!(matches!(
            Table::new("C5:A1", "Sales").validate(),
            Err(Error::InvalidTable { .. })
        ));
        assert!(matches!(
            Table::new("A1:C5", "Sales").with_style("Fancy").validate(),
            Err(Error::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(Table::new("A1:B3", "T").with_style("TableStyleMedium2"))
            .unwrap();
        assert_eq!(json["range"], "A1:B3");
        assert_eq!(json["style_name"], "TableStyleMedium2");
        assert_eq!(json["show_first_column"], true);
        assert!(json.get("validate_table").is_none());
    }
}
