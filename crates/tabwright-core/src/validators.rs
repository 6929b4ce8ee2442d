//! Structural checks run before a snapshot is taken
//!
//! Declaration-time calls (`merge_cell`, `add_table`, ...) already reject bad
//! arguments. The checks here look at the finished workbook: table content
//! can only be judged once every write has happened, and the rest is
//! re-checked so a snapshot never carries anything the renderer would refuse.

use ahash::AHashSet;

use crate::cell::{CellRange, CellReference, CellValue, Grid, RangeSpec};
use crate::error::{Error, Result};
use crate::table::Table;
use crate::workbook::Workbook;
use crate::worksheet::Worksheet;
use crate::{MAX_COLS, MAX_ROWS};

/// Check a merge range and return it parsed
///
/// Both corners must be in bounds, the first must not be right of or below
/// the second, and a single cell is not a merge.
pub fn check_merge(range: &RangeSpec) -> Result<CellRange> {
    let label = match range {
        RangeSpec::Pair(start, end) => format!("{}:{}", start, end),
        RangeSpec::Text(text) => text.clone(),
    };
    let parsed = range
        .to_range()
        .map_err(|e| Error::invalid_merge(&label, e.to_string()))?;

    if parsed.start.row > parsed.end.row {
        return Err(Error::invalid_merge(
            &label,
            "top-left row is below the bottom-right row",
        ));
    }
    if parsed.start.col > parsed.end.col {
        return Err(Error::invalid_merge(
            &label,
            "top-left column is right of the bottom-right column",
        ));
    }
    if parsed.is_single_cell() {
        return Err(Error::invalid_merge(&label, "a single cell cannot be merged"));
    }
    Ok(parsed)
}

/// Check a table's header and column content against the grid
///
/// Skipped when the table opted out of validation. A malformed or inverted
/// range is an [`Error::InvalidTable`]. The header row must reach
/// the table's last column and hold distinct values. In every column, the
/// first data value must not appear again further down the table; a column
/// whose first data value is empty is not checked. Values are compared,
/// styles are not.
pub fn check_table_data(grid: &Grid, table: &Table) -> Result<()> {
    if !table.validate_table {
        return Ok(());
    }
    table.validate()?;
    let range = table.cell_range()?;
    let (first_col, last_col) = (range.start.col as usize, range.end.col as usize);

    let header = grid
        .row(range.start.row)
        .filter(|row| row.len() > last_col)
        .ok_or_else(|| {
            Error::invalid_table_data(
                &table.name,
                format!(
                    "header row {} does not reach column {}; write the header row first",
                    range.start.row + 1,
                    range.end.column_letters()
                ),
            )
        })?;

    let mut seen: Vec<&CellValue> = Vec::with_capacity(last_col - first_col + 1);
    for cell in &header[first_col..=last_col] {
        if seen.contains(&&cell.value) {
            return Err(Error::invalid_table_data(
                &table.name,
                format!("duplicate header '{}'", cell.value),
            ));
        }
        seen.push(&cell.value);
    }

    let last_row = (range.end.row as usize).min(grid.height().saturating_sub(1));
    let data_rows = (range.start.row as usize + 1)..=last_row;
    for col in first_col..=last_col {
        let mut column = data_rows.clone().map(|row| {
            grid.get_at(row as u32, col as u32)
                .map_or(&CellValue::Empty, |cell| &cell.value)
        });
        let Some(first) = column.next() else {
            continue;
        };
        if first.is_empty() {
            continue;
        }
        if column.any(|value| value == first) {
            return Err(Error::invalid_table_data(
                &table.name,
                format!(
                    "value '{}' repeats in column {}",
                    first,
                    CellReference::new(0, col as u32).column_letters()
                ),
            ));
        }
    }
    Ok(())
}

/// Run every structural check for one sheet
pub fn validate_worksheet(sheet: &Worksheet) -> Result<()> {
    for (start, end) in sheet.merged_cells() {
        check_merge(&RangeSpec::Pair(start.clone(), end.clone()))?;
    }

    for &col in sheet.column_widths().keys() {
        if col == 0 || col > MAX_COLS {
            return Err(Error::column_out_of_range(col as u64));
        }
    }
    for &row in sheet.row_heights().keys() {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::row_out_of_range(row as u64));
        }
    }

    for range in sheet.auto_filters() {
        CellRange::parse(range)?;
    }
    if let Some(panes) = sheet.panes() {
        panes.validate()?;
    }
    for rule in sheet.data_validations() {
        rule.validate()?;
    }
    for comment in sheet.comments() {
        comment.validate()?;
    }
    for group in sheet.row_groups() {
        group.validate()?;
    }
    for group in sheet.column_groups() {
        group.validate()?;
    }
    for table in sheet.tables() {
        table.validate()?;
        check_table_data(sheet.grid(), table)?;
    }
    Ok(())
}

/// Run every structural check over the workbook, in sheet order
///
/// Also rejects a table name used twice anywhere in the workbook.
pub fn validate_workbook(workbook: &Workbook) -> Result<()> {
    let mut table_names = AHashSet::new();
    for sheet in workbook.worksheets() {
        validate_worksheet(sheet)?;
        for table in sheet.tables() {
            if !table_names.insert(table.name.to_lowercase()) {
                return Err(Error::InvalidTable {
                    name: table.name.clone(),
                    reason: "table names must be unique within a workbook".into(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellInput;

    fn sheet_with(rows: Vec<Vec<CellInput>>) -> Worksheet {
        let mut sheet = Worksheet::new("Data");
        for (i, row) in rows.into_iter().enumerate() {
            sheet.set_row(i as u32, row).unwrap();
        }
        sheet
    }

    #[test]
    fn test_merge_validity() {
        assert!(matches!(
            check_merge(&("A1", "A1").into()),
            Err(Error::InvalidMergeRange { .. })
        ));
        assert!(matches!(
            check_merge(&("C1", "A1").into()),
            Err(Error::InvalidMergeRange { .. })
        ));
        assert!(matches!(
            check_merge(&("A3", "B1").into()),
            Err(Error::InvalidMergeRange { .. })
        ));
        assert!(matches!(
            check_merge(&"A1:A1048577".into()),
            Err(Error::InvalidMergeRange { .. })
        ));
        assert!(matches!(
            check_merge(&"A1".into()),
            Err(Error::InvalidMergeRange { .. })
        ));

        let range = check_merge(&("A1", "C2").into()).unwrap();
        assert_eq!(range.to_string(), "A1:C2");
    }

    #[test]
    fn test_duplicate_header() {
        let sheet = sheet_with(vec![vec!["A".into(), "A".into()]]);
        let table = Table::new("A1:B3", "T");
        assert!(matches!(
            check_table_data(sheet.grid(), &table),
            Err(Error::InvalidTableData { .. })
        ));
    }

    #[test]
    fn test_repeated_column_value() {
        let sheet = sheet_with(vec![
            vec!["A".into(), "B".into()],
            vec![1.into(), "x".into()],
            vec![1.into(), "y".into()],
        ]);
        let table = Table::new("A1:B3", "T");
        assert!(matches!(
            check_table_data(sheet.grid(), &table),
            Err(Error::InvalidTableData { .. })
        ));
    }

    #[test]
    fn test_repeat_in_later_column() {
        let sheet = sheet_with(vec![
            vec!["A".into(), "B".into()],
            vec![1.into(), "x".into()],
            vec![2.into(), "x".into()],
        ]);
        assert!(check_table_data(sheet.grid(), &Table::new("A1:B3", "T")).is_err());
    }

    #[test]
    fn test_unique_table_passes() {
        let sheet = sheet_with(vec![
            vec!["A".into(), "B".into()],
            vec![1.into(), "x".into()],
            vec![2.into(), "y".into()],
        ]);
        assert!(check_table_data(sheet.grid(), &Table::new("A1:B3", "T")).is_ok());
        // rows past the end of the grid are ignored
        assert!(check_table_data(sheet.grid(), &Table::new("A1:B50", "T")).is_ok());
    }

    #[test]
    fn test_opted_out_table_is_skipped() {
        let sheet = sheet_with(vec![vec!["A".into(), "A".into()]]);
        let table = Table::new("A1:B2", "T").without_validation();
        assert!(check_table_data(sheet.grid(), &table).is_ok());
    }

    #[test]
    fn test_inverted_table_range() {
        let sheet = sheet_with(vec![vec!["A".into(), "B".into()]]);
        assert!(matches!(
            check_table_data(sheet.grid(), &Table::new("B1:A3", "T")),
            Err(Error::InvalidTable { .. })
        ));
        assert!(matches!(
            check_table_data(sheet.grid(), &Table::new("A3:B1", "T")),
            Err(Error::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_missing_header() {
        let sheet = sheet_with(vec![vec!["A".into()]]);
        assert!(matches!(
            check_table_data(sheet.grid(), &Table::new("A1:C2", "T")),
            Err(Error::InvalidTableData { .. })
        ));
        assert!(matches!(
            check_table_data(sheet.grid(), &Table::new("A5:B6", "T")),
            Err(Error::InvalidTableData { .. })
        ));
    }

    #[test]
    fn test_empty_first_value_is_not_checked() {
        let sheet = sheet_with(vec![
            vec!["A".into(), "B".into()],
            vec![CellValue::Empty.into(), 1.into()],
            vec![CellValue::Empty.into(), 2.into()],
        ]);
        assert!(check_table_data(sheet.grid(), &Table::new("A1:B3", "T")).is_ok());
    }

    #[test]
    fn test_workbook_checks_table_after_writes() {
        let mut workbook = Workbook::new();
        let sheet = workbook.current_sheet_mut();
        sheet.add_table(Table::new("A1:B2", "People")).unwrap();
        assert!(validate_workbook(&workbook).is_err());

        let sheet = workbook.current_sheet_mut();
        sheet.set_row(0, vec!["Name".into(), "Age".into()]).unwrap();
        sheet.set_row(1, vec!["Ann".into(), 30.into()]).unwrap();
        assert!(validate_workbook(&workbook).is_ok());
    }

    #[test]
    fn test_table_names_unique_across_sheets() {
        let mut workbook = Workbook::new();
        let first = workbook.current_sheet_mut();
        first.set_row(0, vec!["a".into(), "b".into()]).unwrap();
        first.add_table(Table::new("A1:B1", "Shared")).unwrap();

        let second = workbook.add_sheet("Other").unwrap();
        second.set_row(0, vec!["a".into(), "b".into()]).unwrap();
        second.add_table(Table::new("A1:B1", "shared")).unwrap();

        assert!(matches!(
            validate_workbook(&workbook),
            Err(Error::InvalidTable { .. })
        ));
    }
}
