//! Worksheet type

use std::collections::{BTreeMap, BTreeSet};

use crate::cell::{
    Cell, CellInput, CellRange, CellValue, ColumnKey, Grid, RangeSpec, StyleRef, StyleTarget,
};
use crate::comment::Comment;
use crate::error::{Error, Result};
use crate::group::{ColumnGroup, RowGroup};
use crate::panes::Panes;
use crate::table::Table;
use crate::validation::DataValidation;
use crate::validators;
use crate::workbook::WriterEngine;
use crate::MAX_ROWS;

/// A worksheet (single sheet in a workbook)
///
/// Cell writes go straight to the [`Grid`]. Metadata calls check their
/// arguments on the spot; the structural checks that need the final grid
/// run when the workbook is exported.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    grid: Grid,
    /// Merged ranges as (top-left, bottom-right)
    merged_cells: Vec<(String, String)>,
    /// Column widths keyed by 1-based column
    widths: BTreeMap<u32, f64>,
    /// Row heights keyed by 1-based row
    heights: BTreeMap<u32, f64>,
    auto_filters: BTreeSet<String>,
    panes: Option<Panes>,
    data_validations: Vec<DataValidation>,
    tables: Vec<Table>,
    comments: Vec<Comment>,
    row_groups: Vec<RowGroup>,
    column_groups: Vec<ColumnGroup>,
    /// Sheet is visible
    visible: bool,
    /// Cells carry no styles and serialize as bare values
    no_style: bool,
    /// Overrides the workbook's default engine when set
    writer_engine: Option<WriterEngine>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_grid(name, Grid::new())
    }

    /// Create a worksheet with `n_rows` x `n_cols` default cells already in place
    pub fn with_capacity<S: Into<String>>(name: S, n_rows: u32, n_cols: u32) -> Result<Self> {
        Ok(Self::with_grid(name, Grid::with_capacity(n_rows, n_cols)?))
    }

    /// Create an unstyled worksheet from rows of plain values
    pub fn from_plain_data<S: Into<String>>(name: S, rows: Vec<Vec<CellValue>>) -> Self {
        let mut sheet = Self::with_grid(name, Grid::from_values(rows));
        sheet.no_style = true;
        sheet
    }

    fn with_grid<S: Into<String>>(name: S, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
            merged_cells: Vec::new(),
            widths: BTreeMap::new(),
            heights: BTreeMap::new(),
            auto_filters: BTreeSet::new(),
            panes: None,
            data_validations: Vec::new(),
            tables: Vec::new(),
            comments: Vec::new(),
            row_groups: Vec::new(),
            column_groups: Vec::new(),
            visible: true,
            no_style: false,
            writer_engine: None,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Check if the sheet is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set sheet visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the sheet serializes bare values without styles
    pub fn is_plain_data(&self) -> bool {
        self.no_style
    }

    pub fn set_plain_data(&mut self, no_style: bool) {
        self.no_style = no_style;
    }

    /// Engine override for this sheet
    pub fn writer_engine(&self) -> Option<WriterEngine> {
        self.writer_engine
    }

    pub fn set_writer_engine(&mut self, engine: WriterEngine) {
        self.writer_engine = Some(engine);
    }

    // === Cell Access ===

    /// The cell grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get a cell by A1 reference; `None` if the grid does not reach it
    pub fn get(&self, reference: &str) -> Result<Option<&Cell>> {
        self.grid.get(reference)
    }

    /// Get a cell by zero-based row and column
    pub fn get_at(&self, row: u32, col: u32) -> Option<&Cell> {
        self.grid.get_at(row, col)
    }

    /// Get a whole row by zero-based index
    pub fn row(&self, index: u32) -> Option<&[Cell]> {
        self.grid.row(index)
    }

    /// Get the cells of a single-row range
    pub fn get_range<R: Into<RangeSpec>>(&self, spec: R) -> Result<&[Cell]> {
        self.grid.get_range(spec)
    }

    // === Cell Modification ===

    /// Write a cell by A1 reference
    pub fn set<I: Into<CellInput>>(&mut self, reference: &str, input: I) -> Result<()> {
        self.grid.set(reference, input)
    }

    /// Write a cell by zero-based row and column
    pub fn set_at<I: Into<CellInput>>(&mut self, row: u32, col: u32, input: I) -> Result<()> {
        self.grid.set_at(row, col, input)
    }

    /// Replace a whole row
    pub fn set_row(&mut self, index: u32, inputs: Vec<CellInput>) -> Result<()> {
        self.grid.set_row(index, inputs)
    }

    /// Write consecutive cells of a single-row range
    pub fn set_range<R: Into<RangeSpec>>(&mut self, spec: R, inputs: Vec<CellInput>) -> Result<()> {
        self.grid.set_range(spec, inputs)
    }

    /// Re-style a cell, a position or a single-row range
    pub fn set_style<T: Into<StyleTarget>, S: Into<StyleRef>>(
        &mut self,
        target: T,
        style: S,
    ) -> Result<()> {
        self.grid.set_style(target, style)
    }

    // === Dimensions ===

    /// Set the width of a column given by letters or 1-based index
    pub fn set_cell_width<C: Into<ColumnKey>>(&mut self, column: C, width: f64) -> Result<()> {
        let index = column.into().index()?;
        self.widths.insert(index, width);
        Ok(())
    }

    /// Set the height of a 1-based row
    pub fn set_cell_height(&mut self, row: u32, height: f64) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::row_out_of_range(row as u64));
        }
        self.heights.insert(row, height);
        Ok(())
    }

    pub fn column_widths(&self) -> &BTreeMap<u32, f64> {
        &self.widths
    }

    pub fn row_heights(&self) -> &BTreeMap<u32, f64> {
        &self.heights
    }

    // === Merged Cells ===

    /// Merge a range given as two corners or as `"A1:C3"`
    pub fn merge_cell<R: Into<RangeSpec>>(&mut self, range: R) -> Result<()> {
        let range = validators::check_merge(&range.into())?;
        self.merged_cells
            .push((range.start.to_a1_string(), range.end.to_a1_string()));
        Ok(())
    }

    /// Merged ranges as (top-left, bottom-right)
    pub fn merged_cells(&self) -> &[(String, String)] {
        &self.merged_cells
    }

    // === Auto Filter ===

    /// Add an auto-filter over `"A1:B2"`
    pub fn auto_filter(&mut self, range: &str) -> Result<()> {
        let range = CellRange::parse(range)?;
        self.auto_filters.insert(range.to_a1_string());
        Ok(())
    }

    pub fn auto_filters(&self) -> &BTreeSet<String> {
        &self.auto_filters
    }

    // === Panes ===

    /// Replace the pane configuration
    pub fn set_panes(&mut self, panes: Panes) -> Result<()> {
        self.panes = Some(panes.normalized()?);
        Ok(())
    }

    pub fn panes(&self) -> Option<&Panes> {
        self.panes.as_ref()
    }

    // === Data Validation ===

    /// Add a data validation rule
    pub fn add_data_validation(&mut self, validation: DataValidation) -> Result<()> {
        self.data_validations.push(validation.normalized()?);
        Ok(())
    }

    pub fn data_validations(&self) -> &[DataValidation] {
        &self.data_validations
    }

    // === Tables ===

    /// Add a table
    ///
    /// The range and style name are checked here. Header and column content
    /// is checked on export, against whatever the grid holds by then.
    pub fn add_table(&mut self, table: Table) -> Result<()> {
        let table = table.normalized()?;
        if self.tables.iter().any(|t| t.name == table.name) {
            return Err(Error::InvalidTable {
                name: table.name,
                reason: "a table with this name already exists on the sheet".into(),
            });
        }
        self.tables.push(table);
        Ok(())
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    // === Comments ===

    /// Attach a comment to a cell
    pub fn add_comment(&mut self, comment: Comment) -> Result<()> {
        self.comments.push(comment.normalized()?);
        Ok(())
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    // === Outline Groups ===

    pub fn group_rows(&mut self, group: RowGroup) -> Result<()> {
        group.validate()?;
        self.row_groups.push(group);
        Ok(())
    }

    pub fn group_columns(&mut self, group: ColumnGroup) -> Result<()> {
        group.validate()?;
        self.column_groups.push(group);
        Ok(())
    }

    pub fn row_groups(&self) -> &[RowGroup] {
        &self.row_groups
    }

    pub fn column_groups(&self) -> &[ColumnGroup] {
        &self.column_groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panes::{ActivePane, Selection};
    use crate::DEFAULT_STYLE;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test");
        assert_eq!(ws.name(), "Test");
        assert!(ws.is_visible());
        assert!(!ws.is_plain_data());
        assert_eq!(ws.grid().height(), 1);
        assert!(ws.get_at(0, 0).unwrap().is_blank());
    }

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Test");

        ws.set("A1", "Hello").unwrap();
        ws.set("B1", 42).unwrap();
        ws.set("C1", true).unwrap();

        assert_eq!(ws.get("A1").unwrap().unwrap().value.as_text(), Some("Hello"));
        assert_eq!(ws.get("B1").unwrap().unwrap().value.as_number(), Some(42.0));
        assert_eq!(ws.get("C1").unwrap().unwrap().value.as_text(), Some("TRUE"));
        assert_eq!(ws.get("C1").unwrap().unwrap().style, StyleRef::named(DEFAULT_STYLE));
    }

    #[test]
    fn test_rows_and_ranges() {
        let mut ws = Worksheet::new("Test");
        ws.set_row(0, vec!["Name".into(), "Score".into()]).unwrap();
        ws.set_range("A2:B2", vec!["Alice".into(), 90.into()]).unwrap();

        assert_eq!(ws.row(0).unwrap().len(), 2);
        let cells = ws.get_range(("A2", "B2")).unwrap();
        assert_eq!(cells[1].value, CellValue::Number(90.0));
        assert!(matches!(
            ws.get_range("A1:B2"),
            Err(Error::UnsupportedRange(_))
        ));
    }

    #[test]
    fn test_plain_data() {
        let ws = Worksheet::from_plain_data(
            "Raw",
            vec![vec!["a".into(), 1.into()], vec!["b".into(), 2.into()]],
        );
        assert!(ws.is_plain_data());
        assert_eq!(ws.grid().height(), 2);
    }

    #[test]
    fn test_with_capacity() {
        let ws = Worksheet::with_capacity("Big", 100, 10).unwrap();
        assert_eq!(ws.grid().height(), 100);
        assert_eq!(ws.row(99).unwrap().len(), 10);
        assert!(Worksheet::with_capacity("Huge", MAX_ROWS + 1, 1).is_err());
    }

    #[test]
    fn test_row_column_dimensions() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_width("C", 20.0).unwrap();
        ws.set_cell_width(5u32, 12.5).unwrap();
        ws.set_cell_height(2, 30.0).unwrap();

        assert_eq!(ws.column_widths().get(&3), Some(&20.0));
        assert_eq!(ws.column_widths().get(&5), Some(&12.5));
        assert_eq!(ws.row_heights().get(&2), Some(&30.0));
    }

    #[test]
    fn test_dimension_bounds() {
        let mut ws = Worksheet::new("Test");
        assert!(matches!(
            ws.set_cell_width("XFE", 20.0),
            Err(Error::OutOfRange { what: "Column", value: 16385, .. })
        ));
        assert!(matches!(
            ws.set_cell_height(0, 20.0),
            Err(Error::OutOfRange { what: "Row", .. })
        ));
        assert!(matches!(
            ws.set_cell_width("c", 20.0),
            Err(Error::InvalidAddress(_))
        ));
        assert!(ws.column_widths().is_empty());
    }

    #[test]
    fn test_merge_cells() {
        let mut ws = Worksheet::new("Test");

        ws.merge_cell(("A1", "C2")).unwrap();
        ws.merge_cell("d4:e5").unwrap();
        assert_eq!(
            ws.merged_cells(),
            &[
                ("A1".to_string(), "C2".to_string()),
                ("D4".to_string(), "E5".to_string())
            ]
        );

        assert!(matches!(
            ws.merge_cell(("A1", "A1")),
            Err(Error::InvalidMergeRange { .. })
        ));
        assert!(matches!(
            ws.merge_cell(("C1", "A1")),
            Err(Error::InvalidMergeRange { .. })
        ));
        assert_eq!(ws.merged_cells().len(), 2);
    }

    #[test]
    fn test_auto_filter() {
        let mut ws = Worksheet::new("Test");
        ws.auto_filter("A1:C1").unwrap();
        ws.auto_filter("A1:C1").unwrap();
        assert_eq!(ws.auto_filters().len(), 1);
        assert!(ws.auto_filter("A1").is_err());
    }

    #[test]
    fn test_panes() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.panes().is_none());
        ws.set_panes(
            Panes::frozen(1, 1).with_selection(Selection::new("B2", "B2", ActivePane::BottomRight)),
        )
        .unwrap();
        assert_eq!(ws.panes().unwrap().x_split, 1);

        assert!(ws.set_panes(Panes::default().with_top_left_cell("ZZZZ1")).is_err());
        assert_eq!(ws.panes().unwrap().top_left_cell, "B2");
    }

    #[test]
    fn test_data_validations() {
        let mut ws = Worksheet::new("Test");
        ws.add_data_validation(DataValidation::new("A1:A10").with_drop_list(["x", "y"]))
            .unwrap();

        let mut half = DataValidation::new("B1");
        half.error_title = Some("Only a title".into());
        assert!(matches!(
            ws.add_data_validation(half),
            Err(Error::InvalidDataValidation(_))
        ));
        assert_eq!(ws.data_validations().len(), 1);
    }

    #[test]
    fn test_tables() {
        let mut ws = Worksheet::new("Test");
        ws.add_table(Table::new("A1:B3", "People")).unwrap();
        assert!(matches!(
            ws.add_table(Table::new("D1:E3", "People")),
            Err(Error::InvalidTable { .. })
        ));
        assert!(matches!(
            ws.add_table(Table::new("A1:B3", "Other").with_style("TableStyleLight99")),
            Err(Error::InvalidTable { .. })
        ));
        assert_eq!(ws.tables().len(), 1);
    }

    #[test]
    fn test_lowercase_references_are_normalized() {
        let mut ws = Worksheet::new("Test");
        ws.set_panes(
            Panes::default()
                .with_top_left_cell("c3")
                .with_selection(Selection::new("b2:c4", "b2", ActivePane::BottomRight)),
        )
        .unwrap();
        ws.add_data_validation(DataValidation::new("a1:a10").with_sqref_drop_list("e1:e5"))
            .unwrap();
        ws.add_table(Table::new("a1:b3", "People")).unwrap();
        ws.add_comment(Comment::text("d7", "me", "note")).unwrap();

        let panes = ws.panes().unwrap();
        assert_eq!(panes.top_left_cell, "C3");
        assert_eq!(panes.selection[0].sq_ref, "B2:C4");
        assert_eq!(panes.selection[0].active_cell, "B2");
        assert_eq!(ws.data_validations()[0].sq_ref, "A1:A10");
        assert_eq!(ws.data_validations()[0].sqref_drop_list.as_deref(), Some("E1:E5"));
        assert_eq!(ws.tables()[0].range, "A1:B3");
        assert_eq!(ws.comments()[0].cell, "D7");
    }

    #[test]
    fn test_comments_and_groups() {
        let mut ws = Worksheet::new("Test");
        ws.add_comment(Comment::text("B2", "me", "note")).unwrap();
        assert!(ws.add_comment(Comment::new("B2", "me")).is_err());
        assert_eq!(ws.comments().len(), 1);

        ws.group_rows(RowGroup::new(2, Some(4), 1, false)).unwrap();
        ws.group_columns(ColumnGroup::new("B", Some("C".into()), 2, true))
            .unwrap();
        assert!(ws.group_rows(RowGroup::new(2, None, 0, false)).is_err());
        assert_eq!(ws.row_groups().len(), 1);
        assert_eq!(ws.column_groups().len(), 1);
    }
}
