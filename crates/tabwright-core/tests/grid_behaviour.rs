//! Grid growth, style interning and bounds as seen through the public API

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tabwright_core::{
    CellInput, CellValue, Error, Style, StyleRef, StyleRegistry, Workbook, Worksheet,
    DEFAULT_STYLE,
};

#[test]
fn growth_keeps_existing_data() {
    let mut sheet = Worksheet::new("Grow");
    sheet.set_at(1, 1, "keep").unwrap();
    sheet.set_at(500, 500, 7).unwrap();

    assert_eq!(sheet.grid().height(), 501);
    assert_eq!(
        sheet.get_at(1, 1).unwrap().value,
        CellValue::text("keep")
    );
    assert_eq!(sheet.get_at(500, 500).unwrap().value, CellValue::Number(7.0));

    // rows that already existed keep their width; new rows take the target width
    assert_eq!(sheet.row(1).unwrap().len(), 2);
    assert!(sheet.grid().rows()[2..].iter().all(|row| row.len() == 501));
    let filler = sheet.get_at(250, 3).unwrap();
    assert_eq!(filler.value, CellValue::Empty);
    assert_eq!(filler.style, StyleRef::default());
}

#[test]
fn overwrite_replaces_value_and_style() {
    let mut sheet = Worksheet::new("S");
    sheet
        .set("B2", CellInput::styled("old", "Header"))
        .unwrap();
    sheet.set("B2", "new").unwrap();

    let cell = sheet.get("B2").unwrap().unwrap();
    assert_eq!(cell.value, CellValue::text("new"));
    assert!(cell.style.is_default());
}

#[test]
fn style_registration_is_idempotent() {
    let mut registry = StyleRegistry::new();
    let bold = Arc::new(Style::new().bold(true));

    let first = registry.register(&bold);
    let second = registry.register(&bold);
    assert_eq!(first, second);
    assert_eq!(registry.len(), 2);

    // equal content, separate allocation
    let copy = Arc::new(Style::new().bold(true));
    assert_ne!(registry.register(&copy), first);
    assert!(registry.contains(DEFAULT_STYLE));
}

#[test]
fn width_beyond_last_column_is_out_of_range() {
    let mut wb = Workbook::new();
    assert!(matches!(
        wb.set_cell_width("Sheet1", "XFE", 20.0),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        wb.set_cell_width("Sheet1", "xfd", 20.0),
        Err(Error::InvalidAddress(_))
    ));
    wb.set_cell_width("Sheet1", "XFD", 20.0).unwrap();
    assert_eq!(wb.current_sheet().column_widths().get(&16384), Some(&20.0));
}

#[test]
fn addresses_outside_the_sheet() {
    let mut sheet = Worksheet::new("S");
    assert!(matches!(sheet.set("A1048577", 1), Err(Error::OutOfRange { .. })));
    assert!(matches!(sheet.set("1A", 1), Err(Error::InvalidAddress(_))));
    assert_eq!(sheet.grid().height(), 1);
}
