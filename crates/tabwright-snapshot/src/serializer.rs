//! Workbook -> exchange document

use tabwright_core::validators::validate_workbook;
use tabwright_core::{StyleRegistry, Workbook, Worksheet};

use crate::document::{ExchangeDocument, SerializedCell, SheetDocument, SheetMap};
use crate::error::SnapshotResult;

/// Builds exchange documents from workbooks
pub struct SnapshotSerializer;

impl SnapshotSerializer {
    /// Validate a workbook and flatten it into an [`ExchangeDocument`]
    ///
    /// Styles are interned into a copy of the workbook's registry, sheet by
    /// sheet in tab order and row-major within a sheet, so the same workbook
    /// always yields the same style names. The workbook itself is never
    /// modified, whether or not this succeeds.
    pub fn serialize(workbook: &Workbook) -> SnapshotResult<ExchangeDocument> {
        validate_workbook(workbook)?;

        let mut session = workbook.styles().clone();
        let mut content = SheetMap::new();
        for sheet in workbook.worksheets() {
            let document = Self::serialize_sheet(workbook, sheet, &mut session)?;
            tracing::debug!(
                sheet = sheet.name(),
                rows = document.data.len(),
                "serialized sheet"
            );
            content.push(sheet.name().to_string(), document);
        }

        let style = session.finalize();
        tracing::debug!(styles = style.len(), "finalized style table");

        let document = ExchangeDocument {
            content,
            file_props: workbook.file_properties().clone(),
            style,
            protection: workbook.protection().cloned(),
            sheet_order: workbook
                .sheet_names()
                .into_iter()
                .map(String::from)
                .collect(),
        };
        document.check_consistency()?;
        Ok(document)
    }

    /// Validate, flatten and encode in one step
    pub fn to_json_bytes(workbook: &Workbook) -> SnapshotResult<Vec<u8>> {
        Self::serialize(workbook)?.to_json_bytes()
    }

    fn serialize_sheet(
        workbook: &Workbook,
        sheet: &Worksheet,
        session: &mut StyleRegistry,
    ) -> SnapshotResult<SheetDocument> {
        let plain = sheet.is_plain_data();
        let mut data = Vec::with_capacity(sheet.grid().height());
        for row in sheet.grid().rows() {
            let mut cells = Vec::with_capacity(row.len());
            for cell in row {
                cells.push(if plain {
                    SerializedCell::Bare(cell.value.clone())
                } else {
                    SerializedCell::Styled(cell.value.clone(), session.resolve_ref(&cell.style)?)
                });
            }
            data.push(cells);
        }

        Ok(SheetDocument {
            data,
            merge_cells: sheet.merged_cells().to_vec(),
            width: sheet.column_widths().clone(),
            height: sheet.row_heights().clone(),
            auto_filter: sheet.auto_filters().clone(),
            panes: sheet.panes().cloned(),
            data_validation: sheet.data_validations().to_vec(),
            table: sheet.tables().to_vec(),
            comment: sheet.comments().to_vec(),
            grouped_row: sheet.row_groups().to_vec(),
            grouped_col: sheet.column_groups().to_vec(),
            sheet_visible: sheet.is_visible(),
            no_style: plain,
            writer_engine: workbook.writer_engine_for(sheet),
        })
    }
}
