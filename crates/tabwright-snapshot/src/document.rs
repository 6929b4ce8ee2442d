//! The exchange document handed to the renderer

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tabwright_core::{
    CellValue, ColumnGroup, Comment, DataValidation, FileProperties, Panes, RowGroup,
    StyleAttributes, Table, WorkbookProtection, WriterEngine,
};

use crate::error::{SnapshotError, SnapshotResult};

/// One serialized cell
///
/// Styled sheets write `[value, style-name]`; plain-data sheets write the
/// bare value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SerializedCell {
    Styled(CellValue, String),
    Bare(CellValue),
}

impl SerializedCell {
    pub fn value(&self) -> &CellValue {
        match self {
            SerializedCell::Styled(value, _) | SerializedCell::Bare(value) => value,
        }
    }

    pub fn style_name(&self) -> Option<&str> {
        match self {
            SerializedCell::Styled(_, style) => Some(style),
            SerializedCell::Bare(_) => None,
        }
    }
}

/// A sheet's grid and metadata, keyed the way the renderer reads them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SheetDocument {
    pub data: Vec<Vec<SerializedCell>>,
    pub merge_cells: Vec<(String, String)>,
    /// 1-based column -> width
    pub width: BTreeMap<u32, f64>,
    /// 1-based row -> height
    pub height: BTreeMap<u32, f64>,
    pub auto_filter: BTreeSet<String>,
    /// `{}` when the sheet has no panes
    #[serde(serialize_with = "serialize_or_empty_object")]
    pub panes: Option<Panes>,
    pub data_validation: Vec<DataValidation>,
    pub table: Vec<Table>,
    pub comment: Vec<Comment>,
    pub grouped_row: Vec<RowGroup>,
    pub grouped_col: Vec<ColumnGroup>,
    pub sheet_visible: bool,
    pub no_style: bool,
    pub writer_engine: WriterEngine,
}

impl SheetDocument {
    /// Style names used by the grid, deduplicated
    pub fn style_names(&self) -> BTreeSet<&str> {
        self.data
            .iter()
            .flatten()
            .filter_map(SerializedCell::style_name)
            .collect()
    }
}

/// Sheets in tab order, serialized as a JSON object
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetMap(Vec<(String, SheetDocument)>);

impl SheetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: String, sheet: SheetDocument) {
        self.0.push((name, sheet));
    }

    pub fn get(&self, name: &str) -> Option<&SheetDocument> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, sheet)| sheet)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SheetDocument)> {
        self.0.iter().map(|(name, sheet)| (name.as_str(), sheet))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SheetMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, sheet) in &self.0 {
            map.serialize_entry(name, sheet)?;
        }
        map.end()
    }
}

/// The complete snapshot of one workbook build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeDocument {
    /// Sheet name -> sheet, in tab order
    pub content: SheetMap,
    pub file_props: FileProperties,
    /// Finalized style name -> renderer attributes
    pub style: BTreeMap<String, StyleAttributes>,
    /// `{}` when the workbook is not protected
    #[serde(serialize_with = "serialize_or_empty_object")]
    pub protection: Option<WorkbookProtection>,
    pub sheet_order: Vec<String>,
}

impl ExchangeDocument {
    /// Look up a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SheetDocument> {
        self.content.get(name)
    }

    /// Check that the document can be handed over as is
    ///
    /// Every style a cell names must be in `style`, and `content` and
    /// `sheet_order` must list the same sheets, each exactly once, in the
    /// same order.
    pub fn check_consistency(&self) -> SnapshotResult<()> {
        let content: Vec<&str> = self.content.names().collect();
        let order: Vec<&str> = self.sheet_order.iter().map(String::as_str).collect();
        if content != order {
            return Err(SnapshotError::Inconsistent(format!(
                "content sheets {:?} do not match sheet_order {:?}",
                content, order
            )));
        }
        let unique: BTreeSet<&str> = order.iter().copied().collect();
        if unique.len() != order.len() {
            return Err(SnapshotError::Inconsistent(format!(
                "sheet_order lists a sheet twice: {:?}",
                order
            )));
        }

        for (name, sheet) in self.content.iter() {
            if let Some(missing) = sheet
                .style_names()
                .into_iter()
                .find(|style| !self.style.contains_key(*style))
            {
                return Err(SnapshotError::Inconsistent(format!(
                    "sheet '{}' uses style '{}' which is not in the style table",
                    name, missing
                )));
            }
        }
        Ok(())
    }

    /// Encode as JSON bytes for the renderer
    pub fn to_json_bytes(&self) -> SnapshotResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Encode as a JSON value, mostly useful for inspection
    pub fn to_json_value(&self) -> SnapshotResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn serialize_or_empty_object<T: Serialize, S: Serializer>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
