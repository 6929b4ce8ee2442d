//! Workbook type - the main document structure

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::cell::{ColumnKey, RangeSpec};
use crate::error::{Error, Result};
use crate::properties::{FileProperties, ProtectionAlgorithm, WorkbookProtection};
use crate::style::{Style, StyleRegistry};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// Characters Excel does not allow in a sheet name
const INVALID_SHEET_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// How the renderer writes a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WriterEngine {
    /// Cell-by-cell writer; supports every feature
    #[default]
    #[serde(rename = "NormalWriter")]
    Normal,
    /// Row-streaming writer for large sheets
    #[serde(rename = "StreamWriter")]
    Stream,
}

/// Where a workbook is in its build cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildState {
    /// Nothing written yet
    #[default]
    Empty,
    /// Edited since creation or since the last export
    Populated,
    /// Exported, no edits since
    Exported,
}

/// Workbook-level settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookSettings {
    /// Engine for sheets without their own override
    pub default_writer_engine: WriterEngine,
    /// Fill `Created` and `Modified` with the creation time
    pub stamp_timestamps: bool,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            default_writer_engine: WriterEngine::Normal,
            stamp_timestamps: true,
        }
    }
}

/// A workbook (spreadsheet document)
///
/// A workbook holds one or more uniquely named worksheets in tab order, the
/// style registry its cells resolve against, and document-level metadata.
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Worksheets in tab order, never empty
    worksheets: Vec<Worksheet>,
    /// Index of the sheet `current_sheet*` refers to
    current: usize,
    styles: StyleRegistry,
    file_props: FileProperties,
    protection: Option<WorkbookProtection>,
    settings: WorkbookSettings,
    state: BuildState,
}

impl Workbook {
    /// Create a workbook with one sheet named `Sheet1`
    pub fn new() -> Self {
        Self::with_settings(WorkbookSettings::default())
    }

    /// Create a workbook with explicit settings
    pub fn with_settings(settings: WorkbookSettings) -> Self {
        let file_props = if settings.stamp_timestamps {
            FileProperties::stamped(Utc::now())
        } else {
            FileProperties::default()
        };
        Self {
            worksheets: vec![Worksheet::new("Sheet1")],
            current: 0,
            styles: StyleRegistry::new(),
            file_props,
            protection: None,
            settings,
            state: BuildState::Empty,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Record a successful export
    pub fn mark_exported(&mut self) {
        self.state = BuildState::Exported;
    }

    fn touch(&mut self) {
        self.state = BuildState::Populated;
    }

    pub fn settings(&self) -> &WorkbookSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut WorkbookSettings {
        &mut self.settings
    }

    // ==================== Sheets ====================

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Sheet names in tab order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.worksheets.iter().map(Worksheet::name).collect()
    }

    /// Iterate over all worksheets in tab order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Get a worksheet by name
    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a worksheet by name for editing
    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        let index = self.require(name)?;
        self.touch();
        Ok(&mut self.worksheets[index])
    }

    /// The sheet most recently added or switched to
    pub fn current_sheet(&self) -> &Worksheet {
        &self.worksheets[self.current]
    }

    pub fn current_sheet_mut(&mut self) -> &mut Worksheet {
        self.touch();
        &mut self.worksheets[self.current]
    }

    /// Make `name` the current sheet
    pub fn switch_sheet(&mut self, name: &str) -> Result<()> {
        self.current = self.require(name)?;
        Ok(())
    }

    /// Append a new empty sheet and make it current
    pub fn add_sheet(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.add_existing_sheet(Worksheet::new(name))
    }

    /// Append a prepared sheet (pre-allocated or plain data) and make it current
    pub fn add_existing_sheet(&mut self, worksheet: Worksheet) -> Result<&mut Worksheet> {
        self.validate_sheet_name(worksheet.name(), None)?;
        self.worksheets.push(worksheet);
        self.current = self.worksheets.len() - 1;
        self.touch();
        Ok(&mut self.worksheets[self.current])
    }

    /// Remove a sheet; the first remaining sheet becomes current
    pub fn remove_sheet(&mut self, name: &str) -> Result<Worksheet> {
        let index = self.require(name)?;
        if self.worksheets.len() == 1 {
            return Err(Error::LastSheetError(name.to_string()));
        }
        let removed = self.worksheets.remove(index);
        self.current = 0;
        self.touch();
        Ok(removed)
    }

    /// Rename a sheet in place
    pub fn rename_sheet(&mut self, old: &str, new: &str) -> Result<()> {
        let index = self.require(old)?;
        self.validate_sheet_name(new, Some(index))?;
        self.worksheets[index].set_name(new);
        self.touch();
        Ok(())
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.sheet_index(name)
            .ok_or_else(|| Error::NoSuchSheet(name.to_string()))
    }

    /// Validate a sheet name, optionally excluding a sheet from the duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "'{}' is longer than {} characters",
                name, MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "'{}' contains '{}'",
                name, c
            )));
        }

        // Excel compares sheet names case-insensitively
        let name_lower = name.to_lowercase();
        for (i, ws) in self.worksheets.iter().enumerate() {
            if Some(i) != exclude_index && ws.name().to_lowercase() == name_lower {
                return Err(Error::DuplicateSheet(name.into()));
            }
        }
        Ok(())
    }

    // ==================== Sheet Helpers ====================

    pub fn set_cell_width<C: Into<ColumnKey>>(&mut self, sheet: &str, column: C, width: f64) -> Result<()> {
        self.sheet_mut(sheet)?.set_cell_width(column, width)
    }

    pub fn set_cell_height(&mut self, sheet: &str, row: u32, height: f64) -> Result<()> {
        self.sheet_mut(sheet)?.set_cell_height(row, height)
    }

    pub fn merge_cell<R: Into<RangeSpec>>(&mut self, sheet: &str, range: R) -> Result<()> {
        self.sheet_mut(sheet)?.merge_cell(range)
    }

    pub fn auto_filter(&mut self, sheet: &str, range: &str) -> Result<()> {
        self.sheet_mut(sheet)?.auto_filter(range)
    }

    pub fn set_sheet_visible(&mut self, sheet: &str, visible: bool) -> Result<()> {
        self.sheet_mut(sheet)?.set_visible(visible);
        Ok(())
    }

    /// Engine a sheet is written with
    pub fn writer_engine_for(&self, sheet: &Worksheet) -> WriterEngine {
        sheet
            .writer_engine()
            .unwrap_or(self.settings.default_writer_engine)
    }

    // ==================== Styles ====================

    /// The workbook's style registry
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Register a shared descriptor under a generated name
    pub fn register_style(&mut self, style: &Arc<Style>) -> String {
        self.touch();
        self.styles.register(style)
    }

    /// Register a descriptor under a chosen name; an existing name is overwritten
    pub fn register_named_style<N, S>(&mut self, name: N, style: S)
    where
        N: Into<String>,
        S: Into<Arc<Style>>,
    {
        self.touch();
        self.styles.register_named(name, style.into());
    }

    /// Drop every registered style except the default
    pub fn reset_styles(&mut self) {
        self.touch();
        self.styles.reset();
    }

    // ==================== Metadata ====================

    pub fn file_properties(&self) -> &FileProperties {
        &self.file_props
    }

    /// Set one document property by key (`"Title"`, `"Creator"`, ...)
    pub fn set_file_property<V: Into<String>>(&mut self, key: &str, value: V) -> Result<()> {
        self.file_props.set(key, value)?;
        self.touch();
        Ok(())
    }

    /// Protect the workbook structure and/or windows with a password
    pub fn protect_workbook<P: Into<String>>(
        &mut self,
        algorithm: &str,
        password: P,
        lock_structure: bool,
        lock_windows: bool,
    ) -> Result<()> {
        let algorithm: ProtectionAlgorithm = algorithm.parse()?;
        self.set_protection(
            WorkbookProtection::new(algorithm, password).with_locks(lock_structure, lock_windows),
        );
        Ok(())
    }

    pub fn set_protection(&mut self, protection: WorkbookProtection) {
        self.protection = Some(protection);
        self.touch();
    }

    pub fn protection(&self) -> Option<&WorkbookProtection> {
        self.protection.as_ref()
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
