//! Workbook export
//!
//! # Example
//!
//! ```rust
//! use tabwright::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! workbook.current_sheet_mut().set("A1", "Hello").unwrap();
//!
//! let document = workbook.export().unwrap();
//! assert_eq!(workbook.state(), BuildState::Exported);
//! assert!(document.sheet("Sheet1").is_some());
//! ```

use thiserror::Error;

use crate::render::{RenderError, Renderer};
use crate::{ExchangeDocument, SnapshotError, SnapshotSerializer, Workbook};

/// Errors that can occur while exporting a workbook
#[derive(Debug, Error)]
pub enum ExportError {
    /// The workbook failed a check
    #[error(transparent)]
    Core(#[from] tabwright_core::Error),

    /// The snapshot could not be encoded or was inconsistent
    #[error(transparent)]
    Snapshot(SnapshotError),

    /// The renderer failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<SnapshotError> for ExportError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Core(err) => ExportError::Core(err),
            other => ExportError::Snapshot(other),
        }
    }
}

/// Extension trait for Workbook to produce snapshots and rendered files
pub trait WorkbookExportExt {
    /// Validate and snapshot the workbook
    ///
    /// On success the workbook moves to `Exported`. On failure nothing
    /// changes and the workbook can be fixed and exported again.
    fn export(&mut self) -> Result<ExchangeDocument, ExportError>;

    /// Export and encode as JSON bytes
    fn export_bytes(&mut self) -> Result<Vec<u8>, ExportError>;

    /// Export, encode and hand the document to a renderer
    fn render_with<R: Renderer + ?Sized>(&mut self, renderer: &R) -> Result<Vec<u8>, ExportError>;
}

impl WorkbookExportExt for Workbook {
    fn export(&mut self) -> Result<ExchangeDocument, ExportError> {
        let document = SnapshotSerializer::serialize(self)?;
        self.mark_exported();
        tracing::debug!(
            sheets = document.sheet_order.len(),
            styles = document.style.len(),
            "workbook exported"
        );
        Ok(document)
    }

    fn export_bytes(&mut self) -> Result<Vec<u8>, ExportError> {
        let bytes = SnapshotSerializer::serialize(self)?.to_json_bytes()?;
        self.mark_exported();
        tracing::debug!(bytes = bytes.len(), "workbook exported");
        Ok(bytes)
    }

    fn render_with<R: Renderer + ?Sized>(&mut self, renderer: &R) -> Result<Vec<u8>, ExportError> {
        let bytes = SnapshotSerializer::serialize(self)?.to_json_bytes()?;
        let file = renderer.render(&bytes)?;
        if file.is_empty() {
            return Err(RenderError::EmptyOutput.into());
        }
        self.mark_exported();
        tracing::debug!(document = bytes.len(), file = file.len(), "workbook rendered");
        Ok(file)
    }
}
