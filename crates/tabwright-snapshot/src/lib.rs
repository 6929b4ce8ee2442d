//! # tabwright-snapshot
//!
//! Flattens a [`Workbook`](tabwright_core::Workbook) into the exchange document
//! an external renderer consumes.
//!
//! ```rust
//! use tabwright_core::Workbook;
//! use tabwright_snapshot::SnapshotSerializer;
//!
//! let mut workbook = Workbook::new();
//! workbook.current_sheet_mut().set("A1", "Hello").unwrap();
//!
//! let document = SnapshotSerializer::serialize(&workbook).unwrap();
//! assert_eq!(document.sheet_order, vec!["Sheet1"]);
//! let bytes = document.to_json_bytes().unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod document;
pub mod error;
pub mod serializer;

pub use document::{ExchangeDocument, SerializedCell, SheetDocument, SheetMap};
pub use error::{SnapshotError, SnapshotResult};
pub use serializer::SnapshotSerializer;
