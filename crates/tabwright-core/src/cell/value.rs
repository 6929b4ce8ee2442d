//! Cell value types

use crate::style::Style;
use crate::DEFAULT_STYLE;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Largest magnitude at which every integer is exactly representable as f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Represents the value stored in a cell
///
/// Only text and numbers reach the renderer. Booleans and dates are converted to
/// their text form when the value is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// String value
    Text(String),

    /// Numeric value
    Number(f64),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
        }
    }

    fn integral(n: f64) -> Option<i64> {
        (n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER).then(|| n as i64)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => match Self::integral(*n) {
                Some(i) => write!(f, "{}", i),
                None => write!(f, "{}", n),
            },
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_str(""),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => match Self::integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Text(if b { "TRUE" } else { "FALSE" }.to_string())
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Text(d.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Style handle attached to a cell
///
/// A handle either names a style registered on the workbook or carries a
/// descriptor that is interned when the workbook is exported.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRef {
    /// A registered style name
    Named(String),
    /// A shared descriptor, registered by identity on export
    Inline(Arc<Style>),
}

impl StyleRef {
    /// Handle to a named style
    pub fn named<S: Into<String>>(name: S) -> Self {
        StyleRef::Named(name.into())
    }

    /// Check whether this is the reserved default style
    pub fn is_default(&self) -> bool {
        matches!(self, StyleRef::Named(name) if name == DEFAULT_STYLE)
    }
}

impl Default for StyleRef {
    fn default() -> Self {
        StyleRef::Named(DEFAULT_STYLE.to_string())
    }
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        StyleRef::Named(name.to_string())
    }
}

impl From<String> for StyleRef {
    fn from(name: String) -> Self {
        StyleRef::Named(name)
    }
}

impl From<Arc<Style>> for StyleRef {
    fn from(style: Arc<Style>) -> Self {
        StyleRef::Inline(style)
    }
}

impl From<&Arc<Style>> for StyleRef {
    fn from(style: &Arc<Style>) -> Self {
        StyleRef::Inline(Arc::clone(style))
    }
}

impl From<Style> for StyleRef {
    fn from(style: Style) -> Self {
        StyleRef::Inline(Arc::new(style))
    }
}

/// A single grid slot: a value and the style it is rendered with
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// Cell value
    pub value: CellValue,
    /// Style handle
    pub style: StyleRef,
}

impl Cell {
    /// Create a cell from a value and a style handle
    pub fn new<V: Into<CellValue>, S: Into<StyleRef>>(value: V, style: S) -> Self {
        Self {
            value: value.into(),
            style: style.into(),
        }
    }

    /// Create a cell with the default style
    pub fn plain<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            style: StyleRef::default(),
        }
    }

    /// Check whether this cell is still in its initial state
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.style.is_default()
    }
}
