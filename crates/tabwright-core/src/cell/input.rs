//! Values about to be written into the grid

use super::value::{Cell, CellValue, StyleRef};
use crate::error::{Error, Result};
use crate::style::Style;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value as Json;
use std::sync::Arc;

/// A value to write, optionally paired with a style handle
#[derive(Debug, Clone, PartialEq)]
pub enum CellInput {
    /// Plain value; the cell gets the default style
    Bare(CellValue),
    /// Value with an explicit style
    Styled(CellValue, StyleRef),
}

impl CellInput {
    /// Pair a value with a style handle
    pub fn styled<V: Into<CellValue>, S: Into<StyleRef>>(value: V, style: S) -> Self {
        CellInput::Styled(value.into(), style.into())
    }

    /// The value part
    pub fn value(&self) -> &CellValue {
        match self {
            CellInput::Bare(v) | CellInput::Styled(v, _) => v,
        }
    }

    /// The explicit style, if any
    pub fn style(&self) -> Option<&StyleRef> {
        match self {
            CellInput::Bare(_) => None,
            CellInput::Styled(_, s) => Some(s),
        }
    }

    /// Build the grid cell for this input
    pub fn into_cell(self) -> Cell {
        match self {
            CellInput::Bare(value) => Cell {
                value,
                style: StyleRef::default(),
            },
            CellInput::Styled(value, style) => Cell { value, style },
        }
    }
}

macro_rules! bare_input_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for CellInput {
                fn from(v: $t) -> Self {
                    CellInput::Bare(CellValue::from(v))
                }
            }
        )*
    };
}

bare_input_from!(bool, i32, i64, u32, f64, &str, String, NaiveDate, NaiveDateTime);

impl From<CellValue> for CellInput {
    fn from(v: CellValue) -> Self {
        CellInput::Bare(v)
    }
}

impl<V: Into<CellValue>, S: Into<StyleRef>> From<(V, S)> for CellInput {
    fn from((value, style): (V, S)) -> Self {
        CellInput::Styled(value.into(), style.into())
    }
}

impl From<Cell> for CellInput {
    fn from(cell: Cell) -> Self {
        CellInput::Styled(cell.value, cell.style)
    }
}

/// Convert a JSON scalar to a cell value; containers are stringified
fn json_to_value(value: Json) -> CellValue {
    match value {
        Json::Null => CellValue::Empty,
        Json::Bool(b) => CellValue::from(b),
        Json::Number(n) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Text(n.to_string()),
        },
        Json::String(s) => CellValue::Text(s),
        other => CellValue::Text(other.to_string()),
    }
}

fn json_to_style(style: Json) -> Result<StyleRef> {
    match style {
        Json::String(name) => Ok(StyleRef::Named(name)),
        Json::Object(_) => serde_json::from_value::<Style>(style)
            .map(|s| StyleRef::Inline(Arc::new(s)))
            .map_err(|e| Error::InvalidStyleType(format!("malformed style descriptor: {}", e))),
        other => Err(Error::InvalidStyleType(json_type_name(&other).to_string())),
    }
}

fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl TryFrom<Json> for CellInput {
    type Error = Error;

    /// Accepts a bare scalar or a `[value, style]` pair
    fn try_from(input: Json) -> Result<Self> {
        match input {
            Json::Array(items) => {
                if items.len() != 2 {
                    return Err(Error::InvalidCellValue(format!(
                        "expected [value, style], got {} element(s)",
                        items.len()
                    )));
                }
                let mut items = items.into_iter();
                let value = items.next().map(json_to_value).unwrap_or_default();
                let style = json_to_style(items.next().unwrap_or(Json::Null))?;
                Ok(CellInput::Styled(value, style))
            }
            scalar => Ok(CellInput::Bare(json_to_value(scalar))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_and_styled_inputs() {
        let bare = CellInput::from(5);
        assert_eq!(bare.value(), &CellValue::Number(5.0));
        assert!(bare.style().is_none());

        let styled = CellInput::from(("Name", "header"));
        assert_eq!(styled.style(), Some(&StyleRef::named("header")));
        assert_eq!(styled.into_cell().value, CellValue::text("Name"));
    }

    #[test]
    fn test_json_scalars() {
        assert_eq!(
            CellInput::try_from(json!(3.5)).unwrap(),
            CellInput::Bare(CellValue::Number(3.5))
        );
        assert_eq!(
            CellInput::try_from(json!(null)).unwrap(),
            CellInput::Bare(CellValue::Empty)
        );
        assert_eq!(
            CellInput::try_from(json!({"a": 1})).unwrap(),
            CellInput::Bare(CellValue::text("{\"a\":1}"))
        );
    }

    #[test]
    fn test_json_pairs() {
        let named = CellInput::try_from(json!(["x", "bold"])).unwrap();
        assert_eq!(named, CellInput::styled("x", "bold"));

        let inline = CellInput::try_from(json!([1, {"font": {"bold": true}}])).unwrap();
        match inline.style() {
            Some(StyleRef::Inline(style)) => {
                assert_eq!(style.font.as_ref().and_then(|f| f.bold), Some(true))
            }
            other => panic!("expected inline style, got {:?}", other),
        }
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            CellInput::try_from(json!(["a", "b", "c"])),
            Err(Error::InvalidCellValue(_))
        ));
        assert!(matches!(
            CellInput::try_from(json!(["a"])),
            Err(Error::InvalidCellValue(_))
        ));
        assert!(matches!(
            CellInput::try_from(json!(["a", 3])),
            Err(Error::InvalidStyleType(_))
        ));
        assert!(matches!(
            CellInput::try_from(json!(["a", null])),
            Err(Error::InvalidStyleType(_))
        ));
    }
}
