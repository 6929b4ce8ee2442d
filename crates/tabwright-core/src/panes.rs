//! Freeze and split panes

use crate::cell::{CellRange, CellReference};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which pane is active after a freeze or split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivePane {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl ActivePane {
    /// Parse the renderer's pane name (`"bottomLeft"`, ...)
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "bottomLeft" => Ok(ActivePane::BottomLeft),
            "bottomRight" => Ok(ActivePane::BottomRight),
            "topLeft" => Ok(ActivePane::TopLeft),
            "topRight" => Ok(ActivePane::TopRight),
            other => Err(Error::InvalidPanes(format!(
                "unknown active pane '{}', expected bottomLeft, bottomRight, topLeft or topRight",
                other
            ))),
        }
    }
}

/// A selection inside a pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected cell or range
    pub sq_ref: String,
    /// Cell holding the cursor
    pub active_cell: String,
    /// Pane the selection lives in
    pub pane: ActivePane,
}

impl Selection {
    pub fn new<S: Into<String>, A: Into<String>>(sq_ref: S, active_cell: A, pane: ActivePane) -> Self {
        Self {
            sq_ref: sq_ref.into(),
            active_cell: active_cell.into(),
            pane,
        }
    }

    /// Check both references
    pub fn validate(&self) -> Result<()> {
        check_reference_or_range(&self.sq_ref)?;
        CellReference::parse(&self.active_cell)?;
        Ok(())
    }

    fn normalize(&mut self) -> Result<()> {
        self.sq_ref = normalize_reference_or_range(&self.sq_ref)?;
        self.active_cell = CellReference::parse(&self.active_cell)?.to_a1_string();
        Ok(())
    }
}

/// Pane configuration of a worksheet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Panes {
    /// Freeze the panes
    pub freeze: bool,
    /// Split the panes
    pub split: bool,
    /// Horizontal split position (columns for frozen panes)
    pub x_split: u32,
    /// Vertical split position (rows for frozen panes)
    pub y_split: u32,
    /// Top-left visible cell of the bottom-right pane, empty when unset
    pub top_left_cell: String,
    /// Active pane
    #[serde(serialize_with = "serialize_active_pane")]
    pub active_pane: Option<ActivePane>,
    /// Selections
    pub selection: Vec<Selection>,
}

fn serialize_active_pane<S: serde::Serializer>(
    pane: &Option<ActivePane>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match pane {
        Some(pane) => pane.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

impl Panes {
    /// Frozen panes with `cols` columns and `rows` rows kept in view
    pub fn frozen(cols: u32, rows: u32) -> Self {
        let top_left = CellReference::new(rows, cols);
        Self {
            freeze: true,
            x_split: cols,
            y_split: rows,
            top_left_cell: top_left.to_a1_string(),
            active_pane: Some(match (cols > 0, rows > 0) {
                (true, true) => ActivePane::BottomRight,
                (true, false) => ActivePane::TopRight,
                _ => ActivePane::BottomLeft,
            }),
            ..Default::default()
        }
    }

    /// Set the top-left visible cell
    pub fn with_top_left_cell<S: Into<String>>(mut self, cell: S) -> Self {
        self.top_left_cell = cell.into();
        self
    }

    /// Set the active pane
    pub fn with_active_pane(mut self, pane: ActivePane) -> Self {
        self.active_pane = Some(pane);
        self
    }

    /// Add a selection
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection.push(selection);
        self
    }

    /// Check the top-left cell and every selection
    pub fn validate(&self) -> Result<()> {
        if !self.top_left_cell.is_empty() {
            CellReference::parse(&self.top_left_cell)
                .map_err(|e| Error::InvalidPanes(format!("top_left_cell: {}", e)))?;
        }
        for selection in &self.selection {
            selection
                .validate()
                .map_err(|e| Error::InvalidPanes(format!("selection {}: {}", selection.sq_ref, e)))?;
        }
        Ok(())
    }

    /// Validate and rewrite every reference in uppercase A1 form
    pub(crate) fn normalized(mut self) -> Result<Self> {
        self.validate()?;
        if !self.top_left_cell.is_empty() {
            self.top_left_cell = CellReference::parse(&self.top_left_cell)?.to_a1_string();
        }
        for selection in &mut self.selection {
            selection.normalize()?;
        }
        Ok(self)
    }
}

/// Accept either `"A1"` or `"A1:B2"`
pub(crate) fn check_reference_or_range(s: &str) -> Result<()> {
    normalize_reference_or_range(s).map(|_| ())
}

/// Canonical uppercase form of `"a1"` or `"a1:b2"`
pub(crate) fn normalize_reference_or_range(s: &str) -> Result<String> {
    if s.contains(':') {
        CellRange::parse(s).map(|r| r.to_a1_string())
    } else {
        CellReference::parse(s).map(|r| r.to_a1_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_pane_names() {
        assert_eq!(ActivePane::parse("topRight").unwrap(), ActivePane::TopRight);
        assert!(matches!(ActivePane::parse("middle"), Err(Error::InvalidPanes(_))));
    }

    #[test]
    fn test_frozen_header_row() {
        let panes = Panes::frozen(0, 1);
        assert_eq!(panes.top_left_cell, "A2");
        assert_eq!(panes.active_pane, Some(ActivePane::BottomLeft));
        assert!(panes.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let bad_cell = Panes::default().with_top_left_cell("A0");
        assert!(matches!(bad_cell.validate(), Err(Error::InvalidPanes(_))));

        let bad_selection = Panes::frozen(1, 1)
            .with_selection(Selection::new("A1:B", "A1", ActivePane::BottomRight));
        assert!(matches!(bad_selection.validate(), Err(Error::InvalidPanes(_))));
    }

    #[test]
    fn test_serialized_shape() {
        let panes = Panes::frozen(1, 1)
            .with_selection(Selection::new("B2:C3", "B2", ActivePane::BottomRight));
        assert_eq!(
            serde_json::to_value(&panes).unwrap(),
            json!({
                "freeze": true,
                "split": false,
                "x_split": 1,
                "y_split": 1,
                "top_left_cell": "B2",
                "active_pane": "bottomRight",
                "selection": [{"sq_ref": "B2:C3", "active_cell": "B2", "pane": "bottomRight"}]
            })
        );
        assert_eq!(serde_json::to_value(Panes::default()).unwrap()["active_pane"], "");
    }
}
