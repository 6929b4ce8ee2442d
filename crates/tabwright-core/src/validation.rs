//! Data validation
//!
//! A data-validation rule restricts what can be typed into a range: a numeric
//! window, a drop-down list (inline values or a reference to a range), and
//! optional input and error messages.
//!
//! ## Example
//!
//! ```rust
//! use tabwright_core::{Workbook, DataValidation};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.current_sheet_mut();
//!
//! let rule = DataValidation::new("A1:A10")
//!     .with_drop_list(["Yes", "No", "Maybe"])
//!     .with_error_message("Invalid value", "Please select from the list");
//!
//! sheet.add_data_validation(rule).unwrap();
//! ```

use crate::cell::CellRange;
use crate::error::{Error, Result};
use crate::panes::{check_reference_or_range, normalize_reference_or_range};
use serde::Serialize;

/// Data validation rule for a cell or range
///
/// Messages and the numeric window are stored as halves so that a rule built
/// field by field can be checked for incomplete pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DataValidation {
    /// Cell or range the rule applies to
    pub sq_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_range_start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_range_stop: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_body: Option<String>,
    /// Inline drop-down values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_list: Option<Vec<String>>,
    /// Drop-down values taken from a range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqref_drop_list: Option<String>,
}

impl DataValidation {
    /// Create an empty rule over `sq_ref`
    pub fn new<S: Into<String>>(sq_ref: S) -> Self {
        Self {
            sq_ref: sq_ref.into(),
            ..Default::default()
        }
    }

    /// Accept numbers between `start` and `stop`
    pub fn with_range(mut self, start: f64, stop: f64) -> Self {
        self.set_range_start = Some(start);
        self.set_range_stop = Some(stop);
        self
    }

    /// Message shown when a cell of the range is selected
    pub fn with_input_message<T: Into<String>, B: Into<String>>(mut self, title: T, body: B) -> Self {
        self.input_title = Some(title.into());
        self.input_body = Some(body.into());
        self
    }

    /// Alert shown when invalid data is entered
    pub fn with_error_message<T: Into<String>, B: Into<String>>(mut self, title: T, body: B) -> Self {
        self.error_title = Some(title.into());
        self.error_body = Some(body.into());
        self
    }

    /// Inline drop-down values
    pub fn with_drop_list<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.drop_list = Some(values.into_iter().map(|v| v.to_string()).collect());
        self.sqref_drop_list = None;
        self
    }

    /// Drop-down values read from a range such as `"E1:E5"`
    pub fn with_sqref_drop_list<S: Into<String>>(mut self, range: S) -> Self {
        self.sqref_drop_list = Some(range.into());
        self.drop_list = None;
        self
    }

    /// Check references and that every pair is complete
    pub fn validate(&self) -> Result<()> {
        check_reference_or_range(&self.sq_ref).map_err(|e| self.invalid(format!("sq_ref: {}", e)))?;

        pair(&self.set_range_start, &self.set_range_stop, "set_range start and stop")
            .map_err(|e| self.invalid(e))?;
        pair(&self.input_title, &self.input_body, "input title and body")
            .map_err(|e| self.invalid(e))?;
        pair(&self.error_title, &self.error_body, "error title and body")
            .map_err(|e| self.invalid(e))?;

        if let (Some(start), Some(stop)) = (self.set_range_start, self.set_range_stop) {
            if start > stop {
                return Err(self.invalid(format!("set_range start {} is above stop {}", start, stop)));
            }
        }

        if let Some(range) = &self.sqref_drop_list {
            if !range.contains(':') {
                return Err(self.invalid(format!(
                    "drop list reference '{}' must have the form 'A1:B2'",
                    range
                )));
            }
            CellRange::parse(range).map_err(|e| self.invalid(format!("drop list: {}", e)))?;
        }
        if self.drop_list.is_some() && self.sqref_drop_list.is_some() {
            return Err(self.invalid("both an inline and a range drop list are set"));
        }
        Ok(())
    }

    /// Validate and rewrite `sq_ref` and the drop-list range in uppercase A1 form
    pub(crate) fn normalized(mut self) -> Result<Self> {
        self.validate()?;
        self.sq_ref = normalize_reference_or_range(&self.sq_ref)?;
        if let Some(range) = self.sqref_drop_list.take() {
            self.sqref_drop_list = Some(CellRange::parse(&range)?.to_a1_string());
        }
        Ok(self)
    }

    fn invalid<S: Into<String>>(&self, reason: S) -> Error {
        Error::InvalidDataValidation(format!("{}: {}", self.sq_ref, reason.into()))
    }
}

fn pair<T>(first: &Option<T>, second: &Option<T>, what: &str) -> std::result::Result<(), String> {
    if first.is_some() != second.is_some() {
        return Err(format!("{} must be given together", what));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_rule() {
        let rule = DataValidation::new("A1:A10")
            .with_range(1.0, 10.0)
            .with_input_message("Pick", "A number from 1 to 10")
            .with_error_message("Oops", "Out of range");
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn test_incomplete_pairs() {
        let mut rule = DataValidation::new("B2");
        rule.input_title = Some("Title only".into());
        assert!(matches!(rule.validate(), Err(Error::InvalidDataValidation(_))));

        let mut rule = DataValidation::new("B2");
        rule.set_range_stop = Some(4.0);
        assert!(matches!(rule.validate(), Err(Error::InvalidDataValidation(_))));

        let mut rule = DataValidation::new("B2");
        rule.error_body = Some("Body only".into());
        assert!(matches!(rule.validate(), Err(Error::InvalidDataValidation(_))));
    }

    #[test]
    fn test_bad_references() {
        assert!(DataValidation::new("A0").validate().is_err());
        assert!(DataValidation::new("A1:B2:C3").validate().is_err());
        assert!(DataValidation::new("A1")
            .with_sqref_drop_list("E1")
            .validate()
            .is_err());
        assert!(DataValidation::new("A1")
            .with_sqref_drop_list("E1:E5")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_serialized_keys() {
        let rule = DataValidation::new("A1:A3")
            .with_drop_list([1, 2, 3])
            .with_input_message("t", "b");
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "sq_ref": "A1:A3",
                "input_title": "t",
                "input_body": "b",
                "drop_list": ["1", "2", "3"]
            })
        );
    }
}
