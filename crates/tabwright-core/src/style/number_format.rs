//! Number format codes

use serde::{Deserialize, Serialize};

/// Format code the renderer applies to a cell's number
///
/// Travels as the bare code string. `"general"` in any case reads back as
/// [`NumberFormat::General`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NumberFormat {
    /// Renderer default
    #[default]
    General,
    /// Any other code, passed through untouched
    Code(String),
}

impl NumberFormat {
    /// Whole numbers
    pub const INTEGER: &'static str = "0";
    /// Two decimals
    pub const DECIMAL: &'static str = "0.00";
    /// Thousands separator
    pub const THOUSANDS: &'static str = "#,##0";
    /// Thousands separator, two decimals
    pub const THOUSANDS_DECIMAL: &'static str = "#,##0.00";
    /// Whole percent
    pub const PERCENT: &'static str = "0%";
    /// Percent, two decimals
    pub const PERCENT_DECIMAL: &'static str = "0.00%";
    /// Date as `yyyy-mm-dd`
    pub const ISO_DATE: &'static str = "yyyy-mm-dd";
    /// Date and time
    pub const ISO_DATETIME: &'static str = "yyyy-mm-dd hh:mm:ss";
    /// Treat the value as text
    pub const TEXT: &'static str = "@";

    /// Wrap a format code
    pub fn code<S: Into<String>>(code: S) -> Self {
        Self::from(code.into())
    }

    /// Two-decimal format (`0.00`)
    pub fn decimal() -> Self {
        Self::code(Self::DECIMAL)
    }

    /// Whole percent format (`0%`)
    pub fn percent() -> Self {
        Self::code(Self::PERCENT)
    }

    /// ISO date format
    pub fn iso_date() -> Self {
        Self::code(Self::ISO_DATE)
    }

    /// Text format (`@`)
    pub fn text() -> Self {
        Self::code(Self::TEXT)
    }

    /// Check for the renderer's default
    pub fn is_general(&self) -> bool {
        matches!(self, NumberFormat::General)
    }

    /// Code as sent to the renderer
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "general",
            NumberFormat::Code(code) => code,
        }
    }
}

impl From<String> for NumberFormat {
    fn from(code: String) -> Self {
        if code.eq_ignore_ascii_case("general") {
            NumberFormat::General
        } else {
            NumberFormat::Code(code)
        }
    }
}

impl From<&str> for NumberFormat {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<NumberFormat> for String {
    fn from(format: NumberFormat) -> Self {
        match format {
            NumberFormat::General => "general".to_string(),
            NumberFormat::Code(code) => code,
        }
    }
}
