//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Complete cell style descriptor
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation
//! - [`StyleRegistry`] - Named, deduplicated styles of a workbook
//! - [`StyleAttributes`] - The renderer's flat view of a style

mod alignment;
mod attributes;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod registry;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment, STACKED_TEXT};
pub use attributes::{
    AlignmentAttributes, BorderAttributes, EdgeAttributes, FillAttributes, FontAttributes,
    ProtectionAttributes, StyleAttributes,
};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillPattern, FillStyle, FillType};
pub use font::{FontStyle, FontVerticalAlign, UnderlineStyle};
pub use number_format::NumberFormat;
pub use registry::StyleRegistry;

use serde::{Deserialize, Serialize};

/// Complete cell style
///
/// A style is a value object: two styles with the same settings compare equal.
/// Cells share descriptors through `Arc<Style>`, and the [`StyleRegistry`]
/// names them when a workbook is exported.
///
/// # Example
///
/// ```rust
/// use tabwright_core::{Color, Style};
///
/// let header = Style::new().bold(true).fill_color(Color::YELLOW);
/// assert_eq!(header.font.as_ref().and_then(|f| f.bold), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    /// Font settings
    pub font: Option<FontStyle>,
    /// Fill/background settings
    pub fill: Option<FillStyle>,
    /// Border settings
    pub border: Option<BorderStyle>,
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Cell protection
    pub protection: Option<Protection>,
    /// Number format
    pub number_format: Option<NumberFormat>,
}

impl Style {
    /// Create a style with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_mut().bold = Some(bold);
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font_mut().italic = Some(italic);
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_mut().size = Some(size);
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_mut().name = Some(name.into());
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_mut().color = Some(color);
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(FillStyle::solid(color));
        self
    }

    /// Set all four borders
    pub fn border_all(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.border = Some(BorderStyle::all(style, color));
        self
    }

    /// Set number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(NumberFormat::from(format.into()));
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment_mut().horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment_mut().vertical = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment_mut().wrap_text = Some(wrap);
        self
    }

    /// Set cell protection
    pub fn protection(mut self, locked: bool, hidden: bool) -> Self {
        self.protection = Some(Protection {
            locked: Some(locked),
            hidden: Some(hidden),
        });
        self
    }

    /// Get a mutable reference to font settings, creating them if unset
    pub fn font_mut(&mut self) -> &mut FontStyle {
        self.font.get_or_insert_with(FontStyle::default)
    }

    /// Get a mutable reference to alignment settings, creating them if unset
    pub fn alignment_mut(&mut self) -> &mut Alignment {
        self.alignment.get_or_insert_with(Alignment::default)
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Protection {
    /// Cell is locked (protected when sheet is protected)
    pub locked: Option<bool>,
    /// Formula is hidden when sheet is protected
    pub hidden: Option<bool>,
}

impl Protection {
    /// Locked, not hidden
    pub fn locked() -> Self {
        Self {
            locked: Some(true),
            hidden: Some(false),
        }
    }

    /// Create unlocked protection
    pub fn unlocked() -> Self {
        Self {
            locked: Some(false),
            hidden: Some(false),
        }
    }
}
