//! Font descriptor

use super::Color;
use serde::{Deserialize, Serialize};

/// Font settings; anything left `None` is omitted from the renderer's font map
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontStyle {
    /// Font family name (e.g., "Calibri")
    pub name: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Underline kind
    pub underline: Option<UnderlineStyle>,
    /// Strikethrough
    pub strike: Option<bool>,
    /// Font color
    pub color: Option<Color>,
    /// Superscript or subscript
    pub vert_align: Option<FontVerticalAlign>,
}

impl FontStyle {
    /// Create a font with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the family name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the size in points
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set the underline kind
    pub fn with_underline(mut self, underline: UnderlineStyle) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set strikethrough
    pub fn with_strike(mut self, strike: bool) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Set the font color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set superscript or subscript
    pub fn with_vert_align(mut self, align: FontVerticalAlign) -> Self {
        self.vert_align = Some(align);
        self
    }
}

// `size` is hashed by bit pattern so descriptors can key hash maps
impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.map(f64::to_bits).hash(state);
        (self.bold, self.italic, self.strike).hash(state);
        self.underline.hash(state);
        self.color.hash(state);
        self.vert_align.hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline kinds, named as the renderer spells them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnderlineStyle {
    /// No underline
    #[default]
    None,
    /// Single line
    Single,
    /// Double line
    Double,
    /// Single line spanning the full cell width
    SingleAccounting,
    /// Double line spanning the full cell width
    DoubleAccounting,
}

/// Baseline shift of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontVerticalAlign {
    /// Normal baseline
    #[default]
    Baseline,
    /// Raised
    Superscript,
    /// Lowered
    Subscript,
}
