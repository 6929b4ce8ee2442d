//! Alignment descriptor

use serde::{Deserialize, Serialize};

/// Placement of text inside a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment
    pub vertical: Option<VerticalAlignment>,
    /// Wrap text onto several lines
    pub wrap_text: Option<bool>,
    /// Shrink text to fit the cell
    pub shrink_to_fit: Option<bool>,
    /// Indent level
    pub indent: Option<u8>,
    /// Degrees in -90..=90, or 255 for stacked text
    pub text_rotation: Option<i16>,
    /// 0 context, 1 left-to-right, 2 right-to-left
    pub reading_order: Option<u8>,
    /// Justify the last line of distributed text
    pub justify_last_line: Option<bool>,
    /// Indent relative to the current level
    pub relative_indent: Option<i32>,
}

/// Rotation value the renderer reads as stacked (vertical) text
pub const STACKED_TEXT: i16 = 255;

impl Alignment {
    /// Create an alignment with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = Some(align);
        self
    }

    /// Enable or disable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = Some(wrap);
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Rotate by `degrees`, clamped to -90..=90
    pub fn with_rotation(mut self, degrees: i16) -> Self {
        self.text_rotation = Some(degrees.clamp(-90, 90));
        self
    }

    /// Stack the text vertically
    pub fn with_stacked_text(mut self) -> Self {
        self.text_rotation = Some(STACKED_TEXT);
        self
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    /// Text left, numbers right
    General,
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
    /// Repeat content across the cell
    Fill,
    /// Stretch to the cell width
    Justify,
    /// Center across the selection
    CenterContinuous,
    /// Justify with even spacing
    Distributed,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    /// Top aligned
    Top,
    /// Centered
    Center,
    /// Bottom aligned
    Bottom,
    /// Stretch to the cell height
    Justify,
    /// Justify with even spacing
    Distributed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_bounds() {
        assert_eq!(Alignment::new().with_rotation(120).text_rotation, Some(90));
        assert_eq!(Alignment::new().with_rotation(-120).text_rotation, Some(-90));
        assert_eq!(Alignment::new().with_stacked_text().text_rotation, Some(STACKED_TEXT));
    }

    #[test]
    fn test_alignment_names() {
        let a = Alignment::new()
            .with_horizontal(HorizontalAlignment::CenterContinuous)
            .with_vertical(VerticalAlignment::Top)
            .with_wrap(true)
            .with_indent(2);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["horizontal"], "centerContinuous");
        assert_eq!(json["vertical"], "top");
        assert_eq!(json["wrap_text"], true);
        assert_eq!(json["indent"], 2);
    }
}
