//! Border descriptor

use super::Color;
use serde::{Deserialize, Serialize};

/// Per-edge borders; a `None` edge is not drawn
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderStyle {
    /// Left edge
    pub left: Option<BorderEdge>,
    /// Right edge
    pub right: Option<BorderEdge>,
    /// Top edge
    pub top: Option<BorderEdge>,
    /// Bottom edge
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// Create a border style with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Same line on every edge
    pub fn all(style: BorderLineStyle, color: Color) -> Self {
        let edge = BorderEdge::new(style, color);
        Self {
            left: Some(edge.clone()),
            right: Some(edge.clone()),
            top: Some(edge.clone()),
            bottom: Some(edge),
        }
    }

    /// Outline only the top and bottom, as header rows usually are
    pub fn horizontal(style: BorderLineStyle, color: Color) -> Self {
        let edge = BorderEdge::new(style, color);
        Self {
            top: Some(edge.clone()),
            bottom: Some(edge),
            ..Self::default()
        }
    }

    /// Set the left edge
    pub fn with_left(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.left = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the right edge
    pub fn with_right(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.right = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the top edge
    pub fn with_top(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.top = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the bottom edge
    pub fn with_bottom(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.bottom = Some(BorderEdge::new(style, color));
        self
    }

    /// Check if no edge is set
    pub fn is_empty(&self) -> bool {
        [&self.left, &self.right, &self.top, &self.bottom]
            .iter()
            .all(|edge| edge.is_none())
    }
}

/// One drawn edge; a missing color leaves the renderer's default
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderEdge {
    /// Line kind
    #[serde(default)]
    pub style: BorderLineStyle,
    /// Line color
    #[serde(default)]
    pub color: Option<Color>,
}

impl BorderEdge {
    /// Create an edge with a line kind and color
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self {
            style,
            color: Some(color),
        }
    }
}

/// Line kinds; the discriminant is the renderer's numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderLineStyle {
    #[default]
    None = 0,
    Thin = 1,
    Medium = 2,
    Dashed = 3,
    Dotted = 4,
    Thick = 5,
    Double = 6,
    Hair = 7,
    MediumDashed = 8,
    DashDot = 9,
    MediumDashDot = 10,
    DashDotDot = 11,
    MediumDashDotDot = 12,
    SlantDashDot = 13,
}

impl BorderLineStyle {
    /// Numeric line-style code
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_codes() {
        assert_eq!(BorderLineStyle::None.code(), 0);
        assert_eq!(BorderLineStyle::Thin.code(), 1);
        assert_eq!(BorderLineStyle::Thick.code(), 5);
        assert_eq!(BorderLineStyle::Hair.code(), 7);
        assert_eq!(BorderLineStyle::SlantDashDot.code(), 13);
    }

    #[test]
    fn test_descriptor_names() {
        let edge: BorderEdge =
            serde_json::from_str(r#"{"style": "mediumDashDot", "color": "FF0000"}"#).unwrap();
        assert_eq!(edge.style, BorderLineStyle::MediumDashDot);
        assert_eq!(edge.color, Some(Color::RED));
    }

    #[test]
    fn test_edge_sets() {
        let all = BorderStyle::all(BorderLineStyle::Thin, Color::SILVER);
        assert!(all.left.is_some() && all.bottom.is_some());

        let rule = BorderStyle::horizontal(BorderLineStyle::Double, Color::BLACK);
        assert!(rule.left.is_none() && rule.right.is_none());
        assert_eq!(rule.top.map(|e| e.style), Some(BorderLineStyle::Double));

        assert!(BorderStyle::new().is_empty());
        assert!(!BorderStyle::new().with_right(BorderLineStyle::Hair, Color::BLACK).is_empty());
    }
}
