//! Renderer-facing style attributes
//!
//! A finalized style is a flat record keyed the way the renderer reads it:
//! `Font`, `Fill`, `Border`, `Alignment`, `Protection` and `CustomNumFmt`.
//! Unset descriptor fields are omitted; border line styles become numeric codes.

use super::{
    Alignment, BorderEdge, BorderStyle, Color, FillPattern, FillStyle, FillType, FontStyle,
    FontVerticalAlign, HorizontalAlignment, Protection, Style, UnderlineStyle, VerticalAlignment,
};
use serde::{Deserialize, Serialize};

/// Number format sent when a style sets none
pub const DEFAULT_NUMBER_FORMAT: &str = "general";

/// Flat attribute record of one finalized style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleAttributes {
    pub font: FontAttributes,
    pub fill: FillAttributes,
    pub border: BorderAttributes,
    pub alignment: AlignmentAttributes,
    pub protection: ProtectionAttributes,
    pub custom_num_fmt: String,
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self {
            font: FontAttributes::default(),
            fill: FillAttributes::default(),
            border: BorderAttributes::default(),
            alignment: AlignmentAttributes::default(),
            protection: ProtectionAttributes::default(),
            custom_num_fmt: DEFAULT_NUMBER_FORMAT.to_string(),
        }
    }
}

impl From<&Style> for StyleAttributes {
    fn from(style: &Style) -> Self {
        Self {
            font: style.font.as_ref().map(Into::into).unwrap_or_default(),
            fill: style.fill.as_ref().map(Into::into).unwrap_or_default(),
            border: style.border.as_ref().map(Into::into).unwrap_or_default(),
            alignment: style.alignment.as_ref().map(Into::into).unwrap_or_default(),
            protection: style.protection.as_ref().map(Into::into).unwrap_or_default(),
            custom_num_fmt: style
                .number_format
                .as_ref()
                .map(|f| f.format_string().to_string())
                .unwrap_or_else(|| DEFAULT_NUMBER_FORMAT.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FontAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<UnderlineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vert_align: Option<FontVerticalAlign>,
}

impl From<&FontStyle> for FontAttributes {
    fn from(font: &FontStyle) -> Self {
        Self {
            bold: font.bold,
            italic: font.italic,
            family: font.name.clone(),
            size: font.size,
            strike: font.strike,
            color: font.color,
            underline: font.underline,
            vert_align: font.vert_align,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FillAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<FillType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shading: Option<u8>,
}

impl From<&FillStyle> for FillAttributes {
    fn from(fill: &FillStyle) -> Self {
        Self {
            r#type: fill.effective_kind(),
            pattern: fill.pattern.as_ref().map(FillPattern::code),
            color: fill.color,
            shading: fill.shading,
        }
    }
}

/// Border edges keyed `left`, `right`, `top`, `bottom`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BorderAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<EdgeAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<EdgeAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<EdgeAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<EdgeAttributes>,
}

impl From<&BorderStyle> for BorderAttributes {
    fn from(border: &BorderStyle) -> Self {
        let edge = |e: &Option<BorderEdge>| e.as_ref().map(EdgeAttributes::from);
        Self {
            left: edge(&border.left),
            right: edge(&border.right),
            top: edge(&border.top),
            bottom: edge(&border.bottom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EdgeAttributes {
    /// Numeric line-style code
    pub style: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl From<&BorderEdge> for EdgeAttributes {
    fn from(edge: &BorderEdge) -> Self {
        Self {
            style: edge.style.code(),
            color: edge.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlignmentAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrink_to_fit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_order: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_last_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_indent: Option<i32>,
}

impl From<&Alignment> for AlignmentAttributes {
    fn from(a: &Alignment) -> Self {
        Self {
            horizontal: a.horizontal,
            vertical: a.vertical,
            wrap_text: a.wrap_text,
            shrink_to_fit: a.shrink_to_fit,
            indent: a.indent,
            text_rotation: a.text_rotation,
            reading_order: a.reading_order,
            justify_last_line: a.justify_last_line,
            relative_indent: a.relative_indent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProtectionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl From<&Protection> for ProtectionAttributes {
    fn from(p: &Protection) -> Self {
        Self {
            locked: p.locked,
            hidden: p.hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BorderLineStyle;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_attributes() {
        let attrs = StyleAttributes::from(&Style::default());
        assert_eq!(
            serde_json::to_value(&attrs).unwrap(),
            json!({
                "Font": {},
                "Fill": {},
                "Border": {},
                "Alignment": {},
                "Protection": {},
                "CustomNumFmt": "general"
            })
        );
    }

    #[test]
    fn test_translation() {
        let style = Style::new()
            .bold(true)
            .font_name("Arial")
            .fill_color(Color::WHITE)
            .horizontal_alignment(HorizontalAlignment::Center)
            .number_format("0.00");
        let mut style = style;
        style.border = Some(
            BorderStyle::new()
                .with_left(BorderLineStyle::Thin, Color::RED)
                .with_top(BorderLineStyle::Medium, Color::GREEN),
        );

        assert_eq!(
            serde_json::to_value(StyleAttributes::from(&style)).unwrap(),
            json!({
                "Font": {"Bold": true, "Family": "Arial"},
                "Fill": {"Type": "pattern", "Pattern": 1, "Color": "FFFFFF"},
                "Border": {
                    "left": {"Style": 1, "Color": "FF0000"},
                    "top": {"Style": 2, "Color": "00FF00"}
                },
                "Alignment": {"Horizontal": "center"},
                "Protection": {},
                "CustomNumFmt": "0.00"
            })
        );
    }
}
