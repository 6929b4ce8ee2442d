//! Background fill descriptor

use super::Color;
use serde::{Deserialize, Serialize};

/// Fill style for cell background
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FillStyle {
    /// Fill kind; a pattern without a kind is treated as a pattern fill
    pub kind: Option<FillType>,
    /// Pattern kind
    pub pattern: Option<FillPattern>,
    /// Foreground color
    pub color: Option<Color>,
    /// Gradient shading variant (0-5)
    pub shading: Option<u8>,
}

impl FillStyle {
    /// Create a fill with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            kind: Some(FillType::Pattern),
            pattern: Some(FillPattern::Solid),
            color: Some(color),
            shading: None,
        }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: FillPattern, color: Color) -> Self {
        Self {
            kind: Some(FillType::Pattern),
            pattern: Some(pattern),
            color: Some(color),
            shading: None,
        }
    }

    /// Create a gradient fill
    pub fn gradient(color: Color, shading: u8) -> Self {
        Self {
            kind: Some(FillType::Gradient),
            pattern: None,
            color: Some(color),
            shading: Some(shading.min(5)),
        }
    }

    /// Fill kind after defaulting
    pub fn effective_kind(&self) -> Option<FillType> {
        self.kind
            .or_else(|| self.pattern.map(|_| FillType::Pattern))
    }

    /// Check if nothing is set
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.pattern.is_none() && self.color.is_none() && self.shading.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillType {
    /// Pattern fill
    Pattern,
    /// Gradient fill
    Gradient,
}

/// Pattern kinds; the discriminant is the renderer's numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FillPattern {
    #[default]
    None,
    Solid,
    MediumGray,
    DarkGray,
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl FillPattern {
    /// Numeric pattern code used by the renderer
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_codes() {
        assert_eq!(FillPattern::None.code(), 0);
        assert_eq!(FillPattern::Solid.code(), 1);
        assert_eq!(FillPattern::LightTrellis.code(), 16);
        assert_eq!(FillPattern::Gray0625.code(), 18);
    }

    #[test]
    fn test_effective_kind() {
        let fill = FillStyle {
            pattern: Some(FillPattern::DarkGrid),
            ..Default::default()
        };
        assert_eq!(fill.effective_kind(), Some(FillType::Pattern));
        assert_eq!(FillStyle::new().effective_kind(), None);
        assert_eq!(
            FillStyle::gradient(Color::RED, 9).shading,
            Some(5)
        );
    }
}
