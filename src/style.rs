//! Style records for each thing a chart draws.
use crate::theme;
use piet::{Color, FontFamily};

/// Whether a shape is filled or outlined.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
}

/// How to paint a rectangle, line, or arc.
#[derive(Debug, Clone)]
pub struct ShapeStyle {
    pub mode: PaintMode,
    pub color: Color,
    /// Stroke width. Ignored when filling.
    pub width: f64,
}

impl ShapeStyle {
    pub fn fill(color: Color) -> Self {
        ShapeStyle {
            mode: PaintMode::Fill,
            color,
            width: 0.,
        }
    }

    pub fn stroke(color: Color, width: f64) -> Self {
        ShapeStyle {
            mode: PaintMode::Stroke,
            color,
            width,
        }
    }

    /// The same style in a different color.
    pub fn with_color(&self, color: Color) -> Self {
        ShapeStyle {
            color,
            ..self.clone()
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    /// The anchor is on the first line's baseline.
    Baseline,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct TextStyle {
    pub family: FontFamily,
    /// Font size in pixels.
    pub size: f64,
    pub color: Color,
    pub align: HAlign,
}

impl TextStyle {
    pub fn new(size: f64, align: HAlign) -> Self {
        TextStyle {
            family: FontFamily::SANS_SERIF,
            size,
            color: theme::TEXT_COLOR,
            align,
        }
    }
}

/// Space around a piece of text.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub const ZERO: Margins = Margins {
        top: 0.,
        bottom: 0.,
        left: 0.,
        right: 0.,
    };

    pub fn top(top: f64) -> Self {
        Margins { top, ..Self::ZERO }
    }

    pub fn bottom(bottom: f64) -> Self {
        Margins {
            bottom,
            ..Self::ZERO
        }
    }

    /// Left plus right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}
