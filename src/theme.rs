//! Default colors and measurements.
//!
//! Lengths suffixed `_DP` are device-independent and go through [`Density`](crate::Density)
//! before use. Everything else is in pixels.
use piet::Color;

pub const LABEL_FONT_SIZE_SP: f64 = 12.;

pub const BAR_COLOR: Color = Color::rgb8(0x00, 0x85, 0x77);
pub const OVERLAY_BAR_COLOR: Color = Color::rgb8(0xd8, 0x1b, 0x60);
pub const AXES_COLOR: Color = Color::BLACK;
pub const GUIDELINE_COLOR: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::BLACK;
pub const ZERO_LINE_COLOR: Color = Color::BLACK;
pub const CONNECTOR_COLOR: Color = Color::rgb8(0xff, 0x88, 0x00);
pub const RING_FOREGROUND_COLOR: Color = Color::BLACK;
pub const RING_BACKGROUND_COLOR: Color = Color::grey8(0xaa);

// simple bar chart
pub const BAR_SPACING: f64 = 20.;
pub const AXES_WIDTH: f64 = 20.;
pub const GUIDELINE_WIDTH: f64 = 20.;
pub const GUIDELINE_COUNT: usize = 10;

// gauge
pub const RING_STROKE_DP: f64 = 15.;
/// Gap between rings when the spacing is fixed.
pub const RING_SPACING: f64 = 40.;
/// Space left over when the ring spacing is computed to fill the view.
pub const AUTO_SPACING_SLACK: f64 = 50.;

// diverging chart
pub const DIVERGING_SPACING_DP: f64 = 20.;
pub const ZERO_LINE_DP: f64 = 2.;
pub const CONNECTOR_DP: f64 = 2.;
pub const CONNECTOR_EXTENSION_DP: f64 = 2.;
pub const VALUE_PADDING_DP: f64 = 4.;
pub const DESCRIPTION_MARGIN_DP: f64 = 8.;
/// Fraction of the surface height kept for axis labels when no margin is set.
pub const AXIS_LABELS_FRACTION: f64 = 0.04;
