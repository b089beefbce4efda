//! Pixel math shared by the charts.
//!
//! Nothing here clamps. Values outside their nominal range produce geometry outside the axis.
use crate::data::FULL_SCALE;
use piet::kurbo::{Insets, Rect};

/// Where the gaps between columns go.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Gutters {
    /// `n + 1` gaps: one before the first column, one after the last, and one between each.
    Around,
    /// `n - 1` gaps: only between columns.
    Between,
}

impl Gutters {
    /// How many gaps `count` columns need.
    pub fn count(self, columns: usize) -> usize {
        match self {
            Gutters::Around => columns + 1,
            Gutters::Between => columns.saturating_sub(1),
        }
    }
}

/// Split `left..right` into `count` equal columns separated by `spacing`.
///
/// Returns `(x0, x1)` for each column. The caller must make sure the columns have non-negative
/// width.
pub fn columns(left: f64, right: f64, count: usize, spacing: f64, gutters: Gutters) -> Vec<(f64, f64)> {
    if count == 0 {
        return vec![];
    }
    let total_spacing = spacing * gutters.count(count) as f64;
    let width = (right - left - total_spacing) / count as f64;
    let first = match gutters {
        Gutters::Around => left + spacing,
        Gutters::Between => left,
    };
    (0..count)
        .map(|idx| {
            let x0 = first + idx as f64 * (width + spacing);
            (x0, x0 + width)
        })
        .collect()
}

/// `count + 1` evenly spaced positions from `start` to `end` inclusive.
pub fn guidelines(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count == 0 {
        0.
    } else {
        (end - start) / count as f64
    };
    (0..=count).map(move |idx| start + idx as f64 * step)
}

/// A vertical span in pixels, `top <= bottom` in a y-down space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, bottom: f64) -> Self {
        Span { top, bottom }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Which side of the zero line a value lands on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Upper,
    Lower,
}

impl Side {
    /// Strictly positive values go up; zero and negative values go down.
    pub fn of(value: f64) -> Self {
        if value > 0. {
            Side::Upper
        } else {
            Side::Lower
        }
    }
}

/// The two halves of a diverging chart and the band between them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Regions {
    pub upper: Span,
    pub lower: Span,
    /// Height of the zero line band between `upper` and `lower`.
    pub band: f64,
}

impl Regions {
    /// Split `top..bottom` into two regions either side of a `band` high zero line.
    pub fn split(top: f64, bottom: f64, band: f64) -> Self {
        let upper_bottom = top + (bottom - top - band) * 0.5;
        Regions {
            upper: Span::new(top, upper_bottom),
            lower: Span::new(upper_bottom + band, bottom),
            band,
        }
    }

    /// The y coordinate of the middle of the zero band.
    pub fn zero_line(&self) -> f64 {
        self.upper.bottom + self.band * 0.5
    }

    pub fn region(&self, side: Side) -> Span {
        match side {
            Side::Upper => self.upper,
            Side::Lower => self.lower,
        }
    }

    /// The span of a primary bar for `value`.
    ///
    /// `reserved` is kept free at the outer edge of each region (for value text).
    pub fn primary(&self, value: f64, reserved: f64) -> Span {
        let empty = (FULL_SCALE - value.abs()) / FULL_SCALE;
        match Side::of(value) {
            Side::Upper => {
                let Span { top, bottom } = self.upper;
                let top = top + reserved + (self.upper.height() - reserved) * empty;
                Span::new(top, bottom)
            }
            Side::Lower => {
                let Span { top, bottom } = self.lower;
                let bottom = bottom - reserved - (self.lower.height() - reserved) * empty;
                Span::new(top, bottom)
            }
        }
    }

    /// The span of an overlay segment for `value`, stacked on `primary`.
    ///
    /// If the primary bar is on the other side of the zero band, the overlay starts from the
    /// band edge on its own side, so it never covers the band.
    pub fn overlay(&self, primary: Span, primary_value: f64, value: f64, reserved: f64) -> Span {
        let primary_side = Side::of(primary_value);
        match Side::of(value) {
            Side::Upper => {
                let bottom = match primary_side {
                    Side::Upper => primary.top,
                    Side::Lower => primary.top - self.band,
                };
                let height = (self.upper.height() - reserved) * value.abs() / FULL_SCALE;
                Span::new(bottom - height, bottom)
            }
            Side::Lower => {
                let top = match primary_side {
                    Side::Lower => primary.bottom,
                    Side::Upper => primary.bottom + self.band,
                };
                let height = (self.lower.height() - reserved) * value.abs() / FULL_SCALE;
                Span::new(top, top + height)
            }
        }
    }

    /// Where a marker for `value` sits: the outer end of a bar of that value.
    ///
    /// Zero sits on the upper edge of the band.
    pub fn marker(&self, value: f64) -> f64 {
        let empty = (FULL_SCALE - value.abs()) / FULL_SCALE;
        if value >= 0. {
            self.upper.top + self.upper.height() * empty
        } else {
            self.lower.bottom - self.lower.height() * empty
        }
    }
}

/// Take a rect and shrink it to a square centered within the original rectangle.
pub fn square(input: Rect) -> Rect {
    let (width, height) = (input.width(), input.height());
    if width == height {
        input
    } else if width < height {
        let half_overlap = 0.5 * (height - width);
        Rect::new(input.x0, input.y0 + half_overlap, input.x1, input.y1 - half_overlap)
    } else {
        let half_overlap = 0.5 * (width - height);
        Rect::new(input.x0 + half_overlap, input.y0, input.x1 - half_overlap, input.y1)
    }
}

/// Bounds for `count` concentric rings, outermost first.
///
/// The outermost ring is `outer` inset by half the stroke so the stroke stays inside `outer`.
/// Each ring after that is inset from the previous one by `spacing / 2 + stroke / 2`.
pub fn rings(outer: Rect, count: usize, stroke: f64, spacing: f64) -> Vec<Rect> {
    let step = Insets::uniform(-(spacing * 0.5 + stroke * 0.5));
    let mut bounds = outer + Insets::uniform(-stroke * 0.5);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(bounds);
        bounds = bounds + step;
    }
    out
}

/// Ring spacing that spreads `count` rings over a `side` pixel square.
pub fn auto_ring_spacing(side: f64, count: usize, stroke: f64, slack: f64) -> f64 {
    if count == 0 {
        return 0.;
    }
    (side - count as f64 * stroke - slack) / count as f64
}
