use crate::{
    chart::Chart,
    data::GaugeSegment,
    frame::{ArcSpec, Frame, Layer, Layers, Primitive},
    geometry,
    style::ShapeStyle,
    text::TextMeasure,
    theme,
    units::Density,
};
use piet::{
    kurbo::{Point, Rect, Size},
    Color,
};

/// Arcs start at 12 o'clock.
const START_DEG: f64 = -90.;

/// How far apart concentric rings are.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RingSpacing {
    /// A fixed gap in pixels.
    Fixed(f64),
    /// Spread the rings out to fill the gauge.
    Auto,
}

#[derive(Debug, Clone)]
pub struct GaugeStyle {
    density: Density,
    foreground: ShapeStyle,
    background: ShapeStyle,
    pub spacing: RingSpacing,
    pub round_cap: bool,
}

impl GaugeStyle {
    pub fn new(density: Density) -> Self {
        let width = density.dp(theme::RING_STROKE_DP);
        GaugeStyle {
            density,
            foreground: ShapeStyle::stroke(theme::RING_FOREGROUND_COLOR, width),
            background: ShapeStyle::stroke(theme::RING_BACKGROUND_COLOR, width),
            spacing: RingSpacing::Auto,
            round_cap: true,
        }
    }

    pub fn stroke_width(&self) -> f64 {
        self.foreground.width
    }

    /// Set the ring thickness. Both the filled and empty part of each ring use it.
    pub fn set_stroke_width_dp(&mut self, dp: f64) {
        let width = self.density.dp(dp);
        self.foreground.width = width;
        self.background.width = width;
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground.color = color;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background.color = color;
    }

    pub fn foreground(&self) -> &ShapeStyle {
        &self.foreground
    }

    pub fn background(&self) -> &ShapeStyle {
        &self.background
    }
}

impl Default for GaugeStyle {
    fn default() -> Self {
        GaugeStyle::new(Density::default())
    }
}

/// One ring of the gauge, laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// The filled part, clockwise from 12 o'clock.
    pub foreground: ArcSpec,
    /// The rest of the circle.
    pub background: ArcSpec,
}

/// Concentric progress rings, outermost first.
pub struct GaugeChart {
    segments: Vec<GaugeSegment>,
    pub style: GaugeStyle,
    pub visible: Layers,
}

impl GaugeChart {
    pub fn new(segments: impl IntoIterator<Item = impl Into<GaugeSegment>>) -> Self {
        GaugeChart {
            segments: segments.into_iter().map(Into::into).collect(),
            style: GaugeStyle::default(),
            visible: Layers::all(),
        }
    }

    /// Replace the segments.
    pub fn submit(&mut self, segments: impl IntoIterator<Item = impl Into<GaugeSegment>>) {
        self.segments = segments.into_iter().map(Into::into).collect();
        tracing::debug!(rings = self.segments.len(), "gauge data replaced");
    }

    pub fn segments(&self) -> &[GaugeSegment] {
        &self.segments
    }

    /// The gap between rings for a gauge of this size.
    pub fn ring_spacing(&self, size: Size) -> f64 {
        match self.style.spacing {
            RingSpacing::Fixed(spacing) => spacing,
            RingSpacing::Auto => geometry::auto_ring_spacing(
                size.width.min(size.height),
                self.segments.len(),
                self.style.stroke_width(),
                theme::AUTO_SPACING_SLACK,
            ),
        }
    }

    /// The arcs for every ring.
    pub fn rings(&self, size: Size) -> Vec<Ring> {
        let outer = geometry::square(Rect::from_origin_size(Point::ZERO, size));
        let bounds = geometry::rings(
            outer,
            self.segments.len(),
            self.style.stroke_width(),
            self.ring_spacing(size),
        );
        bounds
            .into_iter()
            .zip(&self.segments)
            .map(|(bounds, segment)| {
                let sweep = segment.sweep();
                Ring {
                    foreground: ArcSpec {
                        bounds,
                        start_deg: START_DEG,
                        sweep_deg: sweep,
                    },
                    background: ArcSpec {
                        bounds,
                        start_deg: START_DEG + sweep,
                        sweep_deg: 360. - sweep,
                    },
                }
            })
            .collect()
    }
}

impl Chart for GaugeChart {
    fn frame(&self, size: Size, _text: &mut dyn TextMeasure) -> Result<Frame, piet::Error> {
        let mut frame = Frame::new(self.visible);
        if self.segments.is_empty() {
            tracing::trace!("gauge has no rings");
            return Ok(frame);
        }
        for (ring, segment) in self.rings(size).into_iter().zip(&self.segments) {
            let background = match &segment.background {
                Some(color) => self.style.background.with_color(color.clone()),
                None => self.style.background.clone(),
            };
            let foreground = match &segment.foreground {
                Some(color) => self.style.foreground.with_color(color.clone()),
                None => self.style.foreground.clone(),
            };
            frame.push(
                Layer::Primary,
                Primitive::Arc {
                    arc: ring.background,
                    style: background,
                    round_cap: self.style.round_cap,
                },
            );
            frame.push(
                Layer::Overlay,
                Primitive::Arc {
                    arc: ring.foreground,
                    style: foreground,
                    round_cap: self.style.round_cap,
                },
            );
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedGlyphs;

    #[test]
    fn sweeps() {
        let gauge = GaugeChart::new([0.8, 0.6, 0.4]);
        let rings = gauge.rings(Size::new(400., 400.));
        let sweeps: Vec<_> = rings.iter().map(|r| r.foreground.sweep_deg).collect();
        assert_eq!(sweeps, vec![288., 216., 144.]);
        for ring in &rings {
            assert_eq!(ring.foreground.start_deg, -90.);
            assert_eq!(
                ring.background.sweep_deg,
                360. - ring.foreground.sweep_deg
            );
            assert_eq!(
                ring.background.start_deg,
                -90. + ring.foreground.sweep_deg
            );
        }
    }

    #[test]
    fn rings_nest() {
        let mut gauge = GaugeChart::new([0.8, 0.6, 0.4]);
        gauge.style.spacing = RingSpacing::Fixed(theme::RING_SPACING);
        let rings = gauge.rings(Size::new(500., 400.));
        // centered square, inset by half the stroke
        assert_eq!(rings[0].foreground.bounds, Rect::new(57.5, 7.5, 442.5, 392.5));
        let inset = 40. * 0.5 + 15. * 0.5;
        for pair in rings.windows(2) {
            let (outer, inner) = (pair[0].foreground.bounds, pair[1].foreground.bounds);
            assert!((inner.x0 - outer.x0 - inset).abs() < 1e-9);
            assert!((outer.y1 - inner.y1 - inset).abs() < 1e-9);
        }
    }

    #[test]
    fn stroke_width_follows_density() {
        let mut style = GaugeStyle::new(Density::new(2.));
        assert_eq!(style.stroke_width(), 30.);
        style.set_stroke_width_dp(4.);
        assert_eq!(style.foreground().width, 8.);
        assert_eq!(style.background().width, 8.);
    }

    #[test]
    fn segment_colors_override() {
        let red = Color::rgb8(255, 0, 0);
        let blue = Color::rgb8(0, 0, 255);
        let gauge = GaugeChart::new(vec![
            GaugeSegment::new(0.5).with_colors(red.clone(), blue.clone()),
            GaugeSegment::new(0.25),
        ]);
        let frame = gauge
            .frame(Size::new(300., 300.), &mut FixedGlyphs { width: 0.5 })
            .unwrap();
        let colors: Vec<_> = frame
            .layer(Layer::Overlay)
            .map(|p| match p {
                Primitive::Arc { style, .. } => style.color.as_rgba_u32(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(
            colors,
            vec![
                red.as_rgba_u32(),
                theme::RING_FOREGROUND_COLOR.as_rgba_u32()
            ]
        );
        let backgrounds: Vec<_> = frame
            .layer(Layer::Primary)
            .map(|p| match p {
                Primitive::Arc { style, .. } => style.color.as_rgba_u32(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(
            backgrounds,
            vec![
                blue.as_rgba_u32(),
                theme::RING_BACKGROUND_COLOR.as_rgba_u32()
            ]
        );
    }

    #[test]
    fn empty_gauge() {
        let gauge = GaugeChart::new(Vec::<f64>::new());
        let frame = gauge
            .frame(Size::new(300., 300.), &mut FixedGlyphs { width: 0.5 })
            .unwrap();
        assert!(frame.is_empty());
    }
}
