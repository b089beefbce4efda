use crate::{
    chart::Chart,
    data::DataSeries,
    frame::{Frame, Layer, Layers},
    geometry::{self, Gutters},
    style::ShapeStyle,
    text::TextMeasure,
    theme,
};
use itertools::izip;
use piet::kurbo::{Insets, Line, Point, Rect, Size};

/// How to draw a [`BarChart`].
#[derive(Debug, Clone)]
pub struct BarStyle {
    pub bar: ShapeStyle,
    /// The left and bottom axis lines.
    pub axes: ShapeStyle,
    pub guidelines: ShapeStyle,
    /// The gap before, between and after bars.
    pub bar_spacing: f64,
    /// The number of gaps between guidelines. There is one more line than this.
    pub guideline_count: usize,
}

impl Default for BarStyle {
    fn default() -> Self {
        BarStyle {
            bar: ShapeStyle::fill(theme::BAR_COLOR),
            axes: ShapeStyle::stroke(theme::AXES_COLOR, theme::AXES_WIDTH),
            guidelines: ShapeStyle::stroke(theme::GUIDELINE_COLOR, theme::GUIDELINE_WIDTH),
            bar_spacing: theme::BAR_SPACING,
            guideline_count: theme::GUIDELINE_COUNT,
        }
    }
}

/// A bar chart with all bars rising from the bottom axis.
pub struct BarChart {
    /// The values of the bars.
    data: DataSeries,
    /// The value that corresponds to the full chart height.
    ///
    /// Defaults to `1`, so values are fractions of the axis.
    full_value: f64,
    /// Space between the edge of the surface and the axes.
    pub padding: Insets,
    pub style: BarStyle,
    pub visible: Layers,
}

impl BarChart {
    pub fn new(data: impl Into<DataSeries>) -> Self {
        BarChart {
            data: data.into(),
            full_value: 1.,
            padding: Insets::ZERO,
            style: BarStyle::default(),
            visible: Layers::all(),
        }
    }

    /// Replace the data.
    pub fn set_data(&mut self, data: impl Into<DataSeries>) {
        self.data = data.into();
        tracing::debug!(slots = self.data.len(), "bar chart data replaced");
    }

    pub fn data(&self) -> &DataSeries {
        &self.data
    }

    pub fn full_value(&self) -> f64 {
        self.full_value
    }

    pub fn set_full_value(&mut self, full_value: f64) {
        self.full_value = full_value;
    }

    /// Scale the axis so the largest value reaches the top.
    pub fn fit_full_value(&mut self) {
        self.full_value = self.data.values().reduce(f64::max).unwrap_or(1.);
    }

    /// The area inside the axes.
    pub fn axis_rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(Point::ZERO, size) - self.padding
    }

    /// The rectangle for each bar.
    pub fn bars(&self, size: Size) -> Vec<Rect> {
        let axis = self.axis_rect(size);
        let columns = geometry::columns(
            axis.x0,
            axis.x1,
            self.data.len(),
            self.style.bar_spacing,
            Gutters::Around,
        );
        izip!(columns, self.data.values())
            .map(|((x0, x1), val)| Rect {
                x0,
                y0: axis.y0 + axis.height() * (1. - val / self.full_value),
                x1,
                y1: axis.y1,
            })
            .collect()
    }
}

impl Chart for BarChart {
    fn frame(&self, size: Size, _text: &mut dyn TextMeasure) -> Result<Frame, piet::Error> {
        let mut frame = Frame::new(self.visible);
        if self.data.is_empty() {
            tracing::trace!("bar chart has no data");
            return Ok(frame);
        }
        let axis = self.axis_rect(size);

        frame.line(
            Layer::Grid,
            Line::new((axis.x0, axis.y1), (axis.x0, axis.y0)),
            &self.style.axes,
        );
        frame.line(
            Layer::Grid,
            Line::new((axis.x0, axis.y1), (axis.x1, axis.y1)),
            &self.style.axes,
        );
        for y in geometry::guidelines(axis.y0, axis.y1, self.style.guideline_count) {
            frame.line(
                Layer::Grid,
                Line::new((axis.x0, y), (axis.x1, y)),
                &self.style.guidelines,
            );
        }

        for bar in self.bars(size) {
            frame.rect(Layer::Primary, bar, &self.style.bar);
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{frame::Primitive, text::FixedGlyphs};
    use piet::Color;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn falling_bars() {
        let chart = BarChart::new([1.0, 0.8, 0.6, 0.4, 0.2, 0.0]);
        let bars = chart.bars(Size::new(600., 400.));
        let width = (600. - 20. * 7.) / 6.;
        assert!(close(width, 76.666_666_666_666_67));
        for bar in &bars {
            assert!(close(bar.width(), width));
            assert!(close(bar.y1, 400.));
        }
        assert!(close(bars[0].x0, 20.));
        assert!(close(bars[0].y0, 0.));
        assert!(close(bars[1].height(), 320.));
        assert!(close(bars[5].height(), 0.));
    }

    #[test]
    fn padding_moves_axes() {
        let mut chart = BarChart::new([0.5]);
        chart.padding = Insets::new(10., 20., 30., 40.);
        let bars = chart.bars(Size::new(140., 160.));
        // axis is 100 x 100 starting at (10, 20)
        assert!(close(bars[0].x0, 30.));
        assert!(close(bars[0].x1, 90.));
        assert!(close(bars[0].y0, 70.));
        assert!(close(bars[0].y1, 120.));
    }

    #[test]
    fn full_value_scales() {
        let mut chart = BarChart::new([2., 4.]);
        chart.fit_full_value();
        assert_eq!(chart.full_value(), 4.);
        let bars = chart.bars(Size::new(100., 100.));
        assert!(close(bars[0].height(), 50.));
        assert!(close(bars[1].height(), 100.));
    }

    #[test]
    fn frame_contents() {
        let chart = BarChart::new([1.0, 0.5]);
        let frame = chart
            .frame(Size::new(200., 100.), &mut FixedGlyphs { width: 0.5 })
            .unwrap();
        // two axes and eleven guidelines
        assert_eq!(frame.layer(Layer::Grid).count(), 13);
        assert_eq!(frame.layer(Layer::Primary).count(), 2);
        let first = frame.primitives()[0].0;
        assert_eq!(first, Layer::Grid);
        assert!(matches!(
            frame.layer(Layer::Primary).next(),
            Some(Primitive::Rect { .. })
        ));
    }

    #[test]
    fn default_strokes() {
        let style = BarStyle::default();
        assert_eq!(style.axes.width, 20.);
        assert_eq!(style.guidelines.width, 20.);
        assert_eq!(style.guidelines.color.as_rgba_u32(), Color::BLACK.as_rgba_u32());
        assert_eq!(style.bar_spacing, 20.);
        assert_eq!(style.guideline_count, 10);
    }

    #[test]
    fn empty_is_a_no_op() {
        let chart = BarChart::new(Vec::<f64>::new());
        let frame = chart
            .frame(Size::new(200., 100.), &mut FixedGlyphs { width: 0.5 })
            .unwrap();
        assert!(frame.is_empty());
    }
}
