use crate::{bar::BarChart, diverging::DivergingChart, frame::Frame, gauge::GaugeChart, text::TextMeasure};
use piet::{kurbo::Size, RenderContext};

/// Something that lays itself out into a [`Frame`] and draws it.
pub trait Chart {
    /// Compute everything to draw in a `size` area with its top-left corner at `(0, 0)`.
    ///
    /// This is recomputed from scratch on every call.
    fn frame(&self, size: Size, text: &mut dyn TextMeasure) -> Result<Frame, piet::Error>;

    /// Lay out and draw the chart at `(0, 0)`.
    fn draw<RC: RenderContext>(&self, size: Size, rc: &mut RC) -> Result<(), piet::Error>
    where
        Self: Sized,
    {
        let frame = self.frame(size, rc.text())?;
        frame.render(rc)
    }
}

/// One of the charts in this crate, chosen at runtime.
pub enum AnyChart {
    Bar(BarChart),
    Gauge(GaugeChart),
    Diverging(DivergingChart),
}

impl Chart for AnyChart {
    fn frame(&self, size: Size, text: &mut dyn TextMeasure) -> Result<Frame, piet::Error> {
        match self {
            AnyChart::Bar(chart) => chart.frame(size, text),
            AnyChart::Gauge(chart) => chart.frame(size, text),
            AnyChart::Diverging(chart) => chart.frame(size, text),
        }
    }
}

impl From<BarChart> for AnyChart {
    fn from(chart: BarChart) -> Self {
        AnyChart::Bar(chart)
    }
}

impl From<GaugeChart> for AnyChart {
    fn from(chart: GaugeChart) -> Self {
        AnyChart::Gauge(chart)
    }
}

impl From<DivergingChart> for AnyChart {
    fn from(chart: DivergingChart) -> Self {
        AnyChart::Diverging(chart)
    }
}
