//! Piet charts: a bar chart, a ring gauge, and a two-part diverging bar chart.
//!
//! Every chart lays itself out into a [`Frame`] for a given surface size, and the frame is
//! drawn onto any piet [`RenderContext`](piet::RenderContext). Layout is recomputed on each
//! draw, so charts hold only their data and style.

pub mod bar;
mod chart;
pub mod color;
pub mod connector;
pub mod data;
pub mod diverging;
mod error;
pub mod format;
pub mod frame;
pub mod gauge;
pub mod geometry;
pub mod style;
mod text;
pub mod theme;
mod units;

pub use crate::{
    bar::{BarChart, BarStyle},
    chart::{AnyChart, Chart},
    color::{ColorResolver, NamedColors},
    connector::{ConnectorKind, ConnectorStyle},
    data::{DataSeries, DataSet, GaugeSegment, ValuePoint},
    diverging::{DivergingChart, DivergingStyle, ValuePosition},
    error::{DataError, StyleError},
    format::{Formatter, Significant, SlotIndex, ValueText},
    frame::{Backdrop, Frame, Layer, Layers},
    gauge::{GaugeChart, GaugeStyle, RingSpacing},
    text::TextMeasure,
    units::Density,
};

pub mod prelude {
    pub use crate::Chart as _;
}
