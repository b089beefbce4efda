//! A bar chart split around a zero line: positive values rise into the upper half, negative
//! values hang into the lower half. An optional second series stacks on the first.
use crate::{
    chart::Chart,
    color::ColorResolver,
    connector::{self, ConnectorStyle, SlotRects},
    data::{DataSeries, DataSet, ValuePoint},
    error::{DataError, StyleError},
    format::{Formatter, SlotIndex, ValueText},
    frame::{Anchor, Backdrop, Frame, Layer, Layers, Primitive},
    geometry::{self, Gutters, Regions, Side, Span},
    style::{HAlign, Margins, ShapeStyle, TextStyle, VAlign},
    text::TextMeasure,
    theme,
    units::Density,
};
use itertools::{izip, Either};
use piet::{
    kurbo::{Line, Point, Rect, Size},
    Color,
};
use std::sync::Arc;

/// Where the value text for each bar goes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValuePosition {
    /// Beyond the end of the bar. Room for the text is kept at the outer edge of each half.
    Top,
    /// Centered in each bar segment.
    Inside,
    /// No value text.
    None,
}

/// A text label in the left gutter, with the space kept around it.
#[derive(Debug, Clone)]
pub struct Description {
    pub text: String,
    pub margins: Margins,
    pub style: TextStyle,
}

impl Description {
    fn new(text: &str, margins: Margins, size: f64) -> Self {
        Description {
            text: text.to_owned(),
            margins,
            style: TextStyle::new(size, HAlign::Left),
        }
    }

    /// Where the text is anchored in a left gutter `gutter` pixels wide.
    fn gutter_x(&self, gutter: f64) -> f64 {
        column_x(
            self.margins.left,
            gutter - self.margins.right,
            self.style.align,
        )
    }

    /// Width of the text plus its horizontal margins.
    fn width(&self, text: &mut dyn TextMeasure) -> Result<f64, piet::Error> {
        Ok(text.measure(&self.text, &self.style)?.width + self.margins.horizontal())
    }
}

/// Labels for the two halves and for the axis labels.
#[derive(Debug, Clone)]
pub struct Descriptions {
    pub enabled: bool,
    pub upper: Description,
    pub lower: Description,
    pub labels: Description,
}

#[derive(Debug, Clone)]
pub struct DivergingStyle {
    density: Density,
    bar_spacing: f64,
    pub primary: ShapeStyle,
    pub overlay: ShapeStyle,
    /// Per-series bar colors. Entry 0 overrides `primary`, entry 1 overrides `overlay`.
    pub series_colors: Vec<Color>,
    pub draw_zero_line: bool,
    zero_line: ShapeStyle,
    pub value_position: ValuePosition,
    value_padding: f64,
    pub value_text: TextStyle,
    pub draw_axis_labels: bool,
    pub axis_label_text: TextStyle,
    axis_label_margin: Option<f64>,
    pub descriptions: Descriptions,
    pub upper_backdrop: Option<Backdrop>,
    pub lower_backdrop: Option<Backdrop>,
    pub connectors: ConnectorStyle,
}

impl DivergingStyle {
    pub fn new(density: Density) -> Self {
        let text_size = density.sp(theme::LABEL_FONT_SIZE_SP);
        let margin = density.dp(theme::DESCRIPTION_MARGIN_DP);
        DivergingStyle {
            density,
            bar_spacing: density.dp(theme::DIVERGING_SPACING_DP),
            primary: ShapeStyle::fill(theme::BAR_COLOR),
            overlay: ShapeStyle::fill(theme::OVERLAY_BAR_COLOR),
            series_colors: vec![],
            draw_zero_line: true,
            zero_line: ShapeStyle::stroke(theme::ZERO_LINE_COLOR, density.dp(theme::ZERO_LINE_DP)),
            value_position: ValuePosition::Inside,
            value_padding: density.dp(theme::VALUE_PADDING_DP),
            value_text: TextStyle::new(text_size, HAlign::Center),
            draw_axis_labels: true,
            axis_label_text: TextStyle::new(text_size, HAlign::Center),
            axis_label_margin: None,
            descriptions: Descriptions {
                enabled: true,
                upper: Description::new("Buy", Margins::bottom(margin), text_size),
                lower: Description::new("Sell", Margins::top(margin), text_size),
                labels: Description::new("Since", Margins::ZERO, text_size),
            },
            upper_backdrop: None,
            lower_backdrop: None,
            connectors: ConnectorStyle::new(density),
        }
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn bar_spacing(&self) -> f64 {
        self.bar_spacing
    }

    pub fn set_bar_spacing_dp(&mut self, dp: f64) {
        self.bar_spacing = self.density.dp(dp);
    }

    pub fn zero_line(&self) -> &ShapeStyle {
        &self.zero_line
    }

    /// The height of the band between the halves. Zero when the zero line is off.
    pub fn zero_band(&self) -> f64 {
        if self.draw_zero_line {
            self.zero_line.width
        } else {
            0.
        }
    }

    pub fn set_zero_line_height_dp(&mut self, dp: f64) {
        self.zero_line.width = self.density.dp(dp);
    }

    pub fn set_zero_line_color(&mut self, color: Color) {
        self.zero_line.color = color;
    }

    /// Set the zero line color by name. Unknown names leave the color unchanged.
    pub fn set_zero_line_color_named(
        &mut self,
        colors: &impl ColorResolver,
        name: &str,
    ) -> Result<(), StyleError> {
        self.zero_line.color = colors.require(name)?;
        Ok(())
    }

    pub fn set_connector_height_dp(&mut self, dp: f64) {
        self.connectors.set_height_dp(dp);
    }

    /// Set the connector line color by name. Unknown names leave the color unchanged.
    pub fn set_connector_color_named(
        &mut self,
        colors: &impl ColorResolver,
        name: &str,
    ) -> Result<(), StyleError> {
        self.connectors.set_color(colors.require(name)?);
        Ok(())
    }

    /// The gap between a bar and its value text. Only used with [`ValuePosition::Top`].
    pub fn value_padding(&self) -> f64 {
        match self.value_position {
            ValuePosition::Top => self.value_padding,
            _ => 0.,
        }
    }

    pub fn set_value_padding_dp(&mut self, dp: f64) {
        self.value_padding = self.density.dp(dp);
    }

    /// Space below the graph for axis labels.
    ///
    /// Unless set, this is a fraction of the surface height.
    pub fn axis_label_margin(&self, height: f64) -> f64 {
        self.axis_label_margin
            .unwrap_or(theme::AXIS_LABELS_FRACTION * height)
    }

    pub fn set_axis_label_margin_dp(&mut self, dp: f64) {
        self.axis_label_margin = Some(self.density.dp(dp));
    }

    /// Set the size of every piece of text on the chart.
    pub fn set_text_size_sp(&mut self, sp: f64) {
        let size = self.density.sp(sp);
        self.value_text.size = size;
        self.axis_label_text.size = size;
        self.descriptions.upper.style.size = size;
        self.descriptions.lower.style.size = size;
        self.descriptions.labels.style.size = size;
    }

    fn primary_style(&self) -> ShapeStyle {
        match self.series_colors.first() {
            Some(color) => self.primary.with_color(color.clone()),
            None => self.primary.clone(),
        }
    }

    fn overlay_style(&self) -> ShapeStyle {
        match self.series_colors.get(1) {
            Some(color) => self.overlay.with_color(color.clone()),
            None => self.overlay.clone(),
        }
    }
}

impl Default for DivergingStyle {
    fn default() -> Self {
        DivergingStyle::new(Density::default())
    }
}

/// Where everything goes for a surface size, before any bars are placed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Skeleton {
    /// Left edge of the first bar.
    pub graph_left: f64,
    /// Right edge of the last bar.
    pub graph_right: f64,
    pub regions: Regions,
}

/// A two-part chart of one series, or of two series stacked.
pub struct DivergingChart {
    data: DataSet,
    pub style: DivergingStyle,
    value_formatter: Arc<dyn Formatter + Send + Sync>,
    label_formatter: Arc<dyn Formatter + Send + Sync>,
    pub visible: Layers,
}

impl DivergingChart {
    pub fn new(data: DataSet) -> Self {
        DivergingChart {
            data,
            style: DivergingStyle::default(),
            value_formatter: Arc::new(ValueText),
            label_formatter: Arc::new(SlotIndex),
            visible: Layers::all(),
        }
    }

    pub fn with_style(mut self, style: DivergingStyle) -> Self {
        self.style = style;
        self
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// Replace the data with the series in `series`.
    ///
    /// On error the current data is kept.
    pub fn set_data(&mut self, series: Vec<DataSeries>) -> Result<(), DataError> {
        match DataSet::from_series(series) {
            Ok(data) => {
                tracing::debug!(
                    slots = data.len(),
                    stacked = data.overlay().is_some(),
                    "dataset accepted"
                );
                self.data = data;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "dataset rejected, keeping previous data");
                Err(error)
            }
        }
    }

    /// Replace the data with an already checked dataset.
    pub fn set_dataset(&mut self, data: DataSet) {
        self.data = data;
    }

    pub fn set_value_formatter(&mut self, formatter: impl Formatter + Send + Sync + 'static) {
        self.value_formatter = Arc::new(formatter);
    }

    pub fn set_label_formatter(&mut self, formatter: impl Formatter + Send + Sync + 'static) {
        self.label_formatter = Arc::new(formatter);
    }

    /// Work out the graph edges and the two halves.
    pub fn skeleton(&self, size: Size, text: &mut dyn TextMeasure) -> Result<Skeleton, piet::Error> {
        let style = &self.style;
        let side_margin = style.connectors.margin();
        let mut graph_left = side_margin;
        if style.descriptions.enabled {
            let d = &style.descriptions;
            graph_left += d
                .upper
                .width(text)?
                .max(d.lower.width(text)?)
                .max(d.labels.width(text)?);
        }
        let graph_bottom = size.height - style.axis_label_margin(size.height);
        Ok(Skeleton {
            graph_left,
            graph_right: size.width - side_margin,
            regions: Regions::split(0., graph_bottom, style.zero_band()),
        })
    }

    /// Lay out the bars and their value text, returning where the bars went.
    fn layout_bars(
        &self,
        skeleton: &Skeleton,
        text: &mut dyn TextMeasure,
        frame: &mut Frame,
    ) -> Result<SlotRects, piet::Error> {
        let style = &self.style;
        let regions = &skeleton.regions;
        let columns = geometry::columns(
            skeleton.graph_left,
            skeleton.graph_right,
            self.data.len(),
            style.bar_spacing,
            Gutters::Between,
        );
        let overlay_points = match self.data.overlay() {
            Some(series) => Either::Left(series.points().iter().map(Some)),
            None => Either::Right(std::iter::repeat(None)),
        };
        let primary_style = style.primary_style();
        let overlay_style = style.overlay_style();
        let padding = style.value_padding();
        let mut slots = SlotRects::with_capacity(columns.len());

        for (idx, ((x0, x1), point, overlay)) in
            izip!(columns, self.data.primary().points(), overlay_points).enumerate()
        {
            let label = self.value_formatter.format(point, idx);
            let text_height = match style.value_position {
                ValuePosition::None => 0.,
                _ => text.measure(&label, &style.value_text)?.height,
            };
            let reserved = match style.value_position {
                ValuePosition::Top => text_height + padding,
                _ => 0.,
            };
            let align = style.value_text.align;
            let x = column_x(x0, x1, align);

            let primary = regions.primary(point.value, reserved);
            let primary_rect = Rect::new(x0, primary.top, x1, primary.bottom);
            frame.rect(Layer::Primary, primary_rect, &primary_style);

            let overlay_span = overlay.map(|o| {
                let span = regions.overlay(primary, point.value, o.value, reserved);
                frame.rect(Layer::Overlay, Rect::new(x0, span.top, x1, span.bottom), &overlay_style);
                (o, span)
            });

            match style.value_position {
                ValuePosition::Top => {
                    let anchor = outer_anchor(x, align, point.value, primary, overlay_span, padding);
                    frame.text(Layer::ValueText, label, anchor, &style.value_text);
                }
                ValuePosition::Inside => {
                    frame.text(
                        Layer::ValueText,
                        label,
                        Anchor::new((x, mid(primary)), align, VAlign::Middle),
                        &style.value_text,
                    );
                    if let Some((o, span)) = &overlay_span {
                        frame.text(
                            Layer::ValueText,
                            self.value_formatter.format(o, idx),
                            Anchor::new((x, mid(*span)), align, VAlign::Middle),
                            &style.value_text,
                        );
                    }
                }
                ValuePosition::None => (),
            }

            slots.push(primary_rect);
        }
        Ok(slots)
    }
}

fn mid(span: Span) -> f64 {
    (span.top + span.bottom) * 0.5
}

/// Where text aligned with `align` is anchored in the column `x0..x1`.
fn column_x(x0: f64, x1: f64, align: HAlign) -> f64 {
    match align {
        HAlign::Left => x0,
        HAlign::Center => (x0 + x1) * 0.5,
    }
}

/// Value text goes past the outer end of the bar stack.
///
/// Only negative values put their text below the zero line. Zero is labelled above it.
fn outer_anchor(
    x: f64,
    align: HAlign,
    value: f64,
    primary: Span,
    overlay: Option<(&ValuePoint, Span)>,
    padding: f64,
) -> Anchor {
    if value < 0. {
        let stacked = overlay.filter(|(o, _)| Side::of(o.value) == Side::Lower);
        let bottom = stacked.map_or(primary.bottom, |(_, s)| s.bottom.max(primary.bottom));
        Anchor::new((x, bottom + padding), align, VAlign::Top)
    } else {
        let stacked = overlay.filter(|(o, _)| Side::of(o.value) == Side::Upper);
        let top = stacked.map_or(primary.top, |(_, s)| s.top.min(primary.top));
        Anchor::new((x, top - padding), align, VAlign::Bottom)
    }
}

impl Chart for DivergingChart {
    fn frame(&self, size: Size, text: &mut dyn TextMeasure) -> Result<Frame, piet::Error> {
        let mut frame = Frame::new(self.visible);
        if self.data.is_empty() {
            tracing::trace!("diverging chart has no data");
            return Ok(frame);
        }
        let style = &self.style;
        let skeleton = self.skeleton(size, text)?;
        let regions = skeleton.regions;

        for (backdrop, span) in [
            (&style.upper_backdrop, regions.upper),
            (&style.lower_backdrop, regions.lower),
        ] {
            if let Some(backdrop) = backdrop {
                frame.push(
                    Layer::Background,
                    Primitive::Backdrop {
                        bounds: Rect::new(0., span.top, size.width, span.bottom),
                        backdrop: backdrop.clone(),
                    },
                );
            }
        }

        if style.draw_zero_line {
            let y = regions.zero_line();
            frame.line(Layer::ZeroLine, Line::new((0., y), (size.width, y)), &style.zero_line);
        }

        let slots = self.layout_bars(&skeleton, text, &mut frame)?;

        if style.draw_axis_labels {
            for (idx, (rect, point)) in slots.primary.iter().zip(self.data.primary().points()).enumerate() {
                let align = style.axis_label_text.align;
                frame.text(
                    Layer::AxisLabels,
                    self.label_formatter.format(point, idx),
                    Anchor::new(
                        (column_x(rect.x0, rect.x1, align), size.height),
                        align,
                        VAlign::Bottom,
                    ),
                    &style.axis_label_text,
                );
            }
        }

        if style.descriptions.enabled {
            let d = &style.descriptions;
            frame.text(
                Layer::Descriptions,
                d.upper.text.clone(),
                Anchor::new(
                    (
                        d.upper.gutter_x(skeleton.graph_left),
                        regions.upper.bottom - d.upper.margins.bottom,
                    ),
                    d.upper.style.align,
                    VAlign::Baseline,
                ),
                &d.upper.style,
            );
            // the lower baseline drops by half the text height so it clears the zero line
            let lower_height = text.measure(&d.lower.text, &d.lower.style)?.height;
            frame.text(
                Layer::Descriptions,
                d.lower.text.clone(),
                Anchor::new(
                    (
                        d.lower.gutter_x(skeleton.graph_left),
                        regions.lower.top + lower_height * 0.5 + d.lower.margins.top,
                    ),
                    d.lower.style.align,
                    VAlign::Baseline,
                ),
                &d.lower.style,
            );
            frame.text(
                Layer::Descriptions,
                d.labels.text.clone(),
                Anchor::new(
                    Point::new(
                        d.labels.gutter_x(skeleton.graph_left),
                        size.height - d.labels.margins.bottom,
                    ),
                    d.labels.style.align,
                    VAlign::Bottom,
                ),
                &d.labels.style,
            );
        }

        if style.connectors.enabled {
            for line in connector::lines(self.data.sums(), &regions, &slots, &style.connectors) {
                frame.line(Layer::Connectors, line, style.connectors.line());
            }
        }
        Ok(frame)
    }
}
