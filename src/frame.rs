//! Ordered drawing.
//!
//! A chart lays itself out into a [`Frame`]: a list of primitives, each tagged with the
//! [`Layer`] it belongs to. Rendering draws the layers in a fixed order so later layers cover
//! earlier ones, whatever order the primitives were pushed in.
use crate::{
    style::{HAlign, PaintMode, ShapeStyle, TextStyle, VAlign},
    text::build_layout,
};
use bitflags::bitflags;
use piet::{
    kurbo::{Arc, Line, Point, Rect, Vec2},
    Color, FixedGradient, FixedLinearGradient, GradientStop, LineCap, RenderContext, StrokeStyle,
    TextLayout,
};

/// Drawing layers, back to front.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    ZeroLine,
    Grid,
    Primary,
    Overlay,
    ValueText,
    AxisLabels,
    Descriptions,
    Connectors,
}

impl Layer {
    pub const ALL: [Layer; 9] = [
        Layer::Background,
        Layer::ZeroLine,
        Layer::Grid,
        Layer::Primary,
        Layer::Overlay,
        Layer::ValueText,
        Layer::AxisLabels,
        Layer::Descriptions,
        Layer::Connectors,
    ];

    /// The visibility flag for this layer.
    pub fn flag(self) -> Layers {
        match self {
            Layer::Background => Layers::BACKGROUND,
            Layer::ZeroLine => Layers::ZERO_LINE,
            Layer::Grid => Layers::GRID,
            Layer::Primary => Layers::PRIMARY,
            Layer::Overlay => Layers::OVERLAY,
            Layer::ValueText => Layers::VALUE_TEXT,
            Layer::AxisLabels => Layers::AXIS_LABELS,
            Layer::Descriptions => Layers::DESCRIPTIONS,
            Layer::Connectors => Layers::CONNECTORS,
        }
    }
}

bitflags! {
    /// A set of visible layers. Hiding a layer never changes the order of the others.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Layers: u16 {
        const BACKGROUND   = 1 << 0;
        const ZERO_LINE    = 1 << 1;
        const GRID         = 1 << 2;
        const PRIMARY      = 1 << 3;
        const OVERLAY      = 1 << 4;
        const VALUE_TEXT   = 1 << 5;
        const AXIS_LABELS  = 1 << 6;
        const DESCRIPTIONS = 1 << 7;
        const CONNECTORS   = 1 << 8;
    }
}

impl Layers {
    /// Whether primitives on `layer` are kept.
    pub fn shows(self, layer: Layer) -> bool {
        self.contains(layer.flag())
    }
}

impl From<Layer> for Layers {
    fn from(layer: Layer) -> Self {
        layer.flag()
    }
}

impl Default for Layers {
    fn default() -> Self {
        Layers::all()
    }
}

/// What fills a region behind the bars.
#[derive(Debug, Clone)]
pub enum Backdrop {
    Solid(Color),
    /// Top color fading to bottom color.
    VerticalGradient(Color, Color),
}

impl Backdrop {
    fn draw<RC: RenderContext>(&self, bounds: Rect, rc: &mut RC) -> Result<(), piet::Error> {
        match self {
            Backdrop::Solid(color) => rc.fill(bounds, color),
            Backdrop::VerticalGradient(top, bottom) => {
                let gradient = FixedLinearGradient {
                    start: Point::new(bounds.x0, bounds.y0),
                    end: Point::new(bounds.x0, bounds.y1),
                    stops: vec![
                        GradientStop {
                            pos: 0.,
                            color: top.clone(),
                        },
                        GradientStop {
                            pos: 1.,
                            color: bottom.clone(),
                        },
                    ],
                };
                let brush = rc.gradient(FixedGradient::Linear(gradient))?;
                rc.fill(bounds, &brush);
            }
        }
        Ok(())
    }
}

/// Where a piece of text goes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Anchor {
    pub pos: Point,
    pub h: HAlign,
    pub v: VAlign,
}

impl Anchor {
    pub fn new(pos: impl Into<Point>, h: HAlign, v: VAlign) -> Self {
        Anchor {
            pos: pos.into(),
            h,
            v,
        }
    }

    /// The top-left corner of a block of text with the given size and baseline.
    pub fn origin(&self, width: f64, height: f64, baseline: f64) -> Point {
        let x = match self.h {
            HAlign::Left => self.pos.x,
            HAlign::Center => self.pos.x - width * 0.5,
        };
        let y = match self.v {
            VAlign::Top => self.pos.y,
            VAlign::Middle => self.pos.y - height * 0.5,
            VAlign::Baseline => self.pos.y - baseline,
            VAlign::Bottom => self.pos.y - height,
        };
        Point::new(x, y)
    }
}

/// An arc, as degrees clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSpec {
    /// The ellipse the arc lies on.
    pub bounds: Rect,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl ArcSpec {
    fn to_arc(&self) -> Arc {
        let center = self.bounds.center();
        Arc {
            center,
            radii: Vec2::new(self.bounds.width() * 0.5, self.bounds.height() * 0.5),
            start_angle: self.start_deg.to_radians(),
            sweep_angle: self.sweep_deg.to_radians(),
            x_rotation: 0.,
        }
    }
}

/// One thing to draw.
#[derive(Debug, Clone)]
pub enum Primitive {
    Backdrop {
        bounds: Rect,
        backdrop: Backdrop,
    },
    Rect {
        rect: Rect,
        style: ShapeStyle,
    },
    Line {
        line: Line,
        style: ShapeStyle,
    },
    Arc {
        arc: ArcSpec,
        style: ShapeStyle,
        round_cap: bool,
    },
    Text {
        text: String,
        anchor: Anchor,
        style: TextStyle,
    },
}

/// The primitives for one draw pass.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    items: Vec<(Layer, Primitive)>,
    visible: Layers,
}

impl Frame {
    pub fn new(visible: Layers) -> Self {
        Frame {
            items: vec![],
            visible,
        }
    }

    /// Add a primitive. Primitives on hidden layers are dropped.
    pub fn push(&mut self, layer: Layer, primitive: Primitive) {
        if self.visible.shows(layer) {
            self.items.push((layer, primitive));
        }
    }

    pub fn rect(&mut self, layer: Layer, rect: Rect, style: &ShapeStyle) {
        self.push(
            layer,
            Primitive::Rect {
                rect,
                style: style.clone(),
            },
        );
    }

    pub fn line(&mut self, layer: Layer, line: Line, style: &ShapeStyle) {
        self.push(
            layer,
            Primitive::Line {
                line,
                style: style.clone(),
            },
        );
    }

    pub fn text(&mut self, layer: Layer, text: String, anchor: Anchor, style: &TextStyle) {
        self.push(
            layer,
            Primitive::Text {
                text,
                anchor,
                style: style.clone(),
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The primitives in drawing order.
    ///
    /// Layers are drawn back to front. Within a layer, primitives keep the order they were
    /// pushed in.
    pub fn primitives(&self) -> Vec<(Layer, &Primitive)> {
        let mut out: Vec<_> = self.items.iter().map(|(l, p)| (*l, p)).collect();
        out.sort_by_key(|(layer, _)| *layer);
        out
    }

    /// The primitives on one layer, in push order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> + '_ {
        self.items
            .iter()
            .filter(move |(l, _)| *l == layer)
            .map(|(_, p)| p)
    }

    /// Draw everything onto `rc`.
    pub fn render<RC: RenderContext>(&self, rc: &mut RC) -> Result<(), piet::Error> {
        for (_, primitive) in self.primitives() {
            render_primitive(primitive, rc)?;
        }
        Ok(())
    }
}

fn render_primitive<RC: RenderContext>(primitive: &Primitive, rc: &mut RC) -> Result<(), piet::Error> {
    match primitive {
        Primitive::Backdrop { bounds, backdrop } => backdrop.draw(*bounds, rc)?,
        Primitive::Rect { rect, style } => match style.mode {
            PaintMode::Fill => rc.fill(*rect, &style.color),
            PaintMode::Stroke => rc.stroke(*rect, &style.color, style.width),
        },
        Primitive::Line { line, style } => rc.stroke(*line, &style.color, style.width),
        Primitive::Arc {
            arc,
            style,
            round_cap,
        } => {
            let shape = arc.to_arc();
            match style.mode {
                PaintMode::Fill => rc.fill(shape, &style.color),
                PaintMode::Stroke if *round_cap => {
                    let stroke = StrokeStyle::new().line_cap(LineCap::Round);
                    rc.stroke_styled(shape, &style.color, style.width, &stroke);
                }
                PaintMode::Stroke => rc.stroke(shape, &style.color, style.width),
            }
        }
        Primitive::Text {
            text,
            anchor,
            style,
        } => {
            let layout = build_layout(rc.text(), text, style)?;
            let size = layout.size();
            let baseline = layout
                .line_metric(0)
                .map(|metric| metric.baseline)
                .unwrap_or(size.height);
            rc.draw_text(&layout, anchor.origin(size.width, size.height, baseline));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn layers_sort_back_to_front() {
        let mut frame = Frame::new(Layers::all());
        let style = ShapeStyle::fill(theme::BAR_COLOR);
        frame.rect(Layer::Connectors, Rect::ZERO, &style);
        frame.rect(Layer::Primary, Rect::new(0., 0., 1., 1.), &style);
        frame.rect(Layer::Background, Rect::ZERO, &style);
        frame.rect(Layer::Primary, Rect::new(1., 1., 2., 2.), &style);
        let order: Vec<_> = frame.primitives().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            order,
            vec![
                Layer::Background,
                Layer::Primary,
                Layer::Primary,
                Layer::Connectors
            ]
        );
        // push order is kept within a layer
        let primaries: Vec<_> = frame
            .layer(Layer::Primary)
            .map(|p| match p {
                Primitive::Rect { rect, .. } => rect.x0,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(primaries, vec![0., 1.]);
    }

    #[test]
    fn hidden_layers_are_dropped() {
        let visible = Layers::all() - Layers::GRID;
        let mut frame = Frame::new(visible);
        let style = ShapeStyle::stroke(theme::AXES_COLOR, 1.);
        frame.line(Layer::Grid, Line::new((0., 0.), (1., 1.)), &style);
        frame.line(Layer::ZeroLine, Line::new((0., 0.), (1., 1.)), &style);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.layer(Layer::Grid).count(), 0);
        assert!(Frame::new(Layers::empty()).is_empty());
    }

    #[test]
    fn layer_set() {
        let mut layers = Layers::empty();
        layers.insert(Layer::Overlay.into());
        assert!(layers.shows(Layer::Overlay));
        assert!(!layers.shows(Layer::Primary));
        layers.remove(Layer::Overlay.into());
        assert!(layers.is_empty());
        // one distinct flag per layer, covering the whole set
        let union = Layer::ALL
            .iter()
            .fold(Layers::empty(), |acc, l| acc | l.flag());
        assert_eq!(union, Layers::all());
        assert_eq!(Layers::all().iter().count(), Layer::ALL.len());
        assert_eq!(Layers::default(), Layers::all());
    }

    #[test]
    fn anchors() {
        let (w, h, base) = (40., 10., 8.);
        let a = Anchor::new((100., 50.), HAlign::Center, VAlign::Middle);
        assert_eq!(a.origin(w, h, base), Point::new(80., 45.));
        let a = Anchor::new((100., 50.), HAlign::Left, VAlign::Baseline);
        assert_eq!(a.origin(w, h, base), Point::new(100., 42.));
        let a = Anchor::new((100., 50.), HAlign::Left, VAlign::Bottom);
        assert_eq!(a.origin(w, h, base), Point::new(100., 40.));
        let a = Anchor::new((100., 50.), HAlign::Center, VAlign::Top);
        assert_eq!(a.origin(w, h, base), Point::new(80., 50.));
    }

    #[test]
    fn arcs_convert_to_radians() {
        let spec = ArcSpec {
            bounds: Rect::new(0., 0., 100., 50.),
            start_deg: -90.,
            sweep_deg: 180.,
        };
        let arc = spec.to_arc();
        assert_eq!(arc.center, Point::new(50., 25.));
        assert_eq!(arc.radii, Vec2::new(50., 25.));
        assert!((arc.start_angle + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((arc.sweep_angle - std::f64::consts::PI).abs() < 1e-12);
    }
}
