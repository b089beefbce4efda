//! Marker lines drawn across each bar at the total of its stacked values.
use crate::{geometry::Regions, style::ShapeStyle, theme, units::Density};
use itertools::izip;
use piet::kurbo::{Line, Rect};

/// How wide a connector line is compared to its bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Exactly as wide as the bar.
    Normal,
    /// Wider than the bar by the extension on each side.
    Extended,
    /// Narrower than the bar by the extension on each side.
    Contracted,
}

#[derive(Debug, Clone)]
pub struct ConnectorStyle {
    density: Density,
    pub enabled: bool,
    pub kind: ConnectorKind,
    extension: f64,
    line: ShapeStyle,
}

impl ConnectorStyle {
    pub fn new(density: Density) -> Self {
        ConnectorStyle {
            density,
            enabled: false,
            kind: ConnectorKind::Normal,
            extension: density.dp(theme::CONNECTOR_EXTENSION_DP),
            line: ShapeStyle::stroke(theme::CONNECTOR_COLOR, density.dp(theme::CONNECTOR_DP)),
        }
    }

    pub fn line(&self) -> &ShapeStyle {
        &self.line
    }

    pub fn extension(&self) -> f64 {
        self.extension
    }

    pub fn set_height_dp(&mut self, dp: f64) {
        self.line.width = self.density.dp(dp);
    }

    pub fn set_extension_dp(&mut self, dp: f64) {
        self.extension = self.density.dp(dp);
    }

    pub fn set_color(&mut self, color: piet::Color) {
        self.line.color = color;
    }

    /// Space the graph must leave at each side so extended lines stay on the surface.
    pub fn margin(&self) -> f64 {
        if self.enabled && self.kind == ConnectorKind::Extended {
            self.extension
        } else {
            0.
        }
    }

    /// The horizontal extent of the line for a bar spanning `x0..x1`.
    pub fn extent(&self, x0: f64, x1: f64) -> (f64, f64) {
        match self.kind {
            ConnectorKind::Normal => (x0, x1),
            ConnectorKind::Extended => (x0 - self.extension, x1 + self.extension),
            ConnectorKind::Contracted => (x0 + self.extension, x1 - self.extension),
        }
    }
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        ConnectorStyle::new(Density::default())
    }
}

/// Where the primary bars ended up in one layout pass, by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotRects {
    pub primary: Vec<Rect>,
}

impl SlotRects {
    pub fn with_capacity(slots: usize) -> Self {
        SlotRects {
            primary: Vec::with_capacity(slots),
        }
    }

    pub fn push(&mut self, primary: Rect) {
        self.primary.push(primary);
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

/// One line per slot at the height of `totals`, spanning the slot's primary bar.
pub fn lines(
    totals: impl IntoIterator<Item = f64>,
    regions: &Regions,
    slots: &SlotRects,
    style: &ConnectorStyle,
) -> Vec<Line> {
    izip!(totals, &slots.primary)
        .map(|(total, rect)| {
            let y = regions.marker(total);
            let (x0, x1) = style.extent(rect.x0, rect.x1);
            Line::new((x0, y), (x1, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        let mut style = ConnectorStyle::new(Density::new(2.));
        assert_eq!(style.extent(10., 20.), (10., 20.));
        style.kind = ConnectorKind::Extended;
        assert_eq!(style.extent(10., 20.), (6., 24.));
        style.kind = ConnectorKind::Contracted;
        assert_eq!(style.extent(10., 20.), (14., 16.));
    }

    #[test]
    fn margin_only_when_extended_and_enabled() {
        let mut style = ConnectorStyle::default();
        style.kind = ConnectorKind::Extended;
        assert_eq!(style.margin(), 0.);
        style.enabled = true;
        assert_eq!(style.margin(), 2.);
        style.kind = ConnectorKind::Normal;
        assert_eq!(style.margin(), 0.);
    }

    #[test]
    fn lines_sit_on_totals() {
        let regions = Regions::split(0., 204., 4.);
        let mut slots = SlotRects::default();
        slots.push(Rect::new(0., 0., 10., 100.));
        slots.push(Rect::new(20., 104., 30., 150.));
        assert_eq!(slots.len(), 2);
        let lines = lines([30., -40.], &regions, &slots, &ConnectorStyle::default());
        assert_eq!(lines[0], Line::new((0., 70.), (10., 70.)));
        assert_eq!(lines[1], Line::new((20., 144.), (30., 144.)));
    }
}
