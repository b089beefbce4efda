use crate::error::DataError;
use piet::Color;
use std::{any::Any, fmt, sync::Arc};

/// The largest magnitude a diverging chart can show.
pub const FULL_SCALE: f64 = 100.;

/// One value on a chart, with whatever the caller wants to keep alongside it.
#[derive(Clone)]
pub struct ValuePoint {
    pub value: f64,
    payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl ValuePoint {
    pub fn new(value: f64) -> Self {
        ValuePoint {
            value,
            payload: None,
        }
    }

    pub fn with_payload(value: f64, payload: impl Any + Send + Sync) -> Self {
        ValuePoint {
            value,
            payload: Some(Arc::new(payload)),
        }
    }

    /// The payload, if there is one and it is a `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref()
    }
}

impl fmt::Debug for ValuePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ValuePoint")
            .field("value", &self.value)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

impl From<f64> for ValuePoint {
    fn from(value: f64) -> Self {
        ValuePoint::new(value)
    }
}

/// Values in slot order. The position of a point is its column.
#[derive(Debug, Clone, Default)]
pub struct DataSeries {
    points: Vec<ValuePoint>,
}

impl DataSeries {
    pub fn new(points: impl IntoIterator<Item = impl Into<ValuePoint>>) -> Self {
        DataSeries {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&ValuePoint> {
        self.points.get(idx)
    }

    pub fn points(&self) -> &[ValuePoint] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

impl<P: Into<ValuePoint>> FromIterator<P> for DataSeries {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        DataSeries::new(iter)
    }
}

/// The data for a diverging chart: a primary series and optionally an overlay stacked on it.
///
/// Maintains invariants: both series have the same length, and every pointwise sum is in
/// `-100..=100`.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    primary: DataSeries,
    overlay: Option<DataSeries>,
}

impl DataSet {
    pub fn single(primary: impl Into<DataSeries>) -> Self {
        DataSet {
            primary: primary.into(),
            overlay: None,
        }
    }

    /// A primary series with an overlay stacked on top of it.
    pub fn stacked(
        primary: impl Into<DataSeries>,
        overlay: impl Into<DataSeries>,
    ) -> Result<Self, DataError> {
        let primary = primary.into();
        let overlay = overlay.into();
        check_sums(&primary, &overlay)?;
        Ok(DataSet {
            primary,
            overlay: Some(overlay),
        })
    }

    /// Build from `(primary, overlay)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, DataError> {
        let (primary, overlay): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        DataSet::stacked(primary, overlay)
    }

    /// Build from a list of one or two series.
    pub fn from_series(series: Vec<DataSeries>) -> Result<Self, DataError> {
        let mut series = series.into_iter();
        match (series.next(), series.next(), series.len()) {
            (Some(primary), None, _) => Ok(DataSet::single(primary)),
            (Some(primary), Some(overlay), 0) => DataSet::stacked(primary, overlay),
            (None, ..) => Err(DataError::SeriesCount(0)),
            (Some(_), Some(_), rest) => Err(DataError::SeriesCount(rest + 2)),
        }
    }

    pub fn primary(&self) -> &DataSeries {
        &self.primary
    }

    pub fn overlay(&self) -> Option<&DataSeries> {
        self.overlay.as_ref()
    }

    /// The number of slots.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Primary plus overlay, per slot.
    pub fn sums(&self) -> impl Iterator<Item = f64> + '_ {
        self.primary.values().enumerate().map(move |(idx, v)| {
            v + self
                .overlay
                .as_ref()
                .and_then(|o| o.get(idx))
                .map(|p| p.value)
                .unwrap_or(0.)
        })
    }
}

impl From<Vec<f64>> for DataSeries {
    fn from(values: Vec<f64>) -> Self {
        DataSeries::new(values)
    }
}

impl From<Vec<ValuePoint>> for DataSeries {
    fn from(points: Vec<ValuePoint>) -> Self {
        DataSeries { points }
    }
}

impl<const N: usize> From<[f64; N]> for DataSeries {
    fn from(values: [f64; N]) -> Self {
        DataSeries::new(values)
    }
}

fn check_sums(primary: &DataSeries, overlay: &DataSeries) -> Result<(), DataError> {
    if primary.len() != overlay.len() {
        return Err(DataError::LengthMismatch {
            primary: primary.len(),
            overlay: overlay.len(),
        });
    }
    for (slot, (a, b)) in primary.values().zip(overlay.values()).enumerate() {
        let sum = a + b;
        if !(-FULL_SCALE..=FULL_SCALE).contains(&sum) {
            return Err(DataError::SumOutOfRange { slot, sum });
        }
    }
    Ok(())
}

/// One ring of a gauge.
#[derive(Debug, Clone)]
pub struct GaugeSegment {
    /// Progress in `0..=1`.
    pub value: f64,
    /// Overrides the gauge's foreground color.
    pub foreground: Option<Color>,
    /// Overrides the gauge's background color.
    pub background: Option<Color>,
}

impl GaugeSegment {
    pub fn new(value: f64) -> Self {
        GaugeSegment {
            value,
            foreground: None,
            background: None,
        }
    }

    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = Some(foreground);
        self.background = Some(background);
        self
    }

    /// Degrees of arc covered by the value.
    pub fn sweep(&self) -> f64 {
        360. * self.value
    }
}

impl From<f64> for GaugeSegment {
    fn from(value: f64) -> Self {
        GaugeSegment::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_downcasts() {
        let point = ValuePoint::with_payload(12., "march");
        assert_eq!(point.payload::<&str>(), Some(&"march"));
        assert_eq!(point.payload::<u32>(), None);
        assert_eq!(ValuePoint::new(1.).payload::<&str>(), None);
    }

    #[test]
    fn stacked_sums_are_checked() {
        assert!(DataSet::from_pairs([(20., 10.), (-20., -80.), (100., 0.)]).is_ok());
        assert_eq!(
            DataSet::from_pairs([(20., 10.), (60., 50.)]).unwrap_err(),
            DataError::SumOutOfRange { slot: 1, sum: 110. }
        );
        assert_eq!(
            DataSet::from_pairs([(-60., -50.5)]).unwrap_err(),
            DataError::SumOutOfRange {
                slot: 0,
                sum: -110.5
            }
        );
    }

    #[test]
    fn lengths_must_match() {
        assert_eq!(
            DataSet::stacked([1., 2.], [1.]).unwrap_err(),
            DataError::LengthMismatch {
                primary: 2,
                overlay: 1
            }
        );
    }

    #[test]
    fn series_count() {
        assert_eq!(
            DataSet::from_series(vec![]).unwrap_err(),
            DataError::SeriesCount(0)
        );
        let three = vec![DataSeries::from([1.]); 3];
        assert_eq!(
            DataSet::from_series(three).unwrap_err(),
            DataError::SeriesCount(3)
        );
        let one = DataSet::from_series(vec![DataSeries::from([150.])]).unwrap();
        assert!(one.overlay().is_none());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn sums() {
        let set = DataSet::from_pairs([(20., 10.), (-20., -20.)]).unwrap();
        assert_eq!(set.sums().collect::<Vec<_>>(), vec![30., -40.]);
        let single = DataSet::single([5., -5.]);
        assert_eq!(single.sums().collect::<Vec<_>>(), vec![5., -5.]);
    }

    #[test]
    fn gauge_sweep() {
        for (value, sweep) in [(0.8, 288.), (0.6, 216.), (0.4, 144.), (0., 0.), (1., 360.)] {
            assert_eq!(GaugeSegment::new(value).sweep(), sweep);
        }
    }
}
