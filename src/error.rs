use thiserror::Error;

/// Why a dataset was refused.
///
/// A refused dataset never replaces the one already on the chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("a dataset holds one or two series, got {0}")]
    SeriesCount(usize),
    #[error("series lengths differ ({primary} vs {overlay})")]
    LengthMismatch { primary: usize, overlay: usize },
    #[error("values at slot {slot} sum to {sum}, outside -100..=100")]
    SumOutOfRange { slot: usize, sum: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("no color named `{0}`")]
    UnknownColor(String),
}
