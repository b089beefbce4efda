use crate::data::ValuePoint;
use to_precision::FloatExt as _;

/// Turns a point and its slot into the text drawn for it.
///
/// Called for every label on every draw, so it should be cheap.
pub trait Formatter {
    fn format(&self, point: &ValuePoint, index: usize) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&ValuePoint, usize) -> String,
{
    fn format(&self, point: &ValuePoint, index: usize) -> String {
        self(point, index)
    }
}

/// The value itself, always with a decimal point (`20.0`, `-7.5`).
#[derive(Debug, Copy, Clone, Default)]
pub struct ValueText;

impl Formatter for ValueText {
    fn format(&self, point: &ValuePoint, _index: usize) -> String {
        format!("{:?}", point.value)
    }
}

/// The slot index (`0`, `1`, ...).
#[derive(Debug, Copy, Clone, Default)]
pub struct SlotIndex;

impl Formatter for SlotIndex {
    fn format(&self, _point: &ValuePoint, index: usize) -> String {
        index.to_string()
    }
}

/// The value to a number of significant digits, optionally as a percentage.
#[derive(Debug, Copy, Clone)]
pub struct Significant {
    pub digits: u8,
    pub percent: bool,
}

impl Significant {
    pub fn new(digits: u8) -> Self {
        Significant {
            digits,
            percent: false,
        }
    }

    pub fn percent(mut self) -> Self {
        self.percent = true;
        self
    }
}

impl Formatter for Significant {
    fn format(&self, point: &ValuePoint, _index: usize) -> String {
        let suffix = if self.percent { "%" } else { "" };
        format!("{}{}", point.value.to_precision(self.digits.into()), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = ValuePoint::new(20.);
        assert_eq!(ValueText.format(&p, 3), "20.0");
        assert_eq!(ValueText.format(&ValuePoint::new(-7.5), 0), "-7.5");
        assert_eq!(SlotIndex.format(&p, 3), "3");
    }

    #[test]
    fn closures_format() {
        let months = ["Jan", "Feb"];
        let f = |_: &ValuePoint, idx: usize| months[idx].to_string();
        assert_eq!(f.format(&ValuePoint::new(0.), 1), "Feb");
    }

    #[test]
    fn significant_digits() {
        let text = Significant::new(3).percent().format(&ValuePoint::new(12.345), 0);
        assert!(text.starts_with("12.3"), "{}", text);
        assert!(text.ends_with('%'));
    }
}
