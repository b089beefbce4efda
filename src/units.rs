/// Converts device-independent lengths to surface pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Density {
    /// Pixels per dp.
    pub scale: f64,
    /// Pixels per sp. Equal to `scale` unless the user has scaled fonts.
    pub font_scale: f64,
}

impl Density {
    /// A density where `dp` and `sp` scale identically.
    pub fn new(scale: f64) -> Self {
        Density {
            scale,
            font_scale: scale,
        }
    }

    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    #[inline]
    pub fn dp(&self, dp: f64) -> f64 {
        dp * self.scale
    }

    #[inline]
    pub fn sp(&self, sp: f64) -> f64 {
        sp * self.font_scale
    }
}

impl Default for Density {
    fn default() -> Self {
        Density::new(1.)
    }
}

#[test]
fn test_conversions() {
    let density = Density::new(2.).with_font_scale(3.);
    assert_eq!(density.dp(4.), 8.);
    assert_eq!(density.sp(4.), 12.);
    assert_eq!(Density::default().dp(7.5), 7.5);
}
