use crate::style::TextStyle;
use piet::{kurbo::Size, Text, TextLayout, TextLayoutBuilder};

/// Measures how much space a string takes up in a given style.
///
/// Every piet text factory is a measurer, so a chart can be laid out with `rc.text()`.
pub trait TextMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Result<Size, piet::Error>;
}

impl<T: Text> TextMeasure for T {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Result<Size, piet::Error> {
        Ok(build_layout(self, text, style)?.size())
    }
}

/// Lay out `text` in `style`.
pub(crate) fn build_layout<T: Text>(
    factory: &mut T,
    text: &str,
    style: &TextStyle,
) -> Result<T::TextLayout, piet::Error> {
    factory
        .new_text_layout(text.to_owned())
        .font(style.family.clone(), style.size)
        .text_color(style.color.clone())
        .build()
}

/// A measurer that pretends every glyph is the same size. Used for testing layout.
#[cfg(test)]
pub(crate) struct FixedGlyphs {
    /// Glyph width as a fraction of the font size.
    pub width: f64,
}

#[cfg(test)]
impl TextMeasure for FixedGlyphs {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Result<Size, piet::Error> {
        Ok(Size::new(
            text.chars().count() as f64 * self.width * style.size,
            style.size,
        ))
    }
}
