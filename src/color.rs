use crate::{error::StyleError, theme};
use piet::Color;
use std::collections::HashMap;

/// Something that can turn a color name into a color.
pub trait ColorResolver {
    fn resolve(&self, name: &str) -> Option<Color>;

    /// Like `resolve`, but a missing name is an error.
    fn require(&self, name: &str) -> Result<Color, StyleError> {
        self.resolve(name)
            .ok_or_else(|| StyleError::UnknownColor(name.to_owned()))
    }
}

impl ColorResolver for HashMap<String, Color> {
    fn resolve(&self, name: &str) -> Option<Color> {
        self.get(name).cloned()
    }
}

/// The stock palette, plus any extra names.
#[derive(Debug, Clone, Default)]
pub struct NamedColors {
    extra: HashMap<String, Color>,
}

impl NamedColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a name. Names added here shadow the stock ones.
    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.extra.insert(name.into(), color);
        self
    }
}

impl ColorResolver for NamedColors {
    fn resolve(&self, name: &str) -> Option<Color> {
        if let Some(color) = self.extra.get(name) {
            return Some(color.clone());
        }
        Some(match name {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "darker_gray" => theme::RING_BACKGROUND_COLOR,
            "holo_orange_dark" => theme::CONNECTOR_COLOR,
            "primary" => theme::BAR_COLOR,
            "accent" => theme::OVERLAY_BAR_COLOR,
            _ => return None,
        })
    }
}
