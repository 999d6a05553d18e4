//! Color helpers.

use widgetdom::Color;

/// RGB complement of a color.
pub trait InvertColor {
    /// `(1 - r, 1 - g, 1 - b)` with alpha and color space unchanged.
    fn invert(&self) -> Self;
}

impl InvertColor for Color {
    fn invert(&self) -> Self {
        Color {
            red: 1.0 - self.red,
            green: 1.0 - self.green,
            blue: 1.0 - self.blue,
            alpha: self.alpha,
            space: self.space,
        }
    }
}

pub fn invert_color(color: Color) -> Color {
    color.invert()
}
