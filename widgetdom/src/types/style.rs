use super::{BorderStroke, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    /// Text color, or tint for icons and progress frames.
    pub foreground: Option<Color>,
    pub border: Option<BorderStroke>,
    pub corner_radius: u16,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: BorderStroke) -> Self {
        self.border = Some(border);
        self
    }

    pub fn corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Fill unset fields from `base`. Fields set on `self` win.
    pub fn merged_over(self, base: &Style) -> Style {
        Style {
            background: self.background.or(base.background),
            foreground: self.foreground.or(base.foreground),
            border: self.border.or(base.border),
            corner_radius: if self.corner_radius == 0 {
                base.corner_radius
            } else {
                self.corner_radius
            },
            text_style: self.text_style,
        }
    }
}
