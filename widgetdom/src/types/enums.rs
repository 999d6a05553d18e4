use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Fill,
    /// Share of the space left after fixed and auto siblings, by weight.
    Flex(u16),
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Cross-axis alignment of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

/// Outline drawn around an element's bounds. Insets the content by `width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStroke {
    pub width: u16,
    pub color: Color,
}

impl BorderStroke {
    pub const fn new(width: u16, color: Color) -> Self {
        Self { width, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    /// Font size in scale-independent units. `None` inherits the host default.
    pub size: Option<u16>,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self { size: None }
    }

    pub const fn size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }
}
