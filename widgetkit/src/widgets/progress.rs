//! Progress indicator widget.

use std::time::Duration;

use widgetdom::{Color, Element, Style};

const DEFAULT_GLYPHS: [&str; 4] = ["◜", "◝", "◞", "◟"];
const DEFAULT_INTERVAL: Duration = Duration::from_millis(120);

/// An indeterminate circular progress indicator.
///
/// Renders as a `Frames` element that cycles through spinner glyphs. The
/// element carries `role = "progress"` so hosts can find it.
#[derive(Clone, Debug)]
pub struct ProgressIndicator {
    id: Option<String>,
    color: Color,
    glyphs: Vec<String>,
    interval: Duration,
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self {
            id: None,
            color: Color::WHITE,
            glyphs: DEFAULT_GLYPHS.iter().map(|g| g.to_string()).collect(),
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the spinner color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replace the spinner glyphs. An empty list keeps the defaults.
    pub fn glyphs<I, S>(mut self, glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        if !glyphs.is_empty() {
            self.glyphs = glyphs;
        }
        self
    }

    /// Set the time each glyph is shown.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn build(self) -> Element {
        let id = self.id.unwrap_or_else(|| "progress".into());
        let style = Style::new().foreground(self.color);

        let frames = self
            .glyphs
            .iter()
            .enumerate()
            .map(|(i, glyph)| {
                Element::text(glyph)
                    .id(format!("{id}-frame-{i}"))
                    .style(style.clone())
            })
            .collect();

        Element::frames(frames, self.interval)
            .id(id)
            .style(style)
            .data("role", "progress")
    }
}
