//! Loading button widget.

use std::sync::Arc;

use widgetdom::{Align, BorderStroke, Color, Edges, Element, Event, Style};

use crate::registry::{HandlerRegistry, ON_ACTIVATE};
use crate::widgets::ProgressIndicator;

type ClickCallback = Arc<dyn Fn() + Send + Sync>;

const CONTAINER: Color = Color::rgb(0x67 as f32 / 255.0, 0x50 as f32 / 255.0, 0xa4 as f32 / 255.0);
const ON_SURFACE: Color = Color::rgb(0x1d as f32 / 255.0, 0x1b as f32 / 255.0, 0x20 as f32 / 255.0);

/// A button that shows a progress indicator and ignores clicks while loading.
///
/// The loading flag belongs to the caller. A typical `on_click` starts some
/// work, sets the flag, and clears it when the work finishes; the next
/// `build` picks up the new value.
///
/// # Example
///
/// ```ignore
/// let button = LoadingButton::new()
///     .id("submit")
///     .label("Submit Form")
///     .loading(state.loading)
///     .on_click(move || {
///         let _ = tx.send(Msg::SubmitClicked);
///     })
///     .build(&registry);
/// ```
#[derive(Clone, Default)]
pub struct LoadingButton {
    id: Option<String>,
    loading: bool,
    label: Option<String>,
    content: Option<Element>,
    on_click: Option<ClickCallback>,
    style: Option<Style>,
    style_disabled: Option<Style>,
    padding: Option<Edges>,
    border: Option<BorderStroke>,
    corner_radius: Option<u16>,
    indicator: Option<ProgressIndicator>,
}

impl LoadingButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the loading flag for this render.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Use a text label as the content.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Use an arbitrary element as the content. Takes precedence over `label`.
    pub fn content(mut self, content: Element) -> Self {
        self.content = Some(content);
        self
    }

    /// Called once per activation while not loading.
    pub fn on_click(mut self, on_click: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(on_click));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Style layered over `style` while loading.
    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn border(mut self, border: BorderStroke) -> Self {
        self.border = Some(border);
        self
    }

    pub fn corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Replace the default progress indicator.
    pub fn indicator(mut self, indicator: ProgressIndicator) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Build the button element and register its click handler.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let id = self.id.unwrap_or_else(|| "loading-button".into());
        let loading = self.loading;

        let mut style = self.style.unwrap_or_else(|| {
            Style::new()
                .background(CONTAINER)
                .foreground(Color::WHITE)
                .corner_radius(20)
        });
        if let Some(radius) = self.corner_radius {
            style = style.corner_radius(radius);
        }
        if let Some(border) = self.border {
            style = style.border(border);
        }
        let style_disabled = self.style_disabled.unwrap_or_else(|| {
            Style::new()
                .background(ON_SURFACE.with_alpha(0.12))
                .foreground(ON_SURFACE.with_alpha(0.38))
        });

        let slot = if loading {
            let indicator_color = style_disabled.foreground.unwrap_or(ON_SURFACE);
            self.indicator
                .unwrap_or_else(|| ProgressIndicator::new().color(indicator_color))
                .id(format!("{id}-progress"))
                .build()
        } else {
            match (self.content, self.label) {
                (Some(content), _) => content,
                (None, label) => {
                    Element::text(label.unwrap_or_default()).id(format!("{id}-content"))
                }
            }
        };

        if let Some(on_click) = self.on_click {
            registry.register(
                &id,
                ON_ACTIVATE,
                Arc::new(move |_event: &Event| {
                    if !loading {
                        on_click();
                    }
                }),
            );
        }

        Element::row()
            .id(id)
            .align(Align::Center)
            .padding(self.padding.unwrap_or(Edges::symmetric(0, 2)))
            .style(style)
            .style_disabled(style_disabled)
            .clickable(true)
            .focusable(!loading)
            .disabled(loading)
            .data("role", "button")
            .child(slot)
    }
}
