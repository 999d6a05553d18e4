//! Expandable card widget - a header that toggles a body section.

use std::sync::Arc;

use widgetdom::{
    Align, BorderStroke, Color, Edges, Element, Event, IconId, Size, Spring, Style, TextStyle,
    TransitionConfig, Transitions,
};

use crate::registry::{HandlerRegistry, ON_ACTIVATE};

type ToggleCallback = Arc<dyn Fn(bool) + Send + Sync>;

const COLOR_TWEEN_MS: u64 = 700;
const BACKGROUND_TWEEN_MS: u64 = 200;

/// A card with a clickable header and a body mounted only while expanded.
///
/// The card is controlled: `expanded` comes from the caller and a click on
/// the header or the chevron calls `on_toggle` with the value the card was
/// built with. The caller decides whether to flip it.
///
/// Animated parts, each with its own timing:
/// - header background: 200 ms tween
/// - heading color: default spring
/// - chevron rotation (0 to 180 degrees) and tint: 700 ms tweens
/// - value text color: 700 ms tween
/// - card height: bouncy spring, so mounting the body does not snap
///
/// # Example
///
/// ```ignore
/// let card = ExpandableCard::new()
///     .id("details")
///     .heading("Click to Expand anywhere on Header")
///     .expanded(state.expanded)
///     .on_toggle(move |current| {
///         let _ = tx.send(Msg::CardToggled(current));
///     })
///     .child(Element::text("Expanded State"))
///     .build(&registry);
/// ```
#[derive(Clone)]
pub struct ExpandableCard {
    id: Option<String>,
    expanded: bool,
    on_toggle: Option<ToggleCallback>,
    children: Vec<Element>,

    // Header
    heading: String,
    icon: Option<IconId>,
    icon_size: u16,
    chevron_icon: IconId,
    header_height: u16,
    header_padding: Edges,
    header_background: Color,
    header_background_expanded: Color,
    heading_color: Color,
    heading_color_expanded: Color,
    heading_text_style: TextStyle,

    // Value label
    value_text: Option<String>,
    value_color: Color,
    value_text_style: TextStyle,
    value_padding: u16,

    // Chevron
    chevron_color: Color,
    chevron_color_expanded: Color,
    chevron_padding: u16,

    // Container
    border_enabled: bool,
    border_color: Color,
    corner_radius: u16,
}

impl Default for ExpandableCard {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpandableCard {
    pub fn new() -> Self {
        Self {
            id: None,
            expanded: false,
            on_toggle: None,
            children: Vec::new(),
            heading: String::new(),
            icon: None,
            icon_size: 40,
            chevron_icon: IconId::new("arrow_down_float"),
            header_height: 73,
            header_padding: Edges::default(),
            header_background: Color::WHITE,
            header_background_expanded: Color::BLACK,
            heading_color: Color::BLACK,
            heading_color_expanded: Color::WHITE,
            heading_text_style: TextStyle::new().size(16),
            value_text: None,
            value_color: Color::BLACK,
            value_text_style: TextStyle::new().size(14),
            value_padding: 2,
            chevron_color: Color::BLACK,
            chevron_color_expanded: Color::WHITE,
            chevron_padding: 2,
            border_enabled: true,
            border_color: Color::BLACK,
            corner_radius: 16,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the expand state for this render.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Called with the current expand state when the header or chevron is clicked.
    pub fn on_toggle(mut self, on_toggle: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_toggle = Some(Arc::new(on_toggle));
        self
    }

    /// Set the body children.
    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    /// Add a single body child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Leading icon. Without one the header starts with the heading.
    pub fn icon(mut self, icon: impl Into<IconId>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_size(mut self, size: u16) -> Self {
        self.icon_size = size;
        self
    }

    /// Icon used for the rotating chevron.
    pub fn chevron_icon(mut self, icon: impl Into<IconId>) -> Self {
        self.chevron_icon = icon.into();
        self
    }

    pub fn header_height(mut self, height: u16) -> Self {
        self.header_height = height;
        self
    }

    pub fn header_padding(mut self, padding: Edges) -> Self {
        self.header_padding = padding;
        self
    }

    /// Header background when collapsed and when expanded.
    pub fn header_background(mut self, collapsed: Color, expanded: Color) -> Self {
        self.header_background = collapsed;
        self.header_background_expanded = expanded;
        self
    }

    /// Heading color when collapsed and when expanded.
    pub fn heading_color(mut self, collapsed: Color, expanded: Color) -> Self {
        self.heading_color = collapsed;
        self.heading_color_expanded = expanded;
        self
    }

    pub fn heading_text_style(mut self, style: TextStyle) -> Self {
        self.heading_text_style = style;
        self
    }

    /// Trailing value label. Blank text renders no label.
    pub fn value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = Some(text.into());
        self
    }

    /// Value label color while collapsed. It turns white when expanded.
    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    pub fn value_text_style(mut self, style: TextStyle) -> Self {
        self.value_text_style = style;
        self
    }

    pub fn value_padding(mut self, padding: u16) -> Self {
        self.value_padding = padding;
        self
    }

    /// Chevron tint when collapsed and when expanded.
    pub fn chevron_color(mut self, collapsed: Color, expanded: Color) -> Self {
        self.chevron_color = collapsed;
        self.chevron_color_expanded = expanded;
        self
    }

    pub fn chevron_padding(mut self, padding: u16) -> Self {
        self.chevron_padding = padding;
        self
    }

    /// Draw the 1-unit border. On by default.
    pub fn border(mut self, enabled: bool) -> Self {
        self.border_enabled = enabled;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Build the card element and register the toggle handlers.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let expanded = self.expanded;
        let id = self.id.unwrap_or_else(|| "expandable-card".into());
        let header_id = format!("{id}-header");
        let chevron_id = format!("{id}-chevron");

        // Header and chevron both report the pre-toggle state
        if let Some(on_toggle) = &self.on_toggle {
            for target in [&header_id, &chevron_id] {
                let on_toggle = on_toggle.clone();
                registry.register(
                    target,
                    ON_ACTIVATE,
                    Arc::new(move |_event: &Event| on_toggle(expanded)),
                );
            }
        }

        let pick = |collapsed: Color, open: Color| if expanded { open } else { collapsed };

        let leading = self.icon.map(|icon| {
            Element::icon(icon)
                .id(format!("{id}-icon"))
                .size(self.icon_size)
                .data("description", format!("{} icon", self.heading))
        });

        let heading = Element::text(&self.heading)
            .id(format!("{id}-heading"))
            .flex_grow(1)
            .style(
                Style::new()
                    .foreground(pick(self.heading_color, self.heading_color_expanded))
                    .text_style(self.heading_text_style),
            )
            .transitions(Transitions::new().foreground(TransitionConfig::default()));

        let value = self
            .value_text
            .filter(|text| !text.trim().is_empty())
            .map(|text| {
                Element::text(text)
                    .id(format!("{id}-value"))
                    .padding(Edges::all(self.value_padding))
                    .style(
                        Style::new()
                            .foreground(pick(self.value_color, Color::WHITE))
                            .text_style(self.value_text_style),
                    )
                    .transitions(
                        Transitions::new().foreground(TransitionConfig::tween(COLOR_TWEEN_MS)),
                    )
            });

        let chevron = Element::icon(self.chevron_icon)
            .id(chevron_id)
            .padding(Edges::all(self.chevron_padding))
            .rotation(if expanded { 180.0 } else { 0.0 })
            .style(Style::new().foreground(pick(self.chevron_color, self.chevron_color_expanded)))
            .transitions(
                Transitions::new()
                    .rotation(TransitionConfig::tween(COLOR_TWEEN_MS))
                    .foreground(TransitionConfig::tween(COLOR_TWEEN_MS)),
            )
            .clickable(true)
            .focusable(true)
            .data("description", self.heading.clone());

        let header = Element::row()
            .id(header_id)
            .width(Size::Fill)
            .height(Size::Fixed(self.header_height))
            .padding(self.header_padding)
            .align(Align::Center)
            .style(Style::new().background(pick(
                self.header_background,
                self.header_background_expanded,
            )))
            .transitions(
                Transitions::new().background(TransitionConfig::tween(BACKGROUND_TWEEN_MS)),
            )
            .clickable(true)
            .focusable(true)
            .child_opt(leading)
            .child(heading)
            .child_opt(value)
            .child(chevron);

        // Mounted only while expanded; grows in from zero height
        let body = expanded.then(|| {
            Element::col()
                .id(format!("{id}-body"))
                .width(Size::Fill)
                .clip(true)
                .transitions(Transitions::new().enter_height(TransitionConfig::spring(
                    Spring::new(Spring::STIFFNESS_MEDIUM_LOW, Spring::DAMPING_RATIO_NO_BOUNCY),
                )))
                .children(self.children)
        });

        let mut container_style = Style::new().corner_radius(self.corner_radius);
        if self.border_enabled {
            container_style = container_style.border(BorderStroke::new(1, self.border_color));
        }

        Element::col()
            .id(id)
            .width(Size::Fill)
            .clip(true)
            .style(container_style)
            .transitions(Transitions::new().height(TransitionConfig::spring(Spring::new(
                Spring::STIFFNESS_MEDIUM_LOW,
                Spring::DAMPING_RATIO_MEDIUM_BOUNCY,
            ))))
            .data("expanded", expanded.to_string())
            .child(header)
            .child_opt(body)
    }
}
