use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::{Content, IconId};
use crate::transitions::Transitions;
use crate::types::{Align, Direction, Edges, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the retained element tree.
///
/// Widgets produce elements; the host lays them out, hit-tests them and
/// resolves animated values against an [`AnimationState`](crate::animation::AnimationState).
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    /// Short kind name used by the outline renderer ("row", "text", ...).
    pub kind: &'static str,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub align: Align,

    // Flex item
    pub flex_grow: u16,

    // Visual
    pub style: Style,
    pub style_disabled: Option<Style>,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    pub transitions: Transitions,
    /// Clip children to this element's bounds.
    pub clip: bool,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,
    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,

    // Custom data storage (roles, content descriptions, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: "box",
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            align: Align::Start,
            flex_grow: 0,
            style: Style::default(),
            style_disabled: None,
            rotation: 0.0,
            transitions: Transitions::default(),
            clip: false,
            clickable: false,
            focusable: false,
            disabled: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            kind: "text",
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            kind: "col",
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            kind: "row",
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn icon(icon: impl Into<IconId>) -> Self {
        Self {
            id: generate_id("icon"),
            kind: "icon",
            content: Content::Icon(icon.into()),
            ..Default::default()
        }
    }

    /// Create an element that cycles through child frames at the given interval.
    /// Every frame shares the content box; only the current one is rendered.
    pub fn frames(children: Vec<Element>, interval: Duration) -> Self {
        Self {
            id: generate_id("frames"),
            kind: "frames",
            content: Content::Frames { children, interval },
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    /// Fixed width and height.
    pub fn size(self, size: u16) -> Self {
        self.width(Size::Fixed(size)).height(Size::Fixed(size))
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    // Flex container
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    // Flex item
    pub fn flex_grow(mut self, flex_grow: u16) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The style in effect, with `style_disabled` layered on top when disabled.
    pub fn effective_style(&self) -> Style {
        match (&self.style_disabled, self.disabled) {
            (Some(disabled), true) => disabled.clone().merged_over(&self.style),
            _ => self.style.clone(),
        }
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Add a child only when one is given.
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
