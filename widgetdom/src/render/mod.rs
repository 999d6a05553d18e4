//! Textual rendering of a resolved frame.
//!
//! The outline lists every visible element, one per line, indented by depth,
//! with layout and the animated values in effect at the given instant.

use std::fmt::Write;
use std::time::Instant;

use crate::animation::{AnimationState, TransitionProperty};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::types::Color;

/// Visual values of one element after applying running transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub rotation: f32,
    pub height: Option<u16>,
}

/// Resolve an element's visual values at `now`.
pub fn resolve(
    element: &Element,
    layout: &LayoutResult,
    animation: &AnimationState,
    now: Instant,
) -> Resolved {
    let style = element.effective_style();
    let id = element.id.as_str();
    let color = |property, target: Option<Color>| {
        animation
            .value_at(id, property, now)
            .and_then(|v| v.as_color())
            .or(target)
    };

    Resolved {
        background: color(TransitionProperty::Background, style.background),
        foreground: color(TransitionProperty::Foreground, style.foreground),
        rotation: animation
            .value_at(id, TransitionProperty::Rotation, now)
            .and_then(|v| v.as_f32())
            .unwrap_or(element.rotation),
        height: animation
            .value_at(id, TransitionProperty::Height, now)
            .and_then(|v| v.as_u16())
            .or_else(|| layout.get(id).map(|r| r.height)),
    }
}

/// Render the tree as an indented outline.
pub fn outline(
    root: &Element,
    layout: &LayoutResult,
    animation: &AnimationState,
    now: Instant,
) -> String {
    let mut out = String::new();
    outline_element(root, layout, animation, now, 0, None, &mut out);
    out
}

fn outline_element(
    element: &Element,
    layout: &LayoutResult,
    animation: &AnimationState,
    now: Instant,
    depth: usize,
    clip: Option<Rect>,
    out: &mut String,
) {
    let rect = layout.get(&element.id).copied();

    // Skip elements entirely outside an ancestor's clip
    if let (Some(clip), Some(rect)) = (clip, rect) {
        if rect.y >= clip.bottom() {
            return;
        }
    }

    let resolved = resolve(element, layout, animation, now);
    let _ = write!(out, "{:indent$}{}#{}", "", element.kind, element.id, indent = depth * 2);

    if let Some(rect) = rect {
        let height = resolved.height.unwrap_or(rect.height);
        let _ = write!(out, " [{},{} {}x{}]", rect.x, rect.y, rect.width, height);
    }
    if let Some(bg) = resolved.background {
        let _ = write!(out, " bg={}", bg.to_hex());
    }
    if let Some(fg) = resolved.foreground {
        let _ = write!(out, " fg={}", fg.to_hex());
    }
    if resolved.rotation != 0.0 {
        let _ = write!(out, " rot={:.0}", resolved.rotation);
    }
    if let Some(border) = element.style.border {
        let _ = write!(out, " border={}:{}", border.width, border.color.to_hex());
    }
    if let Some(size) = element.style.text_style.size {
        let _ = write!(out, " size={size}");
    }
    if element.disabled {
        out.push_str(" disabled");
    } else if element.clickable {
        out.push_str(" clickable");
    }
    match &element.content {
        Content::Text(text) => {
            let _ = write!(out, " {text:?}");
        }
        Content::Icon(icon) => {
            let _ = write!(out, " icon={icon}");
        }
        _ => {}
    }
    out.push('\n');

    // Tighten the clip to this element's animated bounds
    let child_clip = match (element.clip, rect) {
        (true, Some(rect)) => {
            let height = resolved.height.unwrap_or(rect.height);
            let visible = Rect::new(rect.x, rect.y, rect.width, height);
            Some(clip.map_or(visible, |outer| {
                let room = outer.bottom().saturating_sub(visible.y);
                Rect::new(visible.x, visible.y, visible.width, visible.height.min(room))
            }))
        }
        _ => clip,
    };

    match &element.content {
        Content::Children(children) => {
            for child in children {
                outline_element(child, layout, animation, now, depth + 1, child_clip, out);
            }
        }
        Content::Frames { children, interval } => {
            let index = animation.current_frame(*interval, children.len(), now);
            if let Some(frame) = children.get(index) {
                outline_element(frame, layout, animation, now, depth + 1, child_clip, out);
            }
        }
        _ => {}
    }
}
