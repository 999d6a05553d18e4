//! Event dispatch to widget handlers.
//!
//! 1. Ignore anything that is not an activation (left click, Enter, Space)
//! 2. Resolve the target: the event's own target, else hit test the layout
//! 3. Walk up to the nearest clickable element
//! 4. Swallow the event if that element is disabled
//! 5. Invoke its `on_activate` handler once

use log::debug;
use widgetdom::{Element, Event, LayoutResult, find_path, hit_test};

use crate::registry::{HandlerRegistry, ON_ACTIVATE};

/// Result of event dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// No clickable element with a handler took the event.
    NotHandled,
    /// The event reached a disabled element and was consumed without effect.
    Disabled { target: String },
    /// A handler was invoked.
    Handled { target: String },
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchResult::Handled { .. })
    }
}

/// Dispatch an event against the current tree and its layout.
pub fn dispatch(
    root: &Element,
    layout: &LayoutResult,
    registry: &HandlerRegistry,
    event: &Event,
) -> DispatchResult {
    if !event.is_activation() {
        return DispatchResult::NotHandled;
    }

    let hit = match event {
        Event::Click { target: Some(target), .. } | Event::Key { target: Some(target), .. } => {
            target.clone()
        }
        Event::Click { target: None, x, y, .. } => match hit_test(layout, root, *x, *y) {
            Some(id) => id,
            None => {
                debug!("click at ({x}, {y}) hit nothing");
                return DispatchResult::NotHandled;
            }
        },
        Event::Key { target: None, .. } => return DispatchResult::NotHandled,
    };

    let path = find_path(root, &hit);
    let Some(element) = path.iter().rev().find(|e| e.clickable) else {
        debug!("no clickable element at or above {hit}");
        return DispatchResult::NotHandled;
    };
    let target = element.id.clone();

    if element.disabled {
        debug!("{target} is disabled, event swallowed");
        return DispatchResult::Disabled { target };
    }

    match registry.get(&target, ON_ACTIVATE) {
        Some(handler) => {
            debug!("dispatching {ON_ACTIVATE} to {target}");
            handler(event);
            DispatchResult::Handled { target }
        }
        None => DispatchResult::NotHandled,
    }
}
