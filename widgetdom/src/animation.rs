//! Frame-to-frame property transitions.
//!
//! Widgets only declare target values and a [`Transitions`](crate::Transitions)
//! config. Each frame the host calls [`AnimationState::update_at`] with the new
//! tree; any property whose target changed starts its own transition, keyed by
//! `(element_id, property)`. Transitions never share a timeline: each one is a
//! function of its own start instant, duration and easing only.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use log::trace;

use crate::element::{walk, Element};
use crate::layout::LayoutResult;
use crate::transitions::{Easing, TransitionConfig};
use crate::types::Color;

/// Which property is being transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    Background,
    Foreground,
    Rotation,
    Height,
}

/// A property value that can be interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    F32(f32),
    U16(u16),
    Color(Color),
}

impl PropertyValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropertyValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            PropertyValue::F32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match self {
            PropertyValue::U16(v) => Some(*v),
            _ => None,
        }
    }
}

/// Snapshot of an element's transitionable target values.
#[derive(Debug, Clone, Default)]
struct ElementSnapshot {
    background: Option<Color>,
    foreground: Option<Color>,
    rotation: Option<f32>,
    height: Option<u16>,
}

/// A single active transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    from: PropertyValue,
    to: PropertyValue,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    fn value_at(&self, now: Instant) -> PropertyValue {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        interpolate(&self.from, &self.to, self.easing.apply(progress))
    }
}

/// Manages animation state across frames.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous frame's target values per element.
    snapshots: HashMap<String, ElementSnapshot>,
    /// Currently active transitions: (element_id, property) -> transition.
    active: HashMap<(String, TransitionProperty), ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
    /// Instant of the first update; frame cycling is measured from here.
    epoch: Option<Instant>,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, all transitions complete instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.active.clear();
        }
    }

    /// Returns true if any transition is still running at `now`.
    pub fn has_active_transitions(&self, now: Instant) -> bool {
        self.active.values().any(|t| !t.is_complete(now))
    }

    /// Update animation state from the current element tree and its layout.
    ///
    /// Detects target changes, starts new transitions, prunes completed ones
    /// and forgets elements that left the tree.
    pub fn update_at(&mut self, root: &Element, layout: &LayoutResult, now: Instant) {
        let first_frame = self.epoch.is_none();
        if first_frame {
            self.epoch = Some(now);
        }

        self.active.retain(|_, transition| !transition.is_complete(now));

        let mut seen = HashSet::new();
        walk(root, &mut |element| {
            seen.insert(element.id.clone());
            self.update_element(element, layout, now, first_frame);
        });
        self.cleanup(&seen);
    }

    fn update_element(
        &mut self,
        element: &Element,
        layout: &LayoutResult,
        now: Instant,
        first_frame: bool,
    ) {
        let id = &element.id;
        let current = Self::snapshot_element(element, layout);
        let transitions = &element.transitions;

        match self.snapshots.get(id).cloned() {
            Some(prev) => {
                self.check_and_start(
                    id,
                    TransitionProperty::Background,
                    prev.background.map(PropertyValue::Color),
                    current.background.map(PropertyValue::Color),
                    transitions.background,
                    now,
                );
                self.check_and_start(
                    id,
                    TransitionProperty::Foreground,
                    prev.foreground.map(PropertyValue::Color),
                    current.foreground.map(PropertyValue::Color),
                    transitions.foreground,
                    now,
                );
                self.check_and_start(
                    id,
                    TransitionProperty::Rotation,
                    prev.rotation.map(PropertyValue::F32),
                    current.rotation.map(PropertyValue::F32),
                    transitions.rotation,
                    now,
                );
                self.check_and_start(
                    id,
                    TransitionProperty::Height,
                    prev.height.map(PropertyValue::U16),
                    current.height.map(PropertyValue::U16),
                    transitions.height,
                    now,
                );
            }
            // Newly mounted after the first frame: expand from nothing
            None if !first_frame => {
                self.check_and_start(
                    id,
                    TransitionProperty::Height,
                    Some(PropertyValue::U16(0)),
                    current.height.map(PropertyValue::U16),
                    transitions.enter_height,
                    now,
                );
            }
            None => {}
        }

        self.snapshots.insert(id.clone(), current);
    }

    fn check_and_start(
        &mut self,
        id: &str,
        property: TransitionProperty,
        prev: Option<PropertyValue>,
        current: Option<PropertyValue>,
        config: Option<TransitionConfig>,
        now: Instant,
    ) {
        let Some(config) = config else { return };
        let Some(prev) = prev else { return };
        let Some(current) = current else { return };

        if prev == current {
            return;
        }

        let key = (id.to_string(), property);

        // Skip if reduced motion is enabled
        if self.reduced_motion {
            self.active.remove(&key);
            return;
        }

        // Retarget from the current interpolated value if already moving
        let from = match self.active.get(&key) {
            Some(existing) => existing.value_at(now),
            None => prev,
        };

        trace!("transition {id}/{property:?}: {from:?} -> {current:?} over {:?}", config.duration);

        self.active.insert(
            key,
            ActiveTransition {
                from,
                to: current,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    fn snapshot_element(element: &Element, layout: &LayoutResult) -> ElementSnapshot {
        let style = element.effective_style();
        ElementSnapshot {
            background: style.background,
            foreground: style.foreground,
            rotation: Some(element.rotation),
            height: layout.get(&element.id).map(|r| r.height),
        }
    }

    /// Interpolated value of a property at `now`.
    /// Returns None if no transition is running for this property.
    pub fn value_at(
        &self,
        element_id: &str,
        property: TransitionProperty,
        now: Instant,
    ) -> Option<PropertyValue> {
        let key = (element_id.to_string(), property);
        let transition = self.active.get(&key)?;
        if transition.is_complete(now) {
            return None;
        }
        Some(transition.value_at(now))
    }

    /// Index of the frame to show for a `Frames` element with `count` frames.
    pub fn current_frame(&self, interval: Duration, count: usize, now: Instant) -> usize {
        if count == 0 || interval.is_zero() {
            return 0;
        }
        let elapsed = self
            .epoch
            .map_or(Duration::ZERO, |epoch| now.saturating_duration_since(epoch));
        (elapsed.as_millis() / interval.as_millis().max(1)) as usize % count
    }

    /// Remove transitions and snapshots for elements no longer in tree.
    fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|(id, _), _| current_ids.contains(id));
    }
}

fn interpolate(from: &PropertyValue, to: &PropertyValue, t: f32) -> PropertyValue {
    match (from, to) {
        (PropertyValue::F32(a), PropertyValue::F32(b)) => PropertyValue::F32(a + (b - a) * t),
        (PropertyValue::U16(a), PropertyValue::U16(b)) => {
            let (a, b) = (*a as f32, *b as f32);
            PropertyValue::U16((a + (b - a) * t).round().clamp(0.0, u16::MAX as f32) as u16)
        }
        (PropertyValue::Color(a), PropertyValue::Color(b)) => {
            // Springs may overshoot; colors stay within their endpoints
            PropertyValue::Color(Color::lerp(a, b, t.clamp(0.0, 1.0)))
        }
        _ => *to, // Mismatched types, just use target
    }
}
