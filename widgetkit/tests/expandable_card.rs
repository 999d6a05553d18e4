use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use widgetdom::render::resolve;
use widgetdom::{
    AnimationState, Color, Element, Event, LayoutResult, PropertyValue, Rect, TextStyle,
    TransitionProperty, find_element, layout,
};
use widgetkit::{DispatchResult, ExpandableCard, HandlerRegistry, dispatch};

type Calls = Arc<Mutex<Vec<bool>>>;

fn card(expanded: bool, calls: &Calls) -> ExpandableCard {
    let calls = calls.clone();
    ExpandableCard::new()
        .id("card")
        .heading("Details")
        .header_height(3)
        .value_text("42")
        .expanded(expanded)
        .on_toggle(move |current| calls.lock().unwrap().push(current))
        .child(Element::text("Expanded State").id("body-text"))
}

fn render(card: ExpandableCard) -> (Element, LayoutResult, HandlerRegistry) {
    let registry = HandlerRegistry::new();
    let root = card.build(&registry);
    let layout = layout(&root, Rect::new(0, 0, 40, 20));
    (root, layout, registry)
}

fn color_at(animation: &AnimationState, id: &str, now: Instant) -> Option<Color> {
    animation
        .value_at(id, TransitionProperty::Foreground, now)
        .and_then(|v| v.as_color())
}

// ============================================================================
// Toggle Requests
// ============================================================================

#[test]
fn test_header_click_reports_current_state() {
    let calls = Calls::default();

    let (root, layout, registry) = render(card(false, &calls));
    let result = dispatch(&root, &layout, &registry, &Event::click_on("card-header"));
    assert_eq!(result, DispatchResult::Handled { target: "card-header".into() });

    let (root, layout, registry) = render(card(true, &calls));
    dispatch(&root, &layout, &registry, &Event::click_on("card-header"));

    assert_eq!(*calls.lock().unwrap(), vec![false, true]);
}

#[test]
fn test_chevron_click_fires_once() {
    let calls = Calls::default();
    let (root, layout, registry) = render(card(false, &calls));

    let result = dispatch(&root, &layout, &registry, &Event::click_on("card-chevron"));

    assert_eq!(result, DispatchResult::Handled { target: "card-chevron".into() });
    assert_eq!(*calls.lock().unwrap(), vec![false]);
}

#[test]
fn test_tap_anywhere_on_header() {
    let calls = Calls::default();
    let (root, layout, registry) = render(card(false, &calls));

    let heading = layout["card-heading"];
    let chevron = layout["card-chevron"];
    let header = layout["card-header"];

    dispatch(&root, &layout, &registry, &Event::click_at(heading.x, heading.y));
    dispatch(&root, &layout, &registry, &Event::click_at(chevron.x, chevron.y));
    dispatch(&root, &layout, &registry, &Event::click_at(header.x, header.y));

    assert_eq!(*calls.lock().unwrap(), vec![false, false, false]);
}

#[test]
fn test_body_click_does_not_toggle() {
    let calls = Calls::default();
    let (root, layout, registry) = render(card(true, &calls));

    let body = layout["body-text"];
    let result = dispatch(&root, &layout, &registry, &Event::click_at(body.x, body.y));

    assert_eq!(result, DispatchResult::NotHandled);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_card_never_flips_its_own_state() {
    let calls = Calls::default();
    let (root, layout, registry) = render(card(false, &calls));

    dispatch(&root, &layout, &registry, &Event::click_on("card-header"));

    assert!(find_element(&root, "card-body").is_none());
    assert_eq!(root.get_data("expanded").map(String::as_str), Some("false"));
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_body_present_iff_expanded() {
    let calls = Calls::default();

    let (collapsed, _, _) = render(card(false, &calls));
    assert!(find_element(&collapsed, "card-body").is_none());
    assert!(find_element(&collapsed, "body-text").is_none());

    let (expanded, _, _) = render(card(true, &calls));
    assert!(find_element(&expanded, "card-body").is_some());
    assert!(find_element(&expanded, "body-text").is_some());
}

#[test]
fn test_no_icon_without_icon_id() {
    let calls = Calls::default();
    let (root, _, _) = render(card(false, &calls));

    assert!(find_element(&root, "card-icon").is_none());
}

#[test]
fn test_icon_with_description() {
    let calls = Calls::default();
    let (root, _, _) = render(card(false, &calls).icon("ic_wallet").icon_size(2));

    let icon = find_element(&root, "card-icon").unwrap();
    assert_eq!(icon.get_data("description").map(String::as_str), Some("Details icon"));
}

#[test]
fn test_blank_value_text_renders_nothing() {
    let calls = Calls::default();

    for blank in ["", "   "] {
        let (root, _, _) = render(card(false, &calls).value_text(blank));
        assert!(find_element(&root, "card-value").is_none(), "{blank:?}");
    }

    let (root, _, _) = render(card(false, &calls));
    let value = find_element(&root, "card-value").unwrap();
    assert_eq!(value.text_content(), Some("42"));
}

#[test]
fn test_heading_and_value_text_sizes() {
    let calls = Calls::default();
    let (root, _, _) = render(card(false, &calls));

    let size = |id: &str| find_element(&root, id).unwrap().style.text_style.size;
    assert_eq!(size("card-heading"), Some(16));
    assert_eq!(size("card-value"), Some(14));

    let (root, _, _) = render(card(false, &calls).heading_text_style(TextStyle::new().size(20)));
    let heading = find_element(&root, "card-heading").unwrap();
    assert_eq!(heading.style.text_style.size, Some(20));
}

#[test]
fn test_border_is_independent_of_expand_state() {
    let calls = Calls::default();

    for expanded in [false, true] {
        let (with_border, _, _) = render(card(expanded, &calls));
        assert_eq!(with_border.style.border.map(|b| b.width), Some(1));

        let (without, _, _) = render(card(expanded, &calls).border(false));
        assert!(without.style.border.is_none());
    }
}

#[test]
fn test_chevron_rotation_target() {
    let calls = Calls::default();

    let (collapsed, _, _) = render(card(false, &calls));
    let (expanded, _, _) = render(card(true, &calls));

    assert_eq!(find_element(&collapsed, "card-chevron").unwrap().rotation, 0.0);
    assert_eq!(find_element(&expanded, "card-chevron").unwrap().rotation, 180.0);
}

// ============================================================================
// Animation
// ============================================================================

/// Render collapsed at `t0`, then expanded at the same instant.
fn expand_at(t0: Instant) -> (Element, LayoutResult, AnimationState) {
    let calls = Calls::default();
    let mut animation = AnimationState::new();

    let (root, layout, _) = render(card(false, &calls));
    animation.update_at(&root, &layout, t0);

    let (root, layout, _) = render(card(true, &calls));
    animation.update_at(&root, &layout, t0);

    (root, layout, animation)
}

#[test]
fn test_header_background_finishes_while_chevron_rotates() {
    let t0 = Instant::now();
    let (root, layout, animation) = expand_at(t0);
    let header = find_element(&root, "card-header").unwrap();

    let mid = resolve(header, &layout, &animation, t0 + Duration::from_millis(100));
    let bg = mid.background.unwrap();
    assert_ne!(bg, Color::WHITE);
    assert_ne!(bg, Color::BLACK);

    let t = t0 + Duration::from_millis(250);
    assert_eq!(resolve(header, &layout, &animation, t).background, Some(Color::BLACK));

    let rotation = animation
        .value_at("card-chevron", TransitionProperty::Rotation, t)
        .and_then(|v| v.as_f32())
        .unwrap();
    assert!(rotation > 0.0 && rotation < 180.0);
}

#[test]
fn test_colors_reach_expanded_targets() {
    let t0 = Instant::now();
    let (root, layout, animation) = expand_at(t0);

    let mid = t0 + Duration::from_millis(100);
    for id in ["card-chevron", "card-value"] {
        let color = color_at(&animation, id, mid).unwrap();
        assert!(!color.approx_eq(&Color::WHITE, 0.001), "{id}");
    }

    let done = t0 + Duration::from_millis(750);
    for id in ["card-heading", "card-chevron", "card-value"] {
        assert!(color_at(&animation, id, done).is_none(), "{id}");
        let element = find_element(&root, id).unwrap();
        let resolved = resolve(element, &layout, &animation, done);
        assert_eq!(resolved.foreground, Some(Color::WHITE), "{id}");
    }
    let chevron = find_element(&root, "card-chevron").unwrap();
    assert_eq!(resolve(chevron, &layout, &animation, done).rotation, 180.0);
}

#[test]
fn test_heading_color_uses_faster_default_motion() {
    let t0 = Instant::now();
    let (_, _, animation) = expand_at(t0);

    let t = t0 + Duration::from_millis(300);
    assert!(color_at(&animation, "card-heading", t).is_none());
    assert!(color_at(&animation, "card-chevron", t).is_some());
}

#[test]
fn test_body_expands_from_zero_and_container_springs() {
    let t0 = Instant::now();
    let (_, layout, animation) = expand_at(t0);

    assert_eq!(
        animation.value_at("card-body", TransitionProperty::Height, t0),
        Some(PropertyValue::U16(0))
    );
    assert!(animation
        .value_at("card", TransitionProperty::Height, t0 + Duration::from_millis(20))
        .is_some());

    let settled = t0 + Duration::from_secs(2);
    assert!(animation.value_at("card", TransitionProperty::Height, settled).is_none());
    assert!(animation.value_at("card-body", TransitionProperty::Height, settled).is_none());
    assert!(!animation.has_active_transitions(settled));
    assert!(layout["card"].height > layout["card-header"].height);
}

#[test]
fn test_collapse_unmounts_body_immediately() {
    let calls = Calls::default();
    let t0 = Instant::now();
    let mut animation = AnimationState::new();

    let (root, layout, _) = render(card(true, &calls));
    animation.update_at(&root, &layout, t0);
    let expanded_height = layout["card"].height;

    let (root, layout, _) = render(card(false, &calls));
    animation.update_at(&root, &layout, t0 + Duration::from_secs(1));

    assert!(find_element(&root, "card-body").is_none());
    let height = animation
        .value_at("card", TransitionProperty::Height, t0 + Duration::from_secs(1))
        .and_then(|v| v.as_u16())
        .unwrap();
    assert_eq!(height, expanded_height);
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn test_click_header_then_host_expands() {
    let calls = Calls::default();
    let mut expanded = false;

    let (root, layout, registry) = render(card(expanded, &calls));
    dispatch(&root, &layout, &registry, &Event::click_on("card-header"));

    let requested = calls.lock().unwrap().pop().unwrap();
    assert!(!requested);
    expanded = !requested;

    let (root, _, _) = render(card(expanded, &calls));
    assert!(find_element(&root, "card-body").is_some());
}
