use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use widgetdom::{Element, Event, Key, LayoutResult, Rect, find_element, layout, walk};
use widgetkit::{DispatchResult, HandlerRegistry, LoadingButton, ON_ACTIVATE, dispatch};

fn render(loading: bool, clicks: &Arc<AtomicUsize>) -> (Element, LayoutResult, HandlerRegistry) {
    let registry = HandlerRegistry::new();
    let clicks = clicks.clone();
    let root = LoadingButton::new()
        .id("submit")
        .label("Submit Form")
        .loading(loading)
        .on_click(move || {
            clicks.fetch_add(1, Ordering::SeqCst);
        })
        .build(&registry);
    let layout = layout(&root, Rect::new(0, 0, 40, 5));
    (root, layout, registry)
}

fn has_progress(root: &Element) -> bool {
    let mut found = false;
    walk(root, &mut |e| {
        if e.get_data("role").map(String::as_str) == Some("progress") {
            found = true;
        }
    });
    found
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_click_when_idle_invokes_once() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, layout, registry) = render(false, &clicks);

    let result = dispatch(&root, &layout, &registry, &Event::click_on("submit"));

    assert_eq!(result, DispatchResult::Handled { target: "submit".into() });
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_click_when_loading_is_swallowed() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, layout, registry) = render(true, &clicks);

    let result = dispatch(&root, &layout, &registry, &Event::click_on("submit"));

    assert_eq!(result, DispatchResult::Disabled { target: "submit".into() });
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_handler_rechecks_loading_flag() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (_root, _layout, registry) = render(true, &clicks);

    let handler = registry.get("submit", ON_ACTIVATE).unwrap();
    handler(&Event::click_on("submit"));

    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_each_activation_invokes_once() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, layout, registry) = render(false, &clicks);

    for _ in 0..3 {
        dispatch(&root, &layout, &registry, &Event::click_on("submit"));
    }

    assert_eq!(clicks.load(Ordering::SeqCst), 3);
}

#[test]
fn test_keyboard_activation() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, layout, registry) = render(false, &clicks);

    dispatch(&root, &layout, &registry, &Event::key_on("submit", Key::Enter));
    dispatch(&root, &layout, &registry, &Event::key_on("submit", Key::Char(' ')));
    let other = dispatch(&root, &layout, &registry, &Event::key_on("submit", Key::Char('x')));

    assert_eq!(other, DispatchResult::NotHandled);
    assert_eq!(clicks.load(Ordering::SeqCst), 2);
}

#[test]
fn test_tap_on_label_resolves_to_button() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, layout, registry) = render(false, &clicks);

    let label = layout["submit-content"];
    let result = dispatch(&root, &layout, &registry, &Event::click_at(label.x, label.y));

    assert!(result.is_handled());
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_tap_on_spinner_is_swallowed() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, layout, registry) = render(true, &clicks);

    let spinner = layout["submit-progress"];
    let result = dispatch(&root, &layout, &registry, &Event::click_at(spinner.x, spinner.y));

    assert_eq!(result, DispatchResult::Disabled { target: "submit".into() });
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Content Slot
// ============================================================================

#[test]
fn test_idle_shows_content_not_progress() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, _, _) = render(false, &clicks);

    let content = find_element(&root, "submit-content").unwrap();
    assert_eq!(content.text_content(), Some("Submit Form"));
    assert!(!has_progress(&root));
    assert!(!root.disabled);
    assert!(root.focusable);
}

#[test]
fn test_loading_shows_progress_not_content() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (root, _, _) = render(true, &clicks);

    assert!(find_element(&root, "submit-content").is_none());
    assert!(find_element(&root, "submit-progress").is_some());
    assert!(has_progress(&root));
    assert!(root.disabled);
    assert!(!root.focusable);
}

#[test]
fn test_custom_content_is_restored() {
    let registry = HandlerRegistry::new();
    let build = |loading| {
        LoadingButton::new()
            .id("save")
            .content(Element::row().id("custom").child(Element::text("Save")))
            .loading(loading)
            .build(&registry)
    };

    assert!(find_element(&build(true), "custom").is_none());
    assert!(find_element(&build(false), "custom").is_some());
}

#[test]
fn test_loading_uses_disabled_style() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let (idle, _, _) = render(false, &clicks);
    let (busy, _, _) = render(true, &clicks);

    assert_ne!(
        idle.effective_style().background,
        busy.effective_style().background
    );
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn test_click_load_click_reset_invokes_once() {
    let clicks = Arc::new(AtomicUsize::new(0));

    // Idle: the click goes through
    let (root, layout, registry) = render(false, &clicks);
    dispatch(&root, &layout, &registry, &Event::click_on("submit"));

    // Host flips the flag immediately; the second click is a no-op
    let (root, layout, registry) = render(true, &clicks);
    dispatch(&root, &layout, &registry, &Event::click_on("submit"));

    // Processing finishes
    let (root, _, _) = render(false, &clicks);

    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(find_element(&root, "submit-content").is_some());
}
