pub mod animation;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::{AnimationState, PropertyValue, TransitionProperty};
pub use element::{find_element, find_path, walk, Content, Element, IconId};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use transitions::{Easing, Spring, TransitionConfig, Transitions};
pub use types::*;
