//! Headless widgets built on `widgetdom`.
//!
//! Widgets are controlled: they turn caller-owned state and configuration
//! into an element tree and register their callbacks in a
//! [`HandlerRegistry`]. They never mutate the state they are given.

pub mod dispatch;
pub mod registry;
pub mod util;
pub mod widgets;

pub use dispatch::{DispatchResult, dispatch};
pub use registry::{Handler, HandlerRegistry, ON_ACTIVATE};
pub use util::{InvertColor, invert_color};
pub use widgets::{ExpandableCard, LoadingButton, ProgressIndicator};
