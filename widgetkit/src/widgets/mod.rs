//! Built-in widgets.
//!
//! Each widget is a builder that produces a `widgetdom` [`Element`](widgetdom::Element)
//! and registers its callbacks with the [`HandlerRegistry`](crate::HandlerRegistry)
//! passed to `build`. Element ids are derived from the widget id so hosts and
//! tests can address parts directly (`{id}-header`, `{id}-chevron`, ...).

pub mod expandable_card;
pub mod loading_button;
pub mod progress;

pub use expandable_card::ExpandableCard;
pub use loading_button::LoadingButton;
pub use progress::ProgressIndicator;
