use std::fmt;
use std::time::Duration;

/// Opaque icon handle, resolved by the host platform's resource system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId(String);

impl IconId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for IconId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    Icon(IconId),
    /// Animated frames - cycles through children at the specified interval.
    /// Every frame is laid out over the same content box; only the current one is rendered.
    Frames {
        children: Vec<super::Element>,
        interval: Duration,
    },
}

impl Content {
    /// Child elements that are part of the tree, including every frame.
    pub fn children(&self) -> &[super::Element] {
        match self {
            Content::Children(children) | Content::Frames { children, .. } => children,
            _ => &[],
        }
    }
}
