//! Newsletter item model.
//!
//! # Responsibility
//! - Define the closed set of content kinds a newsletter can carry.
//! - Provide the one-line human-readable rendering shared with persistence.
//!
//! # Invariants
//! - Every `Item` is exactly one of `Text` or `Picture`.
//! - Items are plain owned values; cloning never shares state.
//! - `render()` never emits a trailing newline.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Content kind of an `Item`, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Free-form text note.
    Text,
    /// Reference to a picture location.
    Picture,
}

impl ItemKind {
    /// Variant tag used in both rendered and persisted form.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Picture => "Picture",
        }
    }

    /// Resolves a variant tag. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Text" => Some(Self::Text),
            "Picture" => Some(Self::Picture),
            _ => None,
        }
    }
}

/// One piece of newsletter content.
///
/// Serialized as `{"type": "text", "content": ...}` or
/// `{"type": "picture", "location": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    /// Text note body.
    Text { content: String },
    /// Picture path or URL. Not validated.
    Picture { location: String },
}

impl Item {
    /// Creates a text note.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Creates a picture reference.
    pub fn picture(location: impl Into<String>) -> Self {
        Self::Picture {
            location: location.into(),
        }
    }

    /// Builds the item variant selected by `kind` around `value`.
    pub fn from_parts(kind: ItemKind, value: impl Into<String>) -> Self {
        match kind {
            ItemKind::Text => Self::text(value),
            ItemKind::Picture => Self::picture(value),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Text { .. } => ItemKind::Text,
            Self::Picture { .. } => ItemKind::Picture,
        }
    }

    /// Returns the payload: note body for `Text`, location for `Picture`.
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } => content,
            Self::Picture { location } => location,
        }
    }

    /// Renders `<Tag>:<content>` without a line terminator.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind().tag(), self.content())
    }
}
