use serde::{Deserialize, Serialize};

/// Formatting annotation kinds understood by the marketplace UI.
///
/// Mirrors the Telegram Bot API `MessageEntity` type names we render.
/// Anything else deserializes as [`EntityKind::Unknown`] and still gets a
/// generic styled wrapper, so new server-side kinds degrade gracefully
/// instead of breaking ad previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    TextLink,
    Spoiler,
    #[serde(other)]
    Unknown,
}

impl EntityKind {
    /// Nesting priority: lower is applied first and so ends up innermost
    /// when several entities cover the same segment. Unknown kinds sort
    /// last, i.e. outermost.
    pub fn priority(self) -> u8 {
        match self {
            EntityKind::Code | EntityKind::Pre => 0,
            EntityKind::Strikethrough => 1,
            EntityKind::Underline => 2,
            EntityKind::Italic => 3,
            EntityKind::Bold => 4,
            EntityKind::TextLink => 5,
            EntityKind::Spoiler => 6,
            EntityKind::Unknown => u8::MAX,
        }
    }
}

/// A single formatting annotation over a UTF-16 code-unit range of message
/// text, in the shape the backend delivers it (Telegram `MessageEntity`).
///
/// `offset` and `length` are kept as raw `i64` because the payload is
/// untrusted; they are clamped against the actual text during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub offset: i64,
    pub length: i64,
    /// Link target, only meaningful for [`EntityKind::TextLink`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source-language hint, only meaningful for [`EntityKind::Pre`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Entity {
    pub fn new(kind: EntityKind, offset: i64, length: i64) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            language: None,
        }
    }

    pub fn text_link(offset: i64, length: i64, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(EntityKind::TextLink, offset, length)
        }
    }

    pub fn pre(offset: i64, length: i64, language: Option<String>) -> Self {
        Self {
            language,
            ..Self::new(EntityKind::Pre, offset, length)
        }
    }
}

/// An entity span clamped into the bounds of a concrete text, still in
/// UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16Range {
    pub start: usize,
    pub end: usize,
}

impl Utf16Range {
    /// Clamp a wire offset/length pair into `[0, len_utf16]`.
    ///
    /// The end is computed from the raw offset, so a negative offset with a
    /// positive length keeps the in-bounds tail of its span. A negative
    /// length or a fully out-of-bounds span collapses to empty.
    pub fn clamped(offset: i64, length: i64, len_utf16: usize) -> Self {
        let limit = len_utf16 as i64;
        let start = offset.clamp(0, limit);
        let end = offset.saturating_add(length.max(0)).clamp(start, limit);
        Self {
            start: start as usize,
            end: end as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
