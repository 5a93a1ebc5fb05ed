//! Rich-text entity rendering for the telemart mini-app.
//!
//! The marketplace backend describes an ad creative as a flat string plus
//! Telegram-style formatting entities: UTF-16 code-unit offset/length pairs
//! that may overlap or nest arbitrarily and arrive in no particular order.
//! [`render`] turns that into a properly nested markup tree which the UI
//! layer maps to concrete markup (bold runs, links, spoilers, ...).
//!
//! The renderer is pure and total: malformed entities are clamped rather
//! than rejected, unknown entity kinds fall back to a generic styled
//! wrapper, and the output always reproduces the input text.

mod entity;
mod error;
mod node;
mod offsets;
mod render;

pub use entity::{Entity, EntityKind, Utf16Range};
pub use error::RichTextError;
pub use node::Node;
pub use offsets::{byte_to_utf16, utf16_len, utf16_to_byte};
pub use render::{render, render_json};
