use std::ops::Range;

use crate::entity::{Entity, EntityKind, Utf16Range};
use crate::error::RichTextError;
use crate::node::Node;
use crate::offsets;

/// An entity that survived clamping, re-indexed to UTF-8 bytes.
#[derive(Debug)]
struct Active<'a> {
    bytes: Range<usize>,
    kind: EntityKind,
    url: Option<&'a str>,
    language: Option<&'a str>,
}

/// Render message text plus its formatting entities into a markup tree.
///
/// Entities may overlap arbitrarily and arrive in any order; the output is
/// deterministic regardless. The text is sliced at every entity boundary
/// into maximal segments with a constant set of covering entities, and each
/// segment is wrapped innermost-first according to
/// [`EntityKind::priority`]. Newlines become explicit [`Node::LineBreak`]s
/// independent of entity structure.
///
/// Out-of-bounds offsets are clamped rather than rejected, so untrusted
/// payloads can never make a preview screen fail to render.
pub fn render(text: &str, entities: &[Entity]) -> Vec<Node> {
    let active = normalize(text, entities);
    if active.is_empty() {
        return split_lines(text);
    }

    // Boundary set: text ends plus every entity start/end. Between two
    // adjacent boundaries the covering-entity set cannot change.
    let mut bounds = Vec::with_capacity(active.len() * 2 + 2);
    bounds.push(0);
    bounds.push(text.len());
    for entity in &active {
        bounds.push(entity.bytes.start);
        bounds.push(entity.bytes.end);
    }
    bounds.sort_unstable();
    bounds.dedup();

    let mut out = Vec::new();
    for pair in bounds.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let mut nodes = split_lines(&text[start..end]);

        // Covering test, not overlap: a segment is only attributed an
        // entity it lies entirely inside.
        let mut covering: Vec<&Active<'_>> = active
            .iter()
            .filter(|e| e.bytes.start <= start && e.bytes.end >= end)
            .collect();
        if covering.is_empty() {
            out.append(&mut nodes);
            continue;
        }

        covering.sort_by(|a, b| {
            (a.kind.priority(), a.kind)
                .cmp(&(b.kind.priority(), b.kind))
                // Same priority and kind: narrower span wraps inner.
                .then_with(|| b.bytes.start.cmp(&a.bytes.start))
                .then_with(|| a.bytes.end.cmp(&b.bytes.end))
                .then_with(|| a.url.cmp(&b.url))
                .then_with(|| a.language.cmp(&b.language))
        });
        for entity in covering {
            nodes = vec![Node::Styled {
                kind: entity.kind,
                url: entity.url.map(str::to_owned),
                language: entity.language.map(str::to_owned),
                children: nodes,
            }];
        }
        out.append(&mut nodes);
    }
    out
}

/// Deserialize a Telegram `entities` JSON array and render it against
/// `text`. This is the form ad-creative preview payloads arrive in.
pub fn render_json(text: &str, entities_json: &str) -> Result<Vec<Node>, RichTextError> {
    let entities: Vec<Entity> = serde_json::from_str(entities_json)?;
    Ok(render(text, &entities))
}

fn normalize<'a>(text: &str, entities: &'a [Entity]) -> Vec<Active<'a>> {
    let len16 = offsets::utf16_len(text);
    let mut active = Vec::with_capacity(entities.len());
    for entity in entities {
        let range = Utf16Range::clamped(entity.offset, entity.length, len16);
        if range.is_empty() {
            if entity.length > 0 {
                tracing::debug!(
                    kind = ?entity.kind,
                    offset = entity.offset,
                    length = entity.length,
                    "dropping entity with no in-bounds span"
                );
            }
            continue;
        }
        if entity.offset != range.start as i64 || entity.length != (range.end - range.start) as i64
        {
            tracing::debug!(
                kind = ?entity.kind,
                offset = entity.offset,
                length = entity.length,
                "clamped out-of-bounds entity"
            );
        }
        active.push(Active {
            bytes: offsets::utf16_to_byte(text, range.start)..offsets::utf16_to_byte(text, range.end),
            kind: entity.kind,
            url: entity.url.as_deref(),
            language: entity.language.as_deref(),
        });
    }
    active
}

/// Split a text run on `\n` into `Text` nodes interleaved with
/// `LineBreak`s. Empty stretches between consecutive newlines produce no
/// `Text` node, but every newline produces its break.
fn split_lines(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(Node::LineBreak);
        }
        if !part.is_empty() {
            nodes.push(Node::text(part));
        }
    }
    nodes
}
