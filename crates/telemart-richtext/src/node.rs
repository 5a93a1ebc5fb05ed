use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// One node of the rendered markup tree.
///
/// The tree is what the mini-app UI consumes: `Text` becomes literal
/// characters, `LineBreak` an explicit break, and `Styled` a formatted run
/// whose children nest recursively. Serialization is internally tagged so
/// the tree can cross the JS boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Text {
        text: String,
    },
    LineBreak,
    Styled {
        kind: EntityKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text { text: value.into() }
    }

    pub fn styled(kind: EntityKind, children: Vec<Node>) -> Self {
        Node::Styled {
            kind,
            url: None,
            language: None,
            children,
        }
    }

    /// Concatenated `Text` leaf content of a tree slice, depth first.
    /// Line breaks contribute nothing.
    pub fn plain_text(nodes: &[Node]) -> String {
        let mut out = String::new();
        Self::collect_text(nodes, &mut out);
        out
    }

    fn collect_text(nodes: &[Node], out: &mut String) {
        for node in nodes {
            match node {
                Node::Text { text } => out.push_str(text),
                Node::LineBreak => {}
                Node::Styled { children, .. } => Self::collect_text(children, out),
            }
        }
    }
}
