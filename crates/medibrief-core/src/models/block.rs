use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A fragment of a line tagged with its inline formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
#[ts(export)]
pub enum InlineSpan {
    PlainText(String),
    Bold(String),
    Code(String),
}

impl InlineSpan {
    /// The span's text with its delimiters already removed.
    pub fn as_str(&self) -> &str {
        match self {
            InlineSpan::PlainText(s) | InlineSpan::Bold(s) | InlineSpan::Code(s) => s,
        }
    }
}

/// One renderable unit of a report, derived from a single input line.
///
/// Consecutive `ListItem`s form one visual list; grouping them is left to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Block {
    Heading { icon: String, text: Vec<InlineSpan> },
    ListItem { text: Vec<InlineSpan> },
    /// The disclaimer / warning line.
    Callout { text: Vec<InlineSpan> },
    /// The empathetic closing line.
    EmphasisParagraph { text: Vec<InlineSpan> },
    Paragraph { text: Vec<InlineSpan> },
    Separator,
}

impl Block {
    /// Inline content of the block, `None` for `Separator`.
    pub fn spans(&self) -> Option<&[InlineSpan]> {
        match self {
            Block::Heading { text, .. }
            | Block::ListItem { text }
            | Block::Callout { text }
            | Block::EmphasisParagraph { text }
            | Block::Paragraph { text } => Some(text),
            Block::Separator => None,
        }
    }

    /// Concatenated span text without any inline markup.
    pub fn plain_text(&self) -> String {
        self.spans().map(spans_to_plain).unwrap_or_default()
    }
}

/// Join spans into a single unformatted string.
pub fn spans_to_plain(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::as_str).collect()
}
