//! medibrief-markup
//!
//! Line-oriented parser for the markdown subset the report model writes:
//! glyph-led bold headings, `-` bullets, `---` rules, a warning callout, an
//! encouraging closing line, and `**bold**` / `` `code` `` inline spans.
//!
//! Parsing is total. Any string produces a block sequence; malformed markup
//! degrades to plain paragraphs and literal text.

pub mod block;
pub mod glyphs;
pub mod inline;

use std::sync::LazyLock;

use medibrief_core::models::block::Block;

pub use block::ReportParser;
pub use glyphs::{GlyphEntry, GlyphRole, GlyphSet};
pub use inline::parse_inline;

static DEFAULT_PARSER: LazyLock<ReportParser> = LazyLock::new(ReportParser::default);

/// Parse report text using the default glyph set, which recognizes the
/// headings of every report template.
pub fn parse(text: &str) -> Vec<Block> {
    DEFAULT_PARSER.parse(text)
}
