use medibrief_core::models::block::Block;

use crate::glyphs::{GlyphRole, GlyphSet};
use crate::inline::{parse_inline, push_span};

const BOLD: &str = "**";

/// Turns report text into an ordered sequence of [`Block`]s.
///
/// Holds only its glyph configuration, so one parser can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    glyphs: GlyphSet,
}

impl ReportParser {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    /// Parse `text` line by line.
    ///
    /// Blocks come out in line order, one per non-blank line. Each line is
    /// classified on its trimmed form, first match wins:
    ///
    /// 1. a line of three or more `-` only is a [`Block::Separator`];
    /// 2. a line starting with `-` begins a run of list items, each carrying
    ///    the text after its first `-`;
    /// 3. a heading glyph followed by `**title**` is a [`Block::Heading`];
    /// 4. a leading warning glyph makes a [`Block::Callout`];
    /// 5. an empowerment glyph anywhere makes a [`Block::EmphasisParagraph`];
    /// 6. blank lines produce nothing;
    /// 7. anything else is a [`Block::Paragraph`].
    ///
    /// Callouts, emphasis lines and paragraphs carry the line as written,
    /// surrounding whitespace included; only a trailing `\r` is dropped.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let raw_lines: Vec<&str> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let lines: Vec<&str> = raw_lines.iter().map(|l| l.trim()).collect();
        let mut blocks = Vec::new();
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = lines[cursor];

            if is_separator(line) {
                blocks.push(Block::Separator);
                cursor += 1;
                continue;
            }

            if is_bullet(line) {
                while let Some(item) = lines.get(cursor).copied().filter(|l| is_bullet(l)) {
                    blocks.push(list_item(item));
                    cursor += 1;
                }
                continue;
            }

            if let Some(block) = self.classify(line, raw_lines[cursor]) {
                blocks.push(block);
            }
            cursor += 1;
        }

        blocks
    }

    /// `line` is the trimmed form used for matching; `raw` is emitted.
    fn classify(&self, line: &str, raw: &str) -> Option<Block> {
        if let Some(heading) = self.heading(line) {
            return Some(heading);
        }
        if self.glyphs.match_prefix(GlyphRole::Warning, line).is_some() {
            return Some(Block::Callout {
                text: parse_inline(raw),
            });
        }
        if self.glyphs.occurs_in(GlyphRole::Empowerment, line) {
            return Some(Block::EmphasisParagraph {
                text: parse_inline(raw),
            });
        }
        if line.is_empty() {
            return None;
        }
        Some(Block::Paragraph {
            text: parse_inline(raw),
        })
    }

    /// `<glyph> **title**[rest]`. The title's bold markers are consumed by
    /// the heading itself; text after the closing marker is kept.
    fn heading(&self, line: &str) -> Option<Block> {
        let (icon, consumed) = self.glyphs.match_prefix(GlyphRole::Heading, line)?;
        let after_icon = line[consumed..].trim_start();
        let inner = after_icon.strip_prefix(BOLD)?;
        let end = inner.find(BOLD).filter(|&end| end > 0)?;

        let mut text = Vec::new();
        for span in parse_inline(&inner[..end]) {
            push_span(&mut text, span);
        }
        for span in parse_inline(&inner[end + BOLD.len()..]) {
            push_span(&mut text, span);
        }

        Some(Block::Heading {
            icon: icon.to_string(),
            text,
        })
    }
}

/// Three or more dashes and nothing else.
fn is_separator(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

fn is_bullet(line: &str) -> bool {
    line.starts_with('-') && !is_separator(line)
}

fn list_item(line: &str) -> Block {
    let body = line.strip_prefix('-').unwrap_or(line).trim();
    Block::ListItem {
        text: parse_inline(body),
    }
}

