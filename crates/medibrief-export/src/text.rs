//! Plain-text rendering, used for `.txt` downloads, the clipboard and share
//! payloads. Inline markup is dropped; structure is kept with bullets, blank
//! lines before headings, and a rule line for separators.

use medibrief_core::models::block::{Block, spans_to_plain};

use crate::layout::{self, Group};

const BULLET: &str = "\u{2022}";

const RULE_WIDTH: usize = 40;

pub fn render_text(blocks: &[Block]) -> String {
    let mut out = String::new();

    for group in layout::group(blocks) {
        match group {
            Group::List(_) => {
                for item in group.items() {
                    out.push_str(BULLET);
                    out.push(' ');
                    out.push_str(&spans_to_plain(item));
                    out.push('\n');
                }
            }
            Group::Block(Block::Heading { icon, text }) => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(icon);
                out.push(' ');
                out.push_str(&spans_to_plain(text));
                out.push('\n');
            }
            Group::Block(Block::Separator) => {
                out.push_str(&"-".repeat(RULE_WIDTH));
                out.push('\n');
            }
            Group::Block(block) => {
                out.push_str(&block.plain_text());
                out.push('\n');
            }
        }
    }

    out
}
