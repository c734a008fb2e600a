//! Grouping of list items into visual lists.

use medibrief_core::models::block::{Block, InlineSpan};

/// A unit of layout: a maximal run of list items, or any other block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group<'a> {
    List(&'a [Block]),
    Block(&'a Block),
}

impl<'a> Group<'a> {
    /// Inline content of each item when this group is a list.
    pub fn items(&self) -> impl Iterator<Item = &'a [InlineSpan]> {
        let items: &'a [Block] = match *self {
            Group::List(items) => items,
            Group::Block(_) => &[],
        };
        items.iter().filter_map(Block::spans)
    }
}

/// Wrap each maximal run of consecutive `ListItem`s into one [`Group::List`].
pub fn group(blocks: &[Block]) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut cursor = 0;

    while cursor < blocks.len() {
        if matches!(blocks[cursor], Block::ListItem { .. }) {
            let start = cursor;
            while matches!(blocks.get(cursor), Some(Block::ListItem { .. })) {
                cursor += 1;
            }
            groups.push(Group::List(&blocks[start..cursor]));
        } else {
            groups.push(Group::Block(&blocks[cursor]));
            cursor += 1;
        }
    }

    groups
}
