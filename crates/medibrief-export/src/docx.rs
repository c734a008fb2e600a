use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use medibrief_core::models::block::{Block, InlineSpan};

use crate::error::ExportError;
use crate::layout::{self, Group};
use crate::styles::DocumentStyles;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// Generate a DOCX document from parsed report blocks.
///
/// - `Heading` → Heading 1, glyph kept in front of the title
/// - runs of `ListItem` → bulleted paragraphs
/// - `Callout` → italic paragraph in the callout colour
/// - `EmphasisParagraph` → bold, centered paragraph
/// - `Separator` → centered rule line
/// - `Bold` spans → bold runs, `Code` spans → runs in the code font
pub fn generate_docx(
    blocks: &[Block],
    title: &str,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    build_document(blocks, title, styles)
        .build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// The unpacked document behind [`generate_docx`].
pub fn build_document(blocks: &[Block], title: &str, styles: &DocumentStyles) -> Docx {
    let mut docx = Docx::new()
        .add_style(heading_style(TITLE_STYLE, "title", styles.title_size))
        .add_style(heading_style(HEADING_STYLE, "heading 1", styles.heading_size));

    docx = docx.add_paragraph(
        Paragraph::new()
            .style(TITLE_STYLE)
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(title).fonts(font(&styles.heading_font))),
    );

    for group in layout::group(blocks) {
        match group {
            Group::List(_) => {
                for item in group.items() {
                    docx = docx.add_paragraph(bullet_paragraph(item, styles));
                }
            }
            Group::Block(block) => {
                docx = docx.add_paragraph(block_paragraph(block, styles));
            }
        }
    }

    docx
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn block_paragraph(block: &Block, styles: &DocumentStyles) -> Paragraph {
    match block {
        Block::Heading { icon, text } => {
            let para = Paragraph::new()
                .style(HEADING_STYLE)
                .add_run(
                    Run::new()
                        .add_text(format!("{icon} "))
                        .size(styles.heading_size * 2),
                );
            add_runs(
                para,
                text,
                &styles.heading_font,
                styles.heading_size,
                styles,
                |r| r,
            )
        }
        Block::Callout { text } => {
            let color = styles.callout_color.clone();
            let para = Paragraph::new();
            add_runs(para, text, &styles.body_font, styles.body_size, styles, move |r| {
                r.italic().color(color.clone())
            })
        }
        Block::EmphasisParagraph { text } => {
            let color = styles.emphasis_color.clone();
            let para = Paragraph::new().align(AlignmentType::Center);
            add_runs(para, text, &styles.body_font, styles.body_size, styles, move |r| {
                r.bold().color(color.clone())
            })
        }
        Block::Separator => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text("\u{2500}".repeat(30))),
        Block::ListItem { text } => bullet_paragraph(text, styles),
        Block::Paragraph { text } => add_runs(
            Paragraph::new().align(AlignmentType::Left),
            text,
            &styles.body_font,
            styles.body_size,
            styles,
            |r| r,
        ),
    }
}

fn bullet_paragraph(text: &[InlineSpan], styles: &DocumentStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .fonts(font(&styles.body_font));

    let para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    add_runs(para, text, &styles.body_font, styles.body_size, styles, |r| r)
}

/// Append one run per span at `size_pt`, applying `decorate` to every run.
fn add_runs(
    mut para: Paragraph,
    spans: &[InlineSpan],
    base_font: &str,
    size_pt: usize,
    styles: &DocumentStyles,
    decorate: impl Fn(Run) -> Run,
) -> Paragraph {
    for span in spans {
        let run = match span {
            InlineSpan::PlainText(text) => Run::new().add_text(text).fonts(font(base_font)),
            InlineSpan::Bold(text) => Run::new().add_text(text).bold().fonts(font(base_font)),
            InlineSpan::Code(text) => Run::new().add_text(text).fonts(font(&styles.code_font)),
        };
        para = para.add_run(decorate(run.size(size_pt * 2)));
    }
    para
}

fn font(name: &str) -> RunFonts {
    RunFonts::new().ascii(name).hi_ansi(name)
}
