use serde::Serialize;
use tera::{Context, Tera};

use medibrief_core::models::block::{Block, InlineSpan};

use crate::error::ExportError;
use crate::layout::{self, Group};

const TEMPLATE_NAME: &str = "report.html";

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
body { font-family: system-ui, sans-serif; color: #475569; max-width: 56rem; margin: 2rem auto; line-height: 1.6; }
h1 { text-align: center; color: #1e293b; }
h2.section { color: #1e293b; margin-top: 1.5rem; }
p.callout { font-size: 0.875rem; color: #b45309; background: #fffbeb; padding: 1rem; border-radius: 0.375rem; }
p.closing { text-align: center; font-weight: 600; color: #0f766e; margin-top: 2rem; }
hr { border: 0; border-top: 1px solid #e2e8f0; margin: 1.5rem 0; }
</style>
</head>
<body>
<article class="report">
<h1>{{ title }}</h1>
{% for entry in blocks -%}
{% if entry.kind == "heading" -%}
<h2 class="section"><span class="icon">{{ entry.icon }}</span> {{ entry.html | safe }}</h2>
{% elif entry.kind == "list" -%}
<ul>
{% for item in entry.items %}<li>{{ item | safe }}</li>
{% endfor -%}
</ul>
{% elif entry.kind == "callout" -%}
<p class="callout"><em>{{ entry.html | safe }}</em></p>
{% elif entry.kind == "emphasis" -%}
<p class="closing">{{ entry.html | safe }}</p>
{% elif entry.kind == "separator" -%}
{% if show_separators %}<hr>
{% endif -%}
{% else -%}
<p>{{ entry.html | safe }}</p>
{% endif -%}
{% endfor -%}
</article>
</body>
</html>
"#;

/// Options for the HTML screen rendering.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub title: String,
    /// Renderers may suppress rule lines; on by default.
    pub show_separators: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Your AI Medical Report".to_string(),
            show_separators: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct BlockView {
    kind: &'static str,
    icon: String,
    /// Pre-escaped inline HTML.
    html: String,
    items: Vec<String>,
}

impl BlockView {
    fn new(kind: &'static str, html: String) -> Self {
        Self {
            kind,
            icon: String::new(),
            html,
            items: Vec::new(),
        }
    }
}

/// Render a block sequence as a standalone HTML page.
///
/// All report text is HTML-escaped; only the markup generated here is
/// emitted raw.
pub fn render_html(blocks: &[Block], options: &HtmlOptions) -> Result<String, ExportError> {
    let views: Vec<BlockView> = layout::group(blocks)
        .into_iter()
        .map(|group| match group {
            Group::List(_) => BlockView {
                items: group.items().map(spans_to_html).collect(),
                ..BlockView::new("list", String::new())
            },
            Group::Block(Block::Heading { icon, text }) => BlockView {
                icon: icon.clone(),
                ..BlockView::new("heading", spans_to_html(text))
            },
            Group::Block(Block::Callout { text }) => BlockView::new("callout", spans_to_html(text)),
            Group::Block(Block::EmphasisParagraph { text }) => {
                BlockView::new("emphasis", spans_to_html(text))
            }
            Group::Block(Block::Separator) => BlockView::new("separator", String::new()),
            Group::Block(block) => {
                BlockView::new("paragraph", spans_to_html(block.spans().unwrap_or_default()))
            }
        })
        .collect();

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, REPORT_TEMPLATE)?;

    let mut context = Context::new();
    context.insert("title", &options.title);
    context.insert("show_separators", &options.show_separators);
    context.insert("blocks", &views);

    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

fn spans_to_html(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::PlainText(text) => tera::escape_html(text),
            InlineSpan::Bold(text) => format!("<strong>{}</strong>", tera::escape_html(text)),
            InlineSpan::Code(text) => format!("<code>{}</code>", tera::escape_html(text)),
        })
        .collect()
}
