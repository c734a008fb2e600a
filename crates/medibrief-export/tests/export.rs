use medibrief_core::models::block::{Block, InlineSpan};
use medibrief_core::models::template::ReportTemplate;
use medibrief_export::error::ExportError;
use medibrief_export::render::{HtmlOptions, render_html};
use medibrief_export::styles::DocumentStyles;
use medibrief_export::text::render_text;
use medibrief_export::{ExportFormat, ExportOptions, docx, export};

fn sample_report() -> String {
    let summary = ReportTemplate::Comprehensive.sections()[0].glyph;
    format!(
        "{summary} **Patient Summary**\n\
         - **Fever** for 3 days\n\
         - Take `Paracetamol` as needed\n\
         ---\n\
         \u{26A0}\u{FE0F} **Disclaimer**: consult a doctor.\n\
         Stay strong \u{1F4AA}."
    )
}

fn blocks() -> Vec<Block> {
    medibrief_markup::parse(&sample_report())
}

#[test]
fn text_drops_inline_markup_and_bullets_lists() {
    let summary = ReportTemplate::Comprehensive.sections()[0].glyph;
    let text = render_text(&blocks());

    let expected = format!(
        "{summary} Patient Summary\n\
         \u{2022} Fever for 3 days\n\
         \u{2022} Take Paracetamol as needed\n\
         {}\n\
         \u{26A0}\u{FE0F} Disclaimer: consult a doctor.\n\
         Stay strong \u{1F4AA}.\n",
        "-".repeat(40)
    );
    assert_eq!(text, expected);
}

#[test]
fn text_puts_blank_line_before_later_headings() {
    let blocks = vec![
        Block::Heading {
            icon: "A".to_string(),
            text: vec![InlineSpan::PlainText("One".to_string())],
        },
        Block::Paragraph {
            text: vec![InlineSpan::PlainText("body".to_string())],
        },
        Block::Heading {
            icon: "B".to_string(),
            text: vec![InlineSpan::PlainText("Two".to_string())],
        },
    ];
    assert_eq!(render_text(&blocks), "A One\nbody\n\nB Two\n");
}

#[test]
fn html_renders_structure() {
    let html = render_html(&blocks(), &HtmlOptions::default()).unwrap();

    assert!(html.contains("<title>Your AI Medical Report</title>"));
    assert!(html.contains("<h2 class=\"section\">"));
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("<strong>Fever</strong>"));
    assert!(html.contains("<code>Paracetamol</code>"));
    assert!(html.contains("<p class=\"callout\">"));
    assert!(html.contains("<p class=\"closing\">"));
    assert!(html.contains("<hr>"));
}

#[test]
fn html_escapes_report_text() {
    let blocks = medibrief_markup::parse("<script>alert(1)</script>\n- a & **<b>**");
    let html = render_html(&blocks, &HtmlOptions::default()).unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a &amp; <strong>&lt;b&gt;</strong>"));
}

#[test]
fn html_escapes_title() {
    let options = HtmlOptions {
        title: "Tom & Jerry".to_string(),
        ..HtmlOptions::default()
    };
    let html = render_html(&[], &options).unwrap();
    assert!(html.contains("<h1>Tom &amp; Jerry</h1>"));
}

#[test]
fn html_can_suppress_separators() {
    let options = HtmlOptions {
        show_separators: false,
        ..HtmlOptions::default()
    };
    let html = render_html(&blocks(), &options).unwrap();
    assert!(!html.contains("<hr>"));
    assert!(html.contains("<p class=\"callout\">"));
}

#[test]
fn docx_is_a_zip_archive() {
    let bytes = docx::generate_docx(&blocks(), "Report", &DocumentStyles::default()).unwrap();
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

/// The `<w:r>` element whose text is `text`.
fn run_containing<'a>(xml: &'a str, text: &str) -> &'a str {
    let text_at = xml
        .find(&format!(">{text}<"))
        .unwrap_or_else(|| panic!("{text:?} not in document"));
    let run_start = xml[..text_at].rfind("<w:r>").unwrap();
    &xml[run_start..text_at]
}

#[test]
fn docx_heading_runs_use_heading_size() {
    let styles = DocumentStyles {
        body_size: 11,
        heading_size: 16,
        ..DocumentStyles::default()
    };
    let blocks = medibrief_markup::parse("🧾 **Patient Summary**\nJane, 42.");
    let xml = docx::build_document(&blocks, "Report", &styles).build().document;
    let xml = String::from_utf8(xml).unwrap();

    let heading = run_containing(&xml, "Patient Summary");
    assert!(heading.contains("<w:sz w:val=\"32\""), "{heading}");
    assert!(!heading.contains("w:val=\"22\""), "{heading}");

    let body = run_containing(&xml, "Jane, 42.");
    assert!(body.contains("<w:sz w:val=\"22\""), "{body}");
}

#[test]
fn docx_handles_empty_reports() {
    let bytes = docx::generate_docx(&[], "Empty", &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn export_dispatches_on_format() {
    let options = ExportOptions::default();
    let blocks = blocks();

    let text = export(&blocks, ExportFormat::Text, &options).unwrap();
    assert_eq!(String::from_utf8(text).unwrap(), render_text(&blocks));

    let html = export(&blocks, ExportFormat::Html, &options).unwrap();
    assert!(String::from_utf8(html).unwrap().starts_with("<!DOCTYPE html>"));

    let docx = export(&blocks, ExportFormat::Docx, &options).unwrap();
    assert_eq!(&docx[..2], b"PK");
}

#[test]
fn format_parsing() {
    assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
    assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
    assert_eq!(" html ".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
    assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
    assert!(matches!(
        "pdf".parse::<ExportFormat>(),
        Err(ExportError::UnknownFormat(f)) if f == "pdf"
    ));
}

#[test]
fn format_extensions() {
    for format in ExportFormat::ALL {
        assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
    }
    assert_eq!(ExportFormat::Text.extension(), "txt");
    assert_eq!(ExportFormat::Docx.extension(), "docx");
}
