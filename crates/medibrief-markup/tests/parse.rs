use medibrief_core::models::block::{Block, InlineSpan};
use medibrief_markup::{GlyphSet, ReportParser, parse};

fn plain(s: &str) -> InlineSpan {
    InlineSpan::PlainText(s.to_string())
}

fn paragraph(s: &str) -> Block {
    Block::Paragraph {
        text: vec![plain(s)],
    }
}

fn item(s: &str) -> Block {
    Block::ListItem {
        text: vec![plain(s)],
    }
}

#[test]
fn empty_input_yields_nothing() {
    assert!(parse("").is_empty());
}

#[test]
fn whitespace_only_input_yields_nothing() {
    assert!(parse("  \n\t\n   ").is_empty());
}

#[test]
fn bullet_run_followed_by_paragraph() {
    assert_eq!(
        parse("- a\n- b\nc"),
        vec![item("a"), item("b"), paragraph("c")]
    );
}

#[test]
fn separator_is_never_a_list_item() {
    assert_eq!(parse("---"), vec![Block::Separator]);
    assert_eq!(parse("  -----  "), vec![Block::Separator]);
}

#[test]
fn short_dash_lines_are_bullets() {
    assert_eq!(parse("--"), vec![item("-")]);
    assert_eq!(parse("-- note"), vec![item("- note")]);
}

#[test]
fn dashes_with_trailing_text_are_a_bullet() {
    assert_eq!(parse("--- not a rule"), vec![item("-- not a rule")]);
}

#[test]
fn separator_ends_a_bullet_run() {
    assert_eq!(
        parse("- a\n---\n- b"),
        vec![item("a"), Block::Separator, item("b")]
    );
}

#[test]
fn indented_bullets_are_list_items() {
    assert_eq!(parse("   -   spaced out  "), vec![item("spaced out")]);
}

#[test]
fn heading_extracts_icon_and_title() {
    let blocks = parse("🧾 **Patient Summary**");
    assert_eq!(
        blocks,
        vec![Block::Heading {
            icon: "🧾".to_string(),
            text: vec![plain("Patient Summary")],
        }]
    );
    assert!(!blocks[0].plain_text().contains('*'));
}

#[test]
fn heading_keeps_text_after_title() {
    let blocks = parse("🔍 **Symptom Analysis & Possible Diagnoses**: see below");
    assert_eq!(
        blocks,
        vec![Block::Heading {
            icon: "🔍".to_string(),
            text: vec![plain("Symptom Analysis & Possible Diagnoses: see below")],
        }]
    );
}

#[test]
fn heading_with_leading_whitespace_and_no_gap() {
    let blocks = parse("   🚨**Urgency Alert**");
    assert!(matches!(&blocks[..], [Block::Heading { icon, .. }] if icon == "🚨"));
}

#[test]
fn heading_glyph_matches_with_or_without_variation_selector() {
    let with = parse("🖼️ **Document Analysis**");
    let without = parse("🖼 **Document Analysis**");
    assert_eq!(with, without);
    assert!(matches!(&with[..], [Block::Heading { icon, .. }] if icon == "🖼️"));
}

#[test]
fn heading_glyph_without_bold_title_is_a_paragraph() {
    assert_eq!(
        parse("🧾 Patient Summary"),
        vec![paragraph("🧾 Patient Summary")]
    );
}

#[test]
fn heading_with_unterminated_title_is_a_paragraph() {
    assert_eq!(
        parse("💊 **Medicine Recommendations"),
        vec![paragraph("💊 **Medicine Recommendations")]
    );
}

#[test]
fn unrecognized_glyph_is_not_a_heading() {
    assert_eq!(
        parse("🎉 **Party**"),
        vec![Block::Paragraph {
            text: vec![plain("🎉 "), InlineSpan::Bold("Party".to_string())],
        }]
    );
}

#[test]
fn warning_line_is_a_callout() {
    let blocks = parse("⚠️ Disclaimer text");
    assert_eq!(blocks.len(), 1);
    match &blocks[0] {
        Block::Callout { text } => {
            let content: String = text.iter().map(InlineSpan::as_str).collect();
            assert!(content.starts_with("⚠️"));
            assert_eq!(content, "⚠️ Disclaimer text");
        }
        other => panic!("expected callout, got {other:?}"),
    }
}

#[test]
fn disclaimer_keeps_inline_bold() {
    let blocks = parse("⚠️ **Disclaimer**: This is AI-generated medical guidance.");
    assert_eq!(
        blocks,
        vec![Block::Callout {
            text: vec![
                plain("⚠️ "),
                InlineSpan::Bold("Disclaimer".to_string()),
                plain(": This is AI-generated medical guidance."),
            ],
        }]
    );
}

#[test]
fn warning_glyph_mid_line_is_a_paragraph() {
    assert!(matches!(
        &parse("Note ⚠️ this")[..],
        [Block::Paragraph { .. }]
    ));
}

#[test]
fn empowerment_glyph_anywhere_makes_emphasis() {
    let blocks = parse("Your health is your priority. Stay strong 💪.");
    assert_eq!(
        blocks,
        vec![Block::EmphasisParagraph {
            text: vec![plain("Your health is your priority. Stay strong 💪.")],
        }]
    );
}

#[test]
fn bullet_wins_over_empowerment() {
    assert_eq!(parse("- keep going 💪"), vec![item("keep going 💪")]);
}

#[test]
fn paragraph_with_inline_bold() {
    assert_eq!(
        parse("Take **Paracetamol** twice daily"),
        vec![Block::Paragraph {
            text: vec![
                plain("Take "),
                InlineSpan::Bold("Paracetamol".to_string()),
                plain(" twice daily"),
            ],
        }]
    );
}

#[test]
fn unterminated_bold_is_kept_literally() {
    assert_eq!(parse("50% **done"), vec![paragraph("50% **done")]);
}

#[test]
fn paragraph_keeps_the_line_as_written() {
    assert_eq!(
        parse("    50% **done   "),
        vec![paragraph("    50% **done   ")]
    );
    assert_eq!(
        parse("a\n  b  \r\nc"),
        vec![paragraph("a"), paragraph("  b  "), paragraph("c")]
    );
}

#[test]
fn callout_and_emphasis_keep_surrounding_whitespace() {
    assert_eq!(
        parse("  ⚠️ note  "),
        vec![Block::Callout {
            text: vec![plain("  ⚠️ note  ")],
        }]
    );
    assert_eq!(
        parse("\tStay strong 💪 "),
        vec![Block::EmphasisParagraph {
            text: vec![plain("\tStay strong 💪 ")],
        }]
    );
}

#[test]
fn blank_lines_are_suppressed() {
    assert_eq!(parse("a\n\n\nb"), vec![paragraph("a"), paragraph("b")]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(parse("a\r\n- b\r\n"), vec![paragraph("a"), item("b")]);
}

#[test]
fn one_block_per_non_blank_line() {
    let text = "🧾 **Patient Summary**\nJane, 42.\n\n- fever\n- cough\n---\n⚠️ careful\nStay strong 💪\n\n";
    let non_blank = text.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(parse(text).len(), non_blank);
}

#[test]
fn parsing_is_deterministic() {
    let text = "🚨 **Urgency Alert**\n- **High Urgency**: see a doctor\n`ORS` sachets\n---\n⚠️ x";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn full_report_block_sequence() {
    let report = "\
🧾 **Patient Summary**
Jane Roe, 42, reports a **persistent** headache.

🔍 **Symptom Analysis & Possible Diagnoses**
- Tension headache
- Migraine

💊 **Medicine Recommendations**
- `Ibuprofen` 400mg tablet, up to three times a day

Your health is your priority. Stay strong 💪.

---
⚠️ **Disclaimer**: This is AI-generated medical guidance.";

    let kinds: Vec<&str> = parse(report)
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::ListItem { .. } => "item",
            Block::Callout { .. } => "callout",
            Block::EmphasisParagraph { .. } => "emphasis",
            Block::Paragraph { .. } => "paragraph",
            Block::Separator => "separator",
        })
        .collect();

    assert_eq!(
        kinds,
        [
            "heading",
            "paragraph",
            "heading",
            "item",
            "item",
            "heading",
            "item",
            "emphasis",
            "separator",
            "callout",
        ]
    );
}

#[test]
fn synthetic_glyph_set() {
    let parser = ReportParser::new(
        GlyphSet::empty()
            .heading("§")
            .warning("!!")
            .empowerment("+1"),
    );

    let blocks = parser.parse("§ **Intro**\n!! beware\nnice +1\n🧾 **Patient Summary**");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                icon: "§".to_string(),
                text: vec![plain("Intro")],
            },
            Block::Callout {
                text: vec![plain("!! beware")],
            },
            Block::EmphasisParagraph {
                text: vec![plain("nice +1")],
            },
            Block::Paragraph {
                text: vec![
                    plain("🧾 "),
                    InlineSpan::Bold("Patient Summary".to_string()),
                ],
            },
        ]
    );
}

#[test]
fn empty_glyph_set_only_structures_dashes() {
    let parser = ReportParser::new(GlyphSet::empty());
    let blocks = parser.parse("⚠️ careful\n- item\n---\nStay strong 💪");
    assert_eq!(
        blocks,
        vec![
            paragraph("⚠️ careful"),
            item("item"),
            Block::Separator,
            paragraph("Stay strong 💪"),
        ]
    );
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(ReportParser::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.parse(&format!("- item {i}\nline {i}")))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let blocks = handle.join().unwrap();
        assert_eq!(blocks, vec![item(&format!("item {i}")), paragraph(&format!("line {i}"))]);
    }
}
