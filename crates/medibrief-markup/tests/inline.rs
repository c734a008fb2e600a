use medibrief_core::models::block::InlineSpan;
use medibrief_markup::parse_inline;

fn plain(s: &str) -> InlineSpan {
    InlineSpan::PlainText(s.to_string())
}

fn bold(s: &str) -> InlineSpan {
    InlineSpan::Bold(s.to_string())
}

fn code(s: &str) -> InlineSpan {
    InlineSpan::Code(s.to_string())
}

#[test]
fn plain_line_is_one_span() {
    assert_eq!(parse_inline("just text"), vec![plain("just text")]);
}

#[test]
fn empty_line_has_no_spans() {
    assert!(parse_inline("").is_empty());
}

#[test]
fn bold_and_code_spans() {
    assert_eq!(
        parse_inline("Take **Paracetamol** with `500mg` dose"),
        vec![
            plain("Take "),
            bold("Paracetamol"),
            plain(" with "),
            code("500mg"),
            plain(" dose"),
        ]
    );
}

#[test]
fn bold_is_non_greedy() {
    assert_eq!(
        parse_inline("**a** and **b**"),
        vec![bold("a"), plain(" and "), bold("b")]
    );
}

#[test]
fn earliest_delimiter_wins() {
    assert_eq!(parse_inline("`a**b`**"), vec![code("a**b"), plain("**")]);
    assert_eq!(parse_inline("**x `y` z**"), vec![bold("x `y` z")]);
}

#[test]
fn unmatched_bold_is_literal() {
    assert_eq!(parse_inline("50% **done"), vec![plain("50% **done")]);
}

#[test]
fn unmatched_backtick_is_literal() {
    assert_eq!(
        parse_inline("it`s **fine**"),
        vec![plain("it`s "), bold("fine")]
    );
}

#[test]
fn trailing_unmatched_after_pair() {
    assert_eq!(
        parse_inline("**a** b **"),
        vec![bold("a"), plain(" b **")]
    );
}

#[test]
fn empty_pairs_stay_literal() {
    assert_eq!(parse_inline("****"), vec![plain("****")]);
    assert_eq!(parse_inline("a `` b"), vec![plain("a `` b")]);
}

#[test]
fn single_asterisks_are_text() {
    assert_eq!(parse_inline("2 * 3 = 6"), vec![plain("2 * 3 = 6")]);
}

#[test]
fn multibyte_text_around_delimiters() {
    assert_eq!(
        parse_inline("🥗 **Diät** – gut"),
        vec![plain("🥗 "), bold("Diät"), plain(" – gut")]
    );
}

#[test]
fn no_characters_lost() {
    let inputs = [
        "a **b** c `d` e",
        "** lonely",
        "`` ** ``",
        "x*y**z`w",
        "**nested `code` here** then `tick",
    ];
    for input in inputs {
        let spans = parse_inline(input);
        let rebuilt: String = spans
            .iter()
            .map(|s| match s {
                InlineSpan::PlainText(t) => t.clone(),
                InlineSpan::Bold(t) => format!("**{t}**"),
                InlineSpan::Code(t) => format!("`{t}`"),
            })
            .collect();
        assert_eq!(rebuilt, input);
    }
}
