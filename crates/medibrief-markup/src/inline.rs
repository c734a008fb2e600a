use medibrief_core::models::block::InlineSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Bold,
    Code,
}

impl Delimiter {
    fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Code => "`",
        }
    }

    fn span(self, text: &str) -> InlineSpan {
        match self {
            Delimiter::Bold => InlineSpan::Bold(text.to_string()),
            Delimiter::Code => InlineSpan::Code(text.to_string()),
        }
    }
}

/// Split a line into plain, bold and code spans.
///
/// Scans left to right; the earliest opening delimiter wins and is closed by
/// the nearest matching delimiter after it. A delimiter with no partner, or a
/// pair enclosing nothing, stays in the text literally. Apart from the
/// delimiters of matched pairs, every character of `line` ends up in exactly
/// one span, and adjacent plain text is merged into a single span.
pub fn parse_inline(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = line;

    while let Some((start, delim)) = next_delimiter(rest) {
        let marker = delim.marker();
        let after = &rest[start + marker.len()..];

        match after.find(marker) {
            Some(end) if end > 0 => {
                plain.push_str(&rest[..start]);
                flush_plain(&mut plain, &mut spans);
                spans.push(delim.span(&after[..end]));
                rest = &after[end + marker.len()..];
            }
            _ => {
                plain.push_str(&rest[..start + marker.len()]);
                rest = after;
            }
        }
    }

    plain.push_str(rest);
    flush_plain(&mut plain, &mut spans);
    spans
}

/// Append `span`, merging it into a preceding plain span where both are
/// plain text.
pub(crate) fn push_span(spans: &mut Vec<InlineSpan>, span: InlineSpan) {
    if let InlineSpan::PlainText(text) = &span {
        if text.is_empty() {
            return;
        }
        if let Some(InlineSpan::PlainText(last)) = spans.last_mut() {
            last.push_str(text);
            return;
        }
    }
    spans.push(span);
}

fn flush_plain(plain: &mut String, spans: &mut Vec<InlineSpan>) {
    if plain.is_empty() {
        return;
    }
    push_span(spans, InlineSpan::PlainText(std::mem::take(plain)));
}

/// Byte offset of the first `**` or `` ` `` in `text`.
///
/// Both delimiters are ASCII, so byte offsets always fall on character
/// boundaries.
fn next_delimiter(text: &str) -> Option<(usize, Delimiter)> {
    let bytes = text.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'`' => return Some((idx, Delimiter::Code)),
            b'*' if bytes.get(idx + 1) == Some(&b'*') => return Some((idx, Delimiter::Bold)),
            _ => idx += 1,
        }
    }
    None
}
