//! Recognized glyphs and the block kind each one introduces.
//!
//! Which section headings a report contains depends on the template the
//! generator was given, so the parser takes its glyphs as configuration
//! instead of matching fixed literals.

use medibrief_core::models::template::{EMPOWERMENT_GLYPH, ReportTemplate, WARNING_GLYPH};
use serde::{Deserialize, Serialize};

const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphRole {
    /// Starts a section heading when followed by a `**title**`.
    Heading,
    /// Starts the disclaimer line.
    Warning,
    /// Marks the closing encouragement line wherever it appears.
    Empowerment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphEntry {
    pub glyph: String,
    pub role: GlyphRole,
}

/// A mapping from glyph to the block kind it introduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphSet {
    entries: Vec<GlyphEntry>,
}

impl Default for GlyphSet {
    /// Headings of every template plus the warning and empowerment glyphs.
    fn default() -> Self {
        ReportTemplate::ALL
            .iter()
            .fold(Self::empty(), |set, template| set.with_template_headings(*template))
            .with(WARNING_GLYPH, GlyphRole::Warning)
            .with(EMPOWERMENT_GLYPH, GlyphRole::Empowerment)
    }
}

impl GlyphSet {
    /// A set recognizing nothing: every line parses as a list item,
    /// separator or paragraph.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Glyphs for reports generated with one template only.
    pub fn for_template(template: ReportTemplate) -> Self {
        Self::empty()
            .with_template_headings(template)
            .with(WARNING_GLYPH, GlyphRole::Warning)
            .with(EMPOWERMENT_GLYPH, GlyphRole::Empowerment)
    }

    fn with_template_headings(self, template: ReportTemplate) -> Self {
        template
            .sections()
            .iter()
            .fold(self, |set, section| set.with(section.glyph, GlyphRole::Heading))
    }

    /// Add a glyph. Adding a glyph already present with the same role is a
    /// no-op; empty glyphs are ignored.
    pub fn with(mut self, glyph: impl Into<String>, role: GlyphRole) -> Self {
        let glyph = glyph.into();
        if base(&glyph).is_empty() {
            return self;
        }
        let present = self
            .entries
            .iter()
            .any(|e| e.role == role && base(&e.glyph) == base(&glyph));
        if !present {
            self.entries.push(GlyphEntry { glyph, role });
        }
        self
    }

    pub fn heading(self, glyph: impl Into<String>) -> Self {
        self.with(glyph, GlyphRole::Heading)
    }

    pub fn warning(self, glyph: impl Into<String>) -> Self {
        self.with(glyph, GlyphRole::Warning)
    }

    pub fn empowerment(self, glyph: impl Into<String>) -> Self {
        self.with(glyph, GlyphRole::Empowerment)
    }

    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }

    pub fn glyphs(&self, role: GlyphRole) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |e| e.role == role)
            .map(|e| e.glyph.as_str())
    }

    /// Find a glyph of `role` at the start of `text`.
    ///
    /// Returns the configured glyph and the number of bytes of `text` it
    /// covered. A variation selector after the glyph is optional on either
    /// side; the longest match wins.
    pub fn match_prefix(&self, role: GlyphRole, text: &str) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for glyph in self.glyphs(role) {
            let b = base(glyph);
            if !text.starts_with(b) {
                continue;
            }
            let mut len = b.len();
            if text[len..].starts_with(VARIATION_SELECTOR) {
                len += VARIATION_SELECTOR.len_utf8();
            }
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((glyph, len));
            }
        }
        best
    }

    /// Whether any glyph of `role` occurs anywhere in `text`.
    pub fn occurs_in(&self, role: GlyphRole, text: &str) -> bool {
        self.glyphs(role).any(|glyph| text.contains(base(glyph)))
    }
}

fn base(glyph: &str) -> &str {
    glyph.trim_end_matches(VARIATION_SELECTOR)
}
