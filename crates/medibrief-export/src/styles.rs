use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Calibri").
    pub body_font: String,

    /// Font for section headings.
    pub heading_font: String,

    /// Font for `code` spans such as drug names and doses.
    pub code_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub heading_size: usize,

    /// Hex colour (RRGGBB) of the disclaimer callout text.
    pub callout_color: String,

    /// Hex colour (RRGGBB) of the closing encouragement line.
    pub emphasis_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            code_font: "Consolas".to_string(),
            body_size: 11,
            title_size: 20,
            heading_size: 14,
            callout_color: "B45309".to_string(),
            emphasis_color: "0F766E".to_string(),
        }
    }
}
