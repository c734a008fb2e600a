//! medibrief-export
//!
//! Text, HTML and DOCX rendering of parsed report blocks.

pub mod docx;
pub mod error;
pub mod layout;
pub mod render;
pub mod styles;
pub mod text;

use std::fmt;
use std::str::FromStr;

use medibrief_core::models::block::Block;

use crate::error::ExportError;
use crate::render::HtmlOptions;
use crate::styles::DocumentStyles;

/// Output formats a report can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Html,
    Docx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Html, ExportFormat::Docx];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Html => "html",
            ExportFormat::Docx => "docx",
        }
    }

    /// File extension for downloads, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" | "htm" => Ok(ExportFormat::Html),
            "docx" => Ok(ExportFormat::Docx),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Title and separator handling; the title is reused for DOCX.
    pub html: HtmlOptions,
    pub styles: DocumentStyles,
}

/// Render `blocks` in `format` and return the file bytes.
pub fn export(
    blocks: &[Block],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let bytes = match format {
        ExportFormat::Text => text::render_text(blocks).into_bytes(),
        ExportFormat::Html => render::render_html(blocks, &options.html)?.into_bytes(),
        ExportFormat::Docx => docx::generate_docx(blocks, &options.html.title, &options.styles)?,
    };

    tracing::debug!(
        format = %format,
        blocks = blocks.len(),
        bytes = bytes.len(),
        "report exported"
    );

    Ok(bytes)
}
