use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("HTML rendering failed: {0}")]
    Html(#[from] tera::Error),

    #[error("DOCX packaging failed: {0}")]
    Docx(String),

    #[error("unknown export format `{0}` (expected text, html or docx)")]
    UnknownFormat(String),
}
