use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("symptom intensity {0} is outside 1-10")]
    InvalidIntensity(u8),

    #[error("symptom label is empty")]
    EmptySymptom,

    #[error("symptom already recorded: {0}")]
    DuplicateSymptom(String),

    #[error("a maximum of {0} files can be attached")]
    TooManyFiles(usize),

    #[error("invalid file type: {name} ({mime_type}); only JPEG, PNG or WebP images are accepted")]
    UnsupportedFileType { name: String, mime_type: String },

    #[error("file is too large: {name} ({size} bytes, limit {limit} bytes)")]
    FileTooLarge {
        name: String,
        size: usize,
        limit: usize,
    },

    #[error("attachment index {0} out of range")]
    NoSuchAttachment(usize),

    #[error("invalid base64 payload for {0}")]
    InvalidPayload(String),

    #[error("preview I/O error: {0}")]
    Io(#[from] std::io::Error),
}
