use medibrief_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("Converse request failed: {0}")]
    Invocation(String),

    #[error("unreadable Converse reply: {0}")]
    ResponseParse(String),

    #[error("model returned an empty report")]
    EmptyResponse,

    #[error("attachment rejected: {0}")]
    Attachment(#[from] CoreError),

    #[error("{0} cannot be sent as an image")]
    UnsupportedImage(String),
}
