//! Image parts for the Converse request.

use aws_sdk_bedrockruntime::types::{ContentBlock, ImageBlock, ImageFormat, ImageSource};
use medibrief_core::attachment::UploadedFile;

use crate::error::BedrockError;

/// Map an image MIME type to a Converse `ImageFormat`.
///
/// Returns `None` for types the Converse API cannot take as an image.
pub fn image_format_for_mime(mime_type: &str) -> Option<ImageFormat> {
    match mime_type.to_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/png" => Some(ImageFormat::Png),
        "image/webp" => Some(ImageFormat::Webp),
        "image/gif" => Some(ImageFormat::Gif),
        _ => None,
    }
}

/// Decode an uploaded file into an image content block.
pub fn image_block(file: &UploadedFile) -> Result<ContentBlock, BedrockError> {
    let format = image_format_for_mime(&file.mime_type)
        .ok_or_else(|| BedrockError::UnsupportedImage(file.mime_type.clone()))?;
    let bytes = file.decode()?;

    let image = ImageBlock::builder()
        .format(format)
        .source(ImageSource::Bytes(aws_smithy_types::Blob::new(bytes)))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    Ok(ContentBlock::Image(image))
}
