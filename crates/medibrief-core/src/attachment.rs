//! Image uploads attached to a patient record.
//!
//! An [`UploadedFile`] is the serializable descriptor sent to the report
//! generator. An [`Attachment`] additionally owns a local preview: a
//! temporary file holding the decoded image. Previews are released when the
//! attachment is removed from its [`AttachmentSet`] or when the set is
//! dropped.

use std::io::Write;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use ts_rs::TS;

use crate::error::CoreError;

pub const MAX_ATTACHMENTS: usize = 5;

pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    /// Base64-encoded file contents.
    pub data: String,
}

impl UploadedFile {
    /// Decode the base64 payload.
    pub fn decode(&self) -> Result<Vec<u8>, CoreError> {
        STANDARD
            .decode(self.data.as_bytes())
            .map_err(|_| CoreError::InvalidPayload(self.name.clone()))
    }

    /// Check the type and size rules the upload step enforces.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_mime_type(&self.name, &self.mime_type)?;
        let bytes = self.decode()?;
        check_size(&self.name, bytes.len())
    }
}

/// Map a file extension to one of the accepted image MIME types.
///
/// Returns `None` for extensions the upload step does not accept.
pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn check_mime_type(name: &str, mime_type: &str) -> Result<(), CoreError> {
    if ALLOWED_MIME_TYPES.contains(&mime_type) {
        Ok(())
    } else {
        Err(CoreError::UnsupportedFileType {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
        })
    }
}

fn check_size(name: &str, size: usize) -> Result<(), CoreError> {
    if size > MAX_ATTACHMENT_BYTES {
        Err(CoreError::FileTooLarge {
            name: name.to_string(),
            size,
            limit: MAX_ATTACHMENT_BYTES,
        })
    } else {
        Ok(())
    }
}

/// An uploaded file together with its local preview.
#[derive(Debug)]
pub struct Attachment {
    file: UploadedFile,
    preview: NamedTempFile,
}

impl Attachment {
    pub fn file(&self) -> &UploadedFile {
        &self.file
    }

    /// Path of the preview image. Valid until the attachment is dropped.
    pub fn preview_path(&self) -> &Path {
        self.preview.path()
    }
}

/// The files attached on the upload step, in upload order.
#[derive(Debug, Default)]
pub struct AttachmentSet {
    items: Vec<Attachment>,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and attach a file, creating its preview.
    pub fn add(
        &mut self,
        name: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<&Attachment, CoreError> {
        if self.items.len() >= MAX_ATTACHMENTS {
            return Err(CoreError::TooManyFiles(MAX_ATTACHMENTS));
        }
        check_mime_type(name, mime_type)?;
        check_size(name, bytes.len())?;

        let suffix = mime_type
            .strip_prefix("image/")
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let mut preview = tempfile::Builder::new()
            .prefix("medibrief-preview-")
            .suffix(&suffix)
            .tempfile()?;
        preview.write_all(bytes)?;
        preview.flush()?;

        self.items.push(Attachment {
            file: UploadedFile {
                name: name.to_string(),
                mime_type: mime_type.to_string(),
                data: STANDARD.encode(bytes),
            },
            preview,
        });

        Ok(&self.items[self.items.len() - 1])
    }

    /// Detach a file. Its preview is deleted before this returns.
    pub fn remove(&mut self, index: usize) -> Result<UploadedFile, CoreError> {
        if index >= self.items.len() {
            return Err(CoreError::NoSuchAttachment(index));
        }
        let Attachment { file, preview } = self.items.remove(index);
        preview.close()?;
        Ok(file)
    }

    /// Descriptors for the generator, in upload order.
    pub fn descriptors(&self) -> Vec<UploadedFile> {
        self.items.iter().map(|a| a.file.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
