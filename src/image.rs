//! Uploaded crop photos.
//!
//! The bytes are held only so the photo can be shown again; nothing decodes
//! or validates the contents. A file counts as an image when its extension
//! maps to an `image/*` media type.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not an image file")]
    NotAnImage(String),
}

/// Display-only reference to an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub file_name: String,
    pub media_type: &'static str,
    #[serde(skip)]
    bytes: Arc<[u8]>,
}

impl ImageRef {
    #[must_use]
    pub fn new(file_name: impl Into<String>, media_type: &'static str, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { file_name: file_name.into(), media_type, bytes: bytes.into() }
    }

    /// Read an image from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::NotAnImage`] when the extension is not an image
    /// type, or [`ImageError::Read`] when the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let media_type = media_type_for(path).ok_or_else(|| ImageError::NotAnImage(display.clone()))?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ImageError::Read { path: display.clone(), source })?;
        let file_name = path
            .file_name()
            .map_or(display, |n| n.to_string_lossy().into_owned());
        Ok(Self::new(file_name, media_type, bytes))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Media type for an image file extension, if it is one.
#[must_use]
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "heic" => Some("image/heic"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}
