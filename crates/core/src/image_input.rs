//! Source-image loading and validation.
//!
//! The uploaded interior photograph travels to the backend untouched, so
//! this module never decodes pixels. It only checks that the file is
//! non-empty and actually a JPEG or PNG, and records the mime type the
//! multipart part needs.

use crate::error::{AppError, Result};
use image::ImageFormat;
use std::path::Path;

/// An interior photograph ready to be sent to the generation backend.
///
/// Holds the raw bytes plus the sniffed format; construction fails for
/// empty files and for anything that is not JPEG or PNG.
pub struct SourceImage {
    bytes: Vec<u8>,
    format: ImageFormat,
    file_name: String,
}

impl SourceImage {
    /// Reads and validates an image file from disk.
    ///
    /// The format is sniffed from the file content, not the extension, so
    /// a mislabeled file is caught here rather than by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyImage`] for zero-byte files and
    /// [`AppError::InvalidImage`] when the content is not JPEG or PNG.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "interior.png".to_string());
        Self::from_bytes(bytes, file_name)
    }

    /// Validates already-loaded image bytes.
    pub fn from_bytes(bytes: Vec<u8>, file_name: String) -> Result<Self> {
        if bytes.is_empty() {
            return Err(AppError::EmptyImage);
        }

        let format = image::guess_format(&bytes)
            .map_err(|e| AppError::image(format!("unrecognized image data: {e}")))?;
        match format {
            ImageFormat::Jpeg | ImageFormat::Png => {}
            other => {
                return Err(AppError::image(format!(
                    "unsupported format {other:?}, expected jpg, jpeg or png"
                )));
            }
        }

        Ok(Self {
            bytes,
            format,
            file_name,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Mime type for the multipart `image` part.
    pub fn mime_type(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "image/jpeg",
            _ => "image/png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn empty_bytes_are_rejected() {
        assert!(matches!(
            SourceImage::from_bytes(Vec::new(), "a.png".into()),
            Err(AppError::EmptyImage)
        ));
    }

    #[test]
    fn png_magic_is_accepted() {
        let image = SourceImage::from_bytes(PNG_MAGIC.to_vec(), "room.png".into()).unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.file_name(), "room.png");
    }

    #[test]
    fn jpeg_magic_is_accepted() {
        let image = SourceImage::from_bytes(JPEG_MAGIC.to_vec(), "room.jpg".into()).unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
    }

    #[test]
    fn junk_bytes_are_rejected() {
        assert!(matches!(
            SourceImage::from_bytes(vec![0x00; 16], "a.bin".into()),
            Err(AppError::InvalidImage(_))
        ));
    }
}
