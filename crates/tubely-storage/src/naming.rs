//! Accepted thumbnail formats and random file name generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use mime_guess::Mime;
use rand::TryRngCore;
use rand::rngs::OsRng;

use tubely_core::error::{AppError, ErrorKind};
use tubely_core::result::AppResult;

/// Number of random bytes behind every generated file name.
pub const NAME_ENTROPY_BYTES: usize = 32;

/// An image format accepted for thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailFormat {
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
}

impl ThumbnailFormat {
    /// Match a declared `Content-Type` against the accepted formats.
    ///
    /// Parameters are ignored and the comparison is case-insensitive.
    /// Returns `None` for anything unparseable or not accepted.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime: Mime = content_type.trim().parse().ok()?;
        match mime.essence_str().to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    /// File extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => ".jpg",
            Self::Png => ".png",
        }
    }

    /// Canonical media type.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// A thumbnail that has been fully written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Generated file name, relative to the store root.
    pub name: String,
    /// URL the file is served from.
    pub url: String,
    /// Bytes copied into the file.
    pub bytes_written: u64,
}

/// Generate an unguessable file name for `format`.
///
/// 32 bytes from the operating system's CSPRNG, URL-safe base64 without
/// padding (43 characters), followed by the format's extension.
pub fn random_file_name(format: ThumbnailFormat) -> AppResult<String> {
    let mut buf = [0u8; NAME_ENTROPY_BYTES];
    OsRng.try_fill_bytes(&mut buf).map_err(|e| {
        AppError::with_source(ErrorKind::Internal, "Failed to generate file name", e)
    })?;

    let mut name = URL_SAFE_NO_PAD.encode(buf);
    name.push_str(format.extension());
    Ok(name)
}
