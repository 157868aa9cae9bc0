//! Uploaded image handling: extension checks, MIME selection and decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Extensions accepted by the waste guidance upload.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("Invalid file type. Please upload an image (png, jpg, jpeg, gif, webp).")]
    UnsupportedExtension,

    #[error("Image decoding failed: {0}")]
    InvalidBase64(String),

    #[error("Could not decode image")]
    NotAnImage,

    #[error("Empty file.")]
    Empty,
}

/// Raw image bytes with the MIME type sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Lowercased extension after the last dot.
pub fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Checks the filename against [`ALLOWED_EXTENSIONS`].
pub fn check_allowed_extension(filename: &str) -> Result<String, ImageError> {
    match extension(filename) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(ImageError::UnsupportedExtension),
    }
}

/// MIME type from an extension: png, webp, otherwise jpeg.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

/// Keeps ASCII alphanumerics, dots, dashes and underscores; spaces become
/// underscores and any directory part is dropped.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .collect();
    cleaned.trim_start_matches(['.', '_']).to_string()
}

/// Decodes a data URL (`data:image/png;base64,...`) or bare base64 string.
pub fn decode_base64_image(input: &str) -> Result<Vec<u8>, ImageError> {
    let payload = match input.split_once(',') {
        Some((_, data)) => data,
        None => input,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ImageError::InvalidBase64(e.to_string()))
}

/// Ensures the bytes carry a known image signature and returns its MIME.
pub fn sniff_image(bytes: &[u8]) -> Result<&'static str, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::NotAnImage);
    }
    match infer::get(bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => Ok(kind.mime_type()),
        _ => Err(ImageError::NotAnImage),
    }
}
