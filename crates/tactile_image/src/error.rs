//! Image error types

use thiserror::Error;

/// Errors raised while loading image content
#[derive(Error, Debug)]
pub enum ImageError {
    /// The backing file could not be read
    #[error("Failed to load image file: {0}")]
    FileLoad(String),

    /// The bytes could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The base64 payload was malformed
    #[error("Invalid base64 image data: {0}")]
    Base64(String),
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::Base64(err.to_string())
    }
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
