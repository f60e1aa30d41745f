//! Decoding image sources into pixel data

use base64::Engine;
use image::{DynamicImage, GenericImageView};

use crate::error::{ImageError, Result};
use crate::source::ImageSource;

/// Decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct ImageData {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Load and decode an image synchronously
    pub fn load(source: ImageSource) -> Result<Self> {
        tracing::trace!(?source, "loading image");
        match source {
            ImageSource::File(path) => {
                let data = std::fs::read(&path)
                    .map_err(|e| ImageError::FileLoad(format!("{}: {}", path.display(), e)))?;
                Self::from_bytes(&data)
            }
            ImageSource::Bytes(data) => Self::from_bytes(&data),
            ImageSource::Base64(data) => Self::from_base64(&data),
            ImageSource::Rgba {
                data,
                width,
                height,
            } => Self::from_rgba(data, width, height),
        }
    }

    /// Wrap raw RGBA8 pixels, checking the buffer length
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                ImageError::Decode(format!("RGBA buffer for {}x{} is too large", width, height))
            })?;
        if pixels.len() != expected {
            return Err(ImageError::Decode(format!(
                "RGBA buffer for {}x{} must be {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Decode encoded bytes (format is sniffed)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Ok(Self::from_dynamic_image(img))
    }

    /// Decode a base64 payload
    ///
    /// Accepts plain base64 or a `data:<mime>;base64,<payload>` URI.
    pub fn from_base64(data: &str) -> Result<Self> {
        let payload = if data.starts_with("data:") {
            data.find(";base64,")
                .map(|pos| &data[pos + ";base64,".len()..])
                .ok_or_else(|| ImageError::Base64("data URI is not base64 encoded".to_string()))?
        } else {
            data
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
        Self::from_bytes(&bytes)
    }

    fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            pixels: img.to_rgba8().into_raw(),
            width,
            height,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 red PNG
    const RED_DOT: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

    #[test]
    fn test_rgba_source() {
        let data = ImageData::load(ImageSource::rgba(vec![0; 3 * 2 * 4], 3, 2)).unwrap();
        assert_eq!(data.dimensions(), (3, 2));
        assert_eq!(data.pixels().len(), 24);
    }

    #[test]
    fn test_rgba_length_mismatch() {
        let result = ImageData::from_rgba(vec![0; 4], 2, 2);
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_rgba_oversized_dimensions() {
        let result = ImageData::from_rgba(Vec::new(), u32::MAX, u32::MAX);
        assert!(matches!(result, Err(ImageError::Decode(_))));

        let result = ImageData::load(ImageSource::rgba(Vec::new(), u32::MAX, 2));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ImageData::load(ImageSource::file("/definitely/not/here.png"));
        assert!(matches!(result, Err(ImageError::FileLoad(_))));
    }

    #[test]
    fn test_garbage_bytes() {
        let result = ImageData::load(ImageSource::bytes(b"not an image".to_vec()));
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_base64_plain_and_uri() {
        let plain = ImageData::from_base64(RED_DOT).unwrap();
        assert_eq!(plain.dimensions(), (1, 1));
        assert_eq!(&plain.pixels()[..3], &[255, 0, 0]);

        let uri = format!("data:image/png;base64,{}", RED_DOT);
        assert_eq!(ImageData::from_base64(&uri).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn test_data_uri_without_base64_marker() {
        let result = ImageData::from_base64("data:image/png,abcd");
        assert!(matches!(result, Err(ImageError::Base64(_))));
    }
}
