//! Image source references

use std::fmt;
use std::path::PathBuf;

/// Where image content comes from
#[derive(Clone)]
pub enum ImageSource {
    /// A file on disk
    File(PathBuf),
    /// Encoded image bytes (PNG, JPEG, ...)
    Bytes(Vec<u8>),
    /// Base64 payload, plain or as a `data:` URI
    Base64(String),
    /// Already-decoded RGBA8 pixels
    Rgba {
        data: Vec<u8>,
        width: u32,
        height: u32,
    },
}

impl ImageSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageSource::File(path.into())
    }

    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        ImageSource::Bytes(data.into())
    }

    pub fn base64(data: impl Into<String>) -> Self {
        ImageSource::Base64(data.into())
    }

    pub fn rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        ImageSource::Rgba {
            data,
            width,
            height,
        }
    }
}

// Keeps pixel buffers out of log lines
impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(path) => f.debug_tuple("File").field(path).finish(),
            ImageSource::Bytes(data) => write!(f, "Bytes({} bytes)", data.len()),
            ImageSource::Base64(data) => write!(f, "Base64({} chars)", data.len()),
            ImageSource::Rgba { width, height, .. } => write!(f, "Rgba({}x{})", width, height),
        }
    }
}

impl From<&str> for ImageSource {
    /// Strings starting with `data:` are base64 URIs, anything else a file path
    fn from(s: &str) -> Self {
        if s.starts_with("data:") {
            ImageSource::Base64(s.to_string())
        } else {
            ImageSource::File(PathBuf::from(s))
        }
    }
}

impl From<String> for ImageSource {
    fn from(s: String) -> Self {
        ImageSource::from(s.as_str())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::File(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert!(matches!(ImageSource::from("icons/ok.png"), ImageSource::File(_)));
        assert!(matches!(
            ImageSource::from("data:image/png;base64,AAAA"),
            ImageSource::Base64(_)
        ));
    }

    #[test]
    fn test_debug_hides_pixels() {
        let src = ImageSource::rgba(vec![0; 16], 2, 2);
        assert_eq!(format!("{:?}", src), "Rgba(2x2)");
    }
}
