//! Tactile image loading
//!
//! Decodes images from files, in-memory bytes, base64 strings, or raw RGBA
//! buffers into [`ImageData`]. Loading is synchronous and fallible; every
//! failure surfaces as an [`ImageError`].
//!
//! ```rust
//! use tactile_image::{ImageData, ImageSource};
//!
//! let pixels = vec![255u8; 4 * 4 * 4];
//! let data = ImageData::load(ImageSource::rgba(pixels, 4, 4)).unwrap();
//! assert_eq!(data.dimensions(), (4, 4));
//!
//! assert!(ImageData::load(ImageSource::file("/no/such/icon.png")).is_err());
//! ```

pub mod error;
pub mod loader;
pub mod source;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use source::ImageSource;
