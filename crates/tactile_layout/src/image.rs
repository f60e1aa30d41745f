//! Image element
//!
//! A decoded bitmap placed inside a container. Its natural size is the
//! pixel size of the decoded image.

use tactile_core::{Point, Size};
use tactile_image::{ImageData, ImageError, ImageSource};

use crate::tree::{alloc_node_id, release_node_id, LayoutNodeId};

/// An image element
#[derive(Debug)]
pub struct Image {
    id: LayoutNodeId,
    data: ImageData,
    position: Point,
}

impl Image {
    /// Load and decode image content
    ///
    /// Nothing is allocated for the element unless decoding succeeds.
    pub fn load(source: ImageSource) -> Result<Self, ImageError> {
        let data = ImageData::load(source)?;
        Ok(Self::from_data(data))
    }

    pub fn from_data(data: ImageData) -> Self {
        Self {
            id: alloc_node_id(),
            data,
            position: Point::ZERO,
        }
    }

    pub fn id(&self) -> LayoutNodeId {
        self.id
    }

    pub fn data(&self) -> &ImageData {
        &self.data
    }

    pub fn width(&self) -> f32 {
        self.data.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.data.height() as f32
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        release_node_id(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_size_is_pixel_size() {
        let image = Image::load(ImageSource::rgba(vec![0; 16 * 12 * 4], 16, 12)).unwrap();
        assert_eq!(image.size(), Size::new(16.0, 12.0));
        assert_eq!(image.position(), Point::ZERO);
    }

    #[test]
    fn test_load_failure() {
        assert!(Image::load(ImageSource::file("/missing/picture.png")).is_err());
    }
}
