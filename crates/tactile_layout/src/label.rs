//! Text label element
//!
//! A single line of text with a natural size measured from its content and
//! font size. The same element renders icon glyphs when created with
//! [`Label::icon`].

use std::fmt;
use std::sync::Arc;

use tactile_core::{Color, Point, Size};

use crate::text_measure::{FontFamily, TextMeasurer};
use crate::tree::{alloc_node_id, release_node_id, LayoutNodeId};

/// Default label font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A text (or icon glyph) element
pub struct Label {
    id: LayoutNodeId,
    content: String,
    font_size: f32,
    font: FontFamily,
    color: Color,
    position: Point,
    /// Natural size, refreshed whenever content or font size changes
    size: Size,
    measurer: Arc<dyn TextMeasurer>,
}

impl Label {
    /// Create a text label
    pub fn new(content: impl Into<String>, font_size: f32, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self::with_font(content.into(), font_size, FontFamily::Text, measurer)
    }

    /// Create a label showing a single glyph from the icon font
    pub fn icon(glyph: char, font_size: f32, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self::with_font(glyph.to_string(), font_size, FontFamily::Icon, measurer)
    }

    fn with_font(
        content: String,
        font_size: f32,
        font: FontFamily,
        measurer: Arc<dyn TextMeasurer>,
    ) -> Self {
        let mut label = Self {
            id: alloc_node_id(),
            content,
            font_size,
            font,
            color: Color::BLACK,
            position: Point::ZERO,
            size: Size::ZERO,
            measurer,
        };
        label.remeasure();
        label
    }

    fn remeasure(&mut self) {
        let metrics = self
            .measurer
            .measure(&self.content, self.font_size, self.font);
        self.size = Size::new(metrics.width, metrics.height);
    }

    pub fn id(&self) -> LayoutNodeId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text; returns true if the natural size changed
    pub fn set_text(&mut self, content: impl Into<String>) -> bool {
        self.content = content.into();
        let before = self.size;
        self.remeasure();
        before != self.size
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Change the font size; returns true if the natural size changed
    pub fn set_font_size(&mut self, font_size: f32) -> bool {
        self.font_size = font_size;
        let before = self.size;
        self.remeasure();
        before != self.size
    }

    pub fn font(&self) -> FontFamily {
        self.font
    }

    pub fn is_icon(&self) -> bool {
        self.font == FontFamily::Icon
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
    }
}

impl Drop for Label {
    fn drop(&mut self) {
        release_node_id(self.id);
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("font_size", &self.font_size)
            .field("font", &self.font)
            .field("position", &self.position)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_measure::EstimatedTextMeasurer;
    use crate::tree::is_live;

    fn measurer() -> Arc<dyn TextMeasurer> {
        Arc::new(EstimatedTextMeasurer)
    }

    #[test]
    fn test_natural_size_follows_content() {
        let mut label = Label::new("OK", DEFAULT_FONT_SIZE, measurer());
        let short = label.width();

        assert!(label.set_text("Cancel"));
        assert!(label.width() > short);
        assert!(!label.set_text("Cancel"));
    }

    #[test]
    fn test_font_size_resizes() {
        let mut label = Label::new("OK", 10.0, measurer());
        let h = label.height();
        assert!(label.set_font_size(20.0));
        assert!((label.height() - 2.0 * h).abs() < 1e-4);
    }

    #[test]
    fn test_icon_label() {
        let icon = Label::icon('\u{e5ca}', 20.0, measurer());
        assert!(icon.is_icon());
        assert_eq!(icon.content().chars().count(), 1);
        assert_eq!(icon.width(), 20.0);
    }

    #[test]
    fn test_drop_releases_id() {
        let label = Label::new("x", 12.0, measurer());
        let id = label.id();
        assert!(is_live(id));
        drop(label);
        assert!(!is_live(id));
    }
}
