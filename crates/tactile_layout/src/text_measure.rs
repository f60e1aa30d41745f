//! Text measurement for layout
//!
//! Labels ask a [`TextMeasurer`] for their natural size. Without a real
//! font-backed measurer installed, an estimate is used.

use std::sync::{Arc, PoisonError, RwLock};

/// Which font a run of text is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The regular UI text font
    #[default]
    Text,
    /// The icon glyph font
    Icon,
}

/// Text measurement result
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels (one line)
    pub height: f32,
}

impl TextMetrics {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Trait for measuring text dimensions
///
/// Implement this to provide accurate measurement backed by real font data.
pub trait TextMeasurer: Send + Sync {
    /// Measure a single line of text set at `font_size` in `font`
    fn measure(&self, text: &str, font_size: f32, font: FontFamily) -> TextMetrics;
}

/// Line height multiplier used by the estimate
const LINE_HEIGHT: f32 = 1.2;

/// Measurer that estimates sizes from character counts
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32, font: FontFamily) -> TextMetrics {
        let char_count = text.chars().count() as f32;

        // Icon glyphs are drawn on a square em box
        let advance = match font {
            FontFamily::Text => font_size * 0.55,
            FontFamily::Icon => font_size,
        };

        TextMetrics {
            width: char_count * advance,
            height: font_size * LINE_HEIGHT,
        }
    }
}

static TEXT_MEASURER: RwLock<Option<Arc<dyn TextMeasurer>>> = RwLock::new(None);

/// Install the global text measurer
///
/// Call this at startup with a measurer backed by the font system. Widgets
/// created afterwards pick it up.
pub fn set_text_measurer(measurer: Arc<dyn TextMeasurer>) {
    let mut guard = TEXT_MEASURER.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(measurer);
}

/// Remove the global text measurer, falling back to estimates
pub fn clear_text_measurer() {
    let mut guard = TEXT_MEASURER.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// The global text measurer, or the estimator if none is installed
pub fn text_measurer() -> Arc<dyn TextMeasurer> {
    let guard = TEXT_MEASURER.read().unwrap_or_else(PoisonError::into_inner);
    match *guard {
        Some(ref measurer) => Arc::clone(measurer),
        None => Arc::new(EstimatedTextMeasurer),
    }
}
