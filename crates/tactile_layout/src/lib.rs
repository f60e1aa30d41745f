//! Tactile Layout
//!
//! Self-laying-out widgets with state-driven styling. A widget owns its
//! child nodes, sizes and positions them whenever its content changes, and
//! pushes a style record onto its container whenever its interaction state
//! changes.
//!
//! # Example
//!
//! ```rust
//! use tactile_layout::prelude::*;
//!
//! let mut save = button("Save");
//! save.set_icon(icons::SAVE);
//!
//! let mut router = EventRouter::new();
//! router.pointer_enter(&mut save);
//! assert_eq!(save.visual_state(), ButtonVisualState::Hovered);
//!
//! router.pointer_down(&mut save, 4.0, 4.0);
//! assert_eq!(save.visual_state(), ButtonVisualState::Pressed);
//! assert_eq!(router.focused(), Some(save.id()));
//! ```

pub mod error;
pub mod event_handler;
pub mod event_router;
pub mod icons;
pub mod image;
pub mod label;
pub mod panel;
pub mod text_measure;
pub mod theme;
pub mod tree;
pub mod widgets;

// Core types
pub use error::{Result, ThemeError};
pub use event_handler::{EventCallback, EventContext, EventHandlers};
pub use event_router::{EventRouter, Interactive};
pub use tree::{is_live, LayoutNodeId};

// Child elements
pub use image::Image;
pub use label::{Label, DEFAULT_FONT_SIZE};
pub use panel::Panel;

// Text measurement
pub use text_measure::{
    clear_text_measurer, set_text_measurer, text_measurer, EstimatedTextMeasurer, FontFamily,
    TextMeasurer, TextMetrics,
};

// Theme files
pub use theme::Theme;

// Widgets
pub use widgets::{
    button, default_button_styles, Button, ButtonStyle, ButtonStyles, ButtonVisualState,
    SharedButtonStyles, BUTTON_SPACING, ICON_SCALE,
};

// Foundation types
pub use tactile_core::{event_types, Color, EdgeSizes, KeyCode, Point, Size, StopPropagation};
pub use tactile_image::{ImageData, ImageError, ImageSource};

/// Prelude module - import everything commonly needed
pub mod prelude {
    // Geometry and color
    pub use tactile_core::{Color, EdgeSizes, Point, Size};
    // Events
    pub use crate::event_handler::EventContext;
    pub use crate::event_router::{EventRouter, Interactive};
    pub use tactile_core::{event_types, KeyCode, StopPropagation};
    // Images
    pub use tactile_image::ImageSource;
    // Glyphs for Button::set_icon
    pub use crate::icons;
    // Theme
    pub use crate::theme::Theme;
    // Widgets
    pub use crate::widgets::{
        button, default_button_styles, Button, ButtonStyle, ButtonStyles, ButtonVisualState,
        SharedButtonStyles,
    };
}
