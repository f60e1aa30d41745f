//! Ready-to-use widgets with built-in styling and behavior
//!
//! # Widgets
//!
//! - [`button()`] - Push button with an optional icon or image, styled per
//!   interaction state
//!
//! # Example
//!
//! ```ignore
//! use tactile_layout::prelude::*;
//!
//! let mut ok = button("OK");
//! ok.set_icon(icons::CHECK);
//! ok.on_click(|_| println!("confirmed"));
//! ```

pub mod button;
pub mod button_style;

// Re-export button widget
pub use button::{button, Button, BUTTON_SPACING, ICON_SCALE};

// Re-export style table
pub use button_style::{
    default_button_styles, ButtonStyle, ButtonStyles, ButtonVisualState, SharedButtonStyles,
};
