//! Tactile Core
//!
//! Foundational types shared by the Tactile crates:
//!
//! - **Geometry**: points, sizes, and four-sided edge widths
//! - **Color**: linear RGBA colors
//! - **Events**: event type constants, key codes, and propagation granularity
//!
//! # Example
//!
//! ```rust
//! use tactile_core::{Color, EdgeSizes, Size};
//!
//! let border = EdgeSizes::uniform(1.0);
//! let content = Size::new(72.0, 20.0);
//!
//! assert_eq!(content.width + border.horizontal(), 74.0);
//! assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
//! ```

pub mod events;
pub mod layer;

pub use events::{event_types, EventType, KeyCode, StopPropagation};
pub use layer::{Color, EdgeSizes, Point, Size};
