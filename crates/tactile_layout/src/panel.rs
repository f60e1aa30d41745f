//! Container panel
//!
//! A panel is a box with a content area surrounded by paddings and borders
//! (inside out). It stores the visual attributes a style pushes onto it,
//! the ids of its children in draw order, its enabled flag, and the
//! handlers subscribed to its outgoing events.
//!
//! ```text
//! +------------------ border ------------------+
//! |  +-------------- padding --------------+   |
//! |  |             content box             |   |
//! |  +-------------------------------------+   |
//! +--------------------------------------------+
//! ```

use tactile_core::{Color, EdgeSizes, Size};

use crate::event_handler::{EventContext, EventHandlers};
use crate::tree::{alloc_node_id, release_node_id, LayoutNodeId};

pub struct Panel {
    id: LayoutNodeId,
    content: Size,
    borders: EdgeSizes,
    paddings: EdgeSizes,
    border_color: Color,
    color: Color,
    enabled: bool,
    children: Vec<LayoutNodeId>,
    handlers: EventHandlers,
}

impl Panel {
    /// Create an enabled panel with the given content box
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            id: alloc_node_id(),
            content: Size::new(width, height),
            borders: EdgeSizes::ZERO,
            paddings: EdgeSizes::ZERO,
            border_color: Color::TRANSPARENT,
            color: Color::WHITE,
            enabled: true,
            children: Vec::new(),
            handlers: EventHandlers::new(),
        }
    }

    pub fn id(&self) -> LayoutNodeId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn content_width(&self) -> f32 {
        self.content.width
    }

    pub fn content_height(&self) -> f32 {
        self.content.height
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Set the content box; paddings and borders are added around it
    pub fn set_content_size(&mut self, width: f32, height: f32) {
        self.content = Size::new(width, height);
    }

    /// Outer width: content plus horizontal paddings and borders
    pub fn width(&self) -> f32 {
        self.content.width + self.paddings.horizontal() + self.borders.horizontal()
    }

    /// Outer height: content plus vertical paddings and borders
    pub fn height(&self) -> f32 {
        self.content.height + self.paddings.vertical() + self.borders.vertical()
    }

    // =========================================================================
    // Visual attributes
    // =========================================================================

    pub fn borders(&self) -> EdgeSizes {
        self.borders
    }

    pub fn set_borders(&mut self, borders: EdgeSizes) {
        self.borders = borders;
    }

    pub fn paddings(&self) -> EdgeSizes {
        self.paddings
    }

    pub fn set_paddings(&mut self, paddings: EdgeSizes) {
        self.paddings = paddings;
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    /// Background color
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enabled flag; returns true if it changed
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a child (drawn after existing children). Adding twice is a no-op.
    pub fn add(&mut self, child: LayoutNodeId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    /// Remove a child; returns false if it was not present
    pub fn remove(&mut self, child: LayoutNodeId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| *c != child);
        self.children.len() != before
    }

    pub fn contains(&self, child: LayoutNodeId) -> bool {
        self.children.contains(&child)
    }

    pub fn children(&self) -> &[LayoutNodeId] {
        &self.children
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn handlers(&self) -> &EventHandlers {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut EventHandlers {
        &mut self.handlers
    }

    /// Deliver an event to this panel's subscribers
    pub fn dispatch(&self, ctx: &EventContext) {
        self.handlers.dispatch(ctx);
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        release_node_id(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::alloc_node_id;

    #[test]
    fn test_outer_size_includes_paddings_and_borders() {
        let mut panel = Panel::new(72.0, 20.0);
        panel.set_borders(EdgeSizes::uniform(1.0));
        panel.set_paddings(EdgeSizes::symmetric(2.0, 8.0));

        assert_eq!(panel.width(), 72.0 + 16.0 + 2.0);
        assert_eq!(panel.height(), 20.0 + 4.0 + 2.0);
        // Styling never moves the content box
        assert_eq!(panel.content_size(), Size::new(72.0, 20.0));
    }

    #[test]
    fn test_children_add_remove() {
        let mut panel = Panel::new(0.0, 0.0);
        let a = alloc_node_id();
        let b = alloc_node_id();

        panel.add(a);
        panel.add(b);
        panel.add(a);
        assert_eq!(panel.children(), &[a, b]);

        assert!(panel.remove(a));
        assert!(!panel.remove(a));
        assert_eq!(panel.children(), &[b]);
    }

    #[test]
    fn test_set_enabled_reports_change() {
        let mut panel = Panel::new(0.0, 0.0);
        assert!(panel.enabled());
        assert!(!panel.set_enabled(true));
        assert!(panel.set_enabled(false));
        assert!(!panel.enabled());
    }
}
