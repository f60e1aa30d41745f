//! Push button widget
//!
//! A panel holding a label and, optionally, an icon glyph or an image to the
//! left of it:
//!
//! ```text
//! +-------------------------------+
//! |  Image/Icon      Label        |
//! |  +----------+   +----------+  |
//! |  |          |   |          |  |
//! |  +----------+   +----------+  |
//! +-------------------------------+
//! ```
//!
//! The button tracks three interaction flags (enabled, hovered, pressed) and
//! derives its visual state from them whenever something changes; the
//! matching record of its style table is then pushed onto the panel. Its
//! content box grows to fit the content and the content is centered in it.
//!
//! # Example
//!
//! ```ignore
//! let mut save = Button::new("Save");
//! save.set_icon(icons::SAVE);
//! save.on_click(|_| println!("saved"));
//!
//! let mut router = EventRouter::new();
//! router.pointer_down(&mut save, 10.0, 5.0);
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use tactile_core::events::{event_types, StopPropagation};
use tactile_image::{ImageError, ImageSource};

use crate::event_handler::EventContext;
use crate::event_router::{EventRouter, Interactive};
use crate::image::Image;
use crate::label::{Label, DEFAULT_FONT_SIZE};
use crate::panel::Panel;
use crate::text_measure::{text_measurer, TextMeasurer};
use crate::tree::LayoutNodeId;
use crate::widgets::button_style::{
    default_button_styles, ButtonStyle, ButtonVisualState, SharedButtonStyles,
};

/// Gap between the icon/image and the label
pub const BUTTON_SPACING: f32 = 4.0;

/// Icon font size relative to the label font size
pub const ICON_SCALE: f32 = 1.4;

/// Push button
///
/// Derefs to its [`Panel`] for read access to geometry and visual
/// attributes. Mutations go through the button so layout and style stay
/// in sync.
pub struct Button {
    panel: Panel,
    label: Label,
    icon: Option<Label>,
    image: Option<Image>,
    styles: SharedButtonStyles,
    hovered: bool,
    pressed: bool,
    measurer: Arc<dyn TextMeasurer>,
}

impl Deref for Button {
    type Target = Panel;

    fn deref(&self) -> &Self::Target {
        &self.panel
    }
}

impl Button {
    /// Create a button with the given label text
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_measurer(text, text_measurer())
    }

    /// Create a button whose label and icon are measured by `measurer`
    pub fn with_measurer(text: impl Into<String>, measurer: Arc<dyn TextMeasurer>) -> Self {
        let label = Label::new(text, DEFAULT_FONT_SIZE, Arc::clone(&measurer));
        let mut panel = Panel::new(0.0, 0.0);
        panel.add(label.id());

        let mut button = Self {
            panel,
            label,
            icon: None,
            image: None,
            styles: default_button_styles(),
            hovered: false,
            pressed: false,
            measurer,
        };

        // Size must be known before the style pushes borders around it
        button.recalc();
        button.update();
        button
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn icon(&self) -> Option<&Label> {
        self.icon.as_ref()
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Handle to the style table in use (shared, not copied)
    pub fn styles(&self) -> SharedButtonStyles {
        SharedButtonStyles::clone(&self.styles)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// The visual state implied by the current flags
    pub fn visual_state(&self) -> ButtonVisualState {
        ButtonVisualState::resolve(self.panel.enabled(), self.pressed, self.hovered)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Show a glyph from the icon font left of the label
    ///
    /// Any image or previous icon is discarded first. The icon is sized at
    /// [`ICON_SCALE`] times the label font size.
    pub fn set_icon(&mut self, glyph: char) {
        if let Some(image) = self.image.take() {
            self.panel.remove(image.id());
        }
        if let Some(icon) = self.icon.take() {
            self.panel.remove(icon.id());
        }

        let icon = Label::icon(
            glyph,
            self.label.font_size() * ICON_SCALE,
            Arc::clone(&self.measurer),
        );
        self.panel.add(icon.id());
        self.icon = Some(icon);
        tracing::debug!(
            node = self.panel.id().to_raw(),
            glyph = %glyph.escape_unicode(),
            "button icon set"
        );

        self.recalc();
        self.update();
    }

    /// Show an image left of the label
    ///
    /// The image is loaded before anything is touched: on error the current
    /// image or icon and all positions are left as they were. On success the
    /// previous image and any icon are replaced and the layout is
    /// recomputed. The style is not re-resolved.
    pub fn set_image(&mut self, source: impl Into<ImageSource>) -> Result<(), ImageError> {
        let source = source.into();
        let image = Image::load(source.clone()).map_err(|err| {
            tracing::warn!(?source, %err, "button image failed to load");
            err
        })?;

        if let Some(old) = self.image.take() {
            self.panel.remove(old.id());
        }
        if let Some(icon) = self.icon.take() {
            self.panel.remove(icon.id());
        }
        self.panel.add(image.id());
        tracing::debug!(
            node = self.panel.id().to_raw(),
            width = image.width(),
            height = image.height(),
            "button image set"
        );
        self.image = Some(image);

        self.recalc();
        Ok(())
    }

    /// Replace the label text and re-layout
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.label.set_text(text) {
            self.recalc();
        }
    }

    /// Change the label font size and re-layout
    ///
    /// An existing icon keeps the size it was created with.
    pub fn set_font_size(&mut self, font_size: f32) {
        if self.label.set_font_size(font_size) {
            self.recalc();
        }
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// Use another style table and apply it right away
    pub fn set_styles(&mut self, styles: SharedButtonStyles) {
        self.styles = styles;
        tracing::debug!(node = self.panel.id().to_raw(), "button styles replaced");
        self.update();
    }

    /// Re-apply the active record, e.g. after editing a shared table in place
    pub fn refresh_style(&mut self) {
        self.update();
    }

    // =========================================================================
    // Container state
    // =========================================================================

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.panel.set_enabled(enabled) {
            let ctx = EventContext::new(event_types::ENABLE, self.panel.id());
            self.handle_event(&ctx, &mut EventRouter::new());
        }
    }

    /// Request a content box size; the button still grows to fit its content
    pub fn set_content_size(&mut self, width: f32, height: f32) {
        self.panel.set_content_size(width, height);
        let ctx = EventContext::new(event_types::RESIZE, self.panel.id());
        self.handle_event(&ctx, &mut EventRouter::new());
    }

    /// Subscribe to activation (pointer press or Enter key)
    pub fn on_click<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.panel.handlers_mut().on_click(handler);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn activate(&self) {
        tracing::trace!(node = self.panel.id().to_raw(), "button activated");
        let ctx = EventContext::new(event_types::CLICK, self.panel.id());
        self.panel.dispatch(&ctx);
    }

    /// Resolve the visual state and apply its record
    fn update(&mut self) {
        let state = self.visual_state();
        let style = *self.styles.borrow().get(state);
        tracing::trace!(node = self.panel.id().to_raw(), ?state, "button style resolved");
        self.apply_style(&style);
    }

    fn apply_style(&mut self, style: &ButtonStyle) {
        self.panel.set_border_color(style.border_color);
        self.panel.set_borders(style.border);
        self.panel.set_paddings(style.paddings);
        self.panel.set_color(style.bg_color);
        if let Some(icon) = self.icon.as_mut() {
            icon.set_color(style.fg_color);
        }
        // Label color is left to the label's owner
    }

    /// Grow the content box to fit and center the content in it
    fn recalc(&mut self) {
        let mut width = self.panel.content_width();
        let mut height = self.panel.content_height();

        let side_width = match (&self.image, &self.icon) {
            (Some(image), _) => image.width(),
            (None, Some(icon)) => icon.width(),
            (None, None) => 0.0,
        };

        let min_width = side_width + BUTTON_SPACING + self.label.width();
        let min_height = self.label.height();
        if width < min_width || height < min_height {
            width = width.max(min_width);
            height = height.max(min_height);
            self.panel.set_content_size(width, height);
        }

        let px = (width - min_width) / 2.0;
        let label_y = (height - self.label.height()) / 2.0;
        self.label
            .set_position(px + side_width + BUTTON_SPACING, label_y);

        if let Some(image) = self.image.as_mut() {
            let image_y = (height - image.height()) / 2.0;
            image.set_position(px, image_y);
        } else if let Some(icon) = self.icon.as_mut() {
            icon.set_position(px, label_y);
        }

        tracing::trace!(
            node = self.panel.id().to_raw(),
            width,
            height,
            "button layout"
        );
    }
}

impl Interactive for Button {
    fn node_id(&self) -> LayoutNodeId {
        self.panel.id()
    }

    fn is_enabled(&self) -> bool {
        self.panel.enabled()
    }

    fn handle_event(&mut self, ctx: &EventContext, router: &mut EventRouter) {
        match ctx.event_type {
            event_types::POINTER_ENTER => {
                self.hovered = true;
                self.update();
                router.stop_propagation(StopPropagation::All);
            }
            event_types::POINTER_LEAVE => {
                self.pressed = false;
                self.hovered = false;
                self.update();
                router.stop_propagation(StopPropagation::All);
            }
            event_types::POINTER_MOVE => {
                router.stop_propagation(StopPropagation::All);
            }
            event_types::POINTER_DOWN => {
                router.set_focus(Some(self.panel.id()));
                self.pressed = true;
                self.update();
                self.activate();
                router.stop_propagation(StopPropagation::All);
            }
            event_types::POINTER_UP => {
                self.pressed = false;
                self.update();
                router.stop_propagation(StopPropagation::All);
            }
            event_types::KEY_DOWN if ctx.key_code.is_enter() => {
                self.pressed = true;
                self.update();
                self.activate();
                router.stop_propagation(StopPropagation::SameLayer);
            }
            event_types::KEY_UP if ctx.key_code.is_enter() => {
                self.pressed = false;
                self.update();
                router.stop_propagation(StopPropagation::SameLayer);
            }
            event_types::ENABLE => self.update(),
            event_types::RESIZE => self.recalc(),
            _ => {}
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.panel.id())
            .field("label", &self.label.content())
            .field("icon", &self.icon.is_some())
            .field("image", &self.image.is_some())
            .field("state", &self.visual_state())
            .finish()
    }
}

/// Create a button with the given label text
pub fn button(text: impl Into<String>) -> Button {
    Button::new(text)
}
