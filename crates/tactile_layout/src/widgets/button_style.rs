//! Button style table
//!
//! A [`ButtonStyles`] table holds one [`ButtonStyle`] record per visual
//! state. Buttons hold the table through a [`SharedButtonStyles`] handle:
//! several buttons can observe the same table, and edits made through one
//! handle are seen by every holder the next time it resolves its style.
//!
//! ```ignore
//! let styles = default_button_styles();
//! styles.borrow_mut().hovered.bg_color = Color::from_hex(0xDDE6F5);
//!
//! // Both buttons pick the edit up on their next style resolution
//! ok.refresh_style();
//! cancel.refresh_style();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tactile_core::{Color, EdgeSizes};

/// Visual state a button is drawn in
///
/// Derived from the interaction flags on demand; see [`ButtonVisualState::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVisualState {
    #[default]
    Normal,
    Hovered,
    /// Present in every table but not produced by any input path yet
    Focused,
    Pressed,
    Disabled,
}

impl ButtonVisualState {
    /// Resolve the interaction flags to a visual state
    ///
    /// Precedence: disabled, then pressed, then hovered, then normal.
    pub fn resolve(enabled: bool, pressed: bool, hovered: bool) -> Self {
        if !enabled {
            ButtonVisualState::Disabled
        } else if pressed {
            ButtonVisualState::Pressed
        } else if hovered {
            ButtonVisualState::Hovered
        } else {
            ButtonVisualState::Normal
        }
    }
}

/// Visual attributes applied for one state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    pub border: EdgeSizes,
    pub paddings: EdgeSizes,
    pub border_color: Color,
    pub bg_color: Color,
    /// Icon color
    pub fg_color: Color,
}

/// One style record per visual state
///
/// Records missing from a theme file fall back to the built-in record for
/// that state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyles {
    pub normal: ButtonStyle,
    pub hovered: ButtonStyle,
    pub focused: ButtonStyle,
    pub pressed: ButtonStyle,
    pub disabled: ButtonStyle,
}

impl ButtonStyles {
    pub fn get(&self, state: ButtonVisualState) -> &ButtonStyle {
        match state {
            ButtonVisualState::Normal => &self.normal,
            ButtonVisualState::Hovered => &self.hovered,
            ButtonVisualState::Focused => &self.focused,
            ButtonVisualState::Pressed => &self.pressed,
            ButtonVisualState::Disabled => &self.disabled,
        }
    }

    pub fn get_mut(&mut self, state: ButtonVisualState) -> &mut ButtonStyle {
        match state {
            ButtonVisualState::Normal => &mut self.normal,
            ButtonVisualState::Hovered => &mut self.hovered,
            ButtonVisualState::Focused => &mut self.focused,
            ButtonVisualState::Pressed => &mut self.pressed,
            ButtonVisualState::Disabled => &mut self.disabled,
        }
    }

    /// Wrap in a fresh shared handle
    pub fn into_shared(self) -> SharedButtonStyles {
        Rc::new(RefCell::new(self))
    }
}

impl Default for ButtonStyles {
    fn default() -> Self {
        let border = EdgeSizes::uniform(1.0);
        let paddings = EdgeSizes::symmetric(2.0, 4.0);
        let border_color = Color::from_hex(0x9A9A9A);

        let normal = ButtonStyle {
            border,
            paddings,
            border_color,
            bg_color: Color::from_hex(0xE6E6E6),
            fg_color: Color::from_hex(0x1D1D1F),
        };

        Self {
            normal,
            hovered: ButtonStyle {
                bg_color: Color::from_hex(0xF2F2F2),
                ..normal
            },
            focused: ButtonStyle {
                border_color: Color::from_hex(0x007AFF),
                ..normal
            },
            pressed: ButtonStyle {
                border: EdgeSizes::uniform(2.0),
                border_color: Color::from_hex(0x6E6E73),
                bg_color: Color::from_hex(0xCCCCCC),
                ..normal
            },
            disabled: ButtonStyle {
                border_color: Color::from_hex(0xC8C8C8),
                bg_color: Color::from_hex(0xEDEDED),
                fg_color: Color::from_hex(0xAEAEB2),
                ..normal
            },
        }
    }
}

/// Shared, mutable handle to a style table
///
/// Cloning the handle shares the table; it never deep-copies.
pub type SharedButtonStyles = Rc<RefCell<ButtonStyles>>;

thread_local! {
    static DEFAULT_BUTTON_STYLES: SharedButtonStyles = ButtonStyles::default().into_shared();
}

/// The default style table of the current UI thread
///
/// Every button starts out holding this handle.
pub fn default_button_styles() -> SharedButtonStyles {
    DEFAULT_BUTTON_STYLES.with(Rc::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_over_all_flag_combinations() {
        for bits in 0..8u8 {
            let enabled = bits & 1 != 0;
            let pressed = bits & 2 != 0;
            let hovered = bits & 4 != 0;

            let expected = if !enabled {
                ButtonVisualState::Disabled
            } else if pressed {
                ButtonVisualState::Pressed
            } else if hovered {
                ButtonVisualState::Hovered
            } else {
                ButtonVisualState::Normal
            };

            assert_eq!(ButtonVisualState::resolve(enabled, pressed, hovered), expected);
        }
    }

    #[test]
    fn test_focused_is_never_resolved() {
        for bits in 0..8u8 {
            let state = ButtonVisualState::resolve(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            assert_ne!(state, ButtonVisualState::Focused);
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let mut styles = ButtonStyles::default();
        styles.get_mut(ButtonVisualState::Focused).bg_color = Color::RED;

        assert_eq!(styles.get(ButtonVisualState::Focused).bg_color, Color::RED);
        assert_eq!(styles.focused.bg_color, Color::RED);
        assert_eq!(styles.get(ButtonVisualState::Pressed), &styles.pressed);
    }

    #[test]
    fn test_default_handle_is_shared() {
        let a = default_button_styles();
        let b = default_button_styles();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_default_records_differ_per_state() {
        let styles = ButtonStyles::default();
        assert_ne!(styles.normal, styles.hovered);
        assert_ne!(styles.normal, styles.pressed);
        assert_ne!(styles.normal, styles.disabled);
        assert_ne!(styles.normal, styles.focused);
    }
}
