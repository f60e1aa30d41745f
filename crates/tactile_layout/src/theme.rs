//! Theme files
//!
//! Button styles can be described in TOML, one table per visual state:
//!
//! ```toml
//! [button.normal]
//! border = { top = 1, right = 1, bottom = 1, left = 1 }
//! paddings = { top = 2, right = 4, bottom = 2, left = 4 }
//! border_color = { r = 0.6, g = 0.6, b = 0.6 }
//! bg_color = { r = 0.9, g = 0.9, b = 0.9 }
//! fg_color = { r = 0.1, g = 0.1, b = 0.1 }
//!
//! [button.pressed]
//! bg_color = { r = 0.8, g = 0.8, b = 0.8 }
//! ```
//!
//! A state table that is absent keeps the built-in record for that state.
//! A state table that is present replaces the record; its unspecified
//! attributes are zero widths and black.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::widgets::button_style::{ButtonStyles, SharedButtonStyles};

/// Widget styles loaded from a theme file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub button: ButtonStyles,
}

impl Theme {
    /// Parse a theme from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let theme = toml::from_str(source)?;
        Ok(theme)
    }

    /// Read and parse a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    /// Button styles as a fresh shared handle
    pub fn button_styles(&self) -> SharedButtonStyles {
        self.button.clone().into_shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::{Color, EdgeSizes};

    #[test]
    fn test_partial_theme_keeps_missing_states() {
        let theme = Theme::from_toml_str(
            r#"
            [button.pressed]
            border = { top = 3, right = 3, bottom = 3, left = 3 }
            bg_color = { r = 1.0, g = 0.0, b = 0.0 }
            "#,
        )
        .unwrap();

        let defaults = ButtonStyles::default();
        assert_eq!(theme.button.normal, defaults.normal);
        assert_eq!(theme.button.disabled, defaults.disabled);
        assert_eq!(theme.button.pressed.border, EdgeSizes::uniform(3.0));
        assert_eq!(theme.button.pressed.bg_color, Color::RED);
        // Unspecified attribute in a present record
        assert_eq!(theme.button.pressed.paddings, EdgeSizes::ZERO);
    }

    #[test]
    fn test_empty_theme_is_default() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_border_color_alpha() {
        let theme = Theme::from_toml_str(
            "[button.normal]\nborder_color = { r = 0.0, g = 0.0, b = 0.0, a = 0.25 }\n",
        )
        .unwrap();
        assert_eq!(theme.button.normal.border_color.a, 0.25);
    }

    #[test]
    fn test_invalid_theme() {
        let err = Theme::from_toml_str("[button.normal]\nbg_color = \"red\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Theme::load("/no/such/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Read { .. }));
    }

    #[test]
    fn test_button_styles_handle_is_fresh() {
        let theme = Theme::default();
        let a = theme.button_styles();
        let b = theme.button_styles();
        assert!(!std::rc::Rc::ptr_eq(&a, &b));
        assert_eq!(*a.borrow(), *b.borrow());
    }
}
