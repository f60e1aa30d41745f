//! Glyph codes in the icon font (Material Icons code points)
//!
//! Pass any of these to [`Button::set_icon`](crate::widgets::Button::set_icon).

pub const ADD: char = '\u{e145}';
pub const CHECK: char = '\u{e5ca}';
pub const CLOSE: char = '\u{e5cd}';
pub const DELETE: char = '\u{e872}';
pub const EDIT: char = '\u{e3c9}';
pub const FAVORITE: char = '\u{e87d}';
pub const HOME: char = '\u{e88a}';
pub const MENU: char = '\u{e5d2}';
pub const PLAY_ARROW: char = '\u{e037}';
pub const SAVE: char = '\u{e161}';
pub const SEARCH: char = '\u{e8b6}';
pub const SETTINGS: char = '\u{e8b8}';
