//! Event vocabulary
//!
//! Events are identified by plain `u32` constants so element handlers can be
//! keyed by type without an enum per widget. Key codes and the two
//! propagation-stop granularities also live here.

/// Event type identifier
pub type EventType = u32;

/// Well-known event types
pub mod event_types {
    use super::EventType;

    /// Pointer entered the element bounds
    pub const POINTER_ENTER: EventType = 1;
    /// Pointer left the element bounds
    pub const POINTER_LEAVE: EventType = 2;
    /// Pointer moved inside the element bounds
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer button pressed over the element
    pub const POINTER_DOWN: EventType = 4;
    /// Pointer button released
    pub const POINTER_UP: EventType = 5;

    /// Key pressed while the element has keyboard focus
    pub const KEY_DOWN: EventType = 10;
    /// Key released while the element has keyboard focus
    pub const KEY_UP: EventType = 11;

    /// Element gained keyboard focus
    pub const FOCUS: EventType = 20;
    /// Element lost keyboard focus
    pub const BLUR: EventType = 21;

    /// Element enabled state changed
    pub const ENABLE: EventType = 30;
    /// Element content box changed size
    pub const RESIZE: EventType = 31;

    /// Element was activated (pointer press or Enter key)
    pub const CLICK: EventType = 40;
}

/// Platform-independent key code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const UNKNOWN: KeyCode = KeyCode(0);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const TAB: KeyCode = KeyCode(9);
    pub const BACKSPACE: KeyCode = KeyCode(8);

    pub fn is_enter(self) -> bool {
        self == Self::ENTER
    }
}

impl From<u32> for KeyCode {
    fn from(code: u32) -> Self {
        KeyCode(code)
    }
}

/// How far an already-dispatched event is kept from reaching ancestors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopPropagation {
    /// Stop delivery to every dispatch layer
    All,
    /// Stop delivery only within the layer the event is dispatched in
    SameLayer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types_are_distinct() {
        use event_types::*;
        let all = [
            POINTER_ENTER,
            POINTER_LEAVE,
            POINTER_MOVE,
            POINTER_DOWN,
            POINTER_UP,
            KEY_DOWN,
            KEY_UP,
            FOCUS,
            BLUR,
            ENABLE,
            RESIZE,
            CLICK,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_key_code_enter() {
        assert!(KeyCode::from(13).is_enter());
        assert!(!KeyCode::SPACE.is_enter());
    }
}
