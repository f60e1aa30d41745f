//! Event handler storage for elements
//!
//! Elements keep an [`EventHandlers`] registry of callbacks keyed by event
//! type. Widgets dispatch their own outgoing events (such as `CLICK`) through
//! it, and callers subscribe with `on`/`on_click`.
//!
//! ```ignore
//! let mut button = Button::new("Save");
//! button.on_click(|_| println!("saved"));
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use tactile_core::events::{event_types, EventType, KeyCode};

use crate::tree::LayoutNodeId;

/// Callback for handling events
///
/// Uses Rc since UI is single-threaded.
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// Context passed to event handlers
#[derive(Clone, Debug)]
pub struct EventContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// The node that received the event
    pub node_id: LayoutNodeId,
    /// Pointer position at time of event (if applicable)
    pub mouse_x: f32,
    pub mouse_y: f32,
    /// Key code for KEY_DOWN/KEY_UP events
    pub key_code: KeyCode,
}

impl EventContext {
    pub fn new(event_type: EventType, node_id: LayoutNodeId) -> Self {
        Self {
            event_type,
            node_id,
            mouse_x: 0.0,
            mouse_y: 0.0,
            key_code: KeyCode::UNKNOWN,
        }
    }

    pub fn with_mouse_pos(mut self, x: f32, y: f32) -> Self {
        self.mouse_x = x;
        self.mouse_y = y;
        self
    }

    pub fn with_key_code(mut self, code: KeyCode) -> Self {
        self.key_code = code;
        self
    }
}

/// Storage for event handlers on an element
#[derive(Default, Clone)]
pub struct EventHandlers {
    handlers: HashMap<EventType, Vec<EventCallback>>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check if a handler is registered for a specific event type
    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Rc::new(handler));
    }

    /// Register an activation handler
    pub fn on_click<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(event_types::CLICK, handler);
    }

    pub fn get(&self, event_type: EventType) -> Option<&[EventCallback]> {
        self.handlers.get(&event_type).map(|v| v.as_slice())
    }

    /// Dispatch an event to all registered handlers for that type, in
    /// registration order
    pub fn dispatch(&self, ctx: &EventContext) {
        if let Some(handlers) = self.handlers.get(&ctx.event_type) {
            for handler in handlers {
                handler(ctx);
            }
        }
    }

    /// Remove every handler for an event type
    pub fn clear(&mut self, event_type: EventType) {
        self.handlers.remove(&event_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::alloc_node_id;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_dispatch_only_matching_type() {
        let mut handlers = EventHandlers::new();
        let clicks = Rc::new(Cell::new(0));

        let c = Rc::clone(&clicks);
        handlers.on_click(move |_| c.set(c.get() + 1));

        let node = alloc_node_id();
        handlers.dispatch(&EventContext::new(event_types::CLICK, node));
        handlers.dispatch(&EventContext::new(event_types::POINTER_UP, node));
        handlers.dispatch(&EventContext::new(event_types::CLICK, node));

        assert_eq!(clicks.get(), 2);
        assert!(handlers.has_handler(event_types::CLICK));
        assert!(!handlers.has_handler(event_types::POINTER_UP));
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut handlers = EventHandlers::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let order = Rc::clone(&order);
            handlers.on(event_types::KEY_DOWN, move |_| order.borrow_mut().push(i));
        }

        handlers.dispatch(&EventContext::new(event_types::KEY_DOWN, alloc_node_id()));
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut handlers = EventHandlers::new();
        handlers.on_click(|_| {});
        assert!(!handlers.is_empty());
        handlers.clear(event_types::CLICK);
        assert!(handlers.is_empty());
        assert!(handlers.get(event_types::CLICK).is_none());
    }

    #[test]
    fn test_context_builders() {
        let ctx = EventContext::new(event_types::KEY_UP, alloc_node_id())
            .with_key_code(KeyCode::ENTER)
            .with_mouse_pos(3.0, 4.0);
        assert!(ctx.key_code.is_enter());
        assert_eq!((ctx.mouse_x, ctx.mouse_y), (3.0, 4.0));
    }
}
