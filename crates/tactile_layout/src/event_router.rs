//! Event routing from input to interactive elements
//!
//! The router plays the part of the window root during a dispatch: it owns
//! keyboard focus and records whether the receiving element asked for the
//! event to stop propagating, and at which granularity.
//!
//! ```text
//! Input (pointer pressed, key released)
//!     ↓
//! EventRouter::dispatch (resets the propagation flag)
//!     ↓
//! Interactive::handle_event (updates state, may set focus / stop propagation)
//!     ↓
//! Option<StopPropagation> returned to the caller
//! ```

use tactile_core::events::{event_types, KeyCode, StopPropagation};

use crate::event_handler::EventContext;
use crate::tree::LayoutNodeId;

/// An element that consumes routed events
pub trait Interactive {
    /// The element's node id (focus target)
    fn node_id(&self) -> LayoutNodeId;

    /// Whether the element currently accepts input
    fn is_enabled(&self) -> bool {
        true
    }

    /// Handle one event synchronously
    fn handle_event(&mut self, ctx: &EventContext, router: &mut EventRouter);
}

/// Routes input events to elements and tracks focus
#[derive(Debug, Default)]
pub struct EventRouter {
    /// Element receiving keyboard events
    focused: Option<LayoutNodeId>,
    /// Propagation stop requested during the current dispatch
    stopped: Option<StopPropagation>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<LayoutNodeId> {
        self.focused
    }

    /// Set keyboard focus to an element (or None to clear focus)
    pub fn set_focus(&mut self, node: Option<LayoutNodeId>) {
        if self.focused != node {
            tracing::trace!(
                from = ?self.focused.map(LayoutNodeId::to_raw),
                to = ?node.map(LayoutNodeId::to_raw),
                "key focus changed"
            );
        }
        self.focused = node;
    }

    /// Keep the event being dispatched from reaching ancestors
    ///
    /// A request to stop everywhere is never downgraded by a later
    /// same-layer request within one dispatch.
    pub fn stop_propagation(&mut self, mode: StopPropagation) {
        self.stopped = match (self.stopped, mode) {
            (Some(StopPropagation::All), _) => Some(StopPropagation::All),
            _ => Some(mode),
        };
    }

    /// Propagation stop requested so far in the current dispatch
    pub fn propagation(&self) -> Option<StopPropagation> {
        self.stopped
    }

    /// Deliver an event to `target` and report any propagation stop
    pub fn dispatch(
        &mut self,
        target: &mut dyn Interactive,
        ctx: EventContext,
    ) -> Option<StopPropagation> {
        self.stopped = None;
        target.handle_event(&ctx, self);
        self.stopped.take()
    }

    // =========================================================================
    // Input helpers
    // =========================================================================

    /// Deliver a pointer event unless the target is disabled
    fn pointer(
        &mut self,
        target: &mut dyn Interactive,
        event_type: u32,
        x: f32,
        y: f32,
    ) -> Option<StopPropagation> {
        if !target.is_enabled() {
            return None;
        }
        let ctx = EventContext::new(event_type, target.node_id()).with_mouse_pos(x, y);
        self.dispatch(target, ctx)
    }

    pub fn pointer_enter(&mut self, target: &mut dyn Interactive) -> Option<StopPropagation> {
        self.pointer(target, event_types::POINTER_ENTER, 0.0, 0.0)
    }

    pub fn pointer_leave(&mut self, target: &mut dyn Interactive) -> Option<StopPropagation> {
        self.pointer(target, event_types::POINTER_LEAVE, 0.0, 0.0)
    }

    pub fn pointer_down(
        &mut self,
        target: &mut dyn Interactive,
        x: f32,
        y: f32,
    ) -> Option<StopPropagation> {
        self.pointer(target, event_types::POINTER_DOWN, x, y)
    }

    pub fn pointer_up(
        &mut self,
        target: &mut dyn Interactive,
        x: f32,
        y: f32,
    ) -> Option<StopPropagation> {
        self.pointer(target, event_types::POINTER_UP, x, y)
    }

    /// Deliver a key event if `target` holds keyboard focus and is enabled
    fn key(
        &mut self,
        target: &mut dyn Interactive,
        event_type: u32,
        code: KeyCode,
    ) -> Option<StopPropagation> {
        if self.focused != Some(target.node_id()) || !target.is_enabled() {
            return None;
        }
        let ctx = EventContext::new(event_type, target.node_id()).with_key_code(code);
        self.dispatch(target, ctx)
    }

    pub fn key_down(
        &mut self,
        target: &mut dyn Interactive,
        code: KeyCode,
    ) -> Option<StopPropagation> {
        self.key(target, event_types::KEY_DOWN, code)
    }

    pub fn key_up(&mut self, target: &mut dyn Interactive, code: KeyCode) -> Option<StopPropagation> {
        self.key(target, event_types::KEY_UP, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::alloc_node_id;

    /// Records events and stops propagation on pointer input
    struct Probe {
        id: LayoutNodeId,
        enabled: bool,
        seen: Vec<u32>,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                id: alloc_node_id(),
                enabled: true,
                seen: Vec::new(),
            }
        }
    }

    impl Interactive for Probe {
        fn node_id(&self) -> LayoutNodeId {
            self.id
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn handle_event(&mut self, ctx: &EventContext, router: &mut EventRouter) {
            self.seen.push(ctx.event_type);
            if ctx.event_type == event_types::POINTER_DOWN {
                router.set_focus(Some(self.id));
                router.stop_propagation(StopPropagation::SameLayer);
                router.stop_propagation(StopPropagation::All);
                router.stop_propagation(StopPropagation::SameLayer);
            }
        }
    }

    #[test]
    fn test_stop_all_is_not_downgraded() {
        let mut router = EventRouter::new();
        let mut probe = Probe::new();

        let stop = router.pointer_down(&mut probe, 1.0, 1.0);
        assert_eq!(stop, Some(StopPropagation::All));
        assert_eq!(router.focused(), Some(probe.id));
    }

    #[test]
    fn test_flag_resets_between_dispatches() {
        let mut router = EventRouter::new();
        let mut probe = Probe::new();

        router.pointer_down(&mut probe, 0.0, 0.0);
        assert_eq!(router.pointer_enter(&mut probe), None);
        assert_eq!(router.propagation(), None);
    }

    #[test]
    fn test_keys_need_focus() {
        let mut router = EventRouter::new();
        let mut probe = Probe::new();

        router.key_down(&mut probe, KeyCode::ENTER);
        assert!(probe.seen.is_empty());

        router.set_focus(Some(probe.id));
        router.key_down(&mut probe, KeyCode::ENTER);
        assert_eq!(probe.seen, vec![event_types::KEY_DOWN]);
    }

    #[test]
    fn test_disabled_target_gets_no_input() {
        let mut router = EventRouter::new();
        let mut probe = Probe::new();
        probe.enabled = false;

        router.pointer_enter(&mut probe);
        router.pointer_down(&mut probe, 0.0, 0.0);
        assert!(probe.seen.is_empty());

        // Raw dispatch is unconditional
        let ctx = EventContext::new(event_types::ENABLE, probe.id);
        router.dispatch(&mut probe, ctx);
        assert_eq!(probe.seen, vec![event_types::ENABLE]);
    }
}
