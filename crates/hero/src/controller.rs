//! The hero controller: owns the canonical scroll state for one mount,
//! normalizes raw browser-style events, keeps the scroll lock in step with
//! the machine, and fans the one-shot expansion signal out to listeners.

use crate::events::{HeroEvent, ScrollDirective};
use crate::input::{InteractionSample, TouchTracker};
use crate::lock::{ScrollLock, ScrollLockGuard};
use crate::phase::HeroState;
use crate::projection::{HeroLayout, Viewport, project};

/// What the view layer must do with the event that produced this response.
#[derive(Debug, Default)]
pub struct GestureResponse {
    /// True when the event was consumed and its default must be prevented.
    pub consumed: bool,
    pub events: Vec<HeroEvent>,
}

type ExpansionListener = Box<dyn FnMut()>;

pub struct HeroController {
    state: HeroState,
    viewport: Viewport,
    touch: TouchTracker,
    lock: ScrollLock,
    lock_guard: Option<ScrollLockGuard>,
    expansion_listeners: Vec<ExpansionListener>,
}

impl HeroController {
    /// Mounts the hero: fresh state, viewport pinned, scroll lock held.
    pub fn new(viewport: Viewport) -> Self {
        let lock = ScrollLock::new();
        let lock_guard = Some(lock.acquire());
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "hero mounted; scroll lock acquired"
        );

        Self {
            state: HeroState::new(),
            viewport,
            touch: TouchTracker::new(),
            lock,
            lock_guard,
            expansion_listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &HeroState {
        &self.state
    }

    /// Shared handle the document shell polls to decide whether native
    /// scrolling is allowed.
    pub fn scroll_lock(&self) -> ScrollLock {
        self.lock.clone()
    }

    /// Current layout metrics for the view layer.
    pub fn layout(&self) -> HeroLayout {
        project(self.state.progress(), self.viewport)
    }

    /// Registers a callback for the one-shot expansion-complete signal.
    pub fn on_expansion_complete(&mut self, listener: impl FnMut() + 'static) {
        self.expansion_listeners.push(Box::new(listener));
    }

    pub fn handle_wheel(&mut self, delta_y: f64, document_offset: f64) -> GestureResponse {
        self.apply(InteractionSample::wheel(delta_y), document_offset)
    }

    /// Anchors a touch gesture. Returns true when the event must be
    /// default-prevented (always, while the viewport is pinned).
    pub fn handle_touch_start(&mut self, touch_y: f64) -> bool {
        self.touch.start(touch_y);
        self.state.is_scroll_locked()
    }

    pub fn handle_touch_move(&mut self, touch_y: f64, document_offset: f64) -> GestureResponse {
        match self.touch.move_to(touch_y) {
            Some(sample) => self.apply(sample, document_offset),
            None => GestureResponse::default(),
        }
    }

    pub fn handle_touch_end(&mut self) {
        self.touch.end();
    }

    /// A scroll event reached the document; while pinned it is answered
    /// with a reset directive so the page never visibly moves.
    pub fn handle_document_scroll(&mut self, offset: f64) -> Option<ScrollDirective> {
        self.state.observe_document_scroll(offset)
    }

    /// Re-samples the viewport (resize listener).
    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn apply(&mut self, sample: InteractionSample, document_offset: f64) -> GestureResponse {
        let mut events = Vec::new();
        let consumed = self.state.apply_gesture(sample, document_offset, &mut events);
        self.sync_scroll_lock();

        for event in &events {
            match event {
                HeroEvent::PhaseChanged { from, to } => {
                    tracing::debug!(
                        ?from,
                        ?to,
                        progress = self.state.progress(),
                        "hero phase changed"
                    );
                }
                HeroEvent::ExpansionCompleted => {
                    tracing::debug!("dispatching expansion complete signal");
                    for listener in &mut self.expansion_listeners {
                        listener();
                    }
                }
                HeroEvent::ContentVisibilityChanged { .. }
                | HeroEvent::AnimationsTriggered => {}
            }
        }

        GestureResponse { consumed, events }
    }

    fn sync_scroll_lock(&mut self) {
        if self.state.is_scroll_locked() {
            if self.lock_guard.is_none() {
                self.lock_guard = Some(self.lock.acquire());
            }
        } else if self.lock_guard.take().is_some() {
            tracing::debug!("hero expanded; scroll lock released");
        }
    }
}

impl Drop for HeroController {
    fn drop(&mut self) {
        // Unmount: listeners go away with the controller and the guard (if
        // still held) releases the lock, so a torn-down hero can never keep
        // the page pinned.
        self.expansion_listeners.clear();
        if self.lock_guard.take().is_some() {
            tracing::debug!("hero unmounted; scroll lock released");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::phase::ExpansionPhase;

    fn desktop() -> Viewport {
        Viewport::new(1_440.0, 900.0)
    }

    fn expand_fully(controller: &mut HeroController) {
        while controller.state().phase() != ExpansionPhase::Expanded {
            controller.handle_wheel(400.0, 0.0);
        }
    }

    #[test]
    fn lock_follows_the_phase_in_both_directions() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut controller = HeroController::new(desktop());
        let lock = controller.scroll_lock();
        assert!(lock.is_locked());

        expand_fully(&mut controller);
        assert!(!lock.is_locked());

        let response = controller.handle_wheel(-10.0, 0.0);
        assert!(response.consumed);
        assert!(lock.is_locked());
    }

    #[test]
    fn dropping_the_controller_releases_the_lock() {
        let controller = HeroController::new(desktop());
        let lock = controller.scroll_lock();
        assert!(lock.is_locked());

        drop(controller);
        assert!(!lock.is_locked());
    }

    #[test]
    fn expansion_listeners_fire_exactly_once_per_mount() {
        let fired = Rc::new(Cell::new(0_u32));
        let mut controller = HeroController::new(desktop());

        let counter = Rc::clone(&fired);
        controller.on_expansion_complete(move || counter.set(counter.get() + 1));

        expand_fully(&mut controller);
        assert_eq!(fired.get(), 1);

        // Collapse at the top and expand again; the latch holds.
        controller.handle_wheel(-10.0, 0.0);
        expand_fully(&mut controller);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn touch_gesture_drives_expansion_through_the_controller() {
        let mut controller = HeroController::new(desktop());

        assert!(controller.handle_touch_start(800.0));
        // 200px upward drag at the expanding touch gain.
        let response = controller.handle_touch_move(600.0, 0.0);
        assert!(response.consumed);
        assert!(controller.state().progress() > 0.0);
        controller.handle_touch_end();

        // A move after touch end contributes nothing.
        let response = controller.handle_touch_move(400.0, 0.0);
        assert!(!response.consumed);
        assert!(response.events.is_empty());
    }

    #[test]
    fn stray_document_scrolls_are_reset_until_expanded() {
        let mut controller = HeroController::new(desktop());
        assert_eq!(
            controller.handle_document_scroll(80.0),
            Some(ScrollDirective::ResetToTop)
        );

        expand_fully(&mut controller);
        assert_eq!(controller.handle_document_scroll(80.0), None);
    }

    #[test]
    fn resize_re_projects_the_layout() {
        let mut controller = HeroController::new(desktop());
        expand_fully(&mut controller);
        assert_eq!(controller.layout().media_width, 1_440.0);

        controller.handle_resize(Viewport::new(390.0, 844.0));
        let layout = controller.layout();
        assert_eq!(layout.media_width, 390.0);
        assert_eq!(layout.text_offset, crate::projection::TEXT_OFFSET_MAX_MOBILE);
    }
}
