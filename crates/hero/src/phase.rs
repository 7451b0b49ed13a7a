//! The expansion state machine: maps accumulated progress and gesture edges
//! onto the collapsed / revealing / expanded lifecycle of the hero.

use crate::events::{HeroEvent, ScrollDirective};
use crate::input::{InputSource, InteractionSample};
use crate::progress::{PROGRESS_MAX, PROGRESS_MIN, accumulate};

/// Content below the fold becomes visible at this progress.
pub const CONTENT_VISIBLE_THRESHOLD: f64 = 0.75;
/// The document must be at (or within this many pixels of) its top before an
/// upward gesture may re-collapse an expanded hero.
pub const COLLAPSE_DOCUMENT_OFFSET_MAX: f64 = 5.0;
/// Minimum upward touch drag, in pixels, that counts as a collapse gesture.
pub const TOUCH_COLLAPSE_THRESHOLD: f64 = 20.0;

/// Discrete hero lifecycle state derived from progress and the expanded latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpansionPhase {
    /// Progress 0; page scroll locked, viewport pinned.
    Collapsed,
    /// 0 < progress < 1 (or re-entered from expanded); page scroll locked.
    Revealing,
    /// Progress 1; native document flow resumed.
    Expanded,
}

/// Canonical scroll-expansion state, owned by the hero for its mounted
/// lifetime. All derived view fields (visibility, opacity, offsets) are pure
/// projections of this one value.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroState {
    progress: f64,
    expanded: bool,
    content_visible: bool,
    expansion_event_fired: bool,
    animations_triggered: bool,
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroState {
    /// Initial mount state: collapsed, progress 0, latches cleared.
    pub fn new() -> Self {
        Self {
            progress: PROGRESS_MIN,
            expanded: false,
            content_visible: false,
            expansion_event_fired: false,
            animations_triggered: false,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> ExpansionPhase {
        if self.expanded {
            ExpansionPhase::Expanded
        } else if self.progress <= PROGRESS_MIN {
            ExpansionPhase::Collapsed
        } else {
            ExpansionPhase::Revealing
        }
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn expansion_event_fired(&self) -> bool {
        self.expansion_event_fired
    }

    pub fn animations_triggered(&self) -> bool {
        self.animations_triggered
    }

    /// True while the hero owns the viewport and the document must not scroll.
    pub fn is_scroll_locked(&self) -> bool {
        !self.expanded
    }

    /// Digests one normalized input sample.
    ///
    /// Returns `true` when the event was consumed and its default scroll
    /// behavior must be suppressed. While collapsed/revealing every sample is
    /// consumed; while expanded only a qualifying collapse gesture is.
    pub fn apply_gesture(
        &mut self,
        sample: InteractionSample,
        document_offset: f64,
        events: &mut Vec<HeroEvent>,
    ) -> bool {
        if self.expanded {
            return self.try_collapse(sample, document_offset, events);
        }

        let from = self.phase();
        let (gain_expanding, gain_collapsing) = sample.gains();
        self.progress = accumulate(
            self.progress,
            sample.raw_delta,
            gain_expanding,
            gain_collapsing,
        );

        if self.progress >= PROGRESS_MAX {
            self.expanded = true;
            if !self.expansion_event_fired {
                self.expansion_event_fired = true;
                events.push(HeroEvent::ExpansionCompleted);
            }
        }

        self.sync_content_visibility(events);

        if self.progress > PROGRESS_MIN && !self.animations_triggered {
            self.animations_triggered = true;
            events.push(HeroEvent::AnimationsTriggered);
        }

        let to = self.phase();
        if from != to {
            events.push(HeroEvent::PhaseChanged { from, to });
        }

        true
    }

    /// Answers a stray document scroll while the viewport is pinned.
    pub fn observe_document_scroll(&self, _offset: f64) -> Option<ScrollDirective> {
        self.is_scroll_locked().then_some(ScrollDirective::ResetToTop)
    }

    fn try_collapse(
        &mut self,
        sample: InteractionSample,
        document_offset: f64,
        events: &mut Vec<HeroEvent>,
    ) -> bool {
        if !is_collapse_gesture(sample) || document_offset > COLLAPSE_DOCUMENT_OFFSET_MAX {
            return false;
        }

        let from = self.phase();
        self.expanded = false;
        // Progress is intentionally left near the ceiling: the machine
        // re-enters `Revealing` at progress ~1 and content stays visible.
        events.push(HeroEvent::PhaseChanged {
            from,
            to: self.phase(),
        });
        true
    }

    fn sync_content_visibility(&mut self, events: &mut Vec<HeroEvent>) {
        // Once fully expanded, content is never re-hidden, even if progress
        // later falls below the threshold while re-collapsing.
        let visible = self.expanded
            || self.expansion_event_fired
            || self.progress >= CONTENT_VISIBLE_THRESHOLD;

        if visible != self.content_visible {
            self.content_visible = visible;
            events.push(HeroEvent::ContentVisibilityChanged { visible });
        }
    }
}

fn is_collapse_gesture(sample: InteractionSample) -> bool {
    match sample.source {
        InputSource::Wheel => sample.raw_delta < 0.0,
        // Touch needs a deliberate drag before it may collapse the hero.
        InputSource::Touch => sample.raw_delta <= -TOUCH_COLLAPSE_THRESHOLD,
    }
}
