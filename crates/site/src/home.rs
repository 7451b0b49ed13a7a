//! Landing page composition.
//!
//! The home page owns the hero for one mount and reacts to its events: the
//! word reveal arms on the hero's first-motion latch, the page sections and
//! smooth document scrolling unlock exactly once when the expansion-complete
//! signal fires, and decorative ripples are pruned every frame.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use bleya_hero::{
    GestureResponse, HeroController, HeroEvent, HeroLayout, RippleTracker, ScrollDirective,
    Viewport, WordRevealSchedule,
};

/// Per-word stagger for the hero title reveal.
const WORD_REVEAL_STAGGER: Duration = Duration::from_millis(150);

pub struct HomePage {
    hero: HeroController,
    expansion_signal: Rc<Cell<bool>>,
    word_reveal: WordRevealSchedule,
    ripples: RippleTracker,
    /// One-shot latch for the smooth-scroll handoff. The expansion signal
    /// can only fire once per mount, but the latch keeps a remount of the
    /// page sections from re-running the handoff.
    smooth_scroll_started: bool,
    sections_revealed: bool,
}

impl HomePage {
    /// Mounts the page: hero pinned to the viewport, title words staggered
    /// in order, sections hidden until the hero hands the page over.
    pub fn new(viewport: Viewport, title_word_count: usize) -> Self {
        let expansion_signal = Rc::new(Cell::new(false));
        let mut hero = HeroController::new(viewport);

        let signal = Rc::clone(&expansion_signal);
        hero.on_expansion_complete(move || signal.set(true));

        let delays = (0..title_word_count).map(|index| WORD_REVEAL_STAGGER * index as u32);

        Self {
            hero,
            expansion_signal,
            word_reveal: WordRevealSchedule::new(delays),
            ripples: RippleTracker::new(),
            smooth_scroll_started: false,
            sections_revealed: false,
        }
    }

    pub fn hero(&self) -> &HeroController {
        &self.hero
    }

    /// True once the expansion handoff has started smooth scrolling.
    pub fn smooth_scroll_started(&self) -> bool {
        self.smooth_scroll_started
    }

    /// True once the below-the-fold sections are revealed.
    pub fn sections_revealed(&self) -> bool {
        self.sections_revealed
    }

    pub fn layout(&self) -> HeroLayout {
        self.hero.layout()
    }

    pub fn handle_wheel(&mut self, delta_y: f64, document_offset: f64) -> GestureResponse {
        let response = self.hero.handle_wheel(delta_y, document_offset);
        self.react(&response, Instant::now());
        response
    }

    pub fn handle_touch_start(&mut self, touch_y: f64) -> bool {
        self.hero.handle_touch_start(touch_y)
    }

    pub fn handle_touch_move(&mut self, touch_y: f64, document_offset: f64) -> GestureResponse {
        let response = self.hero.handle_touch_move(touch_y, document_offset);
        self.react(&response, Instant::now());
        response
    }

    pub fn handle_touch_end(&mut self) {
        self.hero.handle_touch_end();
    }

    pub fn handle_document_scroll(&mut self, offset: f64) -> Option<ScrollDirective> {
        self.hero.handle_document_scroll(offset)
    }

    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.hero.handle_resize(viewport);
    }

    /// Records a decorative click ripple.
    pub fn handle_click(&mut self, x: f64, y: f64) -> u64 {
        self.ripples.spawn(x, y, Instant::now())
    }

    /// Per-frame tick: collects newly due title words and drops expired
    /// ripples. The view layer calls this from its animation loop.
    pub fn frame(&mut self, now: Instant) -> Vec<usize> {
        self.ripples.prune(now);
        self.word_reveal.due(now)
    }

    pub fn active_ripples(&self) -> usize {
        self.ripples.active().len()
    }

    fn react(&mut self, response: &GestureResponse, now: Instant) {
        for event in &response.events {
            if matches!(event, HeroEvent::AnimationsTriggered) {
                self.word_reveal.start(now);
            }
        }

        if self.expansion_signal.get() && !self.smooth_scroll_started {
            self.smooth_scroll_started = true;
            self.sections_revealed = true;
            tracing::info!("hero expansion complete; starting smooth scroll");
        }
    }
}

#[cfg(test)]
mod tests {
    use bleya_hero::ExpansionPhase;

    use super::*;

    fn mounted() -> HomePage {
        HomePage::new(Viewport::new(1_440.0, 900.0), 3)
    }

    fn expand_fully(page: &mut HomePage) {
        while page.hero().state().phase() != ExpansionPhase::Expanded {
            page.handle_wheel(400.0, 0.0);
        }
    }

    #[test]
    fn sections_stay_hidden_until_the_hero_expands() {
        let mut page = mounted();
        assert!(!page.sections_revealed());

        page.handle_wheel(400.0, 0.0);
        assert!(!page.sections_revealed());

        expand_fully(&mut page);
        assert!(page.sections_revealed());
        assert!(page.smooth_scroll_started());
    }

    #[test]
    fn smooth_scroll_handoff_happens_once() {
        let mut page = mounted();
        expand_fully(&mut page);
        assert!(page.smooth_scroll_started());

        // Collapse and re-expand; the latch holds.
        page.handle_wheel(-10.0, 0.0);
        assert_eq!(page.hero().state().phase(), ExpansionPhase::Collapsed);
        expand_fully(&mut page);
        assert!(page.smooth_scroll_started());
    }

    #[test]
    fn first_motion_arms_the_word_reveal() {
        let mut page = mounted();
        assert!(page.frame(Instant::now()).is_empty());

        page.handle_wheel(400.0, 0.0);
        let late = Instant::now() + Duration::from_secs(5);
        assert_eq!(page.frame(late), vec![0, 1, 2]);
        assert!(page.frame(late).is_empty());
    }

    #[test]
    fn ripples_spawn_and_expire_through_the_frame_loop() {
        let mut page = mounted();
        let now = Instant::now();
        page.handle_click(10.0, 20.0);
        assert_eq!(page.active_ripples(), 1);

        page.frame(now + Duration::from_secs(2));
        assert_eq!(page.active_ripples(), 0);
    }
}
