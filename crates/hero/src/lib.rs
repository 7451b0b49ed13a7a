#![deny(unsafe_code)]

//! Scroll-expansion core for the Bleya landing hero.
//!
//! User input flows through one pipeline: raw wheel/touch events are
//! normalized into signed deltas, integrated into a bounded progress value,
//! fed through the expansion state machine, and projected into layout
//! metrics for the view layer. The controller composes the pipeline and
//! owns all of it for exactly one mount.

/// Hero lifecycle and teardown orchestration.
pub mod controller;
/// Timed decorative effects (word reveal, click ripples).
pub mod effects;
pub mod events;
/// Wheel/touch normalization into interaction samples.
pub mod input;
/// Scoped page-scroll locking.
pub mod lock;
/// The collapsed/revealing/expanded state machine.
pub mod phase;
pub mod progress;
/// Progress-to-layout projection.
pub mod projection;

pub use controller::{GestureResponse, HeroController};
pub use effects::{Ripple, RippleTracker, WordRevealSchedule};
pub use events::{HeroEvent, ScrollDirective};
pub use input::{InputSource, InteractionSample, TouchTracker};
pub use lock::{ScrollLock, ScrollLockGuard};
pub use phase::{ExpansionPhase, HeroState};
pub use progress::accumulate;
pub use projection::{HeroLayout, Viewport, project};
