//! Normalizes heterogeneous pointer input into one signed delta per frame.

/// Progress units per pixel of wheel delta.
pub const WHEEL_GAIN: f64 = 0.0006;
/// Touch sensitivity while expanding (dragging toward full expansion).
pub const TOUCH_GAIN_EXPANDING: f64 = 0.006;
/// Touch sensitivity while collapsing. Smaller than the expanding gain so
/// expansion feels faster than collapse.
pub const TOUCH_GAIN_COLLAPSING: f64 = 0.004;

/// Physical origin of one interaction sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Wheel,
    Touch,
}

/// One normalized input event, produced per wheel tick or touch move and
/// consumed immediately by the expansion state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSample {
    /// Signed magnitude in pixels; positive drives toward expansion.
    pub raw_delta: f64,
    pub source: InputSource,
}

impl InteractionSample {
    /// Builds a sample from a wheel event's vertical delta.
    pub fn wheel(delta_y: f64) -> Self {
        Self {
            raw_delta: delta_y,
            source: InputSource::Wheel,
        }
    }

    /// Builds a sample from an already-computed touch drag delta.
    pub fn touch(delta_y: f64) -> Self {
        Self {
            raw_delta: delta_y,
            source: InputSource::Touch,
        }
    }

    /// Direction sign of this sample: -1, 0 or 1.
    pub fn direction(&self) -> i8 {
        if self.raw_delta > 0.0 {
            1
        } else if self.raw_delta < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Source-specific `(expanding, collapsing)` gain pair.
    pub fn gains(&self) -> (f64, f64) {
        match self.source {
            InputSource::Wheel => (WHEEL_GAIN, WHEEL_GAIN),
            InputSource::Touch => (TOUCH_GAIN_EXPANDING, TOUCH_GAIN_COLLAPSING),
        }
    }
}

/// Tracks the active touch anchor and turns move events into drag deltas.
///
/// A move without a preceding start yields nothing; touch end clears the
/// anchor so a stale anchor can never leak into the next gesture.
#[derive(Debug, Default)]
pub struct TouchTracker {
    anchor_y: Option<f64>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self { anchor_y: None }
    }

    pub fn is_tracking(&self) -> bool {
        self.anchor_y.is_some()
    }

    /// Anchors the gesture at the initial touch position.
    pub fn start(&mut self, touch_y: f64) {
        self.anchor_y = Some(touch_y);
    }

    /// Produces the drag delta since the last sample and re-anchors, so each
    /// move event contributes its increment exactly once.
    pub fn move_to(&mut self, touch_y: f64) -> Option<InteractionSample> {
        let anchor_y = self.anchor_y?;
        self.anchor_y = Some(touch_y);
        Some(InteractionSample::touch(anchor_y - touch_y))
    }

    pub fn end(&mut self) {
        self.anchor_y = None;
    }
}
