//! Pure projection from `(progress, viewport)` to concrete layout metrics.

/// Media card dimensions at progress 0, in logical pixels.
pub const BASE_MEDIA_WIDTH: f64 = 300.0;
pub const BASE_MEDIA_HEIGHT: f64 = 400.0;
/// Maximum title-half translation, in vw units.
pub const TEXT_OFFSET_MAX_DESKTOP: f64 = 150.0;
pub const TEXT_OFFSET_MAX_MOBILE: f64 = 180.0;
/// Viewports narrower than this are laid out as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Viewport dimensions sampled on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Negative or non-finite dimensions clamp to zero; a degenerate
    /// viewport is a no-op for layout, never a fault.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }
}

/// Layout metrics consumed by the view layer. Recomputed whenever progress
/// or the viewport changes; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroLayout {
    /// Media card width in logical pixels.
    pub media_width: f64,
    /// Media card height in logical pixels.
    pub media_height: f64,
    /// Horizontal offset, in vw units, sliding the two title halves apart
    /// in opposite directions.
    pub text_offset: f64,
    /// Opacity of the in-card copy; reaches 1 at progress 0.5.
    pub content_opacity: f64,
}

/// Maps progress and viewport onto layout metrics. Pure; no side effects.
pub fn project(progress: f64, viewport: Viewport) -> HeroLayout {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let text_offset_max = if viewport.is_mobile() {
        TEXT_OFFSET_MAX_MOBILE
    } else {
        TEXT_OFFSET_MAX_DESKTOP
    };

    HeroLayout {
        media_width: lerp(BASE_MEDIA_WIDTH, viewport.width, progress).max(0.0),
        media_height: lerp(BASE_MEDIA_HEIGHT, viewport.height, progress).max(0.0),
        text_offset: progress * text_offset_max,
        content_opacity: (progress * 2.0).clamp(0.0, 1.0),
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + t * (to - from)
}

fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
