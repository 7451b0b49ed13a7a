use crate::phase::ExpansionPhase;

/// Emitted by the expansion state machine as it digests input samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroEvent {
    /// Discrete phase edge (collapsed/revealing/expanded).
    PhaseChanged {
        from: ExpansionPhase,
        to: ExpansionPhase,
    },
    /// Below-the-fold content visibility toggled.
    ContentVisibilityChanged { visible: bool },
    /// One-shot signal marking the transition to fully expanded.
    ///
    /// Fires at most once per mount so sibling sections can unlock exactly
    /// once, no matter how often progress oscillates at the ceiling.
    ExpansionCompleted,
    /// One-shot signal that progress first rose above zero; gates the
    /// word-reveal schedule.
    AnimationsTriggered,
}

/// Directive for the host document while the hero owns the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirective {
    /// A stray scroll slipped through while locked; pin the document back
    /// to the top.
    ResetToTop,
}
