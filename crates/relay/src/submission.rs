//! Chat submission lifecycle.
//!
//! One request may be outstanding at a time; submitting while a request is
//! in flight is rejected deterministically instead of double-sending.

/// Lifecycle state for the chat surface's single outstanding request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Done,
    Failed {
        message: String,
    },
}

/// State transition input for the submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionTransition {
    Submit,
    Resolve,
    Reject { message: String },
    ResetToIdle,
}

/// Rejection reason for illegal submission transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionRejection {
    /// A request is already outstanding; the duplicate submit is dropped.
    AlreadyInFlight,
    /// Resolve/reject arrived with nothing outstanding.
    NoActiveRequest,
}

pub type SubmissionTransitionResult = Result<SubmissionState, SubmissionRejection>;

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Applies one transition deterministically.
    ///
    /// Any non-in-flight state accepts a new submit; terminal transitions
    /// require an outstanding request.
    pub fn apply(&self, transition: SubmissionTransition) -> SubmissionTransitionResult {
        match transition {
            SubmissionTransition::Submit => self.apply_submit(),
            SubmissionTransition::Resolve => self.apply_terminal(Self::Done),
            SubmissionTransition::Reject { message } => {
                self.apply_terminal(Self::Failed { message })
            }
            SubmissionTransition::ResetToIdle => Ok(Self::Idle),
        }
    }

    fn apply_submit(&self) -> SubmissionTransitionResult {
        match self {
            Self::InFlight => Err(SubmissionRejection::AlreadyInFlight),
            Self::Idle | Self::Done | Self::Failed { .. } => Ok(Self::InFlight),
        }
    }

    fn apply_terminal(&self, next: Self) -> SubmissionTransitionResult {
        match self {
            Self::InFlight => Ok(next),
            Self::Idle | Self::Done | Self::Failed { .. } => {
                Err(SubmissionRejection::NoActiveRequest)
            }
        }
    }
}
