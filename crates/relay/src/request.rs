use crate::error::{RelayError, RelayResult};

/// One user prompt bound for the model. Created per submission, consumed by
/// a single relay call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    prompt: String,
}

impl RelayRequest {
    /// Builds a request, enforcing the non-empty invariant at construction.
    /// Whitespace-only prompts yield `None`.
    pub fn new(prompt: impl Into<String>) -> Option<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return None;
        }
        Some(Self { prompt })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Uniform call-boundary result for the chat surface: either the assistant
/// reply or an error string to display in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RelayOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Normalizes a relay result; errors become display strings and never
    /// propagate further.
    pub fn from_result(result: RelayResult<String>) -> Self {
        match result {
            Ok(message) => Self::success(message),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

impl From<RelayError> for RelayOutcome {
    fn from(error: RelayError) -> Self {
        Self::failure(error.to_string())
    }
}
