use snafu::Snafu;

/// Relay failure taxonomy. Every variant is caught at the call boundary and
/// normalized into a [`crate::RelayOutcome`]; none of them reach the view
/// layer as a panic or a raw `Err`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RelayError {
    #[snafu(display(
        "API key is not configured; add GEMINI_API_KEY to the environment"
    ))]
    Configuration { stage: &'static str },
    #[snafu(display("failed to initialize the Gemini client on `{stage}`, {source}"))]
    ClientInit {
        stage: &'static str,
        source: rig::http_client::Error,
    },
    #[snafu(display(
        "the model did not generate a response (it may have been blocked by safety settings)"
    ))]
    EmptyResponse { stage: &'static str },
    #[snafu(display("provider request failed on `{stage}`, {source}"))]
    Provider {
        stage: &'static str,
        source: rig::completion::CompletionError,
    },
}

pub type RelayResult<T> = Result<T, RelayError>;
