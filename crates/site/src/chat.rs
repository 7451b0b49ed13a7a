//! Chat page model.
//!
//! A linear transcript plus the single-outstanding-request lifecycle.
//! Submitting appends the user's prompt immediately; the model's reply (or
//! the error string standing in for it) lands when the relay call resolves.

use bleya_relay::{
    RelayClient, RelayOutcome, RelayRequest, SubmissionRejection, SubmissionState,
    SubmissionTransition,
};

/// Fallback display text for a failure outcome that carried no error string.
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    /// True for an error string shown in place of a reply.
    pub is_error: bool,
}

/// Reason a submit was dropped without touching the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRejection {
    /// The prompt was empty or whitespace-only.
    EmptyPrompt,
    /// A relay call is already outstanding.
    RequestInFlight,
}

#[derive(Default)]
pub struct ChatPage {
    transcript: Vec<ChatEntry>,
    submission: SubmissionState,
}

impl ChatPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    /// True while a relay call is outstanding; the view layer disables the
    /// send control off this.
    pub fn is_busy(&self) -> bool {
        self.submission.is_in_flight()
    }

    /// Accepts a prompt for relay: validates it, guards against a duplicate
    /// submit, and appends the user entry to the transcript. The returned
    /// request is what the caller hands to the relay client.
    pub fn submit(&mut self, prompt: &str) -> Result<RelayRequest, ChatRejection> {
        let Some(request) = RelayRequest::new(prompt) else {
            return Err(ChatRejection::EmptyPrompt);
        };

        match self.submission.apply(SubmissionTransition::Submit) {
            Ok(next) => self.submission = next,
            Err(SubmissionRejection::AlreadyInFlight) => {
                tracing::debug!("dropping duplicate chat submit");
                return Err(ChatRejection::RequestInFlight);
            }
            Err(SubmissionRejection::NoActiveRequest) => {
                return Err(ChatRejection::RequestInFlight);
            }
        }

        self.transcript.push(ChatEntry {
            role: ChatRole::User,
            text: request.prompt().to_string(),
            is_error: false,
        });
        Ok(request)
    }

    /// Lands a relay outcome: the reply on success, the error string in its
    /// place otherwise. A resolve with nothing outstanding is dropped.
    pub fn resolve(&mut self, outcome: RelayOutcome) {
        let transition = if outcome.success {
            SubmissionTransition::Resolve
        } else {
            SubmissionTransition::Reject {
                message: outcome
                    .error
                    .clone()
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            }
        };

        match self.submission.apply(transition) {
            Ok(next) => self.submission = next,
            Err(rejection) => {
                tracing::warn!(?rejection, "dropping relay outcome with no outstanding request");
                return;
            }
        }

        let (text, is_error) = match (outcome.message, outcome.error) {
            (Some(message), _) if outcome.success => (message, false),
            (_, Some(error)) => (error, true),
            _ => (GENERIC_FAILURE.to_string(), true),
        };
        self.transcript.push(ChatEntry {
            role: ChatRole::Assistant,
            text,
            is_error,
        });
    }

    /// One full chat turn: submit, relay, land the outcome.
    pub async fn run_turn(
        &mut self,
        client: &RelayClient,
        prompt: &str,
    ) -> Result<(), ChatRejection> {
        let request = self.submit(prompt)?;
        let outcome = client.relay(&request).await;
        self.resolve(outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn turn_flow_appends_prompt_then_reply() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut page = ChatPage::new();

        let request = page.submit("Tell me about Bleya").unwrap();
        assert!(page.is_busy());
        assert_eq!(page.transcript().len(), 1);
        assert_eq!(page.transcript()[0].role, ChatRole::User);

        let outcome = async { RelayOutcome::success("Bleya is a sneaker line.") }.await;
        page.resolve(outcome);
        assert!(!page.is_busy());
        assert_eq!(page.transcript().len(), 2);

        let reply = &page.transcript()[1];
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.text, "Bleya is a sneaker line.");
        assert!(!reply.is_error);
        assert_eq!(request.prompt(), "Tell me about Bleya");
    }

    #[test]
    fn empty_prompts_never_reach_the_transcript() {
        let mut page = ChatPage::new();
        assert_eq!(page.submit("   "), Err(ChatRejection::EmptyPrompt));
        assert!(page.transcript().is_empty());
        assert!(!page.is_busy());
    }

    #[test]
    fn duplicate_submit_is_dropped_while_a_call_is_outstanding() {
        let mut page = ChatPage::new();
        page.submit("first").unwrap();
        assert_eq!(page.submit("second"), Err(ChatRejection::RequestInFlight));
        assert_eq!(page.transcript().len(), 1);
    }

    #[test]
    fn failure_outcomes_land_as_error_entries() {
        let mut page = ChatPage::new();
        page.submit("hello").unwrap();
        page.resolve(RelayOutcome::failure("provider request failed"));

        let entry = &page.transcript()[1];
        assert!(entry.is_error);
        assert_eq!(entry.text, "provider request failed");

        // The failed turn does not wedge the page.
        assert!(page.submit("retry").is_ok());
    }

    #[test]
    fn stray_resolve_with_nothing_outstanding_is_dropped() {
        let mut page = ChatPage::new();
        page.resolve(RelayOutcome::success("late reply"));
        assert!(page.transcript().is_empty());
    }
}
