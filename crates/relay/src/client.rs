use rig::completion::{CompletionModel, Message};
use rig::message::AssistantContent;
use rig::prelude::CompletionClient;
use rig::providers::gemini;
use snafu::{OptionExt, ResultExt, ensure};

use crate::config::RelayConfig;
use crate::error::{
    ClientInitSnafu, ConfigurationSnafu, EmptyResponseSnafu, ProviderSnafu, RelayResult,
};
use crate::request::{RelayOutcome, RelayRequest};

/// Stateless Gemini relay.
///
/// The underlying HTTP client is built once at construction and reused for
/// every call; it is caller-owned and carries no per-request state. Each
/// relay call is independent: no retries, no streaming, no caching.
pub struct RelayClient {
    client: gemini::Client,
    config: RelayConfig,
}

impl RelayClient {
    /// Builds the relay from an explicit config.
    ///
    /// The credential check happens here, before any network activity, so a
    /// missing key is a configuration error rather than a transport failure.
    pub fn new(config: RelayConfig) -> RelayResult<Self> {
        ensure!(
            config.has_api_key(),
            ConfigurationSnafu {
                stage: "relay-client-new",
            }
        );

        let client = gemini::Client::builder()
            .api_key(config.api_key.as_str())
            .build()
            .context(ClientInitSnafu {
                stage: "build-gemini-client",
            })?;

        Ok(Self { client, config })
    }

    /// Builds the relay from the process environment.
    pub fn from_env() -> RelayResult<Self> {
        Self::new(RelayConfig::from_env())
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Issues one generation request: a single user-role message with the
    /// fixed decoding parameters from the config.
    pub async fn send(&self, request: &RelayRequest) -> RelayResult<String> {
        let model = self.client.completion_model(self.config.model.as_str());

        let response = model
            .completion_request(Message::user(request.prompt().to_string()))
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_output_tokens)
            .send()
            .await
            .context(ProviderSnafu {
                stage: "generate-content",
            })?;

        extract_reply_text(response.choice.iter()).context(EmptyResponseSnafu {
            stage: "extract-candidate-text",
        })
    }

    /// Call boundary for the chat surface: every error is caught here and
    /// normalized to `{ success: false, error }`.
    pub async fn relay(&self, request: &RelayRequest) -> RelayOutcome {
        match self.send(request).await {
            Ok(message) => {
                tracing::debug!(
                    model = %self.config.model,
                    reply_bytes = message.len(),
                    "relay call succeeded"
                );
                RelayOutcome::success(message)
            }
            Err(error) => {
                tracing::error!(model = %self.config.model, %error, "relay call failed");
                RelayOutcome::failure(error.to_string())
            }
        }
    }
}

/// Concatenates the text parts of the model's choice. `None` when nothing
/// usable came back (empty or safety-filtered candidate set).
fn extract_reply_text<'a>(
    contents: impl IntoIterator<Item = &'a AssistantContent>,
) -> Option<String> {
    let text = contents
        .into_iter()
        .filter_map(|content| match content {
            AssistantContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() { None } else { Some(text) }
}
