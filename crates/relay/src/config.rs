use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Model every relay call targets unless overridden.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Fixed decoding parameters for the landing chat surface.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u64 = 2048;

/// Environment variable carrying the credential.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
/// Prefix for model/decoding overrides (e.g. `BLEYA_RELAY_MODEL`).
pub const ENV_OVERRIDE_PREFIX: &str = "BLEYA_RELAY_";

/// Relay configuration, resolved once per process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Gemini API credential. May be blank here; the client constructor is
    /// the single place that rejects a missing credential, before any
    /// network activity.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl RelayConfig {
    /// Builds a config with the given credential and default decoding
    /// parameters.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            ..Self::default()
        }
    }

    /// Resolves configuration from the process environment: serialized
    /// defaults, then `GEMINI_API_KEY`, then `BLEYA_RELAY_*` overrides.
    ///
    /// A malformed override is logged and falls back to defaults rather than
    /// failing the process; a missing credential surfaces later as a
    /// configuration error on the first relay attempt.
    pub fn from_env() -> Self {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::raw().only(&[API_KEY_ENV_VAR]).map(|_| "api_key".into()))
            .merge(Env::prefixed(ENV_OVERRIDE_PREFIX));

        match figment.extract::<Self>() {
            Ok(config) => config.normalized(),
            Err(error) => {
                tracing::warn!(%error, "failed to read relay overrides; using defaults");
                Self::default()
            }
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn normalized(mut self) -> Self {
        self.api_key = self.api_key.trim().to_string();
        self.model = if self.model.trim().is_empty() {
            default_model()
        } else {
            self.model.trim().to_string()
        };
        self
    }
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_output_tokens() -> u64 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_chat_surface_contract() {
        let config = RelayConfig::default();
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_output_tokens, 2048);
        assert!(!config.has_api_key());
    }

    #[test]
    fn with_api_key_trims_the_credential() {
        let config = RelayConfig::with_api_key("  secret  ");
        assert_eq!(config.api_key, "secret");
        assert!(config.has_api_key());
    }

    #[test]
    fn from_env_reads_the_credential_and_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(API_KEY_ENV_VAR, "secret");
            jail.set_env("BLEYA_RELAY_MODEL", "gemini-2.0-flash");
            jail.set_env("BLEYA_RELAY_TEMPERATURE", "0.3");

            let config = RelayConfig::from_env();
            assert_eq!(config.api_key, "secret");
            assert_eq!(config.model, "gemini-2.0-flash");
            assert_eq!(config.temperature, 0.3);
            assert_eq!(config.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
            Ok(())
        });
    }

    #[test]
    fn missing_credential_resolves_to_a_blank_key() {
        figment::Jail::expect_with(|_jail| {
            let config = RelayConfig::from_env();
            assert!(!config.has_api_key());
            assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
            Ok(())
        });
    }

    #[test]
    fn malformed_overrides_fall_back_to_defaults() {
        let _ = tracing_subscriber::fmt::try_init();
        figment::Jail::expect_with(|jail| {
            jail.set_env("BLEYA_RELAY_TEMPERATURE", "not-a-number");

            let config = RelayConfig::from_env();
            assert_eq!(config, RelayConfig::default());
            Ok(())
        });
    }

    #[test]
    fn blank_model_override_falls_back_to_the_default() {
        let config = RelayConfig {
            model: "   ".to_string(),
            ..RelayConfig::with_api_key("secret")
        }
        .normalized();
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
    }
}
