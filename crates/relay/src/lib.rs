#![deny(unsafe_code)]

//! Stateless relay from chat prompts to the Gemini generative-language API.
//!
//! The relay is a thin request/response shim: one user-role message per
//! call, fixed decoding parameters, and every failure normalized into a
//! uniform outcome the chat surface can display directly.

/// The Gemini relay client.
pub mod client;
/// Environment-resolved relay configuration.
pub mod config;
pub mod error;
pub mod request;
/// Double-submit guard for the chat surface.
pub mod submission;

pub use client::RelayClient;
pub use config::RelayConfig;
pub use error::{RelayError, RelayResult};
pub use request::{RelayOutcome, RelayRequest};
pub use submission::{
    SubmissionRejection, SubmissionState, SubmissionTransition, SubmissionTransitionResult,
};
