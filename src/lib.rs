//! # stargate
//!
//! A psychic fortune teller that keeps answering when the model provider doesn't.
//!
//! The heart of the crate is [`ResilientCompleter`]: it sends a conversation to an
//! OpenAI-style responses endpoint, retries transient failures with exponential
//! backoff and falls back through an ordered list of models. Callers only ever see
//! one final error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stargate::{
//!     ApiKey, CompletionOptions, ModelList, OpenAiClient, OpenAiConfig, ResilientCompleter,
//!     persona,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(OpenAiConfig::new(ApiKey::Default)?)?;
//!     let completer = ResilientCompleter::new(client).with_instructions(persona::INSTRUCTIONS);
//!
//!     let options = CompletionOptions::new("gpt-4o-mini,o3-mini".parse::<ModelList>()?)
//!         .with_temperature(0.8);
//!
//!     let reply = completer
//!         .complete("Will my code compile?", &[], &options)
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod persona;
pub mod provider;
pub mod responses;

pub use config::AppConfig;
pub use crate::core::{
    BackoffPolicy, ChatRole, ChatSession, Completion, CompletionOptions, GenerationConfig,
    LlmError, Message, ModelFamily, ModelList, ResilientCompleter, ResponsesTransport,
    ServiceErrorKind, SubmissionGuard, SubmitOutcome,
};
pub use provider::{ApiKey, OpenAiClient, OpenAiConfig};
