//! Resilient multi-model completion.
//!
//! Tries each model of a [`ModelList`] in priority order. Transient failures
//! are retried against the same model with exponential backoff, anything else
//! moves on to the next model. Only the final failure is returned.

use tracing::{debug, info, warn};

use super::{
    error::{LlmError, ServiceErrorKind},
    model::ModelList,
    retry::BackoffPolicy,
    traits::ResponsesTransport,
    types::{Completion, GenerationConfig, Message},
};
use crate::responses::{build_request_payload, convert_to_completion};

pub const DEFAULT_MAX_RETRIES_PER_MODEL: u32 = 3;

/// Per-call options.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub models: ModelList,
    pub generation: GenerationConfig,
    /// Attempts per model, including the first one. Must be at least 1.
    pub max_retries_per_model: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            models: ModelList::default(),
            generation: GenerationConfig::default(),
            max_retries_per_model: DEFAULT_MAX_RETRIES_PER_MODEL,
        }
    }
}

impl CompletionOptions {
    pub fn new(models: ModelList) -> Self {
        Self {
            models,
            ..Default::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generation.temperature = temperature;
        self
    }

    pub fn with_seed(mut self, seed: Option<i64>) -> Self {
        self.generation.seed = seed;
        self
    }

    pub fn with_max_retries_per_model(mut self, max_retries: u32) -> Self {
        self.max_retries_per_model = max_retries;
        self
    }
}

pub struct ResilientCompleter<T: ResponsesTransport> {
    transport: T,
    instructions: Option<String>,
    backoff: BackoffPolicy,
}

impl<T: ResponsesTransport> ResilientCompleter<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            instructions: None,
            backoff: BackoffPolicy::default(),
        }
    }

    /// System text sent ahead of the conversation on every request.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Produce a reply for `user_message`, returning only its text.
    pub async fn complete(
        &self,
        user_message: &str,
        history: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        self.complete_with_metadata(user_message, history, options)
            .await
            .map(|completion| completion.text)
    }

    /// Produce a reply for `user_message` along with diagnostics.
    ///
    /// `history` is the ordered context preceding the message and is never
    /// modified. Fails with [`LlmError::Configuration`] before any network call
    /// when the input is unusable, and with [`LlmError::Exhausted`] when every
    /// model failed.
    #[tracing::instrument(
        name = "complete",
        skip(self, user_message, history, options),
        fields(
            models = %options.models,
            max_retries_per_model = options.max_retries_per_model,
            history_len = history.len()
        ),
        err
    )]
    pub async fn complete_with_metadata(
        &self,
        user_message: &str,
        history: &[Message],
        options: &CompletionOptions,
    ) -> Result<Completion, LlmError> {
        validate(user_message, options)?;

        let mut last_error: Option<LlmError> = None;
        let mut attempts: u32 = 0;

        for (index, model) in options.models.iter().enumerate() {
            let request = build_request_payload(
                model,
                self.instructions.as_deref(),
                history,
                user_message,
                &options.generation,
            );

            for attempt in 0..options.max_retries_per_model {
                attempts += 1;

                let result = self
                    .transport
                    .create_response(&request)
                    .await
                    .and_then(|res| convert_to_completion(res, model, attempts));

                let err = match result {
                    Ok(completion) => {
                        debug!(
                            requested = %completion.metadata.requested_model,
                            served_by = %completion.metadata.served_by,
                            input_tokens = completion.usage.map(|u| u.input_tokens),
                            output_tokens = completion.usage.map(|u| u.output_tokens),
                            attempts,
                            "Completion succeeded"
                        );
                        return Ok(completion);
                    }
                    Err(err) => err,
                };

                let retryable = err.is_retryable();
                let attempts_left = attempt + 1 < options.max_retries_per_model;
                warn!(model, attempt, retryable, error = %err, "Completion attempt failed");
                last_error = Some(err);

                if !(retryable && attempts_left) {
                    break;
                }

                self.backoff.sleep(attempt).await;
            }

            if index + 1 < options.models.len() {
                info!(model, "Falling back to next model");
            }
        }

        let last = last_error.unwrap_or_else(|| {
            LlmError::service(ServiceErrorKind::Unknown, "no error captured")
        });

        Err(LlmError::Exhausted {
            attempts,
            models: options.models.len(),
            last: Box::new(last),
        })
    }
}

pub(crate) fn validate(user_message: &str, options: &CompletionOptions) -> Result<(), LlmError> {
    if user_message.trim().is_empty() {
        return Err(LlmError::Configuration(
            "User message is empty.".to_string(),
        ));
    }

    if options.models.is_empty() {
        return Err(LlmError::Configuration(
            "Model list is empty. Provide at least one model id.".to_string(),
        ));
    }

    if options.max_retries_per_model == 0 {
        return Err(LlmError::Configuration(
            "max_retries_per_model must be at least 1.".to_string(),
        ));
    }

    Ok(())
}
