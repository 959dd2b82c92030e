//! Request building and response interpretation for the OpenAI-style responses API.
//!
//! This module contains:
//! - Building a request from persona instructions, prior turns and the new message
//! - Filtering sampling parameters by model family
//! - Turning an API response into a [`Completion`]

use crate::core::{
    ChatRole, Completion, GenerationConfig, LanguageModelUsage, LlmError, Message, ModelFamily,
    ResponseMetadata, ServiceErrorKind,
};
use crate::responses::{
    request::{InputMessage, InputMessageRole, Request},
    response::Response,
};

/// Build the payload for one model.
///
/// Turns are sent in order, followed by the new user message. `temperature`
/// and `seed` are only attached for models that accept sampling controls.
pub fn build_request_payload(
    model: &str,
    instructions: Option<&str>,
    history: &[Message],
    user_message: &str,
    generation: &GenerationConfig,
) -> Request {
    let mut input = convert_messages_to_responses_format(history);
    input.push(InputMessage {
        role: InputMessageRole::User,
        content: user_message.to_string(),
    });

    let (temperature, seed) = match ModelFamily::of(model) {
        ModelFamily::Sampling => (Some(generation.temperature), generation.seed),
        ModelFamily::Reasoning => (None, None),
    };

    Request {
        model: model.to_string(),
        input,
        instructions: instructions.map(str::to_string),
        temperature,
        seed,
    }
}

/// Convert core messages to responses API format
pub(crate) fn convert_messages_to_responses_format(messages: &[Message]) -> Vec<InputMessage> {
    messages
        .iter()
        .map(|m| InputMessage {
            role: match m.role {
                ChatRole::User => InputMessageRole::User,
                ChatRole::Assistant => InputMessageRole::Assistant,
            },
            content: m.content.clone(),
        })
        .collect()
}

/// Convert an API response into a trimmed reply.
///
/// A response that carries only a refusal is a non-retryable failure.
pub fn convert_to_completion(
    res: Response,
    requested_model: &str,
    attempts: u32,
) -> Result<Completion, LlmError> {
    let text = res.output_text();

    if text.is_empty()
        && let Some(refusal) = res.refusal()
    {
        return Err(LlmError::service(
            ServiceErrorKind::Refusal,
            format!("Model refused: {refusal}"),
        ));
    }

    let usage = res.usage.as_ref().map(|u| LanguageModelUsage {
        input_tokens: u.input_tokens,
        output_tokens: u.output_tokens,
        total_tokens: u
            .total_tokens
            .unwrap_or(u.input_tokens.saturating_add(u.output_tokens)),
    });

    Ok(Completion {
        text: text.trim().to_string(),
        usage,
        metadata: ResponseMetadata {
            id: res.id,
            served_by: res.model,
            requested_model: requested_model.to_string(),
            attempts,
        },
    })
}
