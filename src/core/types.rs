use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Configuration for text generation parameters.
///
/// Whether these reach the wire depends on the family of the model a request
/// is addressed to, see [`crate::core::ModelFamily`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,

    /// Seed for reproducible sampling
    pub seed: Option<i64>,
}

impl GenerationConfig {
    pub const DEFAULT_TEMPERATURE: f32 = 0.6;
    pub const MAX_TEMPERATURE: f32 = 1.2;
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageModelUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMetadata {
    pub id: String,
    /// Model id as reported by the service.
    pub served_by: String,
    /// Model id the request was addressed to.
    pub requested_model: String,
    /// Total attempts made across all models, including the successful one.
    pub attempts: u32,
}

/// A successful reply together with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<LanguageModelUsage>,
    pub metadata: ResponseMetadata,
}
