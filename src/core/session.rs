//! In-memory conversation owned by one front-end session.

use super::{
    augment::{DocumentSearch, augment_message},
    completer::{CompletionOptions, ResilientCompleter, validate},
    error::LlmError,
    guard::SubmissionGuard,
    traits::ResponsesTransport,
    types::{Completion, Message},
};

/// What happened to a submitted message.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service answered; the reply was appended to the history.
    Replied(Completion),
    /// Blank input or a repeat of the previous message; nothing was sent.
    Suppressed,
}

pub struct ChatSession {
    history: Vec<Message>,
    guard: SubmissionGuard,
    search: Option<(Box<dyn DocumentSearch>, usize)>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            guard: SubmissionGuard::new(),
            search: None,
        }
    }

    /// Augment outgoing messages with up to `k` documents from `search`.
    /// The history keeps the message as the user typed it.
    pub fn with_search(mut self, search: Box<dyn DocumentSearch>, k: usize) -> Self {
        self.search = Some((search, k));
        self
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Send `input` and record the exchange.
    ///
    /// Blank input is suppressed and unusable options are rejected before
    /// anything is recorded. If the service fails, the user turn stays in the
    /// history without an assistant turn, so the user can retry or rephrase
    /// without losing context.
    pub async fn submit<T: ResponsesTransport>(
        &mut self,
        completer: &ResilientCompleter<T>,
        input: &str,
        options: &CompletionOptions,
    ) -> Result<SubmitOutcome, LlmError> {
        if input.trim().is_empty() {
            return Ok(SubmitOutcome::Suppressed);
        }

        validate(input, options)?;

        if !self.guard.should_fire(input) {
            return Ok(SubmitOutcome::Suppressed);
        }

        let outgoing = match &self.search {
            Some((search, k)) => augment_message(search.as_ref(), input, *k).await,
            None => input.to_string(),
        };

        self.history.push(Message::user(input));
        let prior = &self.history[..self.history.len() - 1];

        let completion = completer
            .complete_with_metadata(&outgoing, prior, options)
            .await?;

        self.history.push(Message::assistant(completion.text.clone()));
        Ok(SubmitOutcome::Replied(completion))
    }

    /// Append a canned user turn without contacting the service.
    pub fn insert_icebreaker(&mut self, text: &str) {
        self.history.push(Message::user(text));
    }

    /// Forget the conversation and the last submitted message.
    pub fn reset(&mut self) {
        self.history.clear();
        self.guard.reset();
    }
}
