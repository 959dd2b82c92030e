/// Suppresses accidental double submission of the same message.
///
/// Front ends that may re-invoke their submit handler (re-renders, repeated
/// key events) keep one of these per session and consult it before calling
/// the completer.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    last_accepted: Option<String>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` and records `message` if it should be sent.
    ///
    /// Blank messages and a repeat of the most recently accepted message are
    /// rejected.
    pub fn should_fire(&mut self, message: &str) -> bool {
        if message.trim().is_empty() {
            return false;
        }

        if self.last_accepted.as_deref() == Some(message) {
            tracing::debug!("Suppressing duplicate submission");
            return false;
        }

        self.last_accepted = Some(message.to_string());
        true
    }

    pub fn last_accepted(&self) -> Option<&str> {
        self.last_accepted.as_deref()
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
