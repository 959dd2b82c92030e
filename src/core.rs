pub mod augment;
pub mod completer;
pub mod error;
pub mod guard;
pub mod http;
pub mod model;
pub mod retry;
pub mod session;
pub mod traits;
pub mod types;

pub use augment::{Document, DocumentSearch, augment_message};
pub use completer::{CompletionOptions, DEFAULT_MAX_RETRIES_PER_MODEL, ResilientCompleter};
pub use error::{LlmError, ServiceErrorKind};
pub use guard::SubmissionGuard;
pub use http::{HttpClient, HttpClientConfig};
pub use model::{DEFAULT_MODELS, ModelFamily, ModelList};
pub use retry::BackoffPolicy;
pub use session::{ChatSession, SubmitOutcome};
pub use traits::ResponsesTransport;
pub use types::{
    ChatRole, Completion, GenerationConfig, LanguageModelUsage, Message, ResponseMetadata,
};
