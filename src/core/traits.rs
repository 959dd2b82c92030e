use async_trait::async_trait;

use super::error::LlmError;
use crate::responses::{Request, Response};

/// A single attempt against the remote generation service.
///
/// Implementations must not retry on their own and must map every failure into
/// a tagged [`LlmError::Service`] so callers can decide on retries without
/// inspecting messages.
#[async_trait]
pub trait ResponsesTransport: Send + Sync {
    async fn create_response(&self, request: &Request) -> Result<Response, LlmError>;
}

#[async_trait]
impl<T: ResponsesTransport + ?Sized> ResponsesTransport for std::sync::Arc<T> {
    async fn create_response(&self, request: &Request) -> Result<Response, LlmError> {
        (**self).create_response(request).await
    }
}
