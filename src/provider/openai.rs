//! OpenAI responses API transport.

use async_trait::async_trait;

use crate::core::{HttpClient, HttpClientConfig, LlmError, ResponsesTransport};
use crate::provider::constants::openai;
use crate::responses::{Request, Response};

/// Where the credential comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read `OPENAI_API_KEY` from the environment.
    Default,
    Custom(String),
}

impl ApiKey {
    pub fn resolve(&self) -> Result<String, LlmError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = match self {
            ApiKey::Default => lookup(openai::API_KEY_ENV_VAR).unwrap_or_default(),
            ApiKey::Custom(key) => key.clone(),
        };

        if key.trim().is_empty() {
            return Err(LlmError::Configuration(format!(
                "No OpenAI API key found. Set the {} environment variable or add it to .env.",
                openai::API_KEY_ENV_VAR
            )));
        }

        Ok(key)
    }
}

/// OpenAI-specific configuration
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub http_config: HttpClientConfig,
}

impl OpenAiConfig {
    pub fn new(api_key: ApiKey) -> Result<Self, LlmError> {
        Ok(Self {
            api_key: api_key.resolve()?,
            base_url: openai::API_BASE.to_string(),
            http_config: HttpClientConfig::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, openai::RESPONSES_ENDPOINT)
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }
}

/// Constructed once by whoever assembles the process and handed to the
/// completer; holds the connection pool.
pub struct OpenAiClient {
    config: OpenAiConfig,
    http: HttpClient,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let http = HttpClient::new(&config.http_config)?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl ResponsesTransport for OpenAiClient {
    #[tracing::instrument(
        name = "openai_create_response",
        skip(self, request),
        fields(model = %request.model, base_url = %self.config.base_url),
        err
    )]
    async fn create_response(&self, request: &Request) -> Result<Response, LlmError> {
        let headers = [self.config.auth_header()];
        self.http
            .post_json(&self.config.endpoint_url(), &headers, request)
            .await
    }
}
