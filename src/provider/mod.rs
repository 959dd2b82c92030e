mod constants;
pub(crate) mod openai;

pub use constants::openai::{API_KEY_ENV_VAR, BASE_URL_ENV_VAR};
pub use openai::{ApiKey, OpenAiClient, OpenAiConfig};
