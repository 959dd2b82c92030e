//! Runtime configuration from command-line flags, falling back to the environment.

use clap::Parser;

use crate::core::{CompletionOptions, DEFAULT_MAX_RETRIES_PER_MODEL, GenerationConfig, ModelList};
use crate::provider::BASE_URL_ENV_VAR;

pub const MODELS_ENV_VAR: &str = "STARGATE_MODELS";
pub const TEMPERATURE_ENV_VAR: &str = "STARGATE_TEMPERATURE";
pub const SEED_ENV_VAR: &str = "STARGATE_SEED";
pub const RETRIES_ENV_VAR: &str = "STARGATE_RETRIES_PER_MODEL";

/// Ask John, the psychic fortune teller, in your terminal
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "stargate", version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated model ids, tried left to right
    #[arg(long, env = MODELS_ENV_VAR, value_parser = parse_models, default_value_t = ModelList::default())]
    pub models: ModelList,

    /// Sampling temperature, only sent to models that accept it
    #[arg(long, env = TEMPERATURE_ENV_VAR, value_parser = parse_temperature, default_value_t = GenerationConfig::DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Fixed seed for sampling models
    #[arg(long, env = SEED_ENV_VAR)]
    pub seed: Option<i64>,

    /// Attempts per model, including the first one
    #[arg(
        long,
        env = RETRIES_ENV_VAR,
        default_value_t = DEFAULT_MAX_RETRIES_PER_MODEL,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub retries_per_model: u32,

    /// Override the OpenAI API base, e.g. for a local proxy
    #[arg(long, env = BASE_URL_ENV_VAR)]
    pub base_url: Option<String>,
}

fn parse_models(raw: &str) -> Result<ModelList, String> {
    raw.parse::<ModelList>().map_err(|e| e.to_string())
}

fn parse_temperature(raw: &str) -> Result<f32, String> {
    let temperature: f32 = raw
        .trim()
        .parse()
        .map_err(|e| format!("`{raw}` is not a number: {e}"))?;

    if !(0.0..=GenerationConfig::MAX_TEMPERATURE).contains(&temperature) {
        return Err(format!(
            "must be between 0.0 and {}, got {temperature}",
            GenerationConfig::MAX_TEMPERATURE
        ));
    }

    Ok(temperature)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub options: CompletionOptions,
    /// Overrides the OpenAI API base, e.g. for a local proxy.
    pub base_url: Option<String>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let options = CompletionOptions::new(cli.models)
            .with_temperature(cli.temperature)
            .with_seed(cli.seed)
            .with_max_retries_per_model(cli.retries_per_model);

        Self {
            options,
            base_url: cli.base_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        Cli::try_parse_from(std::iter::once("stargate").chain(args.iter().copied()))
            .map(AppConfig::from)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.options.models, ModelList::default());
        assert_eq!(config.options.max_retries_per_model, 3);
        assert_eq!(config.options.generation.temperature, 0.6);
        assert_eq!(config.options.generation.seed, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--models",
            "o3-mini, gpt-4o-mini",
            "--temperature",
            "1.1",
            "--seed",
            "7",
            "--retries-per-model",
            "5",
            "--base-url",
            "http://localhost:4000/v1",
        ])
        .unwrap();

        assert_eq!(config.options.models.to_string(), "o3-mini,gpt-4o-mini");
        assert_eq!(config.options.generation.temperature, 1.1);
        assert_eq!(config.options.generation.seed, Some(7));
        assert_eq!(config.options.max_retries_per_model, 5);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:4000/v1"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for args in [
            ["--models", " , "],
            ["--temperature", "1.5"],
            ["--temperature", "-0.1"],
            ["--temperature", "warm"],
            ["--seed", "lucky"],
            ["--retries-per-model", "0"],
        ] {
            assert!(parse(&args).is_err(), "{args:?} should be rejected");
        }
    }

    #[test]
    fn test_each_flag_falls_back_to_its_env_var() {
        let command = Cli::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(OsStr::to_os_string)
        };

        assert_eq!(env_of("models").as_deref(), Some(OsStr::new("STARGATE_MODELS")));
        assert_eq!(env_of("temperature").as_deref(), Some(OsStr::new("STARGATE_TEMPERATURE")));
        assert_eq!(env_of("seed").as_deref(), Some(OsStr::new("STARGATE_SEED")));
        assert_eq!(
            env_of("retries_per_model").as_deref(),
            Some(OsStr::new("STARGATE_RETRIES_PER_MODEL"))
        );
        assert_eq!(env_of("base_url").as_deref(), Some(OsStr::new("OPENAI_BASE_URL")));
    }

    #[test]
    fn test_blank_base_url_is_ignored() {
        let config = parse(&["--base-url", "  "]).unwrap();
        assert_eq!(config.base_url, None);
    }
}
