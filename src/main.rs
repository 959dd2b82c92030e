//! Terminal front end for the fortune teller.
//!
//! Settings come from flags or their `STARGATE_*` env vars, see `stargate --help`.
//! Commands: `/reset`, `/icebreaker`, `/history`, `/config`, `/quit`. Anything else is sent to John.

use clap::Parser;
use dotenv::dotenv;
use stargate::config::Cli;
use stargate::{
    ApiKey, AppConfig, ChatRole, ChatSession, OpenAiClient, OpenAiConfig, ResilientCompleter,
    SubmitOutcome, persona,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Nothing is accepted from the user until the credential and config are in place.
    let cli = Cli::parse();
    let (config, openai_config) = match load_config(cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let client = OpenAiClient::new(openai_config)?;
    let completer = ResilientCompleter::new(client).with_instructions(persona::INSTRUCTIONS);
    let mut session = ChatSession::new();

    println!("{}", persona::APP_TITLE);
    println!("{}", persona::TAGLINE);
    println!("Models (left = first): {}", config.options.models);
    println!("Ask John for help\u{2026} (career, love, cosmic bureaucracy). /quit to leave.\n");

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                println!("(conversation reset)\n");
            }
            "/icebreaker" => {
                session.insert_icebreaker(persona::ICEBREAKER);
                println!("you> {}\n", persona::ICEBREAKER);
            }
            "/config" => {
                let options = &config.options;
                println!(
                    "models={} temperature={} seed={} retries_per_model={}\n",
                    options.models,
                    options.generation.temperature,
                    options
                        .generation
                        .seed
                        .map_or_else(|| "off".to_string(), |s| s.to_string()),
                    options.max_retries_per_model
                );
            }
            "/history" => {
                for turn in session.history() {
                    let speaker = match turn.role {
                        ChatRole::User => "you",
                        ChatRole::Assistant => "john",
                    };
                    println!("{speaker}> {}", turn.content);
                }
                println!();
            }
            message => match session.submit(&completer, message, &config.options).await {
                Ok(SubmitOutcome::Replied(completion)) => {
                    println!("\njohn> {}\n", completion.text);
                    tracing::info!(
                        served_by = %completion.metadata.served_by,
                        attempts = completion.metadata.attempts,
                        input_tokens = completion.usage.map(|u| u.input_tokens),
                        output_tokens = completion.usage.map(|u| u.output_tokens),
                        "Diagnostics"
                    );
                }
                Ok(SubmitOutcome::Suppressed) => {
                    println!("(already asked that one)\n");
                }
                Err(e) => {
                    eprintln!("{}: {e}\n", persona::FAILURE_PREFIX);
                }
            },
        }
    }

    Ok(())
}

fn load_config(cli: Cli) -> Result<(AppConfig, OpenAiConfig), stargate::LlmError> {
    let config = AppConfig::from(cli);
    let mut openai_config = OpenAiConfig::new(ApiKey::Default)?;
    if let Some(base_url) = &config.base_url {
        openai_config = openai_config.with_base_url(base_url.as_str());
    }
    Ok((config, openai_config))
}
