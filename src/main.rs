use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use askterm::cli::Commands;
use askterm::connector::api::{self, Container, ContainerConfig, LlmProvider, Router};
use askterm::domain::{
    LlmSettings, DEFAULT_BIG_MAX_TOKENS, DEFAULT_BIG_MODEL, DEFAULT_SMALL_MAX_TOKENS,
    DEFAULT_SMALL_MODEL, DEFAULT_TEMPERATURE,
};

#[derive(Parser)]
#[command(name = "askterm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// LLM provider the pipeline talks to
    #[arg(
        long,
        global = true,
        env = "LLM_PROVIDER",
        value_enum,
        default_value_t = LlmProvider::Openai
    )]
    provider: LlmProvider,

    /// Override the provider endpoint (e.g. a local OpenAI-compatible server)
    #[arg(long, global = true, env = "LLM_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    #[arg(long, global = true, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    anthropic_api_key: Option<String>,

    /// Timeout for each provider call, in seconds
    #[arg(
        long,
        global = true,
        env = "LLM_TIMEOUT_SECS",
        default_value_t = api::DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,

    /// Model used to classify the query into a topic
    #[arg(long, global = true, env = "SMALL_PROMPT_MODEL", default_value = DEFAULT_SMALL_MODEL)]
    small_model: String,

    /// Model used to generate the HTML fragment
    #[arg(long, global = true, env = "BIG_PROMPT_MODEL", default_value = DEFAULT_BIG_MODEL)]
    big_model: String,

    #[arg(
        long,
        global = true,
        env = "SMALL_PROMPT_MAX_TOKENS",
        default_value_t = DEFAULT_SMALL_MAX_TOKENS
    )]
    small_max_tokens: u32,

    #[arg(
        long,
        global = true,
        env = "BIG_PROMPT_MAX_TOKENS",
        default_value_t = DEFAULT_BIG_MAX_TOKENS
    )]
    big_max_tokens: u32,

    /// Sampling temperature for generation (classification always uses 0)
    #[arg(long, global = true, env = "DEFAULT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// JSON file with `[{"name": ..., "content": ...}]` topics
    #[arg(long, global = true, env = "ASKTERM_DATASET")]
    dataset: Option<PathBuf>,

    /// Answer from a deterministic offline client instead of a provider
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn container_config(&self) -> ContainerConfig {
        let api_key = match self.provider {
            LlmProvider::Openai => self.openai_api_key.clone(),
            LlmProvider::Anthropic => self.anthropic_api_key.clone(),
        };

        let settings = LlmSettings::new()
            .with_small_model(&self.small_model)
            .with_big_model(&self.big_model)
            .with_small_max_tokens(self.small_max_tokens)
            .with_big_max_tokens(self.big_max_tokens)
            .with_temperature(self.temperature);

        ContainerConfig {
            provider: self.provider,
            api_key: api_key.unwrap_or_default(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            mock_llm: self.mock_llm,
            dataset: self.dataset.clone(),
            settings,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside development
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    let container = Container::new(cli.container_config())?;
    info!("Using {} chat client", container.provider_name());

    match cli.command {
        Commands::Serve {
            host,
            port,
            public_dir,
        } => {
            let addr = format!("{host}:{port}");
            api::serve(Arc::new(container), &public_dir, &addr).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
