//! `outreach` binary: HTTP server and prompt preview.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use outreach::composer::{
    compose_generation_prompt, compose_rewrite_prompt, GenerateInput, RewriteInput,
};
use outreach::config::OutreachConfig;
use outreach::credentials::{load_credentials, resolve_anthropic_auth};
use outreach::gateway::GenerationGateway;
use outreach::logging;
use outreach::providers::anthropic::AnthropicProvider;

#[derive(Debug, Parser)]
#[command(name = "outreach", version, about = "Outreach message drafting service")]
struct Cli {
    /// Config file (default: $OUTREACH_CONFIG_PATH or ./outreach.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server.
    Serve {
        /// `.env` file to read ANTHROPIC_API_KEY from when it is not set.
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
    /// Validate a JSON request and print the composed prompt. No network.
    Prompt {
        /// Which endpoint's request format the input uses.
        #[arg(value_enum)]
        kind: PromptKind,
        /// JSON request body.
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PromptKind {
    Generate,
    Rewrite,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = OutreachConfig::load(cli.config).context("failed to load configuration")?;

    match cli.command {
        Command::Serve { env_file } => serve(config, env_file.as_deref()).await,
        Command::Prompt { kind, input } => {
            logging::init_cli(&config.logging.level);
            config.log_load_summary();
            let prompt = render_prompt(kind, &input)?;
            println!("{prompt}");
            Ok(())
        }
    }
}

async fn serve(config: OutreachConfig, env_file: Option<&Path>) -> Result<()> {
    let _guard = match &config.logging.logs_dir {
        Some(dir) => Some(logging::init_production(dir, &config.logging.level)?),
        None => {
            logging::init_cli(&config.logging.level);
            None
        }
    };
    config.log_load_summary();

    let file_credentials = env_file.map(load_credentials).transpose()?;
    let auth = resolve_anthropic_auth(|key| std::env::var(key).ok(), file_credentials.as_ref())?;

    let provider = AnthropicProvider::new(config.generation.model.clone(), auth)
        .with_api_base(config.generation.api_base.clone());
    let gateway = GenerationGateway::new(Arc::new(provider), config.generation.max_tokens);

    let addr = config.server.socket_addr()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.generation.model,
        max_tokens = config.generation.max_tokens,
        "outreach starting"
    );
    outreach::server::run_server(addr, gateway).await
}

fn render_prompt(kind: PromptKind, input: &Path) -> Result<String> {
    let body = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let prompt = match kind {
        PromptKind::Generate => {
            let parsed: GenerateInput =
                serde_json::from_str(&body).context("invalid generate request JSON")?;
            compose_generation_prompt(&parsed.validate()?)
        }
        PromptKind::Rewrite => {
            let parsed: RewriteInput =
                serde_json::from_str(&body).context("invalid rewrite request JSON")?;
            compose_rewrite_prompt(&parsed.validate()?)
        }
    };
    Ok(prompt)
}
