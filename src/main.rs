use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use thakumar_jhuli::cli::{Commands, OutputFormat};
use thakumar_jhuli::connector::api::controller::save;
use thakumar_jhuli::connector::api::{Container, ContainerConfig, Router};
use thakumar_jhuli::{MistralClient, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "jhuli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Chat-completion credential (falls back to MISTRAL_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API root (falls back to MISTRAL_BASE_URL, then the hosted API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Chat model (falls back to MISTRAL_MODEL, then mistral-tiny)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Retries for transport failures, 429 and 5xx responses
    #[arg(long, global = true, default_value = "0")]
    retries: u32,

    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Answer offline by echoing the prompt instead of calling the API
    #[arg(long, global = true)]
    mock: bool,

    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Also save a successful result to this file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn container_config(&self) -> ContainerConfig {
        ContainerConfig {
            api_key: self
                .api_key
                .clone()
                .or_else(|| std::env::var("MISTRAL_API_KEY").ok()),
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(MistralClient::configured_base_url),
            model: self
                .model
                .clone()
                .or_else(|| std::env::var("MISTRAL_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            mock: self.mock,
            retries: self.retries,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(cli.container_config());
    info!(
        "Using model {} ({})",
        container.model(),
        if container.is_mock() {
            "mock"
        } else {
            container.base_url()
        }
    );

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    if let Commands::Serve { port, public } = cli.command {
        let host = if public { "0.0.0.0" } else { "127.0.0.1" };
        let listener = tokio::net::TcpListener::bind((host, port)).await?;
        container.feature_server().serve(listener, cancel).await?;
        return Ok(());
    }

    let router = Router::new(&container, cli.format, cancel);
    let rendered = router.route(cli.command).await?;
    println!("{}", rendered.text);

    if let Some(path) = cli.output.as_deref() {
        if save(path, &rendered)? {
            info!("Saved result to {}", path.display());
        } else {
            warn!("Not saving a failed result to {}", path.display());
        }
    }

    if !rendered.success {
        std::process::exit(1);
    }
    Ok(())
}
