use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use domeneshop_api::DOMENESHOP_API_BASE;
use domeneshop_webhook::{DomeneshopSolver, SOLVER_NAME, WebhookConfig, version_info};
use domeneshop_webhook_core::{ChallengeAction, ChallengeRequest, Solver, dispatch};
use domeneshop_webhook_secrets::KubeSecretStore;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "domeneshop-webhook")]
#[command(about = "cert-manager ACME DNS-01 solver for Domeneshop", long_about = None)]
struct Cli {
    /// API group the webhook is registered under
    #[arg(long, env = "GROUP_NAME", global = true)]
    group_name: Option<String>,

    /// Domeneshop API endpoint
    #[arg(long, env = "DOMENESHOP_API_URL", default_value = DOMENESHOP_API_BASE, global = true)]
    api_url: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish the TXT record for a challenge request
    Present {
        /// ChallengeRequest JSON file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        request: PathBuf,
    },
    /// Remove the TXT record for a challenge request
    #[command(name = "cleanup")]
    CleanUp {
        /// ChallengeRequest JSON file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        request: PathBuf,
    },
    /// Run Present or CleanUp according to the request's action
    Solve {
        /// ChallengeRequest JSON file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        request: PathBuf,
    },
    /// Print the solver name
    Name,
    /// Print version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output
    init_tracing(cli.log_format);

    let config = WebhookConfig::new(cli.group_name.unwrap_or_default())?.with_api_url(cli.api_url);

    let version = version_info();
    info!(group = %config.group_name(), "Initializing domeneshop-webhook {}", version);

    let (action, path) = match cli.command {
        Commands::Name => {
            println!("{}", SOLVER_NAME);
            return Ok(());
        }
        Commands::Version => {
            println!("{}", serde_json::to_string_pretty(&version)?);
            return Ok(());
        }
        Commands::Present { request } => (Some(ChallengeAction::Present), request),
        Commands::CleanUp { request } => (Some(ChallengeAction::CleanUp), request),
        Commands::Solve { request } => (None, request),
    };

    let mut request = read_request(&path)?;
    if let Some(action) = action {
        request = request.with_action(action);
    }

    let mut solver: DomeneshopSolver<KubeSecretStore> = DomeneshopSolver::from_config(&config)?;
    solver.initialize(KubeSecretStore::infer().await?).await?;

    dispatch(&solver, &request).await?;

    if let Some(action) = request.action {
        println!(
            "{} {:?} {} (zone {})",
            "✓".green(),
            action,
            request.fqdn().cyan(),
            request.zone()
        );
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn read_request(path: &Path) -> anyhow::Result<ChallengeRequest> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read challenge request from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read challenge request {}", path.display()))?
    };

    serde_json::from_str(&content).context("failed to parse challenge request")
}
