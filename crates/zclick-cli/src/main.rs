use clap::{Parser, Subcommand};

mod analyze;
mod sites;

#[derive(Debug, Parser)]
#[command(name = "zclick")]
#[command(about = "Zero-click keyword analysis for Google Search Console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List verified Search Console properties.
    Sites,
    /// Fetch, score, filter, and summarize keywords for a site.
    Analyze(analyze::AnalyzeArgs),
}

/// Builds a Search Console client from the loaded configuration.
///
/// The access token is optional at config-load time so that `--help` and
/// argument errors work offline; it becomes required here.
pub(crate) fn build_client(config: &zclick_core::AppConfig) -> anyhow::Result<zclick_gsc::GscClient> {
    let token = config.gsc_access_token.as_deref().ok_or_else(|| {
        anyhow::anyhow!("GSC_ACCESS_TOKEN is not set; cannot call the Search Console API")
    })?;

    zclick_gsc::GscClient::new(token, config.gsc_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build Search Console client: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = zclick_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sites => sites::run_sites(&config).await,
        Commands::Analyze(args) => analyze::run_analyze(&config, args).await,
    }
}
