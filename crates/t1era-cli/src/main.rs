use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use t1era_apify::{ApifyClient, DEFAULT_KEYWORDS};
use t1era_trends::{analyze, RawPost};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "t1era-cli")]
#[command(about = "T1ERA trend intelligence command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one TikTok search and print the trend report as JSON.
    Analyze {
        #[arg(long, default_value = DEFAULT_KEYWORDS)]
        keywords: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = t1era_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze { keywords }) => run_analyze(&config, &keywords).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

async fn run_analyze(config: &t1era_core::AppConfig, keywords: &str) -> anyhow::Result<()> {
    let token = config
        .apify_token
        .as_deref()
        .context("APIFY_TOKEN is not set")?;
    let client = ApifyClient::with_base_url(
        token,
        &config.apify_actor_id,
        config.apify_run_timeout_secs,
        &config.apify_base_url,
    )?;

    tracing::info!(keywords, "running trend analysis");
    let posts: Vec<RawPost> = client
        .search_posts(keywords)
        .await
        .with_context(|| format!("trend search for '{keywords}' failed"))?;

    let report = analyze(&posts);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
