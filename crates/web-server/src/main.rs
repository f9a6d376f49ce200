use anyhow::Context;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// This main function is the entry point when running `cargo run -p web-server`.
// It reads the settings from the environment and hands off to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = configuration::load_config().context("Failed to load configuration")?;
    web_server::run_server(&settings).await
}
