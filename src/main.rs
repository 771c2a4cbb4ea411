use crate::config::AppConfig;
use crate::error::AppError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use userlist_web::web_init;

mod config;
mod error;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Optional `.env` file path for loading environment variables.
    #[clap(short, long, value_name = "ENV_FILE")]
    env_file: Option<String>,
    /// Settings file; values can be overridden with `APP_` environment variables.
    #[clap(short, long, value_name = "CONFIG", default_value = "userlist.toml")]
    config: String,
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    if let Some(env_file) = &cli.env_file {
        dotenvy::from_filename(env_file)?;
    }
    let app_config = AppConfig::parse_config(&cli.config)?;

    let env = EnvFilter::try_from_env("USERLIST_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(app_config.log_filter()));
    let timer = tracing_subscriber::fmt::time::LocalTime::rfc_3339();
    tracing_subscriber::fmt()
        .with_timer(timer)
        .with_target(true)
        .with_env_filter(env)
        .init();

    info!("using settings from {}", cli.config);
    web_init(app_config.web, app_config.source).await?;
    Ok(())
}
