mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;
    let license_api = startup::setup_license_client(&config)?;

    tracing::info!("Using license API at {}", config.api_url);

    let state = AppState::from_config(&config, license_api);
    let client = bot::start::init_bot(&config, state).await?;

    bot::start::start_bot(client).await
}
