
mod config;
mod ctx;
mod error;
mod model;
mod timer;
mod web;

#[cfg(test)]
pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::model::ModelManager;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config();

    // One registry for the whole process; handlers open stores from it per call.
    let mm = ModelManager::new(config);

    timer::spawn(mm.clone(), config.TIMER_PERIOD);

    let routes_all = web::routes_all(mm);

    info!("{:<12} - {}\n", "LISTENING", config.ADDR);

    let listener = tokio::net::TcpListener::bind(config.ADDR).await?;
    axum::serve(listener, routes_all).await?;
    Ok(())
}
