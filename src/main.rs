use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use isekai_api::bootstrap::app_context::{AppContext, AppServices};
use isekai_api::bootstrap::application::{ApiMetadata, Application, shutdown_signal};
use isekai_api::bootstrap::config::Config;
use isekai_api::infrastructure::db::{Database, PoolSettings};
use isekai_api::presentation::http::{genders, health, species, stats, strata};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "isekai_api=debug,axum=info,tower_http=info,sqlx=warn".into()
        }))
        .init();

    let cfg = Config::from_env()?;
    info!(addr = %cfg.listen_addr(), production = cfg.is_production, "Starting Isekai API");

    let database = Arc::new(Database::new(PoolSettings::from(&cfg)));
    let ctx = AppContext::new(cfg.clone(), AppServices::sqlx(database.clone()));

    let mut app = Application::initialize(ApiMetadata::default(), database);
    app.mount(genders::routes())
        .mount(species::routes())
        .mount(strata::routes())
        .mount(stats::routes())
        .mount(health::routes());

    app.serve(cfg.listen_addr(), ctx, shutdown_signal()).await?;
    Ok(())
}
