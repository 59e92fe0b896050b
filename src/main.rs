use anyhow::Context;
use clap::Parser;
use venuebook::{AppState, config::Config, db, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::parse();
    logging::init_tracing(&config.log)?;

    let db_pool = db::connect(&config.database_url, config.max_connections).await?;
    let app = venuebook::app(
        AppState { db_pool },
        time::Duration::minutes(config.session_idle_minutes),
    );

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("could not bind {}", config.bind))?;
    tracing::info!("listening on {}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
