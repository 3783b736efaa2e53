use axum::{
    Router,
    routing::{get, post},
};
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use khulasa::{app_state::AppState, config::Config, health, summarize};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(config.database_url())
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState::new(pool, &config);
    let app = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/summarize",
            post(summarize::handlers::create_summary).get(summarize::handlers::list_summaries),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = config.bind_addr(), "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
