mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Router(#[from] routes::RouterError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "quiz master client failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let cfg = config::ServerConfig::from_env()?;
    let app = routes::app(&cfg)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port)).await?;

    tracing::info!(
        port = cfg.port,
        api_base_url = %cfg.api.base_url,
        with_credentials = cfg.api.with_credentials,
        "quiz master client listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
