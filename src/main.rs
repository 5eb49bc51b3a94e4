mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        images_dir = %config.images_dir.display(),
        "configuration loaded"
    );

    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "polyspace listening");
    axum::serve(listener, app).await.expect("server failed");
}
