use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use luxe::server::{
    config::Config,
    error::{config::ConfigError, Error},
    model::app::AppState,
    router, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState::from((
        db,
        config.paystack_url.clone(),
        config.paystack_secret_key.clone(),
    ));

    let client_origin =
        config
            .client_url
            .parse::<HeaderValue>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "CLIENT_URL".to_string(),
                reason: e.to_string(),
            })?;
    let cors = CorsLayer::new()
        .allow_origin(client_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = router::routes()
        .with_state(state)
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
