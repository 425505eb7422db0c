#![recursion_limit = "256"]

mod prediction;
mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the prediction client (non-fatal: the eligibility check
    // degrades to 503 if the service is unconfigured).
    let predictor = match prediction::PredictionClient::from_env() {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "prediction client initialized");
            Some(std::sync::Arc::new(client) as std::sync::Arc<dyn prediction::EligibilityPredictor>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "prediction service not configured — eligibility checks disabled");
            None
        }
    };

    let state = state::AppState::new(predictor);

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "finpredict listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .expect("server failed");
}
