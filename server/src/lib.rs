use axum::{
  http::{
    header::CONTENT_TYPE,
    Request,
  },
  body::Body,
  response::Response,
  routing::get,
  Router,
};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use std::{sync::Arc, time::Duration};
use routes::{get_lyrics_page, get_now_playing};
use tower_http::{
  cors::{Any, CorsLayer}, trace::{self, TraceLayer}
};
use tracing::Span;
use tokio::signal;

pub mod config;
pub mod entities;
pub mod errors;
pub mod fetcher;
pub mod lookup;
pub mod output;
pub mod providers;
pub mod routes;
pub mod utils;

pub use config::Config;
pub use errors::LookupError;
pub use lookup::LyricsClient;

pub struct AppState {
  client: LyricsClient,
}

/// Logs go to stderr so the lyrics printed on stdout stay clean.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .compact()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_env("NOWLYRICS_LOG"))
    .init();
}

pub fn app(client: LyricsClient) -> Router {
  let state = Arc::new(AppState { client });

  let api_routes = Router::new()
    .route("/now-playing", get(get_now_playing::route));

  Router::new()
    .route("/", get(get_lyrics_page::route))
    .nest("/api", api_routes)
    .with_state(state)
    .layer(
      TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
          let headers = request.headers();
          let user_agent = headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
          let method = request.method().to_string();
          let uri = request.uri().to_string();

          tracing::info_span!("request", method, uri, user_agent)
        })
        .on_response(|response: &Response, latency: Duration, _span: &Span| {
          let status_code = response.status().as_u16();
          let latency = latency.as_millis();

          tracing::info!(
            message = "finished processing request",
            latency = latency,
            status_code = status_code,
          )
        })
        .on_failure(trace::DefaultOnFailure::new().level(tracing::Level::ERROR))
    )
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE])
    )
}

pub async fn serve(port: u16, config: &Config) -> Result<()> {
  let client = LyricsClient::new(config)?;

  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
    .await
    .with_context(|| format!("cannot bind to port {}", port))?;
  tracing::info!(message = "nowlyrics server is listening", address = listener.local_addr()?.to_string());

  axum::serve(listener, app(client))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server stopped unexpectedly")?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c()
      .await
      .expect("failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }

  tracing::info!(message = "shutting down");
}
