mod config;
mod midwares;
mod route_handlers;

use std::net::SocketAddr;
use axum::{http::{header, HeaderValue, Method}, middleware, routing::{get, post}, Router};
use tokio::net::TcpListener;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use midwares::{app_state::{ip_tracker, AppState, LeadStore, RateLimiter}, auth::origin_guard};
use route_handlers::leads::{contact_handler, health_handler, meeting_handler};

#[tokio::main]
async fn main() {
  // a missing .env file is fine, real deployments set the environment directly
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Config::from_env().expect("invalid configuration");

  let store = match config.database_url.as_deref() {
    Some(url) => LeadStore::postgres(url).await.expect("failed to initialize Postgres lead store"),
    None => {
      warn!("DATABASE_URL not set, leads are kept in memory only");
      LeadStore::memory()
    }
  };

  let rate_limiter = match config.redis_url.as_deref() {
    Some(url) => RateLimiter::redis(url, config.rate_limit_max, config.rate_limit_window_secs)
      .expect("failed to initialize Redis rate limiter"),
    None => RateLimiter::memory(config.rate_limit_max, config.rate_limit_window_secs),
  };

  let app = build_router(AppState { store, rate_limiter }, config.allowed_origin.clone());

  let listener = TcpListener::bind(&config.listen_addr).await.expect("failed to start tcp listener");
  info!("lead api listening on {}", config.listen_addr);

  axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await.expect("failed to start server");
}

pub(crate) fn build_router(state: AppState, allowed_origin: Option<String>) -> Router {
  let leads = Router::new()
    .route("/api/contact", post(contact_handler))
    .route("/api/meeting", post(meeting_handler))
    .route_layer(middleware::from_fn_with_state(allowed_origin.clone(), origin_guard));

  Router::new()
    .route("/api/health", get(health_handler))
    .merge(leads)
    .layer(middleware::from_fn(ip_tracker))
    .layer(cors_layer(allowed_origin.as_deref()))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
  let cors = CorsLayer::new()
    .allow_methods([Method::GET, Method::POST])
    .allow_headers([header::CONTENT_TYPE]);

  match allowed_origin.map(HeaderValue::from_str) {
    Some(Ok(origin)) => cors.allow_origin(origin),
    Some(Err(e)) => {
      warn!("ALLOWED_ORIGIN is not a valid header value ({}), allowing any origin", e);
      cors.allow_origin(Any)
    },
    None => cors.allow_origin(Any),
  }
}
