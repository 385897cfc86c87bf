use axum::{extract::{Request, State}, middleware::Next, response::IntoResponse};
use tracing::warn;

use super::app_state::{AppError, RequestContext};

/// Rejects lead submissions coming from pages other than the site when an
/// allowed origin is configured. Runs after `ip_tracker`.
pub async fn origin_guard(
  State(allowed_origin): State<Option<String>>,
  req: Request,
  next: Next
) -> Result<impl IntoResponse, AppError> {

  if let Some(expected) = allowed_origin.as_deref() {
    let origin = req.extensions()
      .get::<RequestContext>()
      .map(|ctx| ctx.origin.as_str())
      .unwrap_or("NA");

    if origin.trim_end_matches('/') != expected {
      let path = req.uri().path().to_string();
      warn!("rejected {} from origin {}", path, origin);
      return Err(AppError::Forbidden("Invalid origin".to_string()));
    }
  }

  Ok(next.run(req).await)
}
