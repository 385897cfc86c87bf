use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::{Duration, Instant}};
use axum::{
  extract::{ConnectInfo, Request}, http::StatusCode, middleware::Next, response::{IntoResponse, Response}, Json
};
use chrono::{DateTime, Utc};
use futures::lock::Mutex;
use lead_types::{ContactLead, MeetingRequest, ValidationErrors};
use redis::Client as RedisClient;
use serde_json::json;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

// Request context containing client information
#[derive(Debug, Clone)]
pub struct RequestContext {
  pub remote_ip: String,
  pub origin: String,
  pub user_agent: String,
}

#[derive(Debug, Error)]
pub enum AppError {
  #[error("{0}")]
  RateLimitExceeded(String),
  #[error("{0}")]
  DeserializeError(String),
  #[error(transparent)]
  Validation(#[from] ValidationErrors),
  #[error("{0}")]
  Forbidden(String),
  #[error("{0}")]
  InternalError(String),
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let status = match &self {
      Self::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
      Self::DeserializeError(_) => StatusCode::BAD_REQUEST,
      Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Forbidden(_) => StatusCode::FORBIDDEN,
      Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match self {
      Self::Validation(errors) => json!({
        "ok": false,
        "error": errors.to_string(),
        "code": status.as_u16(),
        "fields": errors.iter().collect::<Vec<_>>(),
      }),
      Self::InternalError(detail) => {
        // the detail stays in the logs, clients get a generic message
        error!("internal error: {}", detail);
        json!({"ok": false, "error": "Something went wrong on our side. Please try again.", "code": status.as_u16()})
      },
      other => json!({"ok": false, "error": other.to_string(), "code": status.as_u16()}),
    };

    (status, Json(body)).into_response()
  }
}

#[derive(Clone)]
pub struct AppState {
  pub store: LeadStore,
  pub rate_limiter: RateLimiter,
}

#[derive(Clone)]
enum LimiterBackend {
  Redis(Arc<RedisClient>),
  Memory(Arc<Mutex<HashMap<String, (Instant, usize)>>>),
}

/// Fixed-window submission counter per client IP.
#[derive(Clone)]
pub struct RateLimiter {
  backend: LimiterBackend,
  max_submissions: usize,
  window_secs: u64,
}

impl RateLimiter {
  pub fn redis(redis_url: &str, max_submissions: usize, window_secs: u64) -> Result<Self, AppError> {
    info!("Redis instance initializing for rate limiter...");

    let client = RedisClient::open(redis_url)
      .map_err(|e| AppError::InternalError(format!("Redis connection error: {}", e)))?;

    Ok(Self { backend: LimiterBackend::Redis(Arc::new(client)), max_submissions, window_secs })
  }

  pub fn memory(max_submissions: usize, window_secs: u64) -> Self {
    Self {
      backend: LimiterBackend::Memory(Arc::new(Mutex::new(HashMap::new()))),
      max_submissions,
      window_secs,
    }
  }

  #[cfg(test)]
  async fn tracked_ips(&self) -> usize {
    match &self.backend {
      LimiterBackend::Redis(_) => 0,
      LimiterBackend::Memory(windows) => windows.lock().await.len(),
    }
  }

  /// Counts one submission for `ip`, failing once the window's budget is spent.
  pub async fn check_and_record(&self, ip: &str) -> Result<(), AppError> {
    let count = match &self.backend {
      LimiterBackend::Redis(client) => {
        let mut conn = client.get_multiplexed_async_connection().await
          .map_err(|e| AppError::InternalError(format!("Redis connection error: {}", e)))?;

        let (count,): (usize,) = window_pipeline(&format!("rate:lead:{}", ip), self.window_secs)
          .query_async(&mut conn)
          .await
          .map_err(|e| AppError::InternalError(format!("Redis operation failed: {}", e)))?;
        count
      },
      LimiterBackend::Memory(windows) => {
        let mut windows = windows.lock().await;
        let window = Duration::from_secs(self.window_secs);
        let now = Instant::now();

        // expired windows are dropped so the map only holds recently active IPs
        windows.retain(|_, (start, _)| now.duration_since(*start) < window);

        let entry = windows.entry(ip.to_string()).or_insert((now, 0));
        if now.duration_since(entry.0) >= window {
          *entry = (now, 0);
        }
        entry.1 += 1;
        entry.1
      }
    };

    if count > self.max_submissions {
      warn!("rate limit hit for {} ({} submissions)", ip, count);
      return Err(AppError::RateLimitExceeded(format!(
        "Too many submissions. Please try again in {} minutes.",
        (self.window_secs + 59) / 60
      )));
    }
    Ok(())
  }
}

/// INCR and the window's EXPIRE in one MULTI/EXEC. `NX` only sets the expiry on a
/// key without one, so a window is never extended and a key is never left without a TTL.
fn window_pipeline(key: &str, window_secs: u64) -> redis::Pipeline {
  let mut pipe = redis::pipe();
  pipe.atomic()
    .incr(key, 1)
    .cmd("EXPIRE").arg(key).arg(window_secs).arg("NX").ignore();
  pipe
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoredLead {
  Contact { id: Uuid, lead: ContactLead, remote_ip: String, received_at: DateTime<Utc> },
  Meeting { id: Uuid, request: MeetingRequest, remote_ip: String, received_at: DateTime<Utc> },
}

#[derive(Clone)]
pub enum LeadStore {
  Postgres(PgPool),
  Memory(Arc<Mutex<Vec<StoredLead>>>),
}

impl LeadStore {
  pub async fn postgres(db_url: &str) -> Result<Self, AppError> {
    info!("Postgres db pool initializing..");

    let pool = PgPoolOptions::new()
      .max_connections(8)
      .connect(db_url)
      .await
      .map_err(|e| AppError::InternalError(format!("Postgres connection error: {}", e)))?;

    Self::init_tables(&pool).await?;
    info!("lead tables ready");

    Ok(Self::Postgres(pool))
  }

  pub fn memory() -> Self {
    Self::Memory(Arc::new(Mutex::new(Vec::new())))
  }

  async fn init_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::raw_sql(
      "
      CREATE TABLE IF NOT EXISTS contact_leads (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        company TEXT NOT NULL,
        employees TEXT NOT NULL,
        industry TEXT,
        payload JSONB NOT NULL,
        remote_ip TEXT NOT NULL,
        user_agent TEXT NOT NULL,
        received_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP
      );
      CREATE TABLE IF NOT EXISTS meeting_requests (
        id UUID PRIMARY KEY,
        full_name TEXT NOT NULL,
        email TEXT NOT NULL,
        company TEXT NOT NULL,
        demo_type TEXT NOT NULL,
        timezone TEXT NOT NULL,
        payload JSONB NOT NULL,
        remote_ip TEXT NOT NULL,
        user_agent TEXT NOT NULL,
        client_timestamp TIMESTAMP WITH TIME ZONE NOT NULL,
        received_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP
      );
      "
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::InternalError(format!("Failed to create lead tables: {}", e)))?;

    Ok(())
  }

  pub async fn insert_contact(&self, id: Uuid, lead: &ContactLead, ctx: &RequestContext) -> Result<(), AppError> {
    match self {
      Self::Postgres(pool) => {
        let payload = serde_json::to_value(lead).map_err(|e| AppError::InternalError(e.to_string()))?;
        sqlx::query(
          "INSERT INTO contact_leads (id, name, email, company, employees, industry, payload, remote_ip, user_agent)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
        )
        .bind(id)
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.company)
        .bind(lead.employees.as_str())
        .bind(lead.resolved_industry())
        .bind(payload)
        .bind(&ctx.remote_ip)
        .bind(&ctx.user_agent)
        .execute(pool)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store contact lead: {}", e)))?;
      },
      Self::Memory(leads) => {
        leads.lock().await.push(StoredLead::Contact {
          id,
          lead: lead.clone(),
          remote_ip: ctx.remote_ip.clone(),
          received_at: Utc::now(),
        });
      }
    }
    Ok(())
  }

  pub async fn insert_meeting(&self, id: Uuid, request: &MeetingRequest, ctx: &RequestContext) -> Result<(), AppError> {
    match self {
      Self::Postgres(pool) => {
        let payload = serde_json::to_value(request).map_err(|e| AppError::InternalError(e.to_string()))?;
        sqlx::query(
          "INSERT INTO meeting_requests (id, full_name, email, company, demo_type, timezone, payload, remote_ip, user_agent, client_timestamp)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
        )
        .bind(id)
        .bind(request.full_name())
        .bind(&request.email)
        .bind(&request.company)
        .bind(request.demo_type.as_str())
        .bind(&request.timezone)
        .bind(payload)
        .bind(&ctx.remote_ip)
        .bind(&ctx.user_agent)
        .bind(request.context.timestamp)
        .execute(pool)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store meeting request: {}", e)))?;
      },
      Self::Memory(leads) => {
        leads.lock().await.push(StoredLead::Meeting {
          id,
          request: request.clone(),
          remote_ip: ctx.remote_ip.clone(),
          received_at: Utc::now(),
        });
      }
    }
    Ok(())
  }

  /// Snapshot of the in-memory store; empty for Postgres.
  pub async fn stored(&self) -> Vec<StoredLead> {
    match self {
      Self::Postgres(_) => Vec::new(),
      Self::Memory(leads) => leads.lock().await.clone(),
    }
  }
}

// IP tracking Middleware
pub async fn ip_tracker(
  ConnectInfo(addr): ConnectInfo<SocketAddr>,
  mut req: Request,
  next: Next
) -> Response {

  // first hop of the proxy chain, or the socket address
  let remote_ip = req.headers()
    .get("x-forwarded-for")
    .and_then(|h| h.to_str().ok())
    .and_then(|h| h.split(',').next())
    .map(|ip| ip.trim().to_string())
    .filter(|ip| !ip.is_empty())
    .unwrap_or_else(|| addr.ip().to_string());

  let origin = req.headers()
    .get("origin")
    .and_then(|h| h.to_str().ok())
    .unwrap_or("NA")
    .to_string();

  let user_agent = req.headers()
    .get("user-agent")
    .and_then(|h| h.to_str().ok())
    .unwrap_or("NA")
    .to_string();

  req.extensions_mut().insert(RequestContext {
    remote_ip,
    origin,
    user_agent
  });

  next.run(req).await
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::body::Body;
  use http_body_util::BodyExt;
  use lead_types::{Field, FieldErrorKind};

  async fn read_body(resp: Response) -> (StatusCode, serde_json::Value) {
    let status = resp.status();
    let bytes = Body::new(resp.into_body()).collect().await.expect("collect body").to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json body"))
  }

  #[tokio::test]
  async fn validation_errors_render_as_422_with_fields() {
    let mut errors = ValidationErrors::new();
    errors.add(Field::Email, FieldErrorKind::InvalidEmail);
    let (status, body) = read_body(AppError::from(errors).into_response()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["ok"], false);
    assert_eq!(body["code"], 422);
    assert_eq!(body["fields"][0]["field"], "email");
    assert_eq!(body["fields"][0]["kind"], "invalidEmail");
  }

  #[tokio::test]
  async fn internal_errors_hide_their_detail() {
    let (status, body) = read_body(AppError::InternalError("password=hunter2".into()).into_response()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().contains("hunter2"));
  }

  #[tokio::test]
  async fn memory_limiter_counts_per_ip() {
    let limiter = RateLimiter::memory(2, 600);
    assert!(limiter.check_and_record("10.0.0.1").await.is_ok());
    assert!(limiter.check_and_record("10.0.0.1").await.is_ok());
    assert!(matches!(limiter.check_and_record("10.0.0.1").await, Err(AppError::RateLimitExceeded(_))));
    assert!(limiter.check_and_record("10.0.0.2").await.is_ok());
  }

  #[tokio::test]
  async fn memory_limiter_forgets_expired_windows() {
    let limiter = RateLimiter::memory(5, 1);
    for i in 0..500 {
      assert!(limiter.check_and_record(&format!("10.1.{}.{}", i / 256, i % 256)).await.is_ok());
    }
    assert_eq!(limiter.tracked_ips().await, 500);

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert!(limiter.check_and_record("10.0.0.9").await.is_ok());
    assert_eq!(limiter.tracked_ips().await, 1);
  }

  #[test]
  fn redis_window_is_set_in_the_same_transaction() {
    let packed = String::from_utf8(window_pipeline("rate:lead:10.0.0.1", 600).get_packed_pipeline()).unwrap();
    let multi = packed.find("MULTI").expect("pipeline is atomic");
    let incr = packed.find("INCR").expect("counts the submission");
    let expire = packed.find("EXPIRE").expect("sets the window");
    let exec = packed.find("EXEC").expect("pipeline is atomic");
    assert!(multi < incr && incr < expire && expire < exec);
    assert!(packed[expire..exec].contains("NX"));
    assert!(packed[expire..exec].contains("600"));
  }

  #[tokio::test]
  async fn memory_limiter_window_resets() {
    let limiter = RateLimiter::memory(1, 1);
    assert!(limiter.check_and_record("10.0.0.1").await.is_ok());
    assert!(limiter.check_and_record("10.0.0.1").await.is_err());
    tokio::time::sleep(Duration::from_millis(1_050)).await;
    assert!(limiter.check_and_record("10.0.0.1").await.is_ok());
  }
}
