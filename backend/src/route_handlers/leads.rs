use axum::{body::Bytes, extract::State, Extension, Json};
use lead_types::{ContactLead, LeadResponse, MeetingRequest};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::midwares::app_state::{AppError, AppState, RequestContext};

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
  serde_json::from_slice::<T>(body).map_err(|e| {
    info!("could not deserialize lead payload: {}", e);
    AppError::DeserializeError(format!("Malformed request body: {}", e))
  })
}

pub async fn contact_handler(
  State(state): State<AppState>,
  Extension(req_ctx): Extension<RequestContext>,
  body: Bytes
) -> Result<Json<LeadResponse>, AppError> {
  let lead = parse_body::<ContactLead>(&body)?;
  lead.validate()?;

  // only well-formed submissions count against the window
  state.rate_limiter.check_and_record(&req_ctx.remote_ip).await?;

  let id = Uuid::new_v4();
  state.store.insert_contact(id, &lead, &req_ctx).await?;
  info!(%id, ip = %req_ctx.remote_ip, employees = %lead.employees, "contact lead stored");

  Ok(Json(LeadResponse::accepted(id.to_string(), "Thanks for reaching out. We will get back to you within one business day.")))
}

pub async fn meeting_handler(
  State(state): State<AppState>,
  Extension(req_ctx): Extension<RequestContext>,
  body: Bytes
) -> Result<Json<LeadResponse>, AppError> {
  let request = parse_body::<MeetingRequest>(&body)?;
  request.validate()?;

  state.rate_limiter.check_and_record(&req_ctx.remote_ip).await?;

  let id = Uuid::new_v4();
  state.store.insert_meeting(id, &request, &req_ctx).await?;
  info!(%id, ip = %req_ctx.remote_ip, demo = request.demo_type.as_str(), "meeting request stored");

  Ok(Json(LeadResponse::accepted(
    id.to_string(),
    format!("Your {}-minute demo request is in. We will confirm a time by email.", request.demo_type.minutes())
  )))
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({"code": 200, "status": "ok"}))
}

#[cfg(test)]
mod tests {
  use std::net::SocketAddr;
  use axum::{
    body::Body, extract::connect_info::MockConnectInfo, http::{Request, StatusCode}, response::Response, Router
  };
  use http_body_util::BodyExt;
  use lead_types::{Employees, Field};
  use serde_json::json;
  use tower::ServiceExt;

  use crate::{build_router, midwares::app_state::{AppState, LeadStore, RateLimiter, StoredLead}};

  fn app(store: LeadStore, max: usize, allowed_origin: Option<&str>) -> Router {
    let state = AppState { store, rate_limiter: RateLimiter::memory(max, 600) };
    build_router(state, allowed_origin.map(str::to_string))
      .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))))
  }

  fn post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
      .method("POST")
      .uri(uri)
      .header("content-type", "application/json")
      .header("origin", "https://example.com")
      .body(Body::from(body.to_string()))
      .unwrap()
  }

  async fn read(resp: Response) -> (StatusCode, serde_json::Value) {
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  fn ada() -> serde_json::Value {
    json!({
      "name": "Ada Lovelace",
      "email": "ada@example.com",
      "company": "Acme",
      "employees": "1-50",
      "message": "Hello",
      "agree": true,
      "utmSource": "newsletter"
    })
  }

  fn grace() -> serde_json::Value {
    json!({
      "firstName": "Grace",
      "lastName": "Hopper",
      "email": "grace@example.com",
      "company": "Navy",
      "employees": "1000+",
      "demoType": "quick",
      "timezone": "America/New_York",
      "interests": ["security", "analytics"],
      "pageUrl": "https://example.com/en/demo",
      "referrer": "",
      "userAgent": "test",
      "timestamp": "2026-03-01T10:00:00Z"
    })
  }

  #[tokio::test]
  async fn contact_lead_is_stored_and_acknowledged() {
    let store = LeadStore::memory();
    let resp = app(store.clone(), 5, None).oneshot(post("/api/contact", &ada())).await.unwrap();
    let (status, body) = read(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["id"].as_str().is_some());

    let stored = store.stored().await;
    assert_eq!(stored.len(), 1);
    match &stored[0] {
      StoredLead::Contact { lead, remote_ip, .. } => {
        assert_eq!(lead.employees, Employees::UpTo50);
        assert_eq!(lead.utm.source.as_deref(), Some("newsletter"));
        assert_eq!(remote_ip, "127.0.0.1");
      },
      other => panic!("unexpected lead {other:?}"),
    }
  }

  #[tokio::test]
  async fn invalid_contact_lead_is_rejected_with_fields() {
    let store = LeadStore::memory();
    let mut lead = ada();
    lead["email"] = json!("not-an-email");
    lead["agree"] = json!(false);

    let (status, body) = read(app(store.clone(), 5, None).oneshot(post("/api/contact", &lead)).await.unwrap()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["ok"], false);
    let fields: Vec<&str> = body["fields"].as_array().unwrap().iter().map(|f| f["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec![Field::Email.as_str(), Field::Agree.as_str()]);
    assert!(store.stored().await.is_empty());
  }

  #[tokio::test]
  async fn malformed_json_is_a_bad_request() {
    let req = Request::builder()
      .method("POST")
      .uri("/api/contact")
      .body(Body::from("{not json"))
      .unwrap();
    let (status, body) = read(app(LeadStore::memory(), 5, None).oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Malformed request body"));
  }

  #[tokio::test]
  async fn meeting_request_is_stored() {
    let store = LeadStore::memory();
    let (status, body) = read(app(store.clone(), 5, None).oneshot(post("/api/meeting", &grace())).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["message"].as_str().unwrap().contains("15-minute"));

    match &store.stored().await[0] {
      StoredLead::Meeting { request, .. } => assert_eq!(request.interests.len(), 2),
      other => panic!("unexpected lead {other:?}"),
    }
  }

  #[tokio::test]
  async fn meeting_without_timezone_is_rejected() {
    let mut req = grace();
    req["timezone"] = json!(" ");
    let (status, body) = read(app(LeadStore::memory(), 5, None).oneshot(post("/api/meeting", &req)).await.unwrap()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"][0]["field"], "timezone");
  }

  #[tokio::test]
  async fn repeated_submissions_hit_the_rate_limit() {
    let router = app(LeadStore::memory(), 2, None);
    for _ in 0..2 {
      let resp = router.clone().oneshot(post("/api/contact", &ada())).await.unwrap();
      assert_eq!(resp.status(), StatusCode::OK);
    }
    let (status, body) = read(router.oneshot(post("/api/contact", &ada())).await.unwrap()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["ok"], false);
  }

  #[tokio::test]
  async fn forwarded_for_header_decides_the_client_ip() {
    let router = app(LeadStore::memory(), 1, None);
    let mut first = post("/api/contact", &ada());
    first.headers_mut().insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
    assert_eq!(router.clone().oneshot(first).await.unwrap().status(), StatusCode::OK);

    // a different client behind the same proxy still has its own budget
    let mut second = post("/api/contact", &ada());
    second.headers_mut().insert("x-forwarded-for", "203.0.113.8".parse().unwrap());
    assert_eq!(router.oneshot(second).await.unwrap().status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn foreign_origins_are_refused_when_configured() {
    let router = app(LeadStore::memory(), 5, Some("https://site.example"));
    let (status, _) = read(router.clone().oneshot(post("/api/contact", &ada())).await.unwrap()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let mut ok = post("/api/contact", &ada());
    ok.headers_mut().insert("origin", "https://site.example".parse().unwrap());
    assert_eq!(router.oneshot(ok).await.unwrap().status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn health_reports_ok() {
    let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, body) = read(app(LeadStore::memory(), 5, None).oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"code": 200, "status": "ok"}));
  }
}
