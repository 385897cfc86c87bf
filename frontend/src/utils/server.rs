use std::fmt;
use lead_types::{ContactLead, MeetingRequest};
use serde::Serialize;

use super::{browser, submission::{Endpoint, Outcome}};

/// Base URL of the lead API, without a trailing slash. Empty means same origin.
const API_BASE_URL: &str = env!("API_BASE_URL");

/* Requests */
pub fn api_base() -> Result<String, AppError> {
  if API_BASE_URL.is_empty() {
    browser::location_origin()
  } else {
    Ok(API_BASE_URL.to_string())
  }
}

pub fn endpoint_url(base: &str, endpoint: Endpoint) -> String {
  format!("{}{}", base.trim_end_matches('/'), endpoint.path())
}

/// Sends one submission. Transport failures are errors; anything the server
/// answered, including 4xx/5xx, becomes an [`Outcome`].
pub async fn submit<T: Serialize>(endpoint: Endpoint, payload: &T) -> Result<Outcome, AppError> {
  let url = endpoint_url(&api_base()?, endpoint);
  let body = serde_json::to_string(payload).map_err(|e| AppError::SerializeError(e.to_string()))?;

  let resp = reqwest::Client::new()
    .post(&url)
    .header("Content-Type", "application/json")
    .body(body)
    .send()
    .await
    .map_err(|e| AppError::ReqwestError(e.to_string()))?;

  let status = resp.status().as_u16();
  let text = resp.text().await.map_err(|e| AppError::ReqwestError(e.to_string()))?;
  Ok(endpoint.interpret(status, &text))
}

pub async fn submit_contact(lead: &ContactLead) -> Result<Outcome, AppError> {
  submit(Endpoint::Contact, lead).await
}

pub async fn submit_meeting(request: &MeetingRequest) -> Result<Outcome, AppError> {
  submit(Endpoint::Meeting, request).await
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  ReqwestError(String),
  SerializeError(String),
  DeserializeError(String),
  WasmError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::ReqwestError(msg) => write!(f, "Reqwest error: {}", msg),
      AppError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
      AppError::WasmError(msg) => write!(f, "Wasm error: {}", msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoint_urls_join_cleanly() {
    assert_eq!(endpoint_url("https://api.example.com/", Endpoint::Contact), "https://api.example.com/api/contact");
    assert_eq!(endpoint_url("http://localhost:7575", Endpoint::Meeting), "http://localhost:7575/api/meeting");
  }

  #[test]
  fn errors_name_their_source() {
    assert_eq!(AppError::ReqwestError("timed out".into()).to_string(), "Reqwest error: timed out");
    assert_eq!(AppError::WasmError("no global window".into()).to_string(), "Wasm error: no global window");
  }
}
