use serde::{de::DeserializeOwned, Serialize};

use super::{browser, server::AppError, submission::Endpoint};

pub fn draft_key(endpoint: Endpoint) -> String {
  format!("lead-draft:{}", endpoint.form_name())
}

pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
  serde_json::from_str(raw).map_err(|e| AppError::DeserializeError(e.to_string()))
}

/// Restores a half-typed form. A corrupt entry is dropped rather than surfaced.
pub fn load<T: DeserializeOwned>(endpoint: Endpoint) -> Option<T> {
  let key = draft_key(endpoint);
  let storage = browser::local_storage().ok()?;
  let raw = storage.get_item(&key).ok().flatten()?;
  match decode(&raw) {
    Ok(draft) => Some(draft),
    Err(_) => {
      let _ = storage.remove_item(&key);
      None
    }
  }
}

pub fn save<T: Serialize>(endpoint: Endpoint, draft: &T) -> Result<(), AppError> {
  let raw = serde_json::to_string(draft).map_err(|e| AppError::SerializeError(e.to_string()))?;
  browser::local_storage()?
    .set_item(&draft_key(endpoint), &raw)
    .map_err(|e| AppError::WasmError(format!("localStorage.setItem: {:?}", e)))
}

pub fn clear(endpoint: Endpoint) -> Result<(), AppError> {
  browser::local_storage()?
    .remove_item(&draft_key(endpoint))
    .map_err(|e| AppError::WasmError(format!("localStorage.removeItem: {:?}", e)))
}
