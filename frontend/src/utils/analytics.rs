use dioxus::logger::tracing::warn;
use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{i18n::Locale, submission::{Endpoint, Outcome}};

/// Event pushed to the tag manager's `window.dataLayer` after every lead submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadEvent {
  pub event: &'static str,
  pub form: &'static str,
  pub outcome: &'static str,
  pub locale: &'static str,
}

impl LeadEvent {
  pub fn new(endpoint: Endpoint, outcome: &Outcome, locale: Locale) -> Self {
    Self {
      event: "lead_submit",
      form: endpoint.form_name(),
      outcome: outcome.label(),
      locale: locale.code(),
    }
  }
}

/// Best effort: a missing or blocked tag manager never affects the form.
pub fn push(event: &LeadEvent) {
  if let Err(e) = try_push(event) {
    warn!("analytics event dropped: {:?}", e);
  }
}

fn try_push(event: &LeadEvent) -> Result<(), JsValue> {
  let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
  let key = JsValue::from_str("dataLayer");

  let existing = js_sys::Reflect::get(&window, &key)?;
  let layer = if js_sys::Array::is_array(&existing) {
    js_sys::Array::from(&existing)
  } else {
    let fresh = js_sys::Array::new();
    js_sys::Reflect::set(&window, &key, &fresh)?;
    fresh
  };

  let json = serde_json::to_string(event).map_err(|e| JsValue::from_str(&e.to_string()))?;
  layer.push(&js_sys::JSON::parse(&json)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use lead_types::ValidationErrors;

  #[test]
  fn event_shape() {
    let ok = LeadEvent::new(Endpoint::Contact, &Outcome::Success { message: None }, Locale::Tr);
    assert_eq!(
      serde_json::to_value(&ok).unwrap(),
      serde_json::json!({"event": "lead_submit", "form": "contact", "outcome": "success", "locale": "tr"})
    );

    let failed = Outcome::Failure { message: None, fields: ValidationErrors::new() };
    let ev = LeadEvent::new(Endpoint::Meeting, &failed, Locale::En);
    assert_eq!(ev.form, "meeting");
    assert_eq!(ev.outcome, "failure");
  }
}
