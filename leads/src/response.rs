use serde::{Deserialize, Serialize};

use crate::validate::{FieldError, ValidationErrors};

/// Envelope returned by both lead endpoints.
///
/// `ok` defaults to `false`: a body without it never counts as a success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadResponse {
  #[serde(default)]
  pub ok: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub fields: Vec<FieldError>,
}

impl LeadResponse {
  pub fn accepted(id: impl Into<String>, message: impl Into<String>) -> Self {
    Self { ok: true, id: Some(id.into()), message: Some(message.into()), ..Default::default() }
  }

  pub fn rejected(error: impl Into<String>) -> Self {
    Self { ok: false, error: Some(error.into()), ..Default::default() }
  }

  pub fn invalid(errors: &ValidationErrors) -> Self {
    Self {
      ok: false,
      error: Some(errors.to_string()),
      fields: errors.iter().copied().collect(),
      ..Default::default()
    }
  }

  pub fn validation_errors(&self) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for e in &self.fields {
      errors.add(e.field, e.kind);
    }
    errors
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::validate::{Field, FieldErrorKind};

  #[test]
  fn missing_ok_reads_as_failure() {
    let resp: LeadResponse = serde_json::from_str(r#"{"message": "thanks"}"#).unwrap();
    assert!(!resp.ok);
    assert_eq!(resp.message.as_deref(), Some("thanks"));
  }

  #[test]
  fn field_errors_survive_the_wire() {
    let mut errors = ValidationErrors::new();
    errors.add(Field::Email, FieldErrorKind::InvalidEmail);
    let json = serde_json::to_string(&LeadResponse::invalid(&errors)).unwrap();
    let back: LeadResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back.validation_errors(), errors);
    assert_eq!(back.error.as_deref(), Some("email is not a valid email address"));
  }
}
