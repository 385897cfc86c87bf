use std::{fmt, sync::OnceLock};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_PHONE_LEN: usize = 40;
pub const MAX_MESSAGE_LEN: usize = 5_000;

/// Every input a lead form can attach an error to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
  Name,
  FirstName,
  LastName,
  Email,
  Company,
  Phone,
  Employees,
  JobTitle,
  Industry,
  IndustryOther,
  Message,
  Agree,
  DemoType,
  PreferredDate,
  PreferredTime,
  Timezone,
  Interests,
}

impl Field {
  pub fn as_str(&self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::FirstName => "firstName",
      Field::LastName => "lastName",
      Field::Email => "email",
      Field::Company => "company",
      Field::Phone => "phone",
      Field::Employees => "employees",
      Field::JobTitle => "jobTitle",
      Field::Industry => "industry",
      Field::IndustryOther => "industryOther",
      Field::Message => "message",
      Field::Agree => "agree",
      Field::DemoType => "demoType",
      Field::PreferredDate => "preferredDate",
      Field::PreferredTime => "preferredTime",
      Field::Timezone => "timezone",
      Field::Interests => "interests",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldErrorKind {
  Required,
  InvalidEmail,
  TooLong { max: usize },
  InvalidChoice,
  InvalidDate,
  InvalidTime,
  MustAgree,
}

impl fmt::Display for FieldErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Required => write!(f, "is required"),
      Self::InvalidEmail => write!(f, "is not a valid email address"),
      Self::TooLong { max } => write!(f, "must be at most {} characters", max),
      Self::InvalidChoice => write!(f, "is not one of the allowed options"),
      Self::InvalidDate => write!(f, "must be a date in YYYY-MM-DD form"),
      Self::InvalidTime => write!(f, "must be a time in HH:MM form"),
      Self::MustAgree => write!(f, "must be accepted"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field: Field,
  #[serde(flatten)]
  pub kind: FieldErrorKind,
}

/// Per-field validation failures, in the order the form lays the fields out.
/// At most one error is kept per field: the first check that fails wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
  errors: Vec<FieldError>,
}

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, field: Field, kind: FieldErrorKind) {
    if self.get(field).is_none() {
      self.errors.push(FieldError { field, kind });
    }
  }

  pub fn get(&self, field: Field) -> Option<FieldErrorKind> {
    self.errors.iter().find(|e| e.field == field).map(|e| e.kind)
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
    self.errors.iter().map(|e| e.field)
  }

  pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
    self.errors.iter()
  }

  /// Drops the error for one input, once the user edits it.
  pub fn remove(&mut self, field: Field) {
    self.errors.retain(|e| e.field != field);
  }

  /// Keep only the errors for the given fields. Used by step-wise forms.
  pub fn retain_fields(&mut self, fields: &[Field]) {
    self.errors.retain(|e| fields.contains(&e.field));
  }

  pub fn into_result(self) -> Result<(), ValidationErrors> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }

  fn summary(&self) -> String {
    self.errors
      .iter()
      .map(|e| format!("{} {}", e.field, e.kind))
      .collect::<Vec<_>>()
      .join("; ")
  }
}

fn email_regex() -> &'static Regex {
  static EMAIL: OnceLock<Regex> = OnceLock::new();
  EMAIL.get_or_init(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
      .expect("email pattern is a valid regex")
  })
}

pub fn is_valid_email(email: &str) -> bool {
  let email = email.trim();
  email.len() <= 254 && email_regex().is_match(email)
}

pub fn is_blank(value: &str) -> bool {
  value.trim().is_empty()
}

/// Required text with an upper bound on its trimmed length.
pub(crate) fn check_required(errors: &mut ValidationErrors, field: Field, value: &str, max: usize) {
  if is_blank(value) {
    errors.add(field, FieldErrorKind::Required);
  } else {
    check_len(errors, field, value, max);
  }
}

pub(crate) fn check_optional(errors: &mut ValidationErrors, field: Field, value: Option<&str>, max: usize) {
  if let Some(v) = value {
    check_len(errors, field, v, max);
  }
}

fn check_len(errors: &mut ValidationErrors, field: Field, value: &str, max: usize) {
  if value.trim().chars().count() > max {
    errors.add(field, FieldErrorKind::TooLong { max });
  }
}

pub(crate) fn check_email(errors: &mut ValidationErrors, value: &str) {
  if is_blank(value) {
    errors.add(Field::Email, FieldErrorKind::Required);
  } else if !is_valid_email(value) {
    errors.add(Field::Email, FieldErrorKind::InvalidEmail);
  }
}

/// Trimmed, `None` when blank.
pub fn non_blank(value: &str) -> Option<String> {
  let v = value.trim();
  if v.is_empty() { None } else { Some(v.to_string()) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_ordinary_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    assert!(is_valid_email("  padded@example.org  "));
  }

  #[test]
  fn rejects_malformed_addresses() {
    for bad in ["", "ada", "ada@", "@example.com", "ada@example", "ada @example.com", "ada@exa mple.com", "ada@-example.com"] {
      assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
  }

  #[test]
  fn keeps_first_error_per_field() {
    let mut errors = ValidationErrors::new();
    errors.add(Field::Email, FieldErrorKind::Required);
    errors.add(Field::Email, FieldErrorKind::InvalidEmail);
    errors.add(Field::Name, FieldErrorKind::Required);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::Email), Some(FieldErrorKind::Required));
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email, Field::Name]);

    errors.remove(Field::Email);
    assert_eq!(errors.get(Field::Email), None);
    assert_eq!(errors.len(), 1);
  }

  #[test]
  fn whitespace_counts_as_empty() {
    let mut errors = ValidationErrors::new();
    check_required(&mut errors, Field::Company, "   \t", MAX_NAME_LEN);
    assert_eq!(errors.get(Field::Company), Some(FieldErrorKind::Required));
  }

  #[test]
  fn serializes_field_errors_flat() {
    let mut errors = ValidationErrors::new();
    errors.add(Field::Message, FieldErrorKind::TooLong { max: 10 });
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!({"errors": [{"field": "message", "kind": "tooLong", "max": 10}]}));
  }
}
