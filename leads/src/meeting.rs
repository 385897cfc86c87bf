use std::{collections::BTreeSet, fmt, str::FromStr};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  contact::Employees,
  utm::Utm,
  validate::{check_email, check_optional, check_required, non_blank, Field, FieldErrorKind, ValidationErrors, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_PHONE_LEN},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoType {
  Quick,
  Standard,
  Comprehensive,
}

impl DemoType {
  pub const ALL: [DemoType; 3] = [DemoType::Quick, DemoType::Standard, DemoType::Comprehensive];

  pub fn as_str(&self) -> &'static str {
    match self {
      DemoType::Quick => "quick",
      DemoType::Standard => "standard",
      DemoType::Comprehensive => "comprehensive",
    }
  }

  pub fn minutes(&self) -> u32 {
    match self {
      DemoType::Quick => 15,
      DemoType::Standard => 30,
      DemoType::Comprehensive => 60,
    }
  }
}

impl FromStr for DemoType {
  type Err = FieldErrorKind;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    DemoType::ALL
      .into_iter()
      .find(|d| d.as_str() == s.trim())
      .ok_or(FieldErrorKind::InvalidChoice)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
  Analytics,
  Automation,
  Integrations,
  Security,
  Reporting,
  Support,
}

impl Interest {
  pub const ALL: [Interest; 6] = [
    Interest::Analytics, Interest::Automation, Interest::Integrations,
    Interest::Security, Interest::Reporting, Interest::Support,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Interest::Analytics => "analytics",
      Interest::Automation => "automation",
      Interest::Integrations => "integrations",
      Interest::Security => "security",
      Interest::Reporting => "reporting",
      Interest::Support => "support",
    }
  }
}

impl fmt::Display for Interest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Captured by the browser at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContext {
  pub page_url: String,
  #[serde(default)]
  pub referrer: String,
  #[serde(default)]
  pub user_agent: String,
  pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  pub company: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub job_title: Option<String>,
  pub employees: Employees,
  pub demo_type: DemoType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub preferred_date: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub preferred_time: Option<String>,
  pub timezone: String,
  #[serde(default)]
  pub interests: BTreeSet<Interest>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(flatten)]
  pub utm: Utm,
  #[serde(flatten)]
  pub context: ClientContext,
}

impl MeetingRequest {
  pub fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_required(&mut errors, Field::FirstName, &self.first_name, MAX_NAME_LEN);
    check_required(&mut errors, Field::LastName, &self.last_name, MAX_NAME_LEN);
    check_email(&mut errors, &self.email);
    check_optional(&mut errors, Field::Phone, self.phone.as_deref(), MAX_PHONE_LEN);
    check_required(&mut errors, Field::Company, &self.company, MAX_NAME_LEN);
    check_optional(&mut errors, Field::JobTitle, self.job_title.as_deref(), MAX_NAME_LEN);
    if let Some(date) = self.preferred_date.as_deref() {
      if parse_date(date).is_none() {
        errors.add(Field::PreferredDate, FieldErrorKind::InvalidDate);
      }
    }
    if let Some(time) = self.preferred_time.as_deref() {
      if parse_time(time).is_none() {
        errors.add(Field::PreferredTime, FieldErrorKind::InvalidTime);
      }
    }
    check_required(&mut errors, Field::Timezone, &self.timezone, 64);
    check_optional(&mut errors, Field::Message, self.message.as_deref(), MAX_MESSAGE_LEN);

    errors.into_result()
  }

  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name.trim(), self.last_name.trim())
  }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
  NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Raw meeting form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingDraft {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub phone: String,
  pub company: String,
  pub job_title: String,
  pub employees: String,
  pub demo_type: String,
  pub preferred_date: String,
  pub preferred_time: String,
  pub timezone: String,
  pub interests: BTreeSet<Interest>,
  pub message: String,
}

impl MeetingDraft {
  pub fn toggle_interest(&mut self, interest: Interest) {
    if !self.interests.remove(&interest) {
      self.interests.insert(interest);
    }
  }

  /// Parses choice fields and runs the schema, reporting every offending field.
  pub fn into_request(&self, utm: Utm, context: ClientContext) -> Result<MeetingRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let employees = parse_choice::<Employees>(&mut errors, Field::Employees, &self.employees);
    let demo_type = parse_choice::<DemoType>(&mut errors, Field::DemoType, &self.demo_type);

    let request = MeetingRequest {
      first_name: self.first_name.trim().to_string(),
      last_name: self.last_name.trim().to_string(),
      email: self.email.trim().to_string(),
      phone: non_blank(&self.phone),
      company: self.company.trim().to_string(),
      job_title: non_blank(&self.job_title),
      employees: employees.unwrap_or(Employees::UpTo50),
      demo_type: demo_type.unwrap_or(DemoType::Standard),
      preferred_date: non_blank(&self.preferred_date),
      preferred_time: non_blank(&self.preferred_time),
      timezone: self.timezone.trim().to_string(),
      interests: self.interests.clone(),
      message: non_blank(&self.message),
      utm,
      context,
    };

    if let Err(schema) = request.validate() {
      for e in schema.iter() {
        errors.add(e.field, e.kind);
      }
    }
    errors.into_result().map(|_| request)
  }
}

fn parse_choice<T: FromStr<Err = FieldErrorKind>>(errors: &mut ValidationErrors, field: Field, raw: &str) -> Option<T> {
  if raw.trim().is_empty() {
    errors.add(field, FieldErrorKind::Required);
    return None;
  }
  match raw.parse::<T>() {
    Ok(v) => Some(v),
    Err(kind) => {
      errors.add(field, kind);
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn context() -> ClientContext {
    ClientContext {
      page_url: "https://example.com/en/demo".into(),
      referrer: String::new(),
      user_agent: "test-agent".into(),
      timestamp: DateTime::parse_from_rfc3339("2026-03-01T10:00:00Z").unwrap().with_timezone(&Utc),
    }
  }

  fn grace() -> MeetingDraft {
    MeetingDraft {
      first_name: "Grace".into(),
      last_name: "Hopper".into(),
      email: "grace@example.com".into(),
      company: "Navy".into(),
      employees: "1000+".into(),
      demo_type: "standard".into(),
      timezone: "Europe/Istanbul".into(),
      ..Default::default()
    }
  }

  #[test]
  fn minimal_request_is_valid() {
    let req = grace().into_request(Utm::default(), context()).unwrap();
    assert_eq!(req.full_name(), "Grace Hopper");
    assert_eq!(req.demo_type.minutes(), 30);
    assert!(req.interests.is_empty());
  }

  #[test]
  fn required_fields_are_enforced() {
    let errors = MeetingDraft::default().into_request(Utm::default(), context()).unwrap_err();
    let fields: Vec<Field> = errors.fields().collect();
    assert_eq!(fields, vec![
      Field::Employees, Field::DemoType, Field::FirstName, Field::LastName,
      Field::Email, Field::Company, Field::Timezone,
    ]);
  }

  #[test]
  fn date_and_time_must_parse() {
    let mut draft = grace();
    draft.preferred_date = "31/12/2026".into();
    draft.preferred_time = "25:00".into();
    let errors = draft.into_request(Utm::default(), context()).unwrap_err();
    assert_eq!(errors.get(Field::PreferredDate), Some(FieldErrorKind::InvalidDate));
    assert_eq!(errors.get(Field::PreferredTime), Some(FieldErrorKind::InvalidTime));
  }

  #[test]
  fn interests_toggle_as_a_set() {
    let mut draft = grace();
    draft.toggle_interest(Interest::Security);
    draft.toggle_interest(Interest::Analytics);
    draft.toggle_interest(Interest::Security);
    assert_eq!(draft.interests.iter().copied().collect::<Vec<_>>(), vec![Interest::Analytics]);
  }

  #[test]
  fn context_is_flattened_into_the_body() {
    let mut draft = grace();
    draft.toggle_interest(Interest::Reporting);
    draft.preferred_date = "2026-04-02".into();
    let req = draft.into_request(Utm::default(), context()).unwrap();
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["firstName"], "Grace");
    assert_eq!(json["demoType"], "standard");
    assert_eq!(json["interests"], serde_json::json!(["reporting"]));
    assert_eq!(json["pageUrl"], "https://example.com/en/demo");
    assert_eq!(json["timestamp"], "2026-03-01T10:00:00Z");

    let back: MeetingRequest = serde_json::from_value(json).unwrap();
    assert_eq!(back, req);
  }
}
