use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::{
  utm::Utm,
  validate::{check_email, check_optional, check_required, non_blank, Field, FieldErrorKind, ValidationErrors, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_PHONE_LEN},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Employees {
  #[serde(rename = "1-50")]
  UpTo50,
  #[serde(rename = "51-200")]
  UpTo200,
  #[serde(rename = "201-500")]
  UpTo500,
  #[serde(rename = "501-1000")]
  UpTo1000,
  #[serde(rename = "1000+")]
  Over1000,
}

impl Employees {
  pub const ALL: [Employees; 5] = [Employees::UpTo50, Employees::UpTo200, Employees::UpTo500, Employees::UpTo1000, Employees::Over1000];

  pub fn as_str(&self) -> &'static str {
    match self {
      Employees::UpTo50 => "1-50",
      Employees::UpTo200 => "51-200",
      Employees::UpTo500 => "201-500",
      Employees::UpTo1000 => "501-1000",
      Employees::Over1000 => "1000+",
    }
  }
}

impl fmt::Display for Employees {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Employees {
  type Err = FieldErrorKind;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Employees::ALL
      .into_iter()
      .find(|e| e.as_str() == s.trim())
      .ok_or(FieldErrorKind::InvalidChoice)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
  Technology,
  Finance,
  Retail,
  Manufacturing,
  Healthcare,
  Education,
  Other,
}

impl Industry {
  pub const ALL: [Industry; 7] = [
    Industry::Technology, Industry::Finance, Industry::Retail, Industry::Manufacturing,
    Industry::Healthcare, Industry::Education, Industry::Other,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Industry::Technology => "technology",
      Industry::Finance => "finance",
      Industry::Retail => "retail",
      Industry::Manufacturing => "manufacturing",
      Industry::Healthcare => "healthcare",
      Industry::Education => "education",
      Industry::Other => "other",
    }
  }
}

impl FromStr for Industry {
  type Err = FieldErrorKind;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Industry::ALL
      .into_iter()
      .find(|i| i.as_str() == s.trim())
      .ok_or(FieldErrorKind::InvalidChoice)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLead {
  pub name: String,
  pub email: String,
  pub company: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  pub employees: Employees,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub job_title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub industry: Option<Industry>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub industry_other: Option<String>,
  pub message: String,
  pub agree: bool,
  #[serde(flatten)]
  pub utm: Utm,
}

impl ContactLead {
  pub fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_required(&mut errors, Field::Name, &self.name, MAX_NAME_LEN);
    check_email(&mut errors, &self.email);
    check_required(&mut errors, Field::Company, &self.company, MAX_NAME_LEN);
    check_optional(&mut errors, Field::Phone, self.phone.as_deref(), MAX_PHONE_LEN);
    check_optional(&mut errors, Field::JobTitle, self.job_title.as_deref(), MAX_NAME_LEN);
    if self.industry == Some(Industry::Other) {
      check_required(&mut errors, Field::IndustryOther, self.industry_other.as_deref().unwrap_or(""), MAX_NAME_LEN);
    }
    check_required(&mut errors, Field::Message, &self.message, MAX_MESSAGE_LEN);
    if !self.agree {
      errors.add(Field::Agree, FieldErrorKind::MustAgree);
    }

    errors.into_result()
  }

  /// The free-text override replaces the preset when "other" was picked.
  pub fn resolved_industry(&self) -> Option<String> {
    match self.industry {
      Some(Industry::Other) => self.industry_other.as_deref().and_then(non_blank),
      Some(industry) => Some(industry.as_str().to_string()),
      None => None,
    }
  }
}

/// Raw contact form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
  pub name: String,
  pub email: String,
  pub company: String,
  pub phone: String,
  pub employees: String,
  pub job_title: String,
  pub industry: String,
  pub industry_other: String,
  pub message: String,
  pub agree: bool,
}

impl ContactDraft {
  pub fn is_empty(&self) -> bool {
    *self == ContactDraft::default()
  }

  /// Parses the choice fields and runs the schema, reporting every offending field.
  pub fn into_lead(&self, utm: Utm) -> Result<ContactLead, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let employees = if self.employees.trim().is_empty() {
      errors.add(Field::Employees, FieldErrorKind::Required);
      None
    } else {
      self.employees.parse::<Employees>().map_err(|kind| errors.add(Field::Employees, kind)).ok()
    };
    let industry = match non_blank(&self.industry) {
      Some(raw) => raw.parse::<Industry>().map_err(|kind| errors.add(Field::Industry, kind)).ok(),
      None => None,
    };

    let lead = ContactLead {
      name: self.name.trim().to_string(),
      email: self.email.trim().to_string(),
      company: self.company.trim().to_string(),
      phone: non_blank(&self.phone),
      employees: employees.unwrap_or(Employees::UpTo50),
      job_title: non_blank(&self.job_title),
      industry,
      industry_other: non_blank(&self.industry_other),
      message: self.message.trim().to_string(),
      agree: self.agree,
      utm,
    };

    if let Err(schema) = lead.validate() {
      for e in schema.iter() {
        errors.add(e.field, e.kind);
      }
    }
    errors.into_result().map(|_| lead)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ada() -> ContactDraft {
    ContactDraft {
      name: "Ada Lovelace".into(),
      email: "ada@example.com".into(),
      company: "Acme".into(),
      employees: "1-50".into(),
      message: "Hello".into(),
      agree: true,
      ..Default::default()
    }
  }

  #[test]
  fn well_formed_draft_becomes_a_lead() {
    let lead = ada().into_lead(Utm::default()).expect("valid lead");
    assert_eq!(lead.name, "Ada Lovelace");
    assert_eq!(lead.employees, Employees::UpTo50);
    assert_eq!(lead.phone, None);
    assert!(lead.validate().is_ok());
  }

  #[test]
  fn each_missing_required_field_blocks_submission() {
    let cases: Vec<(Field, fn(&mut ContactDraft))> = vec![
      (Field::Name, |d| d.name.clear()),
      (Field::Email, |d| d.email.clear()),
      (Field::Company, |d| d.company.clear()),
      (Field::Employees, |d| d.employees.clear()),
      (Field::Message, |d| d.message = "   ".into()),
      (Field::Agree, |d| d.agree = false),
    ];
    for (field, clear) in cases {
      let mut draft = ada();
      clear(&mut draft);
      let errors = draft.into_lead(Utm::default()).expect_err("must be blocked");
      assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field], "only {field} should fail");
    }
  }

  #[test]
  fn malformed_email_is_reported() {
    let mut draft = ada();
    draft.email = "ada-at-example".into();
    let errors = draft.into_lead(Utm::default()).unwrap_err();
    assert_eq!(errors.get(Field::Email), Some(FieldErrorKind::InvalidEmail));
  }

  #[test]
  fn unknown_bucket_is_an_invalid_choice() {
    let mut draft = ada();
    draft.employees = "a few".into();
    let errors = draft.into_lead(Utm::default()).unwrap_err();
    assert_eq!(errors.get(Field::Employees), Some(FieldErrorKind::InvalidChoice));
  }

  #[test]
  fn other_industry_needs_free_text() {
    let mut draft = ada();
    draft.industry = "other".into();
    let errors = draft.clone().into_lead(Utm::default()).unwrap_err();
    assert_eq!(errors.get(Field::IndustryOther), Some(FieldErrorKind::Required));

    draft.industry_other = "Aerospace".into();
    let lead = draft.into_lead(Utm::default()).unwrap();
    assert_eq!(lead.resolved_industry().as_deref(), Some("Aerospace"));
  }

  #[test]
  fn json_shape_is_camel_case_with_flat_utm() {
    let mut lead = ada().into_lead(Utm { source: Some("ads".into()), ..Default::default() }).unwrap();
    lead.job_title = Some("CTO".into());
    let json = serde_json::to_value(&lead).unwrap();
    assert_eq!(json["jobTitle"], "CTO");
    assert_eq!(json["employees"], "1-50");
    assert_eq!(json["utmSource"], "ads");
    assert!(json.get("phone").is_none());

    let back: ContactLead = serde_json::from_value(json).unwrap();
    assert_eq!(back, lead);
  }

  #[test]
  fn overlong_message_is_rejected() {
    let mut draft = ada();
    draft.message = "x".repeat(MAX_MESSAGE_LEN + 1);
    let errors = draft.into_lead(Utm::default()).unwrap_err();
    assert_eq!(errors.get(Field::Message), Some(FieldErrorKind::TooLong { max: MAX_MESSAGE_LEN }));
  }
}
