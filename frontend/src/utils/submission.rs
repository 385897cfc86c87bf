use lead_types::{ContactDraft, LeadResponse, MeetingDraft, ValidationErrors};

use super::steps::MeetingStep;

/// What a lead form shows: exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
  #[default]
  Idle,
  Submitting,
  Success { message: Option<String> },
  Error { message: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  Success { message: Option<String> },
  /// `message` is `None` when the server gave no readable reason.
  Failure { message: Option<String>, fields: ValidationErrors },
}

impl Outcome {
  pub fn is_success(&self) -> bool {
    matches!(self, Outcome::Success { .. })
  }

  pub fn label(&self) -> &'static str {
    if self.is_success() { "success" } else { "failure" }
  }
}

impl SubmitState {
  pub fn is_submitting(&self) -> bool {
    matches!(self, SubmitState::Submitting)
  }

  /// Enters `Submitting`. Returns `false` while a submission is already in flight,
  /// in which case the caller must not send anything.
  pub fn begin(&mut self) -> bool {
    if self.is_submitting() {
      return false;
    }
    *self = SubmitState::Submitting;
    true
  }

  /// Settles an in-flight submission. When the server rejected individual fields
  /// those are shown inline, and the banner falls back to the localized generic
  /// text instead of the server's summary.
  pub fn finish(&mut self, outcome: &Outcome) {
    *self = match outcome {
      Outcome::Success { message } => SubmitState::Success { message: message.clone() },
      Outcome::Failure { message, fields } if fields.is_empty() => SubmitState::Error { message: message.clone() },
      Outcome::Failure { .. } => SubmitState::Error { message: None },
    };
  }

  pub fn reset(&mut self) {
    *self = SubmitState::Idle;
  }
}

/// Applies a settled contact submission. Success empties the form; failure keeps
/// what was typed and shows the fields the server rejected.
pub fn settle_contact(values: &mut ContactDraft, errors: &mut ValidationErrors, state: &mut SubmitState, outcome: &Outcome) {
  match outcome {
    Outcome::Success { .. } => {
      *values = ContactDraft::default();
      *errors = ValidationErrors::new();
    },
    Outcome::Failure { fields, .. } => {
      if !fields.is_empty() {
        *errors = fields.clone();
      }
    },
  }
  state.finish(outcome);
}

/// Meeting variant of [`settle_contact`]. Success starts over at the first step but
/// keeps the detected timezone; failure moves to the first step holding an error.
pub fn settle_meeting(
  values: &mut MeetingDraft,
  step: &mut MeetingStep,
  errors: &mut ValidationErrors,
  state: &mut SubmitState,
  outcome: &Outcome,
) {
  match outcome {
    Outcome::Success { .. } => {
      let timezone = std::mem::take(&mut values.timezone);
      *values = MeetingDraft { timezone, ..Default::default() };
      *step = MeetingStep::About;
      *errors = ValidationErrors::new();
    },
    Outcome::Failure { fields, .. } => {
      if let Some(first) = MeetingStep::first_with_errors(fields) {
        *step = first;
      }
      if !fields.is_empty() {
        *errors = fields.clone();
      }
    },
  }
  state.finish(outcome);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
  Contact,
  Meeting,
}

impl Endpoint {
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::Contact => "/api/contact",
      Endpoint::Meeting => "/api/meeting",
    }
  }

  /// Name used for analytics and draft keys.
  pub fn form_name(&self) -> &'static str {
    match self {
      Endpoint::Contact => "contact",
      Endpoint::Meeting => "meeting",
    }
  }

  /// Decides the outcome from the raw HTTP status and body.
  ///
  /// The contact endpoint only counts as a success when the status is 2xx and the
  /// body carries `ok: true`. The meeting endpoint trusts the status and reads the
  /// `error` field on failure.
  pub fn interpret(&self, status: u16, body: &str) -> Outcome {
    let success_status = (200..300).contains(&status);
    let parsed = serde_json::from_str::<LeadResponse>(body).ok();

    let succeeded = match self {
      Endpoint::Contact => success_status && parsed.as_ref().is_some_and(|r| r.ok),
      Endpoint::Meeting => success_status,
    };

    match parsed {
      Some(resp) if succeeded => Outcome::Success { message: resp.message },
      None if succeeded => Outcome::Success { message: None },
      Some(resp) => Outcome::Failure {
        fields: resp.validation_errors(),
        message: resp.error.filter(|e| !e.trim().is_empty()),
      },
      None => Outcome::Failure { message: None, fields: ValidationErrors::new() },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use lead_types::{Field, FieldErrorKind};

  #[test]
  fn second_begin_is_refused_while_in_flight() {
    let mut state = SubmitState::default();
    assert!(state.begin());
    assert!(state.is_submitting());
    assert!(!state.begin(), "a second click must not start another POST");

    state.finish(&Outcome::Failure { message: None, fields: ValidationErrors::new() });
    assert!(!state.is_submitting());
    assert!(state.begin(), "retry is allowed once the first attempt settled");
  }

  #[test]
  fn contact_needs_ok_flag_in_body() {
    let ok = Endpoint::Contact.interpret(200, r#"{"ok": true, "message": "Thanks"}"#);
    assert_eq!(ok, Outcome::Success { message: Some("Thanks".into()) });

    assert!(!Endpoint::Contact.interpret(200, r#"{"ok": false}"#).is_success());
    assert!(!Endpoint::Contact.interpret(200, r#"{"message": "no flag"}"#).is_success());
    assert!(!Endpoint::Contact.interpret(200, "<html>").is_success());
  }

  #[test]
  fn server_failure_keeps_the_reason() {
    let outcome = Endpoint::Contact.interpret(500, r#"{"ok": false, "error": "database down", "code": 500}"#);
    assert_eq!(outcome, Outcome::Failure { message: Some("database down".into()), fields: ValidationErrors::new() });
    assert_eq!(outcome.label(), "failure");
  }

  #[test]
  fn meeting_trusts_the_status() {
    assert!(Endpoint::Meeting.interpret(201, "").is_success());
    let outcome = Endpoint::Meeting.interpret(429, r#"{"ok": false, "error": "Too many submissions"}"#);
    assert_eq!(outcome, Outcome::Failure { message: Some("Too many submissions".into()), fields: ValidationErrors::new() });
    assert_eq!(Endpoint::Meeting.interpret(502, "Bad Gateway"), Outcome::Failure { message: None, fields: ValidationErrors::new() });
  }

  #[test]
  fn server_side_field_errors_come_back() {
    let body = r#"{"ok": false, "error": "email is not a valid email address", "fields": [{"field": "email", "kind": "invalidEmail"}]}"#;
    match Endpoint::Contact.interpret(422, body) {
      Outcome::Failure { fields, .. } => assert_eq!(fields.get(Field::Email), Some(FieldErrorKind::InvalidEmail)),
      other => panic!("expected failure, got {other:?}"),
    }
  }

  fn filled_contact() -> ContactDraft {
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

  fn rejected_email() -> Outcome {
    let mut fields = ValidationErrors::new();
    fields.add(Field::Email, FieldErrorKind::InvalidEmail);
    Outcome::Failure { message: Some("email is not a valid email address".into()), fields }
  }

  #[test]
  fn contact_success_clears_the_form() {
    let mut values = filled_contact();
    let mut errors = ValidationErrors::new();
    let mut state = SubmitState::default();
    state.begin();

    settle_contact(&mut values, &mut errors, &mut state, &Outcome::Success { message: Some("Thanks".into()) });
    assert_eq!(values, ContactDraft::default());
    assert!(errors.is_empty());
    assert!(!state.is_submitting());
    assert_eq!(state, SubmitState::Success { message: Some("Thanks".into()) });
  }

  #[test]
  fn contact_failure_keeps_values_and_reenables() {
    let mut values = filled_contact();
    let mut errors = ValidationErrors::new();
    let mut state = SubmitState::default();
    state.begin();

    let outage = Outcome::Failure { message: Some("database down".into()), fields: ValidationErrors::new() };
    settle_contact(&mut values, &mut errors, &mut state, &outage);
    assert_eq!(values, filled_contact());
    assert!(errors.is_empty());
    assert_eq!(state, SubmitState::Error { message: Some("database down".into()) });
    assert!(state.begin(), "the control is usable again");

    settle_contact(&mut values, &mut errors, &mut state, &rejected_email());
    assert_eq!(values, filled_contact());
    assert_eq!(errors.get(Field::Email), Some(FieldErrorKind::InvalidEmail));
  }

  #[test]
  fn field_rejections_use_the_generic_banner() {
    let mut state = SubmitState::default();
    state.begin();
    state.finish(&rejected_email());
    assert_eq!(state, SubmitState::Error { message: None });
  }

  #[test]
  fn meeting_success_starts_over_with_the_same_timezone() {
    let mut values = MeetingDraft {
      first_name: "Grace".into(),
      demo_type: "quick".into(),
      timezone: "Europe/Istanbul".into(),
      ..Default::default()
    };
    let mut step = MeetingStep::Interests;
    let mut errors = ValidationErrors::new();
    let mut state = SubmitState::default();
    state.begin();

    settle_meeting(&mut values, &mut step, &mut errors, &mut state, &Outcome::Success { message: None });
    assert_eq!(values, MeetingDraft { timezone: "Europe/Istanbul".into(), ..Default::default() });
    assert_eq!(step, MeetingStep::About);
    assert!(!state.is_submitting());
  }

  #[test]
  fn meeting_failure_jumps_to_the_rejected_step() {
    let mut values = MeetingDraft { first_name: "Grace".into(), email: "grace@".into(), ..Default::default() };
    let mut step = MeetingStep::Interests;
    let mut errors = ValidationErrors::new();
    let mut state = SubmitState::default();
    state.begin();

    settle_meeting(&mut values, &mut step, &mut errors, &mut state, &rejected_email());
    assert_eq!(values.email, "grace@");
    assert_eq!(step, MeetingStep::About);
    assert_eq!(errors.get(Field::Email), Some(FieldErrorKind::InvalidEmail));
    assert!(!state.is_submitting());

    let mut step = MeetingStep::Interests;
    let outage = Outcome::Failure { message: None, fields: ValidationErrors::new() };
    settle_meeting(&mut values, &mut step, &mut errors, &mut state, &outage);
    assert_eq!(step, MeetingStep::Interests);
  }

  #[test]
  fn success_state_carries_message() {
    let mut state = SubmitState::default();
    state.begin();
    state.finish(&Outcome::Success { message: Some("done".into()) });
    assert_eq!(state, SubmitState::Success { message: Some("done".into()) });
    state.reset();
    assert_eq!(state, SubmitState::Idle);
  }
}
