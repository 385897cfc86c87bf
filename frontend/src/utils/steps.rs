use chrono::{DateTime, Utc};
use lead_types::{ClientContext, Field, MeetingDraft, Utm, ValidationErrors};

use super::i18n::MessageId;

/// The three pages of the demo request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingStep {
  #[default]
  About,
  Preferences,
  Interests,
}

impl MeetingStep {
  pub const ALL: [MeetingStep; 3] = [MeetingStep::About, MeetingStep::Preferences, MeetingStep::Interests];

  /// 1-based position, for the progress indicator.
  pub fn number(&self) -> usize {
    match self {
      MeetingStep::About => 1,
      MeetingStep::Preferences => 2,
      MeetingStep::Interests => 3,
    }
  }

  pub fn title(&self) -> MessageId {
    match self {
      MeetingStep::About => MessageId::FormStepAbout,
      MeetingStep::Preferences => MessageId::FormStepPreferences,
      MeetingStep::Interests => MessageId::FormStepInterests,
    }
  }

  pub fn is_last(&self) -> bool {
    *self == MeetingStep::Interests
  }

  pub fn fields(&self) -> &'static [Field] {
    match self {
      MeetingStep::About => &[
        Field::FirstName, Field::LastName, Field::Email, Field::Phone,
        Field::Company, Field::JobTitle, Field::Employees,
      ],
      MeetingStep::Preferences => &[Field::DemoType, Field::PreferredDate, Field::PreferredTime, Field::Timezone],
      MeetingStep::Interests => &[Field::Interests, Field::Message],
    }
  }

  /// Errors of this step only. Fields on later steps are not reported yet.
  pub fn check(&self, draft: &MeetingDraft) -> ValidationErrors {
    let mut errors = match draft.into_request(Utm::default(), placeholder_context()) {
      Ok(_) => ValidationErrors::new(),
      Err(errors) => errors,
    };
    errors.retain_fields(self.fields());
    errors
  }

  /// Moves forward when the current step is valid, otherwise hands back its errors.
  pub fn next(&self, draft: &MeetingDraft) -> Result<MeetingStep, ValidationErrors> {
    let errors = self.check(draft);
    if !errors.is_empty() {
      return Err(errors);
    }
    Ok(match self {
      MeetingStep::About => MeetingStep::Preferences,
      MeetingStep::Preferences | MeetingStep::Interests => MeetingStep::Interests,
    })
  }

  pub fn back(&self) -> MeetingStep {
    match self {
      MeetingStep::About | MeetingStep::Preferences => MeetingStep::About,
      MeetingStep::Interests => MeetingStep::Preferences,
    }
  }

  /// Step holding the first of `errors`, used to jump back after a failed final submit.
  pub fn first_with_errors(errors: &ValidationErrors) -> Option<MeetingStep> {
    MeetingStep::ALL
      .into_iter()
      .find(|step| errors.fields().any(|f| step.fields().contains(&f)))
  }
}

fn placeholder_context() -> ClientContext {
  ClientContext {
    page_url: String::new(),
    referrer: String::new(),
    user_agent: String::new(),
    timestamp: DateTime::<Utc>::default(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use lead_types::FieldErrorKind;

  fn about_done() -> MeetingDraft {
    MeetingDraft {
      first_name: "Grace".into(),
      last_name: "Hopper".into(),
      email: "grace@example.com".into(),
      company: "Navy".into(),
      employees: "1000+".into(),
      ..Default::default()
    }
  }

  #[test]
  fn first_step_blocks_on_its_own_fields_only() {
    let draft = MeetingDraft { first_name: "Grace".into(), ..Default::default() };
    let errors = MeetingStep::About.next(&draft).unwrap_err();
    assert_eq!(errors.get(Field::LastName), Some(FieldErrorKind::Required));
    assert_eq!(errors.get(Field::DemoType), None, "later steps stay quiet");
    assert_eq!(errors.get(Field::Timezone), None);
  }

  #[test]
  fn advances_through_the_steps() {
    let mut draft = about_done();
    assert_eq!(MeetingStep::About.next(&draft), Ok(MeetingStep::Preferences));

    assert!(MeetingStep::Preferences.next(&draft).is_err());
    draft.demo_type = "standard".into();
    draft.timezone = "Europe/Istanbul".into();
    draft.preferred_date = "2025-13-01".into();
    assert_eq!(
      MeetingStep::Preferences.next(&draft).unwrap_err().get(Field::PreferredDate),
      Some(FieldErrorKind::InvalidDate)
    );
    draft.preferred_date = "2025-03-14".into();
    assert_eq!(MeetingStep::Preferences.next(&draft), Ok(MeetingStep::Interests));
    assert!(MeetingStep::Interests.check(&draft).is_empty());
  }

  #[test]
  fn back_never_validates() {
    assert_eq!(MeetingStep::Interests.back(), MeetingStep::Preferences);
    assert_eq!(MeetingStep::Preferences.back(), MeetingStep::About);
    assert_eq!(MeetingStep::About.back(), MeetingStep::About);
  }

  #[test]
  fn failed_submit_returns_to_the_offending_step() {
    let mut errors = ValidationErrors::new();
    errors.add(Field::Timezone, FieldErrorKind::Required);
    assert_eq!(MeetingStep::first_with_errors(&errors), Some(MeetingStep::Preferences));
    errors.add(Field::Email, FieldErrorKind::InvalidEmail);
    assert_eq!(MeetingStep::first_with_errors(&errors), Some(MeetingStep::About));
    assert_eq!(MeetingStep::first_with_errors(&ValidationErrors::new()), None);
  }
}
