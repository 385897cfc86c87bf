use chrono::Utc;
use dioxus::{logger::tracing::{error, info, warn}, prelude::*};
use lead_types::{ClientContext, DemoType, Field, Interest, MeetingDraft, Utm, ValidationErrors};

use crate::utils::{
  analytics::{self, LeadEvent},
  browser, draft,
  i18n::{field_error_message, step_of, t, Locale, MessageId},
  server,
  steps::MeetingStep,
  submission::{settle_meeting, Endpoint, Outcome, SubmitState},
};
use super::{
  contact_form::{employee_options, ErrorBanner, SuccessPanel},
  fields::{edit_draft, SelectField, TextArea, TextField},
};

fn demo_label(demo: DemoType) -> MessageId {
  match demo {
    DemoType::Quick => MessageId::DemoQuick,
    DemoType::Standard => MessageId::DemoStandard,
    DemoType::Comprehensive => MessageId::DemoComprehensive,
  }
}

fn interest_label(interest: Interest) -> MessageId {
  match interest {
    Interest::Analytics => MessageId::InterestAnalytics,
    Interest::Automation => MessageId::InterestAutomation,
    Interest::Integrations => MessageId::InterestIntegrations,
    Interest::Security => MessageId::InterestSecurity,
    Interest::Reporting => MessageId::InterestReporting,
    Interest::Support => MessageId::InterestSupport,
  }
}

fn step_class(step: MeetingStep, at: MeetingStep) -> &'static str {
  if step == at {
    "form-step form-step-current"
  } else if step.number() < at.number() {
    "form-step form-step-done"
  } else {
    "form-step"
  }
}

fn client_context() -> ClientContext {
  ClientContext {
    page_url: browser::location_href(),
    referrer: browser::referrer(),
    user_agent: browser::user_agent(),
    timestamp: Utc::now(),
  }
}

/// Three-step demo request. Each step validates its own inputs before moving on.
#[component]
pub fn MeetingForm(locale: Locale) -> Element {
  let mut values = use_signal(MeetingDraft::default);
  let mut errors = use_signal(ValidationErrors::new);
  let mut state = use_signal(SubmitState::default);
  let mut step = use_signal(MeetingStep::default);

  use_effect(move || {
    let mut restored = draft::load::<MeetingDraft>(Endpoint::Meeting).unwrap_or_default();
    if restored.timezone.trim().is_empty() {
      restored.timezone = browser::browser_timezone().unwrap_or_default();
    }
    values.set(restored);
  });

  let mut go_next = move || {
    match step().next(&values.read()) {
      Ok(next) => {
        errors.set(ValidationErrors::new());
        step.set(next);
      },
      Err(invalid) => errors.set(invalid),
    }
  };

  let onsubmit = move |evt: FormEvent| {
    evt.prevent_default();
    if !step().is_last() {
      go_next();
      return;
    }
    if state.read().is_submitting() {
      return;
    }

    let utm = Utm::from_query(&browser::location_search());
    let request = match values.read().into_request(utm, client_context()) {
      Ok(request) => request,
      Err(invalid) => {
        info!("meeting form blocked by {} invalid field(s)", invalid.len());
        if let Some(first) = MeetingStep::first_with_errors(&invalid) {
          step.set(first);
        }
        errors.set(invalid);
        return;
      }
    };

    if !state.write().begin() {
      return;
    }
    errors.set(ValidationErrors::new());

    spawn(async move {
      let outcome = match server::submit_meeting(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
          error!("meeting submission failed: {}", e);
          Outcome::Failure { message: None, fields: ValidationErrors::new() }
        }
      };
      analytics::push(&LeadEvent::new(Endpoint::Meeting, &outcome, locale));

      settle_meeting(&mut values.write(), &mut step.write(), &mut errors.write(), &mut state.write(), &outcome);
      if outcome.is_success() {
        if let Err(e) = draft::clear(Endpoint::Meeting) {
          warn!("meeting draft not cleared: {}", e);
        }
      }
    });
  };

  let current = state.read().clone();
  if let SubmitState::Success { message } = &current {
    return rsx! {
      SuccessPanel { locale, message: message.clone(), on_reset: move |_| state.write().reset() }
    };
  }

  let err = move |field: Field| errors.read().get(field).map(|kind| field_error_message(locale, kind));
  let v = values.read().clone();
  let at = step();
  let submitting = current.is_submitting();
  let demo_options: Vec<(&'static str, &'static str)> = DemoType::ALL
    .iter()
    .map(|d| (d.as_str(), t(locale, demo_label(*d))))
    .collect();

  rsx! {
    form {
      id: "meeting-form",
      class: "lead-form lead-form-steps",
      novalidate: true,
      onsubmit,
      ol {
        class: "form-steps",
        for s in MeetingStep::ALL {
          li {
            class: step_class(s, at),
            aria_current: if s == at { "step" } else { "false" },
            {t(locale, s.title())}
          }
        }
      }
      p { class: "form-progress", {step_of(locale, at.number(), MeetingStep::ALL.len())} }
      if let SubmitState::Error { message } = &current {
        ErrorBanner { locale, message: message.clone() }
      }

      {match at {
        MeetingStep::About => rsx! {
          div {
            class: "form-row",
            TextField {
              id: "firstName", label: t(locale, MessageId::FormFirstName), locale, value: v.first_name,
              autocomplete: "given-name", required: true, error: err(Field::FirstName),
              oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::FirstName, move |d| d.first_name = val),
            }
            TextField {
              id: "lastName", label: t(locale, MessageId::FormLastName), locale, value: v.last_name,
              autocomplete: "family-name", required: true, error: err(Field::LastName),
              oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::LastName, move |d| d.last_name = val),
            }
          }
          TextField {
            id: "email", label: t(locale, MessageId::FormEmail), locale, value: v.email, kind: "email",
            autocomplete: "email", required: true, error: err(Field::Email),
            oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::Email, move |d| d.email = val),
          }
          TextField {
            id: "phone", label: t(locale, MessageId::FormPhone), locale, value: v.phone, kind: "tel",
            autocomplete: "tel", error: err(Field::Phone),
            oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::Phone, move |d| d.phone = val),
          }
          TextField {
            id: "company", label: t(locale, MessageId::FormCompany), locale, value: v.company,
            autocomplete: "organization", required: true, error: err(Field::Company),
            oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::Company, move |d| d.company = val),
          }
          TextField {
            id: "jobTitle", label: t(locale, MessageId::FormJobTitle), locale, value: v.job_title,
            autocomplete: "organization-title", error: err(Field::JobTitle),
            oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::JobTitle, move |d| d.job_title = val),
          }
          SelectField {
            id: "employees", label: t(locale, MessageId::FormEmployees), locale, value: v.employees,
            options: employee_options(), required: true, error: err(Field::Employees),
            onchange: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::Employees, move |d| d.employees = val),
          }
        },
        MeetingStep::Preferences => rsx! {
          SelectField {
            id: "demoType", label: t(locale, MessageId::FormDemoType), locale, value: v.demo_type,
            options: demo_options, required: true, error: err(Field::DemoType),
            onchange: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::DemoType, move |d| d.demo_type = val),
          }
          div {
            class: "form-row",
            TextField {
              id: "preferredDate", label: t(locale, MessageId::FormPreferredDate), locale, value: v.preferred_date,
              kind: "date", error: err(Field::PreferredDate),
              oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::PreferredDate, move |d| d.preferred_date = val),
            }
            TextField {
              id: "preferredTime", label: t(locale, MessageId::FormPreferredTime), locale, value: v.preferred_time,
              kind: "time", error: err(Field::PreferredTime),
              oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::PreferredTime, move |d| d.preferred_time = val),
            }
          }
          TextField {
            id: "timezone", label: t(locale, MessageId::FormTimezone), locale, value: v.timezone,
            required: true, error: err(Field::Timezone),
            oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::Timezone, move |d| d.timezone = val),
          }
        },
        MeetingStep::Interests => rsx! {
          fieldset {
            class: "form-group form-interests",
            legend { class: "form-label", {t(locale, MessageId::FormInterests)} }
            for interest in Interest::ALL {
              label {
                key: "{interest}",
                class: "form-check",
                input {
                  r#type: "checkbox",
                  name: "interests",
                  value: interest.as_str(),
                  checked: v.interests.contains(&interest),
                  onchange: move |_| edit_draft(values, errors, Endpoint::Meeting, Field::Interests, move |d| d.toggle_interest(interest)),
                }
                {t(locale, interest_label(interest))}
              }
            }
          }
          TextArea {
            id: "message", label: t(locale, MessageId::FormMessage), locale, value: v.message,
            placeholder: t(locale, MessageId::FormMessagePlaceholder), error: err(Field::Message),
            oninput: move |val| edit_draft(values, errors, Endpoint::Meeting, Field::Message, move |d| d.message = val),
          }
        },
      }}

      div {
        class: "form-actions",
        if at != MeetingStep::About {
          button {
            r#type: "button",
            class: "button",
            disabled: submitting,
            onclick: move |_| {
              errors.set(ValidationErrors::new());
              step.set(at.back());
            },
            {t(locale, MessageId::FormBack)}
          }
        }
        if at.is_last() {
          button {
            r#type: "submit",
            class: "button button-primary",
            disabled: submitting,
            aria_busy: submitting,
            if submitting { {t(locale, MessageId::FormSubmitting)} } else { {t(locale, MessageId::FormRequestDemo)} }
          }
        } else {
          button {
            r#type: "button",
            class: "button button-primary",
            onclick: move |_| go_next(),
            {t(locale, MessageId::FormNext)}
          }
        }
      }
    }
  }
}
