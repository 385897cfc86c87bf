use dioxus::{logger::tracing::{error, info, warn}, prelude::*};
use lead_types::{ContactDraft, Employees, Field, Industry, Utm, ValidationErrors};

use crate::utils::{
  analytics::{self, LeadEvent},
  browser, draft,
  i18n::{field_error_message, t, Locale, MessageId},
  server,
  submission::{settle_contact, Endpoint, Outcome, SubmitState},
};
use super::fields::{edit_draft, CheckboxField, SelectField, TextArea, TextField};

pub fn employee_options() -> Vec<(&'static str, &'static str)> {
  Employees::ALL.iter().map(|e| (e.as_str(), e.as_str())).collect()
}

fn industry_label(industry: Industry) -> MessageId {
  match industry {
    Industry::Technology => MessageId::IndustryTechnology,
    Industry::Finance => MessageId::IndustryFinance,
    Industry::Retail => MessageId::IndustryRetail,
    Industry::Manufacturing => MessageId::IndustryManufacturing,
    Industry::Healthcare => MessageId::IndustryHealthcare,
    Industry::Education => MessageId::IndustryEducation,
    Industry::Other => MessageId::IndustryOther,
  }
}

/// Banner shown above a form after a failed submission.
#[component]
pub fn ErrorBanner(locale: Locale, #[props(!optional)] message: Option<String>) -> Element {
  let text = message.unwrap_or_else(|| t(locale, MessageId::FormErrorGeneric).to_string());
  rsx! {
    div {
      class: "form-banner form-banner-error",
      role: "alert",
      strong { {t(locale, MessageId::FormErrorTitle)} }
      p { "{text}" }
    }
  }
}

#[component]
pub fn SuccessPanel(locale: Locale, #[props(!optional)] message: Option<String>, on_reset: EventHandler<()>) -> Element {
  let body = message.unwrap_or_else(|| t(locale, MessageId::FormSuccessBody).to_string());
  rsx! {
    div {
      class: "form-success",
      role: "status",
      h3 { {t(locale, MessageId::FormSuccessTitle)} }
      p { "{body}" }
      button {
        r#type: "button",
        class: "button",
        onclick: move |_| on_reset.call(()),
        {t(locale, MessageId::FormSendAnother)}
      }
    }
  }
}

#[component]
pub fn ContactForm(locale: Locale) -> Element {
  let mut values = use_signal(ContactDraft::default);
  let mut errors = use_signal(ValidationErrors::new);
  let mut state = use_signal(SubmitState::default);
  let mut restored = use_signal(|| false);

  use_effect(move || {
    if let Some(saved) = draft::load::<ContactDraft>(Endpoint::Contact) {
      if !saved.is_empty() {
        values.set(saved);
        restored.set(true);
      }
    }
  });

  let onsubmit = move |evt: FormEvent| {
    evt.prevent_default();
    if state.read().is_submitting() {
      return;
    }

    let utm = Utm::from_query(&browser::location_search());
    let lead = match values.read().into_lead(utm) {
      Ok(lead) => lead,
      Err(invalid) => {
        info!("contact form blocked by {} invalid field(s)", invalid.len());
        errors.set(invalid);
        return;
      }
    };

    if !state.write().begin() {
      return;
    }
    errors.set(ValidationErrors::new());

    spawn(async move {
      let outcome = match server::submit_contact(&lead).await {
        Ok(outcome) => outcome,
        Err(e) => {
          error!("contact submission failed: {}", e);
          Outcome::Failure { message: None, fields: ValidationErrors::new() }
        }
      };
      analytics::push(&LeadEvent::new(Endpoint::Contact, &outcome, locale));

      settle_contact(&mut values.write(), &mut errors.write(), &mut state.write(), &outcome);
      if outcome.is_success() {
        restored.set(false);
        if let Err(e) = draft::clear(Endpoint::Contact) {
          warn!("contact draft not cleared: {}", e);
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
  let submitting = current.is_submitting();
  let industry_options: Vec<(&'static str, &'static str)> = Industry::ALL
    .iter()
    .map(|i| (i.as_str(), t(locale, industry_label(*i))))
    .collect();

  rsx! {
    form {
      id: "contact-form",
      class: "lead-form",
      novalidate: true,
      onsubmit,
      if restored() {
        p { class: "form-note", {t(locale, MessageId::FormDraftRestored)} }
      }
      if let SubmitState::Error { message } = &current {
        ErrorBanner { locale, message: message.clone() }
      }
      TextField {
        id: "name", label: t(locale, MessageId::FormName), locale, value: v.name,
        autocomplete: "name", required: true, error: err(Field::Name),
        oninput: move |val| edit_draft(values, errors, Endpoint::Contact, Field::Name, move |d| d.name = val),
      }
      TextField {
        id: "email", label: t(locale, MessageId::FormEmail), locale, value: v.email, kind: "email",
        autocomplete: "email", required: true, error: err(Field::Email),
        oninput: move |val| edit_draft(values, errors, Endpoint::Contact, Field::Email, move |d| d.email = val),
      }
      TextField {
        id: "company", label: t(locale, MessageId::FormCompany), locale, value: v.company,
        autocomplete: "organization", required: true, error: err(Field::Company),
        oninput: move |val| edit_draft(values, errors, Endpoint::Contact, Field::Company, move |d| d.company = val),
      }
      TextField {
        id: "phone", label: t(locale, MessageId::FormPhone), locale, value: v.phone, kind: "tel",
        autocomplete: "tel", error: err(Field::Phone),
        oninput: move |val| edit_draft(values, errors, Endpoint::Contact, Field::Phone, move |d| d.phone = val),
      }
      SelectField {
        id: "employees", label: t(locale, MessageId::FormEmployees), locale, value: v.employees,
        options: employee_options(), required: true, error: err(Field::Employees),
        onchange: move |val| edit_draft(values, errors, Endpoint::Contact, Field::Employees, move |d| d.employees = val),
      }
      TextField {
        id: "jobTitle", label: t(locale, MessageId::FormJobTitle), locale, value: v.job_title,
        autocomplete: "organization-title", error: err(Field::JobTitle),
        oninput: move |val| edit_draft(values, errors, Endpoint::Contact, Field::JobTitle, move |d| d.job_title = val),
      }
      SelectField {
        id: "industry", label: t(locale, MessageId::FormIndustry), locale, value: v.industry.clone(),
        options: industry_options, error: err(Field::Industry),
        onchange: move |val| edit_draft(values, errors, Endpoint::Contact, Field::Industry, move |d| d.industry = val),
      }
      if v.industry == Industry::Other.as_str() {
        TextField {
          id: "industryOther", label: t(locale, MessageId::FormIndustryOther), locale, value: v.industry_other,
          required: true, error: err(Field::IndustryOther),
          oninput: move |val| edit_draft(values, errors, Endpoint::Contact, Field::IndustryOther, move |d| d.industry_other = val),
        }
      }
      TextArea {
        id: "message", label: t(locale, MessageId::FormMessage), locale, value: v.message,
        placeholder: t(locale, MessageId::FormMessagePlaceholder), required: true, error: err(Field::Message),
        oninput: move |val| edit_draft(values, errors, Endpoint::Contact, Field::Message, move |d| d.message = val),
      }
      CheckboxField {
        id: "agree", label: t(locale, MessageId::FormAgree), checked: v.agree, error: err(Field::Agree),
        onchange: move |checked| edit_draft(values, errors, Endpoint::Contact, Field::Agree, move |d| d.agree = checked),
      }
      div {
        class: "form-actions",
        button {
          r#type: "submit",
          class: "button button-primary",
          disabled: submitting,
          aria_busy: submitting,
          if submitting { {t(locale, MessageId::FormSubmitting)} } else { {t(locale, MessageId::FormSubmit)} }
        }
      }
    }
  }
}
