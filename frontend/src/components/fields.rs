use dioxus::{logger::tracing::warn, prelude::*};
use lead_types::{Field, ValidationErrors};
use serde::Serialize;

use crate::utils::{
  draft,
  i18n::{t, Locale, MessageId},
  submission::Endpoint,
};

/// Applies one edit to a form's values. The edited field loses its error and the
/// draft is saved so a reload does not lose what was typed.
pub fn edit_draft<T: Serialize + 'static>(
  mut values: Signal<T>,
  mut errors: Signal<ValidationErrors>,
  endpoint: Endpoint,
  field: Field,
  apply: impl FnOnce(&mut T),
) {
  apply(&mut *values.write());
  errors.write().remove(field);
  if let Err(e) = draft::save(endpoint, &*values.peek()) {
    warn!("{} draft not saved: {}", endpoint.form_name(), e);
  }
}

/// Label row shared by every input: the field name plus a marker for optional ones.
#[component]
fn FieldLabel(id: &'static str, label: &'static str, locale: Locale, required: bool) -> Element {
  rsx! {
    label {
      class: "form-label",
      r#for: id,
      {label}
      if !required {
        span { class: "form-optional", " (", {t(locale, MessageId::FormOptional)}, ")" }
      }
    }
  }
}

#[component]
fn ErrorText(id: &'static str, #[props(!optional)] error: Option<String>) -> Element {
  rsx! {
    if let Some(message) = error {
      p { id: "{id}-error", class: "form-error", role: "alert", "{message}" }
    }
  }
}

#[component]
pub fn TextField(
  id: &'static str,
  label: &'static str,
  locale: Locale,
  value: String,
  #[props(default = "text")] kind: &'static str,
  #[props(default)] autocomplete: &'static str,
  #[props(default)] required: bool,
  #[props(!optional)] error: Option<String>,
  oninput: EventHandler<String>,
) -> Element {
  let invalid = error.is_some();
  rsx! {
    div {
      class: if invalid { "form-group form-group-invalid" } else { "form-group" },
      FieldLabel { id, label, locale, required }
      input {
        class: "form-input",
        id,
        name: id,
        r#type: kind,
        value,
        required,
        autocomplete,
        aria_invalid: invalid,
        oninput: move |evt| oninput.call(evt.value()),
      }
      ErrorText { id, error }
    }
  }
}

#[component]
pub fn TextArea(
  id: &'static str,
  label: &'static str,
  locale: Locale,
  value: String,
  #[props(default)] placeholder: &'static str,
  #[props(default)] required: bool,
  #[props(!optional)] error: Option<String>,
  oninput: EventHandler<String>,
) -> Element {
  let invalid = error.is_some();
  rsx! {
    div {
      class: if invalid { "form-group form-group-invalid" } else { "form-group" },
      FieldLabel { id, label, locale, required }
      textarea {
        class: "form-input form-textarea",
        id,
        name: id,
        rows: "5",
        value,
        placeholder,
        required,
        aria_invalid: invalid,
        oninput: move |evt| oninput.call(evt.value()),
      }
      ErrorText { id, error }
    }
  }
}

/// A `select` over `(value, label)` pairs with a leading empty choice.
#[component]
pub fn SelectField(
  id: &'static str,
  label: &'static str,
  locale: Locale,
  value: String,
  options: Vec<(&'static str, &'static str)>,
  #[props(default)] required: bool,
  #[props(!optional)] error: Option<String>,
  onchange: EventHandler<String>,
) -> Element {
  let invalid = error.is_some();
  rsx! {
    div {
      class: if invalid { "form-group form-group-invalid" } else { "form-group" },
      FieldLabel { id, label, locale, required }
      select {
        class: "form-input",
        id,
        name: id,
        required,
        aria_invalid: invalid,
        onchange: move |evt| onchange.call(evt.value()),
        option { value: "", selected: value.is_empty(), {t(locale, MessageId::FormSelect)} }
        for (option_value, option_label) in options {
          option {
            key: "{option_value}",
            value: option_value,
            selected: value == option_value,
            {option_label}
          }
        }
      }
      ErrorText { id, error }
    }
  }
}

#[component]
pub fn CheckboxField(
  id: &'static str,
  label: &'static str,
  checked: bool,
  #[props(!optional)] error: Option<String>,
  onchange: EventHandler<bool>,
) -> Element {
  let invalid = error.is_some();
  rsx! {
    div {
      class: if invalid { "form-check form-group-invalid" } else { "form-check" },
      input {
        id,
        name: id,
        r#type: "checkbox",
        checked,
        aria_invalid: invalid,
        onchange: move |evt| onchange.call(evt.checked()),
      }
      label { r#for: id, {label} }
      ErrorText { id, error }
    }
  }
}
