use dioxus::prelude::*;

use crate::{
  content::Faq,
  utils::i18n::{t, Locale, MessageId},
};

/// FAQ list on native `details`/`summary`, so it opens without script and stays keyboard accessible.
#[component]
pub fn FaqAccordion(locale: Locale, items: &'static [Faq]) -> Element {
  rsx! {
    section {
      class: "faq-accordion",
      h2 { class: "section-title", {t(locale, MessageId::FaqTitle)} }
      for faq in items {
        details {
          summary { {faq.question.get(locale)} }
          div {
            class: "acc-param-value",
            {faq.answer.get(locale)}
          }
        }
      }
    }
  }
}
