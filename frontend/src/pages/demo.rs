use dioxus::prelude::*;

use crate::{
  components::meeting_form::MeetingForm,
  content::JOURNEY,
  utils::i18n::{t, Locale, MessageId},
};

#[component]
pub fn Demo(locale: String) -> Element {
  static CSS: Asset = asset!("assets/pages.css");
  let locale = Locale::from_segment(&locale);
  let title = t(locale, MessageId::DemoTitle);

  rsx! {
    document::Stylesheet {href: CSS},
    document::Title { "Northwind | {title}" }
    div {
      class: "demo-page",
      section {
        class: "page-intro",
        h1 { "{title}" }
        p { {t(locale, MessageId::DemoSubtitle)} }
      }
      div {
        class: "split",
        MeetingForm { locale }
        aside {
          class: "journey",
          h2 { {t(locale, MessageId::DemoJourneyTitle)} }
          ol {
            for step in JOURNEY.iter() {
              li {
                class: "journey-step",
                h3 { {step.title.get(locale)} }
                p { {step.body.get(locale)} }
              }
            }
          }
        }
      }
    }
  }
}
