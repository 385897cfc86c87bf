use dioxus::prelude::*;

use crate::{
  content::{LegalDoc, Page},
  utils::i18n::{t, Locale, MessageId},
  Route,
};

#[component]
pub fn Legal(locale: String, doc: String) -> Element {
  static CSS: Asset = asset!("assets/pages.css");
  let locale = Locale::from_segment(&locale);

  let Some(doc) = LegalDoc::from_slug(&doc) else {
    return rsx! {
      section {
        class: "not-found",
        h1 { {t(locale, MessageId::NotFoundTitle)} }
        p { {t(locale, MessageId::NotFoundBody)} }
        Link { class: "cta-button", to: Route::page(Page::Home, locale), {t(locale, MessageId::NotFoundHome)} }
      }
    };
  };
  let title = doc.title().get(locale);
  let updated = doc.updated();

  rsx! {
    document::Stylesheet {href: CSS},
    document::Title { "Northwind | {title}" }
    article {
      class: "legal-page",
      h1 { "{title}" }
      p { class: "legal-updated", {t(locale, MessageId::LegalUpdated)} " " time { datetime: updated, "{updated}" } }
      for section in doc.sections().iter() {
        section {
          h2 { {section.heading.get(locale)} }
          p { {section.body.get(locale)} }
        }
      }
    }
  }
}
