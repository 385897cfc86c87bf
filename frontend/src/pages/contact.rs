use dioxus::prelude::*;

use crate::{
  components::contact_form::ContactForm,
  utils::i18n::{t, Locale, MessageId},
};

#[component]
pub fn Contact(locale: String) -> Element {
  static CSS: Asset = asset!("assets/pages.css");
  let locale = Locale::from_segment(&locale);
  let title = t(locale, MessageId::ContactTitle);

  rsx! {
    document::Stylesheet {href: CSS},
    document::Title { "Northwind | {title}" }
    div {
      class: "contact-page",
      section {
        class: "page-intro",
        h1 { "{title}" }
        p { {t(locale, MessageId::ContactSubtitle)} }
      }
      div {
        class: "split",
        ContactForm { locale }
        aside {
          class: "contact-aside",
          h2 { {t(locale, MessageId::ContactAsideTitle)} }
          p { {t(locale, MessageId::ContactAsideBody)} }
          dl {
            dt { {t(locale, MessageId::ContactEmailLabel)} }
            dd { a { href: "mailto:sales@northwind.example", "sales@northwind.example" } }
            dt { {t(locale, MessageId::ContactResponseLabel)} }
            dd { {t(locale, MessageId::ContactResponseValue)} }
          }
        }
      }
    }
  }
}
