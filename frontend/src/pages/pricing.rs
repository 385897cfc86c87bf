use dioxus::prelude::*;

use crate::{
  components::{accordion::FaqAccordion, pricing::{ComparisonTable, PricingTiers}},
  content::PRICING_FAQS,
  utils::i18n::{t, Locale, MessageId},
};

#[component]
pub fn Pricing(locale: String) -> Element {
  static CSS: Asset = asset!("assets/pages.css");
  let locale = Locale::from_segment(&locale);
  let title = t(locale, MessageId::PricingTitle);

  rsx! {
    document::Stylesheet {href: CSS},
    document::Title { "Northwind | {title}" }
    div {
      class: "pricing-page",
      section {
        class: "page-intro",
        h1 { "{title}" }
        p { {t(locale, MessageId::PricingSubtitle)} }
      }
      PricingTiers { locale }
      ComparisonTable { locale }
      FaqAccordion { locale, items: PRICING_FAQS.as_slice() }
    }
  }
}
