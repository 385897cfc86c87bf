use dioxus::prelude::*;

use crate::{
  components::{accordion::FaqAccordion, carousel::{FeatureRotator, TestimonialCarousel}},
  content::{Page, COMPANIES, HOME_FAQS, MILESTONES, STATS},
  utils::i18n::{t, Locale, MessageId},
  Route,
};

#[component]
pub fn Home(locale: String) -> Element {
  static CSS: Asset = asset!("assets/pages.css");
  let locale = Locale::from_segment(&locale);
  let title = t(locale, MessageId::HeroTitle);

  rsx! {
    document::Stylesheet {href: CSS},
    document::Title { "Northwind | {title}" }
    div {
      class: "home-page",
      section {
        class : "hero",
        span { class: "hero-eyebrow", {t(locale, MessageId::HeroEyebrow)} }
        h1 { "{title}" },
        p { {t(locale, MessageId::HeroSubtitle)} },
        div {
          class: "hero-actions",
          Link {
            class: "cta-button",
            to: Route::page(Page::Demo, locale),
            {t(locale, MessageId::HeroPrimaryCta)}
          }
          Link {
            class: "cta-button cta-secondary",
            to: Route::page(Page::Pricing, locale),
            {t(locale, MessageId::HeroSecondaryCta)}
          }
        }
      },
      section {
        class: "logos",
        p { class: "logos-title", {t(locale, MessageId::TrustedBy)} }
        ul {
          class: "logo-row",
          for company in COMPANIES {
            li { class: "logo-item", {company} }
          }
        }
      }
      FeatureRotator { locale }
      section {
        class: "stats",
        h2 { class: "section-title", {t(locale, MessageId::StatsTitle)} }
        dl {
          class: "stat-grid",
          for stat in STATS.iter() {
            div {
              class: "stat",
              dt { class: "stat-value", {stat.value} }
              dd { class: "stat-label", {stat.label.get(locale)} }
            }
          }
        }
      }
      TestimonialCarousel { locale }
      section {
        class: "milestones",
        h2 { class: "section-title", {t(locale, MessageId::MilestonesTitle)} }
        ol {
          class: "timeline",
          for milestone in MILESTONES.iter() {
            li {
              class: "timeline-item",
              span { class: "timeline-year", {milestone.year} }
              span { class: "timeline-title", {milestone.title.get(locale)} }
            }
          }
        }
      }
      FaqAccordion { locale, items: HOME_FAQS.as_slice() }
      section {
        class: "cta-band",
        h2 { {t(locale, MessageId::CtaTitle)} }
        p { {t(locale, MessageId::CtaBody)} }
        Link {
          class: "cta-button",
          to: Route::page(Page::Demo, locale),
          {t(locale, MessageId::NavBookDemo)}
        }
      }
    }
  }
}
