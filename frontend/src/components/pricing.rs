use dioxus::prelude::*;

use crate::{
  content::{monthly_price, Billing, Cell, Page, COMPARISON, TIERS, YEARLY_DISCOUNT_PERCENT},
  utils::i18n::{t, Locale, MessageId},
  Route,
};

#[component]
pub fn PricingTiers(locale: Locale) -> Element {
  let mut billing = use_signal(|| Billing::Monthly);
  let yearly = billing() == Billing::Yearly;
  let save = t(locale, MessageId::PricingYearlySave).replace("{percent}", &YEARLY_DISCOUNT_PERCENT.to_string());

  rsx! {
    div {
      class: "billing-toggle",
      role: "group",
      button {
        class: if yearly { "billing-option" } else { "billing-option billing-option-active" },
        aria_pressed: !yearly,
        onclick: move |_| billing.set(Billing::Monthly),
        {t(locale, MessageId::PricingMonthly)}
      }
      button {
        class: if yearly { "billing-option billing-option-active" } else { "billing-option" },
        aria_pressed: yearly,
        onclick: move |_| billing.set(Billing::Yearly),
        {t(locale, MessageId::PricingYearly)}
        span { class: "billing-save", "{save}" }
      }
    }
    div {
      class: "tier-grid",
      for tier in TIERS.iter() {
        article {
          class: if tier.highlighted { "tier-card tier-card-highlighted" } else { "tier-card" },
          if tier.highlighted {
            span { class: "tier-badge", {t(locale, MessageId::PricingMostPopular)} }
          }
          h3 { class: "tier-name", {tier.name} }
          p { class: "tier-tagline", {tier.tagline.get(locale)} }
          {match tier.list_price {
            Some(list) => rsx! {
              p {
                class: "tier-price",
                span { class: "tier-amount", {format!("€{}", monthly_price(list, billing()))} }
                span { class: "tier-period", {t(locale, MessageId::PricingPerMonth)} }
              }
              if yearly {
                p { class: "tier-billed", {t(locale, MessageId::PricingBilledYearly)} }
              }
            },
            None => rsx! {
              p { class: "tier-price", span { class: "tier-amount", {t(locale, MessageId::PricingCustom)} } }
            },
          }}
          ul {
            class: "tier-features",
            for feature in tier.features.iter() {
              li { {feature.get(locale)} }
            }
          }
          if tier.list_price.is_some() {
            Link {
              class: "button button-primary",
              to: Route::page(Page::Demo, locale),
              {t(locale, MessageId::PricingChoose)}
            }
          } else {
            Link {
              class: "button",
              to: Route::page(Page::Contact, locale),
              {t(locale, MessageId::PricingContactSales)}
            }
          }
        }
      }
    }
  }
}

#[component]
pub fn ComparisonTable(locale: Locale) -> Element {
  rsx! {
    section {
      class: "comparison",
      h2 { class: "section-title", {t(locale, MessageId::PricingCompareTitle)} }
      div {
        class: "table-scroll",
        table {
          thead {
            tr {
              th { scope: "col", {t(locale, MessageId::PricingFeatureColumn)} }
              for tier in TIERS.iter() {
                th { scope: "col", {tier.name} }
              }
            }
          }
          tbody {
            for row in COMPARISON.iter() {
              tr {
                th { scope: "row", {row.feature.get(locale)} }
                for cell in row.cells {
                  td {
                    {match cell {
                      Cell::Yes => rsx! { span { class: "cell-yes", aria_label: "yes", "✓" } },
                      Cell::No => rsx! { span { class: "cell-no", aria_label: "no", "–" } },
                      Cell::Text(text) => rsx! { {text.get(locale)} },
                    }}
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
