use std::{rc::Rc, time::Duration};
use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
  content::{FEATURES, TESTIMONIALS},
  utils::{
    browser::{self, ListenerGuard},
    i18n::{t, Locale, MessageId},
    rotator::Rotator,
  },
};

/// Drives an auto-rotating widget: honours reduced motion, pauses while the
/// tab is hidden and owns the one timer, which stops when the component unmounts.
pub fn use_rotation(mut rotator: Signal<Rotator>) {
  use_effect(move || rotator.write().set_reduced_motion(browser::prefers_reduced_motion()));

  use_hook(move || {
    let guard = ListenerGuard::on_document("visibilitychange", move |_| {
      rotator.write().set_hidden(browser::document_hidden());
    });
    match guard {
      Ok(guard) => Some(Rc::new(guard)),
      Err(e) => {
        warn!("visibility listener not installed: {}", e);
        None
      }
    }
  });

  use_future(move || async move {
    loop {
      let interval = rotator.peek().interval();
      async_std::task::sleep(interval).await;
      if !rotator.peek().animates() {
        break;
      }
      if rotator.peek().is_running() {
        rotator.write().tick();
      }
    }
  });
}

#[component]
pub fn TestimonialCarousel(locale: Locale) -> Element {
  let mut rotator = use_signal(|| Rotator::new(TESTIMONIALS.len(), Duration::from_secs(7)));
  use_rotation(rotator);

  let current = rotator.read().index();
  let go_to = t(locale, MessageId::CarouselGoTo);

  rsx! {
    section {
      class: "carousel",
      aria_roledescription: "carousel",
      onmouseenter: move |_| rotator.write().set_hovered(true),
      onmouseleave: move |_| rotator.write().set_hovered(false),
      h2 { class: "section-title", {t(locale, MessageId::TestimonialsTitle)} }
      div {
        class: "carousel-track",
        for (i, item) in TESTIMONIALS.iter().enumerate() {
          figure {
            key: "{i}",
            class: rotator.read().slide_class(i),
            aria_hidden: i != current,
            blockquote { {item.quote.get(locale)} }
            figcaption {
              strong { {item.author} }
              span { {item.role.get(locale)} }
            }
          }
        }
      }
      div {
        class: "carousel-controls",
        button {
          class: "carousel-arrow",
          aria_label: t(locale, MessageId::CarouselPrevious),
          onclick: move |_| rotator.write().prev(),
          "‹"
        }
        for i in 0..TESTIMONIALS.len() {
          button {
            key: "{i}",
            class: if i == current { "carousel-dot carousel-dot-active" } else { "carousel-dot" },
            aria_label: format!("{} {}", go_to, i + 1),
            onclick: move |_| rotator.write().go_to(i),
          }
        }
        button {
          class: "carousel-arrow",
          aria_label: t(locale, MessageId::CarouselNext),
          onclick: move |_| rotator.write().next(),
          "›"
        }
      }
    }
  }
}

#[component]
pub fn FeatureRotator(locale: Locale) -> Element {
  let mut rotator = use_signal(|| Rotator::new(FEATURES.len(), Duration::from_secs(5)));
  use_rotation(rotator);

  let current = rotator.read().index();

  rsx! {
    section {
      id: "features",
      class: "features",
      onmouseenter: move |_| rotator.write().set_hovered(true),
      onmouseleave: move |_| rotator.write().set_hovered(false),
      h2 { class: "section-title", {t(locale, MessageId::FeaturesTitle)} }
      div {
        class: "feature-tabs",
        role: "tablist",
        for (i, feature) in FEATURES.iter().enumerate() {
          button {
            key: "{i}",
            role: "tab",
            class: if i == current { "feature-tab feature-tab-active" } else { "feature-tab" },
            aria_selected: i == current,
            onclick: move |_| rotator.write().go_to(i),
            span { {feature.icon} }
            {feature.title.get(locale)}
          }
        }
      }
      div {
        class: "feature-card",
        role: "tabpanel",
        div {
          class: rotator.read().slide_class(current),
          h3 {
            class: "feature-card-title",
            span { {FEATURES[current].icon} }
            {FEATURES[current].title.get(locale)}
          }
          p { {FEATURES[current].body.get(locale)} }
        }
      }
    }
  }
}
