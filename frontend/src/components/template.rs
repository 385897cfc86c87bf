use std::{rc::Rc, time::Duration};
use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
  components::carousel::use_rotation,
  content::{self, Page, ANNOUNCEMENTS},
  utils::{
    browser::{self, ListenerGuard},
    i18n::{t, Locale, MessageId},
    nav::{ClickTarget, DropdownId, NavController, NavEffect, NavEvent, NavState},
    rotator::Rotator,
  },
  Route,
};

const HEADER_ID: &str = "site-header";
const ANNOUNCEMENT_KEY: &str = "announcement-dismissed";

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("assets/template.css");
  let locale = use_route::<Route>().locale();

  rsx! {
    document::Stylesheet {href: CSS},
    AnnouncementBar { locale }
    Header { locale }
    main {
      class: "site-main",
      Outlet::<Route> {}
    }
    Footer { locale }
  }
}

/// Applies one event and runs the delayed close it may ask for.
fn dispatch(mut nav: Signal<NavController>, event: NavEvent) {
  let effect = nav.write().handle(event);
  if let NavEffect::ScheduleClose { token, delay_ms } = effect {
    spawn(async move {
      async_std::task::sleep(Duration::from_millis(delay_ms)).await;
      nav.write().handle(NavEvent::CloseTimerFired(token));
    });
  }
}

fn dropdown_label(id: DropdownId) -> MessageId {
  match id {
    DropdownId::Product => MessageId::NavProduct,
    DropdownId::Solutions => MessageId::NavSolutions,
    DropdownId::Company => MessageId::NavCompany,
  }
}

#[component]
fn Header(locale: Locale) -> Element {
  let route = use_route::<Route>();
  let mut nav_state = use_signal(|| NavController::new(false));

  // pointer capabilities are only known once mounted in the browser
  use_effect(move || nav_state.write().set_hover_capable(browser::hover_capable()));

  use_effect(use_reactive((&route,), move |(_route,)| {
    dispatch(nav_state, NavEvent::RouteChanged);
  }));

  use_hook(move || {
    let on_outside = move |ev: web_sys::Event| {
      if nav_state.peek().state() != NavState::Closed && !browser::event_within(&ev, HEADER_ID) {
        dispatch(nav_state, NavEvent::OutsideClick);
      }
    };
    let guards: Vec<ListenerGuard> = ["click", "touchstart"]
      .into_iter()
      .filter_map(|event| match ListenerGuard::on_document(event, on_outside) {
        Ok(guard) => Some(guard),
        Err(e) => {
          warn!("outside-click listener not installed: {}", e);
          None
        }
      })
      .collect();
    Rc::new(guards)
  });

  let menu_open = nav_state.read().state() == NavState::MenuOpen;
  let menu_label = t(locale, if menu_open { MessageId::NavCloseMenu } else { MessageId::NavOpenMenu });

  rsx!{
    header {
      id: HEADER_ID,
      class: "site-header",
      onkeydown: move |evt| {
        if evt.key() == Key::Escape {
          dispatch(nav_state, NavEvent::Escape);
        }
      },
      nav {
        class: "nav-container",
        Link {
          class: "logo",
          to: Route::page(Page::Home, locale),
          "Northwind",
        }
        button {
          class: "menu-button",
          aria_label: menu_label,
          aria_expanded: "{menu_open}",
          onclick: move |_| dispatch(nav_state, NavEvent::Click(ClickTarget::MenuButton)),
          span {
            class: "menu-icon",
            svg {
              class: "menu-icon-svg",
              xmlns: "http://www.w3.org/2000/svg",
              view_box: "0 0 24 24",
              path {
                d: "M6 12H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 15.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 8.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
            }
          }
        },
        div {
          class: if menu_open { "nav-links nav-links-open" } else { "nav-links" },
          NavDropdown { id: DropdownId::Product, locale, nav: nav_state }
          NavDropdown { id: DropdownId::Solutions, locale, nav: nav_state }
          Link {
            active_class: "nav-active",
            to: Route::page(Page::Pricing, locale),
            {t(locale, MessageId::NavPricing)}
          },
          NavDropdown { id: DropdownId::Company, locale, nav: nav_state }
          Link {
            active_class: "nav-active",
            to: Route::page(Page::Contact, locale),
            {t(locale, MessageId::NavContact)}
          },
          LanguageMenu { locale, nav: nav_state }
          Link {
            class: "nav-cta",
            to: Route::page(Page::Demo, locale),
            {t(locale, MessageId::NavBookDemo)}
          },
        }
      }
    }
  }
}

#[component]
fn NavDropdown(id: DropdownId, locale: Locale, nav: Signal<NavController>) -> Element {
  let open = nav.read().is_open(id);

  rsx! {
    div {
      class: "nav-dropdown",
      onmouseenter: move |_| dispatch(nav, NavEvent::HoverEnter(id)),
      onmouseleave: move |_| dispatch(nav, NavEvent::HoverLeave),
      button {
        class: "nav-dropdown-trigger",
        aria_haspopup: "true",
        aria_expanded: "{open}",
        onclick: move |_| dispatch(nav, NavEvent::Click(ClickTarget::Dropdown(id))),
        {t(locale, dropdown_label(id))}
      }
      if open {
        div {
          class: "nav-dropdown-panel",
          role: "menu",
          for item in content::dropdown_items(id) {
            Link {
              class: "nav-dropdown-item",
              to: Route::page(item.page, locale),
              span { class: "nav-dropdown-label", {item.label.get(locale)} }
              span { class: "nav-dropdown-desc", {item.description.get(locale)} }
            }
          }
        }
      }
    }
  }
}

fn language_class(target: Locale, current: Locale) -> &'static str {
  if target == current { "language-option language-current" } else { "language-option" }
}

#[component]
fn LanguageMenu(locale: Locale, nav: Signal<NavController>) -> Element {
  let route = use_route::<Route>();
  let open = nav.read().state() == NavState::LanguageOpen;

  rsx! {
    div {
      class: "language-menu",
      button {
        class: "language-trigger",
        aria_label: t(locale, MessageId::NavLanguage),
        aria_expanded: "{open}",
        onclick: move |_| dispatch(nav, NavEvent::Click(ClickTarget::Language)),
        {locale.code().to_uppercase()}
      }
      if open {
        ul {
          class: "language-list",
          for target in Locale::ALL {
            li {
              key: "{target}",
              Link {
                class: language_class(target, locale),
                to: route.with_locale(target),
                {target.label()}
              }
            }
          }
        }
      }
    }
  }
}

#[component]
fn AnnouncementBar(locale: Locale) -> Element {
  let mut dismissed = use_signal(|| true);
  let mut rotator = use_signal(|| Rotator::new(ANNOUNCEMENTS.len(), Duration::from_secs(6)));
  use_rotation(rotator);

  use_effect(move || dismissed.set(browser::session_flag(ANNOUNCEMENT_KEY)));

  if dismissed() {
    return rsx! {};
  }

  let current = rotator.read().index();

  rsx! {
    div {
      class: "announcement-bar",
      role: "region",
      aria_live: "polite",
      onmouseenter: move |_| rotator.write().set_hovered(true),
      onmouseleave: move |_| rotator.write().set_hovered(false),
      p {
        class: rotator.read().slide_class(current),
        {ANNOUNCEMENTS[current].get(locale)}
      }
      button {
        class: "announcement-dismiss",
        aria_label: t(locale, MessageId::AnnouncementDismiss),
        onclick: move |_| {
          if let Err(e) = browser::set_session_flag(ANNOUNCEMENT_KEY) {
            warn!("announcement dismissal not remembered: {}", e);
          }
          dismissed.set(true);
        },
        "×"
      }
    }
  }
}

#[component]
fn Footer(locale: Locale) -> Element {
  let year = chrono::Utc::now().format("%Y").to_string();

  rsx!{
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { class: "footer-tagline", {t(locale, MessageId::FooterTagline)} }
          p { "© {year} Northwind. " {t(locale, MessageId::FooterRights)} }
        },
        nav {
          class: "footer-legal",
          aria_label: t(locale, MessageId::FooterLegal),
          for doc in content::LegalDoc::ALL {
            Link {
              to: Route::page(Page::Legal(doc), locale),
              {doc.title().get(locale)}
            }
          }
        }
        div {
          class: "social-links",
          a {
            href: "mailto:hello@northwind.example",
            class: "social-link",
            title: "Email",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"
              }
              polyline {
                points: "22,6 12,13 2,6"
              }
            }
          }
          a {
            href: "https://www.linkedin.com/company/northwind",
            target: "_blank",
            rel: "noopener",
            class: "social-link",
            title: "LinkedIn",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"
              }
              rect {
                x: "2",
                y: "9",
                width: "4",
                height: "12"
              }
              circle {
                cx: "4",
                cy: "4",
                r: "2"
              }
            }
          }
        }
      }
    }
  }
}
