#![allow(non_snake_case)]
mod components;
mod content;
mod pages;
mod utils;

use components::template::Template;
use content::Page;
use dioxus::{logger::tracing::warn, prelude::*};
use pages::{contact::Contact, demo::Demo, home::Home, legal::Legal, pricing::Pricing};
use utils::{browser, i18n::{t, Locale, MessageId}};

#[derive(Routable, PartialEq, Clone, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[layout(Template)]
        #[route("/:locale")]
        Home { locale: String },
        #[route("/:locale/pricing")]
        Pricing { locale: String },
        #[route("/:locale/contact")]
        Contact { locale: String },
        #[route("/:locale/demo")]
        Demo { locale: String },
        #[route("/:locale/legal/:doc")]
        Legal { locale: String, doc: String },
        #[route("/:..route")]
        PageNotFound { route: Vec<String> },
}

impl Route {
    pub fn locale(&self) -> Locale {
        match self {
            Route::Home { locale }
            | Route::Pricing { locale }
            | Route::Contact { locale }
            | Route::Demo { locale }
            | Route::Legal { locale, .. } => Locale::from_segment(locale),
            Route::Root {} | Route::PageNotFound { .. } => Locale::default(),
        }
    }

    /// Same page in another language, for the language switcher.
    pub fn with_locale(&self, target: Locale) -> Route {
        let locale = target.code().to_string();
        match self {
            Route::Pricing { .. } => Route::Pricing { locale },
            Route::Contact { .. } => Route::Contact { locale },
            Route::Demo { .. } => Route::Demo { locale },
            Route::Legal { doc, .. } => Route::Legal { locale, doc: doc.clone() },
            Route::Root {} | Route::Home { .. } | Route::PageNotFound { .. } => Route::Home { locale },
        }
    }

    pub fn page(page: Page, locale: Locale) -> Route {
        let locale = locale.code().to_string();
        match page {
            Page::Home => Route::Home { locale },
            Page::Pricing => Route::Pricing { locale },
            Page::Contact => Route::Contact { locale },
            Page::Demo => Route::Demo { locale },
            Page::Legal(doc) => Route::Legal { locale, doc: doc.slug().to_string() },
        }
    }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    rsx! { Router::<Route> {} }
}

/// `/` sends visitors to their browser language, English when it is not offered.
#[component]
fn Root() -> Element {
    let nav = navigator();
    use_effect(move || {
        let locale = browser::browser_language()
            .map(|lang| Locale::negotiate(&lang))
            .unwrap_or_default();
        nav.replace(Route::Home { locale: locale.code().to_string() });
    });
    rsx! {}
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    let locale = Locale::default();
    let title = t(locale, MessageId::NotFoundTitle);
    warn!("no page at /{}", route.join("/"));
    rsx! {
        document::Title { "{title}" }
        section {
            class: "not-found",
            h1 { "{title}" }
            p { {t(locale, MessageId::NotFoundBody)} }
            Link { class: "cta-button", to: Route::page(Page::Home, locale), {t(locale, MessageId::NotFoundHome)} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::LegalDoc;

    #[test]
    fn locale_comes_from_the_first_segment() {
        assert_eq!(Route::Pricing { locale: "tr".into() }.locale(), Locale::Tr);
        assert_eq!(Route::Demo { locale: "de".into() }.locale(), Locale::En);
        assert_eq!(Route::PageNotFound { route: vec!["x".into()] }.locale(), Locale::En);
    }

    #[test]
    fn switching_language_keeps_the_page() {
        let legal = Route::Legal { locale: "en".into(), doc: "cookies".into() };
        assert_eq!(legal.with_locale(Locale::Tr), Route::Legal { locale: "tr".into(), doc: "cookies".into() });
        assert_eq!(Route::Contact { locale: "tr".into() }.with_locale(Locale::En).to_string(), "/en/contact");
        assert_eq!(Route::PageNotFound { route: vec![] }.with_locale(Locale::Tr), Route::Home { locale: "tr".into() });
    }

    #[test]
    fn pages_render_to_localized_paths() {
        assert_eq!(Route::page(Page::Home, Locale::Tr).to_string(), "/tr");
        assert_eq!(Route::page(Page::Legal(LegalDoc::Privacy), Locale::En).to_string(), "/en/legal/privacy");
    }

    #[test]
    fn paths_parse_back_into_routes() {
        assert_eq!("/tr/demo".parse::<Route>().ok(), Some(Route::Demo { locale: "tr".into() }));
    }
}
