mod credentials_form;
mod landing_view;
mod language_selector;
mod page_not_found_view;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use onboard_core::route::Page;

use self::{
    credentials_form::CredentialsForm, landing_view::LandingView,
    language_selector::LanguageSelector, page_not_found_view::PageNotFoundView,
};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:slug")]
    Dispatch { slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn page(page: Page) -> Self {
        match page.slug() {
            Some(slug) => Route::Dispatch {
                slug: slug.to_string(),
            },
            None => Route::NotFound {
                segments: Vec::new(),
            },
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        style { "html, body {{ margin: 0; padding: 0; }} #main {{ margin: 0; }}" }

        Router::<Route> {}
    }
}

#[component]
#[allow(non_snake_case)]
fn Landing() -> Element {
    rsx! {
        LandingView {}
    }
}

#[component]
#[allow(non_snake_case)]
fn Dispatch(slug: String) -> Element {
    let page = Page::from_slug(&slug);
    info!("Dispatching /{slug} to {page:?}");

    rsx! {
        main { class: "min-h-screen flex items-center justify-center p-4",
            match page {
                Page::Language => rsx!(LanguageSelector {}),
                Page::Connection => rsx!(CredentialsForm {}),
                Page::NotFound => rsx!(PageNotFoundView {}),
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn NotFound(segments: Vec<String>) -> Element {
    info!("No page at /{}", segments.join("/"));

    rsx! {
        main { class: "min-h-screen flex items-center justify-center p-4", PageNotFoundView {} }
    }
}
