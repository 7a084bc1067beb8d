use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_sdk::utils::timing::use_debounce;

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;

use onboard_core::{
    catalog::CATALOG,
    route::Page,
    selector::{SelectorState, filter_languages},
};

use super::Route;

#[component]
#[allow(non_snake_case)]
pub fn LanguageSelector() -> Element {
    let mut selector = use_signal(SelectorState::new);
    let navigator = use_navigator();

    // log searches once typing settles
    let mut log_query = use_debounce(Duration::from_millis(500), move |query: String| {
        let count = filter_languages(&CATALOG, &query).len();
        info!("Language query {query:?} matches {count} entries");
    });

    let state = selector.read().clone();
    let ordered = state.ordered().into_ordered();
    let is_open = state.is_open();

    rsx! {
        div { class: "flex flex-col justify-center items-center min-h-screen p-6",
            p { class: "text-4xl font-bold m-5", "Select a Language" }
            div { class: "relative w-64 md:w-80",
                div { class: "relative",
                    input {
                        r#type: "text",
                        class: "w-full px-6 py-3 bg-white border border-gray-300 rounded-xl shadow-xl focus:outline-none focus:ring-2 focus:ring-gray-400 transition-all duration-500",
                        placeholder: "Select a language",
                        value: "{state.query()}",
                        onfocus: move |_| {
                            selector.write().open();
                        },
                        oninput: move |event| {
                            let query = event.value();
                            log_query.action(query.clone());
                            selector.write().set_query(query);
                        },
                    }
                    button {
                        r#type: "button",
                        class: "absolute right-3 top-3 w-6 h-7 focus:outline-none cursor-pointer",
                        onclick: move |_| {
                            selector.write().toggle();
                            info!("Language dropdown open: {}", selector.read().is_open());
                        },
                        div {
                            class: format!(
                                "transition-transform duration-300 {}",
                                if is_open { "rotate-180" } else { "rotate-0" },
                            ),
                            Icon { width: 24, icon: LdChevronDown }
                        }
                    }
                }

                if is_open {
                    ul { class: "dropdown-enter absolute left-0 right-0 mt-2 bg-white border border-gray-300 rounded-xl shadow-lg overflow-y-auto max-h-60 scrollbar-hide",
                        for entry in ordered {
                            li {
                                key: "{entry.code}",
                                class: "flex items-center gap-4 px-6 py-3 cursor-pointer hover:bg-purple-100 transition-all duration-200",
                                onclick: move |_| {
                                    info!("Selected language {}", entry.code);
                                    selector.write().select(entry);
                                },
                                img {
                                    src: entry.flag_asset_path(),
                                    alt: entry.label,
                                    width: 20,
                                    height: 20,
                                }
                                span { class: "text-base text-gray-800", "{entry.label}" }
                            }
                        }
                    }
                }
            }

            div { class: "mt-8 text-center",
                p { class: "text-3xl font-semibold", "{state.greeting()} 👋" }
            }

            div { class: "mt-8",
                button {
                    class: "px-4 py-2 font-bold bg-black border-4 border-black text-white rounded-lg shadow-lg hover:text-black hover:bg-transparent transition-all duration-500 cursor-pointer",
                    onclick: move |_| {
                        info!("Continuing in {}", selector.read().selected().code);
                        navigator.push(Route::page(Page::Connection));
                    },
                    "{state.button_label()}"
                }
            }
        }
    }
}
