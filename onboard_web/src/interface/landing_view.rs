use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use gloo_timers::future::sleep;

use onboard_core::{
    landing::{LandingSchedule, LandingStage, TimerGroup, marquee_rows},
    route::Page,
};

use super::Route;

#[component]
#[allow(non_snake_case)]
pub fn LandingView() -> Element {
    let mut stage = use_signal(LandingStage::default);

    // The future belongs to this scope, so unmounting drops every pending step at once
    use_future(move || async move {
        let mut timers = TimerGroup::new(&LandingSchedule::default());
        let mut elapsed = Duration::ZERO;
        while let Some(deadline) = timers.next_deadline() {
            sleep(deadline - elapsed).await;
            elapsed = deadline;
            if let Some(next) = timers.fire_due(elapsed) {
                info!("Landing stage: {next:?}");
                stage.set(next);
            }
        }
    });

    use_drop(|| info!("Landing view unmounted"));

    let current = *stage.read();
    let rows = marquee_rows();

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center p-4 bg-gray-100",
            h1 { class: "fade-down text-4xl md:text-6xl font-bold mb-6 text-center",
                "Welcome to Our Website"
            }
            p {
                class: "fade-in text-lg md:text-xl text-center max-w-2xl mb-8",
                style: "animation-delay: 0.5s",
                "Explore trending technologies and design patterns with our interactive UI."
            }

            div { class: "min-h-[120px] flex items-center justify-center",
                if current.shows_loading() {
                    LoadingAnimation {}
                }
                if current.shows_redirect_note() {
                    RedirectNote {}
                }
            }

            div { class: "w-[40rem] max-w-[90vw] mt-12 border-2 border-black rounded-xl py-4",
                for (index, row) in rows.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "fade-up relative overflow-hidden my-3",
                        style: "animation-delay: {row.enter_delay_secs}s",
                        div {
                            class: "marquee",
                            style: format!(
                                "animation-duration: {}s; animation-direction: {}",
                                row.duration_secs,
                                if row.reverse { "reverse" } else { "normal" },
                            ),
                            // doubled so the loop has no visible seam
                            for (i, tag) in row.tags.iter().chain(row.tags.iter()).enumerate() {
                                div {
                                    key: "{i}",
                                    class: "bg-black text-white px-3 py-1 rounded-md m-1 shadow-md text-sm whitespace-nowrap",
                                    "{tag}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn LoadingAnimation() -> Element {
    rsx! {
        div { class: "pop-in flex flex-col items-center",
            div { class: "w-16 h-16 border-t-4 border-b-4 border-black rounded-full animate-spin" }
            h2 { class: "fade-up mt-4 text-xl font-bold", style: "animation-delay: 0.2s",
                "Loading..."
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn RedirectNote() -> Element {
    rsx! {
        div { class: "pop-in mt-12 text-center",
            svg {
                class: "w-24 h-24 mx-auto",
                view_box: "0 0 100 100",
                fill: "none",
                xmlns: "http://www.w3.org/2000/svg",
                circle {
                    cx: "50",
                    cy: "50",
                    r: "45",
                    stroke: "black",
                    "stroke-width": "2",
                }
                path {
                    d: "M30 50L45 65L70 35",
                    stroke: "black",
                    "stroke-width": "2",
                    "stroke-linecap": "round",
                    "stroke-linejoin": "round",
                }
            }
            p { class: "fade-up text-sm text-gray-600 mt-4",
                "If you are not redirected to another page in a few seconds, "
                Link {
                    class: "underline text-blue-600 hover:text-blue-400 duration-200",
                    to: Route::page(Page::Language),
                    "click here"
                }
                "."
            }
        }
    }
}
