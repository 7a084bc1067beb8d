use dioxus::prelude::*;

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdTriangleAlert;

use super::Route;

#[component]
#[allow(non_snake_case)]
pub fn PageNotFoundView() -> Element {
    rsx!(
        div { class: "flex flex-col items-center justify-center gap-4 text-gray-800",
            Icon { width: 160, icon: LdTriangleAlert }
            p { class: "text-2xl font-bold", "404 - Page Not Found" }
            Link {
                class: "underline text-blue-600 hover:text-blue-400 duration-200",
                to: Route::Landing {},
                "Back to start"
            }
        }
    )
}
