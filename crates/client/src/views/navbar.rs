//! Top navigation bar, rendered on every page.

use dioxus::prelude::*;

use crate::routes::Route;

fn link_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 text-sm font-semibold text-indigo-600"
    } else {
        "px-3 py-2 text-sm font-medium text-gray-600 hover:text-gray-900"
    }
}

#[component]
pub fn Navbar() -> Element {
    let route: Route = use_route();

    rsx! {
        nav { class: "flex items-center gap-2 border-b border-gray-200 bg-white px-6 py-3",
            span { class: "mr-4 text-lg font-bold text-gray-900", "ScholarQA" }
            Link {
                to: Route::Home {},
                class: link_class(matches!(route, Route::Home {})),
                "Ask"
            }
            Link {
                to: Route::Stats {},
                class: link_class(matches!(route, Route::Stats {})),
                "Corpus"
            }
        }

        Outlet::<Route> {}
    }
}
