//! Corpus statistics view.

use dioxus::prelude::*;
use scholarqa_shared::CorpusStatistics;

use crate::api_client::ApiClient;
use crate::components::ui::{Card, TextBlock, TextVariant};
use crate::theme::Theme;

#[component]
pub fn Stats() -> Element {
    let stats = use_resource(move || async move { ApiClient::new().statistics().await });

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            div { class: "mx-auto max-w-3xl px-6 py-10",
                h1 { class: "text-2xl font-bold text-gray-900", "Corpus" }
                p { class: "mt-1 text-sm text-gray-500",
                    "What the retrieval engine currently indexes."
                }

                match stats.read().as_ref() {
                    Some(Ok(s)) => rsx! {
                        StatGrid { stats: s.clone() }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "mt-6 rounded-lg border border-red-300 bg-red-50 p-3 text-sm text-red-700",
                            "Failed to load statistics: {e}"
                        }
                    },
                    None => rsx! {
                        p { class: "mt-6 text-sm text-gray-400", "Loading statistics..." }
                    },
                }
            }
        }
    }
}

#[component]
fn StatGrid(stats: CorpusStatistics) -> Element {
    rsx! {
        div { class: "mt-6 grid grid-cols-3 gap-4",
            StatCard { label: "Documents", value: stats.n_pdfs }
            StatCard { label: "Pages", value: stats.n_pages }
            StatCard { label: "Extracted objects", value: stats.n_objects }
        }
    }
}

#[component]
fn StatCard(label: String, value: u64) -> Element {
    rsx! {
        Card { theme: Theme::default(), class: "p-4",
            TextBlock { variant: Some(TextVariant::Caption), "{label}" }
            TextBlock { variant: Some(TextVariant::Heading), "{value}" }
        }
    }
}
