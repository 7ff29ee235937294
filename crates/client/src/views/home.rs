//! Ask view - question form, extracted answers, recent questions.

use dioxus::prelude::*;
use scholarqa_shared::{try_problem_detail, ApiError, Answer};

use crate::api_client::ApiClient;
use crate::components::answers::AnswerList;
use crate::components::ui::{Button, TextInput};
use crate::history::{QuestionHistory, RecentQuestion};
use crate::log_error;
use crate::theme::Theme;

#[component]
pub fn Home() -> Element {
    let mut question = use_signal(String::new);
    let mut answers = use_signal(|| None::<Vec<Answer>>);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);
    let mut history = use_signal(QuestionHistory::load);

    let mut submit = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() {
            error.set(Some("Type a question first".to_string()));
            return;
        }
        if *is_loading.read() {
            return;
        }

        is_loading.set(true);
        error.set(None);

        history.write().record(&text);
        history.read().save();

        spawn(async move {
            let client = ApiClient::new();
            match client.ask(&text, None).await {
                Ok(resp) => {
                    answers.set(Some(resp.answers));
                    is_loading.set(false);
                }
                Err(err) => {
                    let msg = if let ApiError::Http { body, .. } = &err {
                        try_problem_detail(body).unwrap_or_else(|| err.to_string())
                    } else {
                        err.to_string()
                    };
                    log_error!("ask failed: {msg}");
                    error.set(Some(msg));
                    is_loading.set(false);
                }
            }
        });
    };

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        submit(question.read().clone());
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            div { class: "mx-auto max-w-3xl px-6 py-10",
                h1 { class: "text-2xl font-bold text-gray-900", "Ask the literature" }
                p { class: "mt-1 text-sm text-gray-500",
                    "Answers are extracted from the ingested documents and cited by DOI."
                }

                form { class: "mt-6 flex items-start gap-3", onsubmit: handle_submit,
                    TextInput {
                        value: question.cloned(),
                        placeholder: Some("e.g. What receptor does the virus bind to?".to_string()),
                        oninput: move |e: FormEvent| {
                            question.set(e.value());
                            error.set(None);
                        },
                    }
                    Button {
                        r#type: Some("submit".to_string()),
                        disabled: Some(*is_loading.read()),
                        if *is_loading.read() {
                            "Asking..."
                        } else {
                            "Ask"
                        }
                    }
                }

                if let Some(err) = error.read().as_ref() {
                    div { class: "mt-4 rounded-lg border border-red-300 bg-red-50 p-3 text-sm text-red-700",
                        "{err}"
                    }
                }

                if let Some(list) = answers.read().as_ref() {
                    div { class: "mt-4",
                        AnswerList { answers: list.clone(), theme: Theme::default() }
                    }
                }

                RecentQuestions {
                    entries: history.read().entries().to_vec(),
                    on_select: move |q: String| {
                        question.set(q.clone());
                        submit(q);
                    },
                    on_clear: move |_| {
                        history.set(QuestionHistory::default());
                        QuestionHistory::erase();
                    },
                }
            }
        }
    }
}

/// Recent questions with one-click re-ask.
#[component]
fn RecentQuestions(
    entries: Vec<RecentQuestion>,
    on_select: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "mt-10",
            div { class: "flex items-center justify-between",
                h2 { class: "text-xs font-semibold uppercase tracking-wide text-gray-500",
                    "Recent questions"
                }
                if !entries.is_empty() {
                    button {
                        class: "text-xs text-gray-400 hover:text-gray-600",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
            if entries.is_empty() {
                p { class: "mt-2 text-sm italic text-gray-400", "Nothing asked yet." }
            } else {
                ul { class: "mt-2 divide-y divide-gray-100",
                    for entry in entries.iter() {
                        li { key: "{entry.id}",
                            button {
                                class: "w-full py-2 text-left text-sm text-indigo-600 hover:text-indigo-800",
                                onclick: {
                                    let q = entry.question.clone();
                                    move |_| on_select.call(q.clone())
                                },
                                "{entry.question}"
                            }
                        }
                    }
                }
            }
        }
    }
}
