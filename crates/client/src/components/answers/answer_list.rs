use dioxus::prelude::*;
use scholarqa_shared::Answer;

use crate::components::answers::AnswerCard;
use crate::theme::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct AnswerListProps {
    pub answers: Vec<Answer>,
    #[props(default)]
    pub theme: Theme,
}

/// Renders every extracted answer as its own card.
#[component]
pub fn AnswerList(props: AnswerListProps) -> Element {
    if props.answers.is_empty() {
        return rsx! {
            p { class: "text-sm italic text-gray-400",
                "No answers could be extracted for this question."
            }
        };
    }

    rsx! {
        div {
            for (idx, answer) in props.answers.iter().enumerate() {
                AnswerCard {
                    key: "{idx}",
                    answer: answer.answer.clone(),
                    doi: answer.doi.clone(),
                    theme: props.theme.clone(),
                }
            }
        }
    }
}
