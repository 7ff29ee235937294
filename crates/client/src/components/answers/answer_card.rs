//! Answer card - displays one extracted answer and its source DOI.

use dioxus::prelude::*;

use crate::components::ui::{Card, TextBlock, TextVariant};
use crate::theme::Theme;

/// Literal prefix shown before the DOI value.
const DOI_PREFIX: &str = "DOI: ";

/// Body line of the card: the prefix followed by the DOI, or the bare prefix
/// when the source document has no DOI.
pub fn doi_line(doi: Option<&str>) -> String {
    format!("{}{}", DOI_PREFIX, doi.unwrap_or_default())
}

#[derive(Props, Clone, PartialEq)]
pub struct AnswerCardProps {
    /// Extracted answer text, shown verbatim.
    pub answer: String,
    /// DOI of the source document, shown verbatim.
    #[props(optional)]
    pub doi: Option<String>,
    /// Theme supplying the card's surface color.
    #[props(default)]
    pub theme: Theme,
}

/// Renders one answer inside a bordered surface. Pure: the output depends
/// only on the supplied props, and neither value is validated or parsed.
#[component]
pub fn AnswerCard(props: AnswerCardProps) -> Element {
    let doi = doi_line(props.doi.as_deref());

    rsx! {
        Card {
            theme: props.theme.clone(),
            class: "px-1 py-0.5 m-5",
            TextBlock { variant: Some(TextVariant::Heading), "{props.answer}" }
            TextBlock { variant: Some(TextVariant::Body), "{doi}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doi_line_is_the_exact_concatenation() {
        assert_eq!(doi_line(Some("10.1000/xyz123")), "DOI: 10.1000/xyz123");
    }

    #[test]
    fn doi_line_with_empty_value_is_the_bare_prefix() {
        assert_eq!(doi_line(Some("")), "DOI: ");
    }

    #[test]
    fn doi_line_with_missing_value_is_the_bare_prefix() {
        assert_eq!(doi_line(None), "DOI: ");
    }

    #[test]
    fn doi_line_does_not_touch_the_value() {
        // Whitespace and unusual characters pass through untouched.
        assert_eq!(doi_line(Some(" 10.1/a b ")), "DOI:  10.1/a b ");
    }
}
