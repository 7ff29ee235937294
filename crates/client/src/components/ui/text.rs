use dioxus::prelude::*;

/// Type scale for [`TextBlock`]. The variant selects both the rendered
/// element and its styling.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    /// Heading-level text, rendered as an `h3`.
    Heading,
    /// Body copy, rendered as a `p`.
    Body,
    /// Small de-emphasized text, rendered as a `span`.
    Caption,
}

impl Default for TextVariant {
    fn default() -> Self {
        Self::Body
    }
}

impl TextVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Heading => "text-lg font-semibold text-gray-900",
            Self::Body => "text-sm text-gray-700",
            Self::Caption => "text-xs uppercase tracking-wide text-gray-500",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextBlockProps {
    #[props(optional)]
    pub variant: Option<TextVariant>,
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

/// Styled text block.
#[component]
pub fn TextBlock(props: TextBlockProps) -> Element {
    let variant = props.variant.unwrap_or_default();
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    };

    match variant {
        TextVariant::Heading => rsx! {
            h3 { class, {props.children} }
        },
        TextVariant::Body => rsx! {
            p { class, {props.children} }
        },
        TextVariant::Caption => rsx! {
            span { class, {props.children} }
        },
    }
}
