use dioxus::prelude::*;

use crate::theme::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Theme supplying the surface background token.
    #[props(default)]
    pub theme: Theme,
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

/// Bordered surface container. The background color always comes from the
/// supplied theme's surface token; everything else is static.
#[component]
pub fn Card(props: CardProps) -> Element {
    let base = "rounded-lg border border-gray-200 shadow-sm";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    };

    rsx! {
        div {
            class,
            background_color: "{props.theme.surface}",
            {props.children}
        }
    }
}
