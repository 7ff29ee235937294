//! Visual theme tokens.
//!
//! The theme is plain data handed to components as a prop, never resolved
//! from ambient context: every color a component applies is traceable to the
//! `Theme` value its caller supplied.

/// Named color tokens shared by the UI kit.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background color of elevated surfaces (cards, panels).
    pub surface: String,
    /// Page background behind surfaces.
    pub background: String,
    /// Primary heading/body text color.
    pub text_primary: String,
    /// De-emphasized text color (labels, captions).
    pub text_secondary: String,
    /// Accent color for interactive elements.
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: "#ffffff".to_string(),
            background: "#fafafa".to_string(),
            text_primary: "#1f2328".to_string(),
            text_secondary: "#57606a".to_string(),
            accent: "#4f46e5".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_is_paper_white() {
        assert_eq!(Theme::default().surface, "#ffffff");
    }
}
