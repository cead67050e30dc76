// src/output/theme.rs
// =============================================================================
// Terminal styles for the digest.
//
// Two themes: colored (bold/colors) and plain (no escape codes at all).
// detect() picks colored only when the user didn't opt out and stdout can
// actually show colors.
// =============================================================================

use console::{Style, Term};

/// Styles used when printing the digest
#[derive(Debug, Clone)]
pub struct Theme {
    pub user: Style,
    pub repo: Style,
    pub muted: Style,
    pub notice: Style,
    pub error: Style,
}

impl Theme {
    /// Create a colored theme
    pub fn colored() -> Self {
        Self {
            user: Style::new().green().bold(),
            repo: Style::new().cyan().bold(),
            muted: Style::new().dim(),
            notice: Style::new().yellow(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a plain theme (no colors)
    pub fn plain() -> Self {
        Self {
            user: Style::new(),
            repo: Style::new(),
            muted: Style::new(),
            notice: Style::new(),
            error: Style::new(),
        }
    }

    /// Colored unless disabled or stdout can't show colors
    pub fn detect(no_color: bool) -> Self {
        if !no_color && Term::stdout().features().colors_supported() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_adds_no_escapes() {
        let theme = Theme::plain();
        assert_eq!(theme.repo.apply_to("a/repo").to_string(), "a/repo");
        assert_eq!(theme.error.apply_to("boom").to_string(), "boom");
    }

    #[test]
    fn test_no_color_flag_wins() {
        let theme = Theme::detect(true);
        assert_eq!(theme.user.apply_to("octocat").to_string(), "octocat");
    }
}
