//! Visual theme and styling.

use console::Style;

/// Console theme for texkit output.
#[derive(Debug, Clone)]
pub struct TexkitTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for remediation hints and links (cyan).
    pub hint: Style,
}

impl Default for TexkitTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TexkitTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a remediation hint.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(hint))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = TexkitTheme::plain();
        let msg = theme.format_success("Python is installed");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Python is installed"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = TexkitTheme::plain();
        let msg = theme.format_error("pip is not installed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("pip is not installed"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = TexkitTheme::plain();
        assert_eq!(
            theme.format_warning("dds_003.dds: format mismatch"),
            "⚠ dds_003.dds: format mismatch"
        );
    }

    #[test]
    fn theme_formats_header() {
        let theme = TexkitTheme::plain();
        assert_eq!(theme.format_header("Checks"), "◆ Checks");
    }

    #[test]
    fn theme_indents_hint() {
        let theme = TexkitTheme::plain();
        assert_eq!(theme.format_hint("see link"), "  see link");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = TexkitTheme::default();
        let new = TexkitTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
