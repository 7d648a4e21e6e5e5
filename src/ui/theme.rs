//! Visual theme and styling.

use console::Style;

/// Terminal styles for tool-enforcer output.
#[derive(Debug, Clone)]
pub struct EnforcerTheme {
    /// Style for the success label (green bold).
    pub success: Style,
    /// Style for the warning label (orange bold).
    pub warning: Style,
    /// Style for the error label (red bold).
    pub error: Style,
}

impl Default for EnforcerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnforcerTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().bold(),
            warning: Style::new().color256(208).bold(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success line (`Success: msg`).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("Success:"), msg)
    }

    /// Format a warning line (`Warning: msg`).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("Warning:"), msg)
    }

    /// Format an error line (`Error: msg`).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("Error:"), msg)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
