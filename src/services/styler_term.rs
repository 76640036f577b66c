use console::Style;

use crate::ports::{ConsoleStyler, PlainStyler};

/// ANSI styling backed by the `console` crate.
#[derive(Debug, Clone)]
pub struct TermStyler {
    banner: Style,
    success: Style,
    error: Style,
}

impl TermStyler {
    pub fn new() -> Self {
        Self {
            banner: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
        }
    }
}

impl Default for TermStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleStyler for TermStyler {
    fn banner(&self, text: &str) -> String {
        self.banner.apply_to(text).to_string()
    }

    fn success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }

    fn error(&self, text: &str) -> String {
        self.error.apply_to(text).to_string()
    }
}

/// Pick a styler for the current stdout: ANSI styling when the terminal
/// supports colors, plain passthrough otherwise.
pub fn detect_styler() -> Box<dyn ConsoleStyler> {
    if console::Term::stdout().features().colors_supported() {
        Box::new(TermStyler::new())
    } else {
        Box::new(PlainStyler)
    }
}
