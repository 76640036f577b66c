/// Terminal output styling capability.
///
/// Orchestration code formats user-facing lines through this trait and never
/// branches on platform or terminal support itself.
pub trait ConsoleStyler {
    /// Style a banner line shown at the start of a run.
    fn banner(&self, text: &str) -> String;

    /// Style a success line.
    fn success(&self, text: &str) -> String;

    /// Style an error line.
    fn error(&self, text: &str) -> String;
}

/// Styler that returns text unchanged, for terminals without color support.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl ConsoleStyler for PlainStyler {
    fn banner(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }
}
