//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::{TexkitError, Result};

use super::prompts::prompt_user;
use super::{
    should_use_colors, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt, PromptResult,
    SpinnerHandle, TexkitTheme, UserInterface,
};

/// Text shown while waiting for a keypress.
pub const PAUSE_PROMPT: &str = "Press any key to continue . . .";

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: TexkitTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            TexkitTheme::new()
        } else {
            TexkitTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

fn terminal_err(e: std::io::Error) -> TexkitError {
    TexkitError::Terminal {
        message: e.to_string(),
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "{}", self.theme.format_hint(hint)).ok();
    }

    fn pause(&mut self) -> Result<()> {
        write!(self.term, "{}", self.theme.dim.apply_to(PAUSE_PROMPT)).map_err(terminal_err)?;
        self.term.flush().map_err(terminal_err)?;
        self.term.read_key().map_err(terminal_err)?;
        writeln!(self.term).map_err(terminal_err)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.term.clear_screen().map_err(terminal_err)
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the appropriate UI for the environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_keeps_output_mode() {
        let ui = create_ui(false, OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn terminal_ui_keeps_output_mode() {
        let ui = TerminalUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
