//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions, in order, for later assertion. It also supports
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use texkit::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.success("Python is installed");
//! ui.pause().unwrap();
//!
//! // Assert on captured interactions
//! assert!(ui.has_success("Python"));
//! assert_eq!(ui.events().last(), Some(&UiEvent::Pause));
//! ```

use std::collections::HashMap;

use crate::error::{Result, TexkitError};

use super::{
    parse_bool, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface,
};

/// A single captured UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Hint(String),
    Spinner(String),
    Prompt(String),
    Pause,
    Clear,
}

/// Mock UI implementation for testing.
///
/// A prompt without a configured response falls back to its default, the
/// way a user pressing Enter would.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: Vec<UiEvent>,
    prompt_responses: HashMap<String, String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Every captured interaction in the order it happened.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    fn collect(&self, pick: impl Fn(&UiEvent) -> Option<&String>) -> Vec<String> {
        self.events.iter().filter_map(pick).cloned().collect()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Message(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Success(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Warning(m) => Some(m),
            _ => None,
        })
    }

    /// Keys of the prompts shown, in order.
    pub fn prompts_shown(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Prompt(k) => Some(k),
            _ => None,
        })
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Error(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured hints.
    pub fn hints(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Hint(m) => Some(m),
            _ => None,
        })
    }

    /// Get all captured headers.
    pub fn headers(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Header(m) => Some(m),
            _ => None,
        })
    }

    /// Number of pauses requested.
    pub fn pause_count(&self) -> usize {
        self.events.iter().filter(|e| **e == UiEvent::Pause).count()
    }

    /// Number of screen clears requested.
    pub fn clear_count(&self) -> usize {
        self.events.iter().filter(|e| **e == UiEvent::Clear).count()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints().iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.events.push(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(UiEvent::Error(msg.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.events.push(UiEvent::Header(title.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.events.push(UiEvent::Hint(hint.to_string()));
    }

    fn pause(&mut self) -> Result<()> {
        self.events.push(UiEvent::Pause);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.events.push(UiEvent::Clear);
        Ok(())
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.events.push(UiEvent::Prompt(prompt.key.clone()));

        let answer = self
            .prompt_responses
            .get(&prompt.key)
            .or(prompt.default.as_ref())
            .ok_or_else(|| TexkitError::MissingInput {
                key: prompt.key.clone(),
            })?;

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool(answer)),
            PromptType::Input => PromptResult::String(answer.clone()),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.events.push(UiEvent::Spinner(message.to_string()));
        Box::new(MockSpinner::new())
    }
}

/// Mock spinner for testing.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finished: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the spinner was finished.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_events_in_order() {
        let mut ui = MockUI::new();
        ui.error("pip is missing");
        ui.show_hint("https://www.python.org/downloads/");
        ui.pause().unwrap();
        ui.clear().unwrap();

        assert_eq!(
            ui.events(),
            &[
                UiEvent::Error("pip is missing".to_string()),
                UiEvent::Hint("https://www.python.org/downloads/".to_string()),
                UiEvent::Pause,
                UiEvent::Clear,
            ]
        );
    }

    #[test]
    fn filters_by_kind() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.success("two");
        ui.message("three");

        assert_eq!(ui.messages(), vec!["one".to_string(), "three".to_string()]);
        assert_eq!(ui.successes(), vec!["two".to_string()]);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn counts_pauses_and_clears() {
        let mut ui = MockUI::new();
        ui.pause().unwrap();
        ui.clear().unwrap();
        ui.pause().unwrap();

        assert_eq!(ui.pause_count(), 2);
        assert_eq!(ui.clear_count(), 1);
    }

    #[test]
    fn records_spinner_start() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Checking for Python...");
        spinner.finish_and_clear();
        assert_eq!(
            ui.events(),
            &[UiEvent::Spinner("Checking for Python...".to_string())]
        );
    }

    #[test]
    fn mock_spinner_tracks_finish() {
        let mut spinner = MockSpinner::new();
        assert!(!spinner.is_finished());
        spinner.finish_and_clear();
        assert!(spinner.is_finished());
    }

    #[test]
    fn prompt_returns_configured_response() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.set_prompt_response("batch", "y");
        ui.set_prompt_response("input_file", "global.pab.xen");

        let batch = ui
            .prompt(&Prompt::confirm("batch", "Run in batch mode?", false))
            .unwrap();
        let file = ui
            .prompt(&Prompt::input("input_file", "Enter path", None))
            .unwrap();

        assert_eq!(batch, PromptResult::Bool(true));
        assert_eq!(file, PromptResult::String("global.pab.xen".to_string()));
        assert_eq!(ui.prompts_shown(), vec!["batch", "input_file"]);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn prompt_falls_back_to_default_then_errors() {
        let mut ui = MockUI::new();
        let out = ui
            .prompt(&Prompt::input("output_dir", "Output?", Some("extracted_dds")))
            .unwrap();
        assert_eq!(out.as_string(), "extracted_dds");

        assert!(ui
            .prompt(&Prompt::input("input_file", "Enter path", None))
            .is_err());
    }

    #[test]
    fn captures_warnings() {
        let mut ui = MockUI::new();
        ui.warning("dds_002.dds: format mismatch");
        assert!(ui.has_warning("format mismatch"));
        assert_eq!(ui.warnings().len(), 1);
    }
}
