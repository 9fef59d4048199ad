//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, TexkitError};

use super::{
    parse_bool, OutputMode, ProgressSpinner, Prompt, PromptResult, PromptType, SpinnerHandle,
    TexkitTheme, UserInterface,
};

/// Prefix of the environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "TEXKIT_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prints plain lines to stdout. Pauses and screen clears are skipped so a
/// run never blocks waiting for a keypress that cannot arrive. Prompts are
/// answered from `TEXKIT_PROMPT_<KEY>` variables, then from their defaults.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: TexkitTheme,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            theme: TexkitTheme::plain(),
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_header(title));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", self.theme.format_hint(hint));
    }

    fn pause(&mut self) -> Result<()> {
        tracing::debug!("Skipping pause in non-interactive mode");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .ok_or_else(|| TexkitError::MissingInput {
                key: prompt.key.clone(),
            })?;

        tracing::debug!("Answering prompt '{}' with '{}'", prompt.key, answer);
        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_bool(answer)),
            PromptType::Input => PromptResult::String(answer.clone()),
        })
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::hidden())
    }
}
