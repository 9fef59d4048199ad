//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::{Result, TexkitError};

use super::{parse_bool, Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to TexkitError.
fn map_dialoguer_err(e: dialoguer::Error) -> TexkitError {
    TexkitError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt.default.as_deref().map(parse_bool).unwrap_or(false);

    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme).with_prompt(&prompt.question);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_text_on(term).map_err(map_dialoguer_err)?
    };

    Ok(PromptResult::String(clean_path_answer(&result)))
}

/// Strip surrounding whitespace and the quotes a pasted Windows path carries.
pub fn clean_path_answer(answer: &str) -> String {
    answer.trim().trim_matches('"').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quotes_from_pasted_paths() {
        assert_eq!(
            clean_path_answer("  \"C:\\Games\\GH3\\global.pab.xen\"  "),
            "C:\\Games\\GH3\\global.pab.xen"
        );
    }

    #[test]
    fn leaves_plain_answers_alone() {
        assert_eq!(clean_path_answer("extracted_dds"), "extracted_dds");
        assert_eq!(clean_path_answer(""), "");
    }
}
