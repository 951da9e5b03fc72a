//! Interactive prompts.

use console::Term;
use dialoguer::{Input, Password};

use crate::error::{ProofError, Result};

use super::{Prompt, PromptType};

/// Convert dialoguer errors to ProofError.
fn map_dialoguer_err(e: dialoguer::Error) -> ProofError {
    ProofError::Io(e.into())
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    match prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Secret => prompt_secret(prompt, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)
}

fn prompt_secret(prompt: &Prompt, term: &Term) -> Result<String> {
    Password::new()
        .with_prompt(&prompt.question)
        .allow_empty_password(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
