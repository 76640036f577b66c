//! Interactive prompts for values not supplied on the command line.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;

/// Prompt for the destination folder. `None` means the operator cancelled.
pub fn prompt_destination() -> Result<Option<String>, AppError> {
    read_line("Enter the destination folder path", "destination path")
}

/// Prompt for the project name. `None` means the operator cancelled.
pub fn prompt_project_name() -> Result<Option<String>, AppError> {
    read_line("Enter Project Name", "project name")
}

/// Empty input is allowed through so the caller's validation can reject it
/// with the same error as an empty command-line flag.
fn read_line(prompt: &str, label: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", label, err))),
    }
}
