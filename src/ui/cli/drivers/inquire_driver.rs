use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, InquireError, Text};

pub struct InquireDriver;

/// Esc or Ctrl-C on a yes/no question means "no", so leaving the loop never
/// surfaces as an error.
fn cancel_means_no(answer: Result<bool, InquireError>) -> Result<bool> {
    match answer {
        Ok(yes) => Ok(yes),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        let placeholder = if default { "Y/n" } else { "y/N" };
        cancel_means_no(
            Confirm::new(title)
                .with_default(default)
                .with_placeholder(placeholder)
                .with_help_message(help)
                .prompt(),
        )
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        let mut q = Text::new(title).with_help_message(help);
        if !default.is_empty() {
            q = q.with_initial_value(default);
        }
        Ok(q.prompt()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_ends_the_loop_quietly() {
        assert!(!cancel_means_no(Err(InquireError::OperationCanceled)).unwrap());
        assert!(!cancel_means_no(Err(InquireError::OperationInterrupted)).unwrap());
        assert!(cancel_means_no(Ok(true)).unwrap());
    }

    #[test]
    fn terminal_failures_still_propagate() {
        assert!(cancel_means_no(Err(InquireError::NotTTY)).is_err());
    }
}
