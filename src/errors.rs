use thiserror::Error;

/// A reply that fails a prompt's constraint. The message is shown to the user
/// verbatim before the prompt is repeated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("That wasn't a number. Try again.")]
    NotANumber,
    #[error("Please enter a number that is 0 or greater.")]
    Negative,
    #[error("Please enter a number greater than 0.")]
    NotPositive,
    #[error("Please enter a whole number.")]
    NotWholeNumber,
    #[error("Please enter a whole number >= {min}.")]
    BelowMinimum { min: i64 },
    #[error("Please enter a non-empty value.")]
    Empty,
}

/// Failures of the input stream itself. These end the session.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("interrupted")]
    Interrupted,
    #[error("input closed before the budget was complete")]
    InputClosed,
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// True when the user interrupted the session (Ctrl-C).
    pub fn is_interrupt(&self) -> bool {
        matches!(self, CliError::Prompt(PromptError::Interrupted))
    }
}
