//! Prompt-until-valid readers. Every rejected reply prints a corrective
//! message and repeats the same prompt; only a closed or interrupted input
//! stream reaches the caller.

mod source;

pub use source::{EditorSource, LineSource, ScriptSource};

use std::fmt;
use std::io::{self, Write};

use crate::cli::output::{MessageKind, Styler};
use crate::errors::{InputError, PromptError};

/// Lower bound used when asking for a count of things.
pub const DEFAULT_MIN_COUNT: i64 = 1;

/// Parses a money amount. Zero is accepted only when `allow_zero` is set;
/// negative and non-finite values never are.
pub fn parse_amount(raw: &str, allow_zero: bool) -> Result<f64, InputError> {
    let value: f64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if allow_zero {
        if value < 0.0 {
            return Err(InputError::Negative);
        }
    } else if value <= 0.0 {
        return Err(InputError::NotPositive);
    }
    // normalise -0.0 so it never renders as "-0.00"
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Parses a whole number no smaller than `min`.
pub fn parse_integer_at_least(raw: &str, min: i64) -> Result<i64, InputError> {
    let value: i64 = raw.trim().parse().map_err(|_| InputError::NotWholeNumber)?;
    if value < min {
        return Err(InputError::BelowMinimum { min });
    }
    Ok(value)
}

/// Returns the trimmed text, rejecting blank replies.
pub fn parse_non_empty(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed.to_string())
}

/// A line source paired with the writer that receives prompts and messages.
pub struct Console<S, W> {
    source: S,
    out: W,
    styler: Styler,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W, styler: Styler) -> Self {
        Self {
            source,
            out,
            styler,
        }
    }

    /// Reads one raw line with no validation.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.source.read_line(prompt, &mut self.out)
    }

    pub fn read_amount(&mut self, prompt: &str, allow_zero: bool) -> Result<f64, PromptError> {
        self.read_valid(prompt, |raw| parse_amount(raw, allow_zero))
    }

    pub fn read_integer_at_least(&mut self, prompt: &str, min: i64) -> Result<i64, PromptError> {
        self.read_valid(prompt, |raw| parse_integer_at_least(raw, min))
    }

    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.read_valid(prompt, parse_non_empty)
    }

    fn read_valid<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            let raw = self.read_line(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(prompt, reply = raw.as_str(), %err, "rejected reply");
                    self.say(MessageKind::Info, err)?;
                }
            }
        }
    }

    pub fn say(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}", self.styler.apply(kind, message))
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn styler(&self) -> Styler {
        self.styler
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
