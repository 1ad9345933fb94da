use std::env;

use crate::cli::output::OutputPreferences;
use crate::currency::{CurrencyCode, LocaleConfig};

pub const SCRIPT_ENV: &str = "BUDGET_ASSISTANT_SCRIPT";
pub const CURRENCY_ENV: &str = "BUDGET_ASSISTANT_CURRENCY";
pub const HIGH_CONTRAST_ENV: &str = "BUDGET_ASSISTANT_HIGH_CONTRAST";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// How the session reads its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// Line editor on a terminal.
    Interactive,
    /// Plain lines from a pipe or file; prompts are echoed to stdout.
    Script,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub output: OutputPreferences,
    pub mode: CliMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            locale: LocaleConfig::default(),
            output: OutputPreferences::default(),
            mode: CliMode::Script,
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment. `stdin_is_terminal`
    /// picks the input mode unless script mode is forced.
    pub fn from_env(stdin_is_terminal: bool) -> Self {
        Self::from_lookup(stdin_is_terminal, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(stdin_is_terminal: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        settings.mode = if lookup(SCRIPT_ENV).is_some() || !stdin_is_terminal {
            CliMode::Script
        } else {
            CliMode::Interactive
        };

        if let Some(code) = lookup(CURRENCY_ENV).filter(|code| !code.trim().is_empty()) {
            settings.currency = CurrencyCode::new(code);
        }

        settings.output.plain_mode = lookup(NO_COLOR_ENV).is_some_and(|value| !value.is_empty());
        settings.output.high_contrast_mode = lookup(HIGH_CONTRAST_ENV).is_some_and(is_truthy);

        tracing::debug!(
            mode = ?settings.mode,
            currency = settings.currency.as_str(),
            plain = settings.output.plain_mode,
            "settings resolved"
        );
        settings
    }
}

fn is_truthy(value: String) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
