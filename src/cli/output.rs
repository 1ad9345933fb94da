use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Tip,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
}

/// Applies colour to console lines. Styling never changes the text itself, so
/// transcripts compare equal with colour on or off.
#[derive(Clone, Copy, Debug, Default)]
pub struct Styler {
    prefs: OutputPreferences,
}

impl Styler {
    pub fn new(prefs: OutputPreferences) -> Self {
        Self { prefs }
    }

    pub fn plain() -> Self {
        Self::new(OutputPreferences {
            plain_mode: true,
            high_contrast_mode: false,
        })
    }

    pub fn apply(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = message.to_string();

        if self.prefs.plain_mode || matches!(kind, MessageKind::Info | MessageKind::Separator) {
            return text;
        }

        if self.prefs.high_contrast_mode {
            return text.bold().to_string();
        }

        match kind {
            MessageKind::Success => text.bright_green().to_string(),
            MessageKind::Warning => text.bright_yellow().to_string(),
            MessageKind::Tip => text.bright_cyan().to_string(),
            MessageKind::Section => text.bold().to_string(),
            MessageKind::Info | MessageKind::Separator => text,
        }
    }
}

pub fn section_title(title: impl fmt::Display) -> String {
    format!("=== {} ===", title)
}
