use std::io::{BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::PromptError;

/// Where replies come from. Implementations show `prompt` and block for the
/// next line, returned without its line terminator.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String, PromptError>;
}

/// Reads plain lines from any buffered reader, echoing prompts to `out` the
/// way a non-interactive console does.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String, PromptError> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

/// Terminal line editor with in-session history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, PromptError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String, PromptError> {
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(PromptError::Interrupted),
            Err(ReadlineError::Eof) => Err(PromptError::InputClosed),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_source_echoes_prompt_and_strips_terminator() {
        let mut source = ScriptSource::new(Cursor::new("first\r\nsecond\n"));
        let mut out = Vec::new();
        assert_eq!(source.read_line("A: ", &mut out).unwrap(), "first");
        assert_eq!(source.read_line("B: ", &mut out).unwrap(), "second");
        assert_eq!(String::from_utf8(out).unwrap(), "A: B: ");
    }

    #[test]
    fn script_source_reports_closed_input() {
        let mut source = ScriptSource::new(Cursor::new(""));
        let mut out = Vec::new();
        let err = source.read_line("A: ", &mut out).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }

    #[test]
    fn last_line_without_newline_is_returned() {
        let mut source = ScriptSource::new(Cursor::new("done"));
        let mut out = Vec::new();
        assert_eq!(source.read_line("", &mut out).unwrap(), "done");
    }
}
