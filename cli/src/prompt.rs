use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use stashmark::error::{Result, StashError};

/// Source of answers for the interactive flows
pub trait Prompt {
    /// Show `prompt` and read one trimmed line. `None` means input ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal prompt backed by rustyline
pub struct LinePrompt {
    editor: DefaultEditor,
    color: bool,
}

impl LinePrompt {
    pub fn new(color: bool) -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| StashError::Prompt(e.to_string()))?;
        Ok(Self { editor, color })
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let shown = if self.color {
            prompt.yellow().to_string()
        } else {
            prompt.to_string()
        };

        match self.editor.readline(&shown) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(|e| StashError::Prompt(e.to_string()))?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(StashError::Prompt(err.to_string())),
        }
    }
}

/// Ask and require an answer; ended input becomes `InputClosed`
pub fn ask(prompt: &mut dyn Prompt, text: &str) -> Result<String> {
    prompt.read_line(text)?.ok_or(StashError::InputClosed)
}

/// Replays canned answers; runs out like an EOF
#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front().map(|a| a.trim().to_string()))
    }
}
