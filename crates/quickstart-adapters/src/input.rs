//! Scripted answers for non-interactive runs and tests.

use std::collections::VecDeque;

use quickstart_core::{QuickstartResult, application::ports::PromptIo};

/// A [`PromptIo`] that replays a fixed list of answer lines.
///
/// Every prompt and notice is recorded. Once the answers run out,
/// `read_line` reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// One answer per line of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PromptIo for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> QuickstartResult<Option<String>> {
        self.prompts.push(prompt.to_owned());
        Ok(self.answers.pop_front())
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }
}
