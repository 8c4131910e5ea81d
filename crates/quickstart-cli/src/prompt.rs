//! Terminal input adapters for [`PromptIo`].
//!
//! [`StdinPrompt`] reads plain lines and works with piped answers.
//! `DialoguerPrompt` (feature `interactive`) gives line editing on a TTY.

use std::io::{self, BufRead, Write};

use quickstart_core::{QuickstartResult, application::ApplicationError, application::ports::PromptIo};

/// Line-oriented prompts over any reader/writer pair.
pub struct StdinPrompt<R, W> {
    reader: R,
    writer: W,
}

impl StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompts on stdout, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> PromptIo for StdinPrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> QuickstartResult<Option<String>> {
        write!(self.writer, "{prompt}")
            .and_then(|()| self.writer.flush())
            .map_err(input_failed)?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).map_err(input_failed)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn notice(&mut self, message: &str) {
        // Best effort: a lost notice never fails the run.
        let _ = writeln!(self.writer, "{message}");
    }
}

fn input_failed(e: io::Error) -> quickstart_core::QuickstartError {
    ApplicationError::InputFailed {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompt;

#[cfg(feature = "interactive")]
mod interactive {
    use std::io;

    use console::Term;
    use dialoguer::{Input, theme::ColorfulTheme};

    use quickstart_core::{QuickstartResult, application::ports::PromptIo};

    use super::input_failed;

    /// Prompts rendered by `dialoguer` on the terminal.
    pub struct DialoguerPrompt {
        theme: ColorfulTheme,
        term: Term,
    }

    impl DialoguerPrompt {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
                term: Term::stdout(),
            }
        }
    }

    impl PromptIo for DialoguerPrompt {
        fn read_line(&mut self, prompt: &str) -> QuickstartResult<Option<String>> {
            // The theme draws its own prompt marker.
            let text = prompt.trim_start_matches("> ").trim_end();

            let answer = Input::<String>::with_theme(&self.theme)
                .with_prompt(text)
                .allow_empty(true)
                .interact_text_on(&self.term);

            match answer {
                Ok(line) => Ok(Some(line)),
                Err(dialoguer::Error::IO(e))
                    if matches!(
                        e.kind(),
                        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                    ) =>
                {
                    Ok(None)
                }
                Err(dialoguer::Error::IO(e)) => Err(input_failed(e)),
            }
        }

        fn notice(&mut self, message: &str) {
            let _ = self.term.write_line(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, prompts: &[&str]) -> (Vec<Option<String>>, String) {
        let mut out = Vec::new();
        let answers = {
            let mut prompt = StdinPrompt::new(input.as_bytes(), &mut out);
            prompts
                .iter()
                .map(|p| prompt.read_line(p).unwrap())
                .collect()
        };
        (answers, String::from_utf8(out).unwrap())
    }

    #[test]
    fn strips_line_endings() {
        let (answers, _) = run("Meu Blog\r\nAna\n", &["> a ", "> b "]);
        assert_eq!(answers, vec![Some("Meu Blog".into()), Some("Ana".into())]);
    }

    #[test]
    fn empty_line_is_an_empty_answer() {
        let (answers, _) = run("\n", &["> a "]);
        assert_eq!(answers, vec![Some(String::new())]);
    }

    #[test]
    fn end_of_input_is_none() {
        let (answers, _) = run("pt", &["> a ", "> b "]);
        assert_eq!(answers, vec![Some("pt".into()), None]);
    }

    #[test]
    fn prompts_and_notices_are_written() {
        let mut out = Vec::new();
        {
            let mut prompt = StdinPrompt::new("x\n".as_bytes(), &mut out);
            prompt.read_line("> Título? ").unwrap();
            prompt.notice("Deve ser inserido um valor");
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "> Título? Deve ser inserido um valor\n"
        );
    }
}
