//! Prompt engine - typed questions with retry until a valid answer.
//!
//! Answers come from an injected [`PromptIo`], so the loops are driven by
//! a terminal in production and by a finite script in tests. An exhausted
//! script ends the run with `InputClosed` instead of spinning forever.

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{PromptIo, TimezoneDatabase},
    },
    domain::{
        Answer, AnswerKind, DomainError, Parsed, TimezoneIndex,
        answer::{bool_hint, parse_bool, parse_integer, parse_text},
    },
    error::QuickstartResult,
};

/// Asks questions over a [`PromptIo`] until each one gets a valid answer.
pub struct PromptEngine<'a> {
    io: &'a mut dyn PromptIo,
    /// Rejected answers allowed per question; 0 means unlimited.
    max_attempts: u32,
}

impl<'a> PromptEngine<'a> {
    pub fn new(io: &'a mut dyn PromptIo) -> Self {
        Self {
            io,
            max_attempts: 0,
        }
    }

    /// Cap the number of rejected answers per question (0 = unlimited).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Pass a status line through to the user.
    pub fn notice(&mut self, message: &str) {
        self.io.notice(message);
    }

    /// Ask a question whose kind is chosen at runtime.
    ///
    /// A `default` of a different kind than `kind` is a caller bug and is
    /// reported as `InvalidArgument` before anything is shown.
    pub fn ask(
        &mut self,
        question: &str,
        kind: AnswerKind,
        default: Option<&Answer>,
        length: Option<usize>,
    ) -> QuickstartResult<Answer> {
        if let Some(d) = default {
            if d.kind() != kind {
                return Err(ApplicationError::InvalidArgument {
                    kind,
                    default_kind: d.kind(),
                }
                .into());
            }
        }

        match (kind, default) {
            (AnswerKind::Text, Some(Answer::Text(d))) => {
                self.ask_text(question, Some(d.as_str()), length).map(Answer::Text)
            }
            (AnswerKind::Text, _) => self.ask_text(question, None, length).map(Answer::Text),
            (AnswerKind::Bool, d) => self
                .ask_bool(question, d.and_then(Answer::as_bool))
                .map(Answer::Bool),
            (AnswerKind::Integer, d) => self
                .ask_int(question, d.and_then(Answer::as_integer))
                .map(Answer::Integer),
        }
    }

    /// Free-text question. Empty input yields `default`; `length` demands
    /// an exact character count.
    #[instrument(skip(self))]
    pub fn ask_text(
        &mut self,
        question: &str,
        default: Option<&str>,
        length: Option<usize>,
    ) -> QuickstartResult<String> {
        let prompt = match default {
            Some(d) if !d.is_empty() => format!("> {question} [{d}] "),
            _ => format!("> {question} "),
        };
        self.ask_until(question, &prompt, |line| {
            parse_text(line, default, length).map(Parsed::Value)
        })
    }

    /// Yes/no question.
    #[instrument(skip(self))]
    pub fn ask_bool(&mut self, question: &str, default: Option<bool>) -> QuickstartResult<bool> {
        let prompt = format!("> {question} {} ", bool_hint(default));
        self.ask_until(question, &prompt, |line| parse_bool(line, default))
    }

    /// Integer question.
    #[instrument(skip(self))]
    pub fn ask_int(&mut self, question: &str, default: Option<i64>) -> QuickstartResult<i64> {
        let prompt = match default {
            Some(d) => format!("> {question} [{d}] "),
            None => format!("> {question} "),
        };
        self.ask_until(question, &prompt, |line| parse_integer(line, default))
    }

    /// Time zone question, answered with the canonical zone name.
    ///
    /// Matching ignores case and treats spaces as underscores.
    #[instrument(skip(self, database))]
    pub fn ask_timezone(
        &mut self,
        question: &str,
        default: &str,
        database: &dyn TimezoneDatabase,
        help_url: &str,
    ) -> QuickstartResult<String> {
        let index = TimezoneIndex::new(database.names());
        debug!(zones = index.len(), "Time zone index built");

        let mut rejected = 0;
        loop {
            let answer = self.ask_text(question, Some(default), None)?;
            match index.resolve(&answer, help_url) {
                Ok(canonical) => return Ok(canonical),
                Err(e) => {
                    rejected += 1;
                    self.reject(question, &e, rejected)?;
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ask_until<T>(
        &mut self,
        question: &str,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<Parsed<T>, DomainError>,
    ) -> QuickstartResult<T> {
        let mut rejected = 0;
        loop {
            let Some(line) = self.io.read_line(prompt)? else {
                return Err(ApplicationError::InputClosed {
                    question: question.to_owned(),
                }
                .into());
            };

            let error = match parse(&line) {
                Ok(Parsed::Value(v)) => return Ok(v),
                Ok(Parsed::Empty) => DomainError::EmptyAnswer,
                Err(e) => e,
            };
            rejected += 1;
            self.reject(question, &error, rejected)?;
        }
    }

    fn reject(&mut self, question: &str, error: &DomainError, rejected: u32) -> QuickstartResult<()> {
        debug!(%question, %error, rejected, "Answer rejected");
        self.io.notice(&error.to_string());

        if self.max_attempts > 0 && rejected >= self.max_attempts {
            return Err(ApplicationError::TooManyAttempts {
                question: question.to_owned(),
                attempts: rejected,
            }
            .into());
        }
        Ok(())
    }
}
