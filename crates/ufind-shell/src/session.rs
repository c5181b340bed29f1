//! Interactive session — one filter kind prompt, one query prompt, one result block.
//!
//! ```text
//! kind? ──► name  ──► query? ──► filter_by_name  ──┐
//!       ├─► age   ──► query? ──► filter_by_age   ──┼──► print_users
//!       │                          └─► invalid ──► message
//!       ├─► email ──► query? ──► filter_by_email ──┘
//!       └─► other ──► unsupported message
//! ```
//!
//! The session runs once and never re-prompts. Either prompt can be answered
//! up front (`--by` / `--query`); a preset answer skips printing its prompt.

use crate::output::print_users;
use std::io::{self, BufRead, Write};
use ufind_core::{
    config::OutputFormat, filter_by_age, filter_by_email, filter_by_name, FilterKind, UserRecord,
};

pub const KIND_PROMPT: &str = "What would you like to filter by? ('name', 'age' or 'email'): ";
pub const NAME_PROMPT: &str = "Enter a name to filter users: ";
pub const AGE_PROMPT: &str = "Enter an age filter (e.g., '30', '>30', '<=25', '21-29'): ";
pub const EMAIL_PROMPT: &str = "Enter an email or @domain to filter users: ";
pub const UNSUPPORTED: &str =
    "Filtering by that option is not supported. Use 'name', 'age' or 'email'.";

/// How a session ended. None of these are failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one record was printed.
    Matched(usize),
    /// The filter ran and the no-match message was printed.
    NoMatches,
    /// The age expression did not parse; its message was printed.
    InvalidExpression,
    /// The filter kind was not recognised.
    Unsupported,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
    preset_kind: Option<String>,
    preset_query: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            format: OutputFormat::default(),
            preset_kind: None,
            preset_query: None,
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Answer the filter kind prompt in advance.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.preset_kind = Some(kind.into());
        self
    }

    /// Answer the query prompt in advance.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.preset_query = Some(query.into());
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt, filter `users`, and print the result.
    ///
    /// Only console I/O errors are returned; an invalid age expression is
    /// reported on the console and surfaces as [`Outcome::InvalidExpression`].
    pub fn run(&mut self, users: &[UserRecord]) -> io::Result<Outcome> {
        let preset = self.preset_kind.take();
        let answer = self.ask(KIND_PROMPT, preset)?;

        let Some(kind) = FilterKind::parse(&answer) else {
            tracing::debug!(answer = %answer, "session: unsupported filter kind");
            writeln!(self.output, "{UNSUPPORTED}")?;
            return Ok(Outcome::Unsupported);
        };

        let prompt = match kind {
            FilterKind::Name => NAME_PROMPT,
            FilterKind::Age => AGE_PROMPT,
            FilterKind::Email => EMAIL_PROMPT,
        };
        let preset = self.preset_query.take();
        let query = self.ask(prompt, preset)?;

        let matched = match kind {
            FilterKind::Name => filter_by_name(&query, users),
            FilterKind::Email => filter_by_email(&query, users),
            FilterKind::Age => match filter_by_age(&query, users) {
                Ok(matched) => matched,
                Err(err) => {
                    tracing::debug!(expr = %err.expr, "session: invalid age expression");
                    writeln!(self.output, "{err}")?;
                    return Ok(Outcome::InvalidExpression);
                }
            },
        };

        print_users(&mut self.output, &matched, self.format)?;
        self.output.flush()?;

        let outcome = if matched.is_empty() {
            Outcome::NoMatches
        } else {
            Outcome::Matched(matched.len())
        };
        tracing::debug!(%kind, query = %query, ?outcome, "session: finished");
        Ok(outcome)
    }

    /// Print `prompt` and read one trimmed line. End of input reads as "".
    fn ask(&mut self, prompt: &str, preset: Option<String>) -> io::Result<String> {
        if let Some(answer) = preset {
            return Ok(answer.trim().to_string());
        }
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
