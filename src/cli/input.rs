//! User input utilities for interactive CLI prompts
//!
//! The prompter is generic over its input and output so sessions can be
//! driven from tests as well as from a terminal.

use crate::{Error, Result};
use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-based prompt reader/writer
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `message` and read one non-blank answer
    ///
    /// Blank answers re-prompt. Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", message)
                .and_then(|_| self.output.flush())
                .map_err(|e| Error::io("Failed to write prompt", e))?;

            let mut answer = String::new();
            let bytes = self
                .input
                .read_line(&mut answer)
                .map_err(|e| Error::io("Failed to read user input", e))?;

            if bytes == 0 {
                return Ok(None);
            }

            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_string()));
            }
        }
    }

    /// Write one status line
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message).map_err(|e| Error::io("Failed to write output", e))
    }

    /// Consume the prompter, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_returns_trimmed_answer() {
        let mut prompter = Prompter::new(Cursor::new("  items.csv \n"), Vec::new());

        let answer = prompter.prompt("Enter Items CSV file: ").unwrap();

        assert_eq!(answer.as_deref(), Some("items.csv"));
        assert_eq!(
            String::from_utf8(prompter.into_output()).unwrap(),
            "Enter Items CSV file: "
        );
    }

    #[test]
    fn test_prompt_skips_blank_answers() {
        let mut prompter = Prompter::new(Cursor::new("\n \t\norders.csv\n"), Vec::new());

        assert_eq!(
            prompter.prompt("> ").unwrap().as_deref(),
            Some("orders.csv")
        );
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "> > > ");
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_say_writes_line() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        prompter.say("done").unwrap();

        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "done\n");
    }
}
