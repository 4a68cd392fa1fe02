//! Line-based prompting over any reader/writer pair.
//!
//! Generic over `BufRead`/`Write` so the menu can run against stdin/stdout
//! or against in-memory buffers in tests.

use anyhow::{Context, Result};
use recommender::{Answer, AnswerSource};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for normal output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `text` without a newline and read one line.
    ///
    /// Returns `None` once input is exhausted. The line is trimmed, and bytes
    /// that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Prompt for a value parsed with `FromStr`.
    ///
    /// `Ok(Some(Err(raw)))` hands back input that did not parse.
    pub fn prompt_parsed<T: FromStr>(
        &mut self,
        text: &str,
    ) -> Result<Option<std::result::Result<T, String>>> {
        Ok(self
            .prompt(text)?
            .map(|raw| raw.parse::<T>().map_err(|_| raw)))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> AnswerSource for Console<R, W> {
    fn answer(&mut self, question: &str) -> Option<Answer> {
        match self.prompt(&format!("{} (y/n): ", question)) {
            Ok(line) => line.map(|raw| Answer::from_input(&raw)),
            Err(err) => {
                warn!("Failed to read answer: {:#}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut console = console("  Movie 1 \nnext\n");

        assert_eq!(console.prompt("Title: ").unwrap().as_deref(), Some("Movie 1"));
        assert_eq!(console.prompt("Again: ").unwrap().as_deref(), Some("next"));
        assert_eq!(console.prompt("Done: ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Title: Again: Done: ");
    }

    #[test]
    fn test_prompt_survives_invalid_utf8() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\nok\n".to_vec()), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("ok"));
    }

    #[test]
    fn test_prompt_parsed() {
        let mut console = console("3\nabc\n");

        assert_eq!(console.prompt_parsed::<u32>("n: ").unwrap(), Some(Ok(3)));
        assert_eq!(
            console.prompt_parsed::<u32>("n: ").unwrap(),
            Some(Err("abc".to_string()))
        );
        assert_eq!(console.prompt_parsed::<u32>("n: ").unwrap(), None);
    }

    #[test]
    fn test_answers_from_console() {
        let mut console = console("y\nwhatever\n");

        assert_eq!(console.answer("Q1?"), Some(Answer::Yes));
        assert_eq!(console.answer("Q2?"), Some(Answer::No));
        assert_eq!(console.answer("Q3?"), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.starts_with("Q1? (y/n): Q2? (y/n): "));
    }
}
