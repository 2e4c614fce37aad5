use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

/// Shown when a numeric answer does not parse.
pub const INVALID_NUMBER: &str = "Valor inválido, ingrese un número.";

/// Why a prompt could not produce a value.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("end of input")]
    EndOfInput,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented console over any reader/writer pair.
///
/// Malformed answers are reported and the same question is asked again;
/// only end of input or an I/O failure ends a prompt early.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `label` without a newline and reads one line, minus the line ending.
    pub fn read_line(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks until `parse` accepts the trimmed answer. Rejections print the
    /// parser's message.
    pub fn prompt_with<T, F>(&mut self, label: &str, parse: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let line = self.read_line(label)?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, PromptError> {
        self.prompt_with(label, |answer| {
            answer.parse::<T>().map_err(|_| INVALID_NUMBER.to_string())
        })
    }

    /// `s`/`si`/`sí` in any case is yes; anything else is no.
    pub fn prompt_yes_no(&mut self, label: &str) -> Result<bool, PromptError> {
        let answer = self.read_line(label)?.trim().to_lowercase();
        Ok(matches!(answer.as_str(), "s" | "si" | "sí"))
    }
}
