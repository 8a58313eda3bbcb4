//! Interactive console prompts.
//!
//! Generic over the reader and writer so the question flow can be driven from
//! in-memory buffers.

use anyhow::{bail, Result};
use smoothcast_core::prelude::SimpleExponentialSmoothing;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Where the series should come from when no CSV file was given.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceChoice {
    /// Fetch the default ticker and window remotely
    Remote,
    /// Read a CSV file the user typed in
    Csv(PathBuf),
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `question` and read one trimmed line; `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_required(&mut self, question: &str) -> Result<String> {
        match self.ask(question)? {
            Some(answer) => Ok(answer),
            None => bail!("input closed before an answer was given"),
        }
    }

    /// Ask whether to use the remote defaults, or which CSV file to read.
    ///
    /// A typed path that does not exist sends the user back to the first
    /// question.
    pub fn choose_source(&mut self, description: &str) -> Result<SourceChoice> {
        loop {
            let answer = self.ask_required(&format!(
                "No CSV file was provided. Do you want to accept default values ({})? [Y/n]: ",
                description
            ))?;

            match answer.to_lowercase().as_str() {
                "y" => return Ok(SourceChoice::Remote),
                "n" => {
                    let path = PathBuf::from(
                        self.ask_required("Please provide the path to a CSV file: ")?,
                    );
                    if path.is_file() {
                        return Ok(SourceChoice::Csv(path));
                    }
                    writeln!(self.output, "CSV file does not exist.")?;
                }
                _ => writeln!(
                    self.output,
                    "Incorrect option provided. Please enter either \"Y\" or \"n\""
                )?,
            }
        }
    }

    /// Read a smoothing factor, re-asking until it parses and lies in (0, 1].
    ///
    /// An empty answer takes `suggested` when one is available.
    pub fn read_alpha(&mut self, suggested: Option<f64>) -> Result<f64> {
        let question = match suggested {
            Some(alpha) => format!(
                "Please enter an alpha value for Exponential Smoothing [{}]: ",
                alpha
            ),
            None => "Please enter an alpha value for Exponential Smoothing: ".to_string(),
        };

        loop {
            let answer = self.ask_required(&question)?;
            let parsed = match (answer.is_empty(), suggested) {
                (true, Some(alpha)) => Ok(alpha),
                _ => answer.parse::<f64>().map_err(|e| e.to_string()),
            };

            match parsed.and_then(|a| {
                SimpleExponentialSmoothing::new(a)
                    .map(|ses| ses.alpha())
                    .map_err(|e| e.to_string())
            }) {
                Ok(alpha) => return Ok(alpha),
                Err(reason) => writeln!(self.output, "Invalid alpha '{}': {}", answer, reason)?,
            }
        }
    }

    /// Yes/no question: `y` accepts, anything else rejects.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask_required(question)?;
        match answer.to_lowercase().as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => {
                writeln!(self.output, "Assuming \"n\"")?;
                Ok(false)
            }
        }
    }
}
