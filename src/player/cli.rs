#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use rand::Rng;
use thiserror::Error;

use crate::core::{ActorKind, Coordinate};

use super::Player;

/// Malformed target input. Never reaches the board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("enter exactly 2 coordinates, got {0}")]
    TokenCount(usize),
    #[error("coordinates must be non-negative numbers, got {0:?}")]
    NotANumber(String),
}

/// Parse a whitespace separated, 1-indexed `row col` pair into a board coordinate.
///
/// Only the format is checked; `0` or oversized values parse and are left for the
/// board to reject as out of bounds.
pub fn parse_target(line: &str) -> Result<Coordinate, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(FormatError::TokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, FormatError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::NotANumber(token.to_string()));
    }
    // All digits, so parsing can only fail on overflow.
    Ok(token.parse().unwrap_or(i32::MAX))
}

/// Human player reading targets line by line.
pub struct CliPlayer<B, W> {
    input: B,
    output: W,
    buf: String,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<B: BufRead, W: Write> CliPlayer<B, W> {
    pub fn new(input: B, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Give back the output stream, e.g. to inspect prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt and read one line. Fails when the input is exhausted.
    fn read_line(&mut self) -> anyhow::Result<&str> {
        write!(self.output, "Your move (row col): ")?;
        self.output.flush()?;
        self.buf.clear();
        let read = self
            .input
            .read_line(&mut self.buf)
            .context("failed to read move")?;
        if read == 0 {
            writeln!(self.output)?;
            bail!("input closed before the match ended");
        }
        Ok(self.buf.trim())
    }
}

impl<B: BufRead, W: Write> Player for CliPlayer<B, W> {
    fn kind(&self) -> ActorKind {
        ActorKind::Human
    }

    fn choose_target<R: Rng>(&mut self, _rng: &mut R, _size: usize) -> anyhow::Result<Coordinate> {
        loop {
            let parsed = parse_target(self.read_line()?);
            match parsed {
                Ok(target) => return Ok(target),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }
}
