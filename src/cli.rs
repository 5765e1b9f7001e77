//! Terminal input: setup prompts and turn commands.
//!
//! The parsers are pure functions. [`Prompter`] wraps any reader/writer pair
//! and keeps asking until it gets valid input, so it can be driven by stdin
//! or by a byte buffer in tests.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::common::{ConfigError, Coord, Dimensions};
use crate::config::{GameConfig, MAX_DIMENSION};
use crate::vessel::VesselKind;

/// Rejected turn input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("expected three non-negative integers 'row col layer', got '{0}'")]
    Malformed(String),
    #[error("target {target} is outside the {dimensions} board")]
    OutOfBounds {
        target: Coord,
        dimensions: Dimensions,
    },
}

/// One line of turn input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Coord),
    /// Show the player's own board.
    Show,
    Quit,
}

fn parse_integer(text: &str) -> Result<i64, ConfigError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| ConfigError::NotANumber(text.to_string()))
}

/// Parse a board dimension in `1..=MAX_DIMENSION`.
pub fn parse_dimension(axis: &'static str, text: &str) -> Result<usize, ConfigError> {
    let value = parse_integer(text)?;
    if value <= 0 {
        return Err(ConfigError::NonPositiveDimension { axis, value });
    }
    match usize::try_from(value) {
        Ok(size) if size <= MAX_DIMENSION => Ok(size),
        _ => Err(ConfigError::DimensionTooLarge {
            axis,
            value,
            max: MAX_DIMENSION,
        }),
    }
}

/// Parse a piece count. Zero is allowed.
pub fn parse_count(kind: VesselKind, text: &str) -> Result<usize, ConfigError> {
    let value = parse_integer(text)?;
    if value < 0 {
        return Err(ConfigError::NegativeCount { kind, value });
    }
    usize::try_from(value).map_err(|_| ConfigError::NotANumber(text.trim().to_string()))
}

/// Parse `row col layer`, separated by whitespace and/or commas, and check it
/// against `dimensions`.
pub fn parse_target(text: &str, dimensions: Dimensions) -> Result<Coord, TargetError> {
    let malformed = || TargetError::Malformed(text.trim().to_string());
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let &[row, col, layer] = parts.as_slice() else {
        return Err(malformed());
    };
    let index = |part: &str| part.parse::<usize>().map_err(|_| malformed());
    let target = Coord::new(index(row)?, index(col)?, index(layer)?);
    if !dimensions.contains(target) {
        return Err(TargetError::OutOfBounds { target, dimensions });
    }
    Ok(target)
}

/// Parse a turn command: `show`, `quit` or a target.
pub fn parse_command(text: &str, dimensions: Dimensions) -> Result<Command, TargetError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "show" | "s" => Ok(Command::Show),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => parse_target(text, dimensions).map(Command::Fire),
    }
}

/// Prompting front end over a line reader and a writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line of output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Print `prompt` and read one trimmed line. End of input is an
    /// [`io::ErrorKind::UnexpectedEof`] error.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    pub fn read_dimension(&mut self, axis: &'static str) -> io::Result<usize> {
        loop {
            let line = self.ask(&format!("Number of {}: ", axis))?;
            match parse_dimension(axis, &line) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(format!("Invalid input: {}", err))?,
            }
        }
    }

    /// Rows then columns.
    pub fn read_dimensions(&mut self) -> io::Result<(usize, usize)> {
        let rows = self.read_dimension("rows")?;
        let cols = self.read_dimension("cols")?;
        Ok((rows, cols))
    }

    pub fn read_count(&mut self, kind: VesselKind) -> io::Result<usize> {
        loop {
            let line = self.ask(&format!("Number of {}s: ", kind))?;
            match parse_count(kind, &line) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(format!("Invalid input: {}", err))?,
            }
        }
    }

    /// One count per configurable kind, in fleet order.
    pub fn read_counts(&mut self) -> io::Result<Vec<(VesselKind, usize)>> {
        VesselKind::FLEET
            .iter()
            .map(|&kind| self.read_count(kind).map(|count| (kind, count)))
            .collect()
    }

    /// Interactive setup: board size, then the fleet. Everything else is
    /// taken from `base`.
    pub fn read_config(&mut self, base: GameConfig) -> io::Result<GameConfig> {
        let (rows, cols) = self.read_dimensions()?;
        let counts = self.read_counts()?;
        Ok(counts
            .into_iter()
            .fold(base.with_size(rows, cols), |config, (kind, count)| {
                config.with_count(kind, count)
            }))
    }

    pub fn read_command(&mut self, dimensions: Dimensions) -> io::Result<Command> {
        loop {
            let line = self.ask("Target 'row col layer' ('show' for your board, 'quit' to leave): ")?;
            match parse_command(&line, dimensions) {
                Ok(command) => return Ok(command),
                Err(err) => self.say(format!("Invalid target: {}", err))?,
            }
        }
    }
}
