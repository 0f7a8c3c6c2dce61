use super::shell_states::ShellState;
use crate::errors::AeroErrors;
use crate::models::airfoil::AirfoilProperties;
use crate::models::performance::PerformancePoint;
use crate::physics::environment::Environment;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "Enter velocity to test (or press Enter to exit): ";
pub const EXIT_MESSAGE: &str = "Exiting the program.";
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Please enter a number or press Enter to exit.";

/// Removes `_` digit separators (`1_000`). Input with a misplaced separator
/// is returned untouched so that it fails to parse.
fn strip_digit_separators(input: &str) -> Cow<'_, str> {
    if !input.contains('_') {
        return Cow::Borrowed(input);
    }

    let chars: Vec<char> = input.chars().collect();
    let between_digits = chars.iter().enumerate().all(|(i, &c)| {
        c != '_'
            || (i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_ascii_digit()
                && chars[i + 1].is_ascii_digit())
    });

    if between_digits {
        Cow::Owned(chars.into_iter().filter(|&c| c != '_').collect())
    } else {
        Cow::Borrowed(input)
    }
}

/// Parses a velocity, ignoring surrounding whitespace.
pub fn parse_velocity(input: &str) -> Result<f64, AeroErrors> {
    strip_digit_separators(input.trim())
        .parse::<f64>()
        .map_err(|source| AeroErrors::InvalidVelocity {
            input: input.to_string(),
            source,
        })
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Read-eval-print loop answering single velocity queries.
pub struct ShellFSM<'a, T: AirfoilProperties> {
    current_state: ShellState,
    airfoil: &'a T,
    environment: Environment,
    queries_answered: usize,
}

impl<'a, T: AirfoilProperties> ShellFSM<'a, T> {
    pub fn new(airfoil: &'a T, environment: Environment) -> Self {
        Self {
            current_state: ShellState::AwaitingInput,
            airfoil,
            environment,
            queries_answered: 0,
        }
    }

    pub fn get_current_state(&self) -> ShellState {
        self.current_state
    }

    pub fn get_queries_answered(&self) -> usize {
        self.queries_answered
    }

    fn transition_to(&mut self, new_state: ShellState) {
        if self.current_state != new_state {
            debug!(
                "Shell transition after {} queries: {} -> {}",
                self.queries_answered, self.current_state, new_state
            );
            self.current_state = new_state;
        }
    }

    /// Handles one line of input with its terminator removed. `None` marks
    /// the end of the input stream.
    pub fn evaluate_input<W: Write>(
        &mut self,
        line: Option<&str>,
        output: &mut W,
    ) -> Result<(), AeroErrors> {
        match self.current_state {
            ShellState::AwaitingInput => self.evaluate_awaiting_input(line, output),
            ShellState::Terminated => Ok(()),
        }
    }

    fn evaluate_awaiting_input<W: Write>(
        &mut self,
        line: Option<&str>,
        output: &mut W,
    ) -> Result<(), AeroErrors> {
        let line = match line {
            Some(line) if !line.is_empty() => line,
            _ => {
                writeln!(output, "{}", EXIT_MESSAGE)?;
                self.transition_to(ShellState::Terminated);
                return Ok(());
            }
        };

        match parse_velocity(line) {
            Ok(velocity) => {
                let point = PerformancePoint::compute(self.airfoil, &self.environment, velocity);
                writeln!(output, "\n{}\n", point)?;
                self.queries_answered += 1;
            }
            Err(e) => {
                debug!("Rejected shell input: {}", e);
                writeln!(output, "{}", INVALID_INPUT_MESSAGE)?;
            }
        }
        Ok(())
    }

    /// Prompts and evaluates lines from `input` until the shell terminates.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<(), AeroErrors> {
        let mut buffer = Vec::new();

        while self.current_state == ShellState::AwaitingInput {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buffer.clear();
            // Undecodable bytes become U+FFFD and are rejected by the parser
            let line = match input.read_until(b'\n', &mut buffer)? {
                0 => None,
                _ => Some(String::from_utf8_lossy(strip_line_terminator(&buffer))),
            };
            self.evaluate_input(line.as_deref(), output)?;
        }
        Ok(())
    }
}
