use std::{io, num::ParseFloatError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AeroErrors {
    #[error("invalid velocity {input:?}: {source}")]
    InvalidVelocity {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("{series} has {found} samples, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("chart rendering failed: {0}")]
    Plot(String),
    #[error("could not display chart: {0}")]
    Display(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AeroErrors {
    /// Fails with `LengthMismatch` unless `found == expected`.
    pub fn check_length(series: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(AeroErrors::LengthMismatch {
                series,
                expected,
                found,
            })
        }
    }
}
