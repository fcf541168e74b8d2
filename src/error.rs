//! Errors surfaced by the command-line front end.
//!
//! Rendering itself cannot fail; only input, output and flag parsing can.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read message from stdin: {0}")]
    ReadStdin(#[source] io::Error),
    #[error("Failed to write greeting to stdout: {0}")]
    WriteStdout(#[source] io::Error),
    #[error("Invalid max length '{0}': expected a positive integer")]
    InvalidMaxLength(String),
}

/// Parse a `--max-length` value, rejecting zero and non-numbers.
pub fn parse_max_length(value: &str) -> Result<usize, CliError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidMaxLength(value.to_string())),
    }
}
