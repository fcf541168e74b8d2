//! CLI entry point for `greggsay`.

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use greggsay::{RenderOptions, render, strip_styles};

mod error;
mod logging;

use crate::error::{CliError, parse_max_length};

#[derive(Parser, Debug)]
#[command(
    name = "greggsay",
    author,
    version,
    about = "Tell Gregg what to say",
    long_about = "Tell Gregg what to say.\n\nThe message can be passed as arguments or piped in on stdin.",
    after_long_help = usage_examples()
)]
struct Cli {
    /// Message for Gregg to say (read from stdin when omitted)
    #[arg(value_name = "MESSAGE")]
    message: Vec<String>,

    /// Wrap the bubble at this many columns (widened to fit the longest word)
    #[arg(
        short,
        long = "max-length",
        visible_alias = "maxLength",
        value_name = "N",
        env = "GREGGSAY_MAX_LENGTH",
        value_parser = parse_max_length
    )]
    max_length: Option<usize>,

    /// Print without color or style sequences
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::set_verbose(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let message = read_message(&cli.message).context("Failed to get a message for Gregg")?;
    let options = RenderOptions {
        max_length: cli.max_length,
    };
    let mut greeting = render(message.as_deref(), &options);
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        logging::info("Color disabled; stripping style sequences");
        greeting = strip_styles(&greeting);
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(greeting.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(CliError::WriteStdout)?;
    Ok(())
}

/// Positional words win; otherwise piped stdin; otherwise nothing.
fn read_message(words: &[String]) -> Result<Option<String>, CliError> {
    if !words.is_empty() {
        return Ok(Some(words.join(" ")));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        logging::info("No message given; using the placeholder greeting");
        return Ok(None);
    }

    let mut input = String::new();
    stdin
        .lock()
        .read_to_string(&mut input)
        .map_err(CliError::ReadStdin)?;
    if input.trim().is_empty() {
        logging::warn("stdin was empty; using the placeholder greeting");
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\n', '\r']).to_string()))
}

fn usage_examples() -> String {
    let mut example = render(Some("I like turtles."), &RenderOptions::default());
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        example = strip_styles(&example);
    }
    [
        format!("{}", "Usage".bold()),
        "  greggsay <string>".to_string(),
        "  greggsay <string> --max-length 8".to_string(),
        "  echo <string> | greggsay".to_string(),
        String::new(),
        format!("{}", "Example".bold()),
        "  greggsay \"I like turtles.\"".to_string(),
        example,
    ]
    .join("\n")
}
