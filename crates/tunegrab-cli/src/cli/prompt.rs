//! Line-based stdin prompts for the interactive surfaces.

use anyhow::{Context, Result};
use std::io::{self, Write};

pub fn line(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}

/// Only a literal `y`/`Y` counts as yes.
pub fn yes_no(message: &str) -> Result<bool> {
    Ok(line(message)?.eq_ignore_ascii_case("y"))
}

pub fn positive_number(message: &str) -> Result<u32> {
    let input = line(message)?;
    input
        .parse()
        .with_context(|| format!("expected a positive number, got '{input}'"))
}
